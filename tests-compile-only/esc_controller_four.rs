//! Compile-only check: one controller on four ESCs, with the inclusive range check.
#![no_std]
#![no_main]
#![allow(missing_docs)]

use defmt_rtt as _;
use panic_probe as _;

use core::convert::Infallible;
use core::default::Default;
use embassy_executor::Spawner;
use esc_envoy::{
    Result,
    channel::Channel,
    duty::RangeCheck,
    esc_controller::{EscController, EscControllerStatic},
    pwm::{PwmDriver, RpCounterUnit},
    timing::DutyRange,
};

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = example(spawner).await.unwrap_err();
    core::panic!("{err}");
}

async fn example(spawner: Spawner) -> Result<Infallible> {
    static ESC_CONTROLLER_STATIC: EscControllerStatic = EscController::new_static();

    let p = embassy_rp::init(Default::default());
    let esc = EscController::new(
        &ESC_CONTROLLER_STATIC,
        PwmDriver::initialize(
            RpCounterUnit::new(p.PWM_SLICE0, p.PIN_0, p.PIN_1),
            RpCounterUnit::new(p.PWM_SLICE1, p.PIN_2, p.PIN_3),
            DutyRange::ESC_50HZ,
        ),
        RangeCheck::Inclusive,
        spawner,
    )?;

    esc.arm(Channel::Ch3).await;
    esc.set_duty(Channel::Ch3, 4_000).await;
    esc.stop_all().await;

    core::future::pending().await
}
