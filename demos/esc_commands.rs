#![allow(missing_docs)]
#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;

use core::convert::Infallible;
use core::default::Default;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use esc_envoy::{
    Result,
    channel::{Channel, ChannelSelector},
    command::Command,
    duty::RangeCheck,
    esc_controller::{EscController, EscControllerStatic},
    pwm::{PwmDriver, RpCounterUnit},
    timing::DutyRange,
};

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = esc_commands_example(spawner).await.unwrap_err();
    core::panic!("{err}");
}

async fn esc_commands_example(spawner: Spawner) -> Result<Infallible> {
    static ESC_CONTROLLER_STATIC: EscControllerStatic = EscController::new_static();

    let p = embassy_rp::init(Default::default());
    let driver = PwmDriver::initialize(
        RpCounterUnit::new(p.PWM_SLICE0, p.PIN_0, p.PIN_1),
        RpCounterUnit::new(p.PWM_SLICE1, p.PIN_2, p.PIN_3),
        DutyRange::ESC_50HZ,
    );
    let esc = EscController::new(
        &ESC_CONTROLLER_STATIC,
        driver,
        RangeCheck::ByteWise,
        spawner,
    )?;

    // All four ESCs see 1 ms pulses for 10 s; the next commands wait in the queue.
    esc.arm(ChannelSelector::All).await;
    esc.set_duty(Channel::Ch0, 3_000).await; // 1.5 ms
    esc.set_duty(Channel::Ch1, 2_500).await;

    // Raw commands, as they would arrive off a link. Channel 9 and 0x10B0 get
    // logged and dropped by the device task.
    esc.set_duty_from_bytes(Channel::Ch2, 0x28, 0x0A).await; // 2600
    esc.send(Command::SetDuty {
        channel: 9,
        value: 3_000,
    })
    .await;
    esc.send(Command::set_duty_from_bytes(3, 0xB0, 0x10)).await;

    Timer::after(Duration::from_secs(15)).await;
    esc.stop_all().await;

    core::future::pending().await // run forever
}
