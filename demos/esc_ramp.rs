#![allow(missing_docs)]
#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;

use core::convert::Infallible;
use core::default::Default;
use defmt::info;
use embassy_executor::Spawner;
use embassy_time::Delay;
use embedded_hal::delay::DelayNs;
use esc_envoy::{
    Result,
    command::Command,
    duty::RangeCheck,
    pwm::{PwmDriver, RpCounterUnit},
    timing::DutyRange,
};

// Ramp step in ticks (5 µs) and the pause after each step.
const STEP_TICKS: u16 = 10;
const STEP_MS: u32 = 100;

#[embassy_executor::main]
async fn main(_spawner: Spawner) -> ! {
    let err = esc_ramp_example().unwrap_err();
    core::panic!("{err}");
}

// Arm the ESC on GPIO 0, then sweep it min -> max -> min forever.
fn esc_ramp_example() -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    // GPIO 0/1 are slice 0 outputs A/B; GPIO 2/3 are slice 1 outputs A/B.
    let mut driver = PwmDriver::initialize(
        RpCounterUnit::new(p.PWM_SLICE0, p.PIN_0, p.PIN_1),
        RpCounterUnit::new(p.PWM_SLICE1, p.PIN_2, p.PIN_3),
        DutyRange::ESC_50HZ,
    );
    let range = driver.range();
    let mut delay = Delay;

    Command::arm_from_raw(0)
        .apply(&mut driver, RangeCheck::ByteWise, &mut delay)?;

    loop {
        info!("ramping up");
        for on_time in (range.min_ticks()..=range.max_ticks())
            .step_by(usize::from(STEP_TICKS))
        {
            send_duty(&mut driver, &mut delay, on_time)?;
        }
        info!("ramping down");
        for on_time in (range.min_ticks()..=range.max_ticks())
            .rev()
            .step_by(usize::from(STEP_TICKS))
        {
            send_duty(&mut driver, &mut delay, on_time)?;
        }
    }
}

// The value goes out as two bytes, the way a serial link would carry it.
fn send_duty(
    driver: &mut PwmDriver<RpCounterUnit<'static>>,
    delay: &mut Delay,
    on_time: u16,
) -> Result<()> {
    let [low, high] = on_time.to_le_bytes();
    Command::set_duty_from_bytes(0, low, high)
        .apply(driver, RangeCheck::ByteWise, delay)?;
    delay.delay_ms(STEP_MS);
    Ok(())
}
