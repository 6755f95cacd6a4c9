#![cfg(feature = "host")]
#![allow(missing_docs)]
//! Host rendition of the ramp demo: arm channel 0, sweep it min→max→min.

mod common;

use common::RecordingDelay;
use embedded_hal::delay::DelayNs;
use esc_envoy::channel::Channel;
use esc_envoy::command::Command;
use esc_envoy::duty::RangeCheck;
use esc_envoy::pwm::PwmDriver;
use esc_envoy::timing::DutyRange;

const RANGE: DutyRange = DutyRange::ESC_50HZ;
const STEP_TICKS: u16 = 10;
const STEP_MS: u32 = 100;

fn send_duty(
    driver: &mut PwmDriver<esc_envoy::pwm::SimCounterUnit>,
    delay: &mut RecordingDelay,
    on_time: u16,
) {
    let [low, high] = on_time.to_le_bytes();
    Command::set_duty_from_bytes(0, low, high)
        .apply(driver, RangeCheck::ByteWise, delay)
        .expect("ramp stays in range");
    assert_eq!(driver.channel_duty(Channel::Ch0), on_time);
    delay.delay_ms(STEP_MS);
}

#[test]
fn ramp_up_and_down_on_channel_zero() {
    let mut driver = PwmDriver::simulated(RANGE);
    let mut delay = RecordingDelay::new();

    Command::arm_from_raw(0)
        .apply(&mut driver, RangeCheck::ByteWise, &mut delay)
        .expect("arm channel 0");

    let mut steps = 0_u32;
    let mut peak = 0;
    for on_time in (RANGE.min_ticks()..=RANGE.max_ticks())
        .step_by(usize::from(STEP_TICKS))
    {
        send_duty(&mut driver, &mut delay, on_time);
        peak = peak.max(driver.channel_duty(Channel::Ch0));
        steps += 1;
    }
    for on_time in (RANGE.min_ticks()..=RANGE.max_ticks())
        .rev()
        .step_by(usize::from(STEP_TICKS))
    {
        send_duty(&mut driver, &mut delay, on_time);
        steps += 1;
    }

    // 201 steps each way.
    assert_eq!(steps, 402);
    assert_eq!(peak, 4_000);
    assert_eq!(driver.duties(), [2_000, 0, 0, 0]);
    // One arming hold plus one pause per step.
    assert_eq!(delay.calls(), 1 + 402);
    assert_eq!(delay.elapsed_ms(), 10_000 + 402 * u64::from(STEP_MS));
}
