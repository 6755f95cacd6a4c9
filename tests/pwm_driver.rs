#![cfg(feature = "host")]
#![allow(missing_docs)]
//! Host-level tests for the PWM driver on simulated counter units.

use esc_envoy::channel::{Channel, CompareOutput, Unit};
use esc_envoy::pwm::PwmDriver;
use esc_envoy::timing::DutyRange;

const RANGE: DutyRange = DutyRange::ESC_50HZ;

#[test]
fn initialize_starts_every_channel_at_zero() {
    let driver = PwmDriver::simulated(RANGE);

    assert_eq!(driver.duties(), [0, 0, 0, 0]);
    assert!(driver.unit(Unit::U0).is_enabled());
    assert!(driver.unit(Unit::U1).is_enabled());
    assert_eq!(driver.unit(Unit::U0).count(), 0);
    assert_eq!(driver.unit(Unit::U1).count(), 0);
}

#[test]
fn initialize_configures_both_units_before_enabling_either() {
    let driver = PwmDriver::simulated(RANGE);
    let unit0 = driver.unit(Unit::U0);
    let unit1 = driver.unit(Unit::U1);

    let last_configured = unit0
        .configured_seq()
        .max(unit1.configured_seq())
        .expect("both units configured");
    let first_enabled = unit0
        .enabled_seq()
        .min(unit1.enabled_seq())
        .expect("both units enabled");

    assert!(last_configured < first_enabled);
}

#[test]
fn zero_duty_keeps_outputs_low() {
    let mut driver = PwmDriver::simulated(RANGE);

    for channel in Channel::ALL {
        assert_eq!(driver.measure_high_ticks(channel), 0);
    }
}

#[test]
fn set_channel_duty_reads_back() {
    let mut driver = PwmDriver::simulated(RANGE);

    driver.set_channel_duty(Channel::Ch0, 2_000);
    driver.set_channel_duty(Channel::Ch1, 2_500);
    driver.set_channel_duty(Channel::Ch2, 3_000);
    driver.set_channel_duty(Channel::Ch3, 4_000);

    assert_eq!(driver.duties(), [2_000, 2_500, 3_000, 4_000]);
    assert_eq!(driver.channel_duty(Channel::Ch2), 3_000);
}

#[test]
fn channels_route_to_expected_unit_outputs() {
    let mut driver = PwmDriver::simulated(RANGE);

    driver.set_channel_duty(Channel::Ch1, 2_100);
    driver.set_channel_duty(Channel::Ch2, 2_200);

    assert_eq!(driver.unit(Unit::U0).active_compare(CompareOutput::B), 0);
    assert_eq!(driver.unit(Unit::U1).active_compare(CompareOutput::A), 0);
    // Writes land at the next wrap.
    driver.advance(u32::from(RANGE.period_ticks()));
    assert_eq!(driver.unit(Unit::U0).active_compare(CompareOutput::B), 2_100);
    assert_eq!(driver.unit(Unit::U1).active_compare(CompareOutput::A), 2_200);
}

#[test]
fn high_time_equals_threshold() {
    let mut driver = PwmDriver::simulated(RANGE);
    driver.set_channel_duty(Channel::Ch0, 3_000);
    driver.set_channel_duty(Channel::Ch3, 2_000);

    // Finish the current period so the new thresholds are latched.
    driver.advance(u32::from(RANGE.period_ticks()));
    assert_eq!(driver.unit(Unit::U0).count(), 0);

    assert_eq!(driver.measure_high_ticks(Channel::Ch0), 3_000);
    assert_eq!(driver.measure_high_ticks(Channel::Ch3), 2_000);
    assert_eq!(driver.measure_high_ticks(Channel::Ch1), 0);
}

#[test]
fn threshold_update_takes_effect_at_next_wrap() {
    let mut driver = PwmDriver::simulated(RANGE);
    driver.set_channel_duty(Channel::Ch0, 2_000);
    driver.advance(u32::from(RANGE.period_ticks()));

    // Mid-period: the counter is past the old threshold, output is low.
    driver.advance(2_500);
    assert!(!driver.is_high(Channel::Ch0));

    driver.set_channel_duty(Channel::Ch0, 3_000);
    assert_eq!(driver.channel_duty(Channel::Ch0), 3_000);
    assert_eq!(driver.unit(Unit::U0).active_compare(CompareOutput::A), 2_000);
    // Raising the threshold mid-period must not re-raise the output this period.
    assert!(!driver.is_high(Channel::Ch0));

    let remaining = u32::from(RANGE.period_ticks()) - 2_500;
    driver.advance(remaining);
    assert_eq!(driver.unit(Unit::U0).count(), 0);
    assert_eq!(driver.unit(Unit::U0).active_compare(CompareOutput::A), 3_000);
    assert_eq!(driver.measure_high_ticks(Channel::Ch0), 3_000);
}

#[test]
fn stop_all_returns_every_channel_to_zero() {
    let mut driver = PwmDriver::simulated(RANGE);
    for channel in Channel::ALL {
        driver.set_channel_duty(channel, 3_000);
    }

    driver.stop_all();

    assert_eq!(driver.duties(), [0, 0, 0, 0]);
}

#[test]
fn channels_are_independent() {
    let mut driver = PwmDriver::simulated(RANGE);
    driver.set_channel_duty(Channel::Ch0, 2_000);
    driver.set_channel_duty(Channel::Ch1, 4_000);

    driver.set_channel_duty(Channel::Ch0, 3_500);

    assert_eq!(driver.duties(), [3_500, 4_000, 0, 0]);
}
