#![cfg(feature = "host")]
#![allow(missing_docs)]
//! Host-level tests for the duty range invariant and the tick divider.

use esc_envoy::timing::{DutyRange, TICK_HZ, tick_divider};
use fixed::FixedU16;
use fixed::types::extra::U4;

#[test]
fn esc_range_is_fifty_hertz_one_to_two_ms() {
    let range = DutyRange::ESC_50HZ;

    assert_eq!(range.period_ticks(), 40_000);
    assert_eq!(range.min_ticks(), 2_000);
    assert_eq!(range.max_ticks(), 4_000);
    assert_eq!(DutyRange::default(), range);
}

#[test]
fn narrowest_valid_range_is_accepted() {
    let range = DutyRange::new(3, 1, 2);

    assert!(range.contains(1));
    assert!(range.contains(2));
    assert!(!range.contains(0));
}

#[test]
#[should_panic(expected = "min_ticks must be positive")]
fn zero_min_ticks_is_refused() {
    let _range = DutyRange::new(40_000, 0, 4_000);
}

#[test]
#[should_panic(expected = "min_ticks must be less than max_ticks")]
fn min_equal_to_max_is_refused() {
    let _range = DutyRange::new(40_000, 4_000, 4_000);
}

#[test]
#[should_panic(expected = "min_ticks must be less than max_ticks")]
fn min_above_max_is_refused() {
    let _range = DutyRange::new(40_000, 3_000, 2_000);
}

#[test]
#[should_panic(expected = "max_ticks must be less than period_ticks")]
fn max_equal_to_period_is_refused() {
    let _range = DutyRange::new(4_000, 2_000, 4_000);
}

#[test]
#[should_panic(expected = "period_ticks must fit the 16-bit counter")]
fn period_wider_than_counter_is_refused() {
    let _range = DutyRange::new(70_000, 2_000, 4_000);
}

#[test]
fn divider_for_rp2040_clock() {
    let divider = tick_divider(125_000_000);

    assert_eq!(divider, FixedU16::<U4>::from_num(62.5));
    assert_eq!(divider.to_bits(), 1_000);
}

#[test]
fn divider_for_rp2350_clock() {
    assert_eq!(tick_divider(150_000_000), FixedU16::<U4>::from_num(75));
}

#[test]
fn divider_rounds_to_nearest_sixteenth() {
    // 133 MHz / 2 MHz = 66.5 exactly; 133.03 MHz lands between sixteenths.
    assert_eq!(tick_divider(133_000_000).to_bits(), 1_064);
    assert_eq!(tick_divider(133_030_000).to_bits(), 1_064);
    assert_eq!(tick_divider(133_070_000).to_bits(), 1_065);
}

#[test]
fn divider_is_one_at_tick_rate_and_clamps_below() {
    assert_eq!(tick_divider(TICK_HZ), FixedU16::<U4>::from_num(1));
    assert_eq!(tick_divider(1_000_000), FixedU16::<U4>::from_num(1));
    assert_eq!(tick_divider(0), FixedU16::<U4>::from_num(1));
}

#[test]
fn divider_clamps_to_largest_slice_divider() {
    let largest = FixedU16::<U4>::from_bits(0x0FFF);

    assert_eq!(tick_divider(600_000_000), largest);
    assert_eq!(tick_divider(u32::MAX), largest);
}
