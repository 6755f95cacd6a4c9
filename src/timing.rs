//! Timing constants for the 50 Hz ESC carrier.
//!
//! All duty values in this crate are counted in timer ticks. One tick is
//! 1 / [`TICK_HZ`] seconds (0.5 µs), so a 20 ms carrier period is 40 000 ticks
//! and the usual 1 ms – 2 ms ESC pulse is 2 000 – 4 000 ticks.

use fixed::FixedU16;
use fixed::types::extra::U4;

/// Counter tick rate the PWM units are divided down to.
pub const TICK_HZ: u32 = 2_000_000;

/// Carrier frequency expected by hobby ESCs.
pub const CARRIER_HZ: u32 = 50;

/// How long the idle pulse is held while an ESC arms, in milliseconds.
pub const ARM_HOLD_MS: u32 = 10_000;

/// Fixed duty configuration: carrier period and the legal pulse window.
///
/// Invariant: `0 < min_ticks < max_ticks < period_ticks`. The constructor panics
/// otherwise, which is a compile error when the range is a `const`.
///
/// ```rust
/// use esc_envoy::timing::DutyRange;
///
/// const RANGE: DutyRange = DutyRange::new(40_000, 2_000, 4_000);
/// assert_eq!(RANGE, DutyRange::ESC_50HZ);
/// assert!(RANGE.contains(3_000));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, defmt::Format)]
pub struct DutyRange {
    period_ticks: u16,
    min_ticks: u16,
    max_ticks: u16,
}

impl DutyRange {
    /// 50 Hz carrier with a 1 ms idle pulse and a 2 ms full-throttle pulse.
    pub const ESC_50HZ: Self = Self::new(TICK_HZ / CARRIER_HZ, 2_000, 4_000);

    /// Create a duty range.
    ///
    /// `period_ticks` is taken as `u32` so the tick arithmetic in
    /// [`ESC_50HZ`](Self::ESC_50HZ) can be written directly; it must still fit a
    /// 16-bit counter.
    ///
    /// # Panics
    ///
    /// Panics unless `0 < min_ticks < max_ticks < period_ticks <= u16::MAX`.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "period_ticks is checked against u16::MAX first"
    )]
    pub const fn new(period_ticks: u32, min_ticks: u16, max_ticks: u16) -> Self {
        assert!(
            period_ticks <= u16::MAX as u32,
            "period_ticks must fit the 16-bit counter"
        );
        assert!(min_ticks > 0, "min_ticks must be positive");
        assert!(
            min_ticks < max_ticks,
            "min_ticks must be less than max_ticks"
        );
        assert!(
            (max_ticks as u32) < period_ticks,
            "max_ticks must be less than period_ticks"
        );
        Self {
            period_ticks: period_ticks as u16,
            min_ticks,
            max_ticks,
        }
    }

    /// Carrier period in ticks.
    #[must_use]
    pub const fn period_ticks(&self) -> u16 {
        self.period_ticks
    }

    /// Idle / arming pulse width in ticks.
    #[must_use]
    pub const fn min_ticks(&self) -> u16 {
        self.min_ticks
    }

    /// Full-throttle pulse width in ticks.
    #[must_use]
    pub const fn max_ticks(&self) -> u16 {
        self.max_ticks
    }

    /// Whether `ticks` lies in `min_ticks..=max_ticks`.
    #[must_use]
    pub const fn contains(&self, ticks: u16) -> bool {
        self.min_ticks <= ticks && ticks <= self.max_ticks
    }
}

impl Default for DutyRange {
    fn default() -> Self {
        Self::ESC_50HZ
    }
}

// Limits of the PWM slice's 8.4 fixed-point clock divider, as raw bits.
const DIVIDER_BITS_MIN: u64 = 1 << 4; // 1.0
const DIVIDER_BITS_MAX: u64 = 0x0FFF; // 255 + 15/16

/// Clock divider that brings `clk_sys_hz` down to [`TICK_HZ`], rounded to the
/// nearest 1/16 and clamped to what the slice divider can hold.
///
/// ```rust
/// use esc_envoy::timing::tick_divider;
///
/// assert_eq!(tick_divider(125_000_000).to_bits(), 1_000); // 62.5
/// assert_eq!(tick_divider(150_000_000).to_bits(), 1_200); // 75.0
/// ```
#[must_use]
pub fn tick_divider(clk_sys_hz: u32) -> FixedU16<U4> {
    let tick_hz = u64::from(TICK_HZ);
    let bits = u64::from(clk_sys_hz)
        .saturating_mul(16)
        .saturating_add(tick_hz / 2)
        / tick_hz;
    #[allow(
        clippy::cast_possible_truncation,
        reason = "clamped to DIVIDER_BITS_MAX, which fits u16"
    )]
    let bits = bits.clamp(DIVIDER_BITS_MIN, DIVIDER_BITS_MAX) as u16;
    FixedU16::from_bits(bits)
}
