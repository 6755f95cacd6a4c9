//! Validated duty updates.
//!
//! [`set_duty`] is the only path external commands take to change a threshold.
//! It checks the value with a [`RangeCheck`] and either writes it or leaves the
//! channel untouched and reports [`Error::DutyRejected`].
//!
//! # Range check
//!
//! The default, [`RangeCheck::ByteWise`], compares the high and low bytes of the
//! value separately against the bytes of `min_ticks` and `max_ticks`, and rejects
//! only when *both* bytes are below the minimum's or *both* are above the
//! maximum's. With the 2000/4000 tick window this lets some out-of-window values
//! through (1000 = `0x03E8` passes because `0xE8 >= 0xD0`) and stops others
//! (0 and 4272 = `0x10B0`). [`RangeCheck::Inclusive`] is the plain
//! `min_ticks..=max_ticks` check and must be chosen explicitly.

use crate::channel::Channel;
use crate::pwm::{CounterUnit, PwmDriver};
use crate::timing::DutyRange;
use crate::{Error, Result};

/// How [`set_duty`] decides whether a value is acceptable.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, defmt::Format)]
pub enum RangeCheck {
    /// Per-byte comparison against the range bounds (see the [module docs](self)).
    #[default]
    ByteWise,
    /// `min_ticks <= value <= max_ticks`.
    Inclusive,
}

impl RangeCheck {
    /// Whether `value` passes this check for `range`.
    ///
    /// ```rust
    /// use esc_envoy::duty::RangeCheck;
    /// use esc_envoy::timing::DutyRange;
    ///
    /// let range = DutyRange::ESC_50HZ;
    /// assert!(RangeCheck::ByteWise.accepts(range, 1_000));
    /// assert!(!RangeCheck::Inclusive.accepts(range, 1_000));
    /// assert!(!RangeCheck::ByteWise.accepts(range, 0));
    /// ```
    #[must_use]
    pub const fn accepts(self, range: DutyRange, value: u16) -> bool {
        match self {
            Self::ByteWise => {
                let [value_low, value_high] = value.to_le_bytes();
                let [min_low, min_high] = range.min_ticks().to_le_bytes();
                let [max_low, max_high] = range.max_ticks().to_le_bytes();
                let below = value_high < min_high && value_low < min_low;
                let above = value_high > max_high && value_low > max_low;
                !(below || above)
            }
            Self::Inclusive => range.contains(value),
        }
    }
}

/// Validate `value` and, if it passes `check`, make it `channel`'s new threshold.
///
/// # Errors
///
/// Returns [`Error::DutyRejected`] when `check` refuses `value`. The channel keeps
/// its previous threshold.
pub fn set_duty<U: CounterUnit>(
    driver: &mut PwmDriver<U>,
    check: RangeCheck,
    channel: Channel,
    value: u16,
) -> Result<()> {
    if !check.accepts(driver.range(), value) {
        #[cfg(not(feature = "host"))]
        defmt::warn!("duty {} on {} rejected ({})", value, channel, check);
        return Err(Error::DutyRejected { value });
    }

    driver.set_channel_duty(channel, value);
    #[cfg(not(feature = "host"))]
    defmt::debug!("duty {} on {}", value, channel);
    Ok(())
}

/// [`set_duty`] for a raw channel index, as decoded from a command stream.
///
/// # Errors
///
/// Returns [`Error::InvalidChannel`] for an index outside `0..=3`, or
/// [`Error::DutyRejected`] as [`set_duty`] does. No threshold changes on error.
pub fn set_duty_raw<U: CounterUnit>(
    driver: &mut PwmDriver<U>,
    check: RangeCheck,
    channel: u8,
    value: u16,
) -> Result<()> {
    let channel = Channel::try_from(channel)?;
    set_duty(driver, check, channel, value)
}
