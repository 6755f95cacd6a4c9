//! Decoded ESC commands and their dispatch.
//!
//! Whatever carries commands to the board (serial, radio, a test) decodes them
//! into [`Command`] values; [`Command::apply`] then routes each one to the duty
//! handler or the arming sequencer. Commands hold raw channel numbers so a noisy
//! stream can be passed through as-is and rejected here.

use embedded_hal::delay::DelayNs;

use crate::Result;
use crate::arming::arm_raw;
use crate::duty::{RangeCheck, set_duty_raw};
use crate::pwm::{CounterUnit, PwmDriver};

/// One decoded command.
#[derive(Clone, Copy, Debug, Eq, PartialEq, defmt::Format)]
pub enum Command {
    /// Set one channel's pulse width, in ticks, subject to the range check.
    SetDuty {
        /// Channel index, valid in `0..=3`.
        channel: u8,
        /// Pulse width in ticks.
        value: u16,
    },
    /// Run the arming sequence on one channel (`0..=3`) or all (`4`).
    ArmChannel {
        /// Raw selector.
        selector: u8,
    },
    /// Drop every channel back to duty 0.
    StopAll,
}

impl Command {
    /// Build a [`Command::SetDuty`] from the value's low and high bytes.
    ///
    /// ```rust
    /// use esc_envoy::command::Command;
    ///
    /// assert_eq!(
    ///     Command::set_duty_from_bytes(0, 0xB8, 0x0B),
    ///     Command::SetDuty { channel: 0, value: 3_000 }
    /// );
    /// ```
    #[must_use]
    pub const fn set_duty_from_bytes(channel: u8, low: u8, high: u8) -> Self {
        Self::SetDuty {
            channel,
            value: u16::from_le_bytes([low, high]),
        }
    }

    /// Build a [`Command::ArmChannel`] from a raw selector.
    #[must_use]
    pub const fn arm_from_raw(selector: u8) -> Self {
        Self::ArmChannel { selector }
    }

    /// Apply this command to `driver`.
    ///
    /// Arming blocks on `delay` for the full hold time before returning.
    ///
    /// # Errors
    ///
    /// Returns the error of the handler the command was routed to. A failed
    /// command changes no threshold; the caller may drop it and continue.
    pub fn apply<U: CounterUnit, D: DelayNs>(
        self,
        driver: &mut PwmDriver<U>,
        check: RangeCheck,
        delay: &mut D,
    ) -> Result<()> {
        match self {
            Self::SetDuty { channel, value } => set_duty_raw(driver, check, channel, value),
            Self::ArmChannel { selector } => arm_raw(driver, selector, delay),
            Self::StopAll => {
                driver.stop_all();
                Ok(())
            }
        }
    }
}
