//! Crate-wide error type.
//!
//! Nothing in this crate treats an [`Error`] as fatal. The ESC controller task
//! logs it and keeps producing the last good PWM output.

#[cfg(not(feature = "host"))]
use embassy_executor::SpawnError;

/// Errors reported by ESC operations.
#[derive(derive_more::Debug, derive_more::Display, derive_more::Error, defmt::Format)]
pub enum Error {
    /// A raw channel index outside `0..=3`.
    #[display("invalid channel index {_0}")]
    InvalidChannel(#[error(not(source))] u8),

    /// A raw arming selector outside `0..=4` (`4` selects all channels).
    #[display("invalid arming selector {_0}")]
    InvalidSelector(#[error(not(source))] u8),

    /// The duty range check refused the value; the threshold was left unchanged.
    #[display("duty value {value} rejected by range check")]
    DutyRejected {
        /// Requested duty in timer ticks.
        value: u16,
    },

    /// The device task could not be spawned.
    #[cfg(not(feature = "host"))]
    #[display("task spawn failed: {_0:?}")]
    TaskSpawn(#[error(not(source))] SpawnError),
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
