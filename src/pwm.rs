//! The PWM timer driver: four 50 Hz outputs on two counter units.
//!
//! Each counter unit free-runs from 0 up to `period_ticks - 1` and wraps
//! (edge-aligned). An output is high from the wrap until the count reaches that
//! output's compare threshold, so the threshold *is* the pulse width in ticks.
//!
//! [`PwmDriver`] owns both units and is the only way to change a threshold.
//! The hardware is reached through the [`CounterUnit`] trait:
//!
//! - [`RpCounterUnit`] drives one RP2040 / RP2350 PWM slice (both of its pins).
//! - [`SimCounterUnit`] (feature `host`) simulates a slice for host tests.
//!
//! # Example
//!
//! ```rust,ignore
//! # #![no_std]
//! # #![no_main]
//! # use panic_probe as _;
//! use esc_envoy::channel::Channel;
//! use esc_envoy::pwm::{PwmDriver, RpCounterUnit};
//! use esc_envoy::timing::DutyRange;
//!
//! fn example(p: embassy_rp::Peripherals) {
//!     let mut driver = PwmDriver::initialize(
//!         RpCounterUnit::new(p.PWM_SLICE0, p.PIN_0, p.PIN_1),
//!         RpCounterUnit::new(p.PWM_SLICE1, p.PIN_2, p.PIN_3),
//!         DutyRange::ESC_50HZ,
//!     );
//!     driver.set_channel_duty(Channel::Ch2, 3_000); // 1.5 ms pulse on GPIO 2
//! }
//! ```

#[cfg(not(feature = "host"))]
mod rp;
#[cfg(feature = "host")]
mod sim;

#[cfg(not(feature = "host"))]
pub use rp::RpCounterUnit;
#[cfg(feature = "host")]
pub use sim::SimCounterUnit;

use crate::channel::{Channel, CompareOutput, Unit};
use crate::timing::DutyRange;

/// One hardware counter with two compare outputs.
///
/// Implementations must make [`set_compare`](Self::set_compare) atomic with respect
/// to the running counter: the new threshold takes effect whole, no later than the
/// next wrap.
pub trait CounterUnit {
    /// Program an edge-aligned carrier of `period_ticks`, zero both compare
    /// thresholds, reset the count to 0, and leave the counter stopped with both
    /// pins already driven as outputs.
    fn configure(&mut self, period_ticks: u16);

    /// Start counting.
    fn enable(&mut self);

    /// Set the compare threshold of one output.
    fn set_compare(&mut self, output: CompareOutput, ticks: u16);

    /// Threshold most recently written to one output.
    fn compare(&self, output: CompareOutput) -> u16;
}

/// Four-channel 50 Hz PWM driver.
///
/// Created once at startup with [`initialize`](Self::initialize); every channel
/// starts at duty 0 (output held low).
pub struct PwmDriver<U: CounterUnit> {
    unit0: U,
    unit1: U,
    range: DutyRange,
}

impl<U: CounterUnit> PwmDriver<U> {
    /// Configure both counter units and start them.
    ///
    /// Both units get their pins and carrier configured before either one is
    /// enabled, so no output runs while another is still being set up.
    pub fn initialize(mut unit0: U, mut unit1: U, range: DutyRange) -> Self {
        unit0.configure(range.period_ticks());
        unit1.configure(range.period_ticks());
        unit0.enable();
        unit1.enable();

        #[cfg(not(feature = "host"))]
        defmt::info!(
            "pwm driver started: period={} min={} max={} ticks",
            range.period_ticks(),
            range.min_ticks(),
            range.max_ticks()
        );

        Self {
            unit0,
            unit1,
            range,
        }
    }

    /// Set the pulse width of one channel, in ticks.
    ///
    /// No range check happens here; see [`duty`](crate::duty) for validated updates.
    pub fn set_channel_duty(&mut self, channel: Channel, ticks: u16) {
        let route = channel.route();
        self.unit_mut(route.unit).set_compare(route.output, ticks);
    }

    /// Current pulse width of one channel, in ticks.
    #[must_use]
    pub fn channel_duty(&self, channel: Channel) -> u16 {
        let route = channel.route();
        self.unit(route.unit).compare(route.output)
    }

    /// Current pulse widths of all four channels, indexed by channel.
    #[must_use]
    pub fn duties(&self) -> [u16; Channel::COUNT] {
        Channel::ALL.map(|channel| self.channel_duty(channel))
    }

    /// Return every channel to duty 0, holding all outputs low.
    pub fn stop_all(&mut self) {
        for channel in Channel::ALL {
            self.set_channel_duty(channel, 0);
        }
    }

    /// The duty range this driver was started with.
    #[must_use]
    pub const fn range(&self) -> DutyRange {
        self.range
    }

    /// Read-only access to one counter unit.
    #[must_use]
    pub const fn unit(&self, unit: Unit) -> &U {
        match unit {
            Unit::U0 => &self.unit0,
            Unit::U1 => &self.unit1,
        }
    }

    const fn unit_mut(&mut self, unit: Unit) -> &mut U {
        match unit {
            Unit::U0 => &mut self.unit0,
            Unit::U1 => &mut self.unit1,
        }
    }
}
