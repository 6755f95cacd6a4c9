use std::sync::atomic::{AtomicU64, Ordering};

use super::{CounterUnit, PwmDriver};
use crate::channel::{Channel, CompareOutput};
use crate::timing::DutyRange;

// Shared across units so configure/enable order can be compared between them.
static SEQUENCE: AtomicU64 = AtomicU64::new(0);

fn next_sequence() -> u64 {
    SEQUENCE.fetch_add(1, Ordering::SeqCst)
}

/// Host simulation of one counter unit with two compare outputs.
///
/// Mirrors the RP2040 slice behavior the driver relies on: edge-aligned counting
/// from 0 to `period_ticks - 1`, outputs high while the count is below the
/// active threshold, and compare writes latched only on wrap while running.
#[derive(Debug, Default)]
pub struct SimCounterUnit {
    top: u16,
    count: u16,
    enabled: bool,
    written: [u16; 2],
    active: [u16; 2],
    configured_seq: Option<u64>,
    enabled_seq: Option<u64>,
}

impl SimCounterUnit {
    /// A stopped, unconfigured unit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the counter by `ticks`. A stopped unit does not count.
    pub fn advance(&mut self, ticks: u32) {
        if !self.enabled {
            return;
        }
        for _ in 0..ticks {
            if self.count >= self.top {
                self.count = 0;
                self.active = self.written;
            } else {
                self.count = self.count.saturating_add(1);
            }
        }
    }

    /// Current count.
    #[must_use]
    pub const fn count(&self) -> u16 {
        self.count
    }

    /// Whether the unit is counting.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Level of one output pin at the current count.
    #[must_use]
    pub fn is_high(&self, output: CompareOutput) -> bool {
        self.enabled && self.count < self.active[slot(output)]
    }

    /// Threshold the counter is comparing against right now.
    #[must_use]
    pub fn active_compare(&self, output: CompareOutput) -> u16 {
        self.active[slot(output)]
    }

    /// Order stamp of the last [`configure`](CounterUnit::configure) call.
    #[must_use]
    pub const fn configured_seq(&self) -> Option<u64> {
        self.configured_seq
    }

    /// Order stamp of the last [`enable`](CounterUnit::enable) call.
    #[must_use]
    pub const fn enabled_seq(&self) -> Option<u64> {
        self.enabled_seq
    }
}

impl CounterUnit for SimCounterUnit {
    fn configure(&mut self, period_ticks: u16) {
        self.top = period_ticks.saturating_sub(1);
        self.count = 0;
        self.enabled = false;
        self.written = [0; 2];
        self.active = [0; 2];
        self.configured_seq = Some(next_sequence());
    }

    fn enable(&mut self) {
        self.enabled = true;
        self.enabled_seq = Some(next_sequence());
    }

    fn set_compare(&mut self, output: CompareOutput, ticks: u16) {
        let slot = slot(output);
        self.written[slot] = ticks;
        if !self.enabled {
            self.active[slot] = ticks;
        }
    }

    fn compare(&self, output: CompareOutput) -> u16 {
        self.written[slot(output)]
    }
}

const fn slot(output: CompareOutput) -> usize {
    match output {
        CompareOutput::A => 0,
        CompareOutput::B => 1,
    }
}

impl PwmDriver<SimCounterUnit> {
    /// Start a driver on two simulated units.
    #[must_use]
    pub fn simulated(range: DutyRange) -> Self {
        Self::initialize(SimCounterUnit::new(), SimCounterUnit::new(), range)
    }

    /// Advance both simulated counters by `ticks`.
    pub fn advance(&mut self, ticks: u32) {
        self.unit0.advance(ticks);
        self.unit1.advance(ticks);
    }

    /// Level of a channel's output pin at the current count.
    #[must_use]
    pub fn is_high(&self, channel: Channel) -> bool {
        let route = channel.route();
        self.unit(route.unit).is_high(route.output)
    }

    /// Count the ticks a channel's output is high over the next full period,
    /// starting from the current count.
    pub fn measure_high_ticks(&mut self, channel: Channel) -> u32 {
        let mut high = 0_u32;
        for _ in 0..self.range.period_ticks() {
            if self.is_high(channel) {
                high = high.saturating_add(1);
            }
            self.advance(1);
        }
        high
    }
}
