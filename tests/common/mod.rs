//! Helpers shared by the host tests.
#![allow(dead_code, reason = "not every test binary uses every helper")]

use embedded_hal::delay::DelayNs;

const NANOS_PER_MILLI: u64 = 1_000_000;

/// A `DelayNs` that returns immediately and records how long it was asked to wait.
#[derive(Debug, Default)]
pub struct RecordingDelay {
    elapsed_ns: u64,
    calls: usize,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ns / NANOS_PER_MILLI
    }

    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += u64::from(ns);
        self.calls += 1;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.elapsed_ns += u64::from(ms) * NANOS_PER_MILLI;
        self.calls += 1;
    }
}
