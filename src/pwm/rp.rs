use defmt::info;
use embassy_rp::Peri;
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pwm::{ChannelAPin, ChannelBPin, Config, Pwm, Slice};

use super::CounterUnit;
use crate::channel::CompareOutput;
use crate::timing::tick_divider;

/// One RP2040 / RP2350 PWM slice driving both of its pins.
///
/// Output A and output B share the slice counter, so one `RpCounterUnit` carries
/// two ESC channels. The two compare values live in a single 32-bit,
/// double-buffered register that the slice latches on wrap, so a threshold
/// update is never seen half-written by the counter.
pub struct RpCounterUnit<'d> {
    pwm: Pwm<'d>,
    cfg: Config, // Kept so each update re-applies the divider and top intact
}

impl<'d> RpCounterUnit<'d> {
    /// Claim a PWM slice and its A/B pins.
    ///
    /// The pins are switched to PWM function here with the counter stopped and
    /// both compares at 0; nothing is output until
    /// [`PwmDriver::initialize`](super::PwmDriver::initialize) enables the unit.
    #[must_use]
    pub fn new<S: Slice>(
        slice: Peri<'d, S>,
        pin_a: Peri<'d, impl ChannelAPin<S>>,
        pin_b: Peri<'d, impl ChannelBPin<S>>,
    ) -> Self {
        let mut cfg = Config::default();
        cfg.enable = false;
        cfg.compare_a = 0;
        cfg.compare_b = 0;
        cfg.divider = tick_divider(clk_sys_freq());
        let pwm = Pwm::new_output_ab(slice, pin_a, pin_b, cfg.clone());
        Self { pwm, cfg }
    }
}

impl CounterUnit for RpCounterUnit<'_> {
    fn configure(&mut self, period_ticks: u16) {
        self.cfg.top = period_ticks.saturating_sub(1);
        self.cfg.phase_correct = false; // edge-aligned => high from wrap to compare
        self.cfg.invert_a = false;
        self.cfg.invert_b = false;
        self.cfg.compare_a = 0;
        self.cfg.compare_b = 0;
        self.cfg.enable = false;
        self.pwm.set_config(&self.cfg);
        self.pwm.set_counter(0);

        info!(
            "esc pwm clk={}Hz div={} top={}",
            clk_sys_freq(),
            self.cfg.divider.to_bits(),
            self.cfg.top
        );
    }

    fn enable(&mut self) {
        self.cfg.enable = true;
        self.pwm.set_config(&self.cfg);
    }

    // NOTE: only the compare value changes; set_config rewrites it together with
    // the stored divider and top so neither is reset to its default.
    fn set_compare(&mut self, output: CompareOutput, ticks: u16) {
        match output {
            CompareOutput::A => self.cfg.compare_a = ticks,
            CompareOutput::B => self.cfg.compare_b = ticks,
        }
        self.pwm.set_config(&self.cfg);
    }

    fn compare(&self, output: CompareOutput) -> u16 {
        match output {
            CompareOutput::A => self.cfg.compare_a,
            CompareOutput::B => self.cfg.compare_b,
        }
    }
}
