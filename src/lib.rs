//! Drive up to four hobby ESCs (electronic speed controllers) from a Pico 1 or 2.
//!
//! Four independent 50 Hz PWM outputs come from two hardware PWM slices. Each
//! output's pulse width is set in timer ticks, checked against a fixed duty range,
//! and every ESC can be put through its power-on arming sequence.
//!
//! - [`timing`]: carrier period, pulse window, tick rate, arming hold.
//! - [`pwm`]: [`PwmDriver`](pwm::PwmDriver), the four outputs on two counter units.
//! - [`duty`]: validated duty updates.
//! - [`arming`]: the blocking arming sequence.
//! - [`command`]: decoded commands and their dispatch.
//! - `esc_controller`: an embassy task that applies queued commands in order.
//!
//! # Glossary
//!
//! - **ESC**: electronic speed controller, a motor driver that sets rotor speed from a PWM input.
//! - **Tick**: one count of the PWM counter, 0.5 µs here. Periods and duties are in ticks.
//! - **Duty / threshold**: how many ticks per period an output is held high.
//! - **Carrier period**: the 20 ms (50 Hz) repetition interval of every output.
//! - **Arming**: holding the idle pulse long enough for an ESC to accept throttle.
//! - **PWM ([Pulse Width Modulation](https://en.wikipedia.org/wiki/Pulse-width_modulation)) Slices:** Both Pico 1 and 2 have 8 slices (& 16 channels). These "slices"
//!   are unrelated to Rust slices.
#![cfg_attr(not(feature = "host"), no_std)]
#![cfg_attr(not(feature = "host"), no_main)]

// Compile-time checks: exactly one board must be selected (unless testing with host feature)
#[cfg(all(not(any(feature = "pico1", feature = "pico2")), not(feature = "host")))]
compile_error!("Must enable exactly one board feature: 'pico1' or 'pico2'");

#[cfg(all(feature = "pico1", feature = "pico2"))]
compile_error!("Cannot enable both 'pico1' and 'pico2' features simultaneously");

// Compile-time check: an architecture must be selected (unless testing with host feature)
#[cfg(all(not(feature = "arm"), not(feature = "host")))]
compile_error!("Must enable the architecture feature 'arm'");

pub mod arming;
pub mod channel;
pub mod command;
pub mod duty;
mod error;
// Requires embassy_rp and is excluded when testing on host
#[cfg(not(feature = "host"))]
pub mod esc_controller;
pub mod pwm;
pub mod timing;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};

// RP2350 boot ROM looks for this block before starting the image.
#[cfg(all(feature = "pico2", not(feature = "host")))]
#[expect(
    unsafe_code,
    reason = "link_section places the image definition for the boot ROM"
)]
#[unsafe(link_section = ".start_block")]
#[used]
static IMAGE_DEF: embassy_rp::block::ImageDef = embassy_rp::block::ImageDef::secure_exe();
