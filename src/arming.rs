//! The ESC arming sequence.
//!
//! An ESC powers up expecting to see its idle pulse, uninterrupted, for a while
//! before it will accept throttle. [`arm`] writes `min_ticks` to the selected
//! channel(s) and then blocks for [`ARM_HOLD_MS`]. During that hold the caller
//! does nothing else: on the Pico, pass [`embassy_time::Delay`], which spins, so
//! no other task runs and no other command is applied until the hold ends.
//!
//! ```rust,ignore
//! # #![no_std]
//! # #![no_main]
//! # use panic_probe as _;
//! use esc_envoy::arming::arm;
//! use esc_envoy::channel::ChannelSelector;
//! use esc_envoy::pwm::{PwmDriver, RpCounterUnit};
//!
//! fn example<'d>(driver: &mut PwmDriver<RpCounterUnit<'d>>) {
//!     arm(driver, ChannelSelector::All, &mut embassy_time::Delay); // returns after ~10 s
//! }
//! ```

use embedded_hal::delay::DelayNs;

use crate::Result;
use crate::channel::{Channel, ChannelSelector};
use crate::pwm::{CounterUnit, PwmDriver};
use crate::timing::ARM_HOLD_MS;

/// Put the selected channel(s) at the idle pulse and hold for [`ARM_HOLD_MS`].
///
/// The threshold is written directly, bypassing the duty range check. Channels
/// not addressed by `selector` are left alone. The hold cannot be cut short.
pub fn arm<U: CounterUnit, D: DelayNs>(
    driver: &mut PwmDriver<U>,
    selector: ChannelSelector,
    delay: &mut D,
) {
    let idle = driver.range().min_ticks();
    for channel in Channel::ALL {
        if selector.includes(channel) {
            driver.set_channel_duty(channel, idle);
        }
    }

    #[cfg(not(feature = "host"))]
    defmt::info!(
        "arming {}: holding {} ticks for {} ms",
        selector,
        idle,
        ARM_HOLD_MS
    );
    delay.delay_ms(ARM_HOLD_MS);
    #[cfg(not(feature = "host"))]
    defmt::info!("arming {}: done", selector);
}

/// [`arm`] for a raw selector: `0..=3` is one channel, `4` is all of them.
///
/// # Errors
///
/// Returns [`Error::InvalidSelector`](crate::Error::InvalidSelector) for any other
/// value, without touching a threshold and without waiting.
pub fn arm_raw<U: CounterUnit, D: DelayNs>(
    driver: &mut PwmDriver<U>,
    selector: u8,
    delay: &mut D,
) -> Result<()> {
    let selector = ChannelSelector::try_from(selector)?;
    arm(driver, selector, delay);
    Ok(())
}
