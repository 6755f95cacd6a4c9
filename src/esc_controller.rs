//! A device abstraction that owns the PWM driver in its own task and applies
//! ESC commands from a queue.
//!
//! Commands are applied one at a time, strictly in the order they were sent.
//! An arming command blocks the executor for the whole hold (see
//! [`arming`](crate::arming)), so commands sent meanwhile wait in the queue and
//! are applied afterwards. Rejected commands are logged and dropped; the
//! outputs keep their last good pulse widths.
//!
//! # Example
//!
//! ```rust,no_run
//! # #![no_std]
//! # #![no_main]
//! # use panic_probe as _;
//! use core::convert::Infallible;
//! use esc_envoy::Result;
//! use esc_envoy::channel::{Channel, ChannelSelector};
//! use esc_envoy::duty::RangeCheck;
//! use esc_envoy::esc_controller::{EscController, EscControllerStatic};
//! use esc_envoy::pwm::{PwmDriver, RpCounterUnit};
//! use esc_envoy::timing::DutyRange;
//!
//! static ESC_CONTROLLER_STATIC: EscControllerStatic = EscController::new_static();
//!
//! # #[embassy_executor::main]
//! # async fn main(spawner: embassy_executor::Spawner) -> ! {
//! #     let err = example(spawner).await.unwrap_err();
//! #     core::panic!("{err}");
//! # }
//! async fn example(spawner: embassy_executor::Spawner) -> Result<Infallible> {
//!     let p = embassy_rp::init(Default::default());
//!     let driver = PwmDriver::initialize(
//!         RpCounterUnit::new(p.PWM_SLICE0, p.PIN_0, p.PIN_1),
//!         RpCounterUnit::new(p.PWM_SLICE1, p.PIN_2, p.PIN_3),
//!         DutyRange::ESC_50HZ,
//!     );
//!     let esc = EscController::new(
//!         &ESC_CONTROLLER_STATIC,
//!         driver,
//!         RangeCheck::ByteWise,
//!         spawner,
//!     )?;
//!
//!     esc.arm(ChannelSelector::All).await; // applied after ~10 s of idle pulse
//!     esc.set_duty(Channel::Ch0, 3_000).await; // queued behind the arming
//!
//!     core::future::pending().await // run forever
//! }
//! ```

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel as Queue;
use embassy_time::Delay;

use crate::channel::{Channel, ChannelSelector};
use crate::command::Command;
use crate::duty::RangeCheck;
use crate::pwm::{PwmDriver, RpCounterUnit};
use crate::{Error, Result};

/// Commands that can wait for the device task, e.g. during an arming hold.
pub const COMMAND_QUEUE_DEPTH: usize = 8;

/// Static resources for [`EscController`].
pub struct EscControllerStatic {
    commands: Queue<CriticalSectionRawMutex, Command, COMMAND_QUEUE_DEPTH>,
}

impl EscControllerStatic {
    /// Create static resources for the ESC controller.
    #[must_use]
    pub const fn new_static() -> Self {
        Self {
            commands: Queue::new(),
        }
    }

    async fn send(&self, command: Command) {
        self.commands.send(command).await;
    }

    async fn receive(&self) -> Command {
        self.commands.receive().await
    }
}

/// Handle for queueing commands to the ESC device task.
///
/// See the [module documentation](mod@crate::esc_controller) for usage.
#[derive(Clone, Copy)]
pub struct EscController {
    esc_controller_static: &'static EscControllerStatic,
}

impl EscController {
    /// Create static resources for an ESC controller.
    #[must_use]
    pub const fn new_static() -> EscControllerStatic {
        EscControllerStatic::new_static()
    }

    /// Hand `driver` to a new device task and return a handle to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TaskSpawn`] if the device task cannot be spawned (for
    /// example, because this static was already used).
    pub fn new(
        esc_controller_static: &'static EscControllerStatic,
        driver: PwmDriver<RpCounterUnit<'static>>,
        check: RangeCheck,
        spawner: Spawner,
    ) -> Result<Self> {
        let token = esc_controller_task(esc_controller_static, driver, check);
        spawner.spawn(token).map_err(Error::TaskSpawn)?;
        Ok(Self {
            esc_controller_static,
        })
    }

    /// Queue a decoded command. Waits only if the queue is full.
    pub async fn send(&self, command: Command) {
        self.esc_controller_static.send(command).await;
    }

    /// Queue a range-checked duty update for one channel.
    pub async fn set_duty(&self, channel: Channel, value: u16) {
        self.send(Command::SetDuty {
            channel: channel.raw(),
            value,
        })
        .await;
    }

    /// Queue a duty update whose value arrived split into low and high bytes.
    pub async fn set_duty_from_bytes(&self, channel: Channel, low: u8, high: u8) {
        self.send(Command::set_duty_from_bytes(channel.raw(), low, high))
            .await;
    }

    /// Queue the arming sequence for one or all channels.
    pub async fn arm(&self, selector: impl Into<ChannelSelector>) {
        self.send(Command::arm_from_raw(selector.into().raw())).await;
    }

    /// Queue a return of every channel to duty 0.
    pub async fn stop_all(&self) {
        self.send(Command::StopAll).await;
    }
}

#[embassy_executor::task]
async fn esc_controller_task(
    esc_controller_static: &'static EscControllerStatic,
    driver: PwmDriver<RpCounterUnit<'static>>,
    check: RangeCheck,
) -> ! {
    device_loop(esc_controller_static, driver, check).await
}

async fn device_loop(
    esc_controller_static: &'static EscControllerStatic,
    mut driver: PwmDriver<RpCounterUnit<'static>>,
    check: RangeCheck,
) -> ! {
    info!("esc_controller: task started ({})", check);
    // Blocking delay: arming must not yield to the executor.
    let mut delay = Delay;
    loop {
        let command = esc_controller_static.receive().await;
        if let Err(err) = command.apply(&mut driver, check, &mut delay) {
            warn!("esc_controller: dropped {}: {}", command, err);
        }
    }
}
