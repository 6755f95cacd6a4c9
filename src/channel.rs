//! The four addressable ESC outputs and how they map onto PWM hardware.
//!
//! Two counter units drive the four outputs: channels 0 and 1 share unit 0,
//! channels 2 and 3 share unit 1. See [`CHANNEL_MAP`].

use crate::{Error, Result};

/// One of the four ESC outputs.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, defmt::Format)]
pub enum Channel {
    /// Channel 0 (unit 0, output A).
    Ch0,
    /// Channel 1 (unit 0, output B).
    Ch1,
    /// Channel 2 (unit 1, output A).
    Ch2,
    /// Channel 3 (unit 1, output B).
    Ch3,
}

impl Channel {
    /// Number of channels.
    pub const COUNT: usize = 4;

    /// All channels in index order.
    pub const ALL: [Self; Self::COUNT] = [Self::Ch0, Self::Ch1, Self::Ch2, Self::Ch3];

    /// Channel number as carried in a raw command.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// Counter unit and compare output that produce this channel.
    #[must_use]
    pub const fn route(self) -> Route {
        match self {
            Self::Ch0 => CHANNEL_MAP[0],
            Self::Ch1 => CHANNEL_MAP[1],
            Self::Ch2 => CHANNEL_MAP[2],
            Self::Ch3 => CHANNEL_MAP[3],
        }
    }
}

impl TryFrom<u8> for Channel {
    type Error = Error;

    fn try_from(index: u8) -> Result<Self> {
        match index {
            0 => Ok(Self::Ch0),
            1 => Ok(Self::Ch1),
            2 => Ok(Self::Ch2),
            3 => Ok(Self::Ch3),
            _ => Err(Error::InvalidChannel(index)),
        }
    }
}

/// Which of the two counter units a channel lives on.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, defmt::Format)]
pub enum Unit {
    /// First counter unit.
    U0,
    /// Second counter unit.
    U1,
}

/// Compare output within a counter unit.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, defmt::Format)]
pub enum CompareOutput {
    /// Output A.
    A,
    /// Output B.
    B,
}

/// Hardware location of a channel.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, defmt::Format)]
pub struct Route {
    /// Counter unit.
    pub unit: Unit,
    /// Compare output on that unit.
    pub output: CompareOutput,
}

/// Channel index → (counter unit, compare output).
pub const CHANNEL_MAP: [Route; Channel::COUNT] = [
    Route {
        unit: Unit::U0,
        output: CompareOutput::A,
    },
    Route {
        unit: Unit::U0,
        output: CompareOutput::B,
    },
    Route {
        unit: Unit::U1,
        output: CompareOutput::A,
    },
    Route {
        unit: Unit::U1,
        output: CompareOutput::B,
    },
];

/// Which channels an arming request addresses.
#[derive(Clone, Copy, Debug, Eq, PartialEq, defmt::Format)]
pub enum ChannelSelector {
    /// A single channel.
    One(Channel),
    /// All four channels at once.
    All,
}

impl ChannelSelector {
    /// Raw selector value that means "all channels".
    pub const ALL_RAW: u8 = 4;

    /// Selector as carried in a raw command.
    #[must_use]
    pub const fn raw(self) -> u8 {
        match self {
            Self::One(channel) => channel.raw(),
            Self::All => Self::ALL_RAW,
        }
    }

    /// Whether `channel` is addressed by this selector.
    #[must_use]
    pub fn includes(self, channel: Channel) -> bool {
        match self {
            Self::One(selected) => selected == channel,
            Self::All => true,
        }
    }
}

impl From<Channel> for ChannelSelector {
    fn from(channel: Channel) -> Self {
        Self::One(channel)
    }
}

impl TryFrom<u8> for ChannelSelector {
    type Error = Error;

    /// `0..=3` select one channel, [`ALL_RAW`](Self::ALL_RAW) selects all of them.
    fn try_from(raw: u8) -> Result<Self> {
        if raw == Self::ALL_RAW {
            return Ok(Self::All);
        }
        Channel::try_from(raw)
            .map(Self::One)
            .map_err(|_| Error::InvalidSelector(raw))
    }
}
