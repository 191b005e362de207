//! Stream direction flag and path indices.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

crate::define_index_type!(usize, DeviceSetIndex);
crate::define_index_type!(usize, ChannelIndex);

/// Role of a device or channel in the signal chain.
///
/// On the wire this is the integer `direction` field: 0 = receive,
/// 1 = transmit, 2 = multiple input/output.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Rx,
    Tx,
    Mimo,
}

impl Direction {
    pub const ALL: [Direction; 3] = [Direction::Rx, Direction::Tx, Direction::Mimo];

    pub fn code(self) -> i64 {
        match self {
            Direction::Rx => 0,
            Direction::Tx => 1,
            Direction::Mimo => 2,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Direction::Rx),
            1 => Some(Direction::Tx),
            2 => Some(Direction::Mimo),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Rx => "rx",
            Direction::Tx => "tx",
            Direction::Mimo => "mimo",
        };
        write!(f, "{}", name)
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = i64::deserialize(deserializer)?;
        Direction::from_code(code)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid direction {}", code)))
    }
}
