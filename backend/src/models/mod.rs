//! Typed request and response shapes of the Web API.
//!
//! Payload shapes (device settings, channel settings, reports) are declared
//! with [`payload_struct!`](crate::payload_struct) so that every field is
//! optional on the wire: a field that was not supplied stays unset and is not
//! serialized back.

pub mod macros;

pub mod channel;
pub mod config;
pub mod device;
pub mod direction;
pub mod instance;
pub mod report;

pub use direction::{ChannelIndex, DeviceSetIndex, Direction};
pub use instance::*;
