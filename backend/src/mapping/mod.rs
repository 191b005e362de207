//! Request mapping: from generic JSON objects to typed adapter arguments.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Raw JSON object (decoded request body)                   │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  SettingsMapper / request validators                      │
//! │  - discriminator + direction lookup in a VariantTable     │
//! │  - payload decode (serde_path_to_error)                   │
//! │  - touched-key collection                                 │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Tagged<V> container + TouchedKeys                        │
//! │  - handed to the adapter (PUT forces, PATCH merges)       │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod envelope;
pub mod error;
pub mod keys;
pub mod requests;
pub mod settings;
pub mod table;
pub mod variants;

pub use envelope::{Tagged, Variant};
pub use error::{MapError, PayloadError};
pub use keys::{apply_touched, KeyPath, PathSegment, TouchedKeys};
pub use settings::SettingsMapper;
pub use table::{decode_payload, DecodeFn, VariantEntry, VariantTable};
pub use variants::{
    ChannelReport, ChannelReportVariant, ChannelSettings, ChannelSettingsVariant, DeviceReport,
    DeviceReportVariant, DeviceSettings, DeviceSettingsVariant,
};
