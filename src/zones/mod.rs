//! Zone system for deck partitions.
//!
//! Zones are **profile-configured**, not hardcoded. A profile defines its
//! zones (main deck, extra deck, ...) via `ZoneConfig`, in specificity
//! order: the first zone whose filter accepts a card wins.
//!
//! ## Key Types
//!
//! - `ZoneId`: Opaque zone identifier
//! - `ZoneConfig`: Zone properties (name, capacity, eligibility filter)
//! - `ZoneManager`: Per-zone card lists and copy tracking

pub mod config;
pub mod manager;

pub use config::{CardFilter, ZoneConfig, ZoneId};
pub use manager::ZoneManager;
