//! The deck engine: state, validation pipeline and mutations.
//!
//! ## Key Types
//!
//! - `DeckEngine`: Owns one deck and runs every mutation through its profile
//! - `DeckView`: Read-only view handed to profile hooks

pub mod engine;
mod state;
pub mod view;

pub use engine::{DeckEngine, ItemAdapter};
pub use view::{compare_names, DeckView};
