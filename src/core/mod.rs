//! Shared building blocks: flash notifications and instance-key minting.

pub mod flash;
pub mod rng;

pub use flash::{FlashKind, FlashMessage};
pub use rng::KeyMinter;
