//! The components module contains the player view and its platform backends.

mod icons;
mod media_manager;
mod player;

pub use icons::*;
pub use player::*;
