//! Error types for playback plumbing

use thiserror::Error;

/// Failures reported by the media, fullscreen and settings layers.
///
/// None of these reach the user: the controller logs them and keeps going.
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub enum PlayerError {
    /// The video element is not mounted (yet)
    #[error("media element is not available")]
    MediaUnavailable,

    /// The chosen fullscreen api refused the call
    #[error("fullscreen request failed: {0}")]
    Fullscreen(String),

    /// A call into the page scripting layer failed
    #[error("script call failed: {0}")]
    Script(String),

    /// Stored player settings could not be read or decoded
    #[error("invalid player settings: {0}")]
    Settings(String),
}
