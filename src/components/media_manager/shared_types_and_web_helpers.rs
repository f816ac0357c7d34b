// Shared imports, element ids, and browser-specific helper utilities.
use dioxus::prelude::*;

use crate::controller::{
    ControlSurface, FullscreenCapability, FullscreenChain, FullscreenProbe, MediaCapability,
    MediaEvent, PlayerController,
};
use crate::error::PlayerError;

#[cfg(not(target_arch = "wasm32"))]
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlVideoElement};

/// Element put into fullscreen; wraps the video and the control bar.
pub const PLAYER_CONTAINER_ID: &str = "rustyreel-player";
/// The single `<video>` element the controls drive.
pub const VIDEO_ELEMENT_ID: &str = "rustyreel-video";

/// Vendor flavours of the fullscreen API, tried in order:
/// (name, request method on the element, exit method on the document).
const VENDOR_FULLSCREEN_APIS: [(&str, &str, &str); 3] = [
    ("standard", "requestFullscreen", "exitFullscreen"),
    ("webkit", "webkitRequestFullscreen", "webkitExitFullscreen"),
    ("ms", "msRequestFullscreen", "msExitFullscreen"),
];

/// Look up the mounted video element.
#[cfg(target_arch = "wasm32")]
pub fn video_element() -> Option<HtmlVideoElement> {
    let document = window()?.document()?;
    document
        .get_element_by_id(VIDEO_ELEMENT_ID)?
        .dyn_into::<HtmlVideoElement>()
        .ok()
}

#[cfg(target_arch = "wasm32")]
fn js_error_message(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
