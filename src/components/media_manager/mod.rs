//! Media Manager - platform backends for the player controller.
//! The wasm build drives the `<video>` element through web-sys; native builds go
//! through a small JavaScript bridge inside the webview.

// Shared imports, element ids, and browser-only lookup helpers.
include!("shared_types_and_web_helpers.rs");
// web-sys media and vendor fullscreen backends for wasm targets.
include!("web_backend.rs");
// Desktop-webview bridge bootstrap script for native (non-wasm) targets.
include!("native_bridge_bootstrap.rs");
// Native bridge command/snapshot runtime helpers.
include!("native_bridge_runtime.rs");
// Public playback utility API.
include!("playback_api.rs");
