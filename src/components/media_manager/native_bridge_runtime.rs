// Native bridge dispatch and snapshot mirroring used by the desktop controller.
#[cfg(not(target_arch = "wasm32"))]
fn ensure_native_media_bridge() {
    let _ = document::eval(NATIVE_MEDIA_BOOTSTRAP_JS);
}

#[cfg(not(target_arch = "wasm32"))]
fn native_media_command(value: serde_json::Value) {
    ensure_native_media_bridge();
    let payload = serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string());
    let script = format!(
        r#"(function () {{
            const bridge = window.__rustyreelBridge;
            if (!bridge) return false;
            return bridge.apply({payload});
        }})();"#
    );
    let _ = document::eval(&script);
}

/// Last known state of the `<video>` element inside the webview.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MediaSnapshot {
    pub current_time: f64,
    pub duration: f64,
    pub paused: bool,
    pub volume: f64,
    pub playback_rate: f64,
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for MediaSnapshot {
    fn default() -> Self {
        Self {
            current_time: 0.0,
            duration: 0.0,
            paused: true,
            volume: 1.0,
            playback_rate: 1.0,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Deserialize)]
struct BridgeMessage {
    event: String,
    snapshot: MediaSnapshot,
}

#[cfg(not(target_arch = "wasm32"))]
impl BridgeMessage {
    fn media_event(&self) -> Option<MediaEvent> {
        match self.event.as_str() {
            "timeupdate" => Some(MediaEvent::TimeUpdate),
            "canplay" => Some(MediaEvent::CanPlay),
            _ => None,
        }
    }
}

/// Media handle for the desktop webview. Reads come from the mirrored
/// snapshot; writes update the mirror and are forwarded to the bridge.
#[cfg(not(target_arch = "wasm32"))]
pub struct BridgeMedia {
    snapshot: MediaSnapshot,
    send: fn(serde_json::Value),
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for BridgeMedia {
    fn default() -> Self {
        Self::with_sender(native_media_command)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl BridgeMedia {
    fn with_sender(send: fn(serde_json::Value)) -> Self {
        Self {
            snapshot: MediaSnapshot::default(),
            send,
        }
    }

    pub fn apply_snapshot(&mut self, snapshot: MediaSnapshot) {
        self.snapshot = snapshot;
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl MediaCapability for BridgeMedia {
    fn paused(&self) -> bool {
        self.snapshot.paused
    }

    /// The webview may still reject playback, so `paused` only changes once
    /// the next snapshot confirms it.
    fn play(&mut self) -> Result<(), PlayerError> {
        (self.send)(serde_json::json!({ "type": "play" }));
        Ok(())
    }

    fn pause(&mut self) -> Result<(), PlayerError> {
        (self.send)(serde_json::json!({ "type": "pause" }));
        self.snapshot.paused = true;
        Ok(())
    }

    fn current_time(&self) -> f64 {
        self.snapshot.current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        (self.send)(serde_json::json!({ "type": "seek", "value": seconds }));
        self.snapshot.current_time = seconds;
    }

    fn duration(&self) -> f64 {
        self.snapshot.duration
    }

    fn volume(&self) -> f64 {
        self.snapshot.volume
    }

    fn set_volume(&mut self, volume: f64) {
        (self.send)(serde_json::json!({ "type": "volume", "value": volume }));
        self.snapshot.volume = volume;
    }

    fn playback_rate(&self) -> f64 {
        self.snapshot.playback_rate
    }

    fn set_playback_rate(&mut self, rate: f64) {
        (self.send)(serde_json::json!({ "type": "rate", "value": rate }));
        self.snapshot.playback_rate = rate;
    }
}

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    /// Request methods the webview reported as available.
    static BRIDGE_FULLSCREEN_METHODS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Vendor fullscreen variant invoked through the bridge.
#[cfg(not(target_arch = "wasm32"))]
pub struct ScriptedFullscreen {
    name: &'static str,
    request_method: &'static str,
    exit_method: &'static str,
}

#[cfg(not(target_arch = "wasm32"))]
impl FullscreenProbe for ScriptedFullscreen {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_supported(&self) -> bool {
        BRIDGE_FULLSCREEN_METHODS
            .with(|methods| methods.borrow().iter().any(|m| m == self.request_method))
    }

    fn request(&self, element_id: &str) -> Result<(), PlayerError> {
        native_media_command(serde_json::json!({
            "type": "enter_fullscreen",
            "element": element_id,
            "method": self.request_method,
        }));
        Ok(())
    }

    fn exit(&self) -> Result<(), PlayerError> {
        native_media_command(serde_json::json!({
            "type": "exit_fullscreen",
            "method": self.exit_method,
        }));
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn native_fullscreen_chain() -> FullscreenChain {
    FullscreenChain::new(
        VENDOR_FULLSCREEN_APIS
            .iter()
            .map(|&(name, request_method, exit_method)| {
                Box::new(ScriptedFullscreen {
                    name,
                    request_method,
                    exit_method,
                }) as Box<dyn FullscreenProbe>
            })
            .collect(),
    )
}

#[cfg(not(target_arch = "wasm32"))]
async fn detect_native_fullscreen_methods() -> Result<(), PlayerError> {
    ensure_native_media_bridge();
    let methods: Vec<&str> = VENDOR_FULLSCREEN_APIS.iter().map(|api| api.1).collect();
    let payload =
        serde_json::to_string(&methods).map_err(|e| PlayerError::Script(e.to_string()))?;
    let script = format!(
        r#"return (function () {{
            const bridge = window.__rustyreelBridge;
            return bridge ? bridge.fullscreenSupport({payload}) : [];
        }})();"#
    );
    let supported = document::eval(&script)
        .join::<Vec<String>>()
        .await
        .map_err(|e| PlayerError::Script(format!("{e:?}")))?;
    tracing::debug!("webview fullscreen methods: {supported:?}");
    BRIDGE_FULLSCREEN_METHODS.with(|methods| *methods.borrow_mut() = supported);
    Ok(())
}
