// Browser (wasm) backends: the `<video>` element and vendor fullscreen probes.
/// Media handle over the `<video>` element, looked up on every call so it
/// keeps working across re-mounts.
#[cfg(target_arch = "wasm32")]
#[derive(Default)]
pub struct WebMedia;

#[cfg(target_arch = "wasm32")]
impl MediaCapability for WebMedia {
    fn paused(&self) -> bool {
        video_element().map(|v| v.paused()).unwrap_or(true)
    }

    fn play(&mut self) -> Result<(), PlayerError> {
        let video = video_element().ok_or(PlayerError::MediaUnavailable)?;
        let promise = video
            .play()
            .map_err(|e| PlayerError::Script(js_error_message(&e)))?;
        spawn(async move {
            if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                tracing::warn!("play was rejected: {}", js_error_message(&err));
            }
        });
        Ok(())
    }

    fn pause(&mut self) -> Result<(), PlayerError> {
        let video = video_element().ok_or(PlayerError::MediaUnavailable)?;
        video
            .pause()
            .map_err(|e| PlayerError::Script(js_error_message(&e)))
    }

    fn current_time(&self) -> f64 {
        video_element().map(|v| v.current_time()).unwrap_or(0.0)
    }

    fn set_current_time(&mut self, seconds: f64) {
        if let Some(video) = video_element() {
            video.set_current_time(seconds);
        }
    }

    fn duration(&self) -> f64 {
        video_element().map(|v| v.duration()).unwrap_or(f64::NAN)
    }

    fn volume(&self) -> f64 {
        video_element().map(|v| v.volume()).unwrap_or(1.0)
    }

    fn set_volume(&mut self, volume: f64) {
        if let Some(video) = video_element() {
            video.set_volume(volume);
        }
    }

    fn playback_rate(&self) -> f64 {
        video_element().map(|v| v.playback_rate()).unwrap_or(1.0)
    }

    fn set_playback_rate(&mut self, rate: f64) {
        if let Some(video) = video_element() {
            video.set_playback_rate(rate);
        }
    }
}

/// One vendor variant of the fullscreen API, called through reflection since
/// the prefixed methods are not in web-sys.
#[cfg(target_arch = "wasm32")]
pub struct VendorFullscreen {
    name: &'static str,
    request_method: &'static str,
    exit_method: &'static str,
}

#[cfg(target_arch = "wasm32")]
fn js_method(target: &wasm_bindgen::JsValue, method: &str) -> Option<js_sys::Function> {
    js_sys::Reflect::get(target, &method.into())
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()
}

#[cfg(target_arch = "wasm32")]
fn settle_fullscreen_promise(result: wasm_bindgen::JsValue, what: &'static str) {
    if let Ok(promise) = result.dyn_into::<js_sys::Promise>() {
        spawn(async move {
            if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                tracing::debug!("{what} was rejected: {}", js_error_message(&err));
            }
        });
    }
}

#[cfg(target_arch = "wasm32")]
impl FullscreenProbe for VendorFullscreen {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_supported(&self) -> bool {
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .and_then(|root| js_method(&root.into(), self.request_method))
            .is_some()
    }

    fn request(&self, element_id: &str) -> Result<(), PlayerError> {
        let element = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(element_id))
            .ok_or_else(|| PlayerError::Fullscreen(format!("no element #{element_id}")))?;
        let element: wasm_bindgen::JsValue = element.into();
        let request = js_method(&element, self.request_method)
            .ok_or_else(|| PlayerError::Fullscreen(format!("{} missing", self.request_method)))?;
        let result = request
            .call0(&element)
            .map_err(|e| PlayerError::Fullscreen(js_error_message(&e)))?;
        settle_fullscreen_promise(result, "fullscreen request");
        Ok(())
    }

    fn exit(&self) -> Result<(), PlayerError> {
        let document: wasm_bindgen::JsValue = window()
            .and_then(|w| w.document())
            .ok_or_else(|| PlayerError::Fullscreen("no document".into()))?
            .into();
        let exit = js_method(&document, self.exit_method)
            .ok_or_else(|| PlayerError::Fullscreen(format!("{} missing", self.exit_method)))?;
        let result = exit
            .call0(&document)
            .map_err(|e| PlayerError::Fullscreen(js_error_message(&e)))?;
        settle_fullscreen_promise(result, "fullscreen exit");
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
fn web_fullscreen_chain() -> FullscreenChain {
    FullscreenChain::new(
        VENDOR_FULLSCREEN_APIS
            .iter()
            .map(|&(name, request_method, exit_method)| {
                Box::new(VendorFullscreen {
                    name,
                    request_method,
                    exit_method,
                }) as Box<dyn FullscreenProbe>
            })
            .collect(),
    )
}
