// Public playback utility API consumed by the player components.
#[cfg(target_arch = "wasm32")]
pub type PlatformMedia = WebMedia;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformMedia = BridgeMedia;

pub fn platform_media() -> PlatformMedia {
    PlatformMedia::default()
}

#[cfg(target_arch = "wasm32")]
pub fn platform_fullscreen() -> FullscreenChain {
    web_fullscreen_chain()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn platform_fullscreen() -> FullscreenChain {
    native_fullscreen_chain()
}

/// Where a media notification was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
pub enum MediaEventSource {
    /// A listener on the rendered `<video>` element.
    Dom,
    /// The native webview bridge, which also carries a fresh snapshot.
    Bridge,
}

fn accepts_media_event(source: MediaEventSource, event: MediaEvent) -> bool {
    match (source, event) {
        (_, MediaEvent::Ended) => true,
        // Native reads come from bridge snapshots, so position updates wait for them.
        (MediaEventSource::Dom, _) => cfg!(target_arch = "wasm32"),
        (MediaEventSource::Bridge, _) => true,
    }
}

/// Route a media notification to the controller. The first `CanPlay` also
/// applies the configured starting speed.
pub fn dispatch_media_event<M, F, S>(
    controller: &mut PlayerController<M, F, S>,
    pending_speed: &mut Option<f64>,
    event: MediaEvent,
    source: MediaEventSource,
) where
    M: MediaCapability,
    F: FullscreenCapability,
    S: ControlSurface,
{
    if !accepts_media_event(source, event) {
        return;
    }
    if event == MediaEvent::CanPlay {
        if let Some(rate) = pending_speed.take() {
            controller.set_playback_rate(rate);
        }
    }
    controller.handle_media_event(event);
}

/// Apply a speed picked in the selector. A pick made before the media can
/// play replaces the configured starting speed.
pub fn select_playback_speed<M, F, S>(
    controller: &mut PlayerController<M, F, S>,
    pending_speed: &mut Option<f64>,
    rate: f64,
) where
    M: MediaCapability,
    F: FullscreenCapability,
    S: ControlSurface,
{
    *pending_speed = None;
    controller.set_playback_rate(rate);
}

/// Keep the native media mirror in step with the webview. Resolves only when
/// the bridge goes away.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sync_native_media<S: ControlSurface + 'static>(
    mut controller: Signal<PlayerController<PlatformMedia, FullscreenChain, S>>,
    mut pending_speed: Signal<Option<f64>>,
) {
    ensure_native_media_bridge();
    if let Err(err) = detect_native_fullscreen_methods().await {
        tracing::debug!("fullscreen detection failed: {err}");
    }

    let mut events = document::eval(NATIVE_MEDIA_EVENTS_JS);
    loop {
        match events.recv::<BridgeMessage>().await {
            Ok(message) => {
                let mut controller = controller.write();
                controller.media_mut().apply_snapshot(message.snapshot);
                if let Some(event) = message.media_event() {
                    dispatch_media_event(
                        &mut controller,
                        &mut pending_speed.write(),
                        event,
                        MediaEventSource::Bridge,
                    );
                }
            }
            Err(err) => {
                tracing::warn!("media bridge stopped: {err:?}");
                break;
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn sync_native_media<S: ControlSurface + 'static>(
    _controller: Signal<PlayerController<PlatformMedia, FullscreenChain, S>>,
    _pending_speed: Signal<Option<f64>>,
) {
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    thread_local! {
        static SENT: RefCell<Vec<serde_json::Value>> = const { RefCell::new(Vec::new()) };
    }

    fn record(value: serde_json::Value) {
        SENT.with(|sent| sent.borrow_mut().push(value));
    }

    struct NullSurface;

    impl ControlSurface for NullSurface {
        fn show_play_icon(&mut self, _icon: crate::controller::PlayIcon) {}
        fn set_progress_width(&mut self, _width: String) {}
        fn set_time_labels(&mut self, _current: String, _total: String) {}
        fn set_volume_width(&mut self, _width: String) {}
        fn show_volume_icon(&mut self, _icon: crate::controller::VolumeIcon) {}
        fn set_volume_title(&mut self, _title: &str) {}
        fn set_fullscreen_marker(&mut self, _on: bool) {}
    }

    fn bridge_controller() -> PlayerController<BridgeMedia, FullscreenChain, NullSurface> {
        PlayerController::new(
            BridgeMedia::with_sender(record),
            FullscreenChain::new(Vec::new()),
            NullSurface,
            PLAYER_CONTAINER_ID,
        )
    }

    #[test]
    fn bridge_media_mirrors_writes_and_forwards_them() {
        let mut media = BridgeMedia::with_sender(record);
        media.play().unwrap();
        media.set_volume(0.25);
        media.set_current_time(12.5);

        assert_eq!(media.volume(), 0.25);
        assert_eq!(media.current_time(), 12.5);
        SENT.with(|sent| {
            assert_eq!(
                *sent.borrow(),
                vec![
                    serde_json::json!({ "type": "play" }),
                    serde_json::json!({ "type": "volume", "value": 0.25 }),
                    serde_json::json!({ "type": "seek", "value": 12.5 }),
                ]
            );
        });
    }

    #[test]
    fn play_waits_for_the_webview_to_confirm() {
        let mut media = BridgeMedia::with_sender(record);
        media.play().unwrap();
        assert!(media.paused());

        media.apply_snapshot(MediaSnapshot {
            paused: false,
            ..MediaSnapshot::default()
        });
        assert!(!media.paused());
    }

    #[test]
    fn snapshots_replace_the_mirror() {
        let mut media = BridgeMedia::with_sender(record);
        media.apply_snapshot(MediaSnapshot {
            current_time: 30.0,
            duration: 90.0,
            paused: false,
            volume: 0.5,
            playback_rate: 2.0,
        });
        assert_eq!(media.duration(), 90.0);
        assert_eq!(media.playback_rate(), 2.0);
        assert!(!media.paused());
    }

    #[test]
    fn bridge_messages_decode() {
        let message: BridgeMessage = serde_json::from_value(serde_json::json!({
            "event": "timeupdate",
            "snapshot": {
                "current_time": 1.0,
                "duration": 2.0,
                "paused": true,
                "volume": 1.0,
                "playback_rate": 1.0
            }
        }))
        .unwrap();
        assert_eq!(message.media_event(), Some(MediaEvent::TimeUpdate));

        let state = BridgeMessage {
            event: "state".into(),
            snapshot: MediaSnapshot::default(),
        };
        assert_eq!(state.media_event(), None);
    }

    #[test]
    fn first_canplay_applies_the_starting_speed() {
        let mut controller = bridge_controller();
        let mut pending_speed = Some(1.5);

        dispatch_media_event(
            &mut controller,
            &mut pending_speed,
            MediaEvent::CanPlay,
            MediaEventSource::Bridge,
        );
        assert_eq!(pending_speed, None);
        assert_eq!(controller.media().playback_rate(), 1.5);

        dispatch_media_event(
            &mut controller,
            &mut pending_speed,
            MediaEvent::CanPlay,
            MediaEventSource::Bridge,
        );
        SENT.with(|sent| {
            assert_eq!(
                *sent.borrow(),
                vec![serde_json::json!({ "type": "rate", "value": 1.5 })]
            );
        });
    }

    #[test]
    fn picking_a_speed_before_canplay_wins() {
        let mut controller = bridge_controller();
        let mut pending_speed = Some(1.5);

        select_playback_speed(&mut controller, &mut pending_speed, 0.75);
        dispatch_media_event(
            &mut controller,
            &mut pending_speed,
            MediaEvent::CanPlay,
            MediaEventSource::Bridge,
        );

        assert_eq!(controller.media().playback_rate(), 0.75);
        SENT.with(|sent| {
            assert_eq!(
                *sent.borrow(),
                vec![serde_json::json!({ "type": "rate", "value": 0.75 })]
            );
        });
    }

    #[test]
    fn ignored_dom_canplay_keeps_the_starting_speed_pending() {
        let mut controller = bridge_controller();
        let mut pending_speed = Some(2.0);

        dispatch_media_event(
            &mut controller,
            &mut pending_speed,
            MediaEvent::CanPlay,
            MediaEventSource::Dom,
        );
        assert_eq!(pending_speed, Some(2.0));
        assert_eq!(controller.media().playback_rate(), 1.0);
    }

    #[test]
    fn native_position_updates_come_from_the_bridge() {
        assert!(!accepts_media_event(MediaEventSource::Dom, MediaEvent::TimeUpdate));
        assert!(accepts_media_event(MediaEventSource::Dom, MediaEvent::Ended));
        assert!(accepts_media_event(MediaEventSource::Bridge, MediaEvent::CanPlay));
    }
}
