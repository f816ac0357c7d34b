use crate::components::media_manager::{
    dispatch_media_event, platform_fullscreen, platform_media, sync_native_media,
    MediaEventSource, PlatformMedia, PLAYER_CONTAINER_ID, VIDEO_ELEMENT_ID,
};
use crate::controller::{
    ControlSurface, FullscreenChain, MediaEvent, PlayIcon, PlayerController, VolumeIcon,
};
use crate::settings::PlayerSettings;
use dioxus::prelude::*;

mod controls;
mod shortcuts;

use controls::{FullscreenButton, PlayPauseButton, ProgressTrack, SpeedSelector, TimeLabels, VolumeControl};
use shortcuts::{shortcut_for_key, Shortcut};

pub type AppController = PlayerController<PlatformMedia, FullscreenChain, ControlsView>;

/// Starting speed waiting for the media to become playable.
#[derive(Clone, Copy)]
pub struct PendingSpeedSignal(pub Signal<Option<f64>>);

/// Signal-backed control surface. Components render from these signals and
/// the controller writes into them.
#[derive(Clone, Copy)]
pub struct ControlsView {
    pub play_icon: Signal<PlayIcon>,
    pub progress_width: Signal<String>,
    pub current_label: Signal<String>,
    pub total_label: Signal<String>,
    pub volume_width: Signal<String>,
    pub volume_icon: Signal<VolumeIcon>,
    pub volume_title: Signal<String>,
    pub fullscreen: Signal<bool>,
}

impl ControlsView {
    fn new() -> Self {
        Self {
            play_icon: Signal::new(PlayIcon::Play),
            progress_width: Signal::new("0%".to_string()),
            current_label: Signal::new("00:00 / ".to_string()),
            total_label: Signal::new("00:00".to_string()),
            volume_width: Signal::new("100%".to_string()),
            volume_icon: Signal::new(VolumeIcon::High),
            volume_title: Signal::new("Mute".to_string()),
            fullscreen: Signal::new(false),
        }
    }
}

impl ControlSurface for ControlsView {
    fn show_play_icon(&mut self, icon: PlayIcon) {
        self.play_icon.set(icon);
    }

    fn set_progress_width(&mut self, width: String) {
        self.progress_width.set(width);
    }

    fn set_time_labels(&mut self, current: String, total: String) {
        self.current_label.set(current);
        self.total_label.set(total);
    }

    fn set_volume_width(&mut self, width: String) {
        self.volume_width.set(width);
    }

    fn show_volume_icon(&mut self, icon: VolumeIcon) {
        self.volume_icon.set(icon);
    }

    fn set_volume_title(&mut self, title: &str) {
        self.volume_title.set(title.to_string());
    }

    fn set_fullscreen_marker(&mut self, on: bool) {
        self.fullscreen.set(on);
    }
}

#[component]
pub fn VideoPlayer() -> Element {
    let settings = use_context::<Signal<PlayerSettings>>();
    let view = use_hook(ControlsView::new);
    let mut controller = use_context_provider(|| {
        Signal::new(PlayerController::new(
            platform_media(),
            platform_fullscreen(),
            view,
            PLAYER_CONTAINER_ID,
        ))
    });
    use_context_provider(|| view);
    let mut pending_speed =
        use_context_provider(|| PendingSpeedSignal(Signal::new(Some(settings.peek().initial_speed)))).0;

    use_future(move || sync_native_media(controller, pending_speed));

    let source = settings().source;
    let poster = settings().poster;
    let fullscreen = (view.fullscreen)();

    let mut on_media_event = move |event: MediaEvent| {
        dispatch_media_event(
            &mut controller.write(),
            &mut pending_speed.write(),
            event,
            MediaEventSource::Dom,
        );
    };

    let on_keydown = move |evt: KeyboardEvent| {
        let Some(shortcut) = shortcut_for_key(&evt.key(), evt.modifiers()) else {
            return;
        };
        evt.prevent_default();
        let mut controller = controller.write();
        match shortcut {
            Shortcut::TogglePlayback => controller.toggle_playback(),
            Shortcut::ToggleMute => controller.toggle_mute(),
            Shortcut::ToggleFullscreen => controller.toggle_fullscreen(),
        }
    };

    rsx! {
        div {
            id: PLAYER_CONTAINER_ID,
            class: "video-player",
            tabindex: "0",
            onkeydown: on_keydown,
            video {
                id: VIDEO_ELEMENT_ID,
                class: if fullscreen { "video video-fullscreen" } else { "video" },
                src: "{source}",
                poster,
                preload: "metadata",
                onclick: move |_| controller.write().toggle_playback(),
                ontimeupdate: move |_| on_media_event(MediaEvent::TimeUpdate),
                oncanplay: move |_| on_media_event(MediaEvent::CanPlay),
                onended: move |_| on_media_event(MediaEvent::Ended),
            }
            div { class: "controls-container",
                ProgressTrack {}
                div { class: "control-group",
                    div { class: "controls-left",
                        PlayPauseButton {}
                        VolumeControl {}
                    }
                    div { class: "controls-right",
                        SpeedSelector {}
                        TimeLabels {}
                        FullscreenButton {}
                    }
                }
            }
        }
    }
}
