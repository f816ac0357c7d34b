use std::rc::Rc;

use crate::components::media_manager::select_playback_speed;
use crate::components::{AppController, ControlsView, Icon, PendingSpeedSignal};
use crate::settings::PlayerSettings;
use dioxus::prelude::*;

/// Rendered width of a mounted track, if the renderer can report it.
async fn track_width(track: Signal<Option<Rc<MountedData>>>) -> Option<f64> {
    let mounted = track.cloned()?;
    match mounted.get_client_rect().await {
        Ok(rect) => Some(rect.width()),
        Err(err) => {
            tracing::debug!("track geometry unavailable: {err:?}");
            None
        }
    }
}

/// Play/Pause button
#[component]
pub(super) fn PlayPauseButton() -> Element {
    let mut controller = use_context::<Signal<AppController>>();
    let view = use_context::<ControlsView>();
    let icon = (view.play_icon)();

    rsx! {
        button {
            id: "play-button",
            r#type: "button",
            class: "control-button",
            title: icon.title(),
            onclick: move |_| controller.write().toggle_playback(),
            Icon { name: icon.icon_name().to_string(), class: "w-6 h-6".to_string() }
        }
    }
}

/// Click-to-seek progress track
#[component]
pub(super) fn ProgressTrack() -> Element {
    let controller = use_context::<Signal<AppController>>();
    let view = use_context::<ControlsView>();
    let mut track = use_signal(|| None::<Rc<MountedData>>);
    let width = (view.progress_width)();

    let on_seek = move |evt: MouseEvent| {
        let offset_x = evt.element_coordinates().x;
        let mut controller = controller;
        spawn(async move {
            if let Some(track_width) = track_width(track).await {
                controller.write().seek(offset_x, track_width);
            }
        });
    };

    rsx! {
        div {
            class: "progress-range",
            title: "Seek",
            onmounted: move |evt| track.set(Some(evt.data())),
            onclick: on_seek,
            div { class: "progress-bar", style: "width: {width}" }
        }
    }
}

/// Mute toggle plus click-to-set volume track
#[component]
pub(super) fn VolumeControl() -> Element {
    let mut controller = use_context::<Signal<AppController>>();
    let view = use_context::<ControlsView>();
    let mut track = use_signal(|| None::<Rc<MountedData>>);
    let icon = (view.volume_icon)();
    let title = (view.volume_title)();
    let width = (view.volume_width)();

    let on_volume = move |evt: MouseEvent| {
        let offset_x = evt.element_coordinates().x;
        let mut controller = controller;
        spawn(async move {
            if let Some(track_width) = track_width(track).await {
                controller.write().set_volume(offset_x, track_width);
            }
        });
    };

    rsx! {
        div { class: "volume",
            button {
                id: "volume-icon",
                r#type: "button",
                class: "control-button",
                title: "{title}",
                onclick: move |_| controller.write().toggle_mute(),
                Icon { name: icon.icon_name().to_string(), class: "w-5 h-5".to_string() }
            }
            div {
                class: "volume-range",
                title: "Change volume",
                onmounted: move |evt| track.set(Some(evt.data())),
                onclick: on_volume,
                div { class: "volume-bar", style: "width: {width}" }
            }
        }
    }
}

/// Playback speed selector
#[component]
pub(super) fn SpeedSelector() -> Element {
    let mut controller = use_context::<Signal<AppController>>();
    let settings = use_context::<Signal<PlayerSettings>>();
    let mut pending_speed = use_context::<PendingSpeedSignal>().0;
    let PlayerSettings {
        speed_options,
        initial_speed,
        ..
    } = settings();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<f64>() {
        Ok(rate) => {
            select_playback_speed(&mut controller.write(), &mut pending_speed.write(), rate)
        }
        Err(err) => tracing::warn!("ignoring playback speed {:?}: {err}", evt.value()),
    };

    rsx! {
        select {
            class: "playback-speed",
            title: "Playback speed",
            // Arrow keys and letters belong to the select while it has focus.
            onkeydown: move |evt| evt.stop_propagation(),
            onchange: on_change,
            for speed in speed_options {
                option {
                    value: "{speed}",
                    selected: speed == initial_speed,
                    "{speed}x"
                }
            }
        }
    }
}

/// Elapsed and total time labels
#[component]
pub(super) fn TimeLabels() -> Element {
    let view = use_context::<ControlsView>();
    let current = (view.current_label)();
    let total = (view.total_label)();

    rsx! {
        div { class: "time",
            span { class: "duration-elapsed", "{current}" }
            span { class: "total-duration", "{total}" }
        }
    }
}

/// Fullscreen toggle
#[component]
pub(super) fn FullscreenButton() -> Element {
    let mut controller = use_context::<Signal<AppController>>();
    let view = use_context::<ControlsView>();
    let fullscreen = (view.fullscreen)();

    rsx! {
        button {
            id: "fullscreen-button",
            r#type: "button",
            class: "control-button fullscreen",
            title: if fullscreen { "Exit fullscreen" } else { "Fullscreen" },
            onclick: move |_| controller.write().toggle_fullscreen(),
            Icon {
                name: if fullscreen { "compress".to_string() } else { "expand".to_string() },
                class: "w-5 h-5".to_string(),
            }
        }
    }
}
