//! Player controller - turns control clicks and media notifications into
//! media calls and control updates.
//!
//! The controller owns the only state that is not mirrored by the media element
//! itself: the volume to restore on unmute and whether fullscreen is on.

mod capabilities;

pub use capabilities::*;

use crate::utils::{convert_seconds, known_duration, track_fraction, width_percent};

/// Clicks below this fraction of the volume track snap to silence.
const VOLUME_FLOOR_SNAP: f64 = 0.1;
/// Clicks above this fraction of the volume track snap to full volume.
const VOLUME_CEIL_SNAP: f64 = 0.9;

/// Notifications coming from the media element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    TimeUpdate,
    CanPlay,
    Ended,
}

/// State owned by the controller rather than by the media element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerState {
    pub remembered_volume: f64,
    pub is_fullscreen: bool,
}

impl Default for ControllerState {
    fn default() -> Self {
        Self {
            remembered_volume: 1.0,
            is_fullscreen: false,
        }
    }
}

pub struct PlayerController<M, F, S> {
    media: M,
    fullscreen: F,
    surface: S,
    container_id: String,
    state: ControllerState,
}

impl<M, F, S> PlayerController<M, F, S>
where
    M: MediaCapability,
    F: FullscreenCapability,
    S: ControlSurface,
{
    /// `container_id` is the element put into fullscreen.
    pub fn new(media: M, fullscreen: F, surface: S, container_id: impl Into<String>) -> Self {
        Self {
            media,
            fullscreen,
            surface,
            container_id: container_id.into(),
            state: ControllerState::default(),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> ControllerState {
        self.state
    }

    #[cfg(test)]
    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    #[cfg(test)]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Play when paused, pause otherwise, and flip the play button to match.
    pub fn toggle_playback(&mut self) {
        if self.media.paused() {
            if let Err(err) = self.media.play() {
                tracing::warn!("play failed: {err}");
            }
            self.surface.show_play_icon(PlayIcon::Pause);
        } else {
            if let Err(err) = self.media.pause() {
                tracing::warn!("pause failed: {err}");
            }
            self.show_play_button();
        }
    }

    /// Reset the play button without touching the media.
    pub fn show_play_button(&mut self) {
        self.surface.show_play_icon(PlayIcon::Play);
    }

    /// Mirror the media position into the progress bar and time labels.
    pub fn refresh_progress(&mut self) {
        let current = self.media.current_time();
        let duration = self.media.duration();
        let fraction = known_duration(duration)
            .map(|total| current / total)
            .filter(|fraction| fraction.is_finite())
            .unwrap_or(0.0);

        self.surface.set_progress_width(width_percent(fraction));
        self.surface.set_time_labels(
            format!("{} / ", convert_seconds(current)),
            convert_seconds(duration),
        );
    }

    /// Seek to the spot clicked on the progress track.
    pub fn seek(&mut self, offset_x: f64, track_width: f64) {
        let Some(fraction) = track_fraction(offset_x, track_width) else {
            tracing::debug!("ignoring seek on a track of width {track_width}");
            return;
        };

        self.surface.set_progress_width(width_percent(fraction));
        match known_duration(self.media.duration()) {
            Some(total) => self.media.set_current_time(fraction * total),
            None => tracing::debug!("duration unknown, not seeking"),
        }
    }

    /// Set the volume from the spot clicked on the volume track.
    pub fn set_volume(&mut self, offset_x: f64, track_width: f64) {
        let Some(mut fraction) = track_fraction(offset_x, track_width) else {
            tracing::debug!("ignoring volume click on a track of width {track_width}");
            return;
        };
        if fraction < VOLUME_FLOOR_SNAP {
            fraction = 0.0;
        }
        if fraction > VOLUME_CEIL_SNAP {
            fraction = 1.0;
        }

        self.surface.set_volume_width(width_percent(fraction));
        self.media.set_volume(fraction);
        self.surface.show_volume_icon(VolumeIcon::for_level(fraction));
    }

    /// Mute, remembering the level, or restore the remembered level.
    ///
    /// Any zero volume counts as muted, however it got there.
    pub fn toggle_mute(&mut self) {
        let volume = self.media.volume();
        if volume != 0.0 {
            self.state.remembered_volume = volume;
            self.media.set_volume(0.0);
            self.surface.set_volume_width("0%".to_string());
            self.surface.show_volume_icon(VolumeIcon::Muted);
            self.surface.set_volume_title("Unmute");
        } else {
            let restored = self.state.remembered_volume;
            self.media.set_volume(restored);
            self.surface.set_volume_width(width_percent(restored));
            let icon = if restored >= VolumeIcon::HIGH_THRESHOLD {
                VolumeIcon::High
            } else {
                VolumeIcon::Low
            };
            self.surface.show_volume_icon(icon);
            self.surface.set_volume_title("Mute");
        }
    }

    pub fn set_playback_rate(&mut self, rate: f64) {
        self.media.set_playback_rate(rate);
    }

    pub fn toggle_fullscreen(&mut self) {
        if self.state.is_fullscreen {
            if let Err(err) = self.fullscreen.exit() {
                tracing::debug!("exit fullscreen failed: {err}");
            }
            self.surface.set_fullscreen_marker(false);
        } else {
            if let Err(err) = self.fullscreen.enter(&self.container_id) {
                tracing::debug!("enter fullscreen failed: {err}");
            }
            self.surface.set_fullscreen_marker(true);
        }
        self.state.is_fullscreen = !self.state.is_fullscreen;
    }

    pub fn handle_media_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::TimeUpdate | MediaEvent::CanPlay => self.refresh_progress(),
            MediaEvent::Ended => self.show_play_button(),
        }
    }
}
