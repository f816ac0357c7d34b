//! Seams between the controller and the outside world.
//!
//! The controller never touches the DOM directly. Everything it needs from the
//! media element, the fullscreen API and the rendered controls goes through the
//! traits below so tests can swap in recording doubles.

use crate::error::PlayerError;

/// Playback handle over a single media element.
pub trait MediaCapability {
    fn paused(&self) -> bool;
    fn play(&mut self) -> Result<(), PlayerError>;
    fn pause(&mut self) -> Result<(), PlayerError>;
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, seconds: f64);
    /// Total length in seconds. May be `0.0` or NaN before metadata loads.
    fn duration(&self) -> f64;
    fn volume(&self) -> f64;
    fn set_volume(&mut self, volume: f64);
    fn playback_rate(&self) -> f64;
    fn set_playback_rate(&mut self, rate: f64);
}

/// Enter/leave fullscreen for an element identified by its DOM id.
pub trait FullscreenCapability {
    fn enter(&mut self, element_id: &str) -> Result<(), PlayerError>;
    fn exit(&mut self) -> Result<(), PlayerError>;
}

/// One vendor flavour of the fullscreen API.
pub trait FullscreenProbe {
    fn name(&self) -> &'static str;
    fn is_supported(&self) -> bool;
    fn request(&self, element_id: &str) -> Result<(), PlayerError>;
    fn exit(&self) -> Result<(), PlayerError>;
}

/// Ordered list of fullscreen probes. The first supported one wins; with none
/// supported every call quietly does nothing.
pub struct FullscreenChain {
    probes: Vec<Box<dyn FullscreenProbe>>,
}

impl FullscreenChain {
    pub fn new(probes: Vec<Box<dyn FullscreenProbe>>) -> Self {
        Self { probes }
    }

    fn first_supported(&self) -> Option<&dyn FullscreenProbe> {
        self.probes
            .iter()
            .map(|probe| probe.as_ref())
            .find(|probe| probe.is_supported())
    }
}

impl FullscreenCapability for FullscreenChain {
    fn enter(&mut self, element_id: &str) -> Result<(), PlayerError> {
        match self.first_supported() {
            Some(probe) => {
                tracing::debug!("requesting fullscreen on #{element_id} via {}", probe.name());
                probe.request(element_id)
            }
            None => {
                tracing::debug!("no fullscreen api available, skipping request");
                Ok(())
            }
        }
    }

    fn exit(&mut self) -> Result<(), PlayerError> {
        match self.first_supported() {
            Some(probe) => probe.exit(),
            None => {
                tracing::debug!("no fullscreen api available, skipping exit");
                Ok(())
            }
        }
    }
}

/// Play button glyph. The title attribute follows the glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayIcon {
    Play,
    Pause,
}

impl PlayIcon {
    pub fn title(self) -> &'static str {
        match self {
            PlayIcon::Play => "Play",
            PlayIcon::Pause => "Pause",
        }
    }

    pub fn icon_name(self) -> &'static str {
        match self {
            PlayIcon::Play => "play",
            PlayIcon::Pause => "pause",
        }
    }
}

/// Speaker glyph next to the volume track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeIcon {
    High,
    Low,
    Muted,
}

impl VolumeIcon {
    pub const HIGH_THRESHOLD: f64 = 0.7;

    pub fn for_level(level: f64) -> Self {
        if level >= Self::HIGH_THRESHOLD {
            VolumeIcon::High
        } else if level > 0.0 {
            VolumeIcon::Low
        } else {
            VolumeIcon::Muted
        }
    }

    pub fn icon_name(self) -> &'static str {
        match self {
            VolumeIcon::High => "volume-high",
            VolumeIcon::Low => "volume-low",
            VolumeIcon::Muted => "volume-muted",
        }
    }
}

/// Rendered controls the controller writes into.
pub trait ControlSurface {
    fn show_play_icon(&mut self, icon: PlayIcon);
    fn set_progress_width(&mut self, width: String);
    fn set_time_labels(&mut self, current: String, total: String);
    fn set_volume_width(&mut self, width: String);
    fn show_volume_icon(&mut self, icon: VolumeIcon);
    fn set_volume_title(&mut self, title: &str);
    fn set_fullscreen_marker(&mut self, on: bool);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct FakeProbe {
        name: &'static str,
        supported: bool,
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl FullscreenProbe for FakeProbe {
        fn name(&self) -> &'static str {
            self.name
        }

        fn is_supported(&self) -> bool {
            self.supported
        }

        fn request(&self, element_id: &str) -> Result<(), PlayerError> {
            self.calls
                .borrow_mut()
                .push(format!("{}:request:{element_id}", self.name));
            Ok(())
        }

        fn exit(&self) -> Result<(), PlayerError> {
            self.calls.borrow_mut().push(format!("{}:exit", self.name));
            Ok(())
        }
    }

    fn probe(
        name: &'static str,
        supported: bool,
        calls: &Rc<RefCell<Vec<String>>>,
    ) -> Box<dyn FullscreenProbe> {
        Box::new(FakeProbe {
            name,
            supported,
            calls: calls.clone(),
        })
    }

    #[test]
    fn first_supported_probe_wins() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut chain = FullscreenChain::new(vec![
            probe("standard", false, &calls),
            probe("webkit", true, &calls),
            probe("ms", true, &calls),
        ]);

        chain.enter("player").unwrap();
        chain.exit().unwrap();

        assert_eq!(
            *calls.borrow(),
            vec!["webkit:request:player".to_string(), "webkit:exit".to_string()]
        );
    }

    #[test]
    fn unsupported_platform_is_a_quiet_no_op() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut chain = FullscreenChain::new(vec![probe("standard", false, &calls)]);

        assert!(chain.enter("player").is_ok());
        assert!(chain.exit().is_ok());
        assert!(calls.borrow().is_empty());

        let mut empty = FullscreenChain::new(Vec::new());
        assert!(empty.enter("player").is_ok());
    }

    #[test]
    fn volume_icon_thresholds() {
        assert_eq!(VolumeIcon::for_level(1.0), VolumeIcon::High);
        assert_eq!(VolumeIcon::for_level(0.7), VolumeIcon::High);
        assert_eq!(VolumeIcon::for_level(0.69), VolumeIcon::Low);
        assert_eq!(VolumeIcon::for_level(0.01), VolumeIcon::Low);
        assert_eq!(VolumeIcon::for_level(0.0), VolumeIcon::Muted);
        assert_eq!(VolumeIcon::for_level(f64::NAN), VolumeIcon::Muted);
    }
}
