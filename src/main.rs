use dioxus::prelude::*;

mod components;
mod controller;
mod error;
mod settings;
mod utils;

use components::VideoPlayer;

const PLAYER_CSS: Asset = asset!("/assets/styling/player.css");

fn log_level(debug_build: bool) -> tracing::Level {
    if debug_build {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    }
}

fn main() {
    if let Err(err) = dioxus::logger::init(log_level(cfg!(debug_assertions))) {
        eprintln!("Failed to initialize logger: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(settings::load_settings()));

    rsx! {
        document::Meta { name: "theme-color", content: "#a38449" }
        document::Title { "RustyReel" }
        document::Stylesheet { href: PLAYER_CSS }

        VideoPlayer {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_builds_drop_debug_logs() {
        assert_eq!(log_level(true), tracing::Level::DEBUG);
        assert_eq!(log_level(false), tracing::Level::INFO);
    }
}
