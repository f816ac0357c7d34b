// Desktop-webview JavaScript bridge used by non-wasm native targets.
/// Installs `window.__rustyreelBridge` once per page: command dispatch into the
/// `<video>` element, state snapshots, and fullscreen method detection.
#[cfg(not(target_arch = "wasm32"))]
const NATIVE_MEDIA_BOOTSTRAP_JS: &str = r#"
(() => {
  if (window.__rustyreelBridge) {
    return true;
  }

  const video = () => document.getElementById("rustyreel-video");
  const finite = (value, fallback) => (Number.isFinite(value) ? value : fallback);

  const snapshot = () => {
    const el = video();
    if (!el) {
      return { current_time: 0, duration: 0, paused: true, volume: 1, playback_rate: 1 };
    }
    return {
      current_time: finite(el.currentTime, 0),
      duration: finite(el.duration, 0),
      paused: !!el.paused,
      volume: finite(el.volume, 1),
      playback_rate: finite(el.playbackRate, 1),
    };
  };

  const quiet = (result) => {
    if (result && typeof result.catch === "function") {
      result.catch(() => {});
    }
  };

  const apply = (cmd) => {
    const el = video();
    if (!cmd) return false;
    try {
      switch (cmd.type) {
        case "play":
          if (el) {
            const started = el.play();
            if (started && typeof started.catch === "function") {
              started.catch(() => el.dispatchEvent(new Event("rustyreel-play-rejected")));
            }
          }
          break;
        case "pause":
          if (el) el.pause();
          break;
        case "seek":
          if (el) el.currentTime = cmd.value;
          break;
        case "volume":
          if (el) el.volume = cmd.value;
          break;
        case "rate":
          if (el) el.playbackRate = cmd.value;
          break;
        case "enter_fullscreen": {
          const target = document.getElementById(cmd.element);
          if (target && typeof target[cmd.method] === "function") {
            quiet(target[cmd.method]());
          }
          break;
        }
        case "exit_fullscreen":
          if (typeof document[cmd.method] === "function") {
            quiet(document[cmd.method]());
          }
          break;
        default:
          return false;
      }
    } catch (_err) {
      return false;
    }
    return true;
  };

  const fullscreenSupport = (methods) =>
    methods.filter((name) => typeof document.documentElement[name] === "function");

  window.__rustyreelBridge = { apply, snapshot, fullscreenSupport };
  return true;
})();
"#;

/// Streams `{ event, snapshot }` messages for the media events the controller
/// mirrors. Runs for the lifetime of the page.
#[cfg(not(target_arch = "wasm32"))]
const NATIVE_MEDIA_EVENTS_JS: &str = r#"
const bridge = window.__rustyreelBridge;
const watch = () => {
  const el = document.getElementById("rustyreel-video");
  if (!el) {
    setTimeout(watch, 100);
    return;
  }
  const forward = (event) => () => dioxus.send({ event, snapshot: bridge.snapshot() });
  el.addEventListener("timeupdate", forward("timeupdate"));
  el.addEventListener("canplay", forward("canplay"));
  el.addEventListener("volumechange", forward("state"));
  el.addEventListener("ratechange", forward("state"));
  el.addEventListener("play", forward("state"));
  el.addEventListener("pause", forward("state"));
  el.addEventListener("rustyreel-play-rejected", forward("state"));
  dioxus.send({ event: "state", snapshot: bridge.snapshot() });
};
watch();
await new Promise(() => {});
"#;
