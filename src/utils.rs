/// Utility helpers for RustyReel
use chrono::DateTime;

/// Render a position in seconds as `mm:ss`.
///
/// Goes through a UTC timestamp so fractional seconds are truncated and the
/// minutes wrap at the hour, which keeps labels short for clips under an hour.
/// Negative or non-finite input renders as `00:00`.
pub fn convert_seconds(seconds: f64) -> String {
    let millis = if seconds.is_finite() && seconds > 0.0 {
        (seconds * 1000.0) as i64
    } else {
        0
    };
    DateTime::from_timestamp_millis(millis)
        .map(|at| at.format("%M:%S").to_string())
        .unwrap_or_else(|| "00:00".to_string())
}

/// CSS width for a bar filled to `fraction` of its track.
pub fn width_percent(fraction: f64) -> String {
    format!("{}%", fraction * 100.0)
}

/// Position of a click along a track, or `None` when the track has no usable width.
pub fn track_fraction(offset_x: f64, track_width: f64) -> Option<f64> {
    if !track_width.is_finite() || track_width <= 0.0 || !offset_x.is_finite() {
        return None;
    }
    Some((offset_x / track_width).clamp(0.0, 1.0))
}

/// Duration usable as a divisor: positive and finite.
pub fn known_duration(duration: f64) -> Option<f64> {
    (duration.is_finite() && duration > 0.0).then_some(duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_seconds_to_minutes_and_seconds() {
        assert_eq!(convert_seconds(0.0), "00:00");
        assert_eq!(convert_seconds(65.0), "01:05");
        assert_eq!(convert_seconds(3599.0), "59:59");
        assert_eq!(convert_seconds(9.99), "00:09");
    }

    #[test]
    fn unknown_positions_render_as_zero() {
        assert_eq!(convert_seconds(f64::NAN), "00:00");
        assert_eq!(convert_seconds(f64::INFINITY), "00:00");
        assert_eq!(convert_seconds(-3.0), "00:00");
    }

    #[test]
    fn track_fraction_clamps_and_rejects_bad_geometry() {
        assert_eq!(track_fraction(50.0, 200.0), Some(0.25));
        assert_eq!(track_fraction(-10.0, 200.0), Some(0.0));
        assert_eq!(track_fraction(250.0, 200.0), Some(1.0));
        assert_eq!(track_fraction(10.0, 0.0), None);
        assert_eq!(track_fraction(10.0, f64::NAN), None);
    }

    #[test]
    fn width_is_fraction_in_percent() {
        assert_eq!(width_percent(0.0), "0%");
        assert_eq!(width_percent(0.5), "50%");
        assert_eq!(width_percent(1.0), "100%");
    }
}
