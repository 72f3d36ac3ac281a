//! Shared formatting utilities for UI components.

/// Format axis label with smart precision.
pub fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-2..1e5).contains(&abs_val) {
        format!("{:.1e}", val)
    } else if abs_val >= 100.0 || val.fract() == 0.0 {
        format!("{:.0}", val)
    } else if abs_val >= 1.0 {
        format!("{:.1}", val)
    } else {
        format!("{:.2}", val)
    }
}

/// Format playback progress, e.g. `Frame 12/200`.
pub fn format_progress(played: usize, total: usize) -> String {
    format!("Frame {}/{}", played, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_labels() {
        assert_eq!(format_axis_label(0.0), "0");
        assert_eq!(format_axis_label(5.5), "5.5");
        assert_eq!(format_axis_label(8.0), "8");
        assert_eq!(format_axis_label(100.0), "100");
        assert_eq!(format_axis_label(0.25), "0.25");
        assert_eq!(format_axis_label(f64::NAN), "?");
    }

    #[test]
    fn progress() {
        assert_eq!(format_progress(12, 200), "Frame 12/200");
    }
}
