use serde::{Deserialize, Serialize};

/// How the container moves to a new offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// A request to scroll the deck container.
///
/// Serializes to the options object accepted by `Element.scrollTo`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollCommand {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

/// Offset that aligns slide `target` with the viewport top.
///
/// The target is not clamped: negative or past-the-end indices produce
/// negative or past-the-end offsets. Boundary controls are gated by the
/// navigation indicator instead.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn target_offset(target: i64, viewport_height: f64) -> f64 {
    target as f64 * viewport_height
}

/// Builds the animated scroll for slide `target`, using the viewport height
/// measured at call time.
#[must_use]
pub fn navigate(target: i64, viewport_height: f64) -> ScrollCommand {
    ScrollCommand {
        top: target_offset(target, viewport_height),
        behavior: ScrollBehavior::Smooth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_five_targets_4000px() {
        let command = navigate(5, 800.0);
        assert!((command.top - 4000.0).abs() < f64::EPSILON);
        assert_eq!(command.behavior, ScrollBehavior::Smooth);
    }

    #[test]
    fn previous_from_one_targets_top() {
        assert_eq!(navigate(0, 800.0).top, 0.0);
    }

    #[test]
    fn targets_are_not_clamped() {
        assert!((target_offset(-1, 800.0) + 800.0).abs() < f64::EPSILON);
        assert!((target_offset(13, 800.0) - 10_400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn uses_height_given_at_call_time() {
        assert!((navigate(2, 800.0).top - 1600.0).abs() < f64::EPSILON);
        assert!((navigate(2, 1080.0).top - 2160.0).abs() < f64::EPSILON);
    }

    #[test]
    fn serializes_as_scroll_to_options() {
        let json = serde_json::to_string(&navigate(3, 100.0)).unwrap();
        assert_eq!(json, r#"{"top":300.0,"behavior":"smooth"}"#);
    }
}
