//! Orthogonal connector routing between the panel and a highlight box
//!
//! Pure screen-space geometry. The path always has exactly one right-angle
//! bend; anything smarter (multi-bend routing, obstacle avoidance) is out.

use crate::core::types::{Rect, Vec2};

/// Route a 3-point orthogonal path from the panel to the target
///
/// The four clear spatial relations are checked in fixed priority order
/// (right, below, left, above) and the first match wins. Overlapping or
/// ambiguously adjacent rectangles yield no path: a bent line over an
/// overlapping pair reads as noise.
pub fn compute_connector(panel: Rect, target: Rect) -> Option<[Vec2; 3]> {
    if target.left >= panel.right {
        // Target right of panel: exit right-mid, turn at the target's left edge
        let start = panel.right_mid();
        let end = target.left_mid();
        Some([start, Vec2::new(target.left, start.y), end])
    } else if target.top >= panel.bottom {
        // Target below panel: exit bottom-mid, turn at the target's top edge
        let start = panel.bottom_mid();
        let end = target.top_mid();
        Some([start, Vec2::new(start.x, target.top), end])
    } else if target.right <= panel.left {
        // Mirror of the right case
        let start = panel.left_mid();
        let end = target.right_mid();
        Some([start, Vec2::new(target.right, start.y), end])
    } else if target.bottom <= panel.top {
        // Mirror of the below case
        let start = panel.top_mid();
        let end = target.bottom_mid();
        Some([start, Vec2::new(start.x, target.bottom), end])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_right_of_panel() {
        let panel = Rect::new(0.0, 0.0, 100.0, 40.0);
        let target = Rect::new(200.0, 10.0, 260.0, 50.0);

        let [p1, p2, p3] = compute_connector(panel, target).unwrap();
        // Exits the panel's right edge at its vertical middle
        assert_eq!(p1, Vec2::new(100.0, 20.0));
        // Turns at the target's left edge, still on the exit row
        assert_eq!(p2, Vec2::new(200.0, 20.0));
        // Terminates at the target's left-mid edge
        assert_eq!(p3, Vec2::new(200.0, 30.0));
    }

    #[test]
    fn test_target_below_panel() {
        let panel = Rect::new(0.0, 0.0, 100.0, 40.0);
        let target = Rect::new(40.0, 300.0, 120.0, 340.0);

        let [p1, p2, p3] = compute_connector(panel, target).unwrap();
        assert_eq!(p1, Vec2::new(50.0, 40.0));
        assert_eq!(p2, Vec2::new(50.0, 300.0));
        assert_eq!(p3, Vec2::new(80.0, 300.0));
    }

    #[test]
    fn test_target_left_of_panel() {
        let panel = Rect::new(500.0, 100.0, 700.0, 160.0);
        let target = Rect::new(100.0, 120.0, 200.0, 180.0);

        let [p1, p2, p3] = compute_connector(panel, target).unwrap();
        assert_eq!(p1, Vec2::new(500.0, 130.0));
        assert_eq!(p2, Vec2::new(200.0, 130.0));
        assert_eq!(p3, Vec2::new(200.0, 150.0));
    }

    #[test]
    fn test_target_above_panel() {
        let panel = Rect::new(100.0, 400.0, 300.0, 500.0);
        let target = Rect::new(120.0, 50.0, 200.0, 100.0);

        let [p1, p2, p3] = compute_connector(panel, target).unwrap();
        assert_eq!(p1, Vec2::new(200.0, 400.0));
        assert_eq!(p2, Vec2::new(200.0, 100.0));
        assert_eq!(p3, Vec2::new(160.0, 100.0));
    }

    #[test]
    fn test_overlapping_rects_have_no_connector() {
        let panel = Rect::new(0.0, 0.0, 100.0, 100.0);
        let target = Rect::new(50.0, 50.0, 150.0, 150.0);
        assert_eq!(compute_connector(panel, target), None);

        // Containment is overlap too
        let inner = Rect::new(25.0, 25.0, 75.0, 75.0);
        assert_eq!(compute_connector(panel, inner), None);
    }

    #[test]
    fn test_diagonal_target_resolves_right_first() {
        // Both "right of" and "below" hold; the right relation wins.
        let panel = Rect::new(0.0, 0.0, 100.0, 40.0);
        let target = Rect::new(200.0, 300.0, 260.0, 340.0);

        let [p1, _, p3] = compute_connector(panel, target).unwrap();
        assert_eq!(p1, Vec2::new(100.0, 20.0));
        assert_eq!(p3, target.left_mid());
    }

    #[test]
    fn test_edge_adjacent_with_clear_direction() {
        // Touching edges still count as "right of"
        let panel = Rect::new(0.0, 0.0, 100.0, 40.0);
        let target = Rect::new(100.0, 0.0, 160.0, 40.0);

        let [p1, p2, p3] = compute_connector(panel, target).unwrap();
        assert_eq!(p1, Vec2::new(100.0, 20.0));
        assert_eq!(p2, Vec2::new(100.0, 20.0));
        assert_eq!(p3, Vec2::new(100.0, 20.0));
    }

    #[test]
    fn test_single_bend_shape() {
        // The middle point shares an axis with each endpoint
        let panel = Rect::new(0.0, 0.0, 100.0, 40.0);
        let target = Rect::new(300.0, 200.0, 400.0, 260.0);

        let [p1, p2, p3] = compute_connector(panel, target).unwrap();
        assert!(p1.y == p2.y || p1.x == p2.x);
        assert!(p2.x == p3.x || p2.y == p3.y);
    }
}
