//! Fingertip-to-key hit testing.

use super::key::Key;
use crate::util::Point;

/// Returns the first key, in iteration order, whose bounds contain `point`.
///
/// Bounds are closed-open (`x <= px < x + w`). Overlapping keys are resolved
/// by order: the earlier key wins. Linear in the number of keys.
pub fn locate(point: Point, keys: &[Key]) -> Option<&Key> {
    keys.iter().find(|key| key.contains(point))
}

/// Index form of [`locate`], for callers that store a reference into the layout.
pub fn locate_index(point: Point, keys: &[Key]) -> Option<usize> {
    keys.iter().position(|key| key.contains(point))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::grid::default_keys;
    use proptest::prelude::*;

    fn overlapping_pair() -> Vec<Key> {
        vec![
            Key::new("first", 50, 50, 85, 85),
            Key::new("second", 100, 50, 85, 85),
        ]
    }

    #[test]
    fn miss_returns_none() {
        let keys = default_keys();
        assert!(locate(Point::new(0, 0), &keys).is_none());
        assert!(locate(Point::new(140, 100), &keys).is_none()); // gutter between A and Z
        assert!(locate(Point::new(-5, -5), &keys).is_none());
        assert!(locate(Point::new(60, 60), &[]).is_none());
    }

    #[test]
    fn edges_follow_closed_open_rule() {
        let keys = default_keys();
        assert_eq!(locate(Point::new(50, 50), &keys).unwrap().label, "A");
        assert_eq!(locate(Point::new(134, 134), &keys).unwrap().label, "A");
        assert!(locate(Point::new(135, 60), &keys).is_none());
        assert!(locate(Point::new(60, 135), &keys).is_none());
    }

    #[test]
    fn first_match_wins_on_overlap() {
        let keys = overlapping_pair();
        // Inside both boxes
        assert_eq!(locate(Point::new(120, 100), &keys).unwrap().label, "first");
        assert_eq!(locate_index(Point::new(120, 100), &keys), Some(0));
        // Only inside the second box
        assert_eq!(locate(Point::new(150, 100), &keys).unwrap().label, "second");

        let reversed: Vec<Key> = keys.into_iter().rev().collect();
        assert_eq!(
            locate(Point::new(120, 100), &reversed).unwrap().label,
            "second"
        );
    }

    #[test]
    fn side_by_side_keys_resolve_to_the_containing_one() {
        let keys = vec![
            Key::new("left", 50, 50, 85, 85),
            Key::new("right", 150, 50, 85, 85),
        ];
        // 120 < 135 so the point is still inside the left key
        assert_eq!(locate(Point::new(120, 60), &keys).unwrap().label, "left");
        assert_eq!(locate(Point::new(160, 60), &keys).unwrap().label, "right");
        // y = 160 is below both boxes (50 + 85 = 135)
        assert!(locate(Point::new(120, 160), &keys).is_none());
    }

    #[test]
    fn space_and_delete_are_reachable() {
        let keys = default_keys();
        assert_eq!(locate(Point::new(500, 400), &keys).unwrap().label, "Space");
        assert_eq!(locate(Point::new(1000, 400), &keys).unwrap().label, "Delete");
    }

    proptest! {
        #[test]
        fn interior_points_hit_their_key(key_idx in 0usize..38, dx in 0i32..85, dy in 0i32..85) {
            let keys = default_keys();
            let key = &keys[key_idx];
            let point = Point::new(
                key.bounds.x + dx * key.bounds.width / 85,
                key.bounds.y + dy,
            );
            prop_assert_eq!(locate(point, &keys).map(|k| k.label.as_str()), Some(key.label.as_str()));
        }

        #[test]
        fn points_outside_every_box_miss(x in -200i32..1500, y in -200i32..800) {
            let keys = default_keys();
            let point = Point::new(x, y);
            let inside_any = keys.iter().any(|k| k.contains(point));
            prop_assert_eq!(locate(point, &keys).is_some(), inside_any);
        }
    }
}
