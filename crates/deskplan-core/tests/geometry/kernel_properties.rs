//! Property-based invariants for the geometry kernel.
//!
//! 1. Overlap is symmetric.
//! 2. `can_place` is idempotent for identical arguments.
//! 3. A placeable rectangle never overlaps any block and lies inside the room.
//! 4. Flush neighbours (sharing an edge) never overlap.

use deskplan_core::geometry::{can_place, inside_room, intersects, Rect, Room};
use proptest::prelude::*;

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (-500i64..6000, -500i64..5000, 1i64..3000, 1i64..3000)
        .prop_map(|(x, y, w, d)| Rect::new(x, y, w, d))
}

fn blocks_strategy() -> impl Strategy<Value = Vec<Rect>> {
    proptest::collection::vec(rect_strategy(), 0..6)
}

proptest! {
    #[test]
    fn overlap_is_symmetric(a in rect_strategy(), b in rect_strategy()) {
        prop_assert_eq!(intersects(&a, &b), intersects(&b, &a));
    }

    #[test]
    fn can_place_is_idempotent(r in rect_strategy(), blocks in blocks_strategy()) {
        let room = Room::new(5010, 4010);
        let first = can_place(&r, &room, &blocks);
        for _ in 0..3 {
            prop_assert_eq!(can_place(&r, &room, &blocks), first);
        }
    }

    #[test]
    fn placeable_means_clear_and_inside(r in rect_strategy(), blocks in blocks_strategy()) {
        let room = Room::new(5010, 4010);
        if can_place(&r, &room, &blocks) {
            prop_assert!(inside_room(&r, room.width, room.depth));
            for b in &blocks {
                prop_assert!(!intersects(&r, b));
            }
        }
    }

    #[test]
    fn flush_neighbours_do_not_overlap(a in rect_strategy(), w in 1i64..2000, d in 1i64..2000) {
        let right = Rect::new(a.x2(), a.y, w, d);
        let below = Rect::new(a.x, a.y2(), w, d);
        prop_assert!(!intersects(&a, &right));
        prop_assert!(!intersects(&a, &below));
    }
}
