use deskplan_core::door::{door_arc_angles, ArcAngles, DoorSwing};
use deskplan_core::Side;

fn arc(start_angle: i32, extent: i32, lines: [i32; 2]) -> ArcAngles {
    ArcAngles {
        start_angle,
        extent,
        radius_lines: lines,
    }
}

#[test]
fn test_all_effective_combinations() {
    use DoorSwing::{In, Out};
    use Side::{Bottom, Left, Right, Top};

    // (side, swing, effective flip, expected)
    let table = [
        (Top, Out, false, arc(90, 90, [90, 180])),
        (Top, Out, true, arc(0, 90, [90, 0])),
        (Bottom, Out, false, arc(270, 90, [270, 0])),
        (Bottom, Out, true, arc(180, 90, [270, 180])),
        (Left, Out, false, arc(0, 90, [0, 90])),
        (Left, Out, true, arc(270, 90, [0, 270])),
        (Right, Out, false, arc(180, 90, [180, 270])),
        (Right, Out, true, arc(90, 90, [180, 90])),
        (Top, In, false, arc(270, 90, [270, 0])),
        (Top, In, true, arc(180, 90, [270, 180])),
        (Bottom, In, false, arc(0, 90, [0, 90])),
        (Bottom, In, true, arc(90, 90, [180, 90])),
        (Left, In, false, arc(270, 90, [270, 0])),
        (Left, In, true, arc(0, 90, [90, 0])),
        (Right, In, false, arc(180, 90, [180, 270])),
        (Right, In, true, arc(90, 90, [180, 90])),
    ];

    for (side, swing, flipped, expected) in table {
        let (flip_v, flip_h) = if side.is_long_wall() {
            (flipped, false)
        } else {
            (false, flipped)
        };
        assert_eq!(
            door_arc_angles(side, swing, flip_v, flip_h),
            expected,
            "side {side} swing {swing:?} flipped {flipped}"
        );
    }
}

#[test]
fn test_ineffective_flip_is_ignored() {
    for swing in [DoorSwing::In, DoorSwing::Out] {
        for side in Side::ALL {
            let plain = door_arc_angles(side, swing, false, false);
            if side.is_long_wall() {
                assert_eq!(door_arc_angles(side, swing, false, true), plain);
            } else {
                assert_eq!(door_arc_angles(side, swing, true, false), plain);
            }
        }
    }
}

#[test]
fn test_extent_never_exceeds_half_turn() {
    for swing in [DoorSwing::In, DoorSwing::Out] {
        for side in Side::ALL {
            for flip_v in [false, true] {
                for flip_h in [false, true] {
                    let a = door_arc_angles(side, swing, flip_v, flip_h);
                    assert!((0..=180).contains(&a.extent));
                    assert!((0..360).contains(&a.start_angle));
                }
            }
        }
    }
}
