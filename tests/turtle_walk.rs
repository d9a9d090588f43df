// tests/turtle_walk.rs
use arbor::{
    BranchInstance, DecorationInstance, DecorationKind, LineVertex, TurtleConfig,
    TurtleInterpreter,
};
use glam::{Mat4, Vec3};

const STEP: f32 = TurtleConfig::DEFAULT.step_size;

fn assert_near(actual: Vec3, expected: Vec3) {
    assert!(
        actual.distance(expected) < 1e-5,
        "expected {expected:?}, got {actual:?}"
    );
}

fn interpret(symbols: &str, angle: f32) -> TurtleInterpreter {
    let mut turtle = TurtleInterpreter::new(TurtleConfig::default());
    turtle.interpret(symbols, angle);
    turtle
}

fn interpret_3d(symbols: &str, angle: f32) -> TurtleInterpreter {
    let mut turtle = TurtleInterpreter::new(TurtleConfig {
        three_d: true,
        ..TurtleConfig::default()
    });
    turtle.interpret(symbols, angle);
    turtle
}

#[test]
fn branch_count_matches_draw_symbols() {
    let turtle = interpret("FGAB", 25.0);
    assert_eq!(turtle.branch_count(), 4);

    // Four straight segments chained end to end along +Y.
    let last = turtle.geometry().branches.last().unwrap();
    assert_near(last.end, Vec3::new(0.0, 4.0 * STEP, 0.0));
}

#[test]
fn balanced_brackets_return_to_fork_point() {
    let turtle = interpret("F[+F][-F]F", 25.0);
    assert_eq!(turtle.branch_count(), 4);

    // The two bracketed side branches must not displace the trunk: the
    // final segment continues straight from the first.
    let trunk_tip = turtle.geometry().branches.last().unwrap();
    assert_near(trunk_tip.start, Vec3::new(0.0, STEP, 0.0));
    assert_near(trunk_tip.end, Vec3::new(0.0, 2.0 * STEP, 0.0));
}

#[test]
fn move_without_draw_advances_silently() {
    let turtle = interpret("fF", 25.0);
    assert_eq!(turtle.branch_count(), 1);

    let branch = &turtle.geometry().branches[0];
    assert_near(branch.start, Vec3::new(0.0, STEP, 0.0));
    assert_near(branch.end, Vec3::new(0.0, 2.0 * STEP, 0.0));
}

#[test]
fn yaw_in_2d_rotates_about_world_z() {
    let turtle = interpret("+F", 90.0);
    assert_near(
        turtle.geometry().branches[0].end,
        Vec3::new(-STEP, 0.0, 0.0),
    );

    let turtle = interpret("-F", 90.0);
    assert_near(turtle.geometry().branches[0].end, Vec3::new(STEP, 0.0, 0.0));
}

#[test]
fn turn_around_reverses_heading() {
    let turtle = interpret("|F", 25.0);
    assert_near(
        turtle.geometry().branches[0].end,
        Vec3::new(0.0, -STEP, 0.0),
    );
}

#[test]
fn pitch_and_roll_are_noops_in_2d() {
    // Roll then pitch: both disabled, the turtle just climbs.
    let turtle = interpret("/&F", 90.0);
    assert_near(turtle.geometry().branches[0].end, Vec3::new(0.0, STEP, 0.0));
}

#[test]
fn pitch_rotates_about_left_in_3d() {
    let turtle = interpret_3d("&F", 90.0);
    assert_near(
        turtle.geometry().branches[0].end,
        Vec3::new(0.0, 0.0, -STEP),
    );
}

#[test]
fn roll_tilts_the_yaw_plane_in_3d() {
    // Roll left 90 brings `up` onto +X, so a subsequent yaw pitches the
    // heading out of the XY plane instead of across it.
    let turtle = interpret_3d("\\+F", 90.0);
    assert_near(turtle.geometry().branches[0].end, Vec3::new(0.0, 0.0, STEP));
}

#[test]
fn rotations_preserve_segment_length() {
    let turtle = interpret_3d("+F&F\\F/F^F-F", 33.7);
    for branch in &turtle.geometry().branches {
        let len = branch.start.distance(branch.end);
        assert!((len - STEP).abs() < 1e-5, "segment length drifted: {len}");
    }
}

#[test]
fn push_pop_taper_width_per_nesting_level() {
    let config = TurtleConfig::default();
    let turtle = interpret("F[F[F]]", 25.0);
    let branches = &turtle.geometry().branches;
    assert_eq!(branches.len(), 3);

    for branch in branches {
        assert!(
            (branch.radius_end - branch.radius_start * config.width_decay).abs() < 1e-7
        );
    }

    // Along an unbroken chain of pushes the start radius never increases.
    for pair in branches.windows(2) {
        assert!(pair[1].radius_start <= pair[0].radius_end + 1e-7);
    }
    assert!((branches[1].radius_start - config.initial_width * config.width_decay).abs() < 1e-7);
    assert!(
        (branches[2].radius_start
            - config.initial_width * config.width_decay * config.width_decay)
            .abs()
            < 1e-7
    );
}

#[test]
fn bang_shrinks_width_without_branching() {
    let config = TurtleConfig::default();
    let turtle = interpret("!F", 25.0);
    let branch = &turtle.geometry().branches[0];
    assert!((branch.radius_start - config.initial_width * config.width_decay).abs() < 1e-7);
}

#[test]
fn dangling_pop_is_ignored() {
    let turtle = interpret("]F", 25.0);
    assert_eq!(turtle.branch_count(), 1);
    assert_near(turtle.geometry().branches[0].start, Vec3::ZERO);

    let turtle = interpret("]]]", 25.0);
    assert_eq!(turtle.branch_count(), 0);
}

#[test]
fn unmatched_push_still_renders() {
    let turtle = interpret("F[+F", 25.0);
    assert_eq!(turtle.branch_count(), 2);
}

#[test]
fn unknown_symbols_are_noops() {
    let turtle = interpret("XYZ?#", 25.0);
    assert_eq!(turtle.branch_count(), 0);
    assert_eq!(turtle.decoration_count(), 0);
}

#[test]
fn decorations_partition_by_kind() {
    let config = TurtleConfig::default();
    let turtle = interpret("FLK[FLk]l", 25.0);
    let geometry = turtle.geometry();

    assert_eq!(turtle.branch_count(), 2);
    assert_eq!(turtle.decoration_count(), 5);
    assert_eq!(geometry.leaves().count(), 3);
    assert_eq!(geometry.flowers().count(), 2);

    for leaf in geometry.leaves() {
        assert_eq!(leaf.kind, DecorationKind::Leaf);
        assert_eq!(leaf.size, config.leaf_size);
        assert_eq!(leaf.color, config.leaf_color);
    }
    for flower in geometry.flowers() {
        assert_eq!(flower.kind, DecorationKind::Flower);
        assert_eq!(flower.size, config.leaf_size * 1.5);
        assert_eq!(flower.color, config.flower_color);
    }
}

#[test]
fn decoration_instances_pack_leaves_first() {
    let config = TurtleConfig::default();
    let turtle = interpret("KLk", 25.0);
    let instances = turtle.geometry().decoration_instances();

    assert_eq!(instances.len(), 3);
    assert_eq!(instances[0].size, config.leaf_size);
    assert_eq!(instances[1].size, config.leaf_size * 1.5);
    assert_eq!(instances[2].size, config.leaf_size * 1.5);
}

#[test]
fn decal_frame_at_rest_is_identity() {
    let turtle = interpret("L", 25.0);
    let decoration = &turtle.geometry().decorations[0];

    let diff = (decoration.orientation - Mat4::IDENTITY).to_cols_array();
    assert!(diff.iter().all(|c| c.abs() < 1e-6));
}

#[test]
fn quote_shifts_color_toward_green() {
    let config = TurtleConfig::default();
    let turtle = interpret("'F", 25.0);
    let color = turtle.geometry().branches[0].color;

    assert!((color.y - (config.branch_color.y + 0.05)).abs() < 1e-6);
    assert!((color.x - (config.branch_color.x - 0.02)).abs() < 1e-6);
    assert_eq!(color.z, config.branch_color.z);
}

#[test]
fn color_shift_clamps_at_channel_bounds() {
    let symbols: String = "'".repeat(30) + "F";
    let turtle = interpret(&symbols, 25.0);
    let color = turtle.geometry().branches[0].color;

    assert_eq!(color.x, 0.0);
    assert_eq!(color.y, 1.0);
}

#[test]
fn color_shift_is_scoped_by_brackets() {
    let turtle = interpret("['''F]F", 25.0);
    let branches = &turtle.geometry().branches;

    assert!(branches[0].color.y > branches[1].color.y);
    assert_eq!(branches[1].color, TurtleConfig::DEFAULT.branch_color);
}

#[test]
fn reinterpretation_rebuilds_from_scratch() {
    let mut turtle = TurtleInterpreter::new(TurtleConfig::default());
    turtle.interpret("FFFLK", 25.0);
    assert_eq!(turtle.branch_count(), 3);

    turtle.interpret("F", 25.0);
    assert_eq!(turtle.branch_count(), 1);
    assert_eq!(turtle.decoration_count(), 0);
    assert_near(turtle.geometry().branches[0].start, Vec3::ZERO);
}

#[test]
fn instance_buffers_have_gpu_layout() {
    assert_eq!(std::mem::size_of::<LineVertex>(), 6 * 4);
    assert_eq!(std::mem::size_of::<BranchInstance>(), 11 * 4);
    assert_eq!(std::mem::size_of::<DecorationInstance>(), 23 * 4);

    let turtle = interpret("FF", 25.0);
    assert_eq!(turtle.geometry().line_vertices().len(), 4);
    assert_eq!(turtle.geometry().branch_instances().len(), 2);
}

#[test]
fn planar_mode_stays_in_the_xy_plane() {
    let turtle = interpret("F+F-F&F/F", 13.0);
    for branch in &turtle.geometry().branches {
        assert_eq!(branch.start.z, 0.0);
        assert_eq!(branch.end.z, 0.0);
    }
}
