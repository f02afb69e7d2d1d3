// Host-side tests for the drag lifecycle, recoil and reset animations.

use std::time::Duration;

use app_core::{is_boundary, DistortionConfig, DistortionController, ViewportRegion};
use glam::Vec2;

const SIZE: f32 = 100.0;

fn controller(segments: usize) -> DistortionController {
    DistortionController::new(
        DistortionConfig::with_segments(segments),
        ViewportRegion::from_size(SIZE, SIZE),
    )
    .expect("default config is valid")
}

/// Grid-space point to viewport pixels for the test region.
fn px(x: f32, y: f32) -> Vec2 {
    Vec2::new(x * SIZE, (1.0 - y) * SIZE)
}

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn drag_moves_center_and_pins_corners() {
    let mut c = controller(2);
    c.start_drag(px(0.5, 0.5));
    c.on_drag(px(0.6, 0.5));

    let center = c.grid().get(4);
    assert!((center.x - 0.6).abs() < 1e-5, "center x = {}", center.x);
    assert!((center.y - 0.5).abs() < 1e-5, "center y = {}", center.y);
    for corner in [0, 2, 6, 8] {
        assert_eq!(c.grid().get(corner), c.grid().original(corner));
    }
}

#[test]
fn start_drag_resets_delta_and_stores_position() {
    let mut c = controller(2);
    c.start_drag(px(0.2, 0.3));
    c.on_drag(px(0.3, 0.3));
    c.stop_drag();
    c.start_drag(px(0.7, 0.8));
    let drag = c.drag();
    assert!(drag.is_dragging);
    assert_eq!(drag.delta, Vec2::ZERO);
    assert!((drag.position - Vec2::new(0.7, 0.8)).length() < 1e-5);
}

#[test]
fn on_drag_without_start_is_a_no_op() {
    let mut c = controller(4);
    c.grid_mut().take_dirty();
    c.on_drag(px(0.5, 0.5));
    c.on_drag(px(0.6, 0.6));
    assert_eq!(c.grid().points(), c.grid().originals());
    assert!(!c.grid().is_dirty());
}

#[test]
fn stop_drag_twice_spawns_one_recoil() {
    let mut c = controller(4);
    c.start_drag(px(0.5, 0.5));
    c.on_drag(px(0.55, 0.5));
    c.stop_drag();
    c.stop_drag();
    assert!(!c.is_dragging());
    assert_eq!(c.active_recoils(), 1);
}

#[test]
fn stop_drag_without_start_spawns_nothing() {
    let mut c = controller(4);
    c.stop_drag();
    assert_eq!(c.active_recoils(), 0);
}

#[test]
fn boundary_points_survive_any_drag_sequence() {
    let mut c = controller(8);
    // Small deterministic LCG so the sequence is reproducible.
    let mut seed: u32 = 0x1234_5678;
    let mut next = move || {
        seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        (seed >> 8) as f32 / (1u32 << 24) as f32
    };
    let mut now = 0;
    for _ in 0..20 {
        c.start_drag(px(next(), next()));
        for _ in 0..10 {
            c.on_drag(px(next(), next()));
        }
        c.stop_drag();
        for _ in 0..5 {
            now += 40;
            c.advance(ms(now));
        }
    }
    now += 2_000;
    c.advance(ms(now));

    let grid = c.grid();
    for i in 0..grid.count() {
        if is_boundary(grid.original(i)) {
            assert_eq!(grid.get(i), grid.original(i), "boundary point {i} moved");
        }
    }
}

#[test]
fn reset_restores_original_after_completion() {
    let mut c = controller(8);
    c.start_drag(px(0.4, 0.4));
    c.on_drag(px(0.5, 0.45));
    c.on_drag(px(0.6, 0.55));
    c.stop_drag();
    c.advance(ms(0));
    c.advance(ms(800));
    c.advance(ms(816));
    assert_eq!(c.active_recoils(), 0);
    assert_ne!(c.grid().points(), c.grid().originals());

    c.reset();
    assert!(c.is_resetting());
    c.advance(ms(900));
    c.advance(ms(1_500));
    assert!(c.is_resetting());
    c.advance(ms(900 + 1_250));
    assert!(!c.is_resetting());
    assert_eq!(c.grid().points(), c.grid().originals());
}

#[test]
fn reset_marks_grid_dirty_every_tick() {
    let mut c = controller(4);
    c.start_drag(px(0.5, 0.5));
    c.on_drag(px(0.6, 0.5));
    c.reset();
    for t in [0, 16, 32, 48] {
        c.grid_mut().take_dirty();
        c.advance(ms(t));
        assert!(c.grid().is_dirty(), "tick at {t}ms left grid clean");
    }
}

#[test]
fn drag_cancels_reset_in_place() {
    let mut c = controller(2);
    c.start_drag(px(0.5, 0.5));
    c.on_drag(px(0.6, 0.5));
    c.reset();
    c.advance(ms(0));
    c.advance(ms(300));
    let mid_reset: Vec<Vec2> = c.grid().points().to_vec();
    assert_ne!(mid_reset[4], c.grid().original(4));

    c.start_drag(px(0.2, 0.2));
    assert!(!c.is_resetting());
    c.advance(ms(5_000));
    assert_eq!(c.grid().points(), mid_reset.as_slice());
}

#[test]
fn new_reset_supersedes_the_previous_one() {
    let mut c = controller(4);
    c.start_drag(px(0.5, 0.5));
    c.on_drag(px(0.6, 0.5));
    c.reset();
    c.advance(ms(0));
    c.advance(ms(1_000));
    c.reset();
    // The first reset would have finished at 1250ms; the second started at 1100ms.
    c.advance(ms(1_100));
    c.advance(ms(1_300));
    assert!(c.is_resetting());
    c.advance(ms(1_100 + 1_250));
    assert!(!c.is_resetting());
    assert_eq!(c.grid().points(), c.grid().originals());
}

#[test]
fn reset_leaves_running_recoils_alone() {
    let mut c = controller(4);
    c.start_drag(px(0.5, 0.5));
    c.on_drag(px(0.55, 0.5));
    c.stop_drag();
    c.advance(ms(0));
    c.reset();
    assert_eq!(c.active_recoils(), 1);
    assert!(c.is_resetting());
}

#[test]
fn rapid_recoils_finish_independently() {
    let mut c = controller(4);
    c.start_drag(px(0.5, 0.5));
    c.on_drag(px(0.52, 0.5));
    c.stop_drag();
    c.advance(ms(0));

    c.start_drag(px(0.4, 0.4));
    c.on_drag(px(0.42, 0.41));
    c.stop_drag();
    c.advance(ms(100));
    assert_eq!(c.active_recoils(), 2);

    // First recoil reaches its end value here and is pruned on the next tick.
    c.advance(ms(750));
    assert_eq!(c.active_recoils(), 2);
    c.advance(ms(760));
    assert_eq!(c.active_recoils(), 1);

    c.advance(ms(850));
    assert_eq!(c.active_recoils(), 1);
    c.advance(ms(860));
    assert_eq!(c.active_recoils(), 0);
}

#[test]
fn recoil_keeps_displacing_after_release() {
    let mut c = controller(4);
    c.start_drag(px(0.5, 0.5));
    c.on_drag(px(0.51, 0.5));
    c.stop_drag();
    let released = c.grid().get(12);
    c.advance(ms(0));
    // First tick applies the full 5x multiplier of the last delta.
    assert!(c.grid().get(12).x > released.x + 0.01);
}

#[test]
fn degenerate_region_ignores_drags() {
    let mut c = controller(4);
    c.set_region(ViewportRegion::from_size(0.0, 0.0));
    c.start_drag(Vec2::new(10.0, 10.0));
    assert!(!c.is_dragging());
    c.set_region(ViewportRegion::from_size(SIZE, SIZE));
    c.start_drag(px(0.5, 0.5));
    c.set_region(ViewportRegion::from_size(SIZE, 0.0));
    c.on_drag(px(0.6, 0.5));
    assert_eq!(c.grid().points(), c.grid().originals());
}
