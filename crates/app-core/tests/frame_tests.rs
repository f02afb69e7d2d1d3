// Host-side tests for texture framing (letterbox/pillarbox and mirroring).

use app_core::{compute_framing, FacingMode, FrameSizer, FramingUniform, TextureFraming};
use glam::Vec2;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn matching_aspect_needs_no_crop() {
    let f = compute_framing(Vec2::new(1920.0, 1080.0), Vec2::new(1280.0, 720.0), false).unwrap();
    assert_eq!(f.repeat, Vec2::new(1.0, 1.0));
    assert_eq!(f.offset, Vec2::ZERO);

    let m = compute_framing(Vec2::new(1920.0, 1080.0), Vec2::new(1280.0, 720.0), true).unwrap();
    assert_eq!(m.repeat, Vec2::new(-1.0, 1.0));
    assert_eq!(m.offset, Vec2::ZERO);
}

#[test]
fn wide_media_in_square_viewport_crops_horizontally() {
    let f = compute_framing(Vec2::new(1000.0, 1000.0), Vec2::new(1280.0, 720.0), false).unwrap();
    assert!(approx(f.repeat.x, 0.5625), "repeat.x = {}", f.repeat.x);
    assert!(approx(f.offset.x, 0.21875), "offset.x = {}", f.offset.x);
    assert_eq!(f.repeat.y, 1.0);
    assert_eq!(f.offset.y, 0.0);
}

#[test]
fn mirrored_crop_stays_centered() {
    let f = compute_framing(Vec2::new(1000.0, 1000.0), Vec2::new(1280.0, 720.0), true).unwrap();
    assert!(approx(f.repeat.x, -0.5625));
    assert!(approx(f.offset.x, 0.78125));
    assert!(f.is_mirrored());
    // Sampled range is the same centered slice, just traversed right to left.
    let left_edge = f.offset.x;
    let right_edge = f.repeat.x + f.offset.x;
    assert!(approx(left_edge, 1.0 - 0.21875));
    assert!(approx(right_edge, 0.21875));
}

#[test]
fn tall_media_crops_vertically() {
    let f = compute_framing(Vec2::new(1000.0, 1000.0), Vec2::new(720.0, 1280.0), false).unwrap();
    assert_eq!(f.repeat.x, 1.0);
    assert_eq!(f.offset.x, 0.0);
    assert!(approx(f.repeat.y, 0.5625));
    assert!(approx(f.offset.y, 0.21875));
}

#[test]
fn zero_dimensions_skip_framing() {
    assert!(compute_framing(Vec2::new(1000.0, 0.0), Vec2::new(1280.0, 720.0), false).is_none());
    assert!(compute_framing(Vec2::new(1000.0, 500.0), Vec2::new(1280.0, 0.0), false).is_none());
    assert!(compute_framing(Vec2::new(0.0, 500.0), Vec2::new(0.0, 720.0), true).is_none());
}

#[test]
fn sizer_keeps_last_good_framing_on_zero_height() {
    let mut sizer = FrameSizer::new(false);
    sizer.set_media_size(1280.0, 720.0);
    let good = sizer.set_viewport_size(1000.0, 1000.0);
    let kept = sizer.set_viewport_size(1000.0, 0.0);
    assert_eq!(good, kept);
    assert!(kept.repeat.x.is_finite() && kept.offset.x.is_finite());
}

#[test]
fn sizer_mirror_toggle_flips_sign_only() {
    let mut sizer = FrameSizer::new(false);
    sizer.set_media_size(1280.0, 720.0);
    let plain = sizer.set_viewport_size(1000.0, 1000.0);
    let mirrored = sizer.set_mirror(true);
    assert!(approx(mirrored.repeat.x, -plain.repeat.x));
    assert_eq!(mirrored.repeat.y, plain.repeat.y);
    assert!(sizer.mirror());
    assert_eq!(sizer.set_mirror(false), plain);
}

#[test]
fn sizer_applies_mirror_before_sizes_are_known() {
    let mut sizer = FrameSizer::new(true);
    assert_eq!(sizer.framing().repeat, Vec2::new(-1.0, 1.0));
    let f = sizer.set_mirror(false);
    assert_eq!(f, TextureFraming::IDENTITY);
}

#[test]
fn sizer_recomputes_on_media_change() {
    let mut sizer = FrameSizer::new(false);
    sizer.set_viewport_size(1000.0, 1000.0);
    let wide = sizer.set_media_size(1280.0, 720.0);
    let tall = sizer.set_media_size(720.0, 1280.0);
    assert!(wide.repeat.x < 1.0);
    assert_eq!(tall.repeat.x, 1.0);
    assert!(tall.repeat.y < 1.0);
}

#[test]
fn facing_mode_decides_mirroring() {
    assert!(FacingMode::parse("user").should_mirror());
    assert!(!FacingMode::parse("environment").should_mirror());
    assert!(FacingMode::parse("").should_mirror());
    assert_eq!(FacingMode::parse("left"), FacingMode::Unknown);
}

#[test]
fn uniform_packs_repeat_then_offset() {
    let f = TextureFraming {
        repeat: Vec2::new(-0.5, 1.0),
        offset: Vec2::new(0.75, 0.0),
    };
    let u = FramingUniform::from(f);
    let raw: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&u));
    assert_eq!(raw, &[-0.5, 1.0, 0.75, 0.0]);
    assert_eq!(FramingUniform::default().repeat, [1.0, 1.0]);
}
