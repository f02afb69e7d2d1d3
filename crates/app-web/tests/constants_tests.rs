// Host-side tests for web front-end constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn camera_request_matches_default_media_size() {
    assert_eq!([CAMERA_WIDTH, CAMERA_HEIGHT], app_core::DEFAULT_MEDIA_SIZE);
}

#[test]
fn front_camera_requested_and_mirrored() {
    let facing = app_core::FacingMode::parse(CAMERA_FACING_MODE);
    assert_eq!(facing, app_core::FacingMode::User);
    assert!(facing.should_mirror());
}

#[test]
fn element_ids_are_distinct() {
    let ids = [
        CONTAINER_ID,
        CANVAS_ID,
        RESET_BUTTON_ID,
        SWITCH_CAMERA_BUTTON_ID,
        FULLSCREEN_BUTTON_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty() && !a.starts_with('#'));
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
