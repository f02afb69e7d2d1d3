// Host-side tests for camera device cycling and request generations.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod devices {
    include!("../src/devices.rs");
}

use devices::*;

fn ids(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn cycle_before_enumeration_is_inert() {
    let mut c = DeviceCycle::default();
    assert!(!c.is_queried());
    assert!(!c.has_multiple());
    assert_eq!(c.current(), None);
    assert_eq!(c.advance(), None);
}

#[test]
fn single_device_never_switches() {
    let mut c = DeviceCycle::default();
    c.set_devices(ids(&["front"]));
    assert!(c.is_queried());
    assert!(!c.has_multiple());
    assert_eq!(c.advance(), None);
    assert_eq!(c.current(), Some("front"));
}

#[test]
fn advance_wraps_around() {
    let mut c = DeviceCycle::default();
    c.set_devices(ids(&["a", "b", "c"]));
    assert_eq!(c.current(), Some("a"));
    assert_eq!(c.advance(), Some("b"));
    assert_eq!(c.advance(), Some("c"));
    assert_eq!(c.advance(), Some("a"));
}

#[test]
fn sync_to_active_device_moves_cursor() {
    let mut c = DeviceCycle::default();
    c.set_devices(ids(&["a", "b", "c"]));
    assert!(c.sync_to("c"));
    assert_eq!(c.advance(), Some("a"));
    assert!(!c.sync_to("missing"));
    assert_eq!(c.current(), Some("a"));
}

#[test]
fn empty_enumeration_is_queried_but_empty() {
    let mut c = DeviceCycle::default();
    c.set_devices(Vec::new());
    assert!(c.is_queried());
    assert_eq!(c.len(), 0);
}

#[test]
fn newer_request_supersedes_older_token() {
    let mut g = LoadGeneration::default();
    let first = g.begin();
    assert!(g.is_current(first));
    let second = g.begin();
    assert!(!g.is_current(first));
    assert!(g.is_current(second));
}

#[test]
fn invalidate_cancels_outstanding_request() {
    let mut g = LoadGeneration::default();
    let token = g.begin();
    g.invalidate();
    assert!(!g.is_current(token));
    // A fresh request after teardown is current again.
    let next = g.begin();
    assert!(g.is_current(next));
}
