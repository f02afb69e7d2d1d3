use std::time::Duration;

// Shared deformation tuning constants used by both web and native frontends.

// Mesh layout
pub const GRID_SEGMENTS: usize = 64; // cells per side; the lattice has (n+1)^2 points
pub const MAX_GRID_SEGMENTS: usize = 1024; // keeps every vertex index well inside u32

// Drag falloff
pub const FALLOFF_RADIUS: f32 = 0.25; // grid-space distance at which intensity reaches 0
pub const MIN_INTENSITY: f32 = 0.01; // vertices weighted below this are skipped

// Recoil after release
pub const RECOIL_DURATION: Duration = Duration::from_millis(750);
pub const RECOIL_START_MULTIPLIER: f32 = 5.0; // decays to 0 over the recoil

// Reset to rest shape
pub const RESET_DURATION: Duration = Duration::from_millis(1250);

// Source media assumed until the first real frame size is known
pub const DEFAULT_MEDIA_SIZE: [u32; 2] = [1280, 720];
