pub mod clock;
pub mod config;
pub mod constants;
pub mod controller;
pub mod easing;
pub mod falloff;
pub mod frame;
pub mod grid;
pub mod input;
pub mod scheduler;
pub mod state;
pub mod tween;

pub use clock::*;
pub use config::*;
pub use constants::*;
pub use controller::*;
pub use easing::*;
pub use falloff::*;
pub use frame::*;
pub use grid::*;
pub use input::*;
pub use scheduler::*;
pub use state::*;
pub use tween::*;

// Shader bundled as a string constant
pub static MESH_WGSL: &str = include_str!("../shaders/mesh.wgsl");
