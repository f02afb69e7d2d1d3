// DOM hooks and camera request parameters for the web front-end

pub const CONTAINER_ID: &str = "app";
pub const CANVAS_ID: &str = "app-canvas";
pub const RESET_BUTTON_ID: &str = "reset-button";
pub const SWITCH_CAMERA_BUTTON_ID: &str = "switch-camera-button";
pub const FULLSCREEN_BUTTON_ID: &str = "fullscreen-button";

// getUserMedia video constraints; plain numbers act as "ideal" values
pub const CAMERA_WIDTH: u32 = 1280;
pub const CAMERA_HEIGHT: u32 = 720;
pub const CAMERA_FACING_MODE: &str = "user";

// HTMLMediaElement.readyState at which a frame can be copied
pub const HAVE_CURRENT_DATA: u16 = 2;
