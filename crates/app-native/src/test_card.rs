// Generated stand-in for a camera frame: a colour-ramp checkerboard with a
// grid overlay, so deformations and framing are easy to see on desktop.

pub const CELL_PX: u32 = 40;
pub const LINE_PX: u32 = 2;

/// RGBA8 pixels, row-major from the top-left corner.
pub fn generate(width: u32, height: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let on_line = x % CELL_PX < LINE_PX || y % CELL_PX < LINE_PX;
            let checker = ((x / CELL_PX) + (y / CELL_PX)) % 2 == 0;
            let u = x as f32 / width.max(1) as f32;
            let v = y as f32 / height.max(1) as f32;
            let shade = if checker { 1.0 } else { 0.7 };
            let rgb = if on_line {
                [245, 245, 245]
            } else {
                [
                    ((0.2 + 0.8 * u) * shade * 255.0) as u8,
                    ((0.3 + 0.5 * (1.0 - v)) * shade * 255.0) as u8,
                    ((0.9 - 0.6 * u) * shade * 255.0) as u8,
                ]
            };
            data.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
        }
    }
    data
}
