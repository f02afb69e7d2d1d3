// Cover-fit the media onto the viewport in texture space. Mirroring flips
// the horizontal sampling direction and needs repeat addressing.

use glam::Vec2;

/// Horizontal mirroring follows the camera: only rear ("environment")
/// cameras are shown unmirrored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FacingMode {
    User,
    Environment,
    #[default]
    Unknown,
}

impl FacingMode {
    /// Parse a `MediaTrackSettings.facingMode` style string.
    pub fn parse(s: &str) -> Self {
        match s {
            "user" => FacingMode::User,
            "environment" => FacingMode::Environment,
            _ => FacingMode::Unknown,
        }
    }

    #[inline]
    pub fn should_mirror(self) -> bool {
        self != FacingMode::Environment
    }
}

/// UV scale/offset: `sample = uv * repeat + offset`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextureFraming {
    pub repeat: Vec2,
    pub offset: Vec2,
}

impl TextureFraming {
    pub const IDENTITY: Self = Self {
        repeat: Vec2::ONE,
        offset: Vec2::ZERO,
    };

    #[inline]
    pub fn is_mirrored(&self) -> bool {
        self.repeat.x < 0.0
    }

    /// Same crop with the horizontal sampling direction forced.
    pub fn with_mirror(self, mirror: bool) -> Self {
        let magnitude = self.repeat.x.abs();
        let repeat_x = if mirror { -magnitude } else { magnitude };
        let offset_x = if magnitude < 1.0 {
            (1.0 - repeat_x) / 2.0
        } else {
            0.0
        };
        Self {
            repeat: Vec2::new(repeat_x, self.repeat.y),
            offset: Vec2::new(offset_x, self.offset.y),
        }
    }
}

/// Framing for `media` shown in `viewport`, both `(width, height)`.
///
/// Returns `None` when either size has a zero (or negative) dimension, so
/// callers keep the last good framing instead of producing NaN offsets.
pub fn compute_framing(viewport: Vec2, media: Vec2, mirror: bool) -> Option<TextureFraming> {
    if !(viewport.x > 0.0 && viewport.y > 0.0 && media.x > 0.0 && media.y > 0.0) {
        return None;
    }
    let video_aspect = media.x / media.y;
    let viewport_aspect = viewport.x / viewport.y;
    let sign = if mirror { -1.0 } else { 1.0 };

    let framing = if video_aspect > viewport_aspect {
        let repeat_x = sign * (viewport_aspect / video_aspect);
        TextureFraming {
            repeat: Vec2::new(repeat_x, 1.0),
            offset: Vec2::new((1.0 - repeat_x) / 2.0, 0.0),
        }
    } else {
        let repeat_y = video_aspect / viewport_aspect;
        TextureFraming {
            repeat: Vec2::new(sign, repeat_y),
            offset: Vec2::new(0.0, (1.0 - repeat_y) / 2.0),
        }
    };
    Some(framing)
}

/// Keeps the last viewport/media sizes and mirror flag, recomputing on change.
#[derive(Clone, Debug)]
pub struct FrameSizer {
    mirror: bool,
    viewport: Vec2,
    media: Vec2,
    framing: TextureFraming,
}

impl FrameSizer {
    pub fn new(mirror: bool) -> Self {
        Self {
            mirror,
            viewport: Vec2::ZERO,
            media: Vec2::ZERO,
            framing: TextureFraming::IDENTITY.with_mirror(mirror),
        }
    }

    #[inline]
    pub fn mirror(&self) -> bool {
        self.mirror
    }

    #[inline]
    pub fn framing(&self) -> TextureFraming {
        self.framing
    }

    pub fn set_viewport_size(&mut self, width: f32, height: f32) -> TextureFraming {
        self.viewport = Vec2::new(width, height);
        self.recompute()
    }

    pub fn set_media_size(&mut self, width: f32, height: f32) -> TextureFraming {
        self.media = Vec2::new(width, height);
        self.recompute()
    }

    pub fn set_mirror(&mut self, mirror: bool) -> TextureFraming {
        self.mirror = mirror;
        self.recompute()
    }

    fn recompute(&mut self) -> TextureFraming {
        match compute_framing(self.viewport, self.media, self.mirror) {
            Some(f) => self.framing = f,
            None => {
                log::debug!(
                    "[frame] keeping previous framing; viewport {}x{} media {}x{}",
                    self.viewport.x,
                    self.viewport.y,
                    self.media.x,
                    self.media.y
                );
                self.framing = self.framing.with_mirror(self.mirror);
            }
        }
        self.framing
    }
}
