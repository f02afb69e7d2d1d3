use std::time::Duration;

use crate::constants::{
    FALLOFF_RADIUS, GRID_SEGMENTS, MAX_GRID_SEGMENTS, MIN_INTENSITY, RECOIL_DURATION, RECOIL_START_MULTIPLIER,
    RESET_DURATION,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid needs at least one segment per side")]
    NoSegments,
    #[error("grid of {0} segments per side exceeds the maximum of {max}", max = MAX_GRID_SEGMENTS)]
    TooManySegments(usize),
    #[error("falloff radius must be positive and finite, got {0}")]
    BadRadius(f32),
    #[error("minimum intensity must lie in [0, 1), got {0}")]
    BadMinIntensity(f32),
    #[error("recoil multiplier must be finite, got {0}")]
    BadRecoilMultiplier(f32),
    #[error("{0} duration must be non-zero")]
    ZeroDuration(&'static str),
}

#[derive(Clone, Debug, PartialEq)]
pub struct DistortionConfig {
    pub grid_segments: usize,
    pub falloff_radius: f32,
    pub min_intensity: f32,
    pub recoil_duration: Duration,
    pub recoil_start_multiplier: f32,
    pub reset_duration: Duration,
}

impl Default for DistortionConfig {
    fn default() -> Self {
        Self {
            grid_segments: GRID_SEGMENTS,
            falloff_radius: FALLOFF_RADIUS,
            min_intensity: MIN_INTENSITY,
            recoil_duration: RECOIL_DURATION,
            recoil_start_multiplier: RECOIL_START_MULTIPLIER,
            reset_duration: RESET_DURATION,
        }
    }
}

impl DistortionConfig {
    /// Default tuning on a grid with a different resolution.
    pub fn with_segments(grid_segments: usize) -> Self {
        Self {
            grid_segments,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_segments == 0 {
            return Err(ConfigError::NoSegments);
        }
        if self.grid_segments > MAX_GRID_SEGMENTS {
            return Err(ConfigError::TooManySegments(self.grid_segments));
        }
        if !(self.falloff_radius.is_finite() && self.falloff_radius > 0.0) {
            return Err(ConfigError::BadRadius(self.falloff_radius));
        }
        if !(0.0..1.0).contains(&self.min_intensity) {
            return Err(ConfigError::BadMinIntensity(self.min_intensity));
        }
        if !self.recoil_start_multiplier.is_finite() {
            return Err(ConfigError::BadRecoilMultiplier(
                self.recoil_start_multiplier,
            ));
        }
        if self.recoil_duration.is_zero() {
            return Err(ConfigError::ZeroDuration("recoil"));
        }
        if self.reset_duration.is_zero() {
            return Err(ConfigError::ZeroDuration("reset"));
        }
        Ok(())
    }
}
