// Drag lifecycle over the deformable grid

use std::time::Duration;

use glam::Vec2;

use crate::config::{ConfigError, DistortionConfig};
use crate::falloff::Falloff;
use crate::grid::Grid;
use crate::input::ViewportRegion;
use crate::scheduler::TweenScheduler;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragSession {
    pub is_dragging: bool,
    /// Latest pointer position in grid space.
    pub position: Vec2,
    /// `position` minus the position before the last move.
    pub delta: Vec2,
}

#[derive(Clone, Debug)]
pub struct DistortionController {
    config: DistortionConfig,
    grid: Grid,
    drag: DragSession,
    scheduler: TweenScheduler,
    region: ViewportRegion,
}

impl DistortionController {
    pub fn new(config: DistortionConfig, region: ViewportRegion) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.grid_segments);
        let falloff = Falloff::new(config.falloff_radius, config.min_intensity);
        log::debug!(
            "[controller] grid {}x{} ({} points)",
            config.grid_segments,
            config.grid_segments,
            grid.count()
        );
        Ok(Self {
            config,
            grid,
            drag: DragSession::default(),
            scheduler: TweenScheduler::new(falloff),
            region,
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for renderers that need to clear the dirty flag.
    #[inline]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[inline]
    pub fn config(&self) -> &DistortionConfig {
        &self.config
    }

    #[inline]
    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    #[inline]
    pub fn is_resetting(&self) -> bool {
        self.scheduler.is_resetting()
    }

    #[inline]
    pub fn active_recoils(&self) -> usize {
        self.scheduler.active_recoils()
    }

    #[inline]
    pub fn region(&self) -> ViewportRegion {
        self.region
    }

    pub fn set_region(&mut self, region: ViewportRegion) {
        self.region = region;
    }

    pub fn start_drag(&mut self, viewport: Vec2) {
        let Some(position) = self.region.to_grid(viewport) else {
            log::debug!("[controller] drag start ignored: empty viewport region");
            return;
        };
        self.drag = DragSession {
            is_dragging: true,
            position,
            delta: Vec2::ZERO,
        };
        if self.scheduler.cancel_reset() {
            log::debug!("[controller] reset interrupted by drag");
        }
        log::debug!(
            "[controller] drag start at ({:.3}, {:.3})",
            position.x,
            position.y
        );
    }

    pub fn on_drag(&mut self, viewport: Vec2) {
        if !self.drag.is_dragging {
            return;
        }
        let Some(position) = self.region.to_grid(viewport) else {
            return;
        };
        // The brush is anchored where this move started.
        self.drag.delta = position - self.drag.position;
        self.scheduler
            .falloff()
            .displace(&mut self.grid, self.drag.position, self.drag.delta);
        self.drag.position = position;
    }

    pub fn stop_drag(&mut self) {
        if !self.drag.is_dragging {
            return;
        }
        self.drag.is_dragging = false;
        let DragSession { position, delta, .. } = self.drag;
        self.scheduler.spawn_recoil(
            position,
            delta,
            self.config.recoil_start_multiplier,
            self.config.recoil_duration,
        );
        log::debug!(
            "[controller] drag stop; recoil delta=({:.4}, {:.4}), {} active",
            delta.x,
            delta.y,
            self.scheduler.active_recoils()
        );
    }

    /// Ease the whole grid back to rest. Running recoils keep going.
    pub fn reset(&mut self) {
        self.scheduler
            .start_reset(&self.grid, self.config.reset_duration);
        log::debug!("[controller] reset started");
    }

    /// Step every running tween to `now`. Call once per frame with increasing timestamps.
    pub fn advance(&mut self, now: Duration) {
        self.scheduler.advance(now, &mut self.grid);
    }
}
