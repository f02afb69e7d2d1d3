// Recoils write straight into the shared grid, so overlapping ones compound.

use std::time::Duration;

use glam::Vec2;

use crate::easing::Easing;
use crate::falloff::Falloff;
use crate::grid::Grid;
use crate::tween::Tween;

/// Replays a released drag with a decaying multiplier.
#[derive(Clone, Debug)]
struct RecoilTween {
    tween: Tween,
    anchor: Vec2,
    delta: Vec2,
}

/// Eases every point from a snapshot back to its rest position.
#[derive(Clone, Debug)]
struct ResetTween {
    tween: Tween,
    distorted: Vec<Vec2>,
}

#[derive(Clone, Debug)]
pub struct TweenScheduler {
    falloff: Falloff,
    reset: Option<ResetTween>,
    recoils: Vec<RecoilTween>,
}

impl TweenScheduler {
    pub fn new(falloff: Falloff) -> Self {
        Self {
            falloff,
            reset: None,
            recoils: Vec::new(),
        }
    }

    #[inline]
    pub fn falloff(&self) -> Falloff {
        self.falloff
    }

    /// Number of recoil tweens still held, including ones that finished on
    /// the last advance and are pruned on the next.
    #[inline]
    pub fn active_recoils(&self) -> usize {
        self.recoils.len()
    }

    #[inline]
    pub fn is_resetting(&self) -> bool {
        self.reset.as_ref().is_some_and(|r| r.tween.is_playing())
    }

    pub fn spawn_recoil(
        &mut self,
        anchor: Vec2,
        delta: Vec2,
        start_multiplier: f32,
        duration: Duration,
    ) {
        self.recoils.push(RecoilTween {
            tween: Tween::new(start_multiplier, 0.0, duration, Easing::ElasticOut),
            anchor,
            delta,
        });
    }

    /// Start easing `grid` back to rest, discarding any reset already running.
    pub fn start_reset(&mut self, grid: &Grid, duration: Duration) {
        self.reset = Some(ResetTween {
            tween: Tween::new(0.0, 1.0, duration, Easing::ElasticOut),
            distorted: grid.points().to_vec(),
        });
    }

    /// Drop the running reset where it stands. Returns whether one was running.
    pub fn cancel_reset(&mut self) -> bool {
        let was_running = self.is_resetting();
        self.reset = None;
        was_running
    }

    pub fn advance(&mut self, now: Duration, grid: &mut Grid) {
        if let Some(reset) = self.reset.as_mut() {
            if let Some(t) = reset.tween.update(now) {
                let (points, original) = grid.split_mut();
                if t == 1.0 {
                    points.copy_from_slice(original);
                } else {
                    for ((p, from), to) in points.iter_mut().zip(&reset.distorted).zip(original) {
                        *p = from.lerp(*to, t);
                    }
                }
                grid.mark_dirty();
            }
            if !reset.tween.is_playing() {
                self.reset = None;
            }
        }

        let falloff = self.falloff;
        self.recoils.retain_mut(|recoil| {
            if !recoil.tween.is_playing() {
                return false;
            }
            if let Some(multiplier) = recoil.tween.update(now) {
                falloff.displace(grid, recoil.anchor, recoil.delta * multiplier);
            }
            true
        });
    }
}
