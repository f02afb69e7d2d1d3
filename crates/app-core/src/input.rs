// Platform pointer/touch events to drag calls. Only the first contact counts.

use glam::Vec2;
use smallvec::SmallVec;

use crate::controller::DistortionController;

/// Touch contacts in viewport coordinates, in platform order.
pub type TouchPoints = SmallVec<[Vec2; 4]>;

/// Screen-space rectangle the grid is stretched over.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportRegion {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewportRegion {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Region anchored at the origin, e.g. a window's client area.
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Viewport point to grid space (y up). `None` for a zero-sized region.
    #[inline]
    pub fn to_grid(&self, viewport: Vec2) -> Option<Vec2> {
        if self.is_degenerate() {
            return None;
        }
        Some(Vec2::new(
            (viewport.x - self.left) / self.width,
            1.0 - (viewport.y - self.top) / self.height,
        ))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PointerInput {
    MouseDown(Vec2),
    MouseMove(Vec2),
    MouseUp,
    MouseLeave,
    TouchStart(TouchPoints),
    TouchMove(TouchPoints),
    TouchEnd,
    TouchCancel,
}

impl PointerInput {
    pub fn touch_start(points: impl IntoIterator<Item = Vec2>) -> Self {
        Self::TouchStart(points.into_iter().collect())
    }

    pub fn touch_move(points: impl IntoIterator<Item = Vec2>) -> Self {
        Self::TouchMove(points.into_iter().collect())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragAction {
    Start,
    Move,
    Stop,
    Ignored,
}

/// Route one input event to the controller. Returns what it was mapped to.
pub fn dispatch(controller: &mut DistortionController, input: &PointerInput) -> DragAction {
    match input {
        PointerInput::MouseDown(p) => {
            controller.start_drag(*p);
            DragAction::Start
        }
        PointerInput::TouchStart(points) => match points.first() {
            Some(p) => {
                controller.start_drag(*p);
                DragAction::Start
            }
            None => DragAction::Ignored,
        },
        PointerInput::MouseMove(p) => {
            controller.on_drag(*p);
            DragAction::Move
        }
        PointerInput::TouchMove(points) => match points.first() {
            Some(p) => {
                controller.on_drag(*p);
                DragAction::Move
            }
            None => DragAction::Ignored,
        },
        PointerInput::MouseUp
        | PointerInput::MouseLeave
        | PointerInput::TouchEnd
        | PointerInput::TouchCancel => {
            controller.stop_drag();
            DragAction::Stop
        }
    }
}
