use crate::dom;
use crate::render;
use app_core::{DistortionController, FrameClock, FrameSizer, TextureFraming};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one animation frame touches. Shared with event handlers via
/// `Rc<RefCell<_>>`; handlers never hold the borrow across an await.
pub struct FrameContext {
    pub controller: DistortionController,
    pub sizer: FrameSizer,
    pub gpu: Option<render::GpuState>,
    pub clock: FrameClock,
    pub canvas: web::HtmlCanvasElement,
    pub video: web::HtmlVideoElement,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.controller.advance(self.clock.now());
        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
        match gpu.render(&mut self.controller, &self.video) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
            Err(e) => log::warn!("[frame] render skipped: {:?}", e),
        }
    }

    /// Window resized: refresh the canvas backing store, the input region
    /// and the viewport side of the framing.
    pub fn sync_layout(&mut self) {
        dom::sync_canvas_backing_size(&self.canvas);
        let region = dom::client_region(&self.canvas);
        self.controller.set_region(region);
        let framing = self.sizer.set_viewport_size(region.width, region.height);
        self.push_framing(framing);
    }

    /// Video resized (first frame or camera switch).
    pub fn sync_media_size(&mut self) {
        let (w, h) = (self.video.video_width(), self.video.video_height());
        log::info!("[frame] media size {}x{}", w, h);
        let framing = self.sizer.set_media_size(w as f32, h as f32);
        self.push_framing(framing);
    }

    pub fn set_mirror(&mut self, mirror: bool) {
        let framing = self.sizer.set_mirror(mirror);
        self.push_framing(framing);
    }

    pub fn push_framing(&self, framing: TextureFraming) {
        if let Some(gpu) = self.gpu.as_ref() {
            gpu.set_framing(framing);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    controller: &DistortionController,
) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, controller).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
