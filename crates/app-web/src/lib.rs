#![cfg(target_arch = "wasm32")]
use app_core::{
    DistortionConfig, DistortionController, FacingMode, FrameClock, FrameSizer,
    DEFAULT_MEDIA_SIZE,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod devices;
mod dom;
mod events;
mod frame;
mod input;
mod keys;
mod media;
mod render;

use constants::{CANVAS_ID, CONTAINER_ID};
use events::{AppHandles, CameraRequest};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn create_video_element(
    document: &web::Document,
    container: &web::Element,
) -> anyhow::Result<web::HtmlVideoElement> {
    let video: web::HtmlVideoElement = document
        .create_element("video")
        .map_err(dom::js_err)?
        .dyn_into()
        .map_err(dom::js_err)?;
    // iOS Safari only autoplays inline, muted video
    video.set_attribute("playsinline", "").map_err(dom::js_err)?;
    video.set_muted(true);
    video.set_autoplay(true);
    video.set_hidden(true);
    container.append_child(&video).map_err(dom::js_err)?;
    Ok(video)
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container: web::Element = dom::element_by_id(&document, CONTAINER_ID)?;
    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?;
    let video = create_video_element(&document, &container)?;

    // Avoid grabbing a 2D context here to allow WebGPU to acquire the canvas
    dom::sync_canvas_backing_size(&canvas);

    let controller = DistortionController::new(
        DistortionConfig::default(),
        dom::client_region(&canvas),
    )?;
    let gpu = frame::init_gpu(&canvas, &controller).await;
    if gpu.is_none() {
        log::warn!("[init] rendering disabled; input and camera still wired");
    }

    // Until the camera reports otherwise assume a front camera at the
    // requested resolution
    let mut sizer = FrameSizer::new(FacingMode::default().should_mirror());
    let [media_w, media_h] = DEFAULT_MEDIA_SIZE;
    sizer.set_media_size(media_w as f32, media_h as f32);

    let ctx = Rc::new(RefCell::new(frame::FrameContext {
        controller,
        sizer,
        gpu,
        clock: FrameClock::new(),
        canvas: canvas.clone(),
        video: video.clone(),
    }));
    ctx.borrow_mut().sync_layout();

    let handles = AppHandles {
        document,
        container,
        ctx: ctx.clone(),
        camera: Rc::new(RefCell::new(media::VideoInput::new(video))),
    };
    input::wire_pointer_handlers(&canvas, ctx.clone());
    events::wire_buttons(&handles);
    events::wire_global_keydown(&handles);
    events::wire_layout_listeners(&handles);
    events::request_camera(&handles, CameraRequest::Initial);

    frame::start_loop(ctx);
    log::info!("[init] ready");
    Ok(())
}
