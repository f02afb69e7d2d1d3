use crate::constants::{FULLSCREEN_BUTTON_ID, RESET_BUTTON_ID, SWITCH_CAMERA_BUTTON_ID};
use crate::dom;
use crate::frame::FrameContext;
use crate::keys::{command_for_key, KeyCommand};
use crate::media::{self, VideoInput};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Cheap-to-clone handles every UI callback needs.
#[derive(Clone)]
pub struct AppHandles {
    pub document: web::Document,
    pub container: web::Element,
    pub ctx: Rc<RefCell<FrameContext>>,
    pub camera: Rc<RefCell<VideoInput>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraRequest {
    Initial,
    Next,
}

/// Start or switch the camera in the background, then follow the new
/// stream's facing mode for mirroring and show the switch button only when
/// there is somewhere to switch to.
pub fn request_camera(h: &AppHandles, request: CameraRequest) {
    let h = h.clone();
    spawn_local(async move {
        let result = match request {
            CameraRequest::Initial => media::start_camera(h.camera.clone(), None).await,
            CameraRequest::Next => media::next_camera(h.camera.clone()).await,
        };
        match result {
            Ok(Some(started)) => {
                h.ctx.borrow_mut().set_mirror(started.facing.should_mirror());
                dom::set_hidden(&h.document, SWITCH_CAMERA_BUTTON_ID, !started.multiple_devices);
            }
            Ok(None) => {}
            Err(e) => log::error!("[camera] {:?} failed: {:#}", request, e),
        }
    });
}

pub fn handle_command(h: &AppHandles, command: KeyCommand) {
    match command {
        KeyCommand::Reset => h.ctx.borrow_mut().controller.reset(),
        KeyCommand::ToggleMirror => {
            let mut ctx = h.ctx.borrow_mut();
            let mirror = !ctx.sizer.mirror();
            ctx.set_mirror(mirror);
            log::info!("[keys] mirror {}", if mirror { "on" } else { "off" });
        }
        KeyCommand::NextCamera => request_camera(h, CameraRequest::Next),
        KeyCommand::ToggleFullscreen => dom::toggle_fullscreen(&h.container),
        KeyCommand::ExitFullscreen => dom::exit_fullscreen(),
    }
}

pub fn wire_global_keydown(h: &AppHandles) {
    let Some(window) = web::window() else {
        return;
    };
    let handles = h.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.repeat() {
            return;
        }
        if let Some(command) = command_for_key(&ev.key()) {
            handle_command(&handles, command);
            if command == KeyCommand::ToggleFullscreen {
                ev.prevent_default();
            }
        }
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_buttons(h: &AppHandles) {
    {
        let h2 = h.clone();
        dom::add_click_listener(&h.document, RESET_BUTTON_ID, move || {
            handle_command(&h2, KeyCommand::Reset)
        });
    }
    {
        let h2 = h.clone();
        dom::add_click_listener(&h.document, SWITCH_CAMERA_BUTTON_ID, move || {
            handle_command(&h2, KeyCommand::NextCamera)
        });
    }
    {
        let h2 = h.clone();
        dom::add_click_listener(&h.document, FULLSCREEN_BUTTON_ID, move || {
            handle_command(&h2, KeyCommand::ToggleFullscreen)
        });
    }
    // Hidden until enumeration proves a second camera exists
    dom::set_hidden(&h.document, SWITCH_CAMERA_BUTTON_ID, true);
}

/// Window resizes move the canvas; video resizes change the media aspect.
/// Both re-run the framing. `pagehide` releases the camera.
pub fn wire_layout_listeners(h: &AppHandles) {
    let Some(window) = web::window() else {
        return;
    };
    {
        let ctx = h.ctx.clone();
        let closure = Closure::wrap(Box::new(move || {
            ctx.borrow_mut().sync_layout();
        }) as Box<dyn FnMut()>);
        let _ =
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let ctx = h.ctx.clone();
        let closure = Closure::wrap(Box::new(move || {
            ctx.borrow_mut().sync_media_size();
        }) as Box<dyn FnMut()>);
        let video = h.camera.borrow().video().clone();
        let _ = video.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let camera = h.camera.clone();
        let closure = Closure::wrap(Box::new(move || {
            camera.borrow_mut().teardown();
        }) as Box<dyn FnMut()>);
        let _ =
            window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
