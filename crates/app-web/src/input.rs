use std::cell::RefCell;
use std::rc::Rc;

use app_core::{dispatch, DragAction, PointerInput, TouchPoints};
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::frame::FrameContext;

#[inline]
pub fn mouse_client_px(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Active contacts in client pixels, `touches[0]` first.
pub fn touch_client_px(list: &web::TouchList) -> TouchPoints {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
        .collect()
}

fn on_pointer(ctx: &Rc<RefCell<FrameContext>>, input: PointerInput) {
    let action = dispatch(&mut ctx.borrow_mut().controller, &input);
    if matches!(action, DragAction::Start | DragAction::Stop) {
        log::debug!("[input] {:?} from {:?}", action, input);
    }
}

fn listen<E: JsCast + 'static>(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(_)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::error!("[input] failed to listen for {event}: {:?}", e);
    }
    closure.forget();
}

/// Wire mouse and touch events on the canvas to the drag controller.
pub fn wire_pointer_handlers(canvas: &web::HtmlCanvasElement, ctx: Rc<RefCell<FrameContext>>) {
    // Keep the browser from scrolling or zooming while the mesh is dragged
    let _ = canvas.style().set_property("touch-action", "none");
    let target: &web::EventTarget = canvas.as_ref();

    {
        let ctx = ctx.clone();
        listen(target, "mousedown", move |ev: web::MouseEvent| {
            on_pointer(&ctx, PointerInput::MouseDown(mouse_client_px(&ev)));
            ev.prevent_default();
        });
    }
    {
        let ctx = ctx.clone();
        listen(target, "mousemove", move |ev: web::MouseEvent| {
            on_pointer(&ctx, PointerInput::MouseMove(mouse_client_px(&ev)));
        });
    }
    {
        let ctx = ctx.clone();
        listen(target, "mouseup", move |_: web::MouseEvent| {
            on_pointer(&ctx, PointerInput::MouseUp);
        });
    }
    {
        let ctx = ctx.clone();
        listen(target, "mouseleave", move |_: web::MouseEvent| {
            on_pointer(&ctx, PointerInput::MouseLeave);
        });
    }
    {
        let ctx = ctx.clone();
        listen(target, "touchstart", move |ev: web::TouchEvent| {
            on_pointer(&ctx, PointerInput::TouchStart(touch_client_px(&ev.touches())));
            ev.prevent_default();
        });
    }
    {
        let ctx = ctx.clone();
        listen(target, "touchmove", move |ev: web::TouchEvent| {
            on_pointer(&ctx, PointerInput::TouchMove(touch_client_px(&ev.touches())));
            ev.prevent_default();
        });
    }
    {
        let ctx = ctx.clone();
        listen(target, "touchend", move |_: web::TouchEvent| {
            on_pointer(&ctx, PointerInput::TouchEnd);
        });
    }
    listen(target, "touchcancel", move |_: web::TouchEvent| {
        on_pointer(&ctx, PointerInput::TouchCancel);
    });
}
