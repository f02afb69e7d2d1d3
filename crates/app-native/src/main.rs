mod render;
mod test_card;

use glam::Vec2;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use app_core::{
    dispatch, DistortionConfig, DistortionController, FrameClock, FrameSizer, PointerInput,
    ViewportRegion, DEFAULT_MEDIA_SIZE,
};
use render::GpuState;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Mesh Distortion (native)")
        .with_inner_size(winit::dpi::LogicalSize::new(960.0, 540.0))
        .build(&event_loop)?;

    let size = window.inner_size();
    let mut controller = DistortionController::new(
        DistortionConfig::default(),
        ViewportRegion::from_size(size.width as f32, size.height as f32),
    )?;
    let [media_w, media_h] = DEFAULT_MEDIA_SIZE;
    let card = test_card::generate(media_w, media_h);
    let mut state = pollster::block_on(GpuState::new(
        &window,
        &controller,
        (&card, media_w, media_h),
    ))?;

    // The desktop stand-in for a camera is never mirrored until toggled
    let mut sizer = FrameSizer::new(false);
    sizer.set_media_size(media_w as f32, media_h as f32);
    state.set_framing(sizer.set_viewport_size(size.width as f32, size.height as f32));

    let clock = FrameClock::new();
    let mut cursor = Vec2::ZERO;
    let mut primary_touch: Option<u64> = None;
    log::info!("[native] mesh distortion ready, {media_w}x{media_h} test card");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => {
                let (w, h) = (size.width as f32, size.height as f32);
                controller.set_region(ViewportRegion::from_size(w, h));
                state.set_framing(sizer.set_viewport_size(w, h));
                state.resize(size);
            }
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                cursor = Vec2::new(position.x as f32, position.y as f32);
                dispatch(&mut controller, &PointerInput::MouseMove(cursor));
            }
            WindowEvent::MouseInput {
                state: button_state,
                button: MouseButton::Left,
                ..
            } => {
                let input = match button_state {
                    ElementState::Pressed => PointerInput::MouseDown(cursor),
                    ElementState::Released => PointerInput::MouseUp,
                };
                dispatch(&mut controller, &input);
            }
            WindowEvent::CursorLeft { .. } => {
                dispatch(&mut controller, &PointerInput::MouseLeave);
            }
            WindowEvent::Touch(Touch {
                phase, location, id, ..
            }) => {
                let point = Vec2::new(location.x as f32, location.y as f32);
                // Only the first finger down drives the brush
                let input = match phase {
                    TouchPhase::Started if primary_touch.is_none() => {
                        primary_touch = Some(id);
                        Some(PointerInput::touch_start([point]))
                    }
                    TouchPhase::Moved if primary_touch == Some(id) => {
                        Some(PointerInput::touch_move([point]))
                    }
                    TouchPhase::Ended if primary_touch == Some(id) => {
                        primary_touch = None;
                        Some(PointerInput::TouchEnd)
                    }
                    TouchPhase::Cancelled if primary_touch == Some(id) => {
                        primary_touch = None;
                        Some(PointerInput::TouchCancel)
                    }
                    _ => None,
                };
                if let Some(input) = input {
                    dispatch(&mut controller, &input);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => match logical_key.as_ref() {
                Key::Character("r") | Key::Character("R") => controller.reset(),
                Key::Character("m") | Key::Character("M") => {
                    let mirror = !sizer.mirror();
                    state.set_framing(sizer.set_mirror(mirror));
                    log::info!("[native] mirror {}", if mirror { "on" } else { "off" });
                }
                Key::Named(NamedKey::Escape) => elwt.exit(),
                _ => {}
            },
            _ => {}
        },
        Event::AboutToWait => {
            controller.advance(clock.now());
            match state.render(&mut controller) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("[native] GPU out of memory");
                    elwt.exit()
                }
                Err(e) => log::warn!("[native] frame skipped: {e:?}"),
            }
        }
        _ => {}
    })?;
    Ok(())
}
