// getUserMedia camera. Each request takes a generation token; a stream that
// arrives after a newer request or a teardown is stopped, not attached.

use std::cell::RefCell;
use std::rc::Rc;

use app_core::FacingMode;
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use crate::constants::{CAMERA_FACING_MODE, CAMERA_HEIGHT, CAMERA_WIDTH};
use crate::devices::{DeviceCycle, LoadGeneration};
use crate::dom::js_err;

pub struct VideoInput {
    video: web::HtmlVideoElement,
    stream: Option<web::MediaStream>,
    devices: DeviceCycle,
    generation: LoadGeneration,
}

/// What a successful camera start reports back to the app.
#[derive(Clone, Copy, Debug)]
pub struct CameraStarted {
    pub facing: FacingMode,
    pub multiple_devices: bool,
}

impl VideoInput {
    pub fn new(video: web::HtmlVideoElement) -> Self {
        Self {
            video,
            stream: None,
            devices: DeviceCycle::default(),
            generation: LoadGeneration::default(),
        }
    }

    pub fn video(&self) -> &web::HtmlVideoElement {
        &self.video
    }

    /// Stop every track and detach the stream. Pending requests are
    /// invalidated so they cannot re-attach a camera afterwards.
    pub fn teardown(&mut self) {
        self.generation.invalidate();
        self.stop_tracks();
        self.video.set_src_object(None);
        log::info!("[camera] torn down");
    }

    fn stop_tracks(&mut self) {
        if let Some(stream) = self.stream.take() {
            stop_stream(&stream);
        }
    }
}

fn stop_stream(stream: &web::MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<web::MediaStreamTrack>() {
            track.stop();
        }
    }
}

fn media_devices() -> anyhow::Result<web::MediaDevices> {
    web::window()
        .ok_or_else(|| anyhow::anyhow!("no window"))?
        .navigator()
        .media_devices()
        .map_err(|_| anyhow::anyhow!("navigator.mediaDevices unavailable (is the page served over HTTPS?)"))
}

/// `{ video: { width, height, facingMode | deviceId: { exact } }, audio: false }`
fn constraints_for(device_id: Option<&str>) -> anyhow::Result<web::MediaStreamConstraints> {
    let video = Object::new();
    Reflect::set(&video, &"width".into(), &JsValue::from(CAMERA_WIDTH)).map_err(js_err)?;
    Reflect::set(&video, &"height".into(), &JsValue::from(CAMERA_HEIGHT)).map_err(js_err)?;
    match device_id {
        Some(id) => {
            let exact = Object::new();
            Reflect::set(&exact, &"exact".into(), &JsValue::from_str(id)).map_err(js_err)?;
            Reflect::set(&video, &"deviceId".into(), &exact).map_err(js_err)?;
        }
        None => {
            Reflect::set(
                &video,
                &"facingMode".into(),
                &JsValue::from_str(CAMERA_FACING_MODE),
            )
            .map_err(js_err)?;
        }
    }
    let constraints = web::MediaStreamConstraints::new();
    constraints.set_video(&video);
    constraints.set_audio(&JsValue::FALSE);
    Ok(constraints)
}

/// Read a string field from the first video track's settings.
fn track_setting(stream: &web::MediaStream, field: &str) -> Option<String> {
    let track = stream
        .get_video_tracks()
        .get(0)
        .dyn_into::<web::MediaStreamTrack>()
        .ok()?;
    let settings: JsValue = track.get_settings().into();
    Reflect::get(&settings, &field.into()).ok()?.as_string()
}

async fn enumerate_video_inputs(devices: &web::MediaDevices) -> anyhow::Result<Vec<String>> {
    let list = JsFuture::from(devices.enumerate_devices().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    let ids = Array::from(&list)
        .iter()
        .filter_map(|d| d.dyn_into::<web::MediaDeviceInfo>().ok())
        .filter(|d| d.kind() == web::MediaDeviceKind::Videoinput)
        .map(|d| d.device_id())
        .collect();
    Ok(ids)
}

/// Request a camera stream and attach it to the video element. `device_id`
/// pins an exact device; otherwise the front camera is preferred.
///
/// Returns `Ok(None)` when the request was superseded while in flight.
pub async fn start_camera(
    input: Rc<RefCell<VideoInput>>,
    device_id: Option<String>,
) -> anyhow::Result<Option<CameraStarted>> {
    let devices = media_devices()?;
    let constraints = constraints_for(device_id.as_deref())?;
    let token = {
        let mut v = input.borrow_mut();
        v.stop_tracks();
        v.generation.begin()
    };

    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(js_err)?;
    let stream: web::MediaStream = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("camera request rejected: {:?}", e))?
        .dyn_into()
        .map_err(js_err)?;

    if !input.borrow().generation.is_current(token) {
        log::debug!("[camera] stale stream {} discarded", token);
        stop_stream(&stream);
        return Ok(None);
    }

    let video = {
        let mut v = input.borrow_mut();
        v.video.set_src_object(Some(&stream));
        v.stream = Some(stream.clone());
        v.video.clone()
    };
    match video.play() {
        Ok(p) => spawn_local(async move {
            if let Err(e) = JsFuture::from(p).await {
                log::error!("[camera] video playback failed: {:?}", e);
            }
        }),
        Err(e) => log::error!("[camera] video playback failed: {:?}", e),
    }

    if !input.borrow().devices.is_queried() {
        let ids = enumerate_video_inputs(&devices).await?;
        if ids.is_empty() {
            log::warn!("[camera] stream granted but no videoinput devices listed");
        }
        input.borrow_mut().devices.set_devices(ids);
    }

    let mut v = input.borrow_mut();
    if let Some(active) = track_setting(&stream, "deviceId") {
        v.devices.sync_to(&active);
    }
    let facing = track_setting(&stream, "facingMode")
        .map(|s| FacingMode::parse(&s))
        .unwrap_or_default();
    log::info!(
        "[camera] streaming ({} device(s), facing {:?})",
        v.devices.len(),
        facing
    );
    Ok(Some(CameraStarted {
        facing,
        multiple_devices: v.devices.has_multiple(),
    }))
}

/// Move to the next enumerated camera. With a single device this only logs.
pub async fn next_camera(input: Rc<RefCell<VideoInput>>) -> anyhow::Result<Option<CameraStarted>> {
    let next = input.borrow_mut().devices.advance().map(str::to_owned);
    match next {
        Some(id) => start_camera(input, Some(id)).await,
        None => {
            log::info!("[camera] no other camera to switch to");
            Ok(None)
        }
    }
}
