//! Drop-zone video upload to the detection endpoint.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    Blob, Document, DragEvent, File, FormData, HtmlButtonElement, HtmlElement,
    HtmlInputElement, HtmlVideoElement, RequestInit, Url,
};

use astroguard::backend::upload::{STATUS_COMPLETE, STATUS_FAILED};
use astroguard::{BackendConfig, UploadFlow};

use crate::dom::{self, listen};
use crate::error::WebError;
use crate::net;

const DRAG_BORDER: &str = "#3b82f6";
const IDLE_BORDER: &str = "var(--border)";

/// Page elements the upload workflow touches.
struct UploadView {
    drop_zone: HtmlElement,
    button: HtmlButtonElement,
    status: Option<HtmlElement>,
    video_container: Option<HtmlElement>,
    video: Option<HtmlVideoElement>,
}

struct UploadController {
    flow: UploadFlow,
    file: Option<File>,
    view: UploadView,
    backend: BackendConfig,
}

type Shared = Rc<RefCell<UploadController>>;

fn alert(message: &str) {
    if let Ok(window) = dom::window() {
        let _ = window.alert_with_message(message);
    }
}

fn set_border(el: &HtmlElement, color: &str) {
    let _ = el.style().set_property("border-color", color);
}

/// Wire the drop zone, file input and upload button. Pages without an
/// upload section are left alone.
pub fn init(document: &Document, backend: BackendConfig) -> Result<(), WebError> {
    let (Some(drop_zone), Some(file_input), Some(button)) = (
        dom::element_by_id::<HtmlElement>(document, "dropZone"),
        dom::element_by_id::<HtmlInputElement>(document, "fileInput"),
        dom::element_by_id::<HtmlButtonElement>(document, "uploadBtn"),
    ) else {
        log::debug!("upload controls not found; video upload disabled");
        return Ok(());
    };

    let view = UploadView {
        drop_zone: drop_zone.clone(),
        button: button.clone(),
        status: dom::element_by_id(document, "uploadStatus"),
        video_container: dom::element_by_id(document, "videoResultContainer"),
        video: dom::element_by_id(document, "processedVideo"),
    };
    let shared: Shared = Rc::new(RefCell::new(UploadController {
        flow: UploadFlow::new(),
        file: None,
        view,
        backend,
    }));

    let input = file_input.clone();
    listen(&drop_zone, "click", move |_| input.click())?;

    {
        let shared = shared.clone();
        let input = file_input.clone();
        listen(&file_input, "change", move |_| {
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                handle_file(&shared, file);
            }
        })?;
    }

    {
        let zone = drop_zone.clone();
        listen(&drop_zone, "dragover", move |event| {
            event.prevent_default();
            set_border(&zone, DRAG_BORDER);
        })?;
    }

    {
        let zone = drop_zone.clone();
        listen(&drop_zone, "dragleave", move |event| {
            event.prevent_default();
            set_border(&zone, IDLE_BORDER);
        })?;
    }

    {
        let shared = shared.clone();
        let zone = drop_zone.clone();
        listen(&drop_zone, "drop", move |event| {
            event.prevent_default();
            set_border(&zone, IDLE_BORDER);
            let file = event
                .dyn_ref::<DragEvent>()
                .and_then(|drag| drag.data_transfer())
                .and_then(|transfer| transfer.files())
                .and_then(|files| files.get(0));
            if let Some(file) = file {
                handle_file(&shared, file);
            }
        })?;
    }

    listen(&button, "click", move |_| {
        let shared = shared.clone();
        spawn_local(async move { upload(shared).await });
    })?;

    Ok(())
}

fn handle_file(shared: &Shared, file: File) {
    let mut ctl = shared.borrow_mut();
    match ctl.flow.select(&file.name(), &file.type_()) {
        Ok(()) => {
            if let Some(text) = ctl.flow.selection_text() {
                if let Ok(Some(caption)) = ctl.view.drop_zone.query_selector("p") {
                    caption.set_text_content(Some(&text));
                }
            }
            log::info!("selected {} ({} bytes)", file.name(), file.size());
            ctl.file = Some(file);
        }
        Err(err) => {
            drop(ctl);
            alert(&err.to_string());
        }
    }
}

fn set_status(status: Option<&HtmlElement>, text: &str, is_error: bool) {
    let Some(status) = status else {
        return;
    };
    status.set_inner_text(text);
    let classes = status.class_list();
    let _ = if is_error {
        classes.add_1("error")
    } else {
        classes.remove_1("error")
    };
}

async fn upload(shared: Shared) {
    // Take what the request needs, then release the borrow before awaiting.
    let (file, url, status) = {
        let mut ctl = shared.borrow_mut();
        if let Err(err) = ctl.flow.begin() {
            drop(ctl);
            alert(&err.to_string());
            return;
        }
        let Some(file) = ctl.file.clone() else {
            ctl.flow.finish(false);
            drop(ctl);
            alert(&astroguard::UploadError::NoFileSelected.to_string());
            return;
        };
        if let Some(text) = ctl.flow.status_text() {
            set_status(ctl.view.status.as_ref(), text, false);
        }
        ctl.view.button.set_disabled(ctl.flow.button_disabled());
        (file, ctl.backend.detect_upload_url(), ctl.view.status.clone())
    };

    let result = post_video(&url, &file).await;

    let mut ctl = shared.borrow_mut();
    ctl.flow.finish(result.is_ok());
    match result {
        Ok(video_url) => {
            log::info!("detection complete for {}", file.name());
            if let Some(status) = &status {
                status.set_inner_html(&format!("<span style=\"color:#4ade80\">{STATUS_COMPLETE}</span>"));
                let _ = status.class_list().remove_1("error");
            }
            show_video(&ctl.view, &video_url);
        }
        Err(err) => {
            log::error!("detection upload failed: {err}");
            set_status(status.as_ref(), STATUS_FAILED, true);
        }
    }
    ctl.view.button.set_disabled(ctl.flow.button_disabled());
}

/// POST the file as multipart field `file`; resolve to an object URL for
/// the annotated video in the response.
async fn post_video(url: &str, file: &File) -> Result<String, WebError> {
    let form = FormData::new()?;
    form.append_with_blob("file", file)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&form);

    let resp = net::send_ok(url, &opts).await?;
    let blob: Blob = JsFuture::from(resp.blob()?).await?.unchecked_into();
    Ok(Url::create_object_url_with_blob(&blob)?)
}

fn show_video(view: &UploadView, video_url: &str) {
    if let Some(container) = &view.video_container {
        let _ = container.style().set_property("display", "block");
    }
    if let Some(video) = &view.video {
        video.set_src(video_url);
        if let Err(err) = video.play() {
            log::warn!("processed video did not autoplay: {}", WebError::from(err));
        }
    }
}
