//! Best-effort calls to the detection backend: the asteroid feed and the
//! liveness probe. Failures fall back; nothing is retried.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlElement, Request, RequestInit, Response};

use astroguard::{
    fallback_records, parse_feed, BackendConfig, ConnectionStatus, FeedSource, ListEntry, NeoRecord,
};

use crate::dom;
use crate::error::WebError;

/// Issue a request and resolve to the response, whatever its status.
pub(crate) async fn send(url: &str, opts: &RequestInit) -> Result<Response, WebError> {
    let request = Request::new_with_str_and_init(url, opts)?;
    let resp_value = JsFuture::from(dom::window()?.fetch_with_request(&request)).await?;
    resp_value
        .dyn_into::<Response>()
        .map_err(|_| WebError::Js("fetch did not resolve to a Response".into()))
}

/// Issue a request and fail on any non-2xx status.
pub(crate) async fn send_ok(url: &str, opts: &RequestInit) -> Result<Response, WebError> {
    let resp = send(url, opts).await?;
    if !resp.ok() {
        return Err(WebError::Http(resp.status()));
    }
    Ok(resp)
}

async fn fetch_text(url: &str) -> Result<String, WebError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    let resp = send_ok(url, &opts).await?;
    let text = JsFuture::from(resp.text()?).await?;
    text.as_string()
        .ok_or_else(|| WebError::Js("response body is not text".into()))
}

async fn fetch_feed(backend: &BackendConfig) -> Result<Vec<NeoRecord>, WebError> {
    let body = fetch_text(&backend.asteroids_url()).await?;
    Ok(parse_feed(&body)?)
}

/// Live records when the backend answers, the sample list otherwise.
pub async fn load_feed(backend: &BackendConfig) -> (Vec<NeoRecord>, FeedSource) {
    match fetch_feed(backend).await {
        Ok(records) => {
            log::info!("asteroid feed: {} live records", records.len());
            (records, FeedSource::Live)
        }
        Err(err) => {
            log::warn!("backend API not reachable, using sample data: {err}");
            (fallback_records(), FeedSource::Cached)
        }
    }
}

/// Fetch the feed and fill `#asteroidList` and the `.hint` caption.
pub async fn init_feed(backend: BackendConfig) {
    let (records, source) = load_feed(&backend).await;

    let document = match dom::document() {
        Ok(doc) => doc,
        Err(err) => {
            log::error!("asteroid feed: {err}");
            return;
        }
    };

    match dom::element_by_id::<HtmlElement>(&document, "asteroidList") {
        Some(container) => {
            if let Err(err) = render_asteroid_list(&document, &container, &records) {
                log::error!("asteroid list render failed: {err}");
            }
        }
        None => log::debug!("#asteroidList not found; feed not shown"),
    }

    if let Ok(Some(hint)) = document.query_selector(".hint") {
        hint.set_text_content(Some(source.hint()));
    }
}

fn meta_row(document: &Document, text: &str) -> Result<HtmlElement, WebError> {
    let row: HtmlElement = document.create_element("div")?.unchecked_into();
    row.set_class_name("asteroid-meta");
    row.set_text_content(Some(text));
    Ok(row)
}

/// Replace the container's children with one row per record.
pub fn render_asteroid_list(
    document: &Document,
    container: &HtmlElement,
    records: &[NeoRecord],
) -> Result<(), WebError> {
    container.set_inner_html("");
    for record in records {
        let entry = ListEntry::from(record);

        let item: HtmlElement = document.create_element("div")?.unchecked_into();
        item.set_class_name("asteroid-item");
        if entry.hazardous {
            item.style().set_property("border-left-color", "var(--accent-orange)")?;
        }

        let name: HtmlElement = document.create_element("div")?.unchecked_into();
        name.set_class_name("asteroid-name");
        name.set_text_content(Some(&entry.name));
        item.append_child(&name)?;

        let size = meta_row(document, &entry.size_line)?;
        item.append_child(&size)?;
        let distance = meta_row(document, &entry.distance_line)?;
        distance.style().set_property("margin-top", "2px")?;
        item.append_child(&distance)?;

        container.append_child(&item)?;
    }
    Ok(())
}

/// Probe the backend root and report it in `#connectionStatus`.
pub async fn check_backend_connection(backend: BackendConfig) {
    let opts = RequestInit::new();
    opts.set_method("GET");
    let result = send(&backend.probe_url(), &opts).await;
    if let Err(err) = &result {
        log::warn!("backend probe failed: {err}");
    }
    let status = ConnectionStatus::from_probe(&result);
    log::info!("backend status: {}", status.label());

    let Ok(document) = dom::document() else {
        return;
    };
    if let Some(el) = dom::element_by_id::<HtmlElement>(&document, "connectionStatus") {
        el.set_inner_text(status.label());
        if let Err(err) = el.style().set_property("color", status.color()) {
            log::warn!("could not color connection status: {}", WebError::from(err));
        }
    }
}
