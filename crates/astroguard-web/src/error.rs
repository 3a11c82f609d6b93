use astroguard::FeedError;
use wasm_bindgen::JsValue;

/// Failures at the browser boundary. Callers log them and fall back;
/// none of them stop the animation once it runs.
#[derive(thiserror::Error, Debug)]
pub enum WebError {
    #[error("JS error: {0}")]
    Js(String),

    #[error("HTTP {0}")]
    Http(u16),

    #[error("missing element: {0}")]
    MissingElement(&'static str),

    #[error(transparent)]
    Feed(#[from] FeedError),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        WebError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(WebError::Http(503).to_string(), "HTTP 503");
        assert_eq!(WebError::MissingElement("window").to_string(), "missing element: window");
    }
}
