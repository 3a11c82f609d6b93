/// Reasons an upload cannot proceed. The messages are shown to the user.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("Please select a video file first.")]
    NoFileSelected,

    #[error("Please upload a video file.")]
    NotAVideo(String),

    #[error("An upload is already in progress.")]
    InProgress,
}

pub const STATUS_UPLOADING: &str = "Uploading and processing... This may take a moment.";
pub const STATUS_COMPLETE: &str = "Analysis Complete! Stats overlaid on video.";
pub const STATUS_FAILED: &str = "Error: Could not connect to backend processor.";

/// True for any `video/*` MIME type.
pub fn is_video_mime(mime: &str) -> bool {
    mime.starts_with("video/")
}

/// Where the upload workflow stands. The selected file name survives a
/// finished upload so the same file can be sent again.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadState {
    #[default]
    Idle,
    Selected { name: String },
    Uploading { name: String },
    Complete { name: String },
    Failed { name: String },
}

/// Select → upload → complete/failed workflow for the detection endpoint.
#[derive(Debug, Default)]
pub struct UploadFlow {
    state: UploadState,
}

impl UploadFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    fn file_name(&self) -> Option<&str> {
        match &self.state {
            UploadState::Idle => None,
            UploadState::Selected { name }
            | UploadState::Uploading { name }
            | UploadState::Complete { name }
            | UploadState::Failed { name } => Some(name),
        }
    }

    /// Pick a file. Non-video files are refused and leave the state as it was.
    pub fn select(&mut self, name: &str, mime: &str) -> Result<(), UploadError> {
        if matches!(self.state, UploadState::Uploading { .. }) {
            return Err(UploadError::InProgress);
        }
        if !is_video_mime(mime) {
            return Err(UploadError::NotAVideo(mime.to_string()));
        }
        self.state = UploadState::Selected { name: name.to_string() };
        Ok(())
    }

    /// Start sending the selected file. Returns its name.
    pub fn begin(&mut self) -> Result<String, UploadError> {
        if matches!(self.state, UploadState::Uploading { .. }) {
            return Err(UploadError::InProgress);
        }
        let name = self.file_name().ok_or(UploadError::NoFileSelected)?.to_string();
        self.state = UploadState::Uploading { name: name.clone() };
        Ok(name)
    }

    /// Record the outcome of the request started by [`begin`](Self::begin).
    pub fn finish(&mut self, success: bool) {
        if let UploadState::Uploading { name } = &self.state {
            let name = name.clone();
            self.state = if success {
                UploadState::Complete { name }
            } else {
                UploadState::Failed { name }
            };
        }
    }

    /// Drop-zone caption once a file is chosen.
    pub fn selection_text(&self) -> Option<String> {
        self.file_name().map(|name| format!("Selected: {name}"))
    }

    /// Text for the status line under the upload button.
    pub fn status_text(&self) -> Option<&'static str> {
        match self.state {
            UploadState::Uploading { .. } => Some(STATUS_UPLOADING),
            UploadState::Complete { .. } => Some(STATUS_COMPLETE),
            UploadState::Failed { .. } => Some(STATUS_FAILED),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.state, UploadState::Failed { .. })
    }

    /// The upload button is disabled only while a request is in flight.
    pub fn button_disabled(&self) -> bool {
        matches!(self.state, UploadState::Uploading { .. })
    }
}
