/// Default location of the video service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Where the video service lives. Handed to the widget as a property so the
/// host page can point it at another server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn upload_url(&self) -> String {
        format!("{}/api/upload", self.base_url)
    }

    pub fn videos_url(&self) -> String {
        format!("{}/api/videos", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
