//! Wire types for the video service and the in-memory video catalog.

use serde::{Deserialize, Serialize};

use crate::filter::DateRange;

/// One uploaded video as listed by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub name: String,
    pub url: String,
}

/// Body of `GET /api/videos`.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoListResponse {
    pub videos: Vec<VideoRecord>,
}

/// Shown when a successful upload comes back without a message.
pub const DEFAULT_UPLOAD_MESSAGE: &str = "Upload complete";

/// Body of a successful `POST /api/upload`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl UploadResponse {
    /// The text to show the user for this upload.
    pub fn confirmation(self) -> String {
        self.message
            .unwrap_or_else(|| DEFAULT_UPLOAD_MESSAGE.to_string())
    }
}

/// Body the service may attach to a failed request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// The list as last fetched, plus the range currently applied to it.
///
/// The fetched list is never narrowed in place: the displayed videos are
/// always derived from the full list, so a new range is applied to
/// everything that was fetched rather than to a previous result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    videos: Vec<VideoRecord>,
    range: Option<DateRange>,
}

impl Catalog {
    /// Replaces the fetched list and drops any applied range.
    pub fn replace(&mut self, videos: Vec<VideoRecord>) {
        self.videos = videos;
        self.range = None;
    }

    pub fn apply_range(&mut self, range: DateRange) {
        self.range = Some(range);
    }

    pub fn clear_range(&mut self) {
        self.range = None;
    }

    pub fn range(&self) -> Option<&DateRange> {
        self.range.as_ref()
    }

    pub fn all(&self) -> &[VideoRecord] {
        &self.videos
    }

    /// The videos to display, in fetch order.
    pub fn visible(&self) -> Vec<VideoRecord> {
        match &self.range {
            Some(range) => self
                .videos
                .iter()
                .filter(|video| range.matches_filename(&video.name))
                .cloned()
                .collect(),
            None => self.videos.clone(),
        }
    }
}
