//! State behind the upload/filter widget.
//!
//! Every transition lives here so it can run without a browser. The
//! component feeds user actions and request outcomes in, and carries out the
//! [`Effect`]s that come back.

use crate::error::{ApiError, WidgetError};
use crate::filename;
use crate::filter::DateRange;
use crate::model::{Catalog, VideoRecord};

/// A file the user picked for upload.
pub trait PickedFile: Clone {
    fn file_name(&self) -> String;
}

impl PickedFile for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show a message to the user.
    Notify(String),
    /// Reset the file picker's displayed value.
    ClearFileInput,
    /// Reload the video list from the service.
    FetchVideos,
}

#[derive(Debug, Clone)]
pub struct WidgetState<F> {
    selected: Option<F>,
    catalog: Catalog,
    start_input: String,
    end_input: String,
    uploading: bool,
    pending_fetches: u32,
}

impl<F> Default for WidgetState<F> {
    fn default() -> Self {
        Self {
            selected: None,
            catalog: Catalog::default(),
            start_input: String::new(),
            end_input: String::new(),
            uploading: false,
            pending_fetches: 0,
        }
    }
}

impl<F: PickedFile> WidgetState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_file(&mut self, file: F) {
        self.selected = Some(file);
    }

    pub fn selected(&self) -> Option<&F> {
        self.selected.as_ref()
    }

    pub fn set_start_input(&mut self, value: String) {
        self.start_input = value;
    }

    pub fn set_end_input(&mut self, value: String) {
        self.end_input = value;
    }

    pub fn start_input(&self) -> &str {
        &self.start_input
    }

    pub fn end_input(&self) -> &str {
        &self.end_input
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn is_fetching(&self) -> bool {
        self.pending_fetches > 0
    }

    /// Checks the selected file and hands it back for sending. Nothing is
    /// sent when this fails.
    pub fn begin_upload(&mut self) -> Result<F, WidgetError> {
        if self.uploading {
            return Err(WidgetError::UploadInProgress);
        }
        let file = self.selected.clone().ok_or(WidgetError::NoFileSelected)?;
        let name = file.file_name();
        if !filename::is_valid(&name) {
            return Err(WidgetError::BadFileName(name));
        }
        self.uploading = true;
        Ok(file)
    }

    /// Records how an upload ended. `result` carries the service's message
    /// on success.
    pub fn finish_upload(&mut self, result: Result<String, ApiError>) -> Vec<Effect> {
        self.uploading = false;
        match result {
            Ok(message) => {
                self.selected = None;
                vec![
                    Effect::Notify(message),
                    Effect::ClearFileInput,
                    Effect::FetchVideos,
                ]
            }
            Err(err) => vec![Effect::Notify(format!(
                "Upload failed: {}",
                err.user_message()
            ))],
        }
    }

    pub fn begin_fetch(&mut self) {
        self.pending_fetches += 1;
    }

    /// Records a fetched list. A successful fetch replaces the catalog and
    /// drops any applied range.
    pub fn finish_fetch(&mut self, result: Result<Vec<VideoRecord>, ApiError>) -> Vec<Effect> {
        self.pending_fetches = self.pending_fetches.saturating_sub(1);
        match result {
            Ok(videos) => {
                self.catalog.replace(videos);
                Vec::new()
            }
            Err(err) => vec![Effect::Notify(format!(
                "Could not load videos: {}",
                err.user_message()
            ))],
        }
    }

    /// Applies the picked range to the full fetched list and returns how many
    /// videos are now shown. The display is left alone on error.
    pub fn apply_filter(&mut self) -> Result<usize, WidgetError> {
        let range = DateRange::from_inputs(&self.start_input, &self.end_input)?;
        self.catalog.apply_range(range);
        Ok(self.catalog.visible().len())
    }

    pub fn clear_filter(&mut self) {
        self.catalog.clear_range();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct FakeFile(&'static str);

    impl PickedFile for FakeFile {
        fn file_name(&self) -> String {
            self.0.to_string()
        }
    }

    const JANUARY: &str = "01012023080000-01012023090000.mp4";
    const JUNE: &str = "01062023080000-01062023090000.mp4";

    fn record(name: &str) -> VideoRecord {
        VideoRecord {
            name: name.to_string(),
            url: format!("http://localhost:5000/uploads/{name}"),
        }
    }

    fn loaded() -> WidgetState<FakeFile> {
        let mut state = WidgetState::new();
        state.begin_fetch();
        state.finish_fetch(Ok(vec![record(JANUARY), record(JUNE)]));
        state
    }

    fn shown(state: &WidgetState<FakeFile>) -> Vec<String> {
        state.catalog().visible().into_iter().map(|v| v.name).collect()
    }

    #[test]
    fn upload_needs_a_file() {
        let mut state = WidgetState::<FakeFile>::new();
        assert_eq!(state.begin_upload(), Err(WidgetError::NoFileSelected));
        assert!(!state.is_uploading());
    }

    #[test]
    fn upload_rejects_bad_names() {
        for name in ["clip.mp4", "01012023080000-0101202309000.mp4", "01012023080000-01012023090000.avi"] {
            let mut state = WidgetState::new();
            state.select_file(FakeFile(name));
            assert_eq!(
                state.begin_upload(),
                Err(WidgetError::BadFileName(name.to_string()))
            );
            assert!(!state.is_uploading());
            assert_eq!(state.selected(), Some(&FakeFile(name)));
        }
    }

    #[test]
    fn valid_upload_hands_back_the_file_once() {
        let mut state = WidgetState::new();
        state.select_file(FakeFile(JANUARY));
        assert_eq!(state.begin_upload(), Ok(FakeFile(JANUARY)));
        assert!(state.is_uploading());
        assert_eq!(state.begin_upload(), Err(WidgetError::UploadInProgress));
    }

    #[test]
    fn successful_upload_clears_selection_and_refreshes_once() {
        let mut state = WidgetState::new();
        state.select_file(FakeFile(JANUARY));
        state.begin_upload().unwrap();

        let effects = state.finish_upload(Ok("Video uploaded successfully".to_string()));
        assert_eq!(
            effects,
            vec![
                Effect::Notify("Video uploaded successfully".to_string()),
                Effect::ClearFileInput,
                Effect::FetchVideos,
            ]
        );
        assert_eq!(
            effects.iter().filter(|e| **e == Effect::FetchVideos).count(),
            1
        );
        assert!(state.selected().is_none());
        assert!(!state.is_uploading());
    }

    #[test]
    fn failed_upload_reports_and_keeps_selection() {
        let mut state = WidgetState::new();
        state.select_file(FakeFile(JANUARY));
        state.begin_upload().unwrap();

        let effects = state.finish_upload(Err(ApiError::Server {
            status: 409,
            message: Some("File already exists".to_string()),
        }));
        assert_eq!(
            effects,
            vec![Effect::Notify("Upload failed: File already exists".to_string())]
        );
        assert_eq!(state.selected(), Some(&FakeFile(JANUARY)));
        assert!(!state.is_uploading());

        state.begin_upload().unwrap();
        let effects = state.finish_upload(Err(ApiError::Transport("offline".to_string())));
        assert_eq!(
            effects,
            vec![Effect::Notify("Upload failed: Network error: offline".to_string())]
        );
    }

    #[test]
    fn filter_without_bounds_leaves_list_alone() {
        let mut state = loaded();
        state.set_start_input("2023-01-01T00:00".to_string());
        assert_eq!(state.apply_filter(), Err(WidgetError::MissingDateRange));
        assert_eq!(shown(&state), [JANUARY, JUNE]);

        state.set_start_input(String::new());
        state.set_end_input("2023-02-01T00:00".to_string());
        assert_eq!(state.apply_filter(), Err(WidgetError::MissingDateRange));
        assert_eq!(shown(&state), [JANUARY, JUNE]);
    }

    #[test]
    fn filter_keeps_recordings_in_range() {
        let mut state = loaded();
        state.set_start_input("2023-01-01T00:00".to_string());
        state.set_end_input("2023-02-01T00:00".to_string());
        assert_eq!(state.apply_filter(), Ok(1));
        assert_eq!(shown(&state), [JANUARY]);
    }

    #[test]
    fn filter_is_idempotent() {
        let mut state = loaded();
        state.set_start_input("2023-01-01T00:00".to_string());
        state.set_end_input("2023-02-01T00:00".to_string());
        state.apply_filter().unwrap();
        let first = shown(&state);
        state.apply_filter().unwrap();
        assert_eq!(shown(&state), first);
    }

    #[test]
    fn wider_range_after_narrow_one_shows_more_again() {
        let mut state = loaded();
        state.set_start_input("2023-01-01T00:00".to_string());
        state.set_end_input("2023-02-01T00:00".to_string());
        state.apply_filter().unwrap();

        state.set_end_input("2024-01-01T00:00".to_string());
        assert_eq!(state.apply_filter(), Ok(2));

        state.set_end_input("2023-02-01T00:00".to_string());
        state.apply_filter().unwrap();
        state.clear_filter();
        assert_eq!(shown(&state), [JANUARY, JUNE]);
    }

    #[test]
    fn fetch_replaces_list_and_discards_filter() {
        let mut state = loaded();
        state.set_start_input("2023-01-01T00:00".to_string());
        state.set_end_input("2023-02-01T00:00".to_string());
        state.apply_filter().unwrap();

        state.begin_fetch();
        assert!(state.is_fetching());
        let effects = state.finish_fetch(Ok(vec![record(JUNE)]));
        assert!(effects.is_empty());
        assert!(!state.is_fetching());
        assert!(state.catalog().range().is_none());
        assert_eq!(shown(&state), [JUNE]);
    }

    #[test]
    fn failed_fetch_is_reported_and_keeps_list() {
        let mut state = loaded();
        state.begin_fetch();
        let effects = state.finish_fetch(Err(ApiError::Transport("connection refused".to_string())));
        assert_eq!(
            effects,
            vec![Effect::Notify(
                "Could not load videos: Network error: connection refused".to_string()
            )]
        );
        assert_eq!(shown(&state), [JANUARY, JUNE]);
    }
}
