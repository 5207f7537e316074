pub mod activity_log;
pub mod date_range_picker;
pub mod file_input;
pub mod video_list;
