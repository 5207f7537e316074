//! Recording filenames.
//!
//! A video's name carries the interval it covers:
//! `DDMMYYYYHHMMSS-DDMMYYYYHHMMSS.mp4`, start then end. Instants are kept to
//! minute precision; the seconds digits are part of the format but are not
//! read.

use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

pub const FILENAME_FORMAT: &str = "DDMMYYYYHHMMSS-DDMMYYYYHHMMSS.mp4";

const SEGMENT_LEN: usize = 14;

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d{14})-(\d{14})\.mp4$").expect("filename pattern is valid")
    })
}

/// Whether `name` is acceptable for upload.
pub fn is_valid(name: &str) -> bool {
    pattern().is_match(name)
}

/// The interval a recording covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordingInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl RecordingInterval {
    /// Reads the interval out of a filename. `None` when the name does not
    /// follow the format or a segment is not a real calendar instant; such
    /// names still pass [`is_valid`] but are never rolled over into a nearby
    /// date, so they match no range.
    pub fn from_filename(name: &str) -> Option<Self> {
        let caps = pattern().captures(name)?;
        Some(Self {
            start: parse_segment(&caps[1])?,
            end: parse_segment(&caps[2])?,
        })
    }
}

/// Parses one DDMMYYYYHHMMSS segment.
pub fn parse_segment(segment: &str) -> Option<NaiveDateTime> {
    if segment.len() != SEGMENT_LEN || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let field = |range: std::ops::Range<usize>| segment[range].parse::<u32>().ok();

    let day = field(0..2)?;
    let month = field(2..4)?;
    let year = segment[4..8].parse::<i32>().ok()?;
    let hour = field(8..10)?;
    let minute = field(10..12)?;

    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)
}
