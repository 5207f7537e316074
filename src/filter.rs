//! Date range selection for the video list.

use chrono::NaiveDateTime;

use crate::error::WidgetError;
use crate::filename::RecordingInterval;

/// Formats a `datetime-local` input may produce.
const INPUT_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Inclusive bounds a recording must fall within.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    /// Builds a range from the raw values of the two pickers.
    pub fn from_inputs(start: &str, end: &str) -> Result<Self, WidgetError> {
        let (start, end) = (start.trim(), end.trim());
        if start.is_empty() || end.is_empty() {
            return Err(WidgetError::MissingDateRange);
        }
        Ok(Self {
            start: parse_input(start)?,
            end: parse_input(end)?,
        })
    }

    pub fn contains(&self, interval: &RecordingInterval) -> bool {
        interval.start >= self.start && interval.end <= self.end
    }

    /// Whether the named recording lies inside the range. Names that do not
    /// encode an interval never match.
    pub fn matches_filename(&self, name: &str) -> bool {
        RecordingInterval::from_filename(name).is_some_and(|interval| self.contains(&interval))
    }
}

fn parse_input(value: &str) -> Result<NaiveDateTime, WidgetError> {
    INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| WidgetError::InvalidDate(value.to_string()))
}
