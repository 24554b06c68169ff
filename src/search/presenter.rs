//! Result ordering and line rendering

use super::types::{FileEntry, FilterConfig};
use chrono::{DateTime, Local, TimeDelta};
use console::style;
use std::fmt;
use std::path::Path;

/// Bucketed description of how long ago something was modified.
/// Months are 30 days and years 365 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeAge {
    JustNow,
    Minutes(i64),
    Hours(i64),
    Days(i64),
    Months(i64),
    Years(i64),
}

impl RelativeAge {
    /// Classify the time elapsed between `modified` and `now`.
    /// Timestamps in the future count as just now.
    pub fn between(modified: DateTime<Local>, now: DateTime<Local>) -> Self {
        let elapsed = now.signed_duration_since(modified);

        if elapsed < TimeDelta::minutes(1) {
            RelativeAge::JustNow
        } else if elapsed < TimeDelta::hours(1) {
            RelativeAge::Minutes(elapsed.num_minutes())
        } else if elapsed < TimeDelta::days(1) {
            RelativeAge::Hours(elapsed.num_hours())
        } else if elapsed < TimeDelta::days(30) {
            RelativeAge::Days(elapsed.num_days())
        } else if elapsed < TimeDelta::days(365) {
            RelativeAge::Months(elapsed.num_days() / 30)
        } else {
            RelativeAge::Years(elapsed.num_days() / 365)
        }
    }
}

impl fmt::Display for RelativeAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelativeAge::JustNow => write!(f, "just now"),
            RelativeAge::Minutes(n) => write!(f, "{} minutes ago", n),
            RelativeAge::Hours(n) => write!(f, "{} hours ago", n),
            RelativeAge::Days(n) => write!(f, "{} days ago", n),
            RelativeAge::Months(n) => write!(f, "{} months ago", n),
            RelativeAge::Years(n) => write!(f, "{} years ago", n),
        }
    }
}

/// Most recently modified first. Stable: ties keep their collected order.
pub fn sort_newest_first(entries: &mut [FileEntry]) {
    entries.sort_by(|a, b| b.modified.cmp(&a.modified));
}

/// Renders a result set as the lines shown to the user
pub struct Presenter<'a> {
    filter: &'a FilterConfig,
    color: bool,
    now: DateTime<Local>,
}

impl<'a> Presenter<'a> {
    pub const NO_MATCHES: &'static str = "No matching files found";

    pub fn new(filter: &'a FilterConfig, color: bool) -> Self {
        Self {
            filter,
            color,
            now: Local::now(),
        }
    }

    /// Anchor age labels at a fixed instant
    pub fn at(mut self, now: DateTime<Local>) -> Self {
        self.now = now;
        self
    }

    /// Header line for a non-empty result set
    pub fn header(&self, root: &Path, count: usize) -> String {
        let noun = if count == 1 { "file" } else { "files" };
        format!("Found {} matching {} in {}:", count, noun, root.display())
    }

    /// Mark a name containing the keyword: blue when coloured, bracketed otherwise
    pub fn highlight(&self, name: &str) -> String {
        if !self.filter.keyword_matches(name) {
            return name.to_string();
        }

        if self.color {
            style(name).blue().force_styling(true).to_string()
        } else {
            format!("[{}]", name)
        }
    }

    /// `· <name> - <relative age>`
    pub fn render_line(&self, entry: &FileEntry) -> String {
        format!(
            "· {} - {}",
            self.highlight(&entry.name),
            RelativeAge::between(entry.modified, self.now)
        )
    }

    /// Sort `matches` newest first and render the full listing.
    ///
    /// An empty result set renders as a single "no matches" line; otherwise
    /// the header, a blank line, and one line per entry.
    pub fn render(&self, root: &Path, matches: &mut [FileEntry]) -> Vec<String> {
        if matches.is_empty() {
            return vec![Self::NO_MATCHES.to_string()];
        }

        sort_newest_first(matches);

        let mut lines = Vec::with_capacity(matches.len() + 2);
        lines.push(self.header(root, matches.len()));
        lines.push(String::new());
        lines.extend(matches.iter().map(|entry| self.render_line(entry)));
        lines
    }
}
