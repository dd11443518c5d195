//! Render-ready card view-model for fetched requirements.
//!
//! DESIGN
//! ======
//! One record maps to one [`RequirementCard`]. Plain-text fields stay raw and
//! are escaped by whatever binds them (Leptos text nodes, terminal output).
//! Markup fields (description, admin comment) are sanitized here because
//! they are injected as HTML.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use chrono::{DateTime, Local, TimeZone};
use url::Url;

use crate::results::{ResultSet, StatusFilter};
use crate::richtext::{has_visible_text, plain_text_from_html, sanitize_html};
use crate::wire::RequirementRecord;

/// Visual class of a status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusBadge {
    Pending,
    Progress,
    Done,
}

impl StatusBadge {
    /// Exact-match lookup; unrecognized statuses use the pending style.
    #[must_use]
    pub fn for_status(status: &str) -> Self {
        match status {
            "In Progress" => Self::Progress,
            "Done" => Self::Done,
            _ => Self::Pending,
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Pending => "badge-pending",
            Self::Progress => "badge-progress",
            Self::Done => "badge-done",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequirementCard {
    pub status: String,
    pub status_badge: StatusBadge,
    pub priority: String,
    pub department: String,
    pub submitted_at: String,
    pub title: String,
    /// Sanitized HTML.
    pub description_html: String,
    pub attachment_urls: Vec<String>,
    /// Sanitized HTML, present only when the comment has visible text.
    pub admin_comment_html: Option<String>,
}

impl RequirementCard {
    /// Build a card, formatting the timestamp in the viewer's local zone.
    #[must_use]
    pub fn from_record(record: &RequirementRecord) -> Self {
        Self::from_record_in(record, &Local)
    }

    /// Build a card, formatting the timestamp in `tz`.
    #[must_use]
    pub fn from_record_in<Tz>(record: &RequirementRecord, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            status: record.status.clone(),
            status_badge: StatusBadge::for_status(&record.status),
            priority: record.priority.clone(),
            department: record.department.clone(),
            submitted_at: format_timestamp_in(&record.timestamp, tz),
            title: record.title.clone(),
            description_html: sanitize_html(&record.description),
            attachment_urls: record.file_urls.as_deref().map(parse_file_urls).unwrap_or_default(),
            admin_comment_html: record
                .admin_comments
                .as_deref()
                .map(sanitize_html)
                .filter(|c| !c.trim().is_empty()),
        }
    }

    /// Plain-text rendering used by terminal output.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        let mut out = format!(
            "[{}] [{}] {}\n  {} | {}\n",
            self.status, self.priority, self.title, self.submitted_at, self.department
        );
        let description = plain_text_from_html(&self.description_html);
        if has_visible_text(&description) {
            out.push_str(&format!("  {}\n", description.trim()));
        }
        for url in &self.attachment_urls {
            out.push_str(&format!("  file: {url}\n"));
        }
        if let Some(comment) = &self.admin_comment_html {
            out.push_str(&format!("  admin: {}\n", plain_text_from_html(comment).trim()));
        }
        out
    }
}

/// Cards for the records of `set` that pass `filter`, in order.
#[must_use]
pub fn render_cards(set: &ResultSet, filter: &StatusFilter) -> Vec<RequirementCard> {
    set.filter(filter).into_iter().map(RequirementCard::from_record).collect()
}

/// Split a comma-joined URL list, keeping trimmed non-empty `http(s)` URLs.
#[must_use]
pub fn parse_file_urls(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .filter(|piece| Url::parse(piece).is_ok_and(|u| matches!(u.scheme(), "http" | "https")))
        .map(str::to_owned)
        .collect()
}

/// Format an RFC 3339 timestamp in `tz` as `Oct 17, 2026, 03:04 PM`.
/// Unparsable input is returned as-is.
#[must_use]
pub fn format_timestamp_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(parsed) => parsed.with_timezone(tz).format("%b %-d, %Y, %I:%M %p").to_string(),
        Err(_) => raw.to_owned(),
    }
}
