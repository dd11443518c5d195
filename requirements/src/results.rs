//! Last-fetched result set and client-side status filtering.
//!
//! The set is replaced wholesale by each successful search and is never
//! re-fetched by filtering.

#[cfg(test)]
#[path = "results_test.rs"]
mod results_test;

use crate::wire::RequirementRecord;

/// Known status values, in lifecycle order.
pub const KNOWN_STATUSES: [&str; 3] = ["Pending", "In Progress", "Done"];

/// Status filter applied over the result set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    /// Exact, case-sensitive match on the record status.
    Status(String),
}

impl StatusFilter {
    /// Parse a filter key; `"all"` selects everything.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == "all" { Self::All } else { Self::Status(raw.to_owned()) }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Status(status) => status,
        }
    }

    #[must_use]
    pub fn matches(&self, record: &RequirementRecord) -> bool {
        match self {
            Self::All => true,
            Self::Status(status) => record.status == *status,
        }
    }

    /// Filter buttons offered by the tracking view: all, then each known status.
    #[must_use]
    pub fn choices() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(KNOWN_STATUSES.iter().map(|s| Self::Status((*s).to_owned())))
            .collect()
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Status(status) => status,
        }
    }
}

/// Records returned by the most recent successful search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultSet {
    records: Vec<RequirementRecord>,
}

impl ResultSet {
    #[must_use]
    pub fn new(records: Vec<RequirementRecord>) -> Self {
        Self { records }
    }

    pub fn replace(&mut self, records: Vec<RequirementRecord>) {
        self.records = records;
    }

    #[must_use]
    pub fn records(&self) -> &[RequirementRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records matching `filter`, in original order.
    #[must_use]
    pub fn filter(&self, filter: &StatusFilter) -> Vec<&RequirementRecord> {
        self.records.iter().filter(|r| filter.matches(r)).collect()
    }
}
