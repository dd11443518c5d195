//! Page chrome state: which tab is showing.
//!
//! DESIGN
//! ======
//! Both tabs stay mounted and are hidden with CSS, so switching tabs keeps
//! half-typed forms, picked files, and fetched results.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// The two top-level tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Submit,
    Track,
}

impl Tab {
    pub const ALL: [Self; 2] = [Self::Submit, Self::Track];

    pub fn label(self) -> &'static str {
        match self {
            Self::Submit => "Submit Requirement",
            Self::Track => "Track Requirements",
        }
    }

    pub fn dom_id(self) -> &'static str {
        match self {
            Self::Submit => "submit-tab",
            Self::Track => "track-tab",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub tab: Tab,
}

impl UiState {
    pub fn is_active(&self, tab: Tab) -> bool {
        self.tab == tab
    }
}
