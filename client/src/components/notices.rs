//! Submission indicators and blocking alerts.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures use a blocking `window.alert`. Endpoint failures show
//! the dismissible inline error banner driven by `SubmitState`.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

use leptos::prelude::*;
use requirements::{SubmitPhase, SubmitState};

pub const SUCCESS_TEXT: &str = "Your requirement has been submitted successfully! Our tech team will review it shortly.";

/// Which banner, if any, the submit tab shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Loading,
    Success,
    Error(String),
}

pub fn notice_for(phase: &SubmitPhase) -> Option<Notice> {
    match phase {
        SubmitPhase::Idle => None,
        SubmitPhase::Loading => Some(Notice::Loading),
        SubmitPhase::Success => Some(Notice::Success),
        SubmitPhase::Error(message) => Some(Notice::Error(message.clone())),
    }
}

/// Show a blocking browser alert.
pub fn blocking_alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
    }
}

#[component]
pub fn SubmitNotices() -> impl IntoView {
    let submit = expect_context::<RwSignal<SubmitState>>();

    move || match submit.with(|s| notice_for(&s.phase)) {
        None => ().into_any(),
        Some(Notice::Loading) => view! {
            <div class="loading-overlay show">
                <div class="spinner"></div>
                <p>"Submitting your requirement..."</p>
            </div>
        }
        .into_any(),
        Some(Notice::Success) => view! {
            <div class="success-message show" role="status">
                <i class="fas fa-check-circle"></i>
                " "
                {SUCCESS_TEXT}
            </div>
        }
        .into_any(),
        Some(Notice::Error(message)) => view! {
            <div class="error-message show" role="alert">
                <i class="fas fa-exclamation-circle"></i>
                " "
                <span class="error-text">{message}</span>
                <button
                    type="button"
                    class="dismiss-btn"
                    title="Dismiss"
                    on:click=move |_| submit.update(SubmitState::dismiss_error)
                >
                    <i class="fas fa-times"></i>
                </button>
            </div>
        }
        .into_any(),
    }
}
