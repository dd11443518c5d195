//! Track tab: look up requirements by email and filter them by status.

#[cfg(test)]
#[path = "track_test.rs"]
mod track_test;

use leptos::prelude::*;
use requirements::validate::validate_search_email;
use requirements::{SearchPhase, TrackState};

use crate::components::notices::blocking_alert;
use crate::components::requirement_card::RequirementCardView;
use crate::components::status_filter::StatusFilterBar;
use crate::net::api::GlooEndpoint;

fn result_count_label(count: usize) -> String {
    match count {
        1 => "1 requirement".to_owned(),
        n => format!("{n} requirements"),
    }
}

#[component]
pub fn TrackPage() -> impl IntoView {
    let track = expect_context::<RwSignal<TrackState>>();
    let endpoint = expect_context::<GlooEndpoint>();
    let email = RwSignal::new(String::new());

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = match validate_search_email(&email.get_untracked()) {
            Ok(value) => value,
            Err(err) => {
                blocking_alert(&err.user_message());
                return;
            }
        };
        if !track.try_update(TrackState::begin).unwrap_or(false) {
            return;
        }
        let endpoint = endpoint.clone();

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            use requirements::RequirementsEndpoint;

            log::info!("searching requirements for {email_value}");
            let reply = endpoint.search(&email_value).await;
            if let Some(Err(err)) = track.try_update(|t| t.apply(reply)) {
                log::warn!("search failed: {err}");
                blocking_alert(&err.user_message());
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email_value, endpoint);
        }
    };

    let phase = move || track.with(|t| t.phase);
    let cards = move || track.with(TrackState::visible_cards);

    view! {
        <div class="form-card">
            <h2>"Track Your Requirements"</h2>
            <form class="search-box" on:submit=on_search>
                <input
                    type="email"
                    placeholder="Enter your email address"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <button class="search-btn" type="submit" disabled=move || track.with(TrackState::is_loading)>
                    <i class="fas fa-search"></i>
                    " Search"
                </button>
            </form>

            <Show when=move || phase() == SearchPhase::Loading>
                <div class="search-loading">
                    <div class="spinner"></div>
                    <p>"Loading your requirements..."</p>
                </div>
            </Show>

            <Show when=move || phase() == SearchPhase::Empty>
                <div class="no-results">
                    <i class="fas fa-inbox"></i>
                    <p>"No requirements found for this email address."</p>
                </div>
            </Show>

            <Show when=move || phase() == SearchPhase::Results>
                <div class="results-container">
                    <StatusFilterBar/>
                    <p class="result-count">{move || result_count_label(cards().len())}</p>
                    <div class="requirements-list">
                        {move || {
                            cards()
                                .into_iter()
                                .map(|card| view! { <RequirementCardView card/> })
                                .collect_view()
                        }}
                    </div>
                </div>
            </Show>
        </div>
    }
}
