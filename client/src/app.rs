//! Root application component with tab navigation and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use requirements::{SubmitState, TrackState};

use crate::net::api::GlooEndpoint;
use crate::pages::{submit::SubmitPage, track::TrackPage};
use crate::state::ui::{Tab, UiState};

/// Root application component.
///
/// Provides flow state and the endpoint as contexts. Both tabs stay mounted
/// so switching never discards input.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let submit = RwSignal::new(SubmitState::default());
    let track = RwSignal::new(TrackState::default());

    provide_context(ui);
    provide_context(submit);
    provide_context(track);
    provide_context(GlooEndpoint::from_build_env());

    let tab_buttons = Tab::ALL
        .into_iter()
        .map(|tab| {
            view! {
                <button
                    type="button"
                    class:active=move || ui.with(|u| u.is_active(tab))
                    on:click=move |_| ui.update(|u| u.tab = tab)
                >
                    {tab.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <Title text="Tech Team Requirements"/>
        <div class="container">
            <header class="header">
                <h1>"Tech Team Requirement Portal"</h1>
                <p>"Submit new requirements and track their progress"</p>
            </header>
            <nav class="nav-tabs">{tab_buttons}</nav>
            <section id=Tab::Submit.dom_id() class:hidden=move || !ui.with(|u| u.is_active(Tab::Submit))>
                <SubmitPage/>
            </section>
            <section id=Tab::Track.dom_id() class:hidden=move || !ui.with(|u| u.is_active(Tab::Track))>
                <TrackPage/>
            </section>
        </div>
    }
}
