//! Status filter bar for the tracking results.

use leptos::prelude::*;
use requirements::{StatusFilter, TrackState};

#[component]
pub fn StatusFilterBar() -> impl IntoView {
    let track = expect_context::<RwSignal<TrackState>>();

    let buttons = StatusFilter::choices()
        .into_iter()
        .map(|choice| {
            let label = choice.label().to_owned();
            let key = choice.key().to_owned();
            let active = {
                let choice = choice.clone();
                move || track.with(|t| t.filter == choice)
            };
            view! {
                <button
                    type="button"
                    class="filter-btn"
                    class:active=active
                    data-filter=key
                    on:click=move |_| track.update(|t| t.set_filter(choice.clone()))
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    view! { <div class="filter-bar">{buttons}</div> }
}
