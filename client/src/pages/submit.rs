//! Submit tab: requirement form, description editor, and attachments.
//!
//! ARCHITECTURE
//! ============
//! Form fields, picked files, and the editor are page-local. The indicator
//! state is the shared `RwSignal<SubmitState>`; its loading phase is the
//! re-entrancy guard, and its generation counter keeps a stale success
//! timer from hiding a newer result.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use leptos::prelude::*;
use requirements::submit::{SUCCESS_DISPLAY_SECS, check_description};
use requirements::wire::{DEPARTMENT_OPTIONS, PRIORITY_OPTIONS};
use requirements::{AttachmentCollector, RichTextSurface, SubmissionForm, SubmitState};

use crate::components::file_list::FileList;
use crate::components::notices::{SubmitNotices, blocking_alert};
use crate::components::rich_text::{EditorHandle, RichTextEditor};
use crate::net::api::GlooEndpoint;
use crate::net::file::BrowserFile;

/// Success banner lifetime in timer milliseconds.
fn success_hide_millis() -> u32 {
    u32::try_from(SUCCESS_DISPLAY_SECS * 1000).unwrap_or(u32::MAX)
}

#[component]
fn SelectField(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    options: &'static [&'static str],
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}" *"</label>
            <select
                id=id
                required
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">{placeholder}</option>
                {options.iter().map(|option| view! { <option value=*option>{*option}</option> }).collect_view()}
            </select>
        </div>
    }
}

#[component]
pub fn SubmitPage() -> impl IntoView {
    let submit = expect_context::<RwSignal<SubmitState>>();
    let endpoint = expect_context::<GlooEndpoint>();

    let form = RwSignal::new(SubmissionForm::default());
    let attachments = RwSignal::new_local(AttachmentCollector::<BrowserFile>::new());
    let editor = EditorHandle::new();

    let file_items = Signal::derive(move || attachments.with(AttachmentCollector::items));
    let on_remove = Callback::new(move |index: usize| {
        attachments.update(|a| {
            a.remove(index);
        });
    });

    let on_files = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let picked = crate::net::file::files_from_input(&input);
            let rejected = attachments.try_update(|a| a.select(picked)).unwrap_or_default();
            for rejection in rejected {
                blocking_alert(&rejection.alert_message());
            }
            input.set_value("");
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Err(err) = check_description(&editor.plain_text()) {
            blocking_alert(&err.user_message());
            return;
        }
        let Some(generation) = submit.try_update(SubmitState::begin).flatten() else {
            return;
        };

        let snapshot = form.get_untracked();
        let files = attachments.with_untracked(Clone::clone);
        let html = editor.html();
        let text = editor.plain_text();
        let endpoint = endpoint.clone();

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = requirements::submit::submit_requirement(&endpoint, &snapshot, &html, &text, &files).await;
            if let Err(err) = &result {
                log::warn!("submission failed: {err}");
            }
            if submit.try_update(|s| s.complete(&result)).unwrap_or(false) {
                form.set(SubmissionForm::default());
                attachments.update(AttachmentCollector::clear);
                editor.clear();
                gloo_timers::callback::Timeout::new(success_hide_millis(), move || {
                    submit.update(|s| {
                        s.expire_success(generation);
                    });
                })
                .forget();
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (generation, snapshot, files, html, text, endpoint);
        }
    };

    view! {
        <div class="form-card">
            <h2>"Submit a Requirement"</h2>
            <SubmitNotices/>
            <form class="requirement-form" on:submit=on_submit>
                <div class="form-row">
                    <div class="form-group">
                        <label for="memberName">"Your Name *"</label>
                        <input
                            id="memberName"
                            type="text"
                            required
                            prop:value=move || form.with(|f| f.member_name.clone())
                            on:input=move |ev| form.update(|f| f.member_name = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="memberEmail">"Your Email *"</label>
                        <input
                            id="memberEmail"
                            type="email"
                            required
                            prop:value=move || form.with(|f| f.member_email.clone())
                            on:input=move |ev| form.update(|f| f.member_email = event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="form-row">
                    <SelectField
                        id="department"
                        label="Department"
                        placeholder="Select department"
                        options=&DEPARTMENT_OPTIONS
                        value=Signal::derive(move || form.with(|f| f.department.clone()))
                        on_change=Callback::new(move |value| form.update(|f| f.department = value))
                    />
                    <SelectField
                        id="priority"
                        label="Priority"
                        placeholder="Select priority"
                        options=&PRIORITY_OPTIONS
                        value=Signal::derive(move || form.with(|f| f.priority.clone()))
                        on_change=Callback::new(move |value| form.update(|f| f.priority = value))
                    />
                </div>
                <div class="form-group">
                    <label for="title">"Requirement Title *"</label>
                    <input
                        id="title"
                        type="text"
                        required
                        prop:value=move || form.with(|f| f.title.clone())
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Detailed Description *"</label>
                    <RichTextEditor handle=editor/>
                </div>
                <div class="form-group">
                    <label for="fileUpload">"Attachments (max 10MB each)"</label>
                    <input id="fileUpload" type="file" multiple on:change=on_files/>
                    <FileList items=file_items on_remove=on_remove/>
                </div>
                <button class="submit-btn" type="submit" disabled=move || submit.with(SubmitState::is_loading)>
                    <i class="fas fa-paper-plane"></i>
                    " Submit Requirement"
                </button>
            </form>
        </div>
    }
}
