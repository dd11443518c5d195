//! One fetched requirement rendered as a card.
//!
//! Plain fields are bound as text nodes. Description and admin comment are
//! already sanitized by the view-model and go in through `inner_html`.

#[cfg(test)]
#[path = "requirement_card_test.rs"]
mod requirement_card_test;

use leptos::prelude::*;
use requirements::RequirementCard;
use requirements::StatusBadge;

fn status_badge_class(badge: StatusBadge) -> String {
    format!("badge {}", badge.css_class())
}

#[component]
pub fn RequirementCardView(card: RequirementCard) -> impl IntoView {
    let RequirementCard {
        status,
        status_badge,
        priority,
        department,
        submitted_at,
        title,
        description_html,
        attachment_urls,
        admin_comment_html,
    } = card;
    let has_attachments = !attachment_urls.is_empty();
    let data_status = status.clone();

    view! {
        <div class="requirement-card" data-status=data_status>
            <div class="card-header">
                <div>
                    <span class=status_badge_class(status_badge)>{status}</span>
                    <span class="badge badge-priority">{priority}</span>
                </div>
                <div class="card-meta">
                    <div>
                        <i class="far fa-calendar"></i>
                        " "
                        {submitted_at}
                    </div>
                    <div class="card-meta__department">
                        <i class="fas fa-building"></i>
                        " "
                        {department}
                    </div>
                </div>
            </div>

            <h3 class="card-title">{title}</h3>
            <div class="card-description" inner_html=description_html></div>

            {has_attachments
                .then(move || {
                    view! {
                        <div class="card-attachments">
                            <strong>
                                <i class="fas fa-paperclip"></i>
                                " Attached Files:"
                            </strong>
                            <div class="card-attachments__links">
                                {attachment_urls
                                    .into_iter()
                                    .map(|url| {
                                        view! {
                                            <a class="file-link" href=url target="_blank" rel="noopener noreferrer">
                                                <i class="fas fa-download"></i>
                                                " View File"
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })}

            {admin_comment_html
                .map(|comment| {
                    view! {
                        <div class="card-comment">
                            <strong>
                                <i class="fas fa-comment-dots"></i>
                                " Admin Comments:"
                            </strong>
                            <div class="card-comment__body" inner_html=comment></div>
                        </div>
                    }
                })}
        </div>
    }
}
