//! Picked-attachment list with per-file remove buttons.

#[cfg(test)]
#[path = "file_list_test.rs"]
mod file_list_test;

use leptos::prelude::*;
use requirements::FileCategory;
use requirements::attachment::FileListItem;

fn icon_class(category: FileCategory) -> String {
    format!("fas {} file-icon", category.icon_class())
}

fn icon_style(category: FileCategory) -> String {
    format!("color: {}", category.color())
}

#[component]
pub fn FileList(#[prop(into)] items: Signal<Vec<FileListItem>>, on_remove: Callback<usize>) -> impl IntoView {
    view! {
        <div class="file-list">
            {move || {
                items
                    .get()
                    .into_iter()
                    .map(|item| {
                        let index = item.index;
                        view! {
                            <div class="file-item">
                                <div class="file-info">
                                    <i class=icon_class(item.category) style=icon_style(item.category)></i>
                                    <div class="file-details">
                                        <div class="file-name">{item.name}</div>
                                        <div class="file-size">{item.size_label}</div>
                                    </div>
                                </div>
                                <button
                                    type="button"
                                    class="remove-btn"
                                    title="Remove file"
                                    on:click=move |_| on_remove.run(index)
                                >
                                    <i class="fas fa-times"></i>
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
