//! Contenteditable description editor with a small formatting toolbar.
//!
//! SYSTEM CONTEXT
//! ==============
//! The submit page reads the editor through [`EditorHandle`], which
//! implements `RichTextSurface`: inner HTML is the description payload and
//! `innerText` is what the blank-description check looks at.

#[cfg(test)]
#[path = "rich_text_test.rs"]
mod rich_text_test;

use leptos::prelude::*;
use requirements::RichTextSurface;

/// One toolbar button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorCommand {
    Heading1,
    Heading2,
    Heading3,
    Paragraph,
    Bold,
    Italic,
    Underline,
    OrderedList,
    BulletList,
    Link,
    ClearFormatting,
}

impl EditorCommand {
    pub const TOOLBAR: [Self; 11] = [
        Self::Heading1,
        Self::Heading2,
        Self::Heading3,
        Self::Paragraph,
        Self::Bold,
        Self::Italic,
        Self::Underline,
        Self::OrderedList,
        Self::BulletList,
        Self::Link,
        Self::ClearFormatting,
    ];

    /// `document.execCommand` name.
    pub fn exec_name(self) -> &'static str {
        match self {
            Self::Heading1 | Self::Heading2 | Self::Heading3 | Self::Paragraph => "formatBlock",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::OrderedList => "insertOrderedList",
            Self::BulletList => "insertUnorderedList",
            Self::Link => "createLink",
            Self::ClearFormatting => "removeFormat",
        }
    }

    /// Fixed `execCommand` argument. Links take the URL the user enters.
    pub fn exec_value(self) -> Option<&'static str> {
        match self {
            Self::Heading1 => Some("<h1>"),
            Self::Heading2 => Some("<h2>"),
            Self::Heading3 => Some("<h3>"),
            Self::Paragraph => Some("<p>"),
            _ => None,
        }
    }

    pub fn needs_url(self) -> bool {
        self == Self::Link
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Heading1 => "H1",
            Self::Heading2 => "H2",
            Self::Heading3 => "H3",
            Self::Paragraph => "¶",
            Self::Bold => "B",
            Self::Italic => "I",
            Self::Underline => "U",
            Self::OrderedList => "1.",
            Self::BulletList => "•",
            Self::Link => "🔗",
            Self::ClearFormatting => "⌫",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Heading1 => "Heading 1",
            Self::Heading2 => "Heading 2",
            Self::Heading3 => "Heading 3",
            Self::Paragraph => "Normal text",
            Self::Bold => "Bold",
            Self::Italic => "Italic",
            Self::Underline => "Underline",
            Self::OrderedList => "Numbered list",
            Self::BulletList => "Bulleted list",
            Self::Link => "Insert link",
            Self::ClearFormatting => "Clear formatting",
        }
    }
}

/// Handle on the mounted editing surface.
#[derive(Clone, Copy)]
pub struct EditorHandle {
    node: NodeRef<leptos::html::Div>,
}

impl Default for EditorHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorHandle {
    pub fn new() -> Self {
        Self { node: NodeRef::new() }
    }
}

impl RichTextSurface for EditorHandle {
    fn html(&self) -> String {
        #[cfg(feature = "csr")]
        {
            self.node.get_untracked().map(|el| el.inner_html()).unwrap_or_default()
        }
        #[cfg(not(feature = "csr"))]
        {
            String::new()
        }
    }

    fn plain_text(&self) -> String {
        #[cfg(feature = "csr")]
        {
            self.node.get_untracked().map(|el| el.inner_text()).unwrap_or_default()
        }
        #[cfg(not(feature = "csr"))]
        {
            String::new()
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        if let Some(el) = self.node.get_untracked() {
            el.set_inner_html("");
        }
    }
}

/// Apply `command` to the current selection.
fn run_command(command: EditorCommand) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return;
        };
        let value = if command.needs_url() {
            match window.prompt_with_message("Link URL") {
                Ok(Some(url)) if !url.trim().is_empty() => url.trim().to_owned(),
                _ => return,
            }
        } else {
            command.exec_value().unwrap_or_default().to_owned()
        };
        let Some(document) = window.document().and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok()) else {
            return;
        };
        if let Err(e) = document.exec_command_with_show_ui_and_value(command.exec_name(), false, &value) {
            log::warn!("editor command {} failed: {e:?}", command.exec_name());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = command;
    }
}

/// Description editor. Buttons act on mousedown so the editor keeps its
/// selection.
#[component]
pub fn RichTextEditor(handle: EditorHandle) -> impl IntoView {
    let buttons = EditorCommand::TOOLBAR
        .into_iter()
        .map(|command| {
            view! {
                <button
                    type="button"
                    class="editor__button"
                    title=command.title()
                    on:mousedown=move |ev| {
                        ev.prevent_default();
                        run_command(command);
                    }
                >
                    {command.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="editor">
            <div class="editor__toolbar" role="toolbar">
                {buttons}
            </div>
            <div
                class="editor__surface"
                contenteditable="true"
                data-placeholder="Describe your requirement in detail..."
                node_ref=handle.node
            ></div>
        </div>
    }
}
