//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render pieces of the two tabs and read flow state from Leptos
//! context providers set up in `app`.

pub mod file_list;
pub mod notices;
pub mod requirement_card;
pub mod rich_text;
pub mod status_filter;
