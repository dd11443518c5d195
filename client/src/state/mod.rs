//! Client state modules used by Leptos contexts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Flow state (`SubmitState`, `TrackState`) comes from the `requirements`
//! crate and is provided directly; this module only adds page chrome.

pub mod ui;
