//! Browser bindings for the two external collaborators.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` talks to the remote requirements endpoint and `file` wraps picked
//! files as attachment sources. Both implement seams defined in the
//! `requirements` crate.

pub mod api;
pub mod file;
