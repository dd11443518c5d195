//! Page modules for the two tabs.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its flow orchestration and delegates rendering details
//! to `components`.

pub mod submit;
pub mod track;
