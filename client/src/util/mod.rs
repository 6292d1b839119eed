//! Pure helpers shared across board components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is browser-free so the list pipeline, card view models,
//! and mutation outcome rules can be tested natively.

pub mod activity_query;
pub mod activity_view;
pub mod mutation;
