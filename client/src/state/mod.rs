//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern so components depend on small focused models:
//! `activities` is the fetched snapshot, `filters` the list controls, and
//! `status` the transient message region.

pub mod activities;
pub mod filters;
pub mod status;
