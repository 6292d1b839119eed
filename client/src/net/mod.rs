//! Networking modules for the activities REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the fetch/signup/unregister calls and `types` defines the
//! wire schema those calls decode.

pub mod api;
pub mod types;
