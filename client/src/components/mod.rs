//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the board's list, controls, and status region while
//! reading shared state from Leptos context providers. Network flows stay in
//! the page and reach components as callbacks.

pub mod activity_card;
pub mod activity_list;
pub mod filter_bar;
pub mod signup_form;
pub mod status_banner;
