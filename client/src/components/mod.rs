//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shortener chrome and read shared state from Leptos
//! context providers. Anything that talks to the API goes through
//! `LinkActions`.

pub mod sidebar;
pub mod toaster;
pub mod url_form;
pub mod url_list;
