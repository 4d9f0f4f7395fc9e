//! Dioxus components

pub mod common;
pub mod form_response;
