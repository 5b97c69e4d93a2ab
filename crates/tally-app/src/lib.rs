//! Tally - Leptos frontend for personal budget tracking
//!
//! A thin presentation layer over the backend REST API. All access
//! decisions and request building live in `tally-core`; this crate
//! supplies the browser-backed seams and the view components.

pub mod app;
pub mod components;
pub mod io;
pub mod pages;
pub mod session;

pub use app::App;
