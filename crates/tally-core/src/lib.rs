//! Tally core - session, routing, and API gateway logic
//!
//! Everything in this crate is platform-independent: the browser-specific
//! pieces (localStorage, fetch) live behind the [`session::TokenStore`] and
//! [`http::HttpClient`] seams and are supplied by the frontend crate.

pub mod api;
pub mod config;
pub mod error;
pub mod guard;
pub mod http;
pub mod layout;
pub mod models;
pub mod routes;
pub mod session;

pub use api::ApiClient;
pub use config::ApiConfig;
pub use error::{Result, TallyError};
pub use session::Session;
