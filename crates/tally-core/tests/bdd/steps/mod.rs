//! BDD step definitions for the Tally core

pub mod gateway_steps;
pub mod navigation_steps;
pub mod session_steps;
