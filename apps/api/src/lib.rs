//! Career Pathway: industry → sub-industry → role lookup over a static catalog,
//! with on-screen and PDF renderings of a role's recommended majors and courses.
//!
//! The `pathway` binary serves this over HTTP; see `routes` for the surface.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod layout;
pub mod render;
pub mod routes;
pub mod state;
