//! Web layer for the browser UI.
//!
//! Uses Askama templates for server-side rendering; the page talks to the
//! JSON API from `static/app.js`.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
