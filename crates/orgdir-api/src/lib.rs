#![warn(missing_docs)]

//! orgdir RESTful API
//!
//! Exposes the company, department, and team aggregates as hypermedia CRUD
//! resources. A single generic resource router projects any store collection
//! onto the standard operation set (list, get, create, replace, delete); no
//! aggregate carries bespoke handler code.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod resource;
pub mod routes;
pub mod server;
pub mod state;

pub use server::ApiServer;
pub use state::AppState;
