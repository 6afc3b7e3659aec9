//! API route handlers
//!
//! Only the health endpoint lives here; the CRUD handlers are generic and
//! live in [`crate::resource`].

pub mod health;
