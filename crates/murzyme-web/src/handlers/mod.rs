//! HTTP handlers for all web routes.

pub mod models;
pub mod pages;
pub mod system;
