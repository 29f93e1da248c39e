//! murzyme-web: HTTP front for the hypothesis comparison engine.
//! Provides:
//!   - JSON comparison API (structured records or raw form fields)
//!   - the model-comparison HTML page
//!   - health and rubric listing endpoints

pub mod router;
pub mod handlers;
pub mod state;
pub mod error;
pub mod telemetry;
