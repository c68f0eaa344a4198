//! Kolb learning-style inventory: scoring core plus the session backend that
//! drives the questionnaire flow for a local frontend.
//!
//! - `logic`: slate validation, totals, axis deltas, quadrant classification
//! - `state`: in-memory sessions (intro -> answering -> results)
//! - `routes`: Axum HTTP + WebSocket API

pub mod config;
pub mod domain;
pub mod error;
pub mod logic;
pub mod protocol;
pub mod routes;
pub mod seeds;
pub mod state;
pub mod telemetry;
