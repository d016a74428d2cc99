//! API module for the HTTP surface
//!
//! This module provides the axum router and the REST handlers over the
//! event store.

pub mod http;
pub mod rest;
