//! HTTP API: server, routing, and the request-admission guard.

pub mod app;
pub mod middleware;
