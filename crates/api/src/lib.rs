//! HTTP API: configuration, bearer authentication, routing and error rendering.

pub mod app;
pub mod authz;
pub mod config;
pub mod middleware;
