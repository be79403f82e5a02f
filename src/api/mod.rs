//! HTTP layer for request/response handling.
//!
//! - [`dto`] - Request payloads and response envelopes
//! - [`validation`] - Method and body validation per resource
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod validation;
