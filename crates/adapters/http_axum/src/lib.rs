//! # blinkhub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Act as the **transport layer** for the route dispatcher: every request
//!   that is not an adapter-level route (`/health`) is turned into a domain
//!   `Request` and dispatched
//! - Send successful handler results back as `200 OK` with the handler's
//!   content type
//! - Translate dispatch failures into 404/500-class responses with a JSON
//!   error body
//!
//! ## Dependency rule
//! Depends on `blinkhub-app` (for the dispatcher) and `blinkhub-domain`
//! (for request/response mapping). Never leaks axum types into the domain.

pub mod dispatch;
pub mod error;
pub mod router;
pub mod state;
