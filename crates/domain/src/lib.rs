//! # blinkhub-domain
//!
//! Pure domain model for the blinkhub device control plane.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define **Assets** (named, read-only byte resources)
//! - Define the **template renderer** (`{{TOKEN}}` substitution)
//! - Define **Registers** (named boolean device values bound to outputs)
//! - Define **Routes** and the transport-neutral request/response pair
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod asset;
pub mod register;
pub mod route;
pub mod template;
