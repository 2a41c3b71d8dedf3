//! Gharkhoj — a property-search assistant.
//!
//! Interprets free-text queries into structured criteria, curates listing
//! records retrieved from a vector index, and produces a bounded textual
//! answer through an external text-generation service, with a deterministic
//! fallback when generation is unavailable.
//!
//! See `DESIGN.md` for architecture documentation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod extract;
pub mod finalize;
pub mod format;
pub mod generation;
pub mod locations;
pub mod logging;
pub mod matching;
pub mod pipeline;
pub mod records;
pub mod retrieval;
pub mod server;
