// ABOUTME: Main library entry point for the mdmin markdown minimizer.
// ABOUTME: Re-exports the public API: minimize and the individual cleanup passes.

//! mdmin - cleanup for markdown mechanically converted from PDF or HTML.
//!
//! This crate removes conversion artifacts (pandoc attribute blocks and div
//! fences, PDF page markers, excess whitespace) from markdown text while
//! preserving all substantive content. The whole surface is one pure
//! function: text in, text out.
//!
//! # Example
//!
//! ```
//! use mdmin_core::minimize;
//!
//! let cleaned = minimize("_1/40_\nIntro {.lead}\n\n\n\nBody\n");
//! assert_eq!(cleaned, "Intro\n\nBody\n");
//! ```

pub mod minimizer;
pub mod passes;

pub use crate::minimizer::minimize;
