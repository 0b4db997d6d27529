//! Error types and error handling for the parser and evaluator.
//!
//! This module defines the single error type used throughout the crate.
//! It includes:
//!
//! - An error structure carrying the source position of the failure
//! - Syntax variants raised while parsing and arithmetic variants raised
//!   while evaluating
//! - Error names and suggestions used when rendering diagnostics

pub mod errors;
