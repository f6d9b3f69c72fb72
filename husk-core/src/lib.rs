//! Core types for the husk tool-adapter framework.
//!
//! This crate provides the fundamental types shared across the husk
//! ecosystem: severities, findings (issues and patches), and the per-call
//! context values handed to processing stages.

mod context;
mod finding;
mod severity;

// Per-call context
pub use context::{CapturedOutput, FileContext};
// Structured results
pub use finding::{Finding, Issue, Patch};
pub use severity::{ParseSeverityError, Severity};
