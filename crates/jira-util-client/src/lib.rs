// Rust guideline compliant 2026-10-18

//! HTTP transport for jira-util.
//!
//! This crate provides the blocking REST implementation of the core
//! `Tracker` trait, the comment endpoints, and the standardized response
//! envelopes used for machine-readable output.

pub mod http;
pub mod response;
mod tracker;

pub use http::HttpTracker;
pub use response::{ErrorEnvelope, SuccessEnvelope};
