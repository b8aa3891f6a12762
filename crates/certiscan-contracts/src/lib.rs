//! # certiscan-contracts
//!
//! Shared types and error contracts for the certiscan verification pipeline.
//!
//! All crates in the workspace import from here.  No business logic lives in
//! this crate — only data definitions and error types.

pub mod document;
pub mod error;
pub mod extraction;
pub mod features;
pub mod verdict;
