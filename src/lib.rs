#![forbid(unsafe_code)]
//! Integration-test registry generator
//!
//! `testgen` scans a tree of integration-test sources for declarations of
//! the form `pub async fn test_*(...)` and generates a `test_functions.rs`
//! file that registers every discovered test with the harness, bound to the
//! shared cluster handle.
//!
//! The pipeline is strictly linear: [`discovery`] walks the tree and
//! extracts qualified test names, [`codegen`] renders them into the
//! registry template and writes the output file. No state survives a run;
//! every invocation is a full rescan.
//!
//! ## Panic Policy
//!
//! Production code propagates errors with `Result` and `?`; any failure at
//! any stage aborts the whole run. `.unwrap()` is acceptable in tests only.

pub mod cli;
pub mod codegen;
pub mod discovery;

pub use discovery::{DiscoveryError, TestCase};
