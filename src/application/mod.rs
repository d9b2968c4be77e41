//! Application layer containing the return workflow orchestration.
//!
//! `RmaService` is the entry point for every workflow operation. It owns the
//! store ports and serializes inspection and refund processing. `Runner`
//! replays `WorkflowEvent`s against it and narrates the outcome.

pub mod demo;
pub mod event;
pub mod runner;
pub mod service;
pub mod summary;
