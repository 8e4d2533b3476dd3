//! Single-run job posting tracker.
//!
//! The binary wires configuration from the environment into [`tracker`],
//! which drives one fetch → filter → dedupe → notify → persist pass.

pub mod tracker;
