//! Shared infrastructure for the FairLens CLI binary.

pub mod logging;
