//! Filesystem utilities for sqlprompt.
//!
//! Batch results are written through [`atomic_write_file`] so a failed or
//! interrupted run never leaves a half-written output file behind.

pub mod atomic;

pub use atomic::atomic_write_file;
