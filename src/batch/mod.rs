//! Batch driving and result reporting.
//!
//! - **Driver**: compile → complete for each record, strictly in order,
//!   aborting the whole batch on the first failure
//! - **Report**: formatting of the aggregated results and their output file

mod driver;
mod report;

pub use driver::run_batch;
pub use report::{output_path_for, write_report};
