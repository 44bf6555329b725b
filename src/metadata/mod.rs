//! Metadata records and the sources that produce them.
//!
//! - **Record**: the typed description of a desired SQL query
//! - **Interactive**: line-by-line collection of a single record
//! - **Loader**: a JSON array of records read from a batch file

mod interactive;
mod loader;
mod record;

pub use interactive::collect_interactive;
pub use loader::{load_batch_file, parse_batch};
pub use record::{MetadataField, MetadataRecord};
