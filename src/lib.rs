// Export modules for library usage
pub mod cli;
pub mod data;
pub mod errors;
pub mod formatting;
pub mod pager;
pub mod prompt;
pub mod reports;
pub mod session;
pub mod stats;
pub mod vocab;

// Re-export commonly used types
pub use crate::data::{Dataset, Trip};
pub use crate::errors::DataError;
pub use crate::vocab::{City, Day, FilterMode, FilterSelection, Month};
