//! External data access
//!
//! Loading the route dataset from the bundled copy, a JSON file, or a
//! directory of CSV files.

pub mod dataset;

pub use dataset::{bundled, load, validate};
