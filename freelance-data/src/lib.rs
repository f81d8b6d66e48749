//! Loading of alternative bracket tables from CSV files.

mod loader;

pub use loader::{BracketLoaderError, BracketRecord, BracketTableLoader, TableKind};
