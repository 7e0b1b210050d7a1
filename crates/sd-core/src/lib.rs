/// Types partagés, table de correspondance et configuration pour sixdot.
///
/// This crate holds the Braille cell type, the compiled-in character table,
/// the error type and the TOML configuration used across the sixdot workspace.

pub mod cell;
pub mod config;
pub mod error;
pub mod table;

pub use cell::BrailleCell;
pub use config::{EncoderConfig, OutputFormat, UnsupportedPolicy};
pub use error::CoreError;
pub use table::{CAPITALIZE_MARKER, lookup};
