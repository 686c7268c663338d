//! Result Backup
//!
//! Delimited text output for episode measurements:
//! - Line and matrix writers with truncate/append modes
//! - Header initialization for a fresh output file
//! - Deterministic output path derived from the parameter set

pub mod backup;
pub mod path;

pub use backup::{
    initialize_backup, save_matrix, save_vector, WriteMode, DEFAULT_SEPARATOR,
    SAVED_VALUES_NAMES,
};
pub use path::{append_double, backup_path, encode_double, BACKUP_DIR};
