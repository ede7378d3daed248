//! Host platform utility functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use std::env;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Environment variable pointing at the software root directory.
pub const ROOT_ENV_VAR: &str = "ROV_SIM_ROOT";

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Get the software root directory.
///
/// This is the value of `ROV_SIM_ROOT` if set, otherwise the current working
/// directory.
pub fn get_root() -> std::io::Result<PathBuf> {
    match env::var_os(ROOT_ENV_VAR) {
        Some(p) => Ok(PathBuf::from(p)),
        None => env::current_dir()
    }
}
