//! Generic parameters functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::de::DeserializeOwned;
use std::fs::read_to_string;
use std::path::Path;
use thiserror::Error;
use toml;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// An error that occurs during loading of a parameter file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Cannot find the software root directory: {0}")]
    RootNotFound(std::io::Error),

    #[error("Cannot load the parameter file: {0}")]
    FileLoadError(std::io::Error),

    #[error("Cannot read the parameter file: {0}")]
    DeserialiseError(toml::de::Error)
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Load a parameter file
///
/// The file path is relative to the "params" directory under the software
/// root (see [`crate::host::get_root`]).
pub fn load<P>(param_file_path: &str) -> Result<P, LoadError>
where
    P: DeserializeOwned
{
    // Get the params dir
    let mut path = crate::host::get_root()
        .map_err(LoadError::RootNotFound)?;
    path.push("params");
    path.push(param_file_path);

    load_path(path)
}

/// Load a parameter file from the given path.
pub fn load_path<P, Q>(path: Q) -> Result<P, LoadError>
where
    P: DeserializeOwned,
    Q: AsRef<Path>
{
    // Load the file into a string
    let params_str = match read_to_string(path) {
        Ok(s) => s,
        Err(e) => return Err(LoadError::FileLoadError(e))
    };

    // Parse the string into the parameter struct
    match toml::from_str(params_str.as_str()) {
        Ok(p) => Ok(p),
        Err(e) => Err(LoadError::DeserialiseError(e))
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestParams {
        name: String,
        cells: Vec<Vec<bool>>,
    }

    #[test]
    fn test_load_path() {
        let dir = std::env::temp_dir().join(format!("util_params_test_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let good = dir.join("good.toml");
        std::fs::write(&good, "name = \"a\"\ncells = [[true], [false, false]]\n").unwrap();
        let params: TestParams = load_path(&good).unwrap();
        assert_eq!(params.name, "a");
        assert_eq!(params.cells, vec![vec![true], vec![false, false]]);

        let bad = dir.join("bad.toml");
        std::fs::write(&bad, "name = 3\n").unwrap();
        assert!(matches!(
            load_path::<TestParams, _>(&bad),
            Err(LoadError::DeserialiseError(_))
        ));

        assert!(matches!(
            load_path::<TestParams, _>(dir.join("missing.toml")),
            Err(LoadError::FileLoadError(_))
        ));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
