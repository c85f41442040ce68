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
    #[error("The software root environment variable (CLEAN_SW_ROOT) is not set")]
    SwRootNotSet,

    #[error("Cannot load the parmeter file: {0}")]
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
/// root.
pub fn load<P>(param_file_path: &str) -> Result<P, LoadError> 
where
    P: DeserializeOwned
{
    // Get the params dir
    let mut path = crate::host::get_sw_root()
        .map_err(|_| LoadError::SwRootNotSet)?;
    path.push("params");
    path.push(param_file_path);

    load_from_path(path)
}

/// Load a parameter file from an explicit path.
pub fn load_from_path<P, Q>(path: Q) -> Result<P, LoadError>
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

#[cfg(test)]
mod test {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Debug, PartialEq)]
    struct TestParams {
        threshold: u8,
        name: String,
    }

    #[test]
    fn test_load_from_path() {
        let path = std::env::temp_dir().join("clean_util_params_test.toml");
        std::fs::write(&path, "threshold = 24\nname = \"dock\"\n").unwrap();

        let p: TestParams = load_from_path(&path).unwrap();
        assert_eq!(p, TestParams { threshold: 24, name: "dock".into() });

        std::fs::write(&path, "threshold = \"high\"\n").unwrap();
        assert!(matches!(
            load_from_path::<TestParams, _>(&path),
            Err(LoadError::DeserialiseError(_))
        ));

        std::fs::remove_file(&path).ok();

        assert!(matches!(
            load_from_path::<TestParams, _>(&path),
            Err(LoadError::FileLoadError(_))
        ));
    }

    // Only this test touches the software root environment variable.
    #[test]
    fn test_load_from_sw_root() {
        let root = std::env::temp_dir().join("clean_util_sw_root_test");
        std::fs::create_dir_all(root.join("params")).unwrap();
        std::fs::write(
            root.join("params").join("test.toml"), 
            "threshold = 10\nname = \"critical\"\n"
        ).unwrap();

        std::env::remove_var(crate::host::SW_ROOT_ENV_VAR);
        assert!(matches!(
            load::<TestParams>("test.toml"),
            Err(LoadError::SwRootNotSet)
        ));

        std::env::set_var(crate::host::SW_ROOT_ENV_VAR, &root);
        let p: TestParams = load("test.toml").unwrap();
        assert_eq!(p.threshold, 10);
        assert_eq!(p.name, "critical");

        std::fs::remove_dir_all(root).ok();
    }
}
