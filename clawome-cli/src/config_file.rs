use std::fs;

use clawome_core::Config;
use thiserror::Error;

/// Failures reading a host-supplied `--config` file. Distinct from
/// [`clawome_core::PipelineError`]: these happen before the pipeline
/// ever runs, so there is nothing for them to partially publish.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("could not read {0}: {1}")]
    Io(String, std::io::Error),
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn load(path: &str) -> Result<Config, ConfigFileError> {
    let raw = fs::read_to_string(path).map_err(|err| ConfigFileError::Io(path.to_string(), err))?;
    let config = serde_json::from_str(&raw)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load("/nonexistent/clawome-config.json");
        assert!(matches!(result, Err(ConfigFileError::Io(_, _))));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let dir = std::env::temp_dir().join("clawome-cli-config-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        let result = load(path.to_str().unwrap());
        assert!(matches!(result, Err(ConfigFileError::Parse(_))));
    }
}
