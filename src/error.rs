use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Bad target {0}.")]
    UnsupportedTarget(String),

    #[error("Communication error: {0}")]
    Communication(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Failed to launch {}: {source}", program.display())]
    ToolLaunch {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} exited with {}", program.display(), exit_description(*code))]
    ToolExit { program: PathBuf, code: Option<i32> },

    #[error("Flashing failed after {attempts} attempt(s): {source}")]
    FlashFailed {
        attempts: usize,
        #[source]
        source: Box<UploadError>,
    },

    #[error("Run monitor failed: {0}")]
    MonitorFailed(#[source] Box<UploadError>),
}

fn exit_description(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_owned(),
    }
}

pub type UploadResult<T> = std::result::Result<T, UploadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_target_message() {
        let err = UploadError::UnsupportedTarget("debug".to_owned());
        assert_eq!(err.to_string(), "Bad target debug.");
    }

    #[test]
    fn tool_exit_without_code_mentions_signal() {
        let err = UploadError::ToolExit {
            program: PathBuf::from("bossac"),
            code: None,
        };
        assert_eq!(
            err.to_string(),
            "bossac exited with no status (terminated by signal)"
        );
    }
}
