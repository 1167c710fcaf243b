use std::str::FromStr;

use crate::error::{UploadError, UploadResult};

/// Build targets the uploader knows how to drive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Flash the image and watch it run
    Run,
}

impl FromStr for Target {
    type Err = UploadError;

    fn from_str(s: &str) -> UploadResult<Self> {
        match s {
            "run" => Ok(Target::Run),
            other => Err(UploadError::UnsupportedTarget(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_run() {
        assert_eq!("run".parse::<Target>().unwrap(), Target::Run);
    }

    #[test]
    fn rejects_anything_else() {
        for target in ["debug", "Run", ""] {
            match target.parse::<Target>() {
                Err(UploadError::UnsupportedTarget(t)) => assert_eq!(t, target),
                other => panic!("unexpected {:?}", other),
            }
        }
    }
}
