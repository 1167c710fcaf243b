use std::process::Command;

use tracing::debug;

use super::{ToolInvocation, ToolRunner};
use crate::error::{UploadError, UploadResult};

/// Runs tools as child processes sharing our stdio
#[derive(Debug, Default)]
pub struct ProcessRunner;

impl ToolRunner for ProcessRunner {
    fn run(&mut self, invocation: &ToolInvocation) -> UploadResult<()> {
        debug!("Spawning {}", invocation);

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .status()
            .map_err(|source| UploadError::ToolLaunch {
                program: invocation.program.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(UploadError::ToolExit {
                program: invocation.program.clone(),
                code: status.code(),
            })
        }
    }
}
