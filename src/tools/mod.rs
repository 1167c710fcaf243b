pub mod process;

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::UploadJob;
use crate::config::UploadConfig;
use crate::error::UploadResult;

/// A program and its arguments, kept as a vector so nothing goes through a shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl ToolInvocation {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        ToolInvocation {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

pub trait ToolRunner {
    /// Run the invocation to completion. Launch failures and non-zero
    /// exits are both errors.
    fn run(&mut self, invocation: &ToolInvocation) -> UploadResult<()>;
}

/// `bossac --port=<port> -U false -e -w -b <binary>`
///
/// Erase, write and boot from flash. Verification is left off.
pub fn flash_invocation(config: &UploadConfig, binary: &Path) -> ToolInvocation {
    ToolInvocation::new(&config.flash_tool)
        .arg(format!("--port={}", config.flash_port))
        .arg("-U")
        .arg("false")
        .arg("-e")
        .arg("-w")
        .arg("-b")
        .arg(binary)
}

pub fn run_monitor_invocation(config: &UploadConfig, job: &UploadJob) -> ToolInvocation {
    ToolInvocation::new(config.run_monitor_script())
        .arg(&job.run_end_pattern)
        .arg(&job.run_end_pattern_success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_args_are_discrete() {
        let config = UploadConfig::new(".");
        let invocation = flash_invocation(&config, Path::new("build/app name.bin"));

        assert_eq!(invocation.program, PathBuf::from("bossac"));
        assert_eq!(
            invocation.args,
            ["--port=arduino", "-U", "false", "-e", "-w", "-b", "build/app name.bin"]
                .map(OsString::from)
                .to_vec()
        );
    }

    #[test]
    fn monitor_runs_from_simba_root() {
        let config = UploadConfig::new("/opt/simba");
        let job = UploadJob::new("app.bin", "=== END ===", "PASSED");
        let invocation = run_monitor_invocation(&config, &job);

        assert_eq!(invocation.program, PathBuf::from("/opt/simba/make/run.py"));
        assert_eq!(invocation.to_string(), "/opt/simba/make/run.py === END === PASSED");
    }
}
