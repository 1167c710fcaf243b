use std::path::{Path, PathBuf};
use std::thread;

use indicatif::ProgressBar;
use tracing::{info, warn};

pub use config::UploadConfig;
use error::{UploadError, UploadResult};
use interface::{DeviceReset, serialport::SerialPortReset};
pub use strategy::{AttemptStrategy, default_retry_policy};
pub use target::Target;
use tools::{ToolRunner, flash_invocation, process::ProcessRunner, run_monitor_invocation};

pub mod config;
pub(crate) mod constants;
pub mod error;
pub mod interface;
pub mod strategy;
pub mod target;
pub mod tools;
pub(crate) mod util;

pub use constants::{
    DEFAULT_FLASH_PORT, DEFAULT_FLASH_TOOL, DEFAULT_RESET_DEVICE, FLASH_PORT_ENV,
};

/// What to flash and what to wait for once it runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadJob {
    pub binary: PathBuf,

    /// Pattern the run monitor waits for before it stops reading
    pub run_end_pattern: String,

    /// Substring of the matched output that means the run passed
    pub run_end_pattern_success: String,
}

impl UploadJob {
    pub fn new(
        binary: impl Into<PathBuf>,
        run_end_pattern: impl Into<String>,
        run_end_pattern_success: impl Into<String>,
    ) -> Self {
        UploadJob {
            binary: binary.into(),
            run_end_pattern: run_end_pattern.into(),
            run_end_pattern_success: run_end_pattern_success.into(),
        }
    }
}

pub struct Uploader {
    config: UploadConfig,
    reset: Box<dyn DeviceReset>,
    runner: Box<dyn ToolRunner>,
    policy: Vec<AttemptStrategy>,
    progress_bar_enable: bool,
}

impl Uploader {
    /// Uploader talking to the real serial port and spawning real processes
    pub fn new(config: UploadConfig) -> Self {
        Self::with_backends(
            config,
            Box::new(SerialPortReset),
            Box::new(ProcessRunner),
        )
    }

    pub fn with_backends(
        config: UploadConfig,
        reset: Box<dyn DeviceReset>,
        runner: Box<dyn ToolRunner>,
    ) -> Self {
        Uploader {
            config,
            reset,
            runner,
            policy: default_retry_policy(),
            progress_bar_enable: false,
        }
    }

    pub fn progress_bar(&mut self, enable: bool) {
        self.progress_bar_enable = enable;
    }

    pub fn retry_policy(&mut self, policy: Vec<AttemptStrategy>) {
        self.policy = policy;
    }

    /// Parse `target` and carry it out for `job`
    pub fn run_target(&mut self, target: &str, job: &UploadJob) -> UploadResult<()> {
        match target.parse::<Target>()? {
            Target::Run => {
                self.flash(&job.binary)?;
                self.monitor(job)
            }
        }
    }

    /// Walk the retry policy until one attempt gets the image onto the board.
    /// Every failure but the last is logged and dropped; the last one is returned.
    pub fn flash(&mut self, binary: &Path) -> UploadResult<()> {
        let policy = self.policy.clone();
        let Some((last, earlier)) = policy.split_last() else {
            return Err(UploadError::ConfigurationError(
                "Retry policy has no attempts".to_owned(),
            ));
        };

        let pb = self
            .progress_bar_enable
            .then(|| util::create_attempt_bar(policy.len() as u64, "Flashing"));

        for (attempt, strategy) in earlier.iter().enumerate() {
            match self.tracked_attempt(pb.as_ref(), *strategy, binary) {
                Ok(()) => {
                    if let Some(pb) = &pb {
                        pb.finish_with_message("Flashed");
                    }
                    return Ok(());
                }
                Err(e) => util::with_bar_hidden(pb.as_ref(), || {
                    warn!(
                        "Flash attempt {}/{} ({:?}) failed: {}",
                        attempt + 1,
                        policy.len(),
                        strategy,
                        e
                    )
                }),
            }
        }

        let result = self.tracked_attempt(pb.as_ref(), *last, binary);
        if let Some(pb) = &pb {
            match result {
                Ok(()) => pb.finish_with_message("Flashed"),
                Err(_) => pb.abandon_with_message("Flashing failed"),
            }
        }

        result.map_err(|e| UploadError::FlashFailed {
            attempts: policy.len(),
            source: Box::new(e),
        })
    }

    /// Run one attempt with the bar hidden, so log lines and tool output
    /// do not end up drawn over it
    fn tracked_attempt(
        &mut self,
        pb: Option<&ProgressBar>,
        strategy: AttemptStrategy,
        binary: &Path,
    ) -> UploadResult<()> {
        if let Some(pb) = pb {
            pb.inc(1);
        }
        util::with_bar_hidden(pb, || self.attempt(strategy, binary))
    }

    fn attempt(&mut self, strategy: AttemptStrategy, binary: &Path) -> UploadResult<()> {
        if strategy.resets() {
            self.reset
                .reset(&self.config.reset_device, self.config.reset_baud_rate)?;
            thread::sleep(self.config.settle_delay);
        }

        let invocation = flash_invocation(&self.config, binary);
        info!("{}", invocation);
        self.runner.run(&invocation)
    }

    /// Hand over to the run monitor and wait for its verdict
    pub fn monitor(&mut self, job: &UploadJob) -> UploadResult<()> {
        let invocation = run_monitor_invocation(&self.config, job);
        info!("{}", invocation);
        self.runner
            .run(&invocation)
            .map_err(|e| UploadError::MonitorFailed(Box::new(e)))
    }
}
