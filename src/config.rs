use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    DEFAULT_FLASH_PORT, DEFAULT_FLASH_TOOL, DEFAULT_RESET_DEVICE, POST_RESET_SETTLE_MS,
    RESET_BAUD_RATE, RUN_MONITOR_SCRIPT,
};

/// Everything the uploader needs to know about the host side of the board.
///
/// The reset device and the flash port are separate knobs. On the boards this
/// was written for the reset node is a fixed udev alias while the flash tool
/// gets a bare port name, and the two are not guaranteed to be the same node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    /// Port name passed to the flash tool as `--port=`
    pub flash_port: String,

    /// Device node opened at the reset baud rate to kick the board into its bootloader
    pub reset_device: String,

    pub reset_baud_rate: u32,

    /// Time given to the bootloader to re-enumerate after the reset
    pub settle_delay: Duration,

    pub flash_tool: PathBuf,

    /// Simba root; the run monitor lives under `make/run.py`
    pub simba_path: PathBuf,
}

impl Default for UploadConfig {
    fn default() -> Self {
        UploadConfig {
            flash_port: DEFAULT_FLASH_PORT.to_owned(),
            reset_device: DEFAULT_RESET_DEVICE.to_owned(),
            reset_baud_rate: RESET_BAUD_RATE,
            settle_delay: Duration::from_millis(POST_RESET_SETTLE_MS),
            flash_tool: PathBuf::from(DEFAULT_FLASH_TOOL),
            simba_path: PathBuf::from("."),
        }
    }
}

impl UploadConfig {
    pub fn new(simba_path: impl Into<PathBuf>) -> Self {
        UploadConfig {
            simba_path: simba_path.into(),
            ..Default::default()
        }
    }

    pub fn with_flash_port(mut self, port: impl Into<String>) -> Self {
        self.flash_port = port.into();
        self
    }

    pub fn with_reset_device(mut self, device: impl Into<String>) -> Self {
        self.reset_device = device.into();
        self
    }

    pub fn with_flash_tool(mut self, tool: impl Into<PathBuf>) -> Self {
        self.flash_tool = tool.into();
        self
    }

    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    pub fn run_monitor_script(&self) -> PathBuf {
        self.simba_path.join(RUN_MONITOR_SCRIPT)
    }
}
