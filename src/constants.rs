pub(crate) const RESET_BAUD_RATE: u32 = 1200;
pub(crate) const RESET_SERIAL_TIMEOUT_MS: u64 = 100;
pub(crate) const POST_RESET_SETTLE_MS: u64 = 400;

pub const DEFAULT_RESET_DEVICE: &str = "/dev/arduino";
pub const DEFAULT_FLASH_PORT: &str = "arduino";
pub const DEFAULT_FLASH_TOOL: &str = "bossac";

/// Environment variable overriding the port handed to the flash tool
pub const FLASH_PORT_ENV: &str = "AVRDUDE_PORT";

/// Monitor script location, relative to the Simba root
pub(crate) const RUN_MONITOR_SCRIPT: &str = "make/run.py";
