use std::path::PathBuf;

use bossup::{
    DEFAULT_FLASH_PORT, DEFAULT_FLASH_TOOL, DEFAULT_RESET_DEVICE, FLASH_PORT_ENV, UploadConfig,
    UploadJob, Uploader, error::UploadResult,
};
use clap::Parser;
use tracing::debug;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub(crate) struct UploadArgs {
    /// Build target, only `run` is supported
    target: String,

    /// Executable the binary image was produced from
    exe: PathBuf,

    /// Simba root directory, used to find make/run.py
    simba_path: PathBuf,

    /// Pattern marking the end of the run in the board's output
    run_end_pattern: String,

    /// Substring of the end-of-run output that means success
    run_end_pattern_success: String,

    /// Binary image to flash
    binary: PathBuf,

    /// Port passed to bossac
    #[arg(long, env = FLASH_PORT_ENV, default_value = DEFAULT_FLASH_PORT)]
    port: String,

    /// Device opened at 1200 baud to reset the board
    #[arg(long, default_value = DEFAULT_RESET_DEVICE)]
    reset_device: String,

    /// Flash tool to invoke
    #[arg(long, default_value = DEFAULT_FLASH_TOOL)]
    flash_tool: PathBuf,

    /// Show flash attempt progress
    #[arg(long, default_value_t = false)]
    progress: bool,
}

pub(crate) fn handle_upload(args: UploadArgs) -> UploadResult<()> {
    debug!("Uploading image built from {}", args.exe.display());

    let config = UploadConfig::new(&args.simba_path)
        .with_flash_port(args.port)
        .with_reset_device(args.reset_device)
        .with_flash_tool(args.flash_tool);

    let job = UploadJob::new(
        args.binary,
        args.run_end_pattern,
        args.run_end_pattern_success,
    );

    let mut uploader = Uploader::new(config);
    uploader.progress_bar(args.progress);
    uploader.run_target(&args.target, &job)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_positionals_in_order() {
        let args = UploadArgs::try_parse_from([
            "bossup",
            "run",
            "app.out",
            "/opt/simba",
            "=== END ===",
            "PASSED",
            "app.bin",
            "--port",
            "ttyACM0",
        ])
        .unwrap();

        assert_eq!(args.target, "run");
        assert_eq!(args.simba_path, PathBuf::from("/opt/simba"));
        assert_eq!(args.run_end_pattern, "=== END ===");
        assert_eq!(args.run_end_pattern_success, "PASSED");
        assert_eq!(args.binary, PathBuf::from("app.bin"));
        assert_eq!(args.port, "ttyACM0");
        assert_eq!(args.reset_device, "/dev/arduino");
    }

    #[test]
    fn port_comes_from_environment() {
        let positionals = [
            "bossup",
            "run",
            "app.out",
            "/opt/simba",
            "=== END ===",
            "PASSED",
            "app.bin",
        ];

        // Scoped to this test
        unsafe { std::env::set_var(FLASH_PORT_ENV, "ttyACM0") };
        let from_env = UploadArgs::try_parse_from(positionals);
        unsafe { std::env::remove_var(FLASH_PORT_ENV) };
        let args = from_env.unwrap();

        assert_eq!(args.port, "ttyACM0");
        assert_eq!(args.reset_device, DEFAULT_RESET_DEVICE);
        assert_eq!(args.flash_tool, PathBuf::from(DEFAULT_FLASH_TOOL));

        let args = UploadArgs::try_parse_from(positionals).unwrap();
        assert_eq!(args.port, DEFAULT_FLASH_PORT);
    }

    #[test]
    fn missing_positional_is_rejected() {
        let result = UploadArgs::try_parse_from(["bossup", "run", "app.out", "/opt/simba"]);
        assert!(result.is_err());
    }
}
