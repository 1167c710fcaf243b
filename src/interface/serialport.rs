use std::time::Duration;

use tracing::{debug, info};

use super::DeviceReset;
use crate::constants::RESET_SERIAL_TIMEOUT_MS;
use crate::error::{UploadError, UploadResult};

/// Resets the board through a host serial port
///
/// Opening a SAM3X native port at 1200 baud and touching DTR makes the
/// board erase itself and jump into the SAM-BA bootloader.
#[derive(Debug, Default)]
pub struct SerialPortReset;

impl DeviceReset for SerialPortReset {
    fn reset(&mut self, device: &str, baud: u32) -> UploadResult<()> {
        info!(
            "Setting {} to {} baud and setting DTR to reset the board.",
            device, baud
        );

        let mut serial_port = serialport::new(device, baud)
            .timeout(Duration::from_millis(RESET_SERIAL_TIMEOUT_MS))
            .dtr_on_open(true)
            .open()
            .map_err(|e| {
                UploadError::Communication(format!("Failed to open {}: {:?}", device, e))
            })?;

        serial_port
            .write_data_terminal_ready(true)
            .map_err(|e| UploadError::Communication(format!("Failed to set DTR true: {:?}", e)))?;

        // Dropping the handle closes the port
        drop(serial_port);
        debug!("Closed {}", device);

        Ok(())
    }
}
