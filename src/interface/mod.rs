pub mod serialport;

use crate::error::UploadResult;

pub trait DeviceReset {
    /// Put the board behind `device` into its bootloader.
    /// Any handle opened for this must be closed before returning,
    /// the flash tool needs the port to itself.
    fn reset(&mut self, device: &str, baud: u32) -> UploadResult<()>;
}
