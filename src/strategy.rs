/// One way of getting the image onto the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptStrategy {
    /// Toggle DTR at the reset baud rate, wait for the bootloader, then flash
    ResetAndFlash,

    /// Run the flash tool straight away. Some hosts refuse to open the reset
    /// node until the flash tool has opened the port once.
    FlashOnly,
}

impl AttemptStrategy {
    pub fn resets(&self) -> bool {
        matches!(self, AttemptStrategy::ResetAndFlash)
    }
}

/// Attempts tried in order until one succeeds
pub fn default_retry_policy() -> Vec<AttemptStrategy> {
    vec![
        AttemptStrategy::ResetAndFlash,
        AttemptStrategy::FlashOnly,
        AttemptStrategy::ResetAndFlash,
    ]
}
