use indicatif::{ProgressBar, ProgressStyle};

pub(crate) fn create_attempt_bar(total_attempts: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(total_attempts);

    // Falls back to the plain bar if the template does not parse
    let style = ProgressStyle::default_bar()
        .template("[{spinner:.green} {elapsed_precise}] attempt {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb.set_message(msg.to_owned());

    pb
}

/// Run `f` with the bar cleared from the terminal, redrawing it afterwards
pub(crate) fn with_bar_hidden<R>(pb: Option<&ProgressBar>, f: impl FnOnce() -> R) -> R {
    match pb {
        Some(pb) => pb.suspend(f),
        None => f(),
    }
}
