use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TICK_MS: u64 = 120;

/// Spinner shown while an external tool runs. Hidden when stderr is not a terminal.
pub struct StepSpinner {
    bar: ProgressBar,
}

impl StepSpinner {
    pub fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("    {spinner:.cyan} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(TICK_MS));
        Self { bar }
    }

    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}
