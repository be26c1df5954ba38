use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(120);

/// Spinner for streaming input whose read count is not known up front.
pub(crate) struct ProgressBarBuilder {
    style_template: &'static str,
    message: String,
    enable_tick: bool,
}

impl ProgressBarBuilder {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            style_template: "{spinner:.green} {msg} {human_pos}",
            message: message.into(),
            enable_tick: false,
        }
    }

    pub(crate) fn with_template(mut self, template: &'static str) -> Self {
        self.style_template = template;
        self
    }

    pub(crate) fn with_tick(mut self) -> Self {
        self.enable_tick = true;
        self
    }

    pub(crate) fn build(self) -> Result<ProgressBar> {
        let pb = ProgressBar::new_spinner();

        pb.set_style(ProgressStyle::default_spinner().template(self.style_template)?);
        pb.set_message(self.message);

        if self.enable_tick {
            pb.enable_steady_tick(TICK_INTERVAL);
        }

        Ok(pb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_template() {
        assert!(ProgressBarBuilder::new("reads")
            .with_template("{spinner")
            .build()
            .is_err());
    }

    #[test]
    fn carries_message() {
        let pb = ProgressBarBuilder::new("Reading reads.fq").build().unwrap();
        assert_eq!(pb.message(), "Reading reads.fq");
        assert_eq!(pb.position(), 0);
    }
}
