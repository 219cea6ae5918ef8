use crate::core::transform::transform;
use crate::domain::model::{ConversionReport, TransformMode};
use crate::domain::ports::{Notifier, TextBuffer};
use crate::utils::error::Result;

/// Runs one conversion against a host-owned buffer, then confirms it.
pub struct CaseCommand<B: TextBuffer, N: Notifier> {
    buffer: B,
    notifier: N,
}

impl<B: TextBuffer, N: Notifier> CaseCommand<B, N> {
    pub fn new(buffer: B, notifier: N) -> Self {
        Self { buffer, notifier }
    }

    pub fn run(&mut self, mode: TransformMode) -> Result<ConversionReport> {
        let input = self.buffer.contents()?;
        tracing::debug!("Converting {} bytes to {}", input.len(), mode.label());

        let output = transform(&input, mode);
        let report = ConversionReport::new(mode, &input, &output);

        self.buffer.replace(output)?;
        self.notifier.notify(&report.message);

        tracing::debug!(
            "✅ {} ({} of {} characters changed)",
            report.message,
            report.changed_chars,
            report.input_chars
        );
        Ok(report)
    }

    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    pub fn into_parts(self) -> (B, N) {
        (self.buffer, self.notifier)
    }
}
