use crate::core::encoding::decode_owned;
use crate::core::{EncodingPolicy, Notifier, TextBuffer};
use crate::utils::error::Result;
use std::io::{Read, Write};

/// A buffer backed by a reader and a writer, typically stdin and stdout.
///
/// The input is read once, up front. `replace` writes the new text to the
/// writer exactly as given, without a trailing newline.
#[derive(Debug)]
pub struct StdioBuffer<W: Write> {
    text: String,
    writer: W,
}

impl<W: Write> StdioBuffer<W> {
    pub fn read_from<R: Read>(mut reader: R, writer: W, policy: EncodingPolicy) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        tracing::debug!("Read {} bytes from input", bytes.len());

        let text = decode_owned(bytes, policy)?;
        Ok(Self { text, writer })
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> TextBuffer for StdioBuffer<W> {
    fn contents(&self) -> Result<String> {
        Ok(self.text.clone())
    }

    fn replace(&mut self, text: String) -> Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        self.text = text;
        Ok(())
    }
}

/// Prints confirmations on stderr, keeping stdout for the converted text.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrNotifier {
    quiet: bool,
}

impl StderrNotifier {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Notifier for StderrNotifier {
    fn notify(&mut self, message: &str) {
        if self.quiet {
            tracing::debug!("Suppressed confirmation: {}", message);
            return;
        }
        eprintln!("✅ {}", message);
    }
}
