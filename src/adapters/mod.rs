// Adapters layer: in-process implementations of the domain ports.

use crate::domain::ports::{Notifier, TextBuffer};
use crate::utils::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryBuffer {
    text: String,
}

impl MemoryBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl TextBuffer for MemoryBuffer {
    fn contents(&self) -> Result<String> {
        Ok(self.text.clone())
    }

    fn replace(&mut self, text: String) -> Result<()> {
        self.text = text;
        Ok(())
    }
}

/// 透過 tracing 輸出確認訊息
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, message: &str) {
        tracing::info!("🔔 {}", message);
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: Vec<String>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_buffer_replace() {
        let mut buffer = MemoryBuffer::new("before");
        buffer.replace("after".to_string()).unwrap();
        assert_eq!(buffer.contents().unwrap(), "after");
        assert_eq!(buffer.into_string(), "after");
    }

    #[test]
    fn test_tracing_notifier_accepts_messages() {
        let mut notifier = TracingNotifier;
        notifier.notify("Content converted to lowercase");
    }

    #[test]
    fn test_recording_notifier_keeps_order() {
        let mut notifier = RecordingNotifier::default();
        notifier.notify("one");
        notifier.notify("two");
        assert_eq!(notifier.messages(), ["one", "two"]);
    }
}
