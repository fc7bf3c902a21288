/// Text target that extensions report status to.
pub trait MessageSink {
    /// Append one message.
    fn append(&mut self, text: &str);
}

impl MessageSink for String {
    fn append(&mut self, text: &str) {
        self.push_str(text);
        self.push('\n');
    }
}

/// Message sink that keeps each message as its own line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageLog {
    lines: Vec<String>,
}

impl MessageLog {
    /// Empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages, oldest first.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Most recent message.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    /// Whether nothing was logged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drop all messages.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl MessageSink for MessageLog {
    fn append(&mut self, text: &str) {
        log::debug!("{text}");
        self.lines.push(text.to_owned());
    }
}
