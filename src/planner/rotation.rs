use anyhow::{anyhow, Result};

/// A fixed, ordered list of study topics with a wrapping cursor.
///
/// The cursor always points at the next topic to surface and stays within
/// `[0, len)`. Every surfaced topic consumes one rotation step; there is no
/// side-effect-free peek.
#[derive(Debug, Clone)]
pub struct TopicRotation {
    topics: Vec<String>,
    cursor: usize,
}

impl TopicRotation {
    /// An empty topic list is a configuration error, not a runtime fault.
    pub fn new(topics: Vec<String>) -> Result<Self> {
        if topics.is_empty() {
            return Err(anyhow!("Topic list cannot be empty"));
        }
        Ok(Self { topics, cursor: 0 })
    }

    /// Returns the topic at the cursor, then advances by one modulo the
    /// list length.
    pub fn advance(&mut self) -> String {
        let topic = self.topics[self.cursor].clone();
        self.cursor = (self.cursor + 1) % self.topics.len();
        topic
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    pub fn topics(&self) -> &[String] {
        &self.topics
    }
}
