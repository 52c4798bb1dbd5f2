use indexmap::IndexMap;

/// Per-sender message counts, kept in first-seen order.
#[derive(Debug, Default)]
pub struct SenderTally {
    counts: IndexMap<String, usize>,
}

impl SenderTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, sender: &str) {
        match self.counts.get_mut(sender) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(sender.to_string(), 1);
            }
        }
    }

    pub fn count(&self, sender: &str) -> usize {
        self.counts.get(sender).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sender with the highest count. Ties go to the sender seen first.
    pub fn top_sender(&self) -> Option<&str> {
        let mut best: Option<(&str, usize)> = None;
        for (name, &count) in &self.counts {
            if best.is_none_or(|(_, max)| count > max) {
                best = Some((name.as_str(), count));
            }
        }
        best.map(|(name, _)| name)
    }

    /// Consume the tally, returning the top sender or `fallback`.
    pub fn into_display_name(self, fallback: &str) -> String {
        self.top_sender().unwrap_or(fallback).to_string()
    }
}
