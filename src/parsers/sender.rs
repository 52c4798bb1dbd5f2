//! Deciding whether a sender name belongs to the device owner.
//!
//! Exports do not mark the owner explicitly. English exports name the owner
//! "You", others wrap the owner's own name in a direction-embedding character,
//! and other locales use their own word, so detection is a pluggable predicate.

/// U+202A LEFT-TO-RIGHT EMBEDDING, inserted by the exporter around the owner's name
pub const OWNER_MARKER: char = '\u{202A}';

const DEFAULT_SELF_NAME: &str = "you";

/// Predicate classifying a sender display name as the device owner.
pub trait SelfDetector: Send + Sync {
    fn is_self(&self, sender: &str) -> bool;
}

impl<F> SelfDetector for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_self(&self, sender: &str) -> bool {
        self(sender)
    }
}

/// English export heuristic: "you" (any case) or the owner marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSelfDetector;

impl SelfDetector for DefaultSelfDetector {
    fn is_self(&self, sender: &str) -> bool {
        if sender.contains(OWNER_MARKER) {
            return true;
        }
        sender.trim().eq_ignore_ascii_case(DEFAULT_SELF_NAME)
    }
}

/// Default heuristic plus extra names for other export languages or the
/// owner's own contact name.
#[derive(Debug, Clone, Default)]
pub struct AliasSelfDetector {
    aliases: Vec<String>,
}

impl AliasSelfDetector {
    pub fn new<I, S>(aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let aliases = aliases
            .into_iter()
            .map(|a| a.as_ref().trim().to_lowercase())
            .filter(|a| !a.is_empty())
            .collect();
        Self { aliases }
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }
}

impl SelfDetector for AliasSelfDetector {
    fn is_self(&self, sender: &str) -> bool {
        if DefaultSelfDetector.is_self(sender) {
            return true;
        }
        let name = sender.trim().to_lowercase();
        self.aliases.iter().any(|a| *a == name)
    }
}
