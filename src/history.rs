use std::{collections::VecDeque, fmt};

/// Number of calculations kept before the oldest is dropped.
pub const HISTORY_CAPACITY: usize = 100;

/// One successful calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// The text that was evaluated.
    pub expression: String,
    /// Its value.
    pub result:     f64,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.result)
    }
}

/// The most recent calculations, oldest first.
///
/// # Example
/// ```
/// use calcx::history::{History, HISTORY_CAPACITY};
///
/// let mut history = History::new();
/// for i in 0..=HISTORY_CAPACITY {
///     history.push(i.to_string(), 0.0);
/// }
/// assert_eq!(history.len(), HISTORY_CAPACITY);
/// assert_eq!(history.entries().next().unwrap().expression, "1");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a calculation, dropping the oldest once full.
    pub fn push(&mut self, expression: impl Into<String>, result: f64) {
        if self.entries.len() == HISTORY_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(HistoryEntry { expression: expression.into(),
                                              result });
    }

    /// Iterates over the entries, oldest first.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// The recorded results, oldest first.
    #[must_use]
    pub fn results(&self) -> Vec<f64> {
        self.entries.iter().map(|entry| entry.result).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
