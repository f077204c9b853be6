use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Question index (0-based) to the option the user picked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSelections(BTreeMap<usize, String>);

impl AnswerSelections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last write wins.
    pub fn select(&mut self, index: usize, option: impl Into<String>) {
        self.0.insert(index, option.into());
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(&index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl FromIterator<(usize, String)> for AnswerSelections {
    fn from_iter<I: IntoIterator<Item = (usize, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
