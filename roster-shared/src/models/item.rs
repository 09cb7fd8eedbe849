//! Item list model
//!
//! A plain ordered list of strings used by the console program. Items have
//! no identity beyond their text; removal matches by equality and only
//! touches the first match.

/// Ordered in-memory list of text items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemList {
    items: Vec<String>,
}

impl ItemList {
    /// Creates an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item to the end of the list
    pub fn add(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Returns all items in insertion order
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Whether the list holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes the first item equal to `item`
    ///
    /// Returns `true` when something was removed; a missing item is not an
    /// error.
    pub fn remove(&mut self, item: &str) -> bool {
        match self.items.iter().position(|i| i == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }
}
