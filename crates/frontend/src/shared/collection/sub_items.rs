/// Ordered list of free-text sub-items (lessons, benefits) inside one editor
///
/// Positions are 0-based indices into the current sequence. Out-of-range
/// positions are ignored by every positional operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubItemEditor {
    items: Vec<String>,
    pending: String,
}

impl SubItemEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: impl Into<Vec<String>>) -> Self {
        Self {
            items: items.into(),
            pending: String::new(),
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Text typed into the "new item" input, not yet appended
    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn set_pending(&mut self, text: impl Into<String>) {
        self.pending = text.into();
    }

    /// Append `text` (trimmed) and clear the pending input; blank text is a no-op
    pub fn append(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.items.push(text.to_string());
        self.pending.clear();
        true
    }

    /// Append whatever is in the pending input
    pub fn commit_pending(&mut self) -> bool {
        let text = std::mem::take(&mut self.pending);
        let appended = self.append(&text);
        if !appended {
            self.pending = text;
        }
        appended
    }

    pub fn remove_at(&mut self, position: usize) -> Option<String> {
        if position < self.items.len() {
            Some(self.items.remove(position))
        } else {
            None
        }
    }

    /// Move the item at `from` to `to`, shifting the items in between
    pub fn reorder(&mut self, from: usize, to: usize) -> &[String] {
        let len = self.items.len();
        if from < len && to < len && from != to {
            let item = self.items.remove(from);
            self.items.insert(to, item);
        }
        &self.items
    }

    pub fn move_up(&mut self, position: usize) -> &[String] {
        match position.checked_sub(1) {
            Some(to) => self.reorder(position, to),
            None => &self.items,
        }
    }

    pub fn move_down(&mut self, position: usize) -> &[String] {
        self.reorder(position, position.saturating_add(1))
    }
}
