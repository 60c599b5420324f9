use crate::registry::ZoneRegistry;

/// Tracks which zone names are selected.
///
/// `SelectionSet` is responsible for:
/// - Toggling membership one name at a time (Ctrl+click)
/// - Remembering the order names were selected in, which is the order the
///   clipboard copies them
/// - Following renames and deletions so it never names a missing zone
///
/// It does not restyle anything itself; the editor publishes the style
/// changes for the names this type reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    names: Vec<String>,
}

impl SelectionSet {
    /// Creates an empty selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use zonekit_layout::selection::SelectionSet;
    ///
    /// let selection = SelectionSet::new();
    /// assert!(selection.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `name` if absent, removes it if present.
    ///
    /// # Returns
    ///
    /// `true` if the name is selected after the call.
    pub fn toggle(&mut self, name: &str) -> bool {
        if let Some(index) = self.index_of(name) {
            self.names.remove(index);
            false
        } else {
            self.names.push(name.to_string());
            true
        }
    }

    /// Empties the selection.
    ///
    /// # Returns
    ///
    /// The names that were selected, so the caller can restyle them.
    pub fn clear(&mut self) -> Vec<String> {
        std::mem::take(&mut self.names)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Selected names in selection order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Drops `name` from the selection. Returns true if it was selected.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.index_of(name) {
            Some(index) => {
                self.names.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replaces `from` with `to`, keeping its selection order.
    ///
    /// If `to` was already selected on its own, that entry is dropped.
    pub fn rename(&mut self, from: &str, to: &str) {
        let Some(index) = self.index_of(from) else {
            return;
        };
        self.names[index] = to.to_string();
        let mut seen = false;
        self.names.retain(|n| {
            if n != to {
                return true;
            }
            let keep = !seen;
            seen = true;
            keep
        });
    }

    /// Drops names that no longer exist in `registry`.
    pub fn retain_existing(&mut self, registry: &ZoneRegistry) -> Vec<String> {
        let (kept, dropped) = std::mem::take(&mut self.names)
            .into_iter()
            .partition(|n| registry.contains(n));
        self.names = kept;
        dropped
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}
