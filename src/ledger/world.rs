// Committed world state and pending write sets

use std::collections::BTreeMap;

/// Keys written by one transaction, in key order. The last write to a key wins.
pub type WriteSet = BTreeMap<String, Vec<u8>>;

/// Committed key/value state
#[derive(Debug, Default, Clone)]
pub struct WorldState {
    entries: BTreeMap<String, Vec<u8>>,
}

impl WorldState {
    /// Committed value under `key`, if any
    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Apply a write set and return how many keys it touched.
    /// An empty value removes the key.
    pub fn apply(&mut self, write_set: WriteSet) -> usize {
        let touched = write_set.len();
        for (key, value) in write_set {
            if value.is_empty() {
                self.entries.remove(&key);
            } else {
                self.entries.insert(key, value);
            }
        }
        touched
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Vec<u8>)> for WorldState {
    fn from_iter<I: IntoIterator<Item = (String, Vec<u8>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().filter(|(_, v)| !v.is_empty()).collect(),
        }
    }
}
