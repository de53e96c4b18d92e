//! Bounded contact directory

use tracing::{debug, info};

use crate::entry::Entry;
use crate::error::DirectoryError;

/// Occupancy summary of a directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryStats {
    /// Maximum number of live entries
    pub capacity: usize,
    /// Live entries
    pub used: usize,
    /// Remaining free slots
    pub free: usize,
}

/// A bounded, insertion-ordered collection of entries
///
/// No two live entries are equal (case-insensitive first and last name) and
/// the number of live entries never exceeds the capacity given at
/// construction. Capacity is taken as-is: validating user input is the job
/// of whoever builds the directory (see [`crate::config::resolve_capacity`]).
#[derive(Debug, Clone)]
pub struct Directory {
    entries: Vec<Entry>,
    capacity: usize,
}

impl Default for Directory {
    fn default() -> Self {
        Self::new(crate::DEFAULT_CAPACITY)
    }
}

impl Directory {
    /// Empty directory holding at most `capacity` entries
    ///
    /// Capacity is a limit checked on insert; storage grows with the entries.
    pub fn new(capacity: usize) -> Self {
        info!(capacity, "Created directory");
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn free_slots(&self) -> usize {
        self.capacity.saturating_sub(self.entries.len())
    }

    pub fn stats(&self) -> DirectoryStats {
        DirectoryStats {
            capacity: self.capacity,
            used: self.len(),
            free: self.free_slots(),
        }
    }

    /// Live entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Append an entry, reporting why it was rejected
    ///
    /// Checks run in order: validity, capacity, duplicate. A rejected entry
    /// leaves the directory untouched.
    pub fn try_add(&mut self, entry: Entry) -> Result<(), DirectoryError> {
        if !entry.is_valid() {
            debug!(first = entry.first(), last = entry.last(), "Rejected invalid entry");
            return Err(DirectoryError::InvalidEntry);
        }
        if self.is_full() {
            debug!(capacity = self.capacity, "Rejected entry: directory full");
            return Err(DirectoryError::Full {
                capacity: self.capacity,
            });
        }
        if self.exists(&entry) {
            debug!(first = entry.first(), last = entry.last(), "Rejected duplicate entry");
            return Err(DirectoryError::Duplicate {
                first: entry.first().to_string(),
                last: entry.last().to_string(),
            });
        }

        debug!(first = entry.first(), last = entry.last(), "Added entry");
        self.entries.push(entry);
        Ok(())
    }

    pub fn add(&mut self, entry: Entry) -> bool {
        self.try_add(entry).is_ok()
    }

    /// Whether a live entry equal to `entry` exists
    pub fn exists(&self, entry: &Entry) -> bool {
        self.entries.iter().any(|e| e == entry)
    }

    pub fn find_by_name(&self, first: &str, last: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.matches_name(first, last))
    }

    /// Entries sorted ascending by display key
    ///
    /// The sort is stable and works on a copy of the live entries; insertion
    /// order in the directory is unchanged. An empty directory yields an
    /// empty listing.
    pub fn list(&self) -> Vec<&Entry> {
        let mut sorted: Vec<&Entry> = self.entries.iter().collect();
        sorted.sort_by_cached_key(|e| e.display_key());
        sorted
    }

    /// Remove the first entry equal to `entry`, returning it
    ///
    /// Later entries shift down by one so insertion order is preserved.
    pub fn try_remove(&mut self, entry: &Entry) -> Result<Entry, DirectoryError> {
        match self.entries.iter().position(|e| e == entry) {
            Some(idx) => {
                let removed = self.entries.remove(idx);
                debug!(first = removed.first(), last = removed.last(), idx, "Removed entry");
                Ok(removed)
            }
            None => {
                debug!(first = entry.first(), last = entry.last(), "No entry to remove");
                Err(DirectoryError::NotFound {
                    first: entry.first().to_string(),
                    last: entry.last().to_string(),
                })
            }
        }
    }

    pub fn remove(&mut self, entry: &Entry) -> bool {
        self.try_remove(entry).is_ok()
    }

    /// Overwrite the phone of the entry named (first, last)
    pub fn try_update_phone(&mut self, first: &str, last: &str, phone: &str) -> Result<(), DirectoryError> {
        let Some(entry) = self.entries.iter_mut().find(|e| e.matches_name(first, last)) else {
            debug!(first, last, "No entry to update");
            return Err(DirectoryError::NotFound {
                first: first.to_string(),
                last: last.to_string(),
            });
        };

        entry.set_phone(phone);
        debug!(first, last, "Updated phone");
        Ok(())
    }

    pub fn update_phone(&mut self, first: &str, last: &str, phone: &str) -> bool {
        self.try_update_phone(first, last, phone).is_ok()
    }
}
