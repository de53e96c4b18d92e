//! Phonebook - bounded in-memory contact directory
//!
//! A fixed-capacity collection of contacts keyed by first and last name
//! (case-insensitive), with an interactive text menu on top.
//!
//! # Modules
//!
//! - [`entry`] - Contact record and its name-based identity
//! - [`directory`] - Bounded entry store: add, lookup, removal, phone update, listing
//! - [`error`] - Expected failure outcomes of directory operations
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface
//! - [`menu`] - Interactive menu driving a [`Directory`]
//!
//! # Example
//!
//! ```
//! use phonebook::{Directory, Entry};
//!
//! let mut dir = Directory::new(2);
//! assert!(dir.add(Entry::new("Ana", "Lopez", "555")));
//! assert!(!dir.add(Entry::new("ana", "LOPEZ", "999")));
//! assert_eq!(dir.free_slots(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod directory;
pub mod entry;
pub mod error;
pub mod menu;

pub use directory::{Directory, DirectoryStats};
pub use entry::Entry;
pub use error::DirectoryError;

/// Capacity used when none (or a non-positive one) is requested
pub const DEFAULT_CAPACITY: usize = 10;
