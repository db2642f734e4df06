//! Storage layer for tally
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The whole ledger lives in one document; a missing file reads
//! as an empty ledger.

pub mod file_io;

pub use file_io::{read_json, write_json_atomic};

use crate::config::paths::TallyPaths;
use crate::error::LedgerError;
use crate::ledger::Ledger;

/// Owns the ledger file location and moves the document to and from disk
pub struct Storage {
    paths: TallyPaths,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TallyPaths) -> Result<Self, LedgerError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self { paths })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TallyPaths {
        &self.paths
    }

    /// Load the ledger from disk
    ///
    /// A missing file yields an empty ledger. The id counter is bumped past
    /// every stored id in case the file was edited by hand.
    pub fn load(&self) -> Result<Ledger, LedgerError> {
        let mut ledger: Ledger = read_json(self.paths.ledger_file())?;
        ledger.normalize();
        Ok(ledger)
    }

    /// Save the ledger to disk atomically
    pub fn save(&self, ledger: &Ledger) -> Result<(), LedgerError> {
        write_json_atomic(self.paths.ledger_file(), ledger)
    }
}
