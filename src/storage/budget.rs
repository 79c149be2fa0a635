//! Budget document persistence
//!
//! The whole budget (income, categories, expenses) is one JSON document.
//! Saves are atomic; loads treat a missing file as a fresh budget.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{AmountPolicy, Budget};

use super::file_io::{read_json, write_json_atomic};

/// What to do when the budget document exists but cannot be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorruptDataPolicy {
    /// Surface [`BudgetError::CorruptData`] to the caller
    Fail,
    /// Move the bad file aside and continue with an empty budget
    #[default]
    StartFresh,
}

impl Budget {
    /// Write a complete snapshot of the budget to `path`
    pub fn save(&self, path: impl AsRef<Path>) -> BudgetResult<()> {
        let path = path.as_ref();
        write_json_atomic(path, self)?;
        debug!(
            path = %path.display(),
            categories = self.len(),
            "saved budget"
        );
        Ok(())
    }

    /// Read a budget from `path`
    ///
    /// A missing file yields a fresh budget. A file that is present but
    /// malformed fails with [`BudgetError::CorruptData`].
    pub fn load(path: impl AsRef<Path>) -> BudgetResult<Budget> {
        let path = path.as_ref();
        match read_json::<Budget, _>(path)? {
            Some(budget) => {
                budget.verify_totals()?;
                debug!(
                    path = %path.display(),
                    categories = budget.len(),
                    "loaded budget"
                );
                Ok(budget)
            }
            None => {
                debug!(path = %path.display(), "no budget file, starting fresh");
                Ok(Budget::new())
            }
        }
    }
}

/// A corrupt document that was set aside during load
#[derive(Debug)]
pub struct DiscardedData {
    /// Why the document was rejected
    pub error: BudgetError,
    /// Where the rejected file now lives
    pub moved_to: PathBuf,
}

/// Result of a policy-driven load
#[derive(Debug)]
pub struct LoadedBudget {
    pub budget: Budget,
    /// Set when a corrupt document was replaced by a fresh budget
    pub discarded: Option<DiscardedData>,
}

/// Owns the location of a budget document and the rules for reading it
#[derive(Debug, Clone)]
pub struct BudgetStore {
    path: PathBuf,
    on_corrupt: CorruptDataPolicy,
    amount_policy: AmountPolicy,
}

impl BudgetStore {
    /// Create a store for the document at `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            on_corrupt: CorruptDataPolicy::default(),
            amount_policy: AmountPolicy::default(),
        }
    }

    pub fn with_corrupt_policy(mut self, policy: CorruptDataPolicy) -> Self {
        self.on_corrupt = policy;
        self
    }

    /// Amount rules applied to every budget this store loads
    pub fn with_amount_policy(mut self, policy: AmountPolicy) -> Self {
        self.amount_policy = policy;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the budget, applying the corrupt-data policy
    pub fn load(&self) -> BudgetResult<LoadedBudget> {
        let (mut budget, discarded) = match Budget::load(&self.path) {
            Ok(budget) => (budget, None),
            Err(error) if error.is_corrupt_data() && self.on_corrupt == CorruptDataPolicy::StartFresh => {
                let moved_to = quarantine(&self.path)?;
                warn!(
                    path = %self.path.display(),
                    moved_to = %moved_to.display(),
                    %error,
                    "budget file is corrupt, starting with an empty budget"
                );
                (Budget::new(), Some(DiscardedData { error, moved_to }))
            }
            Err(error) => return Err(error),
        };

        budget.set_policy(self.amount_policy);
        Ok(LoadedBudget { budget, discarded })
    }

    pub fn save(&self, budget: &Budget) -> BudgetResult<()> {
        budget.save(&self.path)
    }
}

/// Rename a bad document to `<name>.corrupt-<timestamp>` and return the new path
pub fn quarantine(path: &Path) -> BudgetResult<PathBuf> {
    let file_name = path
        .file_name()
        .ok_or_else(|| BudgetError::Storage(format!("Not a file path: {}", path.display())))?;

    let mut base_name = file_name.to_os_string();
    base_name.push(format!(".corrupt-{}", Local::now().format("%Y%m%d%H%M%S")));

    // Never replace an earlier quarantined file from the same second
    let mut target = path.with_file_name(&base_name);
    let mut counter = 1;
    while target.exists() {
        let mut name = base_name.clone();
        name.push(format!("-{}", counter));
        target = path.with_file_name(name);
        counter += 1;
    }

    fs::rename(path, &target).map_err(|e| {
        BudgetError::Storage(format!(
            "Failed to move corrupt file {} aside: {}",
            path.display(),
            e
        ))
    })?;

    Ok(target)
}
