// 🌱 Bank Seed - Users a bank starts with, loaded from JSON
//
// Read-only: the seed is never written back.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::bank::InMemoryBank;
use crate::entities::User;
use crate::error::{Result, TellerError};

/// Seed file contents
///
/// ```json
/// { "users": [ { "name": "SunesKorvar", "password": "KörvEGött",
///                "accounts": [ { "account_number": "1", "account_balance": 0 } ] } ] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankSeed {
    #[serde(default)]
    pub users: Vec<User>,
}

impl BankSeed {
    /// Load and validate a seed from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let seed = Self::from_json(&content)?;
        tracing::info!(path = %path.as_ref().display(), users = seed.users.len(), "bank seed loaded");
        Ok(seed)
    }

    /// Parse and validate a seed from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let seed: BankSeed = serde_json::from_str(json)?;
        seed.validate()?;
        Ok(seed)
    }

    /// Reject users that list the same account number twice
    pub fn validate(&self) -> Result<()> {
        for user in &self.users {
            let mut seen = HashSet::new();
            for account in &user.accounts {
                if !seen.insert(account.account_number.as_str()) {
                    return Err(TellerError::DuplicateAccount {
                        user: user.name.clone(),
                        account_number: account.account_number.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn into_bank(self) -> InMemoryBank {
        InMemoryBank::from_users(self.users)
    }
}
