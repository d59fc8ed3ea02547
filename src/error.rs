// ⚠️ Teller Errors
//
// One error type for the whole library. The binary wraps it in anyhow.

use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, TellerError>;

#[derive(Debug, Error)]
pub enum TellerError {
    /// The user is not registered with the bank, or holds no such account
    #[error("account {account_number:?} not found for user {user:?}")]
    AccountNotFound { user: String, account_number: String },

    /// Withdrawal refused because the requested amount exceeds the balance
    #[error("insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: i32, requested: i32 },

    /// Seed data lists the same account number twice for one user
    #[error("user {user:?} lists account {account_number:?} more than once")]
    DuplicateAccount { user: String, account_number: String },

    #[error("failed to parse bank seed: {0}")]
    Seed(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TellerError {
    /// True for the "not found" family of lookups
    pub fn is_not_found(&self) -> bool {
        matches!(self, TellerError::AccountNotFound { .. })
    }
}
