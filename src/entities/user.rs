// 👤 User Entity - Credentials plus the accounts the user owns
//
// Passwords are plaintext and compared verbatim. The user owns its
// accounts exclusively; order is registration order.

use serde::{Deserialize, Serialize};

use super::account::Account;

/// User Entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,

    pub password: String,

    /// Accounts owned by this user, in the order they were opened
    #[serde(default)]
    pub accounts: Vec<Account>,
}

impl User {
    pub fn new(name: impl Into<String>, password: impl Into<String>, accounts: Vec<Account>) -> Self {
        User {
            name: name.into(),
            password: password.into(),
            accounts,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn add_account(&mut self, account: Account) {
        self.accounts.push(account);
    }

    /// Exact, case-sensitive match on both fields
    pub fn matches_credentials(&self, name: &str, password: &str) -> bool {
        self.name == name && self.password == password
    }

    /// Find account by number (exact match). First match wins.
    pub fn find_account(&self, account_number: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|acc| acc.account_number == account_number)
    }

    pub fn find_account_mut(&mut self, account_number: &str) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|acc| acc.account_number == account_number)
    }
}
