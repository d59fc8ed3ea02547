// 💳 Account Entity - Numbered balance record owned by a User
//
// Balance is a fixed-width i32. All arithmetic on it wraps at the
// i32 boundary: MAX + 1 == MIN, 0 - MIN == MIN.

use serde::{Deserialize, Serialize};

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

/// Account Entity
///
/// Identity: account number (unique within the owning user's list, assumed)
/// Value: current balance, mutated in place by deposits and withdrawals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account number as printed on the card, e.g. "1"
    pub account_number: String,

    /// Current balance (wrapping i32 arithmetic, no floor or ceiling)
    pub account_balance: i32,
}

impl Account {
    pub fn new(account_number: impl Into<String>, account_balance: i32) -> Self {
        Account {
            account_number: account_number.into(),
            account_balance,
        }
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn account_balance(&self) -> i32 {
        self.account_balance
    }

    pub fn set_account_balance(&mut self, balance: i32) {
        self.account_balance = balance;
    }

    /// Add `amount` with wrapping arithmetic and return the new balance
    pub fn credit(&mut self, amount: i32) -> i32 {
        self.account_balance = self.account_balance.wrapping_add(amount);
        self.account_balance
    }

    /// Subtract `amount` with wrapping arithmetic and return the new balance.
    ///
    /// No sufficiency check here; see `TellerMachine::withdraw`.
    pub fn debit(&mut self, amount: i32) -> i32 {
        self.account_balance = self.account_balance.wrapping_sub(amount);
        self.account_balance
    }

    /// Check if account has a negative balance
    pub fn is_overdrawn(&self) -> bool {
        self.account_balance < 0
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_creation() {
        let account = Account::new("1", 555);

        assert_eq!(account.account_number(), "1");
        assert_eq!(account.account_balance(), 555);
        assert!(!account.is_overdrawn());
    }

    #[test]
    fn test_set_account_balance() {
        let mut account = Account::new("1", 0);
        account.set_account_balance(-999);

        assert_eq!(account.account_balance(), -999);
        assert!(account.is_overdrawn());
    }

    #[test]
    fn test_credit_wraps_past_max() {
        let mut account = Account::new("1", i32::MAX);

        assert_eq!(account.credit(1), i32::MIN);
    }

    #[test]
    fn test_debit_wraps_past_min() {
        let mut account = Account::new("1", 0);

        // 0 - MIN overflows back to MIN
        assert_eq!(account.debit(i32::MIN), i32::MIN);

        let mut account = Account::new("1", i32::MIN);
        assert_eq!(account.debit(1), i32::MAX);
    }

    #[test]
    fn test_account_json_field_names() {
        let account: Account =
            serde_json::from_str(r#"{"account_number":"7","account_balance":-850}"#).unwrap();

        assert_eq!(account, Account::new("7", -850));
    }
}
