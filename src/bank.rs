// 🏦 Bank - The teller's view of the user registry
//
// The teller never mutates the registry. It asks for the current list of
// users and works on what it gets back. Only the bank side registers users.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::entities::User;

// ============================================================================
// BANK COLLABORATOR
// ============================================================================

/// Query surface of the bank backing a teller machine.
///
/// A single operation: list every registered user, in registration order.
pub trait Bank {
    fn users(&self) -> Vec<User>;
}

impl<B: Bank + ?Sized> Bank for &B {
    fn users(&self) -> Vec<User> {
        (**self).users()
    }
}

impl<B: Bank + ?Sized> Bank for Arc<B> {
    fn users(&self) -> Vec<User> {
        (**self).users()
    }
}

// ============================================================================
// IN-MEMORY BANK
// ============================================================================

/// Registry of all users known to the bank
///
/// Clones share the same storage, so the side that registers users and the
/// teller reading them can each hold their own handle.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBank {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryBank {
    /// Create new empty bank
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_users(users: Vec<User>) -> Self {
        InMemoryBank {
            users: Arc::new(RwLock::new(users)),
        }
    }

    /// Register a user (appended, registration order is preserved)
    pub fn register(&self, user: User) {
        tracing::debug!(user = %user.name, accounts = user.accounts.len(), "registering user");
        self.write().push(user);
    }

    /// Count registered users
    pub fn count(&self) -> usize {
        self.read().len()
    }

    // A panic while holding the lock cannot leave a half-pushed Vec behind,
    // so a poisoned lock is still safe to read.
    fn read(&self) -> RwLockReadGuard<'_, Vec<User>> {
        self.users.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<User>> {
        self.users.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Bank for InMemoryBank {
    fn users(&self) -> Vec<User> {
        self.read().clone()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Account;

    #[test]
    fn test_empty_bank() {
        let bank = InMemoryBank::new();

        assert_eq!(bank.count(), 0);
        assert!(bank.users().is_empty());
    }

    #[test]
    fn test_register_preserves_order() {
        let bank = InMemoryBank::new();
        bank.register(User::new("SunesKorvar", "KörvEGött", vec![Account::new("1", 0)]));
        bank.register(User::new("BörjesBurgare", "BurgareEBäst", vec![]));

        let names: Vec<String> = bank.users().into_iter().map(|u| u.name).collect();
        assert_eq!(names, vec!["SunesKorvar", "BörjesBurgare"]);
    }

    #[test]
    fn test_clones_share_registry() {
        let bank = InMemoryBank::new();
        let teller_side = bank.clone();

        bank.register(User::new("SunesKorvar", "KörvEGött", vec![]));

        assert_eq!(teller_side.count(), 1);
        assert_eq!(teller_side.users()[0].name, "SunesKorvar");
    }

    #[test]
    fn test_users_returns_snapshot() {
        let bank = InMemoryBank::from_users(vec![User::new(
            "SunesKorvar",
            "KörvEGött",
            vec![Account::new("1", 0)],
        )]);

        let mut snapshot = bank.users();
        snapshot[0].accounts[0].credit(100);

        assert_eq!(bank.users()[0].accounts[0].account_balance, 0);
    }

    #[test]
    fn test_bank_through_reference_and_arc() {
        let bank = InMemoryBank::from_users(vec![User::new("a", "b", vec![])]);

        fn count_users(bank: impl Bank) -> usize {
            bank.users().len()
        }

        assert_eq!(count_users(&bank), 1);
        assert_eq!(count_users(Arc::new(bank)), 1);
    }
}
