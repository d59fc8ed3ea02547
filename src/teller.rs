// 🏧 Teller Machine - Login, balance, deposit, withdraw
//
// All balance arithmetic is wrapping i32. The teller reads users from the
// injected bank and mutates only the account it is handed.

use crate::bank::Bank;
use crate::entities::{Account, User};
use crate::error::{Result, TellerError};

/// Balance reported by [`TellerMachine::check_balance_code`] when the
/// user/account pair is unknown. Never a real balance to callers of that form.
pub const UNKNOWN_ACCOUNT_BALANCE: i32 = -9999;

/// Teller machine bound to one bank
pub struct TellerMachine<B> {
    bank: B,
}

impl<B: Bank> TellerMachine<B> {
    pub fn new(bank: B) -> Self {
        TellerMachine { bank }
    }

    /// Log in with exact, case-sensitive credentials.
    ///
    /// Returns the registered user (with its accounts) or `None` if no user
    /// matches both name and password. With duplicate credentials the first
    /// registered user wins.
    #[tracing::instrument(skip(self, password))]
    pub fn log_in(&self, username: &str, password: &str) -> Option<User> {
        let user = self
            .bank
            .users()
            .into_iter()
            .find(|u| u.matches_credentials(username, password));

        match &user {
            Some(u) => tracing::debug!(accounts = u.accounts.len(), "login accepted"),
            None => tracing::warn!("login rejected"),
        }

        user
    }

    /// Current balance of `account_number` on the caller-held `user`.
    ///
    /// The user must be registered with the bank (same name and password).
    /// The balance is read from the caller's own account, the one deposits and
    /// withdrawals mutate in place during a session. Fails with
    /// [`TellerError::AccountNotFound`] when the user is not registered or
    /// owns no such account.
    #[tracing::instrument(skip_all, fields(user = %user.name, account = account_number))]
    pub fn check_balance(&self, user: &User, account_number: &str) -> Result<i32> {
        let registered = self
            .bank
            .users()
            .iter()
            .any(|u| u.matches_credentials(&user.name, &user.password));

        let balance = registered
            .then(|| user.find_account(account_number))
            .flatten()
            .map(Account::account_balance);

        match balance {
            Some(balance) => {
                tracing::debug!(balance, "balance checked");
                Ok(balance)
            }
            None => {
                tracing::warn!("account not found");
                Err(TellerError::AccountNotFound {
                    user: user.name.clone(),
                    account_number: account_number.to_string(),
                })
            }
        }
    }

    /// [`check_balance`](Self::check_balance) with the not-found case folded
    /// into [`UNKNOWN_ACCOUNT_BALANCE`].
    pub fn check_balance_code(&self, user: &User, account_number: &str) -> i32 {
        self.check_balance(user, account_number)
            .unwrap_or(UNKNOWN_ACCOUNT_BALANCE)
    }

    /// Add `amount` to the balance. Any i32 is accepted; negative amounts
    /// reduce the balance with no floor, and overflow wraps.
    #[tracing::instrument(skip(self, account), fields(account = %account.account_number))]
    pub fn deposit(&self, account: &mut Account, amount: i32) -> i32 {
        let balance = account.credit(amount);
        tracing::debug!(balance, "deposit applied");
        balance
    }

    /// Subtract `amount` when `amount <= balance`, wrapping on overflow.
    ///
    /// The check is a plain signed comparison on the amount, not on the sign
    /// of the result. Negative amounts therefore always pass and credit the
    /// account, and `i32::MIN` from a non-negative balance wraps.
    /// A refused withdrawal leaves the balance untouched.
    #[tracing::instrument(skip(self, account), fields(account = %account.account_number))]
    pub fn withdraw(&self, account: &mut Account, amount: i32) -> Result<i32> {
        let balance = account.account_balance();
        if amount > balance {
            tracing::warn!(balance, "withdrawal refused: insufficient funds");
            return Err(TellerError::InsufficientFunds {
                balance,
                requested: amount,
            });
        }

        let balance = account.debit(amount);
        tracing::debug!(balance, "withdrawal applied");
        Ok(balance)
    }
}

// ============================================================================
// TESTS
// ============================================================================
