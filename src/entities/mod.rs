// Entity Models
//
// User owns its accounts. Both are plain values; the bank hands out
// copies and the teller mutates balances on the copy it is given.

pub mod account;
pub mod user;

pub use account::Account;
pub use user::User;
