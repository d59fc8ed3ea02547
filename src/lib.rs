// Teller Machine - Core Library
// Exposes the teller, the bank collaborator and seed loading for the CLI and tests

pub mod bank;
pub mod config;
pub mod entities;
pub mod error;
pub mod teller;

// Re-export commonly used types
pub use bank::{Bank, InMemoryBank};
pub use config::BankSeed;
pub use entities::{Account, User};
pub use error::{Result, TellerError};
pub use teller::{TellerMachine, UNKNOWN_ACCOUNT_BALANCE};
