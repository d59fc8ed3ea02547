use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use teller_machine::{Account, BankSeed, TellerError, TellerMachine, User};

#[derive(Parser)]
#[command(name = "teller")]
#[command(about = "Simulated bank teller machine", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the JSON file listing the bank's users
    #[arg(short, long, env = "TELLER_USERS")]
    users: PathBuf,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Credentials {
    #[arg(short, long)]
    name: String,

    #[arg(short, long)]
    password: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and list the user's accounts
    Login {
        #[command(flatten)]
        credentials: Credentials,
    },

    /// Show the balance of one account
    Balance {
        #[command(flatten)]
        credentials: Credentials,

        #[arg(short, long)]
        account: String,
    },

    /// Deposit into an account (in memory only)
    Deposit {
        #[command(flatten)]
        credentials: Credentials,

        #[arg(short, long)]
        account: String,

        #[arg(long, allow_negative_numbers = true)]
        amount: i32,
    },

    /// Withdraw from an account (in memory only)
    Withdraw {
        #[command(flatten)]
        credentials: Credentials,

        #[arg(short, long)]
        account: String,

        #[arg(long, allow_negative_numbers = true)]
        amount: i32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    let bank = BankSeed::from_file(&cli.users)
        .with_context(|| format!("Failed to load bank users from {:?}", cli.users))?
        .into_bank();
    tracing::info!(users = bank.count(), "bank ready");
    let teller = TellerMachine::new(bank);

    match cli.command {
        Commands::Login { credentials } => {
            let user = log_in(&teller, &credentials)?;
            println!("Logged in as {}", user.name());
            for account in user.accounts() {
                println!("{}", account_line(account));
            }
        }
        Commands::Balance { credentials, account } => {
            let user = log_in(&teller, &credentials)?;
            let balance = teller.check_balance(&user, &account)?;
            println!("{}", balance);
        }
        Commands::Deposit { credentials, account, amount } => {
            let mut user = log_in(&teller, &credentials)?;
            let target = find_account(&mut user, &account)?;
            println!("{}", teller.deposit(target, amount));
        }
        Commands::Withdraw { credentials, account, amount } => {
            let mut user = log_in(&teller, &credentials)?;
            let target = find_account(&mut user, &account)?;
            match teller.withdraw(target, amount) {
                Ok(balance) => println!("{}", balance),
                Err(TellerError::InsufficientFunds { balance, requested }) => {
                    eprintln!("Withdrawal of {} refused, balance is {}", requested, balance);
                    std::process::exit(2);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok(())
}

fn account_line(account: &Account) -> String {
    let line = format!("  {:>10}  {}", account.account_number(), account.account_balance());
    if account.is_overdrawn() {
        format!("{}  (overdrawn)", line)
    } else {
        line
    }
}

fn log_in<B: teller_machine::Bank>(teller: &TellerMachine<B>, credentials: &Credentials) -> Result<User> {
    teller
        .log_in(&credentials.name, &credentials.password)
        .with_context(|| format!("Login failed for {:?}", credentials.name))
}

fn find_account<'a>(user: &'a mut User, account: &str) -> Result<&'a mut Account> {
    let name = user.name.clone();
    user.find_account_mut(account).ok_or_else(|| {
        TellerError::AccountNotFound {
            user: name,
            account_number: account.to_string(),
        }
        .into()
    })
}
