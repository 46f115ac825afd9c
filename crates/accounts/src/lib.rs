//! Accounts domain module (bank accounts with variant policies).
//!
//! Three account flavors share one capability set: deposit, withdraw,
//! interest. Policy differences (interest rate, overdraft) live in the
//! variants; balance mutation stays inside this crate.

pub mod account;

pub use account::{
    Account, AccountEvent, AccountNumber, BankAccount, CurrentAccount, SavingsAccount,
};
