use serde::{Deserialize, Serialize};

use primer_core::{DomainError, DomainResult, Entity};
use primer_events::Event;

/// Account identifier as printed on statements (e.g. "SAV001").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(String);

impl AccountNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for AccountNumber {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for AccountNumber {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Facts emitted by account operations.
///
/// `OverdraftUsed` is the overdraft notice: callers that care inspect the
/// returned events or subscribe through a bus; nothing is printed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AccountEvent {
    Deposited {
        number: AccountNumber,
        amount: f64,
        balance: f64,
    },
    Withdrawn {
        number: AccountNumber,
        amount: f64,
        balance: f64,
    },
    OverdraftUsed {
        number: AccountNumber,
        overdrawn_by: f64,
    },
    InterestCredited {
        number: AccountNumber,
        amount: f64,
        balance: f64,
    },
}

impl Event for AccountEvent {
    fn event_type(&self) -> &'static str {
        match self {
            AccountEvent::Deposited { .. } => "accounts.account.deposited",
            AccountEvent::Withdrawn { .. } => "accounts.account.withdrawn",
            AccountEvent::OverdraftUsed { .. } => "accounts.account.overdraft_used",
            AccountEvent::InterestCredited { .. } => "accounts.account.interest_credited",
        }
    }
}

/// Capability set shared by every account variant.
///
/// Object-safe so heterogeneous collections can be walked through
/// `&dyn Account` / `Box<dyn Account>`; the variant picked at runtime decides
/// the withdrawal and interest policy.
pub trait Account {
    fn number(&self) -> &AccountNumber;

    fn holder(&self) -> &str;

    fn balance(&self) -> f64;

    /// Add funds. Fails when `amount` is not strictly positive.
    fn deposit(&mut self, amount: f64) -> DomainResult<Vec<AccountEvent>>;

    /// Remove funds under the variant's withdrawal policy.
    fn withdraw(&mut self, amount: f64) -> DomainResult<Vec<AccountEvent>>;

    /// Interest this account currently earns (0 for the base variant).
    fn interest(&self) -> f64;
}

fn ensure_positive(amount: f64, operation: &str) -> DomainResult<()> {
    if amount > 0.0 {
        Ok(())
    } else {
        Err(DomainError::invalid_argument(format!(
            "{operation} amount must be positive"
        )))
    }
}

/// Base account: withdrawals limited to the available balance, no interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    number: AccountNumber,
    holder: String,
    balance: f64,
}

impl BankAccount {
    pub fn new(
        number: impl Into<AccountNumber>,
        holder: impl Into<String>,
        initial_balance: f64,
    ) -> Self {
        Self {
            number: number.into(),
            holder: holder.into(),
            balance: initial_balance,
        }
    }

    /// Balance mutation seam for variant policies in this crate.
    ///
    /// External callers only move money through `deposit`/`withdraw`.
    pub(crate) fn set_balance(&mut self, balance: f64) {
        self.balance = balance;
    }
}

impl Account for BankAccount {
    fn number(&self) -> &AccountNumber {
        &self.number
    }

    fn holder(&self) -> &str {
        &self.holder
    }

    fn balance(&self) -> f64 {
        self.balance
    }

    fn deposit(&mut self, amount: f64) -> DomainResult<Vec<AccountEvent>> {
        ensure_positive(amount, "deposit")?;
        self.balance += amount;
        Ok(vec![AccountEvent::Deposited {
            number: self.number.clone(),
            amount,
            balance: self.balance,
        }])
    }

    fn withdraw(&mut self, amount: f64) -> DomainResult<Vec<AccountEvent>> {
        ensure_positive(amount, "withdrawal")?;
        if amount > self.balance {
            return Err(DomainError::invalid_argument(
                "withdrawal exceeds available balance",
            ));
        }
        self.balance -= amount;
        Ok(vec![AccountEvent::Withdrawn {
            number: self.number.clone(),
            amount,
            balance: self.balance,
        }])
    }

    fn interest(&self) -> f64 {
        0.0
    }
}

impl Entity for BankAccount {
    type Id = AccountNumber;

    fn id(&self) -> &Self::Id {
        &self.number
    }
}

impl core::fmt::Display for BankAccount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "account {} held by {}, balance {:.2}",
            self.number, self.holder, self.balance
        )
    }
}

/// Savings account: base withdrawal policy, 5% interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsAccount {
    inner: BankAccount,
}

impl SavingsAccount {
    /// Interest rate earned on the current balance.
    pub const INTEREST_RATE: f64 = 0.05;

    pub fn new(
        number: impl Into<AccountNumber>,
        holder: impl Into<String>,
        initial_balance: f64,
    ) -> Self {
        Self {
            inner: BankAccount::new(number, holder, initial_balance),
        }
    }

    /// Credit the earned interest back into this account.
    ///
    /// Goes through the deposit policy, so a zero or negative balance (and
    /// therefore zero or negative interest) is rejected.
    pub fn add_interest(&mut self) -> DomainResult<Vec<AccountEvent>> {
        let amount = self.interest();
        self.inner.deposit(amount)?;
        Ok(vec![AccountEvent::InterestCredited {
            number: self.inner.number.clone(),
            amount,
            balance: self.inner.balance,
        }])
    }
}

impl Account for SavingsAccount {
    fn number(&self) -> &AccountNumber {
        self.inner.number()
    }

    fn holder(&self) -> &str {
        self.inner.holder()
    }

    fn balance(&self) -> f64 {
        self.inner.balance()
    }

    fn deposit(&mut self, amount: f64) -> DomainResult<Vec<AccountEvent>> {
        self.inner.deposit(amount)
    }

    fn withdraw(&mut self, amount: f64) -> DomainResult<Vec<AccountEvent>> {
        self.inner.withdraw(amount)
    }

    fn interest(&self) -> f64 {
        self.balance() * Self::INTEREST_RATE
    }
}

impl Entity for SavingsAccount {
    type Id = AccountNumber;

    fn id(&self) -> &Self::Id {
        self.inner.id()
    }
}

impl core::fmt::Display for SavingsAccount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "savings account {} held by {}, balance {:.2}",
            self.number(),
            self.holder(),
            self.balance()
        )
    }
}

/// Current account: overdraft withdrawals, 2% interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentAccount {
    inner: BankAccount,
    overdraft_limit: f64,
}

impl CurrentAccount {
    /// Interest rate earned on the current balance (lower than savings).
    pub const INTEREST_RATE: f64 = 0.02;

    pub fn new(
        number: impl Into<AccountNumber>,
        holder: impl Into<String>,
        initial_balance: f64,
        overdraft_limit: f64,
    ) -> Self {
        Self {
            inner: BankAccount::new(number, holder, initial_balance),
            overdraft_limit,
        }
    }

    /// Maximum negative balance this account may reach.
    pub fn overdraft_limit(&self) -> f64 {
        self.overdraft_limit
    }
}

impl Account for CurrentAccount {
    fn number(&self) -> &AccountNumber {
        self.inner.number()
    }

    fn holder(&self) -> &str {
        self.inner.holder()
    }

    fn balance(&self) -> f64 {
        self.inner.balance()
    }

    fn deposit(&mut self, amount: f64) -> DomainResult<Vec<AccountEvent>> {
        self.inner.deposit(amount)
    }

    /// Overdraft policy: the balance may go negative down to
    /// `-overdraft_limit`. Emits `OverdraftUsed` when it does.
    fn withdraw(&mut self, amount: f64) -> DomainResult<Vec<AccountEvent>> {
        ensure_positive(amount, "withdrawal")?;
        if self.balance() + self.overdraft_limit < amount {
            return Err(DomainError::invalid_argument(
                "withdrawal exceeds balance and overdraft limit",
            ));
        }

        let new_balance = self.balance() - amount;
        self.inner.set_balance(new_balance);

        let mut events = vec![AccountEvent::Withdrawn {
            number: self.number().clone(),
            amount,
            balance: new_balance,
        }];
        if new_balance < 0.0 {
            events.push(AccountEvent::OverdraftUsed {
                number: self.number().clone(),
                overdrawn_by: new_balance.abs(),
            });
        }
        Ok(events)
    }

    fn interest(&self) -> f64 {
        self.balance() * Self::INTEREST_RATE
    }
}

impl Entity for CurrentAccount {
    type Id = AccountNumber;

    fn id(&self) -> &Self::Id {
        self.inner.id()
    }
}

impl core::fmt::Display for CurrentAccount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "current account {} held by {}, balance {:.2}, overdraft limit {:.2}",
            self.number(),
            self.holder(),
            self.balance(),
            self.overdraft_limit
        )
    }
}
