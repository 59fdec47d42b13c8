use thiserror::Error;

/// Fee withheld from every deposit.
pub const DEPOSIT_FEE_PERCENTAGE: f64 = 0.02;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AccountError {
    #[error("insufficient balance: requested {requested:.2}, available {available:.2}")]
    InsufficientBalance { requested: f64, available: f64 },
}

/// Customer account whose balance can never go negative.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    id: i64,
    balance: f64,
}

impl Account {
    pub fn new(id: i64, balance: f64) -> Self {
        Self { id, balance }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Credits `amount` minus the deposit fee. Non-positive amounts are ignored.
    pub fn deposit(&mut self, amount: f64) {
        if amount > 0.0 {
            self.balance += amount - amount * DEPOSIT_FEE_PERCENTAGE;
        }
    }

    pub fn withdraw(&mut self, amount: f64) -> Result<(), AccountError> {
        if amount > self.balance {
            return Err(AccountError::InsufficientBalance {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }

    /// Empties the account, returning what it held.
    pub fn full_withdraw(&mut self) -> f64 {
        std::mem::take(&mut self.balance)
    }
}
