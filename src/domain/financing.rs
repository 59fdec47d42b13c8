//! Financing simulation with a cross-field affordability rule.
//!
//! The monthly quota may never exceed half of the customer's income. The rule
//! is checked on construction and by every setter; a rejected change leaves
//! the financing exactly as it was.

use thiserror::Error;

/// Share of the total amount paid up front.
const ENTRY_RATE: f64 = 0.2;
/// Largest share of the income a monthly quota may consume.
const MAX_QUOTA_SHARE: f64 = 0.5;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FinancingError {
    #[error("financing must span at least one month")]
    NoMonths,
    #[error("total amount and income must be finite numbers")]
    NotFinite,
    #[error("quota of {quota:.2} exceeds half of the income {income:.2}")]
    QuotaTooHigh { quota: f64, income: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Financing {
    total_amount: f64,
    income: f64,
    months: u32,
}

impl Financing {
    pub fn new(total_amount: f64, income: f64, months: u32) -> Result<Self, FinancingError> {
        let financing = Self {
            total_amount,
            income,
            months,
        };
        financing.validate()?;
        Ok(financing)
    }

    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    pub fn income(&self) -> f64 {
        self.income
    }

    pub fn months(&self) -> u32 {
        self.months
    }

    pub fn set_total_amount(&mut self, total_amount: f64) -> Result<(), FinancingError> {
        self.apply(Self {
            total_amount,
            ..self.clone()
        })
    }

    pub fn set_income(&mut self, income: f64) -> Result<(), FinancingError> {
        self.apply(Self {
            income,
            ..self.clone()
        })
    }

    pub fn set_months(&mut self, months: u32) -> Result<(), FinancingError> {
        self.apply(Self {
            months,
            ..self.clone()
        })
    }

    /// Down payment due at signing.
    pub fn entry(&self) -> f64 {
        self.total_amount * ENTRY_RATE
    }

    /// Monthly installment for the financed remainder.
    pub fn quota(&self) -> f64 {
        (self.total_amount - self.entry()) / f64::from(self.months)
    }

    fn apply(&mut self, candidate: Self) -> Result<(), FinancingError> {
        candidate.validate()?;
        *self = candidate;
        Ok(())
    }

    fn validate(&self) -> Result<(), FinancingError> {
        if self.months == 0 {
            return Err(FinancingError::NoMonths);
        }
        if !self.total_amount.is_finite() || !self.income.is_finite() {
            return Err(FinancingError::NotFinite);
        }
        let quota = self.quota();
        if quota > self.income * MAX_QUOTA_SHARE {
            return Err(FinancingError::QuotaTooHigh {
                quota,
                income: self.income,
            });
        }
        Ok(())
    }
}
