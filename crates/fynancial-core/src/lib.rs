//! fynancial-core - Ledger logic for the Fynancial desktop app
//!
//! This library holds everything the GUI needs that does not depend on a
//! widget toolkit: the balance cell, amount parsing, the submit transition
//! for withdraw/deposit panels, and the display model for the balance label.

use thiserror::Error;

pub use display::{format_balance, BalanceDisplay, Tone};
pub use ledger::{parse_amount, Ledger, Submission};

/// Core errors for fynancial
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FynancialError {
    #[error("invalid entry: only unsigned numbers")]
    InvalidEntry { input: String },
}

/// Result type for fynancial operations
pub type FynancialResult<T> = Result<T, FynancialError>;

/// Which panel triggered a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Withdraw,
    Deposit,
}

impl Operation {
    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            Operation::Withdraw => "Withdraw",
            Operation::Deposit => "Deposit",
        }
    }

    /// Entry placeholder text.
    pub fn placeholder(self) -> &'static str {
        match self {
            Operation::Withdraw => "amount to withdraw",
            Operation::Deposit => "amount to deposit",
        }
    }

    /// Apply an amount to a balance. No sign or bound checks.
    pub fn apply(self, balance: f64, amount: f64) -> f64 {
        match self {
            Operation::Withdraw => balance - amount,
            Operation::Deposit => balance + amount,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

pub mod display {
    //! Display model for the balance label.

    /// Color tag derived from the sign of the balance.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum Tone {
        Positive,
        Negative,
        #[default]
        Neutral,
    }

    impl Tone {
        pub fn for_balance(balance: f64) -> Self {
            if balance > 0.0 {
                Tone::Positive
            } else if balance < 0.0 {
                Tone::Negative
            } else {
                Tone::Neutral
            }
        }
    }

    /// Format a balance as currency with exactly two decimals.
    pub fn format_balance(balance: f64) -> String {
        format!("R$ {:.2}", balance)
    }

    /// Rendered text and tone for the balance label.
    #[derive(Debug, Clone, PartialEq)]
    pub struct BalanceDisplay {
        pub text: String,
        pub tone: Tone,
    }

    impl BalanceDisplay {
        /// Zero balance, neutral tone.
        pub fn new() -> Self {
            Self::for_balance(0.0)
        }

        pub fn for_balance(balance: f64) -> Self {
            Self {
                text: format_balance(balance),
                tone: Tone::for_balance(balance),
            }
        }

        /// Recompute text and tone in place.
        pub fn update(&mut self, balance: f64) {
            *self = Self::for_balance(balance);
        }
    }

    impl Default for BalanceDisplay {
        fn default() -> Self {
            Self::new()
        }
    }
}

pub mod ledger {
    //! The single balance cell and the submit transition.

    use crate::display::BalanceDisplay;
    use crate::{FynancialError, FynancialResult, Operation};
    use log::{debug, warn};

    /// Parse raw entry text as an amount.
    ///
    /// The text is not trimmed. Anything that does not parse as a finite
    /// `f64` is rejected, so `"NaN"`, `"inf"` and out-of-range literals like
    /// `"1e400"` are treated the same as `"abc"`.
    pub fn parse_amount(input: &str) -> FynancialResult<f64> {
        match input.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(FynancialError::InvalidEntry {
                input: input.to_string(),
            }),
        }
    }

    /// Outcome of a successful submit.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Submission {
        pub operation: Operation,
        pub amount: f64,
        pub balance: f64,
        pub display: BalanceDisplay,
    }

    /// Process-lifetime balance, starting at zero.
    #[derive(Debug, Clone, Default)]
    pub struct Ledger {
        balance: f64,
    }

    impl Ledger {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn balance(&self) -> f64 {
            self.balance
        }

        pub fn display(&self) -> BalanceDisplay {
            BalanceDisplay::for_balance(self.balance)
        }

        /// Parse `input` and apply it for `operation`.
        ///
        /// On error the balance is left untouched. A result that overflows
        /// to infinity is rejected like an unparsable entry.
        pub fn submit(&mut self, operation: Operation, input: &str) -> FynancialResult<Submission> {
            let previous = self.balance;
            let next = parse_amount(input).and_then(|amount| {
                let next = operation.apply(previous, amount);
                if next.is_finite() {
                    Ok((amount, next))
                } else {
                    Err(FynancialError::InvalidEntry {
                        input: input.to_string(),
                    })
                }
            });

            let (amount, next) = match next {
                Ok(applied) => applied,
                Err(e) => {
                    warn!("{} rejected for entry {:?}: {}", operation, input, e);
                    return Err(e);
                }
            };

            self.balance = next;
            debug!(
                "{} of {} applied: {} -> {}",
                operation, amount, previous, self.balance
            );

            Ok(Submission {
                operation,
                amount,
                balance: self.balance,
                display: self.display(),
            })
        }
    }
}

#[cfg(test)]
mod tests;
