//! Order status and payment method.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use thiserror::Error;

/// Raised when a stored or submitted status string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseStatusError {
    kind: &'static str,
    value: String,
}

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    /// Still being edited.
    #[default]
    Open,

    /// Settled; terminal.
    Paid,

    /// Abandoned; terminal.
    Cancelled,
}

impl OrderStatus {
    /// Wire and storage representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Paid => "paid",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether no further transitions are allowed.
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Open)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "paid" => Ok(Self::Paid),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(ParseStatusError {
                kind: "order status",
                value: other.to_string(),
            }),
        }
    }
}

/// How a paid order was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    /// Cash
    Cash,

    /// Credit or debit card
    CreditCard,

    /// Anything else
    Other,
}

impl PaymentMethod {
    /// Wire and storage representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::CreditCard => "creditCard",
            Self::Other => "other",
        }
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(Self::Cash),
            "creditCard" => Ok(Self::CreditCard),
            "other" => Ok(Self::Other),
            other => Err(ParseStatusError {
                kind: "payment method",
                value: other.to_string(),
            }),
        }
    }
}
