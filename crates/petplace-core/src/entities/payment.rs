//! Payment entity - payment attached to a reservation

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Payment lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Cancelled,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Paid => "PAID",
            Self::Cancelled => "CANCELLED",
            Self::Failed => "FAILED",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "PAID" => Ok(Self::Paid),
            "CANCELLED" => Ok(Self::Cancelled),
            "FAILED" => Ok(Self::Failed),
            other => Err(DomainError::InternalError(format!(
                "unknown payment status: {other}"
            ))),
        }
    }
}

/// Payment method reported by the payment gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Card,
    KakaoPay,
    NaverPay,
    Bank,
    Etc,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Card => "CARD",
            Self::KakaoPay => "KAKAOPAY",
            Self::NaverPay => "NAVERPAY",
            Self::Bank => "BANK",
            Self::Etc => "ETC",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CARD" => Ok(Self::Card),
            "KAKAOPAY" => Ok(Self::KakaoPay),
            "NAVERPAY" => Ok(Self::NaverPay),
            "BANK" => Ok(Self::Bank),
            // Gateways report methods we do not track individually
            _ => Ok(Self::Etc),
        }
    }
}

/// Payment entity. `imp_uid` is the gateway-side transaction id and is
/// only set once a webhook or verification call confirms the payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    pub id: i64,
    pub reservation_id: i64,
    pub merchant_uid: String,
    pub imp_uid: Option<String>,
    pub amount: Decimal,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Payment {
    /// A paid or cancelled payment has reached a final customer-visible
    /// state; late gateway reports cannot move it back to failed.
    #[inline]
    pub fn is_settled(&self) -> bool {
        matches!(self.status, PaymentStatus::Paid | PaymentStatus::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            PaymentStatus::Pending,
            PaymentStatus::Paid,
            PaymentStatus::Cancelled,
            PaymentStatus::Failed,
        ] {
            assert_eq!(status.as_str().parse::<PaymentStatus>().ok(), Some(status));
        }
    }

    #[test]
    fn test_unknown_method_falls_back_to_etc() {
        assert_eq!("POINT".parse::<PaymentMethod>().ok(), Some(PaymentMethod::Etc));
        assert_eq!("CARD".parse::<PaymentMethod>().ok(), Some(PaymentMethod::Card));
    }

    fn sample_payment(status: PaymentStatus) -> Payment {
        let now = Utc::now();
        Payment {
            id: 1,
            reservation_id: 1,
            merchant_uid: "HOTEL_1_202608291200001234".to_string(),
            imp_uid: None,
            amount: Decimal::new(100_000, 0),
            method: PaymentMethod::Etc,
            status,
            paid_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_settled_states() {
        assert!(!sample_payment(PaymentStatus::Pending).is_settled());
        assert!(!sample_payment(PaymentStatus::Failed).is_settled());
        assert!(sample_payment(PaymentStatus::Paid).is_settled());
        assert!(sample_payment(PaymentStatus::Cancelled).is_settled());
    }
}
