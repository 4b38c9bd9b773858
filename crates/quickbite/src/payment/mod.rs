//! # Payment Gateway (mock)
//!
//! Checkout charges the cart total through the [`PaymentGateway`] boundary
//! before any order exists. The mock approves after a bounded delay; a
//! declining mode exists so orchestration code can be tested against
//! failure, which a real gateway will produce routinely.

use crate::catalog::MOCK_DELAY;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;
use tracing::info;

/// Errors from the payment boundary.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PaymentError {
    /// The charge was refused.
    #[error("Payment declined: {0}")]
    Declined(String),

    /// The gateway could not be reached. Transient — retry.
    #[error("Payment service unavailable: {0}")]
    Unavailable(String),
}

impl PaymentError {
    /// Whether the caller may retry the same charge as-is.
    pub fn is_transient(&self) -> bool {
        matches!(self, PaymentError::Unavailable(_))
    }
}

/// Proof of a successful charge.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentReceipt {
    pub reference: String,
    pub amount: u64,
}

/// Boundary contract for the payment provider.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Charge the given amount (smallest currency unit).
    async fn charge(&self, amount: u64) -> Result<PaymentReceipt, PaymentError>;
}

enum GatewayMode {
    Approve,
    Decline,
}

/// Mock gateway with a fixed outcome and simulated processing delay.
pub struct MockGateway {
    delay: Duration,
    mode: GatewayMode,
    reference_counter: AtomicU64,
}

impl MockGateway {
    /// A gateway that approves every charge.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            mode: GatewayMode::Approve,
            reference_counter: AtomicU64::new(1),
        }
    }

    /// A gateway that declines every charge.
    pub fn declining(delay: Duration) -> Self {
        Self {
            delay,
            mode: GatewayMode::Decline,
            reference_counter: AtomicU64::new(1),
        }
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new(MOCK_DELAY)
    }
}

#[async_trait]
impl PaymentGateway for MockGateway {
    async fn charge(&self, amount: u64) -> Result<PaymentReceipt, PaymentError> {
        sleep(self.delay).await;
        match self.mode {
            GatewayMode::Approve => {
                let n = self.reference_counter.fetch_add(1, Ordering::SeqCst);
                let reference = format!("pay_{}", n);
                info!(%reference, amount, "Charge approved");
                Ok(PaymentReceipt { reference, amount })
            }
            GatewayMode::Decline => Err(PaymentError::Declined("card declined".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_approving_gateway_issues_unique_references() {
        let gateway = MockGateway::new(Duration::ZERO);
        let first = gateway.charge(100).await.unwrap();
        let second = gateway.charge(250).await.unwrap();
        assert_eq!(first.amount, 100);
        assert_ne!(first.reference, second.reference);
    }

    #[tokio::test]
    async fn test_declining_gateway_fails_every_charge() {
        let gateway = MockGateway::declining(Duration::ZERO);
        let err = gateway.charge(100).await.unwrap_err();
        assert!(!err.is_transient());
        assert!(matches!(err, PaymentError::Declined(_)));
    }
}
