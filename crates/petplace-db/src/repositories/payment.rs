//! PostgreSQL implementation of PaymentRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use petplace_core::entities::{Payment, PaymentMethod};
use petplace_core::error::DomainError;
use petplace_core::traits::{NewPayment, PaymentRepository, RepoResult};

use crate::models::PaymentModel;

use super::error::{map_db_error, map_unique_violation, payment_not_found};

const PAYMENT_COLUMNS: &str = "id, reservation_id, merchant_uid, imp_uid, amount, method, \
                               status, paid_at, created_at, updated_at";

/// PostgreSQL implementation of PaymentRepository
#[derive(Clone)]
pub struct PgPaymentRepository {
    pool: PgPool,
}

impl PgPaymentRepository {
    /// Create a new PgPaymentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentRepository for PgPaymentRepository {
    #[instrument(skip(self))]
    async fn find_by_reservation(&self, reservation_id: i64) -> RepoResult<Option<Payment>> {
        let result = sqlx::query_as::<_, PaymentModel>(&format!(
            "SELECT {PAYMENT_COLUMNS} FROM payments WHERE reservation_id = $1"
        ))
        .bind(reservation_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Payment::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_merchant_uid(&self, merchant_uid: &str) -> RepoResult<Option<Payment>> {
        let result = sqlx::query_as::<_, PaymentModel>(&format!(
            "SELECT {PAYMENT_COLUMNS} FROM payments WHERE merchant_uid = $1"
        ))
        .bind(merchant_uid)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Payment::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_imp_uid(&self, imp_uid: &str) -> RepoResult<Option<Payment>> {
        let result = sqlx::query_as::<_, PaymentModel>(&format!(
            "SELECT {PAYMENT_COLUMNS} FROM payments WHERE imp_uid = $1"
        ))
        .bind(imp_uid)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Payment::try_from).transpose()
    }

    #[instrument(skip(self, new_payment))]
    async fn create(&self, new_payment: &NewPayment) -> RepoResult<Payment> {
        let model = sqlx::query_as::<_, PaymentModel>(&format!(
            r"
            INSERT INTO payments (reservation_id, merchant_uid, amount, method, status)
            VALUES ($1, $2, $3, 'ETC', 'PENDING')
            RETURNING {PAYMENT_COLUMNS}
            "
        ))
        .bind(new_payment.reservation_id)
        .bind(&new_payment.merchant_uid)
        .bind(new_payment.amount)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::DuplicatePayment(new_payment.merchant_uid.clone())
            })
        })?;

        Payment::try_from(model)
    }

    #[instrument(skip(self))]
    async fn mark_paid(
        &self,
        merchant_uid: &str,
        imp_uid: &str,
        method: PaymentMethod,
        paid_at: DateTime<Utc>,
    ) -> RepoResult<Payment> {
        let model = sqlx::query_as::<_, PaymentModel>(&format!(
            r"
            UPDATE payments
            SET imp_uid = $2, method = $3, status = 'PAID', paid_at = $4, updated_at = NOW()
            WHERE merchant_uid = $1
            RETURNING {PAYMENT_COLUMNS}
            "
        ))
        .bind(merchant_uid)
        .bind(imp_uid)
        .bind(method.as_str())
        .bind(paid_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match model {
            Some(model) => Payment::try_from(model),
            None => Err(payment_not_found(merchant_uid)),
        }
    }

    #[instrument(skip(self))]
    async fn mark_cancelled(&self, merchant_uid: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE payments
            SET status = 'CANCELLED', updated_at = NOW()
            WHERE merchant_uid = $1
            ",
        )
        .bind(merchant_uid)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(payment_not_found(merchant_uid));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn mark_failed(&self, merchant_uid: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE payments
            SET status = 'FAILED', updated_at = NOW()
            WHERE merchant_uid = $1
            ",
        )
        .bind(merchant_uid)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(payment_not_found(merchant_uid));
        }

        Ok(())
    }
}
