//! PostgreSQL store adapter
//!
//! Implements the record store port over SQLx with runtime-bound queries,
//! so the crate builds without a live database. Constraint violations are
//! classified from PostgreSQL error codes; the schema backs up the
//! engine's invariants with FK `ON DELETE RESTRICT` and a date-range
//! check, so races the engine cannot see still fail safely.

use async_trait::async_trait;
use sqlx::PgPool;

use core_kernel::{ClaimId, CoreError, PolicyId, PolicyholderId, StoreError};
use domain_records::{validate_status, Claim, Policy, Policyholder, RecordStore};

// PostgreSQL error codes
// https://www.postgresql.org/docs/current/errcodes-appendix.html
const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS policyholders (
        id      VARCHAR(50)  PRIMARY KEY,
        name    VARCHAR(100) NOT NULL,
        contact VARCHAR(255) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS policies (
        id              VARCHAR(50)   PRIMARY KEY,
        policy_type     VARCHAR(100)  NOT NULL,
        coverage_amount NUMERIC(12,2) NOT NULL CHECK (coverage_amount >= 0),
        start_date      DATE          NOT NULL,
        end_date        DATE          NOT NULL,
        policyholder_id VARCHAR(50)   NOT NULL
            REFERENCES policyholders(id) ON DELETE RESTRICT,
        CHECK (start_date < end_date)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS claims (
        id          VARCHAR(50)   PRIMARY KEY,
        description VARCHAR(1000) NOT NULL,
        amount      NUMERIC(12,2) NOT NULL CHECK (amount >= 0),
        date        DATE          NOT NULL,
        status      VARCHAR(20)   NOT NULL DEFAULT 'Pending',
        policy_id   VARCHAR(50)   NOT NULL
            REFERENCES policies(id) ON DELETE RESTRICT
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_policies_policyholder ON policies(policyholder_id)",
    "CREATE INDEX IF NOT EXISTS idx_claims_policy ON claims(policy_id)",
];

/// PostgreSQL record store
#[derive(Debug, Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    /// Creates a new store over the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the schema if it does not exist yet
    pub async fn migrate(&self) -> Result<(), StoreError> {
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(backend)?;
        }
        tracing::info!("database schema ready");
        Ok(())
    }
}

fn pg_code(err: &sqlx::Error) -> Option<String> {
    if let sqlx::Error::Database(db_err) = err {
        db_err.code().map(|code| code.into_owned())
    } else {
        None
    }
}

fn backend(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            StoreError::Unavailable(err.to_string())
        }
        other => StoreError::Backend(other.to_string()),
    }
}

fn corrupt(err: CoreError) -> StoreError {
    StoreError::Backend(format!("corrupt row: {err}"))
}

#[derive(sqlx::FromRow)]
struct PolicyholderRow {
    id: String,
    name: String,
    contact: String,
}

impl PolicyholderRow {
    fn into_record(self) -> Result<Policyholder, StoreError> {
        Ok(Policyholder {
            id: PolicyholderId::new(self.id).map_err(corrupt)?,
            name: self.name,
            contact: self.contact,
        })
    }
}

#[derive(sqlx::FromRow)]
struct PolicyRow {
    id: String,
    policy_type: String,
    coverage_amount: rust_decimal::Decimal,
    start_date: chrono::NaiveDate,
    end_date: chrono::NaiveDate,
    policyholder_id: String,
}

impl PolicyRow {
    fn into_record(self) -> Result<Policy, StoreError> {
        Ok(Policy {
            id: PolicyId::new(self.id).map_err(corrupt)?,
            policy_type: self.policy_type,
            coverage_amount: self.coverage_amount,
            start_date: self.start_date,
            end_date: self.end_date,
            policyholder_id: PolicyholderId::new(self.policyholder_id).map_err(corrupt)?,
        })
    }
}

#[derive(sqlx::FromRow)]
struct ClaimRow {
    id: String,
    description: String,
    amount: rust_decimal::Decimal,
    date: chrono::NaiveDate,
    status: String,
    policy_id: String,
}

impl ClaimRow {
    fn into_record(self) -> Result<Claim, StoreError> {
        Ok(Claim {
            id: ClaimId::new(self.id).map_err(corrupt)?,
            description: self.description,
            amount: self.amount,
            date: self.date,
            status: validate_status(&self.status).map_err(corrupt)?,
            policy_id: PolicyId::new(self.policy_id).map_err(corrupt)?,
        })
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn insert_policyholder(&self, record: &Policyholder) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO policyholders (id, name, contact) VALUES ($1, $2, $3)")
            .bind(record.id.as_str())
            .bind(&record.name)
            .bind(&record.contact)
            .execute(&self.pool)
            .await
            .map_err(|err| match pg_code(&err).as_deref() {
                Some(UNIQUE_VIOLATION) => StoreError::duplicate("Policyholder", &record.id),
                _ => backend(err),
            })?;
        Ok(())
    }

    async fn get_policyholder(
        &self,
        id: &PolicyholderId,
    ) -> Result<Option<Policyholder>, StoreError> {
        sqlx::query_as::<_, PolicyholderRow>(
            "SELECT id, name, contact FROM policyholders WHERE id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)?
        .map(PolicyholderRow::into_record)
        .transpose()
    }

    async fn list_policyholders(&self) -> Result<Vec<Policyholder>, StoreError> {
        sqlx::query_as::<_, PolicyholderRow>(
            "SELECT id, name, contact FROM policyholders ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?
        .into_iter()
        .map(PolicyholderRow::into_record)
        .collect()
    }

    async fn update_policyholder(&self, record: &Policyholder) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE policyholders SET name = $2, contact = $3 WHERE id = $1")
            .bind(record.id.as_str())
            .bind(&record.name)
            .bind(&record.contact)
            .execute(&self.pool)
            .await
            .map_err(backend)?;
        if result.rows_affected() == 0 {
            return Err(StoreError::missing("Policyholder", &record.id));
        }
        Ok(())
    }

    async fn delete_policyholder(&self, id: &PolicyholderId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM policyholders WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|err| match pg_code(&err).as_deref() {
                Some(FOREIGN_KEY_VIOLATION) => {
                    StoreError::Referenced("Policyholder has existing policies".to_string())
                }
                _ => backend(err),
            })?;
        if result.rows_affected() == 0 {
            return Err(StoreError::missing("Policyholder", id));
        }
        Ok(())
    }

    async fn count_policies_for_holder(&self, id: &PolicyholderId) -> Result<u64, StoreError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM policies WHERE policyholder_id = $1")
                .bind(id.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(backend)?;
        Ok(count as u64)
    }

    async fn insert_policy(&self, record: &Policy) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO policies (id, policy_type, coverage_amount, start_date, end_date, policyholder_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(record.id.as_str())
        .bind(&record.policy_type)
        .bind(record.coverage_amount)
        .bind(record.start_date)
        .bind(record.end_date)
        .bind(record.policyholder_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|err| match pg_code(&err).as_deref() {
            Some(UNIQUE_VIOLATION) => StoreError::duplicate("Policy", &record.id),
            Some(FOREIGN_KEY_VIOLATION) => {
                StoreError::missing("Policyholder", &record.policyholder_id)
            }
            _ => backend(err),
        })?;
        Ok(())
    }

    async fn get_policy(&self, id: &PolicyId) -> Result<Option<Policy>, StoreError> {
        sqlx::query_as::<_, PolicyRow>(
            r#"
            SELECT id, policy_type, coverage_amount, start_date, end_date, policyholder_id
            FROM policies WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)?
        .map(PolicyRow::into_record)
        .transpose()
    }

    async fn list_policies(&self) -> Result<Vec<Policy>, StoreError> {
        sqlx::query_as::<_, PolicyRow>(
            r#"
            SELECT id, policy_type, coverage_amount, start_date, end_date, policyholder_id
            FROM policies ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?
        .into_iter()
        .map(PolicyRow::into_record)
        .collect()
    }

    async fn update_policy(&self, record: &Policy) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE policies
            SET policy_type = $2, coverage_amount = $3, start_date = $4, end_date = $5
            WHERE id = $1
            "#,
        )
        .bind(record.id.as_str())
        .bind(&record.policy_type)
        .bind(record.coverage_amount)
        .bind(record.start_date)
        .bind(record.end_date)
        .execute(&self.pool)
        .await
        .map_err(backend)?;
        if result.rows_affected() == 0 {
            return Err(StoreError::missing("Policy", &record.id));
        }
        Ok(())
    }

    async fn delete_policy(&self, id: &PolicyId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM policies WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|err| match pg_code(&err).as_deref() {
                Some(FOREIGN_KEY_VIOLATION) => {
                    StoreError::Referenced("Policy has existing claims".to_string())
                }
                _ => backend(err),
            })?;
        if result.rows_affected() == 0 {
            return Err(StoreError::missing("Policy", id));
        }
        Ok(())
    }

    async fn count_claims_for_policy(&self, id: &PolicyId) -> Result<u64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM claims WHERE policy_id = $1")
            .bind(id.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(backend)?;
        Ok(count as u64)
    }

    async fn insert_claim(&self, record: &Claim) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO claims (id, description, amount, date, status, policy_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(record.id.as_str())
        .bind(&record.description)
        .bind(record.amount)
        .bind(record.date)
        .bind(record.status.as_str())
        .bind(record.policy_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|err| match pg_code(&err).as_deref() {
            Some(UNIQUE_VIOLATION) => StoreError::duplicate("Claim", &record.id),
            Some(FOREIGN_KEY_VIOLATION) => StoreError::missing("Policy", &record.policy_id),
            _ => backend(err),
        })?;
        Ok(())
    }

    async fn get_claim(&self, id: &ClaimId) -> Result<Option<Claim>, StoreError> {
        sqlx::query_as::<_, ClaimRow>(
            "SELECT id, description, amount, date, status, policy_id FROM claims WHERE id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)?
        .map(ClaimRow::into_record)
        .transpose()
    }

    async fn list_claims(&self) -> Result<Vec<Claim>, StoreError> {
        sqlx::query_as::<_, ClaimRow>(
            "SELECT id, description, amount, date, status, policy_id FROM claims ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?
        .into_iter()
        .map(ClaimRow::into_record)
        .collect()
    }

    async fn update_claim(&self, record: &Claim) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE claims
            SET description = $2, amount = $3, date = $4, status = $5
            WHERE id = $1
            "#,
        )
        .bind(record.id.as_str())
        .bind(&record.description)
        .bind(record.amount)
        .bind(record.date)
        .bind(record.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(backend)?;
        if result.rows_affected() == 0 {
            return Err(StoreError::missing("Claim", &record.id));
        }
        Ok(())
    }

    async fn delete_claim(&self, id: &ClaimId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM claims WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(backend)?;
        if result.rows_affected() == 0 {
            return Err(StoreError::missing("Claim", id));
        }
        Ok(())
    }

    async fn find_claims_by_policy(&self, id: &PolicyId) -> Result<Vec<Claim>, StoreError> {
        sqlx::query_as::<_, ClaimRow>(
            r#"
            SELECT id, description, amount, date, status, policy_id
            FROM claims WHERE policy_id = $1 ORDER BY id
            "#,
        )
        .bind(id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?
        .into_iter()
        .map(ClaimRow::into_record)
        .collect()
    }
}
