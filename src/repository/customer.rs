use crate::{
    abstract_trait::CustomerRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateCustomerRequest, FindAllCustomers, UpdateCustomerRequest},
    errors::RepositoryError,
    model::Customer,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct CustomerRepository {
    db: ConnectionPool,
}

impl CustomerRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerRepositoryTrait for CustomerRepository {
    async fn find_all(
        &self,
        req: &FindAllCustomers,
    ) -> Result<(Vec<Customer>, i64), RepositoryError> {
        let limit = req.page_size as i64;
        let offset = ((req.page - 1).max(0) as i64) * limit;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.db)
            .await
            .map_err(RepositoryError::from)?;

        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, email, phone, address, notes, created_at, updated_at
            FROM customers
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch customers: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok((customers, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, RepositoryError> {
        let result = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, email, phone, address, notes, created_at, updated_at
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, RepositoryError> {
        let result = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, email, phone, address, notes, created_at, updated_at
            FROM customers
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn create(&self, req: &CreateCustomerRequest) -> Result<Customer, RepositoryError> {
        let result = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (name, email, phone, address, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, phone, address, notes, created_at, updated_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(&req.address)
        .bind(&req.notes)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to create customer {}: {:?}", req.email, e);
            RepositoryError::from(e)
        })?;

        info!("✅ Created customer ID {}", result.id);
        Ok(result)
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateCustomerRequest,
    ) -> Result<Customer, RepositoryError> {
        let result = sqlx::query_as::<_, Customer>(
            r#"
            UPDATE customers
            SET name       = COALESCE($2, name),
                email      = COALESCE($3, email),
                phone      = COALESCE($4, phone),
                address    = COALESCE($5, address),
                notes      = COALESCE($6, notes),
                updated_at = current_timestamp
            WHERE id = $1
            RETURNING id, name, email, phone, address, notes, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(&req.address)
        .bind(&req.notes)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to update customer {}: {:?}", id, e);
            RepositoryError::from(e)
        })?
        .ok_or_else(|| RepositoryError::NotFound("Customer not found".into()))?;

        info!("🔄 Updated customer ID {}", result.id);
        Ok(result)
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete customer {}: {:?}", id, e);
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound("Customer not found".into()));
        }

        info!("🗑️ Deleted customer ID {}", id);
        Ok(())
    }
}
