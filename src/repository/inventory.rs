use crate::{
    abstract_trait::InventoryRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateInventoryRequest, FindAllInventory, UpdateInventoryRequest},
    errors::RepositoryError,
    model::Inventory,
};
use async_trait::async_trait;
use sqlx::PgConnection;
use tracing::{error, info};

pub struct InventoryRepository {
    db: ConnectionPool,
}

impl InventoryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InventoryRepositoryTrait for InventoryRepository {
    async fn find_all(
        &self,
        req: &FindAllInventory,
    ) -> Result<(Vec<Inventory>, i64), RepositoryError> {
        let limit = req.page_size as i64;
        let offset = ((req.page - 1).max(0) as i64) * limit;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM inventory")
            .fetch_one(&self.db)
            .await
            .map_err(RepositoryError::from)?;

        let rows = sqlx::query_as::<_, Inventory>(
            r#"
            SELECT id, product_id, quantity, last_restock_date, created_at, updated_at
            FROM inventory
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch inventory: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok((rows, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Inventory>, RepositoryError> {
        let result = sqlx::query_as::<_, Inventory>(
            r#"
            SELECT id, product_id, quantity, last_restock_date, created_at, updated_at
            FROM inventory
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn find_by_product_id(
        &self,
        product_id: i32,
    ) -> Result<Option<Inventory>, RepositoryError> {
        let result = sqlx::query_as::<_, Inventory>(
            r#"
            SELECT id, product_id, quantity, last_restock_date, created_at, updated_at
            FROM inventory
            WHERE product_id = $1
            "#,
        )
        .bind(product_id)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn create(&self, req: &CreateInventoryRequest) -> Result<Inventory, RepositoryError> {
        let result = sqlx::query_as::<_, Inventory>(
            r#"
            INSERT INTO inventory (product_id, quantity)
            VALUES ($1, $2)
            RETURNING id, product_id, quantity, last_restock_date, created_at, updated_at
            "#,
        )
        .bind(req.product_id)
        .bind(req.quantity)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!(
                "❌ Failed to create inventory for product {}: {:?}",
                req.product_id, e
            );
            RepositoryError::from(e)
        })?;

        info!(
            "✅ Created inventory ID {} for product {}",
            result.id, result.product_id
        );
        Ok(result)
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateInventoryRequest,
    ) -> Result<Inventory, RepositoryError> {
        // Restocking is detected by increase: last_restock_date moves only
        // when the new quantity is strictly greater than the current one.
        let result = sqlx::query_as::<_, Inventory>(
            r#"
            UPDATE inventory
            SET last_restock_date = CASE
                    WHEN $2::INT IS NOT NULL AND $2 > quantity THEN current_timestamp
                    ELSE last_restock_date
                END,
                quantity   = COALESCE($2, quantity),
                updated_at = current_timestamp
            WHERE id = $1
            RETURNING id, product_id, quantity, last_restock_date, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(req.quantity)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to update inventory {}: {:?}", id, e);
            RepositoryError::from(e)
        })?
        .ok_or_else(|| RepositoryError::NotFound("Inventory not found".into()))?;

        info!("🔄 Updated inventory ID {}", result.id);
        Ok(result)
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM inventory WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete inventory {}: {:?}", id, e);
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound("Inventory not found".into()));
        }

        info!("🗑️ Deleted inventory ID {}", id);
        Ok(())
    }

    async fn check_availability(
        &self,
        conn: &mut PgConnection,
        product_id: i32,
        quantity: i32,
    ) -> Result<bool, RepositoryError> {
        let on_hand: Option<i32> =
            sqlx::query_scalar("SELECT quantity FROM inventory WHERE product_id = $1")
                .bind(product_id)
                .fetch_optional(&mut *conn)
                .await
                .map_err(RepositoryError::from)?;

        Ok(on_hand.is_some_and(|q| q >= quantity))
    }

    async fn reserve(
        &self,
        conn: &mut PgConnection,
        product_id: i32,
        quantity: i32,
    ) -> Result<(), RepositoryError> {
        // The quantity guard in the WHERE clause makes the decrement atomic
        // against concurrent reservations of the same product: the row lock
        // is held until the surrounding transaction commits.
        let result = sqlx::query(
            r#"
            UPDATE inventory
            SET quantity   = quantity - $2,
                updated_at = current_timestamp
            WHERE product_id = $1 AND quantity >= $2
            "#,
        )
        .bind(product_id)
        .bind(quantity)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to reserve stock for product {}: {:?}", product_id, e);
            RepositoryError::from(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::InsufficientInventory(product_id));
        }

        info!("📦 Reserved {} units of product {}", quantity, product_id);
        Ok(())
    }

    async fn restore(
        &self,
        conn: &mut PgConnection,
        product_id: i32,
        quantity: i32,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE inventory
            SET quantity   = quantity + $2,
                updated_at = current_timestamp
            WHERE product_id = $1
            "#,
        )
        .bind(product_id)
        .bind(quantity)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to restore stock for product {}: {:?}", product_id, e);
            RepositoryError::from(e)
        })?;

        // An order line can outlive its inventory row; restoring then is a no-op.
        if result.rows_affected() == 0 {
            info!("ℹ️ No inventory row for product {}, skipping restore", product_id);
        } else {
            info!("📦 Restored {} units of product {}", quantity, product_id);
        }

        Ok(())
    }
}
