use crate::{
    abstract_trait::{DynInventoryRepository, OrderCommandRepositoryTrait},
    config::ConnectionPool,
    domain::requests::{CreateOrderRequest, OrderStatus},
    errors::RepositoryError,
    model::{Order, OrderItem, Product},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct OrderCommandRepository {
    db: ConnectionPool,
    inventory: DynInventoryRepository,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool, inventory: DynInventoryRepository) -> Self {
        Self { db, inventory }
    }
}

fn line_subtotal(unit_price: f64, quantity: i32) -> f64 {
    unit_price * quantity as f64
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(&self, req: &CreateOrderRequest) -> Result<i32, RepositoryError> {
        let status = req.status.unwrap_or(OrderStatus::Pending);

        // One transaction spans the order row, every line, and every
        // reservation. An early return drops the transaction and rolls
        // everything back, so a failed item leaves nothing behind.
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let order_id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO orders (customer_id, status, total_amount)
            VALUES ($1, $2, 0)
            RETURNING id
            "#,
        )
        .bind(req.customer_id)
        .bind(status.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            error!(
                "❌ Failed to create order for customer {}: {:?}",
                req.customer_id, e
            );
            RepositoryError::from(e)
        })?;

        let mut total_amount = 0.0;

        // Items are processed strictly in caller order so a later line sees
        // the reservations earlier lines already made.
        for item in &req.items {
            let product = sqlx::query_as::<_, Product>(
                r#"
                SELECT id, name, description, price, sku, created_at, updated_at
                FROM products
                WHERE id = $1
                "#,
            )
            .bind(item.product_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(RepositoryError::from)?
            .ok_or_else(|| {
                RepositoryError::NotFound(format!(
                    "Product with ID {} not found",
                    item.product_id
                ))
            })?;

            if !self
                .inventory
                .check_availability(&mut tx, item.product_id, item.quantity)
                .await?
            {
                return Err(RepositoryError::InsufficientInventory(item.product_id));
            }
            self.inventory
                .reserve(&mut tx, item.product_id, item.quantity)
                .await?;

            // unit_price is a snapshot: later price changes must not touch
            // already-placed orders.
            let subtotal = line_subtotal(product.price, item.quantity);

            sqlx::query(
                r#"
                INSERT INTO order_items (order_id, product_id, quantity, unit_price, subtotal)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(order_id)
            .bind(item.product_id)
            .bind(item.quantity)
            .bind(product.price)
            .bind(subtotal)
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

            total_amount += subtotal;
        }

        sqlx::query(
            r#"
            UPDATE orders
            SET total_amount = $2,
                updated_at   = current_timestamp
            WHERE id = $1
            "#,
        )
        .bind(order_id)
        .bind(total_amount)
        .execute(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Created order ID {} for customer {} (total {})",
            order_id, req.customer_id, total_amount
        );
        Ok(order_id)
    }

    async fn update_status(&self, id: i32, status: &str) -> Result<Order, RepositoryError> {
        let result = sqlx::query_as::<_, Order>(
            r#"
            UPDATE orders
            SET status     = $2,
                updated_at = current_timestamp
            WHERE id = $1
            RETURNING id, customer_id, order_date, status, total_amount, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to update order {}: {:?}", id, e);
            RepositoryError::from(e)
        })?
        .ok_or_else(|| RepositoryError::NotFound("Order not found".into()))?;

        info!("🔄 Updated order ID {} to status {}", id, status);
        Ok(result)
    }

    async fn delete_order(&self, id: i32) -> Result<(), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        // Lock the order row for the duration of the restore + delete.
        let exists: Option<i32> = sqlx::query_scalar("SELECT id FROM orders WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

        if exists.is_none() {
            return Err(RepositoryError::NotFound("Order not found".into()));
        }

        let items = sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT id, order_id, product_id, quantity, unit_price, subtotal, created_at, updated_at
            FROM order_items
            WHERE order_id = $1
            ORDER BY id
            "#,
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        for item in &items {
            if item.quantity > 0 {
                self.inventory
                    .restore(&mut tx, item.product_id, item.quantity)
                    .await?;
            }
        }

        // Cascade removes the order_items rows.
        sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete order {}: {:?}", id, e);
                RepositoryError::from(e)
            })?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("🗑️ Deleted order ID {} and restored {} lines", id, items.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtotal_is_price_times_quantity() {
        assert_eq!(line_subtotal(19.99, 2), 39.98);
    }

    #[test]
    fn totals_accumulate_across_lines() {
        let lines = [(19.99, 2), (5.25, 4)];
        let total: f64 = lines.iter().map(|&(p, q)| line_subtotal(p, q)).sum();
        assert!((total - 60.98).abs() < 1e-9);
    }

    #[test]
    fn single_unit_subtotal_is_unit_price() {
        assert_eq!(line_subtotal(7.5, 1), 7.5);
    }
}
