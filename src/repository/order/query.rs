use crate::{
    abstract_trait::OrderQueryRepositoryTrait,
    config::ConnectionPool,
    domain::requests::FindAllOrders,
    errors::RepositoryError,
    model::{Customer, Order, OrderAggregate, OrderItemDetail},
};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{error, info};

pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn fetch_items(&self, order_ids: &[i32]) -> Result<Vec<OrderItemDetail>, RepositoryError> {
        let items = sqlx::query_as::<_, OrderItemDetail>(
            r#"
            SELECT oi.order_id,
                   oi.product_id,
                   p.name AS product_name,
                   oi.quantity,
                   oi.unit_price,
                   oi.subtotal
            FROM order_items oi
            JOIN products p ON p.id = oi.product_id
            WHERE oi.order_id = ANY($1)
            ORDER BY oi.id
            "#,
        )
        .bind(order_ids)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch order items: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(items)
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_all(
        &self,
        req: &FindAllOrders,
    ) -> Result<(Vec<OrderAggregate>, i64), RepositoryError> {
        info!("🔍 Fetching orders page {}", req.page);

        let limit = req.page_size as i64;
        let offset = ((req.page - 1).max(0) as i64) * limit;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.db)
            .await
            .map_err(RepositoryError::from)?;

        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, customer_id, order_date, status, total_amount, created_at, updated_at
            FROM orders
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch orders: {:?}", e);
            RepositoryError::from(e)
        })?;

        if orders.is_empty() {
            return Ok((Vec::new(), total));
        }

        let order_ids: Vec<i32> = orders.iter().map(|o| o.id).collect();
        let customer_ids: Vec<i32> = orders.iter().map(|o| o.customer_id).collect();

        let mut items_by_order: HashMap<i32, Vec<OrderItemDetail>> = HashMap::new();
        for item in self.fetch_items(&order_ids).await? {
            items_by_order.entry(item.order_id).or_default().push(item);
        }

        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, email, phone, address, notes, created_at, updated_at
            FROM customers
            WHERE id = ANY($1)
            "#,
        )
        .bind(&customer_ids)
        .fetch_all(&self.db)
        .await
        .map_err(RepositoryError::from)?;
        let customers_by_id: HashMap<i32, Customer> =
            customers.into_iter().map(|c| (c.id, c)).collect();

        let mut aggregates = Vec::with_capacity(orders.len());
        for order in orders {
            let customer = customers_by_id.get(&order.customer_id).cloned().ok_or_else(|| {
                RepositoryError::Custom(format!(
                    "Order {} references missing customer {}",
                    order.id, order.customer_id
                ))
            })?;
            let items = items_by_order.remove(&order.id).unwrap_or_default();
            aggregates.push(OrderAggregate {
                order,
                customer,
                items,
            });
        }

        Ok((aggregates, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<OrderAggregate>, RepositoryError> {
        let Some(order) = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, customer_id, order_date, status, total_amount, created_at, updated_at
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?
        else {
            return Ok(None);
        };

        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, email, phone, address, notes, created_at, updated_at
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(order.customer_id)
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        let items = self.fetch_items(&[order.id]).await?;

        Ok(Some(OrderAggregate {
            order,
            customer,
            items,
        }))
    }

    async fn find_items(
        &self,
        order_id: i32,
    ) -> Result<Option<Vec<OrderItemDetail>>, RepositoryError> {
        let exists: Option<i32> = sqlx::query_scalar("SELECT id FROM orders WHERE id = $1")
            .bind(order_id)
            .fetch_optional(&self.db)
            .await
            .map_err(RepositoryError::from)?;

        if exists.is_none() {
            return Ok(None);
        }

        let items = self.fetch_items(&[order_id]).await?;
        Ok(Some(items))
    }
}
