use crate::{
    abstract_trait::ProductRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateProductRequest, FindAllProducts, UpdateProductRequest},
    errors::RepositoryError,
    model::Product,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct ProductRepository {
    db: ConnectionPool,
}

impl ProductRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

// Filters are applied in both the count and the page query; a blank name
// pattern binds as NULL so the predicate collapses.
const FILTER_CLAUSE: &str = r#"
    ($1::TEXT IS NULL OR name ILIKE '%' || $1 || '%')
    AND ($2::FLOAT8 IS NULL OR price >= $2)
    AND ($3::FLOAT8 IS NULL OR price <= $3)
"#;

#[async_trait]
impl ProductRepositoryTrait for ProductRepository {
    async fn find_all(&self, req: &FindAllProducts) -> Result<(Vec<Product>, i64), RepositoryError> {
        info!("🔍 Fetching products with filter: {:?}", req.name);

        let limit = req.page_size as i64;
        let offset = ((req.page - 1).max(0) as i64) * limit;

        let name_pattern = req.name.as_deref().filter(|s| !s.trim().is_empty());

        let count_sql = format!("SELECT COUNT(*) FROM products WHERE {FILTER_CLAUSE}");
        let total: i64 = sqlx::query_scalar(&count_sql)
            .bind(name_pattern)
            .bind(req.min_price)
            .bind(req.max_price)
            .fetch_one(&self.db)
            .await
            .map_err(RepositoryError::from)?;

        let page_sql = format!(
            r#"
            SELECT id, name, description, price, sku, created_at, updated_at
            FROM products
            WHERE {FILTER_CLAUSE}
            ORDER BY id
            LIMIT $4 OFFSET $5
            "#
        );
        let products = sqlx::query_as::<_, Product>(&page_sql)
            .bind(name_pattern)
            .bind(req.min_price)
            .bind(req.max_price)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch products: {:?}", e);
                RepositoryError::from(e)
            })?;

        Ok((products, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        let result = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, sku, created_at, updated_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn find_by_sku(&self, sku: &str) -> Result<Option<Product>, RepositoryError> {
        let result = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, sku, created_at, updated_at
            FROM products
            WHERE sku = $1
            "#,
        )
        .bind(sku)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn create(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError> {
        let result = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, description, price, sku)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, price, sku, created_at, updated_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.price)
        .bind(&req.sku)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to create product {}: {:?}", req.sku, e);
            RepositoryError::from(e)
        })?;

        info!("✅ Created product ID {} ({})", result.id, result.sku);
        Ok(result)
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<Product, RepositoryError> {
        let result = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name        = COALESCE($2, name),
                description = COALESCE($3, description),
                price       = COALESCE($4, price),
                sku         = COALESCE($5, sku),
                updated_at  = current_timestamp
            WHERE id = $1
            RETURNING id, name, description, price, sku, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.price)
        .bind(&req.sku)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to update product {}: {:?}", id, e);
            RepositoryError::from(e)
        })?
        .ok_or_else(|| RepositoryError::NotFound("Product not found".into()))?;

        info!("🔄 Updated product ID {}", result.id);
        Ok(result)
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete product {}: {:?}", id, e);
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound("Product not found".into()));
        }

        info!("🗑️ Deleted product ID {}", id);
        Ok(())
    }
}
