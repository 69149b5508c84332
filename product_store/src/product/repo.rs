use sqlx::Postgres;
use tracing::{error, info};

use super::model::Product;
use crate::{
    constant::{
        INSERT_PRODUCT, LOGGING_ADD_FAILED, LOGGING_GET_ALL_FAILED, LOGGING_GET_BY_STORE_FAILED,
        LOGGING_PRODUCT_ADDED, SELECT_ALL_PRODUCTS, SELECT_PRODUCT_BY_ID,
        SELECT_PRODUCTS_BY_STORE,
    },
    error::ProductError,
};

#[derive(Clone)]
pub struct ProductRepository {
    pub pool: sqlx::Pool<Postgres>,
}

impl ProductRepository {
    pub fn new(pool: sqlx::Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Every product, in whatever order the database returns them.
    /// Query failures are logged and yield an empty list.
    pub async fn get_all_products(&self) -> Vec<Product> {
        match sqlx::query_as::<_, Product>(SELECT_ALL_PRODUCTS)
            .fetch_all(&self.pool)
            .await
        {
            Ok(products) => products,
            Err(e) => {
                error!(error = %e, "{}", LOGGING_GET_ALL_FAILED);
                Vec::new()
            }
        }
    }

    /// Products whose store matches `store_name` exactly.
    /// Query failures are logged and yield an empty list.
    pub async fn get_all_products_by_store(&self, store_name: &str) -> Vec<Product> {
        match sqlx::query_as::<_, Product>(SELECT_PRODUCTS_BY_STORE)
            .bind(store_name)
            .fetch_all(&self.pool)
            .await
        {
            Ok(products) => products,
            Err(e) => {
                error!(error = %e, store = store_name, "{}", LOGGING_GET_BY_STORE_FAILED);
                Vec::new()
            }
        }
    }

    /// Inserts `product`; its `id` is ignored and the generated one is not returned.
    pub async fn add_product(&self, product: &Product) -> Result<(), sqlx::Error> {
        let result = sqlx::query(INSERT_PRODUCT)
            .bind(&product.name)
            .bind(product.price)
            .bind(product.discount)
            .bind(&product.store)
            .execute(&self.pool)
            .await
            .inspect_err(|e| error!(error = %e, "{}", LOGGING_ADD_FAILED))?;
        info!(rows = result.rows_affected(), "{}", LOGGING_PRODUCT_ADDED);
        Ok(())
    }

    pub async fn get_by_id(&self, product_id: i64) -> Result<Product, ProductError> {
        sqlx::query_as::<_, Product>(SELECT_PRODUCT_BY_ID)
            .bind(product_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ProductError::from_lookup(product_id, e))
    }
}

#[cfg(test)]
mod tests {
    use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

    use super::*;

    async fn closed_repo() -> ProductRepository {
        let pool = PgPoolOptions::new().connect_lazy_with(PgConnectOptions::new());
        pool.close().await;
        ProductRepository::new(pool)
    }

    #[tokio::test]
    async fn listing_swallows_backend_failure() {
        let repo = closed_repo().await;

        assert!(repo.get_all_products().await.is_empty());
        assert!(repo.get_all_products_by_store("ABC TECH").await.is_empty());
    }

    #[tokio::test]
    async fn add_propagates_backend_failure() {
        let repo = closed_repo().await;
        let product = Product::new("AirFryer", 3000.0, 22.0, "ABC TECH");

        let err = repo.add_product(&product).await.unwrap_err();
        assert!(matches!(err, sqlx::Error::PoolClosed));
    }

    #[tokio::test]
    async fn get_by_id_reports_generic_failure() {
        let repo = closed_repo().await;

        let err = repo.get_by_id(5).await.unwrap_err();
        assert!(matches!(err, ProductError::QueryFailed { id: 5, .. }));
        assert_eq!(err.to_string(), "Something wrong, check id: 5");
    }
}
