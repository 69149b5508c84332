use product_store::cfg::Config;
use product_store::product::repo::ProductRepository;
use product_store::{db, logging};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = Config::load()?;
    logging::init_tracing(&cfg.log_level);

    let repo = ProductRepository::new(db::connect(&cfg).await?);

    // optional first argument narrows the listing to one store
    let products = match std::env::args().nth(1) {
        Some(store) => repo.get_all_products_by_store(&store).await,
        None => repo.get_all_products().await,
    };

    info!("{} products", products.len());
    for product in &products {
        info!(
            id = product.id,
            name = %product.name,
            price = product.price,
            discount = product.discount,
            store = %product.store,
            "product"
        );
    }
    Ok(())
}
