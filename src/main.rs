use serde_json::json;
use storefront_mock::client::Options;
use storefront_mock::config::AppConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,storefront_mock=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::from_env()?;
    let store = config.build_store();

    let products = store
        .list_products(Options::default())
        .await
        .into_data()
        .map(|page| page.items)
        .unwrap_or_default();
    let collections = store
        .list_collections(Options::default())
        .await
        .into_data()
        .map(|page| page.items)
        .unwrap_or_default();

    let products: Vec<_> = products
        .into_iter()
        .map(|product| {
            let display_price = config.currency.format(product.price);
            let mut value = serde_json::to_value(&product)?;
            value["displayPrice"] = json!(display_price);
            Ok::<_, serde_json::Error>(value)
        })
        .collect::<Result<_, _>>()?;

    tracing::info!(
        products = products.len(),
        collections = collections.len(),
        currency = config.currency.code,
        "dumping catalogue"
    );

    let catalogue = json!({
        "currency": config.currency.code,
        "products": products,
        "collections": collections,
    });
    println!("{}", serde_json::to_string_pretty(&catalogue)?);

    Ok(())
}
