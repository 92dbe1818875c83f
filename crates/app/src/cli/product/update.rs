use catalog_app::{context::AppContext, domain::products::data::ProductCandidate};
use clap::Args;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::cli::print_product;

#[derive(Debug, Args)]
pub(crate) struct UpdateProductArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Product to update
    #[arg(long)]
    product_uuid: Uuid,

    /// New display name
    #[arg(long)]
    name: Option<String>,

    /// New manufacturer name
    #[arg(long)]
    manufacturer: Option<String>,

    /// New EAN-13 barcode
    #[arg(long)]
    barcode: Option<String>,

    /// New unit price
    #[arg(long)]
    price: Option<Decimal>,
}

pub(crate) async fn run(args: UpdateProductArgs) -> Result<(), String> {
    let app = AppContext::from_database_url(&args.database_url, 1)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let current = app
        .products
        .get_product(args.product_uuid.into())
        .await
        .map_err(|error| format!("failed to load product: {error}"))?;

    // Unset flags keep the stored value, which is then revalidated.
    let mut candidate = ProductCandidate::from(current);

    if let Some(name) = args.name {
        candidate.name = Some(name);
    }

    if let Some(manufacturer) = args.manufacturer {
        candidate.manufacturer = Some(manufacturer);
    }

    if let Some(barcode) = args.barcode {
        candidate.barcode = Some(barcode);
    }

    if let Some(price) = args.price {
        candidate.price = Some(price);
    }

    let product = app
        .products
        .update_product(candidate)
        .await
        .map_err(|error| format!("failed to update product: {error}"))?;

    print_product(&product);

    Ok(())
}
