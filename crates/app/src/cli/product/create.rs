use catalog_app::{
    context::AppContext,
    domain::products::{data::NewProduct, records::ProductUuid},
};
use clap::Args;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::cli::print_product;

#[derive(Debug, Args)]
pub(crate) struct CreateProductArgs {
    /// Product display name
    #[arg(long)]
    name: String,

    /// Manufacturer name
    #[arg(long)]
    manufacturer: String,

    /// EAN-13 barcode, stored as given
    #[arg(long)]
    barcode: String,

    /// Unit price
    #[arg(long)]
    price: Decimal,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Optional product UUID; generated when omitted
    #[arg(long)]
    product_uuid: Option<Uuid>,
}

pub(crate) async fn run(args: CreateProductArgs) -> Result<(), String> {
    let app = AppContext::from_database_url(&args.database_url, 1)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let uuid = args
        .product_uuid
        .map_or_else(ProductUuid::new, ProductUuid::from_uuid);

    let product = app
        .store
        .create_product(NewProduct {
            uuid,
            name: args.name,
            manufacturer: args.manufacturer,
            barcode: args.barcode,
            price: args.price,
        })
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    print_product(&product);

    Ok(())
}
