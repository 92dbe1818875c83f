use catalog_app::context::AppContext;
use clap::Args;
use uuid::Uuid;

use crate::cli::print_product;

#[derive(Debug, Args)]
pub(crate) struct ShowProductArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Product to print
    #[arg(long)]
    product_uuid: Uuid,
}

pub(crate) async fn run(args: ShowProductArgs) -> Result<(), String> {
    let app = AppContext::from_database_url(&args.database_url, 1)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let product = app
        .products
        .get_product(args.product_uuid.into())
        .await
        .map_err(|error| format!("failed to load product: {error}"))?;

    print_product(&product);

    Ok(())
}
