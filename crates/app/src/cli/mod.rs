use catalog_app::domain::products::records::ProductRecord;
use clap::{Parser, Subcommand};

mod product;

#[derive(Debug, Parser)]
#[command(name = "catalog-app", about = "Catalog CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Product(product::ProductCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Product(command) => product::run(command).await,
        }
    }
}

pub(crate) fn print_product(product: &ProductRecord) {
    println!("product_uuid: {}", product.uuid);
    println!("name: {}", product.name);
    println!("manufacturer: {}", product.manufacturer);
    println!("barcode: {}", product.barcode);
    println!("price: {}", product.price);
    println!("created_at: {}", product.created_at);
    println!("updated_at: {}", product.updated_at);
}
