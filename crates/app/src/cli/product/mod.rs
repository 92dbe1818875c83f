use clap::{Args, Subcommand};

mod create;
mod show;
mod update;

#[derive(Debug, Args)]
pub(crate) struct ProductCommand {
    #[command(subcommand)]
    command: ProductSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductSubcommand {
    /// Insert a product without running barcode validation
    Create(create::CreateProductArgs),
    /// Print a stored product
    Show(show::ShowProductArgs),
    /// Validate and apply changes to a stored product
    Update(update::UpdateProductArgs),
}

pub(crate) async fn run(command: ProductCommand) -> Result<(), String> {
    match command.command {
        ProductSubcommand::Create(args) => create::run(args).await,
        ProductSubcommand::Show(args) => show::run(args).await,
        ProductSubcommand::Update(args) => update::run(args).await,
    }
}
