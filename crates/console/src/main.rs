//! Terminal entry point for the storefront console.

use anyhow::Context;

use storefront_console::shell::stdin_lines;
use storefront_console::{FormController, HttpStorefrontApi, ServiceEndpoints, Shell, TerminalNotifier};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    // Localhost defaults unless STOREFRONT_*_URL overrides them.
    let endpoints =
        ServiceEndpoints::from_env().context("invalid service endpoint configuration")?;

    tracing::info!(
        products = %endpoints.products_base(),
        inventory = %endpoints.inventory_base(),
        orders = %endpoints.orders_base(),
        "starting storefront console"
    );

    let api = HttpStorefrontApi::new(endpoints);
    let mut controller = FormController::new(api, TerminalNotifier);
    controller.mount().await;

    let mut shell = Shell::new(stdin_lines(), std::io::stdout());
    shell
        .run(&mut controller)
        .await
        .context("terminal I/O failed")?;

    tracing::info!("storefront console exiting");
    Ok(())
}
