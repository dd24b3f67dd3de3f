use clap::Parser;
use composer::bootstrap;
use composer::bootstrap::ConfigSource;
use composer::selector::dataset_location;
use tracing::info;

use crate::console::ConsoleUi;
use crate::error::Result;

#[derive(Parser, Clone, Debug)]
pub struct Markers {
    /// Client config document, an URL or a local file
    #[arg(long)]
    pub config: ConfigSource,
    /// Dataset to show, the server default when omitted
    #[arg(long)]
    pub dataset: Option<String>,
}

/// Loads the events of a dataset the way the map page does and prints them.
pub async fn show(args: &Markers) -> Result<()> {
    if let Some(dataset) = &args.dataset {
        info!("page: {}", dataset_location(dataset));
    }

    let c = bootstrap::start(
        &args.config,
        async { ConsoleUi::default() },
        args.dataset.as_deref(),
    )
    .await?;
    for (at, popup) in &c.ui().markers {
        println!("{}\t{}\t{}", at.lat, at.lon, popup.title);
    }
    info!(
        "{} event(s) from {}",
        c.ui().markers.len(),
        c.api().config().api_base_url
    );

    Ok(())
}
