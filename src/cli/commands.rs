//! Command implementations

use anyhow::Result;
use tracing::{debug, info};

use crate::app::{AppContainer, DefaultAppContainer};
use crate::cli::Cli;
use crate::config_initialization::initialize_configuration_hierarchy;
use crate::domain::model::StopReport;

/// Execute the stop-recording step
pub async fn stop_recording(cli: &Cli) -> Result<StopReport> {
    let config = initialize_configuration_hierarchy(cli)?;
    debug!("Step settings: {:?}", config.settings);

    let container = DefaultAppContainer::new(&config.settings);
    let report = container
        .stop_recording_interactor()
        .execute(&config)
        .await?;

    info!("Exported: {}", report.artifact.display());
    Ok(report)
}
