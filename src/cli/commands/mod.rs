//! CLI command handlers for `mmadvisor`.
//!
//! Each command is implemented in its own submodule.

pub mod config;
pub mod lookup;
pub mod simulate;

use multimajor_advisor::config::Config;
use multimajor_advisor::core::{tables, Advisor, AdvisorError, RequirementRepository};
use multimajor_advisor::{error, info};

/// Load the requirement tables named in the config
pub fn load_repository(config: &Config) -> Result<RequirementRepository, String> {
    RequirementRepository::load(&config.primary_table_path(), &config.multi_table_path())
        .map_err(|e| table_error(&e))
}

/// Build an advisor from the config's tables and policy
pub fn load_advisor(config: &Config) -> Result<Advisor, String> {
    let repo = load_repository(config)?;
    let catalog = tables::load_catalog(&config.majors_catalog_path()).map_err(|e| table_error(&e))?;
    info!(
        "Advisor ready: {} primary rows, {} multi rows, {} catalog majors",
        repo.primary_rows().len(),
        repo.multi_rows().len(),
        catalog.len()
    );
    Ok(Advisor::new(repo, catalog, config.to_policy()))
}

fn table_error(e: &AdvisorError) -> String {
    error!("Failed to load requirement tables: {e}");
    format!("✗ Failed to load requirement tables: {e}")
}
