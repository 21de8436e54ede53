use anyhow::{Context, Result};
use popcat_catalog::demography::DemographyDebugger;
use popcat_catalog::Catalog;
use std::io::{self, Write};

pub fn show_history(catalog: &Catalog, id: &str) -> Result<()> {
    let model = catalog.model(id).context("Failed to look up model")?;
    let debugger = DemographyDebugger::new(&model)
        .with_context(|| format!("Model '{id}' is not valid"))?;

    println!("\n⏳ Epoch history: {id} ({} epochs)\n", debugger.num_epochs());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    debugger
        .print_history(&mut out)
        .context("Failed to write epoch history")?;
    out.flush()?;

    Ok(())
}
