use anyhow::Result;
use popcat_catalog::demography::{DemographyDebugger, Epoch};
use popcat_catalog::Catalog;

use crate::defaults::RULE_WIDTH;

pub fn validate_models(catalog: &Catalog) -> Result<()> {
    println!("🔍 Validating demographic models");

    let mut total_issues = 0;

    for entry in catalog.models() {
        println!("\nValidating model: {}", entry.id);
        println!("{}", "-".repeat(RULE_WIDTH));

        let model = entry.build();
        if let Err(e) = model.validate() {
            println!("✗ Structure: FAILED - {e}");
            total_issues += 1;
            continue;
        }
        println!("✓ Structure: OK");

        if entry.build() == model {
            println!("✓ Deterministic construction: OK");
        } else {
            println!("✗ Deterministic construction: FAILED");
            total_issues += 1;
        }

        match DemographyDebugger::new(&model) {
            Ok(debugger) => {
                if debugger.epochs().iter().any(has_degenerate_size) {
                    println!("⚠️  Epochs: some population size is zero or unbounded");
                    total_issues += 1;
                } else {
                    println!("✓ Epochs: {} OK", debugger.num_epochs());
                }
            }
            Err(e) => {
                println!("✗ Epochs: FAILED - {e}");
                total_issues += 1;
            }
        }
    }

    println!("\n{}", "=".repeat(RULE_WIDTH));
    if total_issues == 0 {
        println!("✓ Validation complete: No issues found");
    } else {
        println!("⚠️  Validation complete: {total_issues} issue(s) found");
        anyhow::bail!("{total_issues} model issue(s) found");
    }

    Ok(())
}

/// A population size that is zero or unbounded within an epoch. End sizes of
/// the final, infinite epoch are not checked.
fn has_degenerate_size(epoch: &Epoch) -> bool {
    let degenerate = |size: f64| !(size.is_finite() && size > 0.0);
    epoch.populations.iter().any(|p| {
        degenerate(p.start_size) || (epoch.end_time.is_finite() && degenerate(p.end_size))
    })
}
