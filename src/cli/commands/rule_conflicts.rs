use anyhow::Result;
use compute::booking::conflicts::duplicate_criteria;
use std::path::Path;
use tracing::info;

use crate::Snapshot;

pub fn rule_conflicts(file: &Path) -> Result<()> {
    info!("Scanning {} for duplicate rule criteria", file.display());

    let json = std::fs::read_to_string(file)?;
    let snapshot = Snapshot::from_json(&json)?;

    let conflicts = duplicate_criteria(&snapshot.rules);
    if conflicts.is_empty() {
        println!("No duplicate criteria found across {} rules", snapshot.rules.len());
        return Ok(());
    }

    for conflict in conflicts {
        println!("{} claimed by rules {:?}", conflict.key, conflict.rule_ids);
    }
    Ok(())
}
