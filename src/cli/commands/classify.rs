use anyhow::Result;
use chrono::Utc;
use std::path::Path;
use tracing::{debug, info};

use crate::{classify_snapshot, Snapshot};

pub fn classify(file: &Path) -> Result<()> {
    info!("Classifying transaction lines from {}", file.display());

    let json = std::fs::read_to_string(file)?;
    let snapshot = Snapshot::from_json(&json)?;
    debug!(
        "Loaded snapshot with {} lines and {} rules",
        snapshot.lines.len(),
        snapshot.rules.len()
    );

    let drafts = classify_snapshot(&snapshot, Utc::now().naive_utc());

    let matched = drafts.iter().filter(|d| d.rule_id.is_some()).count();
    info!("Matched {} of {} lines", matched, drafts.len());

    println!("{}", serde_json::to_string_pretty(&drafts)?);
    Ok(())
}
