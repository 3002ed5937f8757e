use anyhow::Result;
use chrono::{NaiveDate, Utc};
use common::format_amount;
use std::path::Path;
use tracing::info;

use crate::{net_worth_report, Snapshot};

pub fn net_worth(file: &Path, date: Option<NaiveDate>, currency: &str) -> Result<()> {
    let today = date.unwrap_or_else(|| Utc::now().date_naive());
    info!("Computing net worth from {} as of {}", file.display(), today);

    let json = std::fs::read_to_string(file)?;
    let snapshot = Snapshot::from_json(&json)?;

    let report = net_worth_report(&snapshot, today, currency)?;

    for item in &report.accounts {
        println!("account   {:<30} {}", item.name, format_amount(item.value, currency));
    }
    for item in &report.properties {
        println!("property  {:<30} {}", item.name, format_amount(item.value, currency));
    }
    for item in &report.mortgages {
        println!("mortgage  {:<30} -{}", item.name, format_amount(item.value, currency));
    }
    println!();
    println!("assets      {}", format_amount(report.assets, currency));
    println!("liabilities {}", format_amount(report.liabilities, currency));
    println!("net worth   {}", report.formatted_net());
    Ok(())
}
