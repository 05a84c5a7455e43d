//! # List Command
//!
//! Prints the credentials visible to the authenticated user.

use anyhow::{Context, Result};
use bluecreds_api::{CredentialSummary, CredentialsClient};
use bluecreds_core::print_info;
use clap::Args;
use serde_json::Value;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tokio::runtime::Runtime;

/// Arguments for the list command
#[derive(Args)]
pub struct ListArgs {
  /// Print the search result as JSON instead of a table
  #[arg(long)]
  pub json: bool,
}

/// One row of the credentials table
#[derive(Tabled)]
struct CredentialRow {
  #[tabled(rename = "ID")]
  id: String,
  #[tabled(rename = "Name")]
  name: String,
  #[tabled(rename = "Type")]
  type_name: String,
  #[tabled(rename = "Domain")]
  domain: String,
}

impl From<CredentialSummary> for CredentialRow {
  fn from(summary: CredentialSummary) -> Self {
    let or_dash = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());

    Self {
      id: or_dash(summary.id),
      name: or_dash(summary.display_name),
      type_name: or_dash(summary.type_name),
      domain: or_dash(summary.domain),
    }
  }
}

/// Handle the list command
pub(crate) fn handle_list_command(rt: &Runtime, client: &CredentialsClient, args: &ListArgs) -> Result<()> {
  let credentials = rt
    .block_on(client.list_all_credentials())
    .context("Failed to list credentials")?;

  if args.json {
    println!("{}", serde_json::to_string_pretty(&credentials)?);
    return Ok(());
  }

  match render_table(&credentials) {
    Some(table) => println!("{table}"),
    None => print_info("No credentials found"),
  }

  Ok(())
}

/// Render the search result as a table, or `None` if it holds no credentials
fn render_table(credentials: &Value) -> Option<String> {
  let rows: Vec<CredentialRow> = CredentialSummary::list_from_value(credentials)
    .into_iter()
    .map(CredentialRow::from)
    .collect();

  if rows.is_empty() {
    return None;
  }

  Some(Table::new(rows).with(Style::sharp()).to_string())
}
