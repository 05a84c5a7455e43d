//! # Add Commands
//!
//! Create username/password and SSH private key credentials. Secret values
//! are read from a prompt, a file or standard input and are never printed.

use std::fs;
use std::io::{self, BufRead, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use bluecreds_api::CredentialsClient;
use bluecreds_core::output::format_credential_id;
use bluecreds_core::print_success;
use clap::Args;
use serde_json::Value;
use tokio::runtime::Runtime;

/// Arguments for the add-password command
#[derive(Args)]
pub struct AddPasswordArgs {
  /// User name stored in the credential
  #[arg(long, short = 'u')]
  pub username: String,

  /// Read the password from the first line of standard input
  #[arg(long)]
  pub password_stdin: bool,
}

/// Arguments for the add-ssh-key command
#[derive(Args)]
pub struct AddSshKeyArgs {
  /// File holding the private key
  #[arg(long, value_name = "PATH", conflicts_with = "key_stdin", required_unless_present = "key_stdin")]
  pub key_file: Option<PathBuf>,

  /// Read the private key from standard input
  #[arg(long)]
  pub key_stdin: bool,
}

/// Handle the add-password command
pub(crate) fn handle_add_password_command(
  rt: &Runtime,
  client: &CredentialsClient,
  args: &AddPasswordArgs,
) -> Result<()> {
  let password = if args.password_stdin {
    read_password_line(io::stdin().lock())?
  } else {
    dialoguer::Password::new()
      .with_prompt(format!("Password for {}", args.username))
      .interact()
      .context("Failed to read password")?
  };

  if password.is_empty() {
    return Err(anyhow::anyhow!("Password cannot be empty"));
  }

  let response = rt
    .block_on(client.save_username_password_credential(&args.username, &password))
    .context("Failed to create username/password credential")?;

  report_created(&response, &format!("username/password credential for {}", args.username));
  Ok(())
}

/// Handle the add-ssh-key command
pub(crate) fn handle_add_ssh_key_command(rt: &Runtime, client: &CredentialsClient, args: &AddSshKeyArgs) -> Result<()> {
  let private_key = match &args.key_file {
    Some(path) => fs::read_to_string(path)
      .with_context(|| format!("Failed to read private key from {}", path.display()))?,
    None => {
      let mut key = String::new();
      io::stdin()
        .read_to_string(&mut key)
        .context("Failed to read private key from standard input")?;
      key
    }
  };

  if private_key.trim().is_empty() {
    return Err(anyhow::anyhow!("Private key is empty"));
  }

  let response = rt
    .block_on(client.save_ssh_key_credential(&private_key))
    .context("Failed to create SSH private key credential")?;

  report_created(&response, "SSH private key credential");
  Ok(())
}

/// Read one line from `reader`, without its line ending
fn read_password_line(mut reader: impl BufRead) -> Result<String> {
  let mut line = String::new();
  reader
    .read_line(&mut line)
    .context("Failed to read password from standard input")?;

  Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn report_created(response: &Value, what: &str) {
  match response.get("id").and_then(Value::as_str) {
    Some(id) => print_success(&format!("Created {what} {}", format_credential_id(id))),
    None => print_success(&format!("Created {what}")),
  }
}
