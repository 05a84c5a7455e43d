//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for the bluecreds tool.

mod add;
mod list;

use std::sync::Arc;

use anyhow::{Context, Result};
use bluecreds_api::{CredentialsClient, NoopAugmenter, create_credentials_client};
use bluecreds_core::output::format_url;
use bluecreds_core::{ColorMode, print_warning};
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Args, Parser, Subcommand};
use tokio::runtime::Runtime;
use tracing::debug;

use crate::config::{ClientConfig, resolve_client_config};

/// Top-level CLI command for the bluecreds tool
#[derive(Parser)]
#[command(name = "bluecreds")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Manage Jenkins credentials through the Blue Ocean REST API")]
#[command(
  long_about = "bluecreds lists the credentials stored on a Jenkins server and creates new\n\
        username/password or SSH private key credentials in the global domain.\n\n\
        The server is taken from --url or the JENKINS_URL environment variable.\n\
        Authentication uses --user/--token, or the matching entry in ~/.netrc.\n\n\
        .netrc entries are matched on host and port together: a server at\n\
        https://ci.example.com:8443 needs `machine ci.example.com:8443`, while\n\
        `machine ci.example.com` only matches the default port."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightBlue.on_default().bold().underline())
    .usage(AnsiColor::Blue.on_default().bold())
    .literal(AnsiColor::BrightBlue.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    global = true,
    ignore_case = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  #[command(flatten)]
  pub connection: ConnectionArgs,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Where the Jenkins server lives and how to authenticate against it
#[derive(Args, Debug, Default)]
pub struct ConnectionArgs {
  /// Jenkins root URL (defaults to $JENKINS_URL)
  #[arg(long, global = true, value_name = "URL")]
  pub url: Option<String>,

  /// Jenkins user name to authenticate as
  #[arg(long, global = true, value_name = "USER", requires = "token")]
  pub user: Option<String>,

  /// API token for --user
  #[arg(long, global = true, value_name = "TOKEN", requires = "user")]
  pub token: Option<String>,

  /// Skip the class metadata lookup when listing credentials
  #[arg(long, global = true)]
  pub no_capabilities: bool,
}

/// Subcommands for the bluecreds tool
#[derive(Subcommand)]
pub enum Commands {
  /// List all credentials visible to the user
  #[command(long_about = "List every credential the server reports to the authenticated user.\n\n\
            By default a table of id, name, type and domain is printed. Use --json to\n\
            print the search result, including capability metadata, as JSON.")]
  #[command(alias = "ls")]
  List(list::ListArgs),

  /// Create a username/password credential
  #[command(long_about = "Create a username/password credential in the global domain.\n\n\
            The password is prompted for without echo, or read from the first line\n\
            of standard input with --password-stdin.")]
  AddPassword(add::AddPasswordArgs),

  /// Create an SSH private key credential
  #[command(long_about = "Create an SSH private key credential in the global domain.\n\n\
            The key material is read from --key-file or, with --key-stdin, from\n\
            standard input. The server receives it as a direct-entry key.")]
  AddSshKey(add::AddSshKeyArgs),
}

/// Handle the parsed command line
pub fn handle_cli(cli: Cli) -> Result<()> {
  cli.colors.apply();

  let config = resolve_client_config(&cli.connection)?;
  if config.auth.is_none() && !matches!(cli.command, Commands::List(_)) {
    print_warning(&format!(
      "No credentials found for {}; the request will be sent anonymously",
      format_url(&config.root_url)
    ));
  }

  let client = build_client(config);
  let rt = Runtime::new().context("Failed to create tokio runtime")?;

  match cli.command {
    Commands::List(args) => list::handle_list_command(&rt, &client, &args),
    Commands::AddPassword(args) => add::handle_add_password_command(&rt, &client, &args),
    Commands::AddSshKey(args) => add::handle_add_ssh_key_command(&rt, &client, &args),
  }
}

fn build_client(config: ClientConfig) -> CredentialsClient {
  debug!(
    root_url = %config.root_url,
    authenticated = config.auth.is_some(),
    capabilities = config.capabilities,
    "Creating credentials client"
  );

  let client = create_credentials_client(&config.root_url, config.auth);
  if config.capabilities {
    client
  } else {
    client.with_augmenter(Arc::new(NoopAugmenter))
  }
}
