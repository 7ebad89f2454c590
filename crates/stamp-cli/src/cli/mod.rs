//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stamp",
    bin_name = "stamp",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f4ee} Scaffolding defaults from your git identity",
    long_about = "Stamp works out author and vendor defaults for new packages \
                  from git configuration, commit history, the GitHub CLI \
                  session and the GitHub organization that owns the remote.",
    after_help = "EXAMPLES:\n\
        \x20 stamp identity\n\
        \x20 stamp identity --dir ../my-package --offline\n\
        \x20 stamp normalize \"ACME Co.\"\n\
        \x20 stamp completions bash > /usr/share/bash-completion/completions/stamp",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show inferred author and vendor defaults.
    #[command(
        visible_alias = "id",
        about = "Show inferred author and vendor defaults",
        after_help = "EXAMPLES:\n\
            \x20 stamp identity\n\
            \x20 stamp identity --dir ~/src/widgets\n\
            \x20 stamp identity --offline --output-format json"
    )]
    Identity(IdentityArgs),

    /// Print the slug, namespace and title forms of some text.
    #[command(
        visible_alias = "n",
        about = "Show slug, namespace and title forms",
        after_help = "EXAMPLES:\n\
            \x20 stamp normalize \"ACME Co.\"\n\
            \x20 stamp normalize my_cool-package --output-format json"
    )]
    Normalize(NormalizeArgs),

    /// Initialise a Stamp configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 stamp init           # default location\n\
            \x20 stamp init --force   # overwrite existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stamp completions bash > ~/.local/share/bash-completion/completions/stamp\n\
            \x20 stamp completions zsh  > ~/.zfunc/_stamp\n\
            \x20 stamp completions fish > ~/.config/fish/completions/stamp.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Stamp configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stamp config get provider.host\n\
            \x20 stamp config list\n\
            \x20 stamp config path"
    )]
    Config(ConfigCommands),
}

// ── identity ──────────────────────────────────────────────────────────────────

/// Arguments for `stamp identity`.
#[derive(Debug, Args)]
pub struct IdentityArgs {
    /// Repository to inspect (defaults to the current directory).
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "Repository directory to inspect"
    )]
    pub dir: Option<PathBuf>,

    /// Skip the organization lookup; vendor defaults to the author.
    #[arg(long = "offline", help = "Do not query the provider API")]
    pub offline: bool,
}

// ── normalize ─────────────────────────────────────────────────────────────────

/// Arguments for `stamp normalize`.
#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Text to normalize. Multiple words are joined with single spaces.
    #[arg(value_name = "TEXT", required = true, num_args = 1..)]
    pub text: Vec<String>,
}

impl NormalizeArgs {
    pub fn joined(&self) -> String {
        self.text.join(" ")
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `stamp init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stamp completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `stamp config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `provider.host`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
