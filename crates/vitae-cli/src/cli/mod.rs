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
    name    = "vitae",
    bin_name = "vitae",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Resume builder: themed HTML resumes, edited with AI",
    long_about = "vitae keeps a resume as a JSON document, renders it to a \
                  self-contained HTML page in one of four themes, and uses an \
                  OpenAI-compatible model to extract, rewrite and summarise it.",
    after_help = "EXAMPLES:\n\
        \x20 vitae extract cv.txt -o resume.json\n\
        \x20 vitae set-photo resume.json me.jpg\n\
        \x20 vitae review resume.json\n\
        \x20 vitae render resume.json resume.html --theme sidebar --sidebar-color green",
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
    /// Render a resume JSON file to HTML.
    #[command(
        about = "Render a resume to HTML",
        after_help = "EXAMPLES:\n\
            \x20 vitae render resume.json resume.html\n\
            \x20 vitae render resume.json resume.html --theme minimal\n\
            \x20 vitae render resume.json resume.html --theme sidebar --sidebar-color mono"
    )]
    Render(RenderArgs),

    /// Turn plain resume text into a resume JSON file with AI.
    #[command(
        about = "Extract resume JSON from plain text with AI",
        after_help = "EXAMPLES:\n\
            \x20 vitae extract cv.txt\n\
            \x20 vitae extract cv.txt -o resume.json --model gpt-4o-mini"
    )]
    Extract(ExtractArgs),

    /// Embed a photo into a resume file.
    #[command(
        about = "Embed a photo into a resume",
        after_help = "EXAMPLES:\n\
            \x20 vitae set-photo resume.json me.jpg"
    )]
    SetPhoto(SetPhotoArgs),

    /// Generate a professional summary with AI.
    #[command(
        about = "Generate a summary with AI",
        after_help = "EXAMPLES:\n\
            \x20 vitae summary resume.json\n\
            \x20 vitae summary resume.json --save"
    )]
    Summary(SummaryArgs),

    /// Review each field interactively.
    #[command(
        about = "Review fields one by one (accept, edit, regenerate, skip)",
        after_help = "EXAMPLES:\n\
            \x20 vitae review resume.json\n\
            \x20 printf 'a\\ne\\nshorter bullets\\ns\\ns\\na\\n' | vitae review resume.json"
    )]
    Review(ReviewArgs),

    /// List themes and sidebar colours.
    #[command(visible_alias = "ls", about = "List available themes")]
    Themes,

    /// Initialise a vitae configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 vitae init           # default location\n\
            \x20 vitae init --force   # overwrite existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 vitae completions bash > ~/.local/share/bash-completion/completions/vitae\n\
            \x20 vitae completions zsh  > ~/.zfunc/_vitae\n\
            \x20 vitae completions fish > ~/.config/fish/completions/vitae.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the vitae configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 vitae config get ai.model\n\
            \x20 vitae config list\n\
            \x20 vitae config path"
    )]
    Config(ConfigCommands),
}

// ── render ────────────────────────────────────────────────────────────────────

/// Arguments for `vitae render`.
#[derive(Debug, Args)]
pub struct RenderArgs {
    #[arg(value_name = "INPUT", help = "Resume JSON file")]
    pub input: PathBuf,

    #[arg(value_name = "OUTPUT", help = "HTML file to write")]
    pub output: PathBuf,

    /// Theme override; the record's own theme is used otherwise.
    #[arg(
        short = 't',
        long = "theme",
        value_name = "THEME",
        help = "Theme: premium, minimal, creative or sidebar"
    )]
    pub theme: Option<String>,

    #[arg(
        long = "sidebar-color",
        value_name = "COLOR",
        help = "Sidebar colour: green, teal or mono"
    )]
    pub sidebar_color: Option<String>,
}

// ── extract ───────────────────────────────────────────────────────────────────

/// Arguments for `vitae extract`.
#[derive(Debug, Args)]
pub struct ExtractArgs {
    #[arg(value_name = "TEXT_FILE", help = "Plain text of a resume")]
    pub input: PathBuf,

    /// Where to write the extracted JSON.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output JSON file (default: resume_extracted.json)"
    )]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub model: ModelArg,
}

// ── set-photo ─────────────────────────────────────────────────────────────────

/// Arguments for `vitae set-photo`.
#[derive(Debug, Args)]
pub struct SetPhotoArgs {
    #[arg(value_name = "RESUME", help = "Resume JSON file (updated in place)")]
    pub resume: PathBuf,

    #[arg(value_name = "IMAGE", help = "Image file to embed")]
    pub image: PathBuf,
}

// ── summary ───────────────────────────────────────────────────────────────────

/// Arguments for `vitae summary`.
#[derive(Debug, Args)]
pub struct SummaryArgs {
    #[arg(value_name = "RESUME", help = "Resume JSON file")]
    pub resume: PathBuf,

    /// Store the generated summary back into the file.
    #[arg(long = "save", help = "Save the summary into the resume")]
    pub save: bool,

    #[command(flatten)]
    pub model: ModelArg,
}

// ── review ────────────────────────────────────────────────────────────────────

/// Arguments for `vitae review`.
#[derive(Debug, Args)]
pub struct ReviewArgs {
    #[arg(value_name = "RESUME", help = "Resume JSON file (updated in place)")]
    pub resume: PathBuf,

    #[command(flatten)]
    pub model: ModelArg,
}

/// `--model`, shared by every AI command.
#[derive(Debug, Args)]
pub struct ModelArg {
    #[arg(
        short = 'm',
        long = "model",
        value_name = "MODEL",
        help = "Model name (default: OPENAI_MODEL, then config, then gpt-4)"
    )]
    pub model: Option<String>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `vitae init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `vitae completions`.
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

/// Subcommands for `vitae config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `ai.model`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
