//! CLI command definitions

use clap::{Parser, ValueEnum};
use gitgen_domain::ThreadKind;
use std::path::PathBuf;

/// Kind of thread to draft a reply for
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThreadKindArg {
    /// An issue thread
    Issue,
    /// A pull request thread (not implemented yet)
    Pr,
}

impl From<ThreadKindArg> for ThreadKind {
    fn from(arg: ThreadKindArg) -> Self {
        match arg {
            ThreadKindArg::Issue => ThreadKind::Issue,
            ThreadKindArg::Pr => ThreadKind::PullRequest,
        }
    }
}

/// CLI arguments for gitgen
#[derive(Parser, Debug)]
#[command(name = "gitgen")]
#[command(author, version, about = "Draft maintainer replies to GitHub issues with an LLM")]
#[command(long_about = r#"
gitgen reads a GitHub issue and its comments, reasons about it with a language
model and drafts a reply. You then refine the draft in a loop:

  y       accept the draft and copy it to the clipboard
  exit    leave without copying anything
  <text>  ask for a revision with this feedback

Configuration files are loaded from (in priority order):
1. GITGEN_* environment variables (GITGEN_MODEL__NAME=gpt-4.1)
2. --config <path>     Explicit config file
3. ./gitgen.toml       Project-level config
4. ~/.config/gitgen/config.toml   Global config

Example:
  gitgen issue 42
  gitgen --repo octo/hello --verbose issue 7
"#)]
pub struct Cli {
    /// Repository as owner/repo; detected with `gh` when omitted
    #[arg(short, long, value_name = "OWNER/REPO")]
    pub repo: Option<String>,

    /// Show informational logs on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Thread kind
    #[arg(value_enum)]
    pub kind: ThreadKindArg,

    /// Issue or pull request number
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    pub number: u64,
}
