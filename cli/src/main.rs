//! CLI entrypoint for gitgen
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use gitgen_application::{
    ConversationLogger, DraftReplyInput, DraftReplyOutput, DraftReplyUseCase,
    FixedRepository, NoConversationLogger, PrintOnlySink, ReplySinkPort, RepositoryDetectorPort, RevisionLoop,
    RevisionOutcome, ThreadContentPort,
};
use gitgen_domain::{RepositoryId, Thread, ThreadKind};
use gitgen_infrastructure::{
    ConfigLoader, GhRepositoryDetector, GitHubContentFetcher, JsonlConversationLogger,
    OpenAiLlmGateway, ThreadToolExecutor,
};
use gitgen_presentation::{
    ClipboardSink, Cli, ConsoleFeedback, ConsoleFormatter, ConsoleProgress,
};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose; logs go to stderr so stdout stays the transcript
    let default_level = if cli.verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting gitgen");

    // Unsupported thread kinds are rejected before any config or network work
    let kind = ThreadKind::from(cli.kind);
    if let Err(e) = kind.ensure_supported() {
        println!("{}", e);
        return Ok(ExitCode::FAILURE);
    }

    // === Configuration ===
    let config = ConfigLoader::load(cli.config.as_deref())
        .context("Failed to load configuration")?;
    ConsoleFormatter::set_color(config.output.color);

    let issues = config.validate();
    for issue in &issues {
        eprintln!("{}", ConsoleFormatter::config_issue(issue));
    }
    if issues.iter().any(|issue| issue.is_error()) {
        bail!("Invalid configuration");
    }

    // === Thread ===
    let detector: Box<dyn RepositoryDetectorPort> = match cli.repo.as_deref() {
        Some(repo) => Box::new(FixedRepository(
            repo.parse::<RepositoryId>()
                .context("--repo must look like owner/repo")?,
        )),
        None => Box::new(GhRepositoryDetector::new()),
    };
    let repository = detector
        .detect()
        .await
        .context("Could not determine the repository")?;
    let thread = Thread::new(repository, kind, cli.number)?;

    println!("{}", ConsoleFormatter::banner(&thread));

    // === Dependency Injection ===
    let (model, _) = config.model.parse_model();
    let gateway = Arc::new(
        OpenAiLlmGateway::new(config.providers.openai.to_settings())
            .context("Failed to set up the language model backend")?,
    );
    let fetcher: Arc<dyn ThreadContentPort> =
        Arc::new(GitHubContentFetcher::new(config.github.to_settings()));
    let tools = Arc::new(ThreadToolExecutor::new(fetcher));

    let logger: Arc<dyn ConversationLogger> = match config
        .logging
        .conversation_log
        .as_deref()
        .and_then(JsonlConversationLogger::open)
    {
        Some(logger) => Arc::new(logger),
        None => Arc::new(NoConversationLogger),
    };
    let sink: Arc<dyn ReplySinkPort> = if config.output.clipboard {
        Arc::new(ClipboardSink)
    } else {
        Arc::new(PrintOnlySink)
    };

    // === Pipeline ===
    let progress = ConsoleProgress::new();
    let input =
        DraftReplyInput::new(thread, model).with_visibility(config.pipeline.to_visibility());
    let DraftReplyOutput {
        mut conversation,
        draft,
        ..
    } = DraftReplyUseCase::new(gateway, tools)
        .with_conversation_logger(logger.clone())
        .execute(input, &progress)
        .await
        .context("Drafting the reply failed")?;

    // === Revision ===
    let outcome = RevisionLoop::new(Arc::new(ConsoleFeedback::new()), sink)
        .with_conversation_logger(logger)
        .run(&mut conversation, draft, &progress)
        .await
        .context("Revising the reply failed")?;

    match outcome {
        RevisionOutcome::Accepted { draft, delivery } => info!(
            revisions = draft.revision_count(),
            delivery = delivery.as_str(),
            "Draft accepted"
        ),
        RevisionOutcome::Exited { draft } => {
            info!(revisions = draft.revision_count(), "Exited without accepting")
        }
    }

    Ok(ExitCode::SUCCESS)
}
