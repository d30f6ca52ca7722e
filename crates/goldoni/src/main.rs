use clap::Parser;
use goldoni::cli::DEFAULT_MODEL;
use goldoni::{
    AnthropicClient, Cli, CollaborationConfig, CollaborationSession, Commands, ConfigError,
    EventSink, SessionEvent, SketchConfig, SketchSession, Speaker, rewrite_as_monologue,
};
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::Collaborate {
            genre,
            theme,
            tone,
            language,
            rounds,
            model,
            output,
        } => {
            run_collaboration(genre, theme, tone, language, rounds, model, output).await?;
        }

        Commands::Sketch {
            theme,
            language,
            critique_rounds,
            model,
            output,
        } => {
            run_sketch(theme, language, critique_rounds, model, output).await?;
        }

        Commands::Monologue {
            script,
            language,
            model,
            output,
        } => {
            run_monologue(script, language, model, output).await?;
        }
    }

    Ok(())
}

async fn run_collaboration(
    genre: String,
    theme: String,
    tone: String,
    language: String,
    rounds: u32,
    model: Option<String>,
    output: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let driver = build_driver(model.as_deref())?;
    let config = {
        let mut builder = CollaborationConfig::builder();
        builder
            .genre(genre)
            .theme(theme)
            .tone(tone)
            .language(language)
            .rounds(rounds);
        if let Some(model) = model {
            builder.model(model);
        }
        builder.build()?
    };

    let mut session = CollaborationSession::new(driver, config)?;
    let (sink, rx) = EventSink::channel();
    let printer = tokio::spawn(print_events(rx));

    let result = session.run(&sink).await;
    drop(sink);
    printer.await?;

    let script = result?;
    save_script(&output, &script)?;
    info!(
        turns = session.transcript().len(),
        path = %output.display(),
        "Collaboration finished"
    );
    Ok(())
}

async fn run_sketch(
    theme: String,
    language: String,
    critique_rounds: u32,
    model: Option<String>,
    output: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let driver = build_driver(model.as_deref())?;
    let config = {
        let mut builder = SketchConfig::builder();
        builder
            .theme(theme)
            .language(language)
            .critique_rounds(critique_rounds);
        if let Some(model) = model {
            builder.model(model);
        }
        builder.build()?
    };

    let mut session = SketchSession::new(driver, config)?;
    let (sink, rx) = EventSink::channel();
    let printer = tokio::spawn(print_events(rx));

    let result = session.run(&sink).await;
    drop(sink);
    printer.await?;

    let script = result?;
    save_script(&output, &script)?;
    info!(
        turns = session.transcript().len(),
        path = %output.display(),
        "Sketch finished"
    );
    Ok(())
}

async fn run_monologue(
    script_path: PathBuf,
    language: String,
    model: Option<String>,
    output: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let driver = build_driver(model.as_deref())?;
    let script = std::fs::read_to_string(&script_path)?;

    let monologue = rewrite_as_monologue(&driver, &script, &language).await?;
    println!("{monologue}");

    save_script(&output, &monologue)?;
    info!(path = %output.display(), "Monologue finished");
    Ok(())
}

fn build_driver(model: Option<&str>) -> Result<AnthropicClient, ConfigError> {
    let api_key = std::env::var("ANTHROPIC_API_KEY")
        .map_err(|_| ConfigError::new("ANTHROPIC_API_KEY environment variable not set"))?;
    Ok(AnthropicClient::new(
        api_key,
        model.unwrap_or(DEFAULT_MODEL),
    ))
}

/// Print session events as they arrive: round banners, live text, warnings.
async fn print_events(mut rx: UnboundedReceiver<SessionEvent>) {
    let mut current_speaker: Option<Speaker> = None;
    while let Some(event) = rx.recv().await {
        match event {
            SessionEvent::RoundStarted { round, total } => {
                println!("\n=== Round {round} of {total} ===");
            }
            SessionEvent::Chunk { speaker, text } => {
                if current_speaker != Some(speaker) {
                    println!("\n[{speaker}]");
                    current_speaker = Some(speaker);
                }
                print!("{text}");
                let _ = std::io::stdout().flush();
            }
            SessionEvent::TurnCompleted(turn) => {
                println!();
                current_speaker = None;
                info!(speaker = %turn.speaker, round = turn.round, "Turn completed");
            }
            SessionEvent::Warning { message } => {
                eprintln!("warning: {message}");
            }
            SessionEvent::Completed { .. } => {
                println!("\n=== Script complete ===");
            }
        }
    }
}

fn save_script(path: &Path, script: &str) -> std::io::Result<()> {
    std::fs::write(path, script)?;
    println!("Saved to {}", path.display());
    Ok(())
}
