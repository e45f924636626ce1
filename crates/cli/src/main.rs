mod config;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use editor::{register_all, Editor, ListenerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{EditorConfig, CONFIG_FILE};

#[derive(Parser)]
#[command(name = "editor-events")]
#[command(about = "Drive an editor and watch its event listeners", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init,
    /// Open, save and close a file, notifying configured listeners
    Run {
        file: PathBuf,

        #[arg(long)]
        no_save: bool,
    },
    /// Show configured subscriptions
    Listeners,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Commands::Init => init_config(&cli.config).await,
        Commands::Run { file, no_save } => run(&cli.config, file, !no_save).await,
        Commands::Listeners => listeners(&cli.config).await,
    }
}

async fn init_config(path: &Path) -> Result<()> {
    let config = EditorConfig::write_default(path).await?;

    println!("Created {}", path.display());
    for subscription in &config.subscriptions {
        println!("  {}", describe(&subscription.event, &subscription.listener));
    }

    Ok(())
}

async fn run(config_path: &Path, file: PathBuf, save: bool) -> Result<()> {
    let config = EditorConfig::load(config_path).await?;

    let mut editor = Editor::new();
    register_all(&mut editor.events, &config.subscriptions);
    tracing::info!("Editor ready: {:?}", editor.events);

    editor
        .open_file(&file)
        .with_context(|| format!("Failed to open {}", file.display()))?;

    if save {
        editor
            .save_file()
            .with_context(|| format!("Failed to save {}", file.display()))?;
    }

    if let Some(closed) = editor.close_file() {
        println!("Closed {}", closed.display());
    }

    Ok(())
}

async fn listeners(config_path: &Path) -> Result<()> {
    let config = EditorConfig::load(config_path).await?;

    if config.subscriptions.is_empty() {
        println!("No subscriptions configured.");
        return Ok(());
    }

    println!("Subscriptions ({}):", config.subscriptions.len());
    for subscription in &config.subscriptions {
        println!("  {}", describe(&subscription.event, &subscription.listener));
    }

    Ok(())
}

fn describe(event: &str, listener: &ListenerConfig) -> String {
    match listener {
        ListenerConfig::Log { path } => format!("{:<6} -> log to {}", event, path.display()),
        ListenerConfig::Email { address } => format!("{:<6} -> email {}", event, address),
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "editor_events=info,editor=info,events=info".into()),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run() {
        let cli = Cli::parse_from(["editor-events", "run", "test.txt", "--no-save"]);
        assert_eq!(cli.config, PathBuf::from(CONFIG_FILE));
        match cli.command {
            Commands::Run { file, no_save } => {
                assert_eq!(file, PathBuf::from("test.txt"));
                assert!(no_save);
            }
            _ => panic!("Wrong command"),
        }
    }

    #[test]
    fn test_describe() {
        let line = describe(
            "save",
            &ListenerConfig::Email {
                address: "admin@example.com".to_string(),
            },
        );
        assert_eq!(line, "save   -> email admin@example.com");
    }

    #[tokio::test]
    async fn test_run_writes_open_log() {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("open.log");
        let config_path = dir.path().join(CONFIG_FILE);
        std::fs::write(
            &config_path,
            format!(
                "[[subscriptions]]\nevent = \"open\"\nkind = \"log\"\npath = {:?}\n",
                log.display().to_string()
            ),
        )
        .unwrap();

        run(&config_path, PathBuf::from("test.txt"), true).await.unwrap();

        let content = std::fs::read_to_string(&log).unwrap();
        assert!(content.trim_end().ends_with("open: test.txt"));
    }

    #[tokio::test]
    async fn test_run_fails_when_listener_fails() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(CONFIG_FILE);
        std::fs::write(
            &config_path,
            "[[subscriptions]]\nevent = \"save\"\nkind = \"email\"\naddress = \"\"\n",
        )
        .unwrap();

        let err = run(&config_path, PathBuf::from("test.txt"), true)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to save"));

        run(&config_path, PathBuf::from("test.txt"), false).await.unwrap();
    }
}
