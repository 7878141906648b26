use anyhow::Result;
use clap::Parser;
use promptlab_core::cli::{Cli, Commands};
use promptlab_core::config::load_dotenv;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Session;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let dotenv = load_dotenv();
    init_tracing(&args);
    match dotenv {
        Ok(Some(path)) => {
            debug!(path = %path.display(), "loaded environment variables from .env")
        }
        Ok(None) => {}
        Err(e) => warn!(error = %e, "failed to load .env file"),
    }

    match &args.command {
        Commands::Models => cli::handle_models_command(),
        Commands::Init { force } => cli::handle_init_command(*force),
        Commands::Tips => cli::handle_tips_command(),
        Commands::Compare {
            topic,
            advanced_topic,
            audience,
            format,
        } => {
            let session = Session::from_cli(&args)?;
            let advanced_topic = advanced_topic.as_deref().unwrap_or(topic);
            cli::handle_compare_command(&session, topic, advanced_topic, *audience, *format).await
        }
        Commands::FewShot { task, input } => {
            let session = Session::from_cli(&args)?;
            let input = input.as_deref().unwrap_or(task.default_input());
            cli::handle_few_shot_command(&session, *task, input).await
        }
        Commands::Chain { topic, provider } => {
            let session = Session::from_cli(&args)?;
            cli::handle_chain_command(&session, topic, (*provider).into()).await
        }
        Commands::Reason {
            kind,
            problem,
            provider,
        } => {
            let session = Session::from_cli(&args)?;
            let problem = problem.as_deref().unwrap_or(kind.default_problem());
            cli::handle_reason_command(&session, *kind, problem, &provider.providers()).await
        }
    }
}

fn init_tracing(args: &Cli) {
    let filter = EnvFilter::try_new(args.log_filter()).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptlab_core::config::load_dotenv_from;
    use tempfile::TempDir;

    #[test]
    fn rust_log_in_dotenv_reaches_the_filter() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "RUST_LOG=promptlab=debug\n").unwrap();
        unsafe {
            std::env::remove_var("RUST_LOG");
        }

        load_dotenv_from(&path).unwrap();
        let args = Cli::try_parse_from(["promptlab", "tips"]).unwrap();
        assert_eq!(args.log_filter(), "promptlab=debug");

        unsafe {
            std::env::remove_var("RUST_LOG");
        }
    }
}
