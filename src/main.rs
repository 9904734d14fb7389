use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use trivial_todo::application::todo_service::TodoServiceImpl;
use trivial_todo::cli::{commands, Cli, Command};
use trivial_todo::infrastructure::json_repo::JsonFileRepository;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    // Logs go to stderr so command output on stdout stays clean; quiet unless
    // RUST_LOG opts in.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "error".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let repo = JsonFileRepository::new(cli.file);
    let service = TodoServiceImpl::new(repo);

    let result = match cli.command {
        Command::Add { title } => commands::add(&service, &title),
        Command::List => commands::list(&service),
        Command::Done { id } => commands::done(&service, &id),
    };

    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
