use std::process::ExitCode;

use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use nearest_stops::app::App;
use nearest_stops::config::AppConfig;
use nearest_stops::error::AppError;
use nearest_stops::http::ReqwestFetcher;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // .env is optional
    let _ = dotenvy::dotenv();

    // stdout carries the prompt and results, so logs go to stderr
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_unknown_postcode() => {
            eprintln!("error: postcode not found");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    let fetcher = ReqwestFetcher::new()?;
    let app = App::new(config, fetcher);

    let mut stdout = tokio::io::stdout();
    app.run(BufReader::new(tokio::io::stdin()), &mut stdout).await
}
