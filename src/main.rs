use anyhow::Result;
use food_i2v::batch::run_batch;
use food_i2v::config::{Config, CONFIG_FILE};
use food_i2v::init;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load_or_default(CONFIG_FILE).await?;

    if !init::check_generator(&config.launcher).await {
        eprintln!("[WARNING] {}", init::generator_warning(&config.launcher));
    }

    // Per-job failures only show up in the printed summary, never in the exit code.
    run_batch(&config).await?;
    Ok(())
}
