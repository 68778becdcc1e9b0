//! LGO CLI - Command line tool for querying local government outcome measures.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "lgo-cli",
    version,
    about = "Local government outcomes dashboard, in the terminal"
)]
struct Cli {
    /// Base URL of the outcomes backend
    #[arg(long, global = true, default_value = lgo_cmd::DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: lgo_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let backend = lgo_cmd::backend::Backend::new(&cli.base_url, cli.timeout_secs)?;
    lgo_cmd::run(&backend, cli.command).await
}
