use clap::Parser;
use std::path::PathBuf;
use updraft_fs::FileSystemStore;
use updraft_server::{UpdraftServer, UpdraftServerConfig};

#[derive(Parser)]
#[command(name = "updraft")]
#[command(about = "Over-the-air update manifest server")]
struct Cli {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Public URL prefix baked into served asset URLs
    #[arg(short, long, env = "UPDRAFT_BASE_URL", default_value = "http://localhost:3000")]
    base_url: String,

    /// Directory containing the updates/ tree
    #[arg(short, long, env = "UPDRAFT_ROOT", default_value = ".")]
    root: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let store = FileSystemStore::new(&cli.root);
    let app = UpdraftServer::new(UpdraftServerConfig {
        base_url: cli.base_url,
    })
    .build(store);

    let addr = format!("0.0.0.0:{}", cli.port);
    println!("Server listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
