use clap::Parser;
use tracing_subscriber::EnvFilter;

use super::*;

#[derive(Parser)]
#[command(name = "basket-fixture-server")]
#[command(about = "In-memory basket-item API for exercising basket-check", long_about = None)]
pub(super) struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    pub(super) addr: SocketAddr,

    /// Write bound address to this file (dev/test convenience)
    #[arg(long)]
    pub(super) addr_file: Option<PathBuf>,

    /// Domain of the accepted login email
    #[arg(long, default_value = "juice-sh.op")]
    pub(super) domain: String,

    /// Local part of the accepted login email
    #[arg(long, default_value = "jim")]
    pub(super) user: String,

    #[arg(long, default_value = "ncc-1701")]
    pub(super) password: String,

    /// Serve basket items without checking the bearer token
    #[arg(long)]
    pub(super) allow_anonymous: bool,

    /// Drop the per-product ceilings and the noUpdate constraint
    #[arg(long)]
    pub(super) lenient_rules: bool,
}

pub(super) fn build_state(args: &Args) -> Arc<AppState> {
    let (immutable_fields, catalog): (&'static [&'static str], Catalog) = if args.lenient_rules {
        (&[], Catalog::standard().without_product_limits())
    } else {
        (IMMUTABLE_FIELDS, Catalog::standard())
    };
    Arc::new(AppState::new(
        format!("{}@{}", args.user, args.domain),
        args.password.clone(),
        args.allow_anonymous,
        immutable_fields,
        catalog,
    ))
}

pub(super) async fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let state = build_state(&args);
    if args.allow_anonymous {
        tracing::warn!("bearer gate disabled (--allow-anonymous)");
    }
    if args.lenient_rules {
        tracing::warn!("product ceilings and noUpdate disabled (--lenient-rules)");
    }
    let app = build_app_router(state);

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("bind {}", args.addr))?;
    let local_addr = listener.local_addr().context("read listener local addr")?;
    tracing::info!(%local_addr, "basket-fixture-server listening");

    if let Some(addr_file) = &args.addr_file {
        std::fs::write(addr_file, local_addr.to_string())
            .with_context(|| format!("write addr file {}", addr_file.display()))?;
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

#[cfg(test)]
#[path = "../../tests/bin/basket_fixture_server/runtime_tests.rs"]
mod tests;
