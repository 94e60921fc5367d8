#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use portfolio_site::server::{init_tracing, serve};

    init_tracing();
    tracing::info!("portfolio-site v{}", env!("CARGO_PKG_VERSION"));
    if let Err(e) = serve().await {
        tracing::error!(error = %e, source = ?std::error::Error::source(&e), "server failed");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
