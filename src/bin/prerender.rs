// Renders the page once through Yew SSR and prints a complete HTML document,
// for hosts that only serve static files:
//
//   cargo run --features prerender --bin prerender > dist/index.html

use std::io::Write;

use claude_code_talk::{document, render_static};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::io::Result<()> {
    // stdout carries the document, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let body = render_static().await;
    log::info!("rendered {} bytes of markup", body.len());

    let mut out = std::io::stdout().lock();
    out.write_all(document(&body).as_bytes())?;
    out.flush()
}
