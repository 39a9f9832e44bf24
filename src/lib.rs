//! "How to Use Claude Code at Datacor" talk page (Rust + Yew + WASM).

mod app;
pub mod content;
pub mod theme;

pub use app::App;

/// Renders `App` to static markup. Nothing hydrates this page, so the
/// output carries no hydration markers.
pub async fn render_static() -> String {
    yew::ServerRenderer::<App>::new()
        .hydratable(false)
        .render()
        .await
}

/// Wraps server-rendered markup in a standalone HTML document.
pub fn document(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         </head>\n\
         <body>{body}</body>\n\
         </html>\n",
        title = content::TITLE,
    )
}
