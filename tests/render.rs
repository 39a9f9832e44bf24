use claude_code_talk::content::{self, ACTIONS, LOGO};
use claude_code_talk::{document, render_static, theme, App};
use yew::prelude::*;

async fn render() -> String {
    render_static().await
}

/// Opening tags named `name`, e.g. `<a class="..." href="...">`.
fn tags<'a>(html: &'a str, name: &str) -> Vec<&'a str> {
    let open = format!("<{name}");
    html.match_indices(&open)
        .filter(|(at, _)| {
            matches!(html[at + open.len()..].chars().next(), Some(' ' | '>' | '/'))
        })
        .map(|(at, _)| {
            let end = html[at..].find('>').expect("unterminated tag");
            &html[at..=at + end]
        })
        .collect()
}

#[tokio::test]
async fn renders_one_logo_with_fixed_size() {
    let html = render().await;
    let imgs = tags(&html, "img");
    assert_eq!(imgs.len(), 1, "{html}");

    let img = imgs[0];
    assert!(img.contains(&format!(r#"src="{}""#, LOGO.src)));
    assert!(img.contains(r#"alt="Datacor logo""#));
    assert!(img.contains(r#"width="190""#));
    assert!(img.contains(r#"height="34""#));
    assert!(img.contains(r#"loading="eager""#));
    assert!(img.contains(r#"fetchpriority="high""#));
}

#[tokio::test]
async fn renders_two_safe_outbound_links_in_order() {
    let html = render().await;
    let links = tags(&html, "a");
    assert_eq!(links.len(), 2, "{html}");

    let expected = ["https://claude.ai/code", "https://github.com/anthropics/claude-code"];
    for (link, href) in links.iter().zip(expected) {
        assert!(link.contains(&format!(r#"href="{href}""#)), "{link}");
        assert!(link.contains(r#"target="_blank""#), "{link}");
        assert!(link.contains(r#"rel="noopener noreferrer""#), "{link}");
    }

    assert!(links[0].contains("btn-primary"));
    assert!(links[1].contains("btn-secondary"));
    for action in ACTIONS {
        assert!(html.contains(&format!(">{}</a>", action.label)));
    }
}

#[tokio::test]
async fn renders_heading_and_copy() {
    let html = render().await;
    assert_eq!(tags(&html, "h1").len(), 1);
    assert!(html.contains(&format!(">{}</h1>", content::TITLE)));
    assert!(html.contains(&format!(">{}</p>", content::SUBTITLE)));
    assert!(html.contains(&format!(">{}</p>", content::BYLINE)));
}

#[tokio::test]
async fn embeds_the_stylesheet() {
    let html = render().await;
    assert_eq!(tags(&html, "style").len(), 1);
    assert!(html.contains(&theme::stylesheet()));
}

#[tokio::test]
async fn rerendering_is_identical() {
    let first = render().await;
    let second = render().await;
    assert_eq!(first, second);
}

#[derive(Properties, PartialEq)]
struct InjectedProps {
    value: String,
}

#[function_component(Injected)]
fn injected(props: &InjectedProps) -> Html {
    html! {
        <ContextProvider<String> context={props.value.clone()}>
            <App />
        </ContextProvider<String>>
    }
}

#[tokio::test]
async fn ignores_injected_context() {
    let plain = render().await;
    let injected = yew::ServerRenderer::<Injected>::with_props(|| InjectedProps {
        value: "dark-mode please".to_string(),
    })
    .hydratable(false)
    .render()
    .await;
    assert_eq!(plain, injected);
}

#[tokio::test]
async fn static_markup_has_no_hydration_markers() {
    let html = render().await;
    assert!(!html.contains("<!--"), "{html}");
    assert!(!html.contains("claude_code_talk::"), "{html}");
    assert!(html.starts_with(r#"<div class="page">"#), "{html}");
}

#[tokio::test]
async fn document_wraps_rendered_body() {
    let body = render().await;
    let doc = document(&body);
    assert!(doc.starts_with("<!DOCTYPE html>"));
    assert!(doc.contains(r#"<html lang="en">"#));
    assert!(doc.contains(r#"<meta charset="utf-8">"#));
    assert!(doc.contains(&format!("<title>{}</title>", content::TITLE)));
    assert!(doc.contains(&format!("<body>{body}</body>")));
}
