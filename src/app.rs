use yew::prelude::*;

use crate::content::{self, Action, ACTIONS, LOGO};
use crate::theme;

fn action_link(action: &Action) -> Html {
    html! {
        <a
            class={classes!("btn", action.kind.class())}
            href={action.href}
            target="_blank"
            rel="noopener noreferrer"
        >
            { action.label }
        </a>
    }
}

/// The landing page. Takes no props and holds no state.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="page">
            <style>{ theme::stylesheet() }</style>
            <main class="stage">
                // Above the fold: load eagerly at high priority.
                <img
                    src={LOGO.src}
                    alt={LOGO.alt}
                    width={LOGO.width.to_string()}
                    height={LOGO.height.to_string()}
                    loading="eager"
                    fetchpriority="high"
                    decoding="sync"
                />
                <div class="copy">
                    <h1 class="title">{ content::TITLE }</h1>
                    <p class="subtitle">{ content::SUBTITLE }</p>
                    <p class="byline">{ content::BYLINE }</p>
                </div>
                <div class="actions">
                    { for ACTIONS.iter().map(action_link) }
                </div>
            </main>
        </div>
    }
}
