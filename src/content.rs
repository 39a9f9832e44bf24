//! Everything the page shows. Fixed at compile time.

pub const TITLE: &str = "How to Use Claude Code at Datacor";

pub const SUBTITLE: &str = "A presentation demonstrating the capabilities and best practices for using Claude Code in our development workflow.";

pub const BYLINE: &str = "Presented by Juan Pablo Villaplana";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Logo {
    pub src: &'static str,
    pub alt: &'static str,
    pub width: u32,
    pub height: u32,
}

pub const LOGO: Logo = Logo {
    src: "/logo.svg",
    alt: "Datacor logo",
    width: 190,
    height: 34,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Filled button.
    Primary,
    /// Outlined button.
    Secondary,
}

impl ActionKind {
    pub fn class(self) -> &'static str {
        match self {
            ActionKind::Primary => "btn-primary",
            ActionKind::Secondary => "btn-secondary",
        }
    }
}

/// An outbound link rendered as a button. Always opens in a new tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    pub label: &'static str,
    pub href: &'static str,
    pub kind: ActionKind,
}

pub const ACTIONS: [Action; 2] = [
    Action {
        label: "Learn More About Claude Code",
        href: "https://claude.ai/code",
        kind: ActionKind::Primary,
    },
    Action {
        label: "GitHub Repository",
        href: "https://github.com/anthropics/claude-code",
        kind: ActionKind::Secondary,
    },
];
