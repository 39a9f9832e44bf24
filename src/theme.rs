//! Page styling: two color palettes and the responsive layout rules.
//!
//! Colors live in CSS custom properties on `:root`. The dark scheme media
//! query only reassigns those properties, so switching schemes never touches
//! layout or content.

/// Below this width content is stacked and centered.
pub const BREAKPOINT_SM_PX: u32 = 640;
/// Below this width the action buttons take the full row.
pub const BREAKPOINT_MD_PX: u32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub page_background: &'static str,
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub byline: &'static str,
    pub button_background: &'static str,
    pub button_text: &'static str,
    pub primary_hover: &'static str,
    pub outline_border: &'static str,
    pub outline_hover: &'static str,
}

pub const LIGHT: Palette = Palette {
    page_background: "#ffffff",
    heading: "#000000",
    subtitle: "#52525b",
    byline: "#71717a",
    button_background: "#171717",
    button_text: "#ffffff",
    primary_hover: "#383838",
    outline_border: "rgba(0, 0, 0, 0.08)",
    outline_hover: "rgba(0, 0, 0, 0.04)",
};

pub const DARK: Palette = Palette {
    page_background: "#000000",
    heading: "#fafafa",
    subtitle: "#a1a1aa",
    byline: "#71717a",
    button_background: "#ededed",
    button_text: "#0a0a0a",
    primary_hover: "#cccccc",
    outline_border: "rgba(255, 255, 255, 0.145)",
    outline_hover: "#1a1a1a",
};

impl Palette {
    /// `(custom property, value)` pairs, in declaration order.
    pub fn entries(&self) -> [(&'static str, &'static str); 9] {
        [
            ("--page-bg", self.page_background),
            ("--heading", self.heading),
            ("--subtitle", self.subtitle),
            ("--byline", self.byline),
            ("--button-bg", self.button_background),
            ("--button-text", self.button_text),
            ("--primary-hover", self.primary_hover),
            ("--outline-border", self.outline_border),
            ("--outline-hover", self.outline_hover),
        ]
    }

    fn declarations(&self, indent: &str) -> String {
        self.entries()
            .iter()
            .map(|(name, value)| format!("{indent}{name}: {value};\n"))
            .collect()
    }
}

/// The full stylesheet for the page.
///
/// Never contains `<`, `>` or `&`, so it can sit inside a `<style>` element
/// as plain text.
pub fn stylesheet() -> String {
    let light = LIGHT.declarations("  ");
    let dark = DARK.declarations("    ");
    let sm = BREAKPOINT_SM_PX;
    let md = BREAKPOINT_MD_PX;

    format!(
        r#":root {{
{light}}}

@media (prefers-color-scheme: dark) {{
  :root {{
{dark}  }}
}}

* {{ box-sizing: border-box; }}
body {{ margin: 0; }}

.page {{
  display: flex;
  min-height: 100vh;
  align-items: center;
  justify-content: center;
  background: var(--page-bg);
  font-family: ui-sans-serif, system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif;
}}

.stage {{
  display: flex;
  min-height: 100vh;
  width: 100%;
  max-width: 48rem;
  flex-direction: column;
  align-items: center;
  justify-content: space-between;
  padding: 8rem 4rem;
  background: var(--page-bg);
}}

.copy {{
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.5rem;
  text-align: center;
}}

.title {{
  max-width: 36rem;
  margin: 0;
  font-size: 2.25rem;
  font-weight: 600;
  line-height: 1.25;
  letter-spacing: -0.025em;
  color: var(--heading);
}}

.subtitle {{
  max-width: 28rem;
  margin: 0;
  font-size: 1.125rem;
  line-height: 2rem;
  color: var(--subtitle);
}}

.byline {{
  max-width: 28rem;
  margin: 0;
  font-size: 1rem;
  line-height: 1.75rem;
  color: var(--byline);
}}

.actions {{
  display: flex;
  flex-direction: column;
  gap: 1rem;
  font-size: 1rem;
  font-weight: 500;
}}

.btn {{
  display: flex;
  height: 3rem;
  width: 100%;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 0 1.25rem;
  border-radius: 9999px;
  text-decoration: none;
  transition: background-color 150ms, border-color 150ms, color 150ms;
}}

.btn-primary {{
  background: var(--button-bg);
  color: var(--button-text);
}}
.btn-primary:hover {{ background: var(--primary-hover); }}

.btn-secondary {{
  border: 1px solid var(--outline-border);
  color: var(--heading);
}}
.btn-secondary:hover {{
  border-color: transparent;
  background: var(--outline-hover);
}}

@media (min-width: {sm}px) {{
  .stage {{ align-items: flex-start; }}
  .copy {{ align-items: flex-start; text-align: left; }}
  .actions {{ flex-direction: row; }}
}}

@media (min-width: {md}px) {{
  .btn {{ width: auto; }}
}}
"#
    )
}
