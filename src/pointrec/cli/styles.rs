//! Styles for the session output.
//!
//! Templates only ever name semantic styles (`index`, `label`, `warning`, ...)
//! through the `style` filter; the concrete colours live here. Point colours
//! double as style names so a row can be tinted with `style(p.color)`.
//!
//! When styling is off (piped output, `--no-color`) the filter returns the
//! text untouched, except that an unknown style name is flagged with
//! [`MISSING_STYLE_INDICATOR`] so template typos show up in tests.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const HEADER: &str = "header";
    pub const INDEX: &str = "index";
    pub const LABEL: &str = "label";
    pub const MUTED: &str = "muted";
    pub const KEY: &str = "key";
    pub const DANGLING: &str = "dangling";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
    pub const BLUE: &str = "blue";
    pub const PINK: &str = "pink";
}

#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static POINTREC_THEME: Lazy<Theme> = Lazy::new(|| {
    let muted = Style::new().color256(245);
    Theme::new()
        .add(names::HEADER, Style::new().bold().underlined())
        .add(names::INDEX, Style::new().yellow())
        .add(names::LABEL, Style::new().cyan().bold())
        .add(names::MUTED, muted.clone())
        .add(names::KEY, Style::new().bold())
        .add(names::DANGLING, Style::new().red().italic())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted)
        .add(names::BLUE, Style::new().blue())
        .add(names::PINK, Style::new().magenta())
});
