//! Terminal styles shared by the renderers.
//!
//! `console` drops the escape codes by itself when stdout is not a terminal, so
//! piped output and the end-to-end tests see plain text.

use console::Style;
use once_cell::sync::Lazy;

pub struct Styles {
    pub index: Style,
    pub selected: Style,
    pub name: Style,
    pub muted: Style,
    pub hyperlink: Style,
    pub shortcut: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    pub heading: Style,
}

pub static STYLES: Lazy<Styles> = Lazy::new(|| Styles {
    index: Style::new().color256(178),
    selected: Style::new().color256(178).bold(),
    name: Style::new(),
    muted: Style::new().color256(244),
    hyperlink: Style::new().cyan().underlined(),
    shortcut: Style::new().magenta(),
    success: Style::new().green(),
    warning: Style::new().yellow().bold(),
    error: Style::new().red().bold(),
    heading: Style::new().bold(),
});
