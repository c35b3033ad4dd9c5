use abook::commands::MessageLevel;
use console::Style;
use once_cell::sync::Lazy;

pub struct Theme {
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    pub info: Style,
    pub listing: Style,
}

impl Theme {
    pub fn for_level(&self, level: MessageLevel) -> &Style {
        match level {
            MessageLevel::Success => &self.success,
            MessageLevel::Warning => &self.warning,
            MessageLevel::Error => &self.error,
            MessageLevel::Info => &self.info,
        }
    }
}

pub static ABOOK_THEME: Lazy<Theme> = Lazy::new(|| Theme {
    success: Style::new().green(),
    warning: Style::new().yellow(),
    error: Style::new().red(),
    info: Style::new().blue(),
    listing: Style::new().blue(),
});
