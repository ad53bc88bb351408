//! Terminal stylesheet.
//!
//! Every field is a plain `Style` by default, so styled text renders
//! unchanged when colour is off.

use owo_colors::Style;

#[derive(Default, Clone)]
pub struct Styles {
    /// Completed step marker.
    pub success: Style,
    /// Warnings and missing agents.
    pub warning: Style,
    /// In-progress step marker.
    pub step: Style,
    /// Key column in key/value listings.
    pub label: Style,
    pub emphasis: Style,
    /// Section titles and report subjects.
    pub header: Style,
    /// Agent names, in the violet used by investigation reports.
    pub agent: Style,
}

impl Styles {
    /// Stylesheet for a colour-capable terminal.
    #[must_use]
    pub fn colored() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            step: Style::new().blue(),
            label: Style::new().dimmed(),
            emphasis: Style::new().bold(),
            header: Style::new().bold().cyan(),
            agent: Style::new().truecolor(109, 40, 217),
        }
    }
}
