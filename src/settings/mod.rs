//! Pane settings
//! Defaults plus environment overrides read by the host

/// Status line settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSettings {
    /// Whether to show the status line at all
    pub show: bool,
    /// Whether to use reverse video for the status line
    pub reverse_video: bool,
}

impl Default for StatusSettings {
    fn default() -> Self {
        StatusSettings {
            show: true,
            reverse_video: true,
        }
    }
}

/// Settings for a text pane and its host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneSettings {
    /// Status line settings
    pub status_line: StatusSettings,
    /// Decimals used when the scroll position is formatted for observers
    pub scroll_precision: usize,
    /// Tab width in spaces
    pub tab_width: usize,
    /// Whether Tab inserts spaces (otherwise the key is left to the host)
    pub expand_tabs: bool,
}

impl PaneSettings {
    /// Environment variable that hides the status line when set
    pub const NO_STATUS_VAR: &'static str = "TEXTPANE_NO_STATUS";
    /// Environment variable overriding `scroll_precision`
    pub const PRECISION_VAR: &'static str = "TEXTPANE_SCROLL_PRECISION";

    #[must_use]
    pub fn new() -> Self {
        PaneSettings {
            status_line: StatusSettings::default(),
            scroll_precision: 2,
            tab_width: 4,
            expand_tabs: true,
        }
    }

    /// Defaults overridden from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overridden through an arbitrary variable lookup.
    /// Unparseable values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::new();
        if lookup(Self::NO_STATUS_VAR).is_some() {
            settings.status_line.show = false;
        }
        if let Some(precision) = lookup(Self::PRECISION_VAR).and_then(|v| v.trim().parse().ok()) {
            settings.scroll_precision = precision;
        }
        settings
    }
}

impl Default for PaneSettings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
