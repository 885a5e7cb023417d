//! Color scheme flag

use std::fmt;

/// The binary dark/light flag
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    #[default]
    Dark,
    Light,
}

impl ColorScheme {
    /// Normalize arbitrary input: anything that is not exactly `"light"`
    /// becomes dark.
    pub fn normalize(name: &str) -> Self {
        if name == "light" {
            ColorScheme::Light
        } else {
            ColorScheme::Dark
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Dark => ColorScheme::Light,
            ColorScheme::Light => ColorScheme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Dark => "dark",
            ColorScheme::Light => "light",
        }
    }

    /// The root class carried while this scheme is active
    pub fn root_class(self) -> &'static str {
        match self {
            ColorScheme::Dark => "theme-dark",
            ColorScheme::Light => "theme-light",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
