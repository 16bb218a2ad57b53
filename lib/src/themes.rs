//! Preset character themes for text mode
//!
//! These are pure configuration data consumed by UI layers; the renderers
//! take the character pair directly.

/// A named dark/light character pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub dark_char: char,
    pub light_char: char,
}

/// Built-in theme presets, in display order
pub const PRESET_THEMES: [Theme; 5] = [
    Theme {
        name: "Classic",
        dark_char: '#',
        light_char: '.',
    },
    Theme {
        name: "Binary",
        dark_char: '1',
        light_char: '0',
    },
    Theme {
        name: "Slashes",
        dark_char: '/',
        light_char: '\\',
    },
    Theme {
        name: "Oceans",
        dark_char: '@',
        light_char: '~',
    },
    Theme {
        name: "Minimal",
        dark_char: 'X',
        light_char: ' ',
    },
];

/// Look up a preset theme by name
pub fn theme_by_name(name: &str) -> Option<&'static Theme> {
    PRESET_THEMES.iter().find(|theme| theme.name == name)
}
