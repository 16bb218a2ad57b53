/// Which rendering strategy to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Unicode quadrant glyphs, two module-rows per printed row
    #[default]
    Block,
    /// One character per module, using the configured theme characters
    Text,
}

/// Configuration for text art rendering
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Rendering strategy
    pub mode: RenderMode,
    /// Character for dark modules (text mode only)
    pub dark_char: char,
    /// Character for light modules and the quiet zone (text mode only)
    pub light_char: char,
    /// Swap the dark/light interpretation of every module
    pub invert: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mode: RenderMode::Block,
            dark_char: '#',
            light_char: '.',
            invert: false,
        }
    }
}

impl RenderConfig {
    /// Validates the configuration parameters
    ///
    /// Theme characters must not be control characters - a newline or tab
    /// would break the fixed line geometry of the output. Block mode never
    /// reads the theme characters, but they are validated regardless so a
    /// mode switch cannot surface a stale invalid value.
    pub fn validate(&self) -> Result<(), String> {
        if self.dark_char.is_control() {
            return Err(format!(
                "dark_char must be a printable character, got {:?}",
                self.dark_char
            ));
        }
        if self.light_char.is_control() {
            return Err(format!(
                "light_char must be a printable character, got {:?}",
                self.light_char
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RenderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.mode, RenderMode::Block);
        assert_eq!(config.dark_char, '#');
        assert_eq!(config.light_char, '.');
        assert!(!config.invert);
    }

    #[test]
    fn test_invalid_dark_char() {
        let mut config = RenderConfig::default();
        config.dark_char = '\n';
        assert!(config.validate().is_err());

        config.dark_char = '\t';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_light_char() {
        let mut config = RenderConfig::default();
        config.light_char = '\r';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_space_is_valid() {
        let config = RenderConfig {
            dark_char: 'X',
            light_char: ' ',
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
