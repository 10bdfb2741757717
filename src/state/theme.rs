//! Dark/light theme flag.

/// Session-wide theme flag. [`ThemeState::toggle`] is the only mutator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    is_dark: bool,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self { is_dark: true }
    }
}

impl ThemeState {
    pub fn new(is_dark: bool) -> Self {
        Self { is_dark }
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    /// Flip the flag once. Returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.is_dark = !self.is_dark;
        tracing::debug!(is_dark = self.is_dark, "Theme toggled");
        self.is_dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert!(ThemeState::default().is_dark());
    }

    #[test]
    fn test_toggle_flips_once_per_call() {
        let mut theme = ThemeState::new(false);
        assert!(theme.toggle());
        assert!(theme.is_dark());
        assert!(theme.is_dark());
        assert!(!theme.toggle());
        assert!(!theme.is_dark());
    }
}
