//! Light/dark theme state. Held in memory for the session only; the dark
//! variant is always the starting point.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const INITIAL: Theme = Theme::Dark;

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "◐",
            Self::Dark => "◑",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_theme_is_dark() {
        assert_eq!(Theme::INITIAL, Theme::Dark);
    }

    #[test]
    fn double_toggle_round_trips() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn toggle_label_names_the_next_theme() {
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
    }
}
