use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

use crate::error::ParseChoiceError;

/// Display theme. Owned by the dispatcher and handed to every screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(&mut self) {
        *self = match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        };
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn base(self) -> Style {
        match self {
            Theme::Dark => Style::default().fg(Color::White).bg(Color::Black),
            Theme::Light => Style::default().fg(Color::Black).bg(Color::White),
        }
    }

    pub fn muted(self) -> Style {
        match self {
            Theme::Dark => Style::default().fg(Color::DarkGray),
            Theme::Light => Style::default().fg(Color::Gray),
        }
    }

    pub fn accent(self) -> Style {
        match self {
            Theme::Dark => Style::default().fg(Color::LightBlue),
            Theme::Light => Style::default().fg(Color::Blue),
        }
    }

    /// The orange highlight from the landing copy.
    pub fn highlight(self) -> Style {
        Style::default().fg(Color::Rgb(249, 115, 22))
    }

    pub fn selected(self) -> Style {
        Style::default()
            .bg(Color::Blue)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error(self) -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn success(self) -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn bold(self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }
}

impl FromStr for Theme {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(ParseChoiceError {
                kind: "theme",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_between_two_themes() {
        let mut theme = Theme::default();
        assert_eq!(theme, Theme::Dark);
        theme.toggle();
        assert_eq!(theme, Theme::Light);
        theme.toggle();
        assert_eq!(theme, Theme::Dark);
    }

    #[test]
    fn test_parse() {
        assert_eq!("LIGHT".parse::<Theme>().unwrap(), Theme::Light);
        assert!("sepia".parse::<Theme>().is_err());
    }
}
