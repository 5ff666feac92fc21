use crate::engine::Frame;
use crate::text::{Span, Style};
use colored::Colorize;
use std::collections::HashMap;
use std::env;

type Rgb = (u8, u8, u8);

/// Maps semantic styles to foreground colors.
pub struct Theme {
    pub colors: HashMap<Style, String>,
    /// Color used for every fragment of an inactive view.
    pub inactive: String,
}

impl Theme {
    pub fn get_color(&self, style: Style) -> Option<&str> {
        self.colors.get(&style).map(String::as_str)
    }

    /// Render a frame with ANSI colors. Space reservations become spaces.
    pub fn paint(&self, frame: &Frame) -> String {
        let mut out = String::new();
        for span in frame.text.spans() {
            match span {
                Span::Space(columns) => out.push_str(&" ".repeat(*columns)),
                Span::Styled { content, style } => {
                    out.push_str(&self.paint_fragment(content, *style, frame.active));
                }
            }
        }
        out
    }

    fn paint_fragment(&self, content: &str, style: Option<Style>, active: bool) -> String {
        if !active {
            let (r, g, b) = parse_color(&self.inactive);
            return content.truecolor(r, g, b).to_string();
        }

        let Some(style) = style else {
            return content.to_string();
        };
        let Some(color) = self.get_color(style) else {
            return content.to_string();
        };

        let (r, g, b) = parse_color(color);
        let colored = content.truecolor(r, g, b);
        match style {
            Style::Emphasis | Style::Modified => colored.bold().to_string(),
            Style::Unimportant => colored.dimmed().to_string(),
            _ => colored.to_string(),
        }
    }
}

pub fn get_theme(name: &str) -> Theme {
    match name {
        "dark" => dark_theme(),
        "light" => light_theme(),
        "nord" => nord_theme(),
        "tokyo-night" => tokyo_night_theme(),
        "rose-pine" => rose_pine_theme(),
        _ => dark_theme(), // fallback
    }
}

/// Turn color output on or off globally, following `NO_COLOR`, `TERM` and
/// whether stdout is a terminal.
pub fn configure_colors() {
    colored::control::set_override(should_use_colors());
}

pub fn should_use_colors() -> bool {
    env::var("NO_COLOR").is_err()
        && env::var("TERM").map_or(true, |term| term != "dumb")
        && atty::is(atty::Stream::Stdout)
}

fn parse_color(color: &str) -> Rgb {
    if color.starts_with('#') && color.len() == 7 {
        let r = u8::from_str_radix(&color[1..3], 16).unwrap_or(255);
        let g = u8::from_str_radix(&color[3..5], 16).unwrap_or(255);
        let b = u8::from_str_radix(&color[5..7], 16).unwrap_or(255);
        (r, g, b)
    } else {
        (255, 255, 255) // Default to white
    }
}

fn theme(entries: [(Style, &str); 8], inactive: &str) -> Theme {
    Theme {
        colors: entries
            .into_iter()
            .map(|(style, color)| (style, color.to_string()))
            .collect(),
        inactive: inactive.to_string(),
    }
}

fn dark_theme() -> Theme {
    theme(
        [
            (Style::Neutral, "#a0aec0"),
            (Style::Info, "#63b3ed"),
            (Style::Success, "#68d391"),
            (Style::Warning, "#f6ad55"),
            (Style::Error, "#fc8181"),
            (Style::Unimportant, "#718096"),
            (Style::Emphasis, "#e2e8f0"),
            (Style::Modified, "#f6e05e"),
        ],
        "#4a5568",
    )
}

fn light_theme() -> Theme {
    theme(
        [
            (Style::Neutral, "#4a5568"),
            (Style::Info, "#2b6cb0"),
            (Style::Success, "#2f855a"),
            (Style::Warning, "#c05621"),
            (Style::Error, "#c53030"),
            (Style::Unimportant, "#a0aec0"),
            (Style::Emphasis, "#1a202c"),
            (Style::Modified, "#b7791f"),
        ],
        "#cbd5e0",
    )
}

fn nord_theme() -> Theme {
    theme(
        [
            (Style::Neutral, "#d8dee9"),
            (Style::Info, "#81a1c1"),
            (Style::Success, "#a3be8c"),
            (Style::Warning, "#ebcb8b"),
            (Style::Error, "#bf616a"),
            (Style::Unimportant, "#4c566a"),
            (Style::Emphasis, "#eceff4"),
            (Style::Modified, "#d08770"),
        ],
        "#434c5e",
    )
}

fn tokyo_night_theme() -> Theme {
    theme(
        [
            (Style::Neutral, "#a9b1d6"),
            (Style::Info, "#7aa2f7"),
            (Style::Success, "#9ece6a"),
            (Style::Warning, "#e0af68"),
            (Style::Error, "#f7768e"),
            (Style::Unimportant, "#565f89"),
            (Style::Emphasis, "#c0caf5"),
            (Style::Modified, "#ff9e64"),
        ],
        "#414868",
    )
}

fn rose_pine_theme() -> Theme {
    theme(
        [
            (Style::Neutral, "#e0def4"),
            (Style::Info, "#9ccfd8"),
            (Style::Success, "#31748f"),
            (Style::Warning, "#f6c177"),
            (Style::Error, "#eb6f92"),
            (Style::Unimportant, "#6e6a86"),
            (Style::Emphasis, "#e0def4"),
            (Style::Modified, "#ebbcba"),
        ],
        "#403d52",
    )
}
