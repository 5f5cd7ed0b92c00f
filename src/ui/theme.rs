use ratatui::style::Color;

use crate::calendar::EventColor;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub key: &'static str,
    pub name: &'static str,
    pub title: Color,
    pub accent: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub today: Color,
    pub weekday_header: Color,
    pub weekend: Color,
    pub blank_cell: Color,
    pub status_bar: Color,
    pub help_title: Color,
    pub help_section: Color,
    pub command_mode: Color,
    pub modal_bg: Color,
    pub error: Color,
    pub success: Color,
}

impl Theme {
    pub const KEYS: [&'static str; 5] = ["default", "sunset", "forest", "purple", "dark"];

    pub fn ocean_blue() -> Self {
        Self {
            key: "default",
            name: "Ocean Blue",
            title: Color::Rgb(37, 99, 235),
            accent: Color::Rgb(96, 165, 250),
            selected_bg: Color::Rgb(30, 64, 175),
            selected_fg: Color::White,
            today: Color::Rgb(59, 130, 246),
            weekday_header: Color::Rgb(147, 197, 253),
            weekend: Color::Rgb(148, 163, 184),
            blank_cell: Color::DarkGray,
            status_bar: Color::Rgb(226, 232, 240),
            help_title: Color::Rgb(37, 99, 235),
            help_section: Color::Rgb(147, 197, 253),
            command_mode: Color::White,
            modal_bg: Color::Rgb(23, 37, 84),
            error: Color::Rgb(248, 113, 113),
            success: Color::Rgb(74, 222, 128),
        }
    }

    pub fn sunset() -> Self {
        Self {
            key: "sunset",
            name: "Sunset Orange",
            title: Color::Rgb(249, 115, 22),
            accent: Color::Rgb(254, 215, 170),
            selected_bg: Color::Rgb(194, 65, 12),
            selected_fg: Color::White,
            today: Color::Rgb(220, 38, 38),
            weekday_header: Color::Rgb(253, 186, 116),
            weekend: Color::Rgb(254, 240, 138),
            blank_cell: Color::DarkGray,
            status_bar: Color::Rgb(255, 247, 237),
            help_title: Color::Rgb(249, 115, 22),
            help_section: Color::Rgb(253, 186, 116),
            command_mode: Color::Rgb(255, 247, 237),
            modal_bg: Color::Rgb(67, 20, 7),
            error: Color::Rgb(239, 68, 68),
            success: Color::Rgb(132, 204, 22),
        }
    }

    pub fn forest() -> Self {
        Self {
            key: "forest",
            name: "Forest Green",
            title: Color::Rgb(22, 163, 74),
            accent: Color::Rgb(187, 247, 208),
            selected_bg: Color::Rgb(4, 120, 87),
            selected_fg: Color::White,
            today: Color::Rgb(16, 185, 129),
            weekday_header: Color::Rgb(134, 239, 172),
            weekend: Color::Rgb(153, 246, 228),
            blank_cell: Color::DarkGray,
            status_bar: Color::Rgb(240, 253, 244),
            help_title: Color::Rgb(22, 163, 74),
            help_section: Color::Rgb(134, 239, 172),
            command_mode: Color::Rgb(240, 253, 244),
            modal_bg: Color::Rgb(5, 46, 22),
            error: Color::Rgb(248, 113, 113),
            success: Color::Rgb(74, 222, 128),
        }
    }

    pub fn purple() -> Self {
        Self {
            key: "purple",
            name: "Royal Purple",
            title: Color::Rgb(147, 51, 234),
            accent: Color::Rgb(221, 214, 254),
            selected_bg: Color::Rgb(109, 40, 217),
            selected_fg: Color::White,
            today: Color::Rgb(192, 132, 252),
            weekday_header: Color::Rgb(196, 181, 253),
            weekend: Color::Rgb(249, 168, 212),
            blank_cell: Color::DarkGray,
            status_bar: Color::Rgb(250, 245, 255),
            help_title: Color::Rgb(147, 51, 234),
            help_section: Color::Rgb(196, 181, 253),
            command_mode: Color::Rgb(250, 245, 255),
            modal_bg: Color::Rgb(46, 16, 101),
            error: Color::Rgb(251, 113, 133),
            success: Color::Rgb(134, 239, 172),
        }
    }

    pub fn dark() -> Self {
        Self {
            key: "dark",
            name: "Dark Mode",
            title: Color::Rgb(209, 213, 219),
            accent: Color::Rgb(156, 163, 175),
            selected_bg: Color::Rgb(55, 65, 81),
            selected_fg: Color::Rgb(243, 244, 246),
            today: Color::Rgb(243, 244, 246),
            weekday_header: Color::Rgb(156, 163, 175),
            weekend: Color::Rgb(107, 114, 128),
            blank_cell: Color::Rgb(55, 65, 81),
            status_bar: Color::Rgb(209, 213, 219),
            help_title: Color::Rgb(243, 244, 246),
            help_section: Color::Rgb(156, 163, 175),
            command_mode: Color::Rgb(243, 244, 246),
            modal_bg: Color::Rgb(17, 24, 39),
            error: Color::Rgb(248, 113, 113),
            success: Color::Rgb(74, 222, 128),
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "default" => Some(Self::ocean_blue()),
            "sunset" => Some(Self::sunset()),
            "forest" => Some(Self::forest()),
            "purple" => Some(Self::purple()),
            "dark" => Some(Self::dark()),
            _ => None,
        }
    }

    pub fn available_themes() -> Vec<Theme> {
        Self::KEYS.iter().filter_map(|key| Self::from_key(key)).collect()
    }

    /// The theme after this one, wrapping around.
    pub fn next(&self) -> Self {
        let idx = Self::KEYS.iter().position(|k| *k == self.key).unwrap_or(0);
        let next_key = Self::KEYS[(idx + 1) % Self::KEYS.len()];
        Self::from_key(next_key).unwrap_or_default()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::ocean_blue()
    }
}

/// Terminal color for an event's display tag.
pub fn event_color(color: EventColor) -> Color {
    match color {
        EventColor::Blue => Color::Rgb(59, 130, 246),
        EventColor::Red => Color::Rgb(239, 68, 68),
        EventColor::Green => Color::Rgb(34, 197, 94),
        EventColor::Purple => Color::Rgb(168, 85, 247),
        EventColor::Orange => Color::Rgb(249, 115, 22),
        EventColor::Pink => Color::Rgb(236, 72, 153),
        EventColor::Indigo => Color::Rgb(99, 102, 241),
        EventColor::Teal => Color::Rgb(20, 184, 166),
        EventColor::Gray => Color::Rgb(107, 114, 128),
    }
}
