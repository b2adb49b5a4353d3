//! Terminal User Interface
//!
//! Mansion exploration screens using ratatui

pub mod app;
pub mod widgets;

pub use app::App;

use crate::data::MessageKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

/// Color scheme for the game
pub struct Theme {
    pub fg: Color,
    pub accent: Color,
    pub alert: Color,
    pub success: Color,
    pub warning: Color,
    pub border: Color,
    pub header: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            accent: Color::Yellow,
            alert: Color::Red,
            success: Color::Green,
            warning: Color::LightRed,
            border: Color::DarkGray,
            header: Color::Magenta,
        }
    }
}

/// Get color for a log line
pub fn kind_color(kind: &MessageKind) -> Color {
    match kind {
        MessageKind::Narration => Color::Gray,
        MessageKind::Clue => Color::Cyan,
        MessageKind::Warning => Color::Yellow,
        MessageKind::Verdict => Color::Magenta,
    }
}

/// Create a styled border block
pub fn styled_block<'a>(title: &str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
}

/// Title screen art
pub const LOGO: &str = r#"
╔══════════════════════════════════════════════════════╗
║                                                      ║
║     ██████╗ ███████╗████████╗███████╗ ██████╗████████╗║
║     ██╔══██╗██╔════╝╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝║
║     ██║  ██║█████╗     ██║   █████╗  ██║        ██║   ║
║     ██║  ██║██╔══╝     ██║   ██╔══╝  ██║        ██║   ║
║     ██████╔╝███████╗   ██║   ███████╗╚██████╗   ██║   ║
║     ╚═════╝ ╚══════╝   ╚═╝   ╚══════╝ ╚═════╝   ╚═╝   ║
║                                                      ║
║                 Q  U  E  S  T                        ║
║                                                      ║
║        A mansion. Seven rooms. One culprit.          ║
╚══════════════════════════════════════════════════════╝
"#;

/// Smaller logo for header
pub const SMALL_LOGO: &str = " DETECTIVE QUEST ";

/// Help text
pub const HELP_TEXT: &str = r#"
╔═══════════════════════════════════════════════╗
║                   CONTROLS                    ║
╠═══════════════════════════════════════════════╣
║  e     Go through the left door               ║
║  d     Go through the right door              ║
║  s     Stop exploring and review the notebook ║
╠═══════════════════════════════════════════════╣
║                  ACCUSATION                   ║
╠═══════════════════════════════════════════════╣
║  Type the suspect's name, Enter to accuse     ║
║  Backspace to correct                         ║
║  Two clues against the accused convict them   ║
╠═══════════════════════════════════════════════╣
║  ?     Toggle this help                       ║
║  q     Quit (title and verdict screens)       ║
║  Esc   Quit at any time                       ║
╚═══════════════════════════════════════════════╝
"#;

/// Create the main layout
pub fn create_main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),   // Header
            Constraint::Min(10),     // Main content
            Constraint::Length(1),   // Status bar
        ])
        .split(area)
        .to_vec()
}

/// Create the game content layout (room panel + main area)
pub fn create_content_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(70),
        ])
        .split(area)
        .to_vec()
}

/// Create the main area layout (case log + notebook)
pub fn create_main_area_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60),
            Constraint::Percentage(40),
        ])
        .split(area)
        .to_vec()
}

/// A rectangle of at most `width` x `height`, centered in `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
