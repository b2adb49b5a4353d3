//! Custom widgets for the game UI

use crate::game::CONVICTION_THRESHOLD;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// Bar showing the evidence against the accused, with the conviction mark
pub struct EvidenceMeter {
    score: usize,
    threshold: usize,
    max: usize,
    label: String,
}

impl EvidenceMeter {
    pub fn new(label: &str, score: usize, max: usize) -> Self {
        Self {
            score,
            threshold: CONVICTION_THRESHOLD,
            max: max.max(1),
            label: label.to_string(),
        }
    }
}

impl Widget for EvidenceMeter {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 1 {
            return;
        }

        let color = if self.score >= self.threshold {
            Color::Green
        } else if self.score > 0 {
            Color::Yellow
        } else {
            Color::Red
        };

        let label = format!(
            "{}: {}/{} (needs {})",
            self.label, self.score, self.max, self.threshold
        );
        buf.set_string(area.x, area.y, &label, Style::default().fg(color));

        if area.height > 1 {
            let inner = (area.width - 2) as usize;
            let filled = (self.score.min(self.max) * inner) / self.max;
            let mark = (self.threshold.min(self.max) * inner) / self.max;
            let bar_y = area.y + 1;
            buf.set_string(area.x, bar_y, "[", Style::default());
            buf.set_string(area.x + area.width - 1, bar_y, "]", Style::default());

            for x in 0..inner {
                let (symbol, style) = if x < filled {
                    ("█", Style::default().fg(color))
                } else if x + 1 == mark {
                    ("│", Style::default().fg(Color::White))
                } else {
                    ("░", Style::default().fg(Color::DarkGray))
                };
                buf.set_string(area.x + 1 + x as u16, bar_y, symbol, style);
            }
        }
    }
}

/// ASCII art box for the verdict
pub struct DramaticBox {
    title: String,
    content: Vec<String>,
    border_color: Color,
}

impl DramaticBox {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            content: Vec::new(),
            border_color: Color::Red,
        }
    }

    pub fn content(mut self, lines: Vec<String>) -> Self {
        self.content = lines;
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }
}

impl Widget for DramaticBox {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 2 {
            return;
        }
        let style = Style::default().fg(self.border_color);
        let right = area.x + area.width - 1;
        let bottom = area.y + area.height - 1;

        buf.set_string(area.x, area.y, "╔", style);
        buf.set_string(area.x, bottom, "╚", style);
        for x in area.x + 1..right {
            buf.set_string(x, area.y, "═", style);
            buf.set_string(x, bottom, "═", style);
        }
        buf.set_string(right, area.y, "╗", style);
        buf.set_string(right, bottom, "╝", style);

        for y in area.y + 1..bottom {
            buf.set_string(area.x, y, "║", style);
            buf.set_string(right, y, "║", style);
        }

        let title = format!(" {} ", self.title);
        let title_width = title.chars().count() as u16;
        if title_width + 2 <= area.width {
            buf.set_string(area.x + (area.width - title_width) / 2, area.y, &title, style);
        }

        for (i, line) in self.content.iter().enumerate() {
            let y = area.y + 1 + i as u16;
            if y >= bottom {
                break;
            }
            buf.set_stringn(
                area.x + 2,
                y,
                line,
                area.width.saturating_sub(4) as usize,
                Style::default().fg(Color::White),
            );
        }
    }
}
