//! Main application state and rendering

use crate::config::GameConfig;
use crate::data::SUSPECTS;
use crate::game::{verdict_text, CaseOutcome, CasePhase, Game, GameAction};
use crate::tui::widgets::{DramaticBox, EvidenceMeter};
use crate::tui::{centered_rect, kind_color, styled_block, Theme, HELP_TEXT, LOGO, SMALL_LOGO};
use crate::tui::{create_content_layout, create_main_area_layout, create_main_layout};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;

/// Application state
pub struct App {
    pub game: Option<Game>,
    pub config: GameConfig,
    pub theme: Theme,
    pub running: bool,
    pub show_help: bool,
    pub current_screen: Screen,
    pub input_buffer: String,
    pub input_mode: InputMode,
    pub cases_closed: u32,
}

/// Current screen being displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Title,
    Playing,
    Accusation,
    Verdict,
}

/// Input mode for the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Single keys drive navigation
    Normal,
    /// Typing the accused's name
    Accusation,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        Self {
            game: None,
            config,
            theme: Theme::default(),
            running: true,
            show_help: false,
            current_screen: Screen::Title,
            input_buffer: String::new(),
            input_mode: InputMode::Normal,
            cases_closed: 0,
        }
    }

    /// Handle keyboard input. Returns `false` once the player quits.
    pub fn handle_input(&mut self) -> crate::Result<bool> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    return Ok(true);
                }

                if key.code == KeyCode::Esc {
                    if self.show_help {
                        self.show_help = false;
                    } else {
                        self.quit();
                        return Ok(false);
                    }
                    return Ok(true);
                }

                // Typing the accusation
                if self.input_mode == InputMode::Accusation {
                    match key.code {
                        KeyCode::Enter => self.submit_accusation()?,
                        KeyCode::Backspace => {
                            self.input_buffer.pop();
                        }
                        KeyCode::Char(c) => self.input_buffer.push(c),
                        _ => {}
                    }
                    return Ok(true);
                }

                match key.code {
                    KeyCode::Char('?') => {
                        self.show_help = !self.show_help;
                    }
                    KeyCode::Char('q') if self.current_screen != Screen::Playing => {
                        self.quit();
                        return Ok(false);
                    }
                    KeyCode::Enter if self.current_screen == Screen::Title => self.start_case(),
                    KeyCode::Char('n') if self.current_screen == Screen::Verdict => {
                        self.start_case()
                    }
                    KeyCode::Char(c) if self.current_screen == Screen::Playing => {
                        self.navigate(c)?;
                    }
                    _ => {}
                }
            }
        }
        Ok(true)
    }

    /// Close the running case, if any, and stop the main loop
    pub fn quit(&mut self) {
        if let Some(game) = self.game.take() {
            game.close();
        }
        self.running = false;
    }

    fn start_case(&mut self) {
        if let Some(previous) = self.game.take() {
            previous.close();
            self.cases_closed += 1;
        }
        self.game = Some(Game::new(&self.config));
        self.input_buffer.clear();
        self.input_mode = InputMode::Normal;
        self.sync_screen();
    }

    fn navigate(&mut self, key: char) -> crate::Result<()> {
        if let Some(game) = self.game.as_mut() {
            game.execute_action(GameAction::Navigate(key.to_string()))?;
        }
        self.sync_screen();
        Ok(())
    }

    fn submit_accusation(&mut self) -> crate::Result<()> {
        let name = std::mem::take(&mut self.input_buffer);
        if let Some(game) = self.game.as_mut() {
            game.execute_action(GameAction::Accuse(name))?;
        }
        self.sync_screen();
        Ok(())
    }

    /// Pick the screen matching the case phase
    fn sync_screen(&mut self) {
        let Some(game) = self.game.as_ref() else {
            self.current_screen = Screen::Title;
            return;
        };
        self.current_screen = match game.phase() {
            CasePhase::Judging => Screen::Accusation,
            CasePhase::Done(_) => Screen::Verdict,
            _ => Screen::Playing,
        };
        self.input_mode = if self.current_screen == Screen::Accusation {
            InputMode::Accusation
        } else {
            InputMode::Normal
        };
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        match self.current_screen {
            Screen::Title => self.render_title(frame),
            Screen::Playing => self.render_game(frame),
            Screen::Accusation => {
                self.render_game(frame);
                self.render_accusation_overlay(frame);
            }
            Screen::Verdict => {
                self.render_game(frame);
                self.render_verdict_overlay(frame);
            }
        }

        if self.show_help {
            self.render_help_overlay(frame);
        }
    }

    fn render_title(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Clear, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(16),
                Constraint::Length(3),
            ])
            .split(area);

        let logo = Paragraph::new(LOGO)
            .style(Style::default().fg(self.theme.accent))
            .alignment(Alignment::Center);
        frame.render_widget(logo, chunks[0]);

        let mut prompt = vec![Line::from(vec![
            Span::styled(
                "Enter",
                Style::default()
                    .fg(self.theme.success)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" begin the investigation   "),
            Span::styled("q", Style::default().fg(self.theme.alert).add_modifier(Modifier::BOLD)),
            Span::raw(" quit   "),
            Span::styled("?", Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD)),
            Span::raw(" help"),
        ])];
        if self.cases_closed > 0 {
            prompt.push(Line::from(format!("Cases closed this evening: {}", self.cases_closed)));
        }
        frame.render_widget(Paragraph::new(prompt).alignment(Alignment::Center), chunks[1]);
    }

    fn render_game(&self, frame: &mut Frame) {
        let Some(game) = self.game.as_ref() else {
            return;
        };
        let area = frame.area();
        let layout = create_main_layout(area);

        self.render_header(frame, layout[0], game);

        let content_layout = create_content_layout(layout[1]);
        self.render_room_panel(frame, content_layout[0], game);

        let main_layout = create_main_area_layout(content_layout[1]);
        self.render_messages(frame, main_layout[0], game);
        self.render_notebook(frame, main_layout[1], game);

        self.render_status_bar(frame, layout[2], game);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, game: &Game) {
        let header_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(21),
                Constraint::Min(20),
                Constraint::Length(18),
            ])
            .split(area);

        let border = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border));

        let logo = Paragraph::new(SMALL_LOGO)
            .style(Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD))
            .block(border.clone());
        frame.render_widget(logo, header_layout[0]);

        let room = Paragraph::new(game.resolver.current_room().name().to_string())
            .style(Style::default().fg(self.theme.header))
            .alignment(Alignment::Center)
            .block(border.clone());
        frame.render_widget(room, header_layout[1]);

        let clues = Paragraph::new(format!(" Clues: {} ", game.resolver.ledger().len()))
            .style(Style::default().fg(self.theme.fg))
            .alignment(Alignment::Right)
            .block(border);
        frame.render_widget(clues, header_layout[2]);
    }

    fn render_room_panel(&self, frame: &mut Frame, area: Rect, game: &Game) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),
                Constraint::Min(6),
            ])
            .split(area);

        let room = game.resolver.current_room();
        let depth = game.resolver.path().len();
        let room_text = vec![
            Line::from(Span::styled(
                room.name().to_string(),
                Style::default().fg(self.theme.header).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("Depth: {}", depth)),
            Line::from(if room.is_dead_end() { "No doors lead on." } else { "" }),
        ];
        frame.render_widget(
            Paragraph::new(room_text).block(styled_block("Room", &self.theme)),
            chunks[0],
        );

        let mut exits: Vec<ListItem> = Vec::new();
        if *game.phase() == CasePhase::Exploring {
            for (direction, name) in game.resolver.available_directions() {
                exits.push(ListItem::new(format!(
                    "  [{}] Go {} ({})",
                    direction.key(),
                    direction,
                    name
                )));
            }
            exits.push(ListItem::new("  [s] Stop exploring"));
        } else {
            exits.push(ListItem::new("  Exploration over"));
        }
        exits.push(ListItem::new("  ───────────────"));
        exits.push(ListItem::new("  [?] Help   [Esc] Quit"));

        let list = List::new(exits).block(styled_block("Exits", &self.theme));
        frame.render_widget(list, chunks[1]);
    }

    fn render_messages(&self, frame: &mut Frame, area: Rect, game: &Game) {
        let visible_lines = area.height.saturating_sub(2) as usize;
        let start = game.message_log.len().saturating_sub(visible_lines);
        let lines: Vec<Line> = game.message_log[start..]
            .iter()
            .map(|msg| {
                let style = Style::default().fg(kind_color(&msg.kind));
                Line::from(vec![
                    Span::styled(
                        format!("{} ", msg.timestamp.format("%H:%M:%S")),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(format!("{} ", msg.kind.symbol()), style),
                    Span::styled(msg.message.clone(), style),
                ])
            })
            .collect();

        let log = Paragraph::new(lines)
            .block(styled_block("Case Log", &self.theme))
            .wrap(Wrap { trim: false });
        frame.render_widget(log, area);
    }

    fn render_notebook(&self, frame: &mut Frame, area: Rect, game: &Game) {
        let notebook = game.notebook();
        let items: Vec<ListItem> = if notebook.is_empty() {
            vec![ListItem::new("  No clues yet.")]
        } else {
            notebook
                .into_iter()
                .map(|clue| ListItem::new(format!(" - {}", clue)))
                .collect()
        };
        let list = List::new(items)
            .style(Style::default().fg(self.theme.fg))
            .block(styled_block("Notebook (alphabetical)", &self.theme));
        frame.render_widget(list, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, game: &Game) {
        let status_text = format!(" {} | Press ? for help ", game.check_status());
        let status = Paragraph::new(status_text)
            .style(Style::default().fg(self.theme.fg).bg(Color::DarkGray));
        frame.render_widget(status, area);
    }

    fn render_accusation_overlay(&self, frame: &mut Frame) {
        let popup_area = centered_rect(60, 12, frame.area());
        frame.render_widget(Clear, popup_area);

        let suspects = SUSPECTS.join(", ");
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Who is the culprit?",
                Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("Suspects: {}", suspects)),
            Line::from(""),
            Line::from(vec![
                Span::raw("> "),
                Span::styled(self.input_buffer.clone(), Style::default().fg(self.theme.fg)),
                Span::styled("█", Style::default().fg(self.theme.accent)),
            ]),
            Line::from(""),
            Line::from(Span::styled("Enter to accuse", Style::default().fg(Color::DarkGray))),
        ];

        let prompt = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(" Accusation ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.accent)),
            );
        frame.render_widget(prompt, popup_area);
    }

    fn render_verdict_overlay(&self, frame: &mut Frame) {
        let Some(game) = self.game.as_ref() else {
            return;
        };
        let popup_area = centered_rect(72, 11, frame.area());
        frame.render_widget(Clear, popup_area);

        let (title, color, lines) = match game.phase() {
            CasePhase::Done(CaseOutcome::Judged(verdict)) => {
                let color = if verdict.conclusive { self.theme.success } else { self.theme.alert };
                let title = if verdict.conclusive { "CASE CLOSED" } else { "SUSPECT ESCAPES" };
                (
                    title,
                    color,
                    vec![format!("You accuse: {}", verdict.accused), verdict_text(verdict)],
                )
            }
            _ => (
                "CASE UNSOLVED",
                self.theme.warning,
                vec!["No clues were collected.".to_string(), "Nobody can be accused.".to_string()],
            ),
        };

        let mut content = lines;
        content.push(String::new());
        content.push("n: new case   q: quit".to_string());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(7), Constraint::Length(2)])
            .split(popup_area);

        frame.render_widget(
            DramaticBox::new(title).content(content).border_color(color),
            chunks[0],
        );

        if let Some(verdict) = game.resolver.verdict() {
            let meter = EvidenceMeter::new("Evidence", verdict.score, game.resolver.ledger().len());
            frame.render_widget(meter, chunks[1]);
        }
    }

    fn render_help_overlay(&self, frame: &mut Frame) {
        let popup_area = centered_rect(51, 21, frame.area());
        frame.render_widget(Clear, popup_area);

        let help = Paragraph::new(HELP_TEXT)
            .style(Style::default().fg(self.theme.fg))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.accent)),
            );
        frame.render_widget(help, popup_area);
    }
}
