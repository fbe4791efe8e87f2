//! Viewer screen - display a transcript's corrected and raw text

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
};

use crate::api::Transcript;
use crate::config::Settings;

/// Viewer screen state
pub struct ViewerScreen {
    transcript: Option<Transcript>,
    scroll_offset: usize,
    content_height: usize,
}

impl Default for ViewerScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewerScreen {
    pub fn new() -> Self {
        Self {
            transcript: None,
            scroll_offset: 0,
            content_height: 0,
        }
    }

    pub fn set_transcript(&mut self, transcript: Transcript) {
        self.transcript = Some(transcript);
        self.scroll_offset = 0;
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect, settings: &Settings, error: Option<&str>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Min(5),    // Text
                Constraint::Length(2), // Error
                Constraint::Length(3), // Help
            ])
            .split(area);

        // Header
        let header_text = if let Some(ref transcript) = self.transcript {
            vec![
                Line::from(vec![Span::styled(
                    format!("Transcript {}", transcript.id),
                    Style::default().fg(Color::White).bold(),
                )]),
                Line::from(vec![
                    Span::styled(
                        transcript.created_at.format("%Y-%m-%d %H:%M").to_string(),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(" • "),
                    Span::styled(
                        transcript
                            .audio_filename
                            .as_deref()
                            .unwrap_or("no audio file"),
                        Style::default().fg(Color::Cyan),
                    ),
                ]),
            ]
        } else {
            vec![Line::from("No transcript selected")]
        };

        let header = Paragraph::new(header_text).block(
            Block::default()
                .title(" Transcript ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
        frame.render_widget(header, chunks[0]);

        // Corrected text, optionally followed by the raw model output
        let mut lines: Vec<Line> = Vec::new();
        if let Some(ref transcript) = self.transcript {
            lines.push(Line::from(Span::styled(
                "Corrected",
                Style::default().fg(Color::Green).bold(),
            )));
            for line in transcript.corrected_text.lines() {
                lines.push(Line::from(line));
            }
            if transcript.corrected_text.is_empty() {
                lines.push(Line::from(Span::styled(
                    "(empty)",
                    Style::default().fg(Color::DarkGray),
                )));
            }

            if settings.tui.show_raw_text {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Raw",
                    Style::default().fg(Color::Yellow).bold(),
                )));
                for line in transcript.converted_text.lines() {
                    lines.push(Line::from(line));
                }
                if transcript.converted_text.is_empty() {
                    lines.push(Line::from(Span::styled(
                        "(empty)",
                        Style::default().fg(Color::DarkGray),
                    )));
                }
            }
        }

        self.content_height = lines.len();

        let text_area = chunks[1];
        let visible_height = text_area.height.saturating_sub(2) as usize; // Account for borders

        let text = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset as u16, 0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            );
        frame.render_widget(text, text_area);

        // Scrollbar
        if self.content_height > visible_height {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"));

            let mut scrollbar_state = ScrollbarState::new(self.content_height)
                .position(self.scroll_offset)
                .viewport_content_length(visible_height);

            frame.render_stateful_widget(
                scrollbar,
                text_area.inner(Margin {
                    horizontal: 0,
                    vertical: 1,
                }),
                &mut scrollbar_state,
            );
        }

        // Error line
        if let Some(message) = error {
            let error_widget = Paragraph::new(Line::from(vec![
                Span::styled("error: ", Style::default().fg(Color::Red).bold()),
                Span::styled(message, Style::default().fg(Color::Red)),
            ]));
            frame.render_widget(error_widget, chunks[2]);
        }

        // Help bar
        let help = Paragraph::new(Line::from(vec![
            Span::styled(" ↑/↓ ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Scroll  "),
            Span::styled(
                " PgUp/PgDn ",
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ),
            Span::raw(" Page  "),
            Span::styled(" g/G ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Top/Bottom  "),
            Span::styled(" Esc ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Back"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(help, chunks[3]);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.scroll_offset < self.content_height.saturating_sub(1) {
            self.scroll_offset += 1;
        }
    }

    pub fn page_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(10);
    }

    pub fn page_down(&mut self) {
        self.scroll_offset = (self.scroll_offset + 10).min(self.content_height.saturating_sub(1));
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.content_height.saturating_sub(1);
    }
}
