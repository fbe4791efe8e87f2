//! Browser screen - transcript list with deletion

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::api::Transcript;

/// Browser screen state
///
/// The transcript list itself lives in the app state snapshot; this only
/// tracks the cursor and the pending delete confirmation.
pub struct BrowserScreen {
    state: ListState,
    pending_delete: Option<i64>,
}

impl Default for BrowserScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserScreen {
    pub fn new() -> Self {
        Self {
            state: ListState::default(),
            pending_delete: None,
        }
    }

    pub fn draw(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        transcripts: &[Transcript],
        error: Option<&str>,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),    // List
                Constraint::Length(2), // Error
                Constraint::Length(3), // Help
            ])
            .split(area);

        if self.state.selected().is_none() && !transcripts.is_empty() {
            self.state.select(Some(0));
        }

        // Transcript list
        let items: Vec<ListItem> = transcripts
            .iter()
            .map(|transcript| {
                let date = transcript.created_at.format("%Y-%m-%d %H:%M").to_string();

                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:>5}", transcript.id),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw("  "),
                    Span::styled(date, Style::default().fg(Color::DarkGray)),
                    Span::raw("  "),
                    Span::styled(transcript.preview(50), Style::default().fg(Color::White)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(format!(" Transcripts ({}) ", transcripts.len()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, chunks[0], &mut self.state);

        // Error line
        if let Some(message) = error {
            let error_widget = Paragraph::new(Line::from(vec![
                Span::styled("error: ", Style::default().fg(Color::Red).bold()),
                Span::styled(message, Style::default().fg(Color::Red)),
                Span::styled("  (Esc to dismiss)", Style::default().fg(Color::DarkGray)),
            ]));
            frame.render_widget(error_widget, chunks[1]);
        }

        // Help bar
        let help = Paragraph::new(Line::from(vec![
            Span::styled(" ↑/↓ ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Navigate  "),
            Span::styled(" Enter ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" View  "),
            Span::styled(" x ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Delete  "),
            Span::styled(" r ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Refresh  "),
            Span::styled(" d ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Dashboard  "),
            Span::styled(" Esc ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Back"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(help, chunks[2]);

        // Confirmation popup over everything else
        if let Some(id) = self.pending_delete {
            draw_confirm_popup(frame, area, id);
        }
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }

        let i = match self.state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }

        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn selected<'a>(&self, transcripts: &'a [Transcript]) -> Option<&'a Transcript> {
        self.state.selected().and_then(|i| transcripts.get(i))
    }

    /// Keep the cursor valid after the list changed
    pub fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.state.select(None);
        } else if let Some(i) = self.state.selected() {
            if i >= len {
                self.state.select(Some(len - 1));
            }
        }
    }

    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn pending_delete(&self) -> Option<i64> {
        self.pending_delete
    }
}

/// Centered y/n confirmation popup for deletion
fn draw_confirm_popup(frame: &mut Frame, area: Rect, id: i64) {
    let popup_width = 46.min(area.width);
    let popup_height = 5.min(area.height);
    let popup_area = Rect {
        x: (area.width.saturating_sub(popup_width)) / 2,
        y: (area.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    };

    frame.render_widget(Clear, popup_area);

    let text = vec![
        Line::from(format!("Delete transcript {}?", id)),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y]", Style::default().fg(Color::Red).bold()),
            Span::raw(" delete    "),
            Span::styled("[n]", Style::default().fg(Color::Green).bold()),
            Span::raw(" keep"),
        ]),
    ];

    let popup = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .title(" Confirm ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(popup, popup_area);
}
