//! Dashboard screen - recorder status and latest transcript

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::api::Transcript;
use crate::state::RecorderPhase;

/// Dashboard screen state
pub struct DashboardScreen {}

impl Default for DashboardScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardScreen {
    pub fn new() -> Self {
        Self {}
    }

    pub fn draw(
        &self,
        frame: &mut Frame,
        area: Rect,
        phase: &RecorderPhase,
        latest: Option<&Transcript>,
        error: Option<&str>,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(6), // Status
                Constraint::Min(5),    // Latest transcript
                Constraint::Length(2), // Error
                Constraint::Length(3), // Help
            ])
            .split(area);

        // Title
        let title = Paragraph::new("dictate")
            .style(Style::default().fg(Color::Cyan).bold())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(title, chunks[0]);

        // Recorder status
        let status_text = match phase {
            RecorderPhase::Idle => vec![
                Line::from(vec![
                    Span::raw("Status: "),
                    Span::styled("Not Recording", Style::default().fg(Color::Gray)),
                ]),
                Line::from(""),
                Line::from(Span::styled(
                    "Press [r] to start recording",
                    Style::default().fg(Color::DarkGray),
                )),
            ],
            RecorderPhase::Recording { .. } => {
                let elapsed = phase.elapsed_secs().unwrap_or(0);
                let minutes = elapsed / 60;
                let seconds = elapsed % 60;

                vec![
                    Line::from(vec![
                        Span::raw("Status: "),
                        Span::styled("● Recording", Style::default().fg(Color::Red).bold()),
                    ]),
                    Line::from(vec![
                        Span::raw("Duration: "),
                        Span::styled(
                            format!("{:02}:{:02}", minutes, seconds),
                            Style::default().fg(Color::Yellow),
                        ),
                    ]),
                    Line::from(""),
                    Line::from(Span::styled(
                        "Press [r] to stop and transcribe",
                        Style::default().fg(Color::DarkGray),
                    )),
                ]
            }
            RecorderPhase::Processing => vec![
                Line::from(vec![
                    Span::raw("Status: "),
                    Span::styled("Transcribing...", Style::default().fg(Color::Yellow)),
                ]),
                Line::from(""),
                Line::from(Span::styled(
                    "Uploading audio and waiting for the server",
                    Style::default().fg(Color::DarkGray),
                )),
            ],
        };

        let status_widget = Paragraph::new(status_text).block(
            Block::default()
                .title(" Recorder ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
        frame.render_widget(status_widget, chunks[1]);

        // Latest transcript
        let latest_text = match latest {
            Some(transcript) => vec![
                Line::from(vec![
                    Span::styled(
                        format!("#{} ", transcript.id),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::styled(
                        transcript.created_at.format("%Y-%m-%d %H:%M").to_string(),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
                Line::from(""),
                Line::from(transcript.corrected_text.as_str()),
            ],
            None => vec![
                Line::from("No transcripts yet."),
                Line::from(""),
                Line::from("Record something and it will show up here."),
            ],
        };

        let latest_widget = Paragraph::new(latest_text).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(" Latest Transcript ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(latest_widget, chunks[2]);

        // Error line
        if let Some(message) = error {
            let error_widget = Paragraph::new(Line::from(vec![
                Span::styled("error: ", Style::default().fg(Color::Red).bold()),
                Span::styled(message, Style::default().fg(Color::Red)),
                Span::styled("  (Esc to dismiss)", Style::default().fg(Color::DarkGray)),
            ]));
            frame.render_widget(error_widget, chunks[3]);
        }

        // Help bar
        let help = Paragraph::new(Line::from(vec![
            Span::styled(" [r] ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Record  "),
            Span::styled(" [l] ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Transcripts  "),
            Span::styled(" [?] ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Help  "),
            Span::styled(" [q] ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Quit"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(help, chunks[4]);
    }
}
