//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
    Frame,
};

use crate::panel::TextField;

use super::app::App;

/// Renders the whole shell to the frame
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(ShellUI::new(app), area);
}

/// Sidebar plus active calculator panel
#[derive(Debug)]
pub struct ShellUI<'a> {
    app: &'a App,
}

impl<'a> ShellUI<'a> {
    /// Creates the shell widget
    #[must_use]
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }

    /// Splits into sidebar and content columns
    fn create_horizontal_layout(&self, area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(30)])
            .split(area)
            .to_vec()
    }

    /// Splits the content column: heading, one row per field, readout, help
    fn create_panel_layout(&self, area: Rect) -> Vec<Rect> {
        let fields = self.app.panel().fields().len();
        let mut constraints = vec![Constraint::Length(3)];
        constraints.extend(std::iter::repeat(Constraint::Length(3)).take(fields));
        constraints.push(Constraint::Length(3));
        constraints.push(Constraint::Min(0));
        Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area)
            .to_vec()
    }

    fn render_sidebar(&self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = self
            .app
            .calculators()
            .iter()
            .enumerate()
            .map(|(i, calc)| {
                let selected = i == self.app.selected();
                let marker = if selected { "▶ " } else { "  " };
                let style = if selected {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("F{} ", i + 1), Style::default().fg(Color::Yellow)),
                    Span::styled(format!("{marker}{}", calc.name), style),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" Calculators ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }

    fn render_heading(&self, area: Rect, buf: &mut Buffer) {
        let calc = self.app.current();
        Paragraph::new(vec![
            Line::from(Span::styled(
                calc.title,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(calc.hint, Style::default().fg(Color::DarkGray))),
        ])
        .wrap(Wrap { trim: true })
        .render(area, buf);
    }

    fn render_field(
        &self,
        label: &str,
        field: &TextField,
        focused: bool,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let line = if focused {
            cursor_line(field)
        } else {
            Line::from(Span::raw(field.text().to_string()))
        };
        let border = if focused { Color::Cyan } else { Color::DarkGray };

        Paragraph::new(line)
            .block(
                Block::default()
                    .title(format!(" {label} "))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            )
            .render(area, buf);
    }

    fn render_readout(&self, area: Rect, buf: &mut Buffer) {
        let panel = self.app.panel();
        let readout = panel.readout();
        let style = if matches!(panel.outcome(), Some(Ok(_))) {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Red)
        };

        Paragraph::new(Span::styled(readout.to_string(), style))
            .block(
                Block::default()
                    .title(" Result ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let spans: Vec<Span> = HELP_SHORTCUTS
            .iter()
            .flat_map(|(key, desc)| {
                [
                    Span::styled(*key, Style::default().fg(Color::Yellow)),
                    Span::styled(format!(" {desc}  "), Style::default().fg(Color::DarkGray)),
                ]
            })
            .collect();
        Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

impl Widget for ShellUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(APP_TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let columns = self.create_horizontal_layout(area);
        if columns.len() < 2 {
            return;
        }
        self.render_sidebar(columns[0], buf);

        let panel = self.app.panel();
        let rows = self.create_panel_layout(columns[1]);
        let fields = panel.fields().len();
        if rows.len() < fields + 3 {
            return;
        }

        self.render_heading(rows[0], buf);
        let labels = panel.calculator().fields.iter();
        for (i, (label, field)) in labels.zip(panel.fields()).enumerate() {
            self.render_field(label, field, i == panel.focus(), rows[i + 1], buf);
        }
        self.render_readout(rows[fields + 1], buf);
        self.render_help(rows[fields + 2], buf);
    }
}

/// Text with the char under the cursor highlighted
fn cursor_line(field: &TextField) -> Line<'static> {
    let text = field.text();
    let split = text
        .char_indices()
        .nth(field.cursor())
        .map_or(text.len(), |(i, _)| i);
    let (before, after) = text.split_at(split);
    let mut rest = after.chars();
    let cursor_char = rest.next().unwrap_or(' ');

    Line::from(vec![
        Span::raw(before.to_string()),
        Span::styled(
            cursor_char.to_string(),
            Style::default().bg(Color::White).fg(Color::Black),
        ),
        Span::raw(rest.as_str().to_string()),
    ])
}

/// Window title
pub const APP_TITLE: &str = " Electronics Calculator ";

/// Width of the calculator list column
pub const SIDEBAR_WIDTH: u16 = 28;

/// Key hints shown under the readout
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("Tab/↓", "Next field"),
    ("⇧Tab/↑", "Prev field"),
    ("PgUp/PgDn", "Calculator"),
    ("Esc", "Clear"),
    ("Ctrl+U", "Clear field"),
    ("Ctrl+C", "Quit"),
];
