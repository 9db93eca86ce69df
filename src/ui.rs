use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use menu_sheet::{active_section, needs_reveal, Extent, LoadedMenu, MenuItem};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};
use std::io;

const PAGE_STEP: usize = 20;
const SEPARATOR: &str = " │ ";

pub struct App {
    pub menu: LoadedMenu,
    /// Items in group order (what the table shows)
    pub rows: Vec<MenuItem>,
    /// Row index where each category starts, one per group
    pub section_starts: Vec<usize>,
    pub state: TableState,
    pub show_detail: bool,
    /// First category label drawn in the strip
    strip_start: usize,
}

impl App {
    pub fn new(menu: LoadedMenu) -> Self {
        let mut rows = Vec::new();
        let mut section_starts = Vec::new();
        for group in &menu.groups {
            section_starts.push(rows.len());
            rows.extend(group.items.iter().cloned());
        }

        let mut state = TableState::default();
        if !rows.is_empty() {
            state.select(Some(0));
        }

        Self {
            menu,
            rows,
            section_starts,
            state,
            show_detail: false,
            strip_start: 0,
        }
    }

    pub fn toggle_detail(&mut self) {
        self.show_detail = !self.show_detail;
    }

    pub fn selected_item(&self) -> Option<&MenuItem> {
        self.state.selected().and_then(|i| self.rows.get(i))
    }

    /// Category under the cursor: the last one whose first row is at or above it
    pub fn active_category(&self) -> Option<usize> {
        let tops: Vec<f64> = self.section_starts.iter().map(|&s| s as f64).collect();
        let cursor = self.state.selected().unwrap_or(0) as f64;
        active_section(&tops, cursor, 0.0)
    }

    pub fn jump_to_category(&mut self, index: usize) {
        if let Some(&start) = self.section_starts.get(index) {
            self.state.select(Some(start));
        }
    }

    pub fn next_category(&mut self) {
        let count = self.section_starts.len();
        if count == 0 {
            return;
        }
        let next = match self.active_category() {
            Some(i) if i + 1 < count => i + 1,
            _ => 0,
        };
        self.jump_to_category(next);
    }

    pub fn previous_category(&mut self) {
        let count = self.section_starts.len();
        if count == 0 {
            return;
        }
        let prev = match self.active_category() {
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        };
        self.jump_to_category(prev);
    }

    pub fn next(&mut self) {
        let len = self.rows.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i < len - 1 => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.rows.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    pub fn page_down(&mut self) {
        let len = self.rows.len();
        if len == 0 {
            return;
        }
        let i = self.state.selected().map_or(0, |i| (i + PAGE_STEP).min(len - 1));
        self.state.select(Some(i));
    }

    pub fn page_up(&mut self) {
        let i = self.state.selected().map_or(0, |i| i.saturating_sub(PAGE_STEP));
        self.state.select(Some(i));
    }

    /// Keep the active label inside a strip `width` cells wide,
    /// shifting the first visible label only when it is clipped.
    fn reveal_active(&mut self, width: usize) {
        let Some(active) = self.active_category() else {
            return;
        };
        if active < self.strip_start {
            self.strip_start = active;
            return;
        }

        let strip = Extent::new(0.0, width as f64);
        loop {
            let link = self.label_extent(active);
            if !needs_reveal(link, strip) || self.strip_start == active {
                break;
            }
            self.strip_start += 1;
        }
    }

    /// Extent of label `index` when drawing starts at `strip_start`
    fn label_extent(&self, index: usize) -> Extent {
        let sep = SEPARATOR.chars().count();
        let mut start = 0;
        for group in &self.menu.groups[self.strip_start..index] {
            start += group.category.chars().count() + sep;
        }
        let len = self.menu.groups[index].category.chars().count();
        Extent::new(start as f64, (start + len) as f64)
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    finish_viewer(res)
}

/// Surface an event-loop error once the terminal is restored
fn finish_viewer(res: io::Result<()>) -> Result<()> {
    res.context("terminal viewer failed")
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Enter => app.toggle_detail(),
                KeyCode::Tab | KeyCode::Right => app.next_category(),
                KeyCode::BackTab | KeyCode::Left => app.previous_category(),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next(),
                KeyCode::Up | KeyCode::Char('k') => app.previous(),
                KeyCode::PageDown => app.page_down(),
                KeyCode::PageUp => app.page_up(),
                KeyCode::Home => app.state.select(Some(0)),
                KeyCode::End => {
                    if !app.rows.is_empty() {
                        app.state.select(Some(app.rows.len() - 1));
                    }
                }
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Category strip
            Constraint::Min(0),    // Items
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_strip(f, chunks[0], app);

    if app.show_detail {
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);

        render_table(f, content_chunks[0], app);
        render_detail_panel(f, content_chunks[1], app);
    } else {
        render_table(f, chunks[1], app);
    }

    render_status_bar(f, chunks[2], app);
}

fn render_strip(f: &mut Frame, area: Rect, app: &mut App) {
    app.reveal_active(area.width.saturating_sub(2) as usize);
    let active = app.active_category();

    let mut spans = vec![];
    for (i, group) in app.menu.groups.iter().enumerate().skip(app.strip_start) {
        if i > app.strip_start {
            spans.push(Span::raw(SEPARATOR));
        }
        let style = if Some(i) == active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(group.category.as_str(), style));
    }

    let strip = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(strip, area);
}

fn render_table(f: &mut Frame, area: Rect, app: &mut App) {
    let header_cells = ["Nom", "Preu", "Categoria"].iter().map(|h| {
        Cell::from(*h).style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    });
    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows = app.rows.iter().map(|item| {
        Row::new(vec![
            Cell::from(truncate(&item.name, 48)),
            Cell::from(item.price.as_str()).style(Style::default().fg(Color::Green)),
            Cell::from(item.category.as_str()).style(Style::default().fg(Color::DarkGray)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(55),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(" Carta "))
    .highlight_style(Style::default().bg(Color::Blue).add_modifier(Modifier::BOLD))
    .highlight_symbol("▶ ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn render_detail_panel(f: &mut Frame, area: Rect, app: &App) {
    let lines = match app.selected_item() {
        Some(item) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    item.name.as_str(),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(vec![Span::raw("Preu: "), Span::styled(item.price.as_str(), Style::default().fg(Color::Green))]),
                Line::from(vec![Span::raw("Categoria: "), Span::raw(item.category.as_str())]),
                Line::from(""),
            ];
            if item.has_description() {
                lines.push(Line::from(item.description.as_str()));
            }
            lines
        }
        None => vec![Line::from("No item selected")],
    };

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Detall "));

    f.render_widget(panel, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let position = app.state.selected().map_or(0, |i| i + 1);
    let mut spans = vec![
        Span::styled(
            format!("{}/{}", position, app.rows.len()),
            Style::default().fg(Color::White),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("{} categories", app.menu.groups.len()),
            Style::default().fg(Color::White),
        ),
    ];
    if app.menu.is_fallback {
        spans.push(Span::raw("  |  "));
        spans.push(Span::styled("fallback menu", Style::default().fg(Color::Red)));
    }
    spans.push(Span::raw("  |  ↑↓ move  Tab category  Enter detail  q quit"));

    let status = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let cut: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", cut)
    } else {
        s.to_string()
    }
}
