//! Play command implementation - interactive TUI.

use super::CliError;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use despot::game::{FINAL_YEAR, HAPPINESS_CEILING};
use despot::share::{collapse_share_text, share_text};
use despot::{Ending, GameState, Phase, Scenario, ScenarioTable};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io::stdout;
use std::path::Path;
use std::time::Duration;

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the TUI fails. A missing or broken scenario file is
/// not an error here: the degrading loader turns it into an immediate
/// finale, same as the game flow everywhere else.
pub(crate) fn execute(scenarios: &Path) -> Result<(), CliError> {
    let table = ScenarioTable::load_or_empty(scenarios);
    run_tui(table)
}

/// App state for the TUI.
struct App {
    table: ScenarioTable,
    state: GameState,
}

impl App {
    fn new(table: ScenarioTable) -> Self {
        Self {
            table,
            state: GameState::new(),
        }
    }

    /// Take this year's decision, if one is open and the option exists.
    ///
    /// The engine would resolve an undefined option through its reform
    /// default; the TUI is the hosting layer, so an invalid selection is
    /// simply ignored instead.
    fn decide(&mut self, choice: u8) {
        let open = match self.state.phase(&self.table) {
            Phase::InPlay(scenario) => {
                !self.state.turn_complete && usize::from(choice) <= scenario.options.len()
            }
            Phase::Collapse(_) | Phase::Finale(_) => false,
        };
        if open {
            let _ = self.state.apply_decision(&self.table, choice);
        }
    }

    /// Move to the next year once the decision is logged.
    fn advance(&mut self) {
        if matches!(self.state.phase(&self.table), Phase::InPlay(_)) {
            let _ = self.state.advance_turn();
        }
    }

    fn restart(&mut self) {
        self.state.reset();
    }

    fn is_over(&self) -> bool {
        !matches!(self.state.phase(&self.table), Phase::InPlay(_))
    }
}

fn run_tui(table: ScenarioTable) -> Result<(), CliError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| CliError::new(e.to_string()))?;

    let mut app = App::new(table);

    loop {
        terminal
            .draw(|f| ui(f, &app))
            .map_err(|e| CliError::new(e.to_string()))?;

        if event::poll(Duration::from_millis(100)).map_err(|e| CliError::new(e.to_string()))?
            && let Event::Key(key) = event::read().map_err(|e| CliError::new(e.to_string()))?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('r') => app.restart(),
                KeyCode::Enter | KeyCode::Char(' ') => app.advance(),
                KeyCode::Char(c @ '1'..='4') => {
                    if let Some(choice) = c.to_digit(10).and_then(|d| u8::try_from(d).ok()) {
                        app.decide(choice);
                    }
                }
                _ => {}
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Happiness gauge
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0], app);
    render_happiness(f, chunks[1], app);

    // Main content - scenario and decision log
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[2]);

    match app.state.phase(&app.table) {
        Phase::InPlay(scenario) => {
            if app.state.turn_complete {
                render_interstitial(f, main_chunks[0], app);
            } else {
                render_scenario(f, main_chunks[0], scenario);
            }
        }
        Phase::Collapse(ending) => render_summary(f, main_chunks[0], app, ending, true),
        Phase::Finale(ending) => render_summary(f, main_chunks[0], app, ending, false),
    }

    render_log(f, main_chunks[1], app);
    render_footer(f, chunks[3], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let status = match app.state.phase(&app.table) {
        Phase::InPlay(_) if app.state.turn_complete => "DIRECTIVE ISSUED",
        Phase::InPlay(_) => "AWAITING DIRECTIVE",
        Phase::Collapse(_) => "REGIME COLLAPSED",
        Phase::Finale(_) => "ARCHIVE",
    };

    let title = format!(
        " STATE TERMINAL | Year {}/{FINAL_YEAR} | {status} ",
        app.state.year.min(FINAL_YEAR)
    );

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

fn render_happiness(f: &mut Frame, area: Rect, app: &App) {
    let happiness = app.state.happiness;
    let ratio = f64::from(happiness.min(HAPPINESS_CEILING)) / f64::from(HAPPINESS_CEILING);

    let color = if happiness > HAPPINESS_CEILING {
        Color::Red
    } else if happiness >= 81 {
        Color::Yellow
    } else {
        Color::Green
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Reported National Happiness "),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(ratio)
        .label(format!("{happiness}/{HAPPINESS_CEILING}"));

    f.render_widget(gauge, area);
}

fn render_scenario(f: &mut Frame, area: Rect, scenario: &Scenario) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(""));
    lines.push(Line::from(scenario.prompt.clone()));
    lines.push(Line::from(""));

    for (i, option) in scenario.options.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" [{}] ", i + 1),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::raw(option.title.clone()),
        ]));
    }

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Situation Report {} ", scenario.year)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(widget, area);
}

fn render_interstitial(f: &mut Frame, area: Rect, app: &App) {
    let last = app.state.log.last().map_or("", String::as_str);

    let lines = vec![
        Line::from(""),
        Line::from("Directive logged. State media are adjusting the narrative."),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {last}"),
            Style::default().fg(Color::Green),
        )),
        Line::from(""),
        Line::from("Press Enter when the year turns."),
    ];

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Transmitting "))
        .wrap(Wrap { trim: false });

    f.render_widget(widget, area);
}

fn render_summary(f: &mut Frame, area: Rect, app: &App, ending: Ending, collapsed: bool) {
    let (heading, heading_color) = if collapsed {
        (ending.title.to_string(), Color::Red)
    } else {
        (format!("ARCHIVE: {}", ending.title), Color::Yellow)
    };

    let share = if collapsed {
        collapse_share_text()
    } else {
        share_text(&ending, app.state.happiness)
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            heading,
            Style::default().fg(heading_color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(ending.description),
        Line::from(""),
        Line::from(format!("Rank: {}", ending.rank)),
        Line::from(format!(
            "Final happiness: {}/{HAPPINESS_CEILING}",
            app.state.happiness
        )),
        Line::from(""),
        Line::from(Span::styled("Share:", Style::default().fg(Color::Gray))),
    ];
    for share_line in share.lines() {
        lines.push(Line::from(Span::styled(
            format!("  {share_line}"),
            Style::default().fg(Color::Gray),
        )));
    }

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Final Report "))
        .wrap(Wrap { trim: false });

    f.render_widget(widget, area);
}

fn render_log(f: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .state
        .log
        .iter()
        .map(|entry| Line::from(entry.clone()))
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Decision Log "))
        .wrap(Wrap { trim: false });

    f.render_widget(widget, area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let controls = if app.is_over() {
        " [r] New reign  [q] Quit "
    } else if app.state.turn_complete {
        " [Enter] Next year  [r] Restart  [q] Quit "
    } else {
        " [1-4] Decide  [r] Restart  [q] Quit "
    };

    let footer = Paragraph::new(controls)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(footer, area);
}
