//! mdv-cli - preview a markdown file in the terminal, or export it.
//!
//! ```bash
//! mdv-cli README.md
//! mdv-cli --theme light README.md
//! mdv-cli --output html README.md > readme.html
//! mdv-cli --theme light --save README.md
//! ```

mod preview;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use mdv_config::Config;
use mdv_engine::{StyleConfig, StyleKey, Theme, render_markdown, to_html};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::{
    io::{Stdout, stdout},
    path::{Path, PathBuf},
};
use tracing_subscriber::EnvFilter;

/// A terminal markdown viewer
#[derive(Parser, Debug)]
#[command(name = "mdv-cli", version, about, long_about = None)]
struct Cli {
    /// Markdown file to view
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Colour theme; overrides the config file
    #[arg(long)]
    theme: Option<Theme>,

    /// Config file to use instead of ~/.config/mdv/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// What to produce
    #[arg(long, value_enum, default_value_t = Output::Preview)]
    output: Output,

    /// Write the chosen theme back to the config file
    #[arg(long)]
    save: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    /// Interactive terminal preview
    Preview,
    /// HTML fragment on stdout
    Html,
    /// Rendered node tree as JSON on stdout
    Json,
}

/// Line and character counts shown in the footer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Stats {
    lines: usize,
    characters: usize,
}

impl Stats {
    fn of(text: &str) -> Self {
        Self {
            lines: text.split('\n').count(),
            characters: text.chars().count(),
        }
    }
}

struct App {
    path: PathBuf,
    styles: StyleConfig,
    lines: Vec<Line<'static>>,
    stats: Stats,
    scroll: usize,
    /// Height of the content area at the last draw.
    page: usize,
}

impl App {
    fn new(path: PathBuf, styles: StyleConfig) -> Result<Self> {
        let mut app = Self {
            path,
            styles,
            lines: vec![],
            stats: Stats::default(),
            scroll: 0,
            page: 1,
        };
        app.reload()?;
        Ok(app)
    }

    fn reload(&mut self) -> Result<()> {
        let text = read_document(&self.path)?;
        self.show(&text);
        Ok(())
    }

    fn show(&mut self, text: &str) {
        self.lines = preview::to_lines(&render_markdown(text, &self.styles));
        self.stats = Stats::of(text);
        self.scroll = self.scroll.min(self.max_scroll());
    }

    fn max_scroll(&self) -> usize {
        self.lines.len().saturating_sub(self.page)
    }

    fn scroll_by(&mut self, delta: isize) {
        self.scroll = self
            .scroll
            .saturating_add_signed(delta)
            .min(self.max_scroll());
    }

    fn page_delta(&self) -> isize {
        isize::try_from(self.page.max(1)).unwrap_or(isize::MAX)
    }

    fn top(&mut self) {
        self.scroll = 0;
    }

    fn bottom(&mut self) {
        self.scroll = self.max_scroll();
    }
}

fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            let path = Config::expand_path(path).unwrap_or_else(|| path.to_path_buf());
            Config::load_from_path(&path)?
                .with_context(|| format!("Config file {} not found", path.display()))
        }
        None => Ok(Config::load()?.unwrap_or_default()),
    }
}

fn save_config(config: &Config, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let path = Config::expand_path(path).unwrap_or_else(|| path.to_path_buf());
            config
                .save_to_path(&path)
                .with_context(|| format!("Failed to save config to {}", path.display()))
        }
        None => config
            .save()
            .with_context(|| format!("Failed to save config to {}", Config::config_path().display())),
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so exported HTML/JSON on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let config = Config {
        theme: cli.theme.unwrap_or(config.theme),
        ..config
    };
    if cli.save {
        save_config(&config, cli.config.as_deref())?;
        tracing::info!(theme = %config.theme, "saved config");
    }
    let styles = config.style_config();
    tracing::debug!(theme = %config.theme, output = ?cli.output, "starting");

    match cli.output {
        Output::Html => {
            let text = read_document(&cli.file)?;
            print!("{}", to_html(&render_markdown(&text, &styles)));
        }
        Output::Json => {
            let text = read_document(&cli.file)?;
            let nodes = render_markdown(&text, &styles);
            println!("{}", serde_json::to_string_pretty(&nodes)?);
        }
        Output::Preview => {
            let mut app = App::new(cli.file, styles)?;
            run_terminal(&mut app)?;
        }
    }

    Ok(())
}

fn run_terminal(app: &mut App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1),
                KeyCode::PageDown => app.scroll_by(app.page_delta()),
                KeyCode::PageUp => app.scroll_by(-app.page_delta()),
                KeyCode::Home | KeyCode::Char('g') => app.top(),
                KeyCode::End | KeyCode::Char('G') => app.bottom(),
                KeyCode::Char('r') => {
                    if let Err(err) = app.reload() {
                        tracing::warn!("{err:#}");
                        app.lines = vec![Line::from(format!("Error: {err:#}"))];
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
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    // Borders take two rows
    app.page = usize::from(chunks[0].height.saturating_sub(2)).max(1);
    app.scroll = app.scroll.min(app.max_scroll());

    let title = app
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| app.path.display().to_string());
    let body = preview::style_of(&app.styles.resolve(StyleKey::Body));

    let content = Paragraph::new(app.lines.clone())
        .style(body)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false })
        .scroll((u16::try_from(app.scroll).unwrap_or(u16::MAX), 0));
    f.render_widget(content, chunks[0]);

    let footer = Line::from(vec![
        Span::raw(format!(
            "{} lines • {} characters",
            app.stats.lines, app.stats.characters
        )),
        Span::styled(
            "  q: Quit | j/k: Scroll | PgUp/PgDn: Page | g/G: Top/Bottom | r: Reload",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(footer), chunks[1]);
}
