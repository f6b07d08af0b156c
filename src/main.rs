mod app;
mod core;
mod models;
mod system;
mod ui;
mod utils;

use anyhow::Context;
use app::App;
use clap::Parser;
use core::actions::find_action;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use system::{Config, FileSystem};
use tracing::{error, info};

/// 터미널 파일 탐색기
#[derive(Debug, Parser)]
#[command(name = "peekdir", version, about)]
struct Cli {
    /// 시작 디렉토리 (기본: 설정의 start_dirs, 홈, 현재 디렉토리 순)
    path: Option<PathBuf>,

    /// 설정 파일 경로
    #[arg(long)]
    config: Option<PathBuf>,

    /// 로그 파일 경로 (지정하지 않으면 로그를 남기지 않음)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    // 로그는 파일로만 기록
    if let Some(log_file) = cli.log_file.as_deref().or(config.log_file.as_deref()) {
        init_logging(log_file)?;
    }

    let candidates = config.start_candidates(cli.path.as_deref());
    let mut app = App::new(&config, &candidates, Arc::new(FileSystem::new()))?;
    info!("Starting in {:?}", app.navigator.current_dir());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("{:#}", err);
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| ui::renderer::render(f, app))?;

        // 로딩 중에는 결과를 빨리 반영하도록 짧게 대기
        let poll_timeout = if app.is_loading() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(action) = find_action(key.modifiers, key.code) {
                        app.execute_action(action);
                    }
                }
            }
        }

        app.process_loads();
        app.clear_expired_toast();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
