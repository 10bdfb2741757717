use std::sync::Arc;
use std::time::Duration;

use coinlens::adapters::{ReqwestHttpClient, TerminalTitle};
use coinlens::app::App;
use coinlens::cli::{parse_args, run_cli_command};
use coinlens::config::AppConfig;
use coinlens::logging;
use coinlens::terminal::{setup_panic_hook, TerminalManager};
use coinlens::traits::HttpClient;
use coinlens::ui;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use tokio::time::MissedTickBehavior;

/// Animation tick; also bounds how long a queued redraw can wait.
const TICK_RATE: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let Some(options) = run_cli_command(parse_args(std::env::args())) else {
        return Ok(());
    };
    let config = options.apply(AppConfig::from_env()?);
    config.validate()?;

    // Logging is optional: the app still runs without a writable log dir
    let _log_guard = match logging::init(&config.resolved_log_dir()) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: {}", e);
            None
        }
    };

    setup_panic_hook();

    let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::with_timeout(config.http_timeout));
    let mut app = App::new(config, http, Box::new(TerminalTitle::stdout()));

    let mut manager = TerminalManager::new()?;
    app.start();
    let result = run_app(manager.terminal(), &mut app).await;
    manager.restore();

    match &result {
        Ok(()) => tracing::info!("Exited"),
        Err(e) => tracing::error!(error = %e, "Exited with error"),
    }
    result
}

/// Main loop: draw when dirty, then wait for a key, a fetch result or a tick.
async fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut message_rx = app
        .message_rx
        .take()
        .ok_or_else(|| eyre!("message receiver already taken"))?;

    let mut tick = tokio::time::interval(TICK_RATE);
    tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        if app.should_quit {
            return Ok(());
        }

        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = tick.tick() => {
                app.tick();
            }

            event = event_stream.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Some(Ok(Event::Resize(..))) => app.mark_dirty(),
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => return Ok(()),
            },

            Some(msg) = message_rx.recv() => {
                app.handle_message(msg);
            }
        }
    }
}
