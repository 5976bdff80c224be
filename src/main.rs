use admin_console::api::UsersApi;
use admin_console::app::App;
use admin_console::cli::{self, version::USAGE};
use admin_console::logging;
use admin_console::startup::{load_dialog_context, ConsoleConfig};
use admin_console::terminal::{setup_panic_hook, TerminalManager};
use admin_console::ui;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    color_eyre::install()?;

    let command = cli::parse_args(std::env::args()).map_err(|err| eyre!("{}\n\n{}", err, USAGE))?;
    let Some(overrides) = cli::run_cli_command(command) else {
        return Ok(());
    };

    let config = ConsoleConfig::from_env()?.with_overrides(&overrides);
    let server_url = config.validate()?;

    let log_path = logging::default_log_path();
    logging::init_file_logging(&log_path, &config.log_filter)?;
    info!(
        version = cli::VERSION,
        server = %server_url,
        routing = %config.routing,
        log = %log_path.display(),
        "starting admin console"
    );

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(config, server_url))
}

async fn run(config: ConsoleConfig, server_url: String) -> Result<()> {
    let mut api = UsersApi::connect(&server_url);
    if let Some(ref token) = config.token {
        api = api.with_auth(token);
    }
    let context = load_dialog_context(&api).await;

    let mut app = App::new(Arc::new(api), context, config.routing, server_url);

    setup_panic_hook();
    let mut manager = TerminalManager::new()?;
    let result = run_app(manager.terminal(), &mut app).await;
    manager.restore()?;

    info!(created = app.created.len(), "admin console exited");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut message_rx = app
        .message_rx
        .take()
        .ok_or_else(|| eyre!("message receiver already taken"))?;

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &*app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {}

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(err)) => return Err(err.into()),
                    None => app.quit(),
                }
            }

            Some(msg) = message_rx.recv() => {
                app.handle_message(msg);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
