use std::fs::File;

use mazeworld::{app::App, config::Config, error::Result, session::Session};
use tracing_subscriber::EnvFilter;

/// Send logs to a file; the terminal belongs to the UI.
fn init_logging(config: &Config) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    std::fs::create_dir_all(&config.log_dir)?;
    let file = File::create(config.log_path())?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}

fn main() -> Result<()> {
    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}\n{}", e, Config::USAGE);
            return Err(e.into());
        }
    };
    let _guard = init_logging(&config)?;
    tracing::info!("Starting with {:?}", config);

    let session = Session::new(config.width.into(), config.height.into(), config.seed)?;
    let mut app = App::new(session);

    let mut stdout = std::io::stdout();
    App::setup_terminal(&mut stdout)?;
    let result = app.run(&mut stdout);
    App::restore_terminal(&mut stdout)?;

    if let Err(e) = &result {
        tracing::error!("App exited with error: {}", e);
    }
    Ok(result?)
}
