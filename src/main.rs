use clap::Parser;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use property_chat::cli::Cli;
use property_chat::util::log;
use property_chat::{App, ClientConfig};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let mut config = ClientConfig::load(cli.config.as_deref())?;
    cli.apply(&mut config);
    let notes = config.notes_text()?;

    let log_path = log::init_file_logging(&config.log_dir, cli.debug)?;
    tracing::info!("Logging to {}", log_path.display());
    tracing::debug!("Config: {:?}", config);

    let terminal = ratatui::init();
    // multi-line pastes arrive as one event instead of a run of Enter presses
    if let Err(err) = execute!(std::io::stdout(), EnableBracketedPaste) {
        tracing::warn!("Bracketed paste unavailable: {}", err);
    }
    let result = App::new(&config, notes).run(terminal).await;
    let _ = execute!(std::io::stdout(), DisableBracketedPaste);
    ratatui::restore();
    result
}
