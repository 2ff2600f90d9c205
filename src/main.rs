use std::fs::File;
use std::io;
use std::sync::Mutex;

use paper_duel::{app, logging};
use paper_duel::games::paperio::PaperioGame;
use paper_duel::ui::Tui;

#[tokio::main]
async fn main() -> io::Result<()> {
    // The board owns the terminal, so logs go to a file.
    let log_path = std::env::temp_dir().join("paper-duel.log");
    let log_file = File::create(&log_path)?;

    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = logging::build_filter(rust_log.as_deref()).map_err(io::Error::other)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    tracing::info!("Paper duel starting, logging to {}", log_path.display());

    let mut game = PaperioGame::new();
    let mut tui = Tui::new()?;
    tui.init()?;

    let res = app::run(&mut tui, &mut game).await;

    tui.exit()?;

    if let Some(winner) = game.state().outcome.winner() {
        println!("{}", winner.win_message());
    }

    res
}
