use std::io;
use std::time::Duration;

use crossterm::event;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::game::traits::{Steerable, Tickable};
use crate::games::paperio::PaperioGame;
use crate::input::{Command, map_event};
use crate::ui::{Tui, draw};

/// How long the input reader blocks before checking whether the app is gone.
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Runs the board until the quit key.
///
/// Ticks and key presses are handled in the same loop, so the game is only
/// ever touched from one task.
pub async fn run(tui: &mut Tui, game: &mut PaperioGame) -> io::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let reader = spawn_input_reader(tx);

    let mut interval = tokio::time::interval(game.tick_rate());
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tracing::info!(
        "Game started at {} ticks per second",
        game.ticks_per_second()
    );

    loop {
        tokio::select! {
            _ = interval.tick() => {
                if !game.is_game_over() {
                    let result = game.tick();
                    if let Some(winner) = result.winner {
                        tracing::info!("{} after {} ticks", winner.win_message(), game.current_tick());
                    }
                }
                tui.terminal.draw(|frame| draw(frame, game.snapshot()))?;
            }
            command = rx.recv() => match command {
                Some(Command::Steer(player_id, direction)) => {
                    if let Err(e) = game.steer(player_id, direction) {
                        tracing::debug!("Ignoring input from {}: {}", player_id, e);
                    }
                }
                Some(Command::Quit) | None => break,
            },
        }
    }

    drop(rx);
    reader.await.map_err(io::Error::other)?;
    Ok(())
}

/// Forwards key presses from the terminal until the receiver is dropped.
fn spawn_input_reader(tx: mpsc::UnboundedSender<Command>) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        loop {
            match event::poll(INPUT_POLL) {
                Ok(true) => {}
                Ok(false) => {
                    if tx.is_closed() {
                        break;
                    }
                    continue;
                }
                Err(e) => {
                    tracing::warn!("Failed to poll terminal events: {}", e);
                    break;
                }
            }

            let event = match event::read() {
                Ok(event) => event,
                Err(e) => {
                    tracing::warn!("Failed to read terminal event: {}", e);
                    break;
                }
            };
            tracing::trace!("Terminal event {:?}", event);

            if let Some(command) = map_event(event) {
                if tx.send(command).is_err() {
                    break;
                }
            }
        }
    })
}
