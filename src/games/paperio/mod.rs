pub mod config;
pub mod state;
pub mod systems;

use std::time::Duration;

use crate::game::traits::{GameError, PlayerId, Steerable, TickResult, Tickable};

pub use config::{ContactRule, Palette, PaperioConfig, get_player_palette};
pub use state::{
    Direction, EndReason, GameOutcome, GameState, GridPos, Player, TerritoryGrid, Trail,
};

/// Read-only view of the board handed to the renderer after each tick.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub width: u32,
    pub height: u32,
    pub cell_width: u16,
    pub tick: u32,
    pub territories: [&'a TerritoryGrid; 2],
    pub trails: [&'a Trail; 2],
    pub positions: [GridPos; 2],
    pub outcome: GameOutcome,
}

impl Snapshot<'_> {
    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    pub fn message(&self) -> String {
        self.outcome.message()
    }

    pub fn territory_share(&self, player_id: PlayerId) -> f32 {
        self.territories[player_id.index()].get_ownership_percentage()
    }
}

pub struct PaperioGame {
    /// Current game state
    state: GameState,
    /// Game configuration
    config: PaperioConfig,
    /// Number of ticks advanced so far
    tick: u32,
}

impl PaperioGame {
    pub fn new() -> Self {
        Self::with_config(PaperioConfig::default())
    }

    pub fn with_config(config: PaperioConfig) -> Self {
        Self {
            state: GameState::new(config.grid_width, config.grid_height, config.homes),
            config,
            tick: 0,
        }
    }

    pub fn current_tick(&self) -> u32 {
        self.tick
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &PaperioConfig {
        &self.config
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Changes a player's heading; takes effect on the next `advance`.
    pub fn set_direction(
        &mut self,
        player_id: PlayerId,
        direction: Direction,
    ) -> Result<(), GameError> {
        systems::set_player_direction(&mut self.state, player_id, direction)?;
        tracing::debug!("{} heading {:?}", player_id, direction);
        Ok(())
    }

    /// Runs one tick: move, bounds, trails, collisions.
    ///
    /// Does nothing once the game has finished.
    pub fn advance(&mut self) -> TickResult {
        let mut result = TickResult::default();
        if self.state.is_finished() {
            return result;
        }

        self.tick += 1;
        systems::move_players(&mut self.state);

        if let Some(winner) = systems::check_bounds(&self.state) {
            self.state.finish(winner, EndReason::OutOfBounds);
            tracing::info!(
                "{} left the grid on tick {}, {}",
                winner.opponent(),
                self.tick,
                winner.win_message()
            );
            result.winner = Some(winner);
            return result;
        }

        result.claims = systems::update_trails(&mut self.state);
        for (player_id, cells) in &result.claims {
            tracing::info!(
                "{} claimed {} cells ({:.1}% of the grid)",
                player_id,
                cells,
                self.state.territory(*player_id).get_ownership_percentage()
            );
        }

        if let Some(contact) = systems::check_collisions(&self.state) {
            let winner = contact.winner(self.config.contact_rule);
            self.state.finish(winner, contact.reason);
            tracing::info!(
                "{} hit {}'s {:?} on tick {}, {}",
                contact.striker,
                contact.owner,
                contact.reason,
                self.tick,
                winner.win_message()
            );
            result.winner = Some(winner);
        }

        result
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let (width, height) = self.state.get_grid_dimensions();
        Snapshot {
            width,
            height,
            cell_width: self.config.cell_width,
            tick: self.tick,
            territories: PlayerId::ALL.map(|id| self.state.territory(id)),
            trails: PlayerId::ALL.map(|id| &self.state.get_player(id).trail),
            positions: PlayerId::ALL.map(|id| self.state.get_player(id).position),
            outcome: self.state.outcome,
        }
    }
}

impl Default for PaperioGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Tickable for PaperioGame {
    fn tick(&mut self) -> TickResult {
        self.advance()
    }

    fn tick_rate(&self) -> Duration {
        self.config.tick_duration()
    }

    fn is_game_over(&self) -> bool {
        self.is_finished()
    }
}

impl Steerable for PaperioGame {
    type Heading = Direction;

    fn steer(&mut self, player_id: PlayerId, heading: Direction) -> Result<(), GameError> {
        self.set_direction(player_id, heading)
    }
}
