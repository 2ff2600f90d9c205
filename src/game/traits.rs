use std::time::Duration;

/// One of the two seats at the board.
///
/// Player one plays Blue and starts top-left, player two plays Red and
/// starts bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    pub fn index(&self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub fn number(&self) -> u32 {
        self.index() as u32 + 1
    }

    pub fn opponent(&self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    pub fn color_name(&self) -> &'static str {
        match self {
            PlayerId::One => "Blue",
            PlayerId::Two => "Red",
        }
    }

    pub fn win_message(&self) -> String {
        format!("{} Wins!", self.color_name())
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {} ({})", self.number(), self.color_name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// The game has finished and no longer accepts input
    GameOver,
    /// Invalid input received
    InvalidInput(String),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::GameOver => write!(f, "Game is over"),
            GameError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for GameError {}

#[derive(Debug, Default, PartialEq)]
pub struct TickResult {
    /// Cells converted to territory this tick, per player that returned home
    pub claims: Vec<(PlayerId, usize)>,
    /// Set on the tick the game ended
    pub winner: Option<PlayerId>,
}

/// Driven once per interval by the tick source.
pub trait Tickable {
    fn tick(&mut self) -> TickResult;
    fn tick_rate(&self) -> Duration;

    fn ticks_per_second(&self) -> u32 {
        (1.0 / self.tick_rate().as_secs_f64()).round() as u32
    }

    fn is_game_over(&self) -> bool {
        false
    }
}

/// Driven by the input source between ticks.
pub trait Steerable {
    type Heading;

    fn steer(&mut self, player_id: PlayerId, heading: Self::Heading) -> Result<(), GameError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_helpers() {
        assert_eq!(PlayerId::One.index(), 0);
        assert_eq!(PlayerId::Two.number(), 2);
        assert_eq!(PlayerId::One.opponent(), PlayerId::Two);
        assert_eq!(PlayerId::Two.opponent(), PlayerId::One);
    }

    #[test]
    fn test_win_messages() {
        assert_eq!(PlayerId::One.win_message(), "Blue Wins!");
        assert_eq!(PlayerId::Two.win_message(), "Red Wins!");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(GameError::GameOver.to_string(), "Game is over");
        assert_eq!(
            GameError::InvalidInput("no direction".to_string()).to_string(),
            "Invalid input: no direction"
        );
    }
}
