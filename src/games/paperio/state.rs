use crate::game::traits::PlayerId;
use std::collections::HashSet;

/// A position on the game grid
///
/// (0,0) is the top-left corner,
/// x increases to the right, y increases downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn moved(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::None => (0, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Cells owned by a single player.
pub struct TerritoryGrid {
    /// Width of the grid
    width: u32,
    /// Height of the grid
    height: u32,
    /// Ownership mask, row-major
    cells: Vec<bool>,
}

impl TerritoryGrid {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![false; (width * height) as usize],
        }
    }

    pub fn get_grid_dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn in_bounds(&self, pos: &GridPos) -> bool {
        pos.x >= 0 && pos.y >= 0 &&
            (pos.x as u32) < self.width &&
            (pos.y as u32) < self.height
    }

    fn pos_to_index(&self, pos: &GridPos) -> Option<usize> {
        if self.in_bounds(pos) {
            Some((pos.y as u32 * self.width + pos.x as u32) as usize)
        } else {
            None
        }
    }

    /// Out-of-bounds cells are never owned.
    pub fn is_owned(&self, pos: &GridPos) -> bool {
        self.pos_to_index(pos)
            .map(|idx| self.cells[idx])
            .unwrap_or(false)
    }

    pub fn claim(&mut self, pos: &GridPos) {
        if let Some(idx) = self.pos_to_index(pos) {
            self.cells[idx] = true;
        }
    }

    pub fn count_owned(&self) -> usize {
        self.cells.iter().filter(|&&owned| owned).count()
    }

    pub fn get_total_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn get_ownership_percentage(&self) -> f32 {
        let owned = self.count_owned() as f32;
        let total = self.get_total_cells() as f32;
        (owned / total) * 100.0
    }

    pub fn get_owned_cells(&self) -> Vec<GridPos> {
        let mut cells = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let pos = GridPos::new(x as i32, y as i32);
                if self.is_owned(&pos) {
                    cells.push(pos);
                }
            }
        }
        cells
    }
}

impl std::fmt::Debug for TerritoryGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerritoryGrid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("owned_cells", &self.count_owned())
            .finish()
    }
}

/// Cells crossed since the player last left its territory.
///
/// Keeps first-visit order; revisiting a cell does not add it twice.
#[derive(Debug, Clone, Default)]
pub struct Trail {
    order: Vec<GridPos>,
    members: HashSet<GridPos>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the cell was already part of the trail.
    pub fn insert(&mut self, pos: GridPos) -> bool {
        if self.members.insert(pos) {
            self.order.push(pos);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, pos: &GridPos) -> bool {
        self.members.contains(pos)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GridPos> {
        self.order.iter()
    }

    /// Empties the trail, handing back its cells in visit order.
    pub fn take(&mut self) -> Vec<GridPos> {
        self.members.clear();
        std::mem::take(&mut self.order)
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    /// Seat at the board
    pub id: PlayerId,
    /// Current position on the grid
    pub position: GridPos,
    /// Current movement direction
    pub direction: Direction,
    /// Trail left when moving outside own territory
    /// Empty when player is inside their own territory
    pub trail: Trail,
    /// Fixed starting cell
    pub home: GridPos,
}

impl Player {
    pub fn new(id: PlayerId, home: GridPos) -> Self {
        Self {
            id,
            position: home,
            direction: Direction::None,
            trail: Trail::new(),
            home,
        }
    }

    pub fn has_trail(&self) -> bool {
        !self.trail.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The loser stepped off the grid
    OutOfBounds,
    /// A player stepped onto the opponent's trail
    TrailCut,
    /// A player stepped onto the opponent's home cell
    HomeRaid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameOutcome {
    #[default]
    InProgress,
    Finished {
        winner: PlayerId,
        reason: EndReason,
    },
}

impl GameOutcome {
    pub fn is_finished(&self) -> bool {
        matches!(self, GameOutcome::Finished { .. })
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameOutcome::InProgress => None,
            GameOutcome::Finished { winner, .. } => Some(*winner),
        }
    }

    /// Text shown over the board; empty while the game is running.
    pub fn message(&self) -> String {
        self.winner()
            .map(|winner| winner.win_message())
            .unwrap_or_default()
    }
}

#[derive(Debug)]
pub struct GameState {
    /// Both players, indexed by `PlayerId::index`
    pub players: [Player; 2],
    /// Territory of each player, indexed by `PlayerId::index`
    pub territories: [TerritoryGrid; 2],
    /// Whether the game is still running
    pub outcome: GameOutcome,
}

impl GameState {
    /// Each player starts on its home cell, which is also its only territory.
    pub fn new(width: u32, height: u32, homes: [GridPos; 2]) -> Self {
        let mut territories = [
            TerritoryGrid::new(width, height),
            TerritoryGrid::new(width, height),
        ];
        for player_id in PlayerId::ALL {
            territories[player_id.index()].claim(&homes[player_id.index()]);
        }

        Self {
            players: PlayerId::ALL.map(|id| Player::new(id, homes[id.index()])),
            territories,
            outcome: GameOutcome::InProgress,
        }
    }

    pub fn get_player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn get_player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    pub fn territory(&self, id: PlayerId) -> &TerritoryGrid {
        &self.territories[id.index()]
    }

    pub fn get_grid_dimensions(&self) -> (u32, u32) {
        self.territories[0].get_grid_dimensions()
    }

    pub fn in_bounds(&self, pos: &GridPos) -> bool {
        self.territories[0].in_bounds(pos)
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    pub fn finish(&mut self, winner: PlayerId, reason: EndReason) {
        self.outcome = GameOutcome::Finished { winner, reason };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_pos_operations() {
        let pos = GridPos::new(5, 10);
        assert_eq!(pos.offset(1, -1), GridPos::new(6, 9));
        assert_eq!(pos.moved(Direction::Up), GridPos::new(5, 9));
        assert_eq!(pos.moved(Direction::Right), GridPos::new(6, 10));
        assert_eq!(pos.moved(Direction::None), pos);
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
        assert_eq!(Direction::None.delta(), (0, 0));
    }

    #[test]
    fn test_territory_grid() {
        let mut grid = TerritoryGrid::new(10, 10);
        let pos = GridPos::new(5, 5);

        assert!(grid.in_bounds(&pos));
        assert!(!grid.in_bounds(&GridPos::new(-1, 0)));
        assert!(!grid.in_bounds(&GridPos::new(10, 5)));
        assert!(!grid.in_bounds(&GridPos::new(5, 10)));

        assert!(!grid.is_owned(&pos));
        grid.claim(&pos);
        assert!(grid.is_owned(&pos));
        assert_eq!(grid.get_owned_cells(), vec![pos]);
    }

    #[test]
    fn test_claim_out_of_bounds_is_ignored() {
        let mut grid = TerritoryGrid::new(4, 4);
        grid.claim(&GridPos::new(4, 0));
        grid.claim(&GridPos::new(0, -1));
        assert_eq!(grid.count_owned(), 0);
        assert!(!grid.is_owned(&GridPos::new(4, 0)));
    }

    #[test]
    fn test_ownership_percentage() {
        let mut grid = TerritoryGrid::new(10, 10); // 100 cells

        for x in 0..10 {
            grid.claim(&GridPos::new(x, 0));
        }

        assert!((grid.get_ownership_percentage() - 10.0).abs() < 0.01);
    }

    #[test]
    fn test_trail_is_a_set() {
        let mut trail = Trail::new();
        assert!(trail.insert(GridPos::new(1, 0)));
        assert!(trail.insert(GridPos::new(2, 0)));
        assert!(!trail.insert(GridPos::new(1, 0)));

        assert_eq!(trail.len(), 2);
        assert!(trail.contains(&GridPos::new(2, 0)));

        let cells = trail.take();
        assert_eq!(cells, vec![GridPos::new(1, 0), GridPos::new(2, 0)]);
        assert!(trail.is_empty());
        assert!(!trail.contains(&GridPos::new(1, 0)));
    }

    #[test]
    fn test_player_state() {
        let player = Player::new(PlayerId::One, GridPos::new(5, 5));
        assert_eq!(player.id, PlayerId::One);
        assert_eq!(player.position, player.home);
        assert_eq!(player.direction, Direction::None);
        assert!(!player.has_trail());
    }

    #[test]
    fn test_game_state_seeds_homes() {
        let homes = [GridPos::new(5, 5), GridPos::new(34, 24)];
        let state = GameState::new(40, 30, homes);

        assert_eq!(state.get_grid_dimensions(), (40, 30));
        assert_eq!(state.territory(PlayerId::One).get_owned_cells(), vec![homes[0]]);
        assert_eq!(state.territory(PlayerId::Two).get_owned_cells(), vec![homes[1]]);
        assert_eq!(state.get_player(PlayerId::Two).position, homes[1]);
        assert_eq!(state.outcome, GameOutcome::InProgress);
    }

    #[test]
    fn test_outcome_message() {
        assert_eq!(GameOutcome::InProgress.message(), "");
        let outcome = GameOutcome::Finished {
            winner: PlayerId::Two,
            reason: EndReason::OutOfBounds,
        };
        assert!(outcome.is_finished());
        assert_eq!(outcome.winner(), Some(PlayerId::Two));
        assert_eq!(outcome.message(), "Red Wins!");
    }
}
