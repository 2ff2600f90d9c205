use super::config::ContactRule;
use super::state::{Direction, EndReason, GameState, GridPos, TerritoryGrid, Trail};
use crate::game::traits::{GameError, PlayerId};

/// Steps every player one cell along its direction.
///
/// Both players move before any rule is evaluated.
pub fn move_players(state: &mut GameState) {
    for player in state.players.iter_mut() {
        player.position = player.position.moved(player.direction);
    }
}

/// Returns the winner if a player left the grid.
///
/// Player one is checked first, so if both leave on the same tick Red wins.
pub fn check_bounds(state: &GameState) -> Option<PlayerId> {
    PlayerId::ALL
        .into_iter()
        .find(|&id| !state.in_bounds(&state.get_player(id).position))
        .map(|loser| loser.opponent())
}

/// Extends trails outside own territory and claims them on return home.
///
/// Players are processed in seat order. Returns the number of cells each
/// returning player claimed.
pub fn update_trails(state: &mut GameState) -> Vec<(PlayerId, usize)> {
    let mut claims = Vec::new();

    for (player, territory) in state.players.iter_mut().zip(state.territories.iter_mut()) {
        if !is_in_own_territory(territory, &player.position) {
            add_to_trail(&mut player.trail, player.position);
        } else if player.has_trail() {
            let claimed = claim_trail(territory, &mut player.trail);
            claims.push((player.id, claimed));
        }
    }

    claims
}

pub fn is_in_own_territory(territory: &TerritoryGrid, pos: &GridPos) -> bool {
    territory.is_owned(pos)
}

pub fn add_to_trail(trail: &mut Trail, pos: GridPos) {
    trail.insert(pos);
}

/// Converts every trail cell into territory and empties the trail.
///
/// Returns the number of cells that were not already owned.
pub fn claim_trail(territory: &mut TerritoryGrid, trail: &mut Trail) -> usize {
    let mut claimed = 0;
    for pos in trail.take() {
        if !territory.is_owned(&pos) {
            territory.claim(&pos);
            claimed += 1;
        }
    }
    claimed
}

/// A player stepping onto something the opponent owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    /// Player who moved onto the cell
    pub striker: PlayerId,
    /// Owner of the trail or home cell that was hit
    pub owner: PlayerId,
    pub reason: EndReason,
}

impl Contact {
    pub fn winner(&self, rule: ContactRule) -> PlayerId {
        match rule {
            ContactRule::OwnerWins => self.owner,
            ContactRule::StrikerWins => self.striker,
        }
    }
}

/// Finds the first player standing on the opponent's trail or home cell.
///
/// Player one's position is checked first. Running into one's own trail
/// is allowed.
pub fn check_collisions(state: &GameState) -> Option<Contact> {
    PlayerId::ALL.into_iter().find_map(|striker| {
        let owner = striker.opponent();
        let pos = state.get_player(striker).position;
        let opponent = state.get_player(owner);

        let reason = if opponent.trail.contains(&pos) {
            EndReason::TrailCut
        } else if pos == opponent.home {
            EndReason::HomeRaid
        } else {
            return None;
        };

        Some(Contact { striker, owner, reason })
    })
}

/// Overwrites the player's direction for the next tick.
///
/// Reversing into one's own trail is allowed.
pub fn set_player_direction(
    state: &mut GameState,
    player_id: PlayerId,
    new_direction: Direction,
) -> Result<(), GameError> {
    if state.is_finished() {
        return Err(GameError::GameOver);
    }

    if new_direction == Direction::None {
        return Err(GameError::InvalidInput(format!(
            "{} needs a direction to move in",
            player_id
        )));
    }

    state.get_player_mut(player_id).direction = new_direction;
    Ok(())
}
