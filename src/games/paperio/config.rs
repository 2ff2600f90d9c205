use std::time::Duration;

use super::state::GridPos;
use crate::game::traits::PlayerId;

/// Who is declared winner when a player touches the opponent's trail or home cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactRule {
    /// The owner of the touched trail or home cell wins
    #[default]
    OwnerWins,
    /// The player who moved onto the trail or home cell wins
    StrikerWins,
}

#[derive(Debug, Clone)]
pub struct PaperioConfig {
    /// Grid width in cells
    pub grid_width: u32,
    /// Grid height in cells
    pub grid_height: u32,
    /// Tick rate in Hz (ticks per second)
    pub tick_rate_hz: u32,
    /// Terminal columns used to draw one grid cell
    pub cell_width: u16,
    /// Starting cell of each player, indexed by `PlayerId::index`
    pub homes: [GridPos; 2],
    /// Winner resolution for trail and home contact
    pub contact_rule: ContactRule,
}

impl PaperioConfig {
    pub fn with_grid_size(width: u32, height: u32) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            homes: default_homes(width, height),
            ..Default::default()
        }
    }

    pub fn with_contact_rule(mut self, contact_rule: ContactRule) -> Self {
        self.contact_rule = contact_rule;
        self
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(1000 / self.tick_rate_hz as u64)
    }
}

impl Default for PaperioConfig {
    fn default() -> Self {
        Self {
            grid_width: 40,
            grid_height: 30,
            tick_rate_hz: 10,
            cell_width: 2,
            homes: default_homes(40, 30),
            contact_rule: ContactRule::default(),
        }
    }
}

/// Blue five cells in from the top-left corner, Red six cells in from the bottom-right.
fn default_homes(width: u32, height: u32) -> [GridPos; 2] {
    [
        GridPos::new(5, 5),
        GridPos::new(width as i32 - 6, height as i32 - 6),
    ]
}

/// Colors used to draw one player.
///
/// Colors are RGBA packed as u32.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub territory: u32,
    pub trail: u32,
    pub head: u32,
}

pub const PLAYER_PALETTES: [Palette; 2] = [
    Palette {
        territory: 0x87CEFAFF, // Light sky blue
        trail: 0x00FFFFFF,     // Cyan
        head: 0x0000FFFF,      // Blue
    },
    Palette {
        territory: 0xFF6347FF, // Tomato
        trail: 0xFFAFAFFF,     // Pink
        head: 0xFF0000FF,      // Red
    },
];

pub fn get_player_palette(player_id: PlayerId) -> Palette {
    PLAYER_PALETTES[player_id.index()]
}
