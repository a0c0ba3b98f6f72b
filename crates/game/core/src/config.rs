/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Opaque identifier carried by the reward-won event when the gold is found.
    pub reward_uri: String,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Side length of the square board.
    pub const GRID_SIZE: usize = 4;
    pub const CELL_COUNT: usize = Self::GRID_SIZE * Self::GRID_SIZE;
    /// Player, pit, wumpus and gold.
    pub const PLACED_ITEMS: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_REWARD_URI: &'static str = "/images/gold.png";

    pub fn new() -> Self {
        Self {
            reward_uri: Self::DEFAULT_REWARD_URI.to_owned(),
        }
    }

    pub fn with_reward_uri(reward_uri: impl Into<String>) -> Self {
        Self {
            reward_uri: reward_uri.into(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
