//! Crate-wide error type.

/// Everything that can go wrong inside the game model or its glue.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("inventory is full ({capacity} slots)")]
    InventoryFull { capacity: usize },

    #[error("'{name}' is already stored as {category}")]
    CategoryMismatch { name: String, category: &'static str },

    #[error("no item named '{0}'")]
    ItemNotFound(String),

    #[error("'{0}' cannot be used right now")]
    ItemNotUsable(String),

    #[error("not enough money: need ${needed}, have ${available}")]
    InsufficientFunds { needed: u32, available: u32 },

    #[error("the caravan already has {0} members")]
    CaravanFull(usize),

    #[error("invalid caravan member: {0}")]
    InvalidMember(String),

    #[error("unknown achievement #{0}")]
    UnknownAchievement(u8),
}

pub type GameResult<T> = Result<T, GameError>;
