use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryError {
    #[msg("Contribution is below the pool minimum")]
    InsufficientContribution,
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Pool has no players")]
    NoPlayers,
    #[msg("Prize transfer failed")]
    TransferFailed,

    #[msg("Pool is full for this round")]
    PoolFull,
    #[msg("Minimum entry is below the rent-exempt floor")]
    InvalidMinEntry,
    #[msg("Vault PDA mismatch")]
    VaultMismatch,
    #[msg("Math overflow")]
    MathOverflow,
}
