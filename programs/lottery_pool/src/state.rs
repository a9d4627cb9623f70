use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct LotteryPool {
    pub manager: Pubkey,
    pub pool_id: u64,
    pub bump: u8,

    // System-owned PDA vault (holds lamports, no data)
    pub vault: Pubkey,
    pub vault_bump: u8,

    /// Minimum lamports a single entry must carry.
    pub min_entry: u64,

    /// Completed draws so far.
    pub round: u64,

    /// Entrants of the current round, in entry order. Duplicates allowed.
    /// NOTE: max_len must equal `MAX_PLAYERS`; the attribute needs a literal.
    #[max_len(30)]
    pub players: Vec<Pubkey>,

    // outcome of the most recent draw
    pub last_winner: Pubkey,
    pub last_prize: u64,

    pub created_slot: u64,
    pub version: u16,
}

/// Read-only snapshot returned by `get_pool_summary`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct PoolSummary {
    pub manager: Pubkey,
    pub pool_id: u64,
    pub round: u64,
    pub player_count: u32,
    pub balance: u64,
    pub min_entry: u64,
    pub last_winner: Pubkey,
    pub last_prize: u64,
}

/// Result of a successful draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Draw {
    pub winner: Pubkey,
    pub prize: u64,
    pub index: usize,
    pub round: u64,
}
