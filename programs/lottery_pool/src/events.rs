use anchor_lang::prelude::*;

#[event]
pub struct PoolOpened {
    pub pool: Pubkey,
    pub manager: Pubkey,
    pub pool_id: u64,
    pub min_entry: u64,
}

#[event]
pub struct PlayerEntered {
    pub pool: Pubkey,
    pub player: Pubkey,
    pub amount: u64,
    pub players: u32,
}

#[event]
pub struct WinnerPicked {
    pub pool: Pubkey,
    pub winner: Pubkey,
    pub prize: u64,
    pub round: u64,
}
