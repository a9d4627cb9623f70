use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod pool;
pub mod state;
pub mod contexts;
pub mod constants;

pub use instructions::*;
pub use state::*;
pub use errors::*;
pub use events::*;
pub use contexts::*;
pub use constants::*;

declare_id!("7QkoQvR5bcLJ5yLW3cTCDKrk5L174J8mcKbB83WcxJGK");

#[program]
pub mod lottery_pool {
    use super::*;
    use crate::instructions::{draw, enter, initialize, view};

    pub fn initialize_pool(
        ctx: Context<InitializePool>,
        pool_id: u64,
        min_entry: Option<u64>,
    ) -> Result<()> {
        initialize::initialize_pool(ctx, pool_id, min_entry)
    }

    pub fn enter(ctx: Context<Enter>, amount: u64) -> Result<()> {
        enter::enter(ctx, amount)
    }

    // ----------------------------
    // Manager draw
    // ----------------------------
    pub fn pick_winner<'info>(
        ctx: Context<'_, '_, 'info, 'info, PickWinner<'info>>,
    ) -> Result<Pubkey> {
        draw::pick_winner(ctx)
    }

    // ----------------------------
    // Views (return data)
    // ----------------------------
    pub fn get_players(ctx: Context<ViewPool>) -> Result<Vec<Pubkey>> {
        view::get_players(ctx)
    }

    pub fn get_pool_summary(ctx: Context<ViewPool>) -> Result<PoolSummary> {
        view::get_pool_summary(ctx)
    }
}
