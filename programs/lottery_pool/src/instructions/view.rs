use anchor_lang::prelude::*;

use crate::state::PoolSummary;
use crate::ViewPool;

pub fn get_players(ctx: Context<ViewPool>) -> Result<Vec<Pubkey>> {
    Ok(ctx.accounts.pool.get_players())
}

pub fn get_pool_summary(ctx: Context<ViewPool>) -> Result<PoolSummary> {
    let balance = ctx.accounts.vault.lamports();
    Ok(ctx.accounts.pool.summary(balance))
}
