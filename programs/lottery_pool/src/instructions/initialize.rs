use anchor_lang::prelude::*;

use crate::events::PoolOpened;
use crate::state::LotteryPool;
use crate::InitializePool;

pub fn initialize_pool(
    ctx: Context<InitializePool>,
    pool_id: u64,
    min_entry: Option<u64>,
) -> Result<()> {
    let manager = ctx.accounts.manager.key();
    // the vault holds no data, so its first deposit must reach this
    let rent_floor = Rent::get()?.minimum_balance(0);
    let mut opened = LotteryPool::open(manager, pool_id, min_entry, rent_floor)?;

    opened.bump = ctx.bumps.pool;

    opened.vault = ctx.accounts.vault.key();
    opened.vault_bump = ctx.bumps.vault;

    opened.created_slot = Clock::get()?.slot;

    let min_entry = opened.min_entry;
    let pool = &mut ctx.accounts.pool;
    pool.set_inner(opened);

    emit!(PoolOpened {
        pool: pool.key(),
        manager,
        pool_id,
        min_entry,
    });
    msg!("Pool {} opened by {} (min entry {})", pool_id, manager, min_entry);

    Ok(())
}
