// programs/lottery_pool/src/contexts.rs

use anchor_lang::prelude::*;

use crate::state::LotteryPool;

#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct InitializePool<'info> {
    #[account(
        init,
        payer = manager,
        space = 8 + LotteryPool::INIT_SPACE,
        seeds = [crate::POOL_SEED, manager.key().as_ref(), pool_id.to_le_bytes().as_ref()],
        bump
    )]
    pub pool: Account<'info, LotteryPool>,

    /// CHECK: system-owned vault PDA, holds lamports, no data.
    /// Created by the first entry; only its address is recorded here.
    #[account(
        seeds = [crate::VAULT_SEED, pool.key().as_ref()],
        bump
    )]
    pub vault: UncheckedAccount<'info>,

    #[account(mut)]
    pub manager: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct Enter<'info> {
    #[account(
        mut,
        seeds = [crate::POOL_SEED, pool.manager.as_ref(), pool.pool_id.to_le_bytes().as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, LotteryPool>,

    /// CHECK: System-owned PDA used only as a lamport vault. Address is enforced by seeds/bump.
    #[account(
        mut,
        seeds = [crate::VAULT_SEED, pool.key().as_ref()],
        bump = pool.vault_bump
    )]
    pub vault: UncheckedAccount<'info>,

    #[account(mut)]
    pub entrant: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Winner account is resolved from `remaining_accounts`: the caller passes every
/// distinct entrant of the round as writable.
#[derive(Accounts)]
pub struct PickWinner<'info> {
    #[account(
        mut,
        seeds = [crate::POOL_SEED, pool.manager.as_ref(), pool.pool_id.to_le_bytes().as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, LotteryPool>,

    /// CHECK: System-owned PDA vault. Address enforced by seeds/bump.
    #[account(
        mut,
        seeds = [crate::VAULT_SEED, pool.key().as_ref()],
        bump = pool.vault_bump
    )]
    pub vault: UncheckedAccount<'info>,

    // checked against pool.manager in the handler so a stranger gets Unauthorized
    pub manager: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct ViewPool<'info> {
    #[account(
        seeds = [crate::POOL_SEED, pool.manager.as_ref(), pool.pool_id.to_le_bytes().as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, LotteryPool>,

    /// CHECK: read-only lamport balance of the pool vault
    #[account(
        seeds = [crate::VAULT_SEED, pool.key().as_ref()],
        bump = pool.vault_bump
    )]
    pub vault: UncheckedAccount<'info>,
}
