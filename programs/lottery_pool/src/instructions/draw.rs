use anchor_lang::prelude::*;

use crate::errors::LotteryError;
use crate::events::WinnerPicked;
use crate::ledger::{ClockEntropy, Invocation, VaultLedger};
use crate::PickWinner;

/// Draws the round winner and pays out the whole vault.
///
/// `remaining_accounts` must hold the round's entrants (each distinct key once,
/// writable). Only the drawn one is touched.
pub fn pick_winner<'info>(
    ctx: Context<'_, '_, 'info, 'info, PickWinner<'info>>,
) -> Result<Pubkey> {
    let pool_key = ctx.accounts.pool.key();
    require_keys_eq!(
        ctx.accounts.pool.vault,
        ctx.accounts.vault.key(),
        LotteryError::VaultMismatch
    );

    let call = Invocation::call(ctx.accounts.manager.key());
    let entropy = ClockEntropy::new(pool_key);

    let mut ledger = VaultLedger::new(
        pool_key,
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.pool.vault_bump,
        ctx.accounts.system_program.to_account_info(),
        ctx.remaining_accounts,
    );

    let pool = &mut ctx.accounts.pool;
    let draw = pool.pick_winner(&call, &mut ledger, &entropy)?;

    emit!(WinnerPicked {
        pool: pool_key,
        winner: draw.winner,
        prize: draw.prize,
        round: draw.round,
    });
    msg!(
        "Round {} winner: {} (index {}, prize {} lamports)",
        draw.round,
        draw.winner,
        draw.index,
        draw.prize
    );

    Ok(draw.winner)
}
