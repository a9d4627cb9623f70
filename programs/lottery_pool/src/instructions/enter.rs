use anchor_lang::prelude::*;

use crate::errors::LotteryError;
use crate::events::PlayerEntered;
use crate::ledger::{Invocation, VaultLedger};
use crate::Enter;

pub fn enter(ctx: Context<Enter>, amount: u64) -> Result<()> {
    let pool_key = ctx.accounts.pool.key();
    require_keys_eq!(
        ctx.accounts.pool.vault,
        ctx.accounts.vault.key(),
        LotteryError::VaultMismatch
    );

    let entrant = ctx.accounts.entrant.to_account_info();
    let call = Invocation::new(*entrant.key, amount);

    let mut ledger = VaultLedger::new(
        pool_key,
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.pool.vault_bump,
        ctx.accounts.system_program.to_account_info(),
        std::slice::from_ref(&entrant),
    );

    let pool = &mut ctx.accounts.pool;
    pool.enter(&call, &mut ledger)?;

    let players = pool.players.len() as u32;
    emit!(PlayerEntered {
        pool: pool_key,
        player: call.caller,
        amount,
        players,
    });
    msg!("Entry: {} lamports from {} ({} players)", amount, call.caller, players);

    Ok(())
}
