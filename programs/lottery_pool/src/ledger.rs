// programs/lottery_pool/src/ledger.rs
//
// Boundary between the pool state machine and the chain: who is calling,
// how much they attached, where custody lives and where draw entropy comes from.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};
use solana_sha256_hasher::hashv;

use crate::constants::{DRAW_DOMAIN, VAULT_SEED};

/// Explicit invocation context: caller identity and attached value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub caller: Pubkey,
    pub value: u64,
}

impl Invocation {
    pub fn new(caller: Pubkey, value: u64) -> Self {
        Self { caller, value }
    }

    /// A call that carries no value.
    pub fn call(caller: Pubkey) -> Self {
        Self::new(caller, 0)
    }
}

/// Value-transfer service holding the pool's custody balance.
pub trait Ledger {
    /// Lamports currently held in custody for the pool.
    fn custody_balance(&self) -> u64;

    /// Move `amount` from `from` into custody.
    fn collect(&mut self, from: &Pubkey, amount: u64) -> Result<()>;

    /// Move `amount` out of custody to `to`. Must either fully succeed or
    /// leave every balance untouched.
    fn pay_out(&mut self, to: &Pubkey, amount: u64) -> Result<()>;
}

/// Per-call entropy for the winner draw. Not cryptographically secure.
pub trait EntropySource {
    fn seed(&self) -> Result<[u8; 32]>;
}

// -------------------------
// On-chain ledger: system-owned vault PDA
// -------------------------
pub struct VaultLedger<'a, 'info> {
    pool: Pubkey,
    vault: AccountInfo<'info>,
    vault_bump: u8,
    system_program: AccountInfo<'info>,
    // accounts that may appear as payer or payee
    counterparties: &'a [AccountInfo<'info>],
}

impl<'a, 'info> VaultLedger<'a, 'info> {
    pub fn new(
        pool: Pubkey,
        vault: AccountInfo<'info>,
        vault_bump: u8,
        system_program: AccountInfo<'info>,
        counterparties: &'a [AccountInfo<'info>],
    ) -> Self {
        Self {
            pool,
            vault,
            vault_bump,
            system_program,
            counterparties,
        }
    }

    fn counterparty(&self, key: &Pubkey) -> Result<&'a AccountInfo<'info>> {
        self.counterparties
            .iter()
            .find(|ai| ai.key == key)
            .ok_or_else(|| error!(anchor_lang::error::ErrorCode::AccountNotEnoughKeys))
    }
}

impl Ledger for VaultLedger<'_, '_> {
    fn custody_balance(&self) -> u64 {
        self.vault.lamports()
    }

    fn collect(&mut self, from: &Pubkey, amount: u64) -> Result<()> {
        let payer = self.counterparty(from)?;

        system_program::transfer(
            CpiContext::new(
                self.system_program.clone(),
                Transfer {
                    from: payer.clone(),
                    to: self.vault.clone(),
                },
            ),
            amount,
        )
    }

    fn pay_out(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        let payee = self.counterparty(to)?;
        require!(
            payee.is_writable,
            anchor_lang::error::ErrorCode::ConstraintMut
        );

        let bump = [self.vault_bump];
        let signer_seeds: &[&[&[u8]]] = &[&[VAULT_SEED, self.pool.as_ref(), &bump]];

        // vault PDA signs its own outbound transfer
        system_program::transfer(
            CpiContext::new_with_signer(
                self.system_program.clone(),
                Transfer {
                    from: self.vault.clone(),
                    to: payee.clone(),
                },
                signer_seeds,
            ),
            amount,
        )
    }
}

// -------------------------
// On-chain entropy: Clock sysvar
// -------------------------
pub struct ClockEntropy {
    pool: Pubkey,
}

impl ClockEntropy {
    pub fn new(pool: Pubkey) -> Self {
        Self { pool }
    }
}

impl EntropySource for ClockEntropy {
    fn seed(&self) -> Result<[u8; 32]> {
        let clock = Clock::get()?;
        Ok(hashv(&[
            DRAW_DOMAIN,
            self.pool.as_ref(),
            clock.slot.to_le_bytes().as_ref(),
            clock.epoch.to_le_bytes().as_ref(),
            clock.unix_timestamp.to_le_bytes().as_ref(),
        ])
        .to_bytes())
    }
}
