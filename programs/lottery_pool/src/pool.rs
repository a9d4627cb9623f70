// programs/lottery_pool/src/pool.rs
//
// Pool state machine. Works only through `Ledger` and `EntropySource`, so the
// same code runs on-chain (vault PDA, Clock) and in host tests (memory ledger).

use anchor_lang::prelude::*;
use solana_sha256_hasher::hashv;

use crate::{
    constants::*,
    errors::LotteryError,
    ledger::{EntropySource, Invocation, Ledger},
    state::{Draw, LotteryPool, PoolSummary},
};

impl LotteryPool {
    /// Fresh pool bound to `manager`. PDA bookkeeping (bumps, vault, slot) is
    /// filled in by the caller.
    ///
    /// `rent_floor` is the rent-exempt minimum of the empty vault: its first
    /// deposit must cover it or the runtime refuses the transfer.
    pub fn open(
        manager: Pubkey,
        pool_id: u64,
        min_entry: Option<u64>,
        rent_floor: u64,
    ) -> Result<Self> {
        let min_entry = min_entry.unwrap_or(DEFAULT_MIN_ENTRY_LAMPORTS);
        require!(min_entry >= rent_floor, LotteryError::InvalidMinEntry);

        Ok(Self {
            manager,
            pool_id,
            bump: 0,
            vault: Pubkey::default(),
            vault_bump: 0,
            min_entry,
            round: INITIAL_ROUND,
            players: Vec::with_capacity(MAX_PLAYERS),
            last_winner: Pubkey::default(),
            last_prize: 0,
            created_slot: 0,
            version: INITIAL_VERSION,
        })
    }

    pub fn enter<L: Ledger>(&mut self, call: &Invocation, ledger: &mut L) -> Result<()> {
        require!(
            call.value >= self.min_entry,
            LotteryError::InsufficientContribution
        );
        require!(self.players.len() < MAX_PLAYERS, LotteryError::PoolFull);

        ledger.collect(&call.caller, call.value)?;
        self.players.push(call.caller);

        Ok(())
    }

    pub fn get_players(&self) -> Vec<Pubkey> {
        self.players.clone()
    }

    /// Draw one entrant and pay them the whole custody balance.
    ///
    /// The round is only reset after the ledger confirms the payout; a failed
    /// payout leaves players, custody and counters exactly as they were.
    pub fn pick_winner<L: Ledger, E: EntropySource>(
        &mut self,
        call: &Invocation,
        ledger: &mut L,
        entropy: &E,
    ) -> Result<Draw> {
        require_keys_eq!(call.caller, self.manager, LotteryError::Unauthorized);
        require!(!self.players.is_empty(), LotteryError::NoPlayers);

        // 1) stage
        let seed = entropy.seed()?;
        let index = winner_index(&seed, self.round, self.players.len())
            .ok_or(LotteryError::NoPlayers)?;
        let winner = self.players[index];
        let prize = ledger.custody_balance();
        let round = self
            .round
            .checked_add(1)
            .ok_or(LotteryError::MathOverflow)?;

        // 2) transfer
        if let Err(e) = ledger.pay_out(&winner, prize) {
            msg!("Payout of {} lamports to {} failed: {}", prize, winner, e);
            return err!(LotteryError::TransferFailed);
        }

        // 3) commit
        self.players.clear();
        self.round = round;
        self.last_winner = winner;
        self.last_prize = prize;

        Ok(Draw {
            winner,
            prize,
            index,
            round,
        })
    }

    /// Snapshot of the pool; `balance` is the vault's current custody.
    pub fn summary(&self, balance: u64) -> PoolSummary {
        PoolSummary {
            manager: self.manager,
            pool_id: self.pool_id,
            round: self.round,
            player_count: self.players.len() as u32,
            balance,
            min_entry: self.min_entry,
            last_winner: self.last_winner,
            last_prize: self.last_prize,
        }
    }
}

// -------------------------
// Winner index
// -------------------------
/// Index in `[0, players)` derived from the draw seed, round and entrant count.
/// `None` when there is nobody to draw.
pub fn winner_index(seed: &[u8; 32], round: u64, players: usize) -> Option<usize> {
    let h = hashv(&[
        DRAW_DOMAIN,
        seed.as_ref(),
        round.to_le_bytes().as_ref(),
        (players as u64).to_le_bytes().as_ref(),
    ])
    .to_bytes();

    let word = u64::from_le_bytes([h[0], h[1], h[2], h[3], h[4], h[5], h[6], h[7]]);
    word.checked_rem(players as u64).map(|i| i as usize)
}
