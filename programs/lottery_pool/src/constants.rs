// Centralized Pool Constants

// Seeds
// =====

pub const POOL_SEED: &[u8] = b"lottery_pool";
pub const VAULT_SEED: &[u8] = b"pool_vault";

/// Domain tag mixed into every winner draw.
pub const DRAW_DOMAIN: &[u8] = b"lottery-pool:draw_v1";

// Entry Pricing
// =============

/// Default minimum contribution per entry (lamports). 0.01 SOL.
pub const DEFAULT_MIN_ENTRY_LAMPORTS: u64 = 10_000_000;

/// Rent-exempt minimum of a zero-data system account under default rent (lamports).
/// On-chain the floor is read from the Rent sysvar; this is the host-side value.
pub const MIN_ENTRY_FLOOR_LAMPORTS: u64 = 890_880;

// Capacity
// ========

/// Maximum entries per round.
/// Bounded by Solana return data (1024 bytes) so `get_players` always fits:
/// 4-byte length prefix + 30 * 32-byte keys = 964 bytes.
/// Keep in sync with `#[max_len]` on `LotteryPool::players`.
pub const MAX_PLAYERS: usize = 30;

/// Initial version for account structures.
pub const INITIAL_VERSION: u16 = 1;

/// Round number of a freshly opened pool.
pub const INITIAL_ROUND: u64 = 0;
