use anchor_lang::prelude::*;

pub const ESCROW_SEED: &[u8] = b"escrow";
pub const VAULT_SEED: &[u8] = b"vault";

/// Longest item label a record will store.
pub const MAX_ITEM_LABEL_LEN: usize = 50;

// One escrow per (buyer, seller) pair, at the address derived from exactly
// those two keys. The vault token account is owned by this record's PDA.
#[account]
pub struct Escrow {
    pub buyer: Pubkey,      // 32 - sole cancel authority
    pub seller: Pubkey,     // 32 - sole complete authority
    pub amount: u64,        // 8  - fixed at creation
    pub item_label: String, // 4 + MAX_ITEM_LABEL_LEN
    pub is_completed: bool, // 1  - "resolved", set once by complete or cancel
    pub bump: u8,           // 1
}

impl Escrow {
    pub const SPACE: usize = 8 + 32 + 32 + 8 + (4 + MAX_ITEM_LABEL_LEN) + 1 + 1;
}
