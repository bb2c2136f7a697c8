use anchor_lang::prelude::*;

use crate::state::{ESCROW_SEED, VAULT_SEED};

/// Derive the record address for a (buyer, seller) pair. The pair is
/// directional: buyer seeds first, so swapping the parties yields a
/// different address.
pub fn find_escrow_address(buyer: &Pubkey, seller: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ESCROW_SEED, buyer.as_ref(), seller.as_ref()], &crate::ID)
}

/// Derive the vault address backing a record.
pub fn find_vault_address(escrow: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED, escrow.as_ref()], &crate::ID)
}
