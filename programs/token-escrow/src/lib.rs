#![allow(deprecated, unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod state;

use instructions::*;

declare_id!("7Nyr74jwmowDHj9tTcgao8K4RX2tkAMwSFjumE2fiwzc");

#[program]
pub mod token_escrow {
    use super::*;

    pub fn create_escrow(
        ctx: Context<CreateEscrow>,
        amount: u64,
        item_label: String,
    ) -> Result<()> {
        instructions::create_escrow::create_escrow(ctx, amount, item_label)
    }

    pub fn complete_escrow(ctx: Context<CompleteEscrow>) -> Result<()> {
        instructions::complete_escrow::complete_escrow(ctx)
    }

    pub fn cancel_escrow(ctx: Context<CancelEscrow>) -> Result<()> {
        instructions::cancel_escrow::cancel_escrow(ctx)
    }
}
