use anchor_lang::prelude::*;
use anchor_spl::token::{transfer_checked, Mint, Token, TokenAccount, TransferChecked};

use crate::errors::EscrowError;
use crate::events::EscrowCreated;
use crate::state::*;

#[derive(Accounts)]
#[instruction(amount: u64, item_label: String)]
pub struct CreateEscrow<'info> {
    #[account(
        init,
        payer = buyer,
        space = Escrow::SPACE,
        seeds = [ESCROW_SEED, buyer.key().as_ref(), seller.key().as_ref()],
        bump
    )]
    pub escrow: Account<'info, Escrow>,

    /// Holds the escrowed tokens; its authority is the record itself.
    #[account(
        init,
        payer = buyer,
        token::mint = mint,
        token::authority = escrow,
        seeds = [VAULT_SEED, escrow.key().as_ref()],
        bump
    )]
    pub escrow_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = buyer
    )]
    pub buyer_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub buyer: Signer<'info>,

    /// CHECK: recorded as the payout recipient, does not need to sign
    pub seller: UncheckedAccount<'info>,

    pub mint: Account<'info, Mint>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn create_escrow(ctx: Context<CreateEscrow>, amount: u64, item_label: String) -> Result<()> {
    require!(amount > 0, EscrowError::InvalidAmount);
    require!(
        item_label.len() <= MAX_ITEM_LABEL_LEN,
        EscrowError::ItemLabelTooLong
    );
    require!(
        ctx.accounts.buyer_token_account.amount >= amount,
        EscrowError::InsufficientFunds
    );

    let escrow = &mut ctx.accounts.escrow;
    escrow.buyer = ctx.accounts.buyer.key();
    escrow.seller = ctx.accounts.seller.key();
    escrow.amount = amount;
    escrow.item_label = item_label;
    escrow.is_completed = false;
    escrow.bump = ctx.bumps.escrow;

    // Lock the funds: buyer ATA -> vault, buyer signs
    let cpi_accounts = TransferChecked {
        from: ctx.accounts.buyer_token_account.to_account_info(),
        to: ctx.accounts.escrow_vault.to_account_info(),
        mint: ctx.accounts.mint.to_account_info(),
        authority: ctx.accounts.buyer.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    transfer_checked(cpi_ctx, amount, ctx.accounts.mint.decimals)?;

    msg!(
        "Escrow created: {} tokens locked for seller {}",
        amount,
        ctx.accounts.seller.key()
    );

    emit!(EscrowCreated {
        escrow: ctx.accounts.escrow.key(),
        buyer: ctx.accounts.buyer.key(),
        seller: ctx.accounts.seller.key(),
        amount,
    });

    Ok(())
}
