use anchor_lang::prelude::*;
use anchor_spl::token::{transfer_checked, Mint, Token, TokenAccount, TransferChecked};

use crate::errors::EscrowError;
use crate::events::EscrowCancelled;
use crate::state::*;

#[derive(Accounts)]
pub struct CancelEscrow<'info> {
    #[account(
        mut,
        seeds = [ESCROW_SEED, escrow.buyer.as_ref(), escrow.seller.as_ref()],
        bump = escrow.bump
    )]
    pub escrow: Account<'info, Escrow>,

    #[account(
        mut,
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

    pub buyer: Signer<'info>,

    pub mint: Account<'info, Mint>,
    pub token_program: Program<'info, Token>,
}

pub fn cancel_escrow(ctx: Context<CancelEscrow>) -> Result<()> {
    // Phase 1: guards and field snapshot (no escrow borrow during the CPI)
    let (buyer_key, seller_key, amount, bump) = {
        let e = &ctx.accounts.escrow;
        require_keys_eq!(e.buyer, ctx.accounts.buyer.key(), EscrowError::Unauthorized);
        require!(!e.is_completed, EscrowError::AlreadyResolved);
        (e.buyer, e.seller, e.amount, e.bump)
    };

    // Phase 2: refund the buyer out of the vault, record PDA signs
    let seeds: &[&[u8]] = &[ESCROW_SEED, buyer_key.as_ref(), seller_key.as_ref(), &[bump]];
    let signer_seeds = &[seeds];
    let cpi_accounts = TransferChecked {
        from: ctx.accounts.escrow_vault.to_account_info(),
        to: ctx.accounts.buyer_token_account.to_account_info(),
        mint: ctx.accounts.mint.to_account_info(),
        authority: ctx.accounts.escrow.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    );
    transfer_checked(cpi_ctx, amount, ctx.accounts.mint.decimals)?;

    // Phase 3: mark resolved
    let e = &mut ctx.accounts.escrow;
    e.is_completed = true;

    msg!("Escrow cancelled: {} tokens refunded to buyer", amount);

    emit!(EscrowCancelled {
        escrow: e.key(),
        buyer: buyer_key,
        amount,
    });

    Ok(())
}
