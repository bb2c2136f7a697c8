use anchor_lang::prelude::*;

#[error_code]
pub enum EscrowError {
    #[msg("Escrow amount must be greater than zero")]
    InvalidAmount,
    #[msg("Buyer does not hold enough tokens to fund the escrow")]
    InsufficientFunds,
    #[msg("An escrow between this buyer and seller already exists")]
    RecordAlreadyExists,
    #[msg("Signer is not authorized for this action")]
    Unauthorized,
    #[msg("This escrow has already been resolved")]
    AlreadyResolved,
    #[msg("Could not derive a valid escrow address")]
    DerivationCollision,
    #[msg("Item label exceeds the maximum length")]
    ItemLabelTooLong,
}
