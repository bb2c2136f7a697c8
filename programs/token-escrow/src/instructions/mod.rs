pub mod cancel_escrow;
pub mod complete_escrow;
pub mod create_escrow;

pub use cancel_escrow::*;
pub use complete_escrow::*;
pub use create_escrow::*;
