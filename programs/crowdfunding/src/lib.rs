pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;
use instructions::*;

declare_id!("BrpDKtbu9Z6dHZteU1sQc8644QDZCgjNKU1KUNiGhrQQ");

/// Crowdfunding Program
///
/// Keeps a registry of campaigns. Each campaign lives in an account whose
/// address is chosen by the caller and records who paid for it.
#[program]
pub mod crowdfunding {
    use super::*;

    /// Liveness check. Touches no accounts.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        initialize::handler(ctx)
    }

    /// Create a campaign at a fresh account
    ///
    /// The `campaign` account must sign so the system program can allocate
    /// it; `user` pays the rent and becomes the campaign owner.
    pub fn create(ctx: Context<Create>, name: String, description: String) -> Result<()> {
        create::handler(ctx, name, description)
    }
}
