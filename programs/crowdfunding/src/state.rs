use anchor_lang::prelude::*;

use crate::error::CrowdfundingError;

/// A crowdfunding campaign stored at a caller-chosen address
#[account]
#[derive(InitSpace, Debug, PartialEq)]
pub struct Campaign {
    /// Wallet that paid for and created the campaign
    pub owner: Pubkey,
    /// Campaign title, at most `MAX_NAME_LEN` bytes
    // max_len values must change together with MAX_NAME_LEN / MAX_DESCRIPTION_LEN
    #[max_len(32)]
    pub name: String,
    /// Free-form description, at most `MAX_DESCRIPTION_LEN` bytes
    #[max_len(200)]
    pub description: String,
}

impl Campaign {
    pub const MAX_NAME_LEN: usize = 32;
    pub const MAX_DESCRIPTION_LEN: usize = 200;

    /// Allocation size including the account discriminator
    pub const SPACE: usize = 8 + Self::INIT_SPACE;

    /// Lengths are measured in UTF-8 bytes, each field against its own limit.
    pub fn validate(name: &str, description: &str) -> Result<()> {
        require!(
            name.len() <= Self::MAX_NAME_LEN,
            CrowdfundingError::FieldTooLong
        );
        require!(
            description.len() <= Self::MAX_DESCRIPTION_LEN,
            CrowdfundingError::FieldTooLong
        );
        Ok(())
    }

    /// Decode the campaign held by an account, given its owner and data.
    ///
    /// An absent account, an empty one, or one owned by another program has
    /// never been through `create`, so all three report `AccountNotFound`.
    pub fn fetch(account: Option<(&Pubkey, &[u8])>) -> Result<Self> {
        let (owner, data) = account.ok_or(CrowdfundingError::AccountNotFound)?;
        require_keys_eq!(*owner, crate::ID, CrowdfundingError::AccountNotFound);
        require!(!data.is_empty(), CrowdfundingError::AccountNotFound);
        Self::try_deserialize(&mut &data[..])
    }
}
