use anchor_lang::prelude::*;

#[error_code]
pub enum CrowdfundingError {
    #[msg("Field exceeds its maximum length in bytes")]
    FieldTooLong,

    #[msg("No campaign account exists at this address")]
    AccountNotFound,
}
