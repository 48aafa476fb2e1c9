use anchor_lang::prelude::*;

#[event]
pub struct CampaignCreated {
    pub campaign: Pubkey,
    pub owner: Pubkey,
    pub name: String,
    pub description: String,
    pub timestamp: i64,
}
