use anchor_lang::prelude::*;

use crate::events::CampaignCreated;
use crate::state::Campaign;

#[derive(Accounts)]
pub struct Create<'info> {
    /// Fresh account that will hold the campaign
    #[account(
        init,
        payer = user,
        space = Campaign::SPACE,
    )]
    pub campaign: Account<'info, Campaign>,

    /// Pays for the allocation and becomes the owner
    #[account(mut)]
    pub user: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Create>, name: String, description: String) -> Result<()> {
    Campaign::validate(&name, &description)?;

    let campaign = &mut ctx.accounts.campaign;
    campaign.owner = ctx.accounts.user.key();
    campaign.name = name;
    campaign.description = description;

    msg!("Campaign {} created by {}", campaign.key(), campaign.owner);

    emit!(CampaignCreated {
        campaign: campaign.key(),
        owner: campaign.owner,
        name: campaign.name.clone(),
        description: campaign.description.clone(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
