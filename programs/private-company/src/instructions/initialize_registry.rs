use anchor_lang::prelude::*;

use crate::state::CreatorRegistry;

pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
    let creator = ctx.accounts.creator.key();
    ctx.accounts
        .registry
        .set_inner(CreatorRegistry::new(creator, ctx.bumps.registry));

    emit!(RegistryInitialized { creator });
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    #[account(
        init,
        payer = creator,
        space = 8 + CreatorRegistry::INIT_SPACE,
        seeds = [CreatorRegistry::SEED_PREFIX, creator.key().as_ref()],
        bump
    )]
    pub registry: Account<'info, CreatorRegistry>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct RegistryInitialized {
    pub creator: Pubkey,
}
