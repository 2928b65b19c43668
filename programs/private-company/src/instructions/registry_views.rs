use anchor_lang::prelude::*;

use crate::state::CreatorRegistry;

pub fn get_instantiation_count(ctx: Context<ReadRegistry>, _creator: Pubkey) -> Result<u64> {
    Ok(ctx.accounts.registry.get_instantiation_count())
}

/// True when `candidate` is a company `creator` instantiated through this program.
pub fn is_instantiation(ctx: Context<ReadRegistry>, _creator: Pubkey, candidate: Pubkey) -> Result<bool> {
    Ok(ctx.accounts.registry.contains(&candidate))
}

#[derive(Accounts)]
#[instruction(creator: Pubkey)]
pub struct ReadRegistry<'info> {
    #[account(
        seeds = [CreatorRegistry::SEED_PREFIX, creator.as_ref()],
        bump = registry.bump
    )]
    pub registry: Account<'info, CreatorRegistry>,
}
