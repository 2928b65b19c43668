use anchor_lang::prelude::*;
use std::result::Result;

use crate::constants::MAX_INSTANCES_PER_CREATOR;
use crate::error::CompanyError;

/// Append-only index of the companies one creator has instantiated.
/// Seeds: [b"registry", creator.key()]
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct CreatorRegistry {
    pub creator: Pubkey,
    /// Also the index (PDA seed) of the next company.
    pub instance_count: u64,
    #[max_len(32)]
    pub instances: Vec<Pubkey>,
    pub bump: u8,
}

impl CreatorRegistry {
    pub const SEED_PREFIX: &'static [u8] = b"registry";

    pub fn new(creator: Pubkey, bump: u8) -> Self {
        Self {
            creator,
            instance_count: 0,
            instances: Vec::with_capacity(MAX_INSTANCES_PER_CREATOR),
            bump,
        }
    }

    pub fn ensure_capacity(&self) -> Result<(), CompanyError> {
        if self.instances.len() >= MAX_INSTANCES_PER_CREATOR {
            Err(CompanyError::RegistryFull)
        } else {
            Ok(())
        }
    }

    /// Append `company`; returns the index it was stored under.
    pub fn record(&mut self, company: Pubkey) -> Result<u64, CompanyError> {
        self.ensure_capacity()?;
        let index = self.instance_count;
        self.instances.push(company);
        self.instance_count = self
            .instance_count
            .checked_add(1)
            .ok_or(CompanyError::MathOverflow)?;
        Ok(index)
    }

    pub fn get_instantiation_count(&self) -> u64 {
        self.instance_count
    }

    pub fn contains(&self, company: &Pubkey) -> bool {
        self.instances.iter().any(|c| c == company)
    }
}
