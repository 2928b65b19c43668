use anchor_lang::prelude::*;
use std::result::Result;

use crate::constants::MAX_OWNERS;
use crate::error::CompanyError;

/// Founders of a company, in the order they joined.
///
/// There is no public grant path: members are seeded at genesis and
/// otherwise only added by an executed `NewFounder` action.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct OwnerSet {
    #[max_len(10)]
    members: Vec<Pubkey>,
}

impl OwnerSet {
    /// Validate and seed the genesis founders.
    pub fn from_founders(founders: &[Pubkey]) -> Result<Self, CompanyError> {
        if founders.is_empty() {
            return Err(CompanyError::EmptyOwnerSet);
        }
        let mut set = Self::default();
        for founder in founders {
            set.add(*founder)?;
        }
        Ok(set)
    }

    pub fn contains(&self, who: &Pubkey) -> bool {
        self.members.iter().any(|m| m == who)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[Pubkey] {
        &self.members
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= MAX_OWNERS
    }

    pub fn ensure_owner(&self, who: &Pubkey) -> Result<(), CompanyError> {
        if self.contains(who) {
            Ok(())
        } else {
            Err(CompanyError::NotAnOwner)
        }
    }

    /// Preconditions for admitting `candidate`, checked without mutating.
    pub fn check_admissible(&self, candidate: &Pubkey) -> Result<(), CompanyError> {
        if *candidate == Pubkey::default() {
            return Err(CompanyError::InvalidPubkey);
        }
        if self.contains(candidate) {
            return Err(CompanyError::AlreadyAnOwner);
        }
        if self.is_full() {
            return Err(CompanyError::TooManyOwners);
        }
        Ok(())
    }

    pub(crate) fn add(&mut self, candidate: Pubkey) -> Result<(), CompanyError> {
        match self.check_admissible(&candidate) {
            Err(CompanyError::AlreadyAnOwner) => Err(CompanyError::DuplicateOwner),
            Err(e) => Err(e),
            Ok(()) => {
                self.members.push(candidate);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    #[test]
    fn genesis_keeps_order() {
        let set = OwnerSet::from_founders(&[key(1), key(2), key(3)]).unwrap();
        assert_eq!(set.members(), &[key(1), key(2), key(3)]);
        assert!(set.contains(&key(2)));
        assert!(!set.contains(&key(9)));
    }

    #[test]
    fn genesis_rejects_empty_and_duplicates() {
        assert!(matches!(
            OwnerSet::from_founders(&[]),
            Err(CompanyError::EmptyOwnerSet)
        ));
        assert!(matches!(
            OwnerSet::from_founders(&[key(1), key(1)]),
            Err(CompanyError::DuplicateOwner)
        ));
        assert!(matches!(
            OwnerSet::from_founders(&[Pubkey::default()]),
            Err(CompanyError::InvalidPubkey)
        ));
    }

    #[test]
    fn capacity_is_enforced() {
        let founders: Vec<Pubkey> = (1..=MAX_OWNERS as u8).map(key).collect();
        let set = OwnerSet::from_founders(&founders).unwrap();
        assert!(set.is_full());
        assert!(matches!(
            set.check_admissible(&key(200)),
            Err(CompanyError::TooManyOwners)
        ));

        let too_many: Vec<Pubkey> = (1..=MAX_OWNERS as u8 + 1).map(key).collect();
        assert!(matches!(
            OwnerSet::from_founders(&too_many),
            Err(CompanyError::TooManyOwners)
        ));
    }

    #[test]
    fn admissibility_for_existing_owner() {
        let set = OwnerSet::from_founders(&[key(1)]).unwrap();
        assert!(matches!(
            set.check_admissible(&key(1)),
            Err(CompanyError::AlreadyAnOwner)
        ));
        assert!(set.check_admissible(&key(2)).is_ok());
        assert!(matches!(set.ensure_owner(&key(2)), Err(CompanyError::NotAnOwner)));
    }
}
