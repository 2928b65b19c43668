pub mod action;
pub mod breaker;
pub mod company;
pub mod ledger;
pub mod owners;
pub mod registry;
pub mod vesting;

pub use action::*;
pub use breaker::*;
pub use company::*;
pub use ledger::*;
pub use owners::*;
pub use registry::*;
pub use vesting::*;
