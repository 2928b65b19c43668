pub mod initialize_registry;
pub mod create_company;
pub mod submit_transaction;
pub mod confirm_transaction;
pub mod execution;
pub mod release_vested_equity;
pub mod quote_vested_equity;
pub mod transfer_equity;
pub mod fund_treasury;
pub mod stop_contract;
pub mod resume_contract;
pub mod company_views;
pub mod registry_views;

pub use initialize_registry::*;
pub use create_company::*;
pub use submit_transaction::*;
pub use confirm_transaction::*;
pub use execution::*;
pub use release_vested_equity::*;
pub use quote_vested_equity::*;
pub use transfer_equity::*;
pub use fund_treasury::*;
pub use stop_contract::*;
pub use resume_contract::*;
pub use company_views::*;
pub use registry_views::*;
