pub mod contract;
pub mod error;
pub mod escrow;
pub mod events;
pub mod helpers;
pub mod job_management;
pub mod msg;
pub mod query_helpers;
pub mod state;
pub mod user_management;

pub use crate::error::ContractError;
pub use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};

#[cfg(not(feature = "library"))]
pub use crate::contract::{execute, instantiate, migrate, query, reply};
