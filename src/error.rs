use cosmwasm_std::{OverflowError, StdError};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Math overflow: {0}")]
    Overflow(#[from] OverflowError),

    #[error("Payment error: {0}")]
    Payment(#[from] PaymentError),

    #[error("Address already holds the other marketplace role")]
    RoleConflict {},

    #[error("Address is not registered for this role")]
    NotRegistered {},

    #[error("Job {job_id} not found")]
    JobNotFound { job_id: u64 },

    #[error("Not authorized")]
    NotAuthorized {},

    #[error("Employer cannot apply to their own job")]
    SelfApplication {},

    #[error("Freelancer is not the one hired for this job")]
    FreelancerMismatch {},

    #[error("Freelancer has not applied to this job")]
    NotApplicant {},

    #[error("Insufficient balance")]
    InsufficientBalance {},

    #[error("Native transfer failed: {reason}")]
    TransferFailed { reason: String },

    #[error("Contract already initialized")]
    AlreadyInitialized {},

    #[error("Invalid input: {error}")]
    InvalidInput { error: String },

    #[error("Invalid funds provided")]
    InvalidFunds {},

    #[error("Platform incentive too high: maximum {max}%")]
    IncentiveTooHigh { max: u64 },

    #[error("Cannot migrate from a different contract")]
    InvalidMigration {},
}
