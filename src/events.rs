//! Domain events emitted for off-chain indexers and the front-end.
//!
//! Each variant becomes a custom [`Event`]; the chain prefixes the type with
//! `wasm-`, so `JobCreated` is observed as `wasm-job_created`.

use cosmwasm_std::{Addr, Event, Uint128};

#[derive(Clone, Debug, PartialEq)]
pub enum LedgerEvent {
    FreelancerRegistered {
        freelancer: Addr,
        name: String,
    },
    EmployerRegistered {
        employer: Addr,
        name: String,
    },
    JobCreated {
        job_id: u64,
        title: String,
    },
    FundsDeposited {
        job_id: u64,
        sender: Addr,
        amount: Uint128,
    },
    FundsReleased {
        job_id: u64,
        freelancer: Addr,
        amount: Uint128,
    },
    /// `amount` is the payout actually sent, net of the platform incentive.
    WithdrawFund {
        freelancer: Addr,
        amount: Uint128,
    },
}

impl LedgerEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            LedgerEvent::FreelancerRegistered { .. } => "freelancer_registered",
            LedgerEvent::EmployerRegistered { .. } => "employer_registered",
            LedgerEvent::JobCreated { .. } => "job_created",
            LedgerEvent::FundsDeposited { .. } => "funds_deposited",
            LedgerEvent::FundsReleased { .. } => "funds_released",
            LedgerEvent::WithdrawFund { .. } => "withdraw_fund",
        }
    }
}

impl From<LedgerEvent> for Event {
    fn from(event: LedgerEvent) -> Self {
        let base = Event::new(event.event_type());
        match event {
            LedgerEvent::FreelancerRegistered { freelancer, name } => base
                .add_attribute("freelancer", freelancer)
                .add_attribute("name", name),
            LedgerEvent::EmployerRegistered { employer, name } => base
                .add_attribute("employer", employer)
                .add_attribute("name", name),
            LedgerEvent::JobCreated { job_id, title } => base
                .add_attribute("job_id", job_id.to_string())
                .add_attribute("title", title),
            LedgerEvent::FundsDeposited {
                job_id,
                sender,
                amount,
            } => base
                .add_attribute("job_id", job_id.to_string())
                .add_attribute("sender", sender)
                .add_attribute("amount", amount.to_string()),
            LedgerEvent::FundsReleased {
                job_id,
                freelancer,
                amount,
            } => base
                .add_attribute("job_id", job_id.to_string())
                .add_attribute("freelancer", freelancer)
                .add_attribute("amount", amount.to_string()),
            LedgerEvent::WithdrawFund { freelancer, amount } => base
                .add_attribute("freelancer", freelancer)
                .add_attribute("amount", amount.to_string()),
        }
    }
}
