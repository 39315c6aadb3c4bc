use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Freelancer {
    pub address: Addr,
    pub name: String,
    pub skills: String,
    pub country: String,
    pub gig_title: String,
    pub gig_description: String,
    pub images: Vec<String>, // ordered, first one is the profile picture
    pub jobs_completed: u64,
    pub registered: bool,
    pub registration_date: Timestamp,
    pub starting_price: Uint128,
    /// Released earnings not yet withdrawn, before the platform incentive.
    pub balance: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Employer {
    pub address: Addr,
    pub name: String,
    pub industry: String,
    pub country: String,
    pub image_uri: String,
    pub registered: bool,
    pub registration_date: Timestamp,
    /// Cumulative deposits made by this employer. Informational only.
    pub total_deposited: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Job {
    pub id: u64,
    pub employer: Addr,
    pub title: String,
    pub description: String,
    pub budget: Uint128,
    pub completed: bool,
    pub hired_freelancer: Option<Addr>,
    pub applicants: Vec<Addr>,
    pub created_at: Timestamp,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
pub enum Role {
    Freelancer,
    Employer,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub denom: String,
    pub platform_incentive_percent: u64, // Max 10%
    pub deployer: Addr,
    /// Set once by `Initialize`, then only changed by the admin.
    pub admin: Option<Addr>,
    pub initialized: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema, Default)]
pub struct PlatformStats {
    pub total_jobs: u64,
    pub total_freelancers: u64,
    pub total_employers: u64,
    pub total_completed_jobs: u64,
    pub retained_incentives: Uint128,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const STATS: Item<PlatformStats> = Item::new("stats");

pub const FREELANCERS: Map<&Addr, Freelancer> = Map::new("freelancers");
pub const EMPLOYERS: Map<&Addr, Employer> = Map::new("employers");

// job ids are handed out from STATS.total_jobs, starting at 1
pub const JOBS: Map<u64, Job> = Map::new("jobs");

// (employer, job_id) -> held native amount
pub const ESCROW: Map<(&Addr, u64), Uint128> = Map::new("escrow");
