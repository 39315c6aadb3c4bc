use crate::state::{Config, Employer, Freelancer, Job, PlatformStats, Role};
use cosmwasm_schema::QueryResponses;
use cosmwasm_std::{Addr, Uint128};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {
    pub denom: Option<String>,
    pub platform_incentive_percent: Option<u64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MigrateMsg {}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub enum ExecuteMsg {
    /// One-time setup after instantiation. Only the deployer may call it.
    Initialize {
        admin: String,
    },

    // User Profile Management
    RegisterFreelancer {
        name: String,
        skills: String,
        country: String,
        gig_title: String,
        gig_description: String,
        images: Vec<String>,
        starting_price: Uint128,
    },
    EditFreelancerProfile {
        name: String,
        skills: String,
        country: String,
        gig_title: String,
        gig_description: String,
        images: Vec<String>,
        starting_price: Uint128,
    },
    RegisterEmployer {
        name: String,
        industry: String,
        country: String,
        image_uri: String,
    },
    EditEmployerProfile {
        name: String,
        industry: String,
        country: String,
        image_uri: String,
    },

    // Job Management
    CreateJob {
        title: String,
        description: String,
        budget: Uint128,
    },
    ApplyForJob {
        job_id: u64,
    },
    HireFreelancer {
        job_id: u64,
        freelancer: String,
    },
    CompleteJob {
        job_id: u64,
        freelancer: String,
    },

    // Escrow Management
    /// Payable: the attached native coin is added to the job's escrow.
    DepositFunds {
        job_id: u64,
    },
    ReleaseEscrow {
        job_id: u64,
        freelancer: String,
    },
    WithdrawEarnings {},

    // Admin Functions
    CollectIncentives {},
    UpdateAdmin {
        admin: Option<String>,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema, QueryResponses)]
pub enum QueryMsg {
    // Job Queries
    #[returns(JobResponse)]
    GetJob { job_id: u64 },
    #[returns(JobsResponse)]
    GetJobs {
        start_after: Option<u64>,
        limit: Option<u32>,
        employer: Option<String>,
        completed: Option<bool>,
    },
    #[returns(ApplicantsResponse)]
    GetApplicants { job_id: u64 },

    // Identity Queries
    #[returns(FreelancerResponse)]
    GetFreelancer { address: String },
    #[returns(FreelancersResponse)]
    GetFreelancers {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(EmployerResponse)]
    GetEmployer { address: String },
    #[returns(RoleResponse)]
    GetRole { address: String },

    // Escrow Queries
    #[returns(EscrowResponse)]
    GetEmployerEscrow { employer: String, job_id: u64 },

    // Counters
    #[returns(CountResponse)]
    TotalJobs {},
    #[returns(CountResponse)]
    TotalFreelancers {},
    #[returns(CountResponse)]
    TotalEmployers {},
    #[returns(CountResponse)]
    TotalCompletedJobs {},
    #[returns(PlatformStatsResponse)]
    GetPlatformStats {},

    // Config Query
    #[returns(ConfigResponse)]
    GetConfig {},
    #[returns(AdminResponse)]
    Admin {},
}

// Response types
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct JobResponse {
    pub job: Job,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct JobsResponse {
    pub jobs: Vec<Job>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ApplicantsResponse {
    pub applicants: Vec<Addr>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct FreelancerResponse {
    pub freelancer: Freelancer,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct FreelancersResponse {
    pub freelancers: Vec<Freelancer>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct EmployerResponse {
    pub employer: Employer,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct RoleResponse {
    pub role: Option<Role>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct EscrowResponse {
    pub employer: Addr,
    pub job_id: u64,
    pub amount: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct CountResponse {
    pub count: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct PlatformStatsResponse {
    pub stats: PlatformStats,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct AdminResponse {
    pub admin: Option<Addr>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ConfigResponse {
    pub config: Config,
}
