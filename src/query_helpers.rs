use cosmwasm_std::{Deps, Order, StdError, StdResult};
use cw_storage_plus::Bound;

use crate::helpers::registered_role;
use crate::msg::{
    AdminResponse, ApplicantsResponse, ConfigResponse, CountResponse, EmployerResponse,
    EscrowResponse, FreelancerResponse, FreelancersResponse, JobResponse, JobsResponse,
    PlatformStatsResponse, RoleResponse,
};
use crate::state::{Job, CONFIG, EMPLOYERS, ESCROW, FREELANCERS, JOBS, STATS};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

fn page_limit(limit: Option<u32>) -> usize {
    limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize
}

fn load_job(deps: Deps, job_id: u64) -> StdResult<Job> {
    JOBS.may_load(deps.storage, job_id)?
        .ok_or_else(|| StdError::not_found(format!("job {}", job_id)))
}

pub fn query_job(deps: Deps, job_id: u64) -> StdResult<JobResponse> {
    Ok(JobResponse {
        job: load_job(deps, job_id)?,
    })
}

/// Jobs in id order, optionally filtered by owner and completion flag.
pub fn query_jobs(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
    employer: Option<String>,
    completed: Option<bool>,
) -> StdResult<JobsResponse> {
    let limit = page_limit(limit);
    let start = start_after.map(Bound::exclusive);
    let employer = employer
        .map(|e| deps.api.addr_validate(&e))
        .transpose()?;

    let jobs = JOBS
        .range(deps.storage, start, None, Order::Ascending)
        .filter(|item| match item {
            Ok((_, job)) => {
                employer.as_ref().map_or(true, |e| job.employer == *e)
                    && completed.map_or(true, |c| job.completed == c)
            }
            Err(_) => true,
        })
        .take(limit)
        .map(|item| item.map(|(_, job)| job))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(JobsResponse { jobs })
}

pub fn query_applicants(deps: Deps, job_id: u64) -> StdResult<ApplicantsResponse> {
    Ok(ApplicantsResponse {
        applicants: load_job(deps, job_id)?.applicants,
    })
}

pub fn query_freelancer(deps: Deps, address: String) -> StdResult<FreelancerResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let freelancer = FREELANCERS
        .may_load(deps.storage, &addr)?
        .ok_or_else(|| StdError::not_found(format!("freelancer {}", addr)))?;
    Ok(FreelancerResponse { freelancer })
}

/// Registered freelancers in address order.
pub fn query_freelancers(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<FreelancersResponse> {
    let limit = page_limit(limit);
    let start_addr = start_after
        .map(|s| deps.api.addr_validate(&s))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let freelancers = FREELANCERS
        .range(deps.storage, start, None, Order::Ascending)
        .filter(|item| item.as_ref().map_or(true, |(_, f)| f.registered))
        .take(limit)
        .map(|item| item.map(|(_, f)| f))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(FreelancersResponse { freelancers })
}

pub fn query_employer(deps: Deps, address: String) -> StdResult<EmployerResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let employer = EMPLOYERS
        .may_load(deps.storage, &addr)?
        .ok_or_else(|| StdError::not_found(format!("employer {}", addr)))?;
    Ok(EmployerResponse { employer })
}

pub fn query_role(deps: Deps, address: String) -> StdResult<RoleResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let role = registered_role(deps.storage, &addr)?;
    Ok(RoleResponse { role })
}

pub fn query_employer_escrow(
    deps: Deps,
    employer: String,
    job_id: u64,
) -> StdResult<EscrowResponse> {
    let employer = deps.api.addr_validate(&employer)?;
    let amount = ESCROW
        .may_load(deps.storage, (&employer, job_id))?
        .unwrap_or_default();
    Ok(EscrowResponse {
        employer,
        job_id,
        amount,
    })
}

pub fn query_total_jobs(deps: Deps) -> StdResult<CountResponse> {
    Ok(CountResponse {
        count: STATS.load(deps.storage)?.total_jobs,
    })
}

pub fn query_total_freelancers(deps: Deps) -> StdResult<CountResponse> {
    Ok(CountResponse {
        count: STATS.load(deps.storage)?.total_freelancers,
    })
}

pub fn query_total_employers(deps: Deps) -> StdResult<CountResponse> {
    Ok(CountResponse {
        count: STATS.load(deps.storage)?.total_employers,
    })
}

pub fn query_total_completed_jobs(deps: Deps) -> StdResult<CountResponse> {
    Ok(CountResponse {
        count: STATS.load(deps.storage)?.total_completed_jobs,
    })
}

pub fn query_platform_stats(deps: Deps) -> StdResult<PlatformStatsResponse> {
    Ok(PlatformStatsResponse {
        stats: STATS.load(deps.storage)?,
    })
}

pub fn query_admin(deps: Deps) -> StdResult<AdminResponse> {
    Ok(AdminResponse {
        admin: CONFIG.load(deps.storage)?.admin,
    })
}

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    Ok(ConfigResponse {
        config: CONFIG.load(deps.storage)?,
    })
}
