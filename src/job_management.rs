use crate::error::ContractError;
use crate::events::LedgerEvent;
use crate::helpers::{
    addr_validate, ensure_job_employer, ensure_no_funds, load_job, validate_job_inputs,
};
use crate::state::{Job, FREELANCERS, JOBS, STATS};
use cosmwasm_std::{DepsMut, Env, Event, MessageInfo, Response, Uint128};

/// Create a new job owned by the caller. Funding happens separately through
/// `DepositFunds`, so no coins are accepted here.
pub fn execute_create_job(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    title: String,
    description: String,
    budget: Uint128,
) -> Result<Response, ContractError> {
    ensure_no_funds(&info)?;
    validate_job_inputs(&title, &description)?;

    let stats = STATS.update(deps.storage, |mut stats| -> Result<_, ContractError> {
        stats.total_jobs = stats
            .total_jobs
            .checked_add(1)
            .ok_or_else(|| ContractError::InvalidInput {
                error: "Job id space exhausted".to_string(),
            })?;
        Ok(stats)
    })?;
    let job_id = stats.total_jobs;

    let job = Job {
        id: job_id,
        employer: info.sender.clone(),
        title: title.clone(),
        description,
        budget,
        completed: false,
        hired_freelancer: None,
        applicants: vec![],
        created_at: env.block.time,
    };
    JOBS.save(deps.storage, job_id, &job)?;

    Ok(Response::new()
        .add_attribute("method", "create_job")
        .add_attribute("job_id", job_id.to_string())
        .add_attribute("employer", info.sender.to_string())
        .add_attribute("budget", budget.to_string())
        .add_event(Event::from(LedgerEvent::JobCreated { job_id, title })))
}

/// Append the caller to the job's applicants. Applying twice is a no-op.
pub fn execute_apply_for_job(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    job_id: u64,
) -> Result<Response, ContractError> {
    ensure_no_funds(&info)?;
    let mut job = load_job(deps.storage, job_id)?;

    if job.employer == info.sender {
        return Err(ContractError::SelfApplication {});
    }

    let already_applied = job.applicants.contains(&info.sender);
    if !already_applied {
        job.applicants.push(info.sender.clone());
        JOBS.save(deps.storage, job_id, &job)?;
    }

    Ok(Response::new()
        .add_attribute("method", "apply_for_job")
        .add_attribute("job_id", job_id.to_string())
        .add_attribute("applicant", info.sender.to_string())
        .add_attribute("already_applied", already_applied.to_string())
        .add_attribute("applicants_count", job.applicants.len().to_string()))
}

/// Assign an applicant to the job. Hiring again replaces the assignee.
pub fn execute_hire_freelancer(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    job_id: u64,
    freelancer: String,
) -> Result<Response, ContractError> {
    ensure_no_funds(&info)?;
    let mut job = load_job(deps.storage, job_id)?;
    ensure_job_employer(&job, &info.sender)?;
    let freelancer = addr_validate(deps.api, &freelancer)?;

    if !job.applicants.contains(&freelancer) {
        return Err(ContractError::NotApplicant {});
    }

    job.hired_freelancer = Some(freelancer.clone());
    JOBS.save(deps.storage, job_id, &job)?;

    Ok(Response::new()
        .add_attribute("method", "hire_freelancer")
        .add_attribute("job_id", job_id.to_string())
        .add_attribute("employer", info.sender.to_string())
        .add_attribute("freelancer", freelancer.to_string()))
}

/// Mark the job completed. The named freelancer must be the hired one.
///
/// Counters move only on the first completion; completing an already
/// completed job succeeds without changing them.
pub fn execute_complete_job(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    job_id: u64,
    freelancer: String,
) -> Result<Response, ContractError> {
    ensure_no_funds(&info)?;
    let mut job = load_job(deps.storage, job_id)?;
    ensure_job_employer(&job, &info.sender)?;
    let freelancer = addr_validate(deps.api, &freelancer)?;

    if job.hired_freelancer.as_ref() != Some(&freelancer) {
        return Err(ContractError::FreelancerMismatch {});
    }

    let newly_completed = !job.completed;
    if newly_completed {
        job.completed = true;
        JOBS.save(deps.storage, job_id, &job)?;

        STATS.update(deps.storage, |mut stats| -> Result<_, ContractError> {
            stats.total_completed_jobs += 1;
            Ok(stats)
        })?;

        if let Some(mut record) = FREELANCERS.may_load(deps.storage, &freelancer)? {
            record.jobs_completed += 1;
            FREELANCERS.save(deps.storage, &freelancer, &record)?;
        }
    }

    Ok(Response::new()
        .add_attribute("method", "complete_job")
        .add_attribute("job_id", job_id.to_string())
        .add_attribute("freelancer", freelancer.to_string())
        .add_attribute("newly_completed", newly_completed.to_string()))
}
