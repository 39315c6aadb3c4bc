use crate::error::ContractError;
use crate::escrow::{
    execute_collect_incentives, execute_deposit_funds, execute_release_escrow,
    execute_withdraw_earnings, handle_transfer_reply, PAYOUT_REPLY_ID,
};
use crate::helpers::{
    addr_validate, ensure_admin, ensure_no_funds, validate_incentive_percent, DEFAULT_DENOM,
    DEFAULT_INCENTIVE_PERCENT,
};
use crate::job_management::{
    execute_apply_for_job, execute_complete_job, execute_create_job, execute_hire_freelancer,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query_helpers::{
    query_admin, query_applicants, query_config, query_employer, query_employer_escrow,
    query_freelancer, query_freelancers, query_job, query_jobs, query_platform_stats, query_role,
    query_total_completed_jobs, query_total_employers, query_total_freelancers, query_total_jobs,
};
use crate::state::{Config, PlatformStats, CONFIG, STATS};
use crate::user_management::{
    execute_edit_employer_profile, execute_edit_freelancer_profile, execute_register_employer,
    execute_register_freelancer,
};

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdError, StdResult,
};
use cw2::{ensure_from_older_version, get_contract_version, set_contract_version};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:dfreelancer-marketplace-contract";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let platform_incentive_percent = msg
        .platform_incentive_percent
        .unwrap_or(DEFAULT_INCENTIVE_PERCENT);
    validate_incentive_percent(platform_incentive_percent)?;

    let denom = msg.denom.unwrap_or_else(|| DEFAULT_DENOM.to_string());
    if denom.trim().is_empty() {
        return Err(ContractError::InvalidInput {
            error: "Denom cannot be empty".to_string(),
        });
    }

    let config = Config {
        denom: denom.clone(),
        platform_incentive_percent,
        deployer: info.sender.clone(),
        admin: None,
        initialized: false,
    };

    CONFIG.save(deps.storage, &config)?;
    STATS.save(deps.storage, &PlatformStats::default())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("deployer", info.sender.to_string())
        .add_attribute("denom", denom)
        .add_attribute("platform_incentive", platform_incentive_percent.to_string())
        .add_attribute("contract_name", CONTRACT_NAME)
        .add_attribute("contract_version", CONTRACT_VERSION))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Initialize { admin } => execute_initialize(deps, env, info, admin),

        // User Profile Management
        ExecuteMsg::RegisterFreelancer {
            name,
            skills,
            country,
            gig_title,
            gig_description,
            images,
            starting_price,
        } => execute_register_freelancer(
            deps,
            env,
            info,
            name,
            skills,
            country,
            gig_title,
            gig_description,
            images,
            starting_price,
        ),
        ExecuteMsg::EditFreelancerProfile {
            name,
            skills,
            country,
            gig_title,
            gig_description,
            images,
            starting_price,
        } => execute_edit_freelancer_profile(
            deps,
            env,
            info,
            name,
            skills,
            country,
            gig_title,
            gig_description,
            images,
            starting_price,
        ),
        ExecuteMsg::RegisterEmployer {
            name,
            industry,
            country,
            image_uri,
        } => execute_register_employer(deps, env, info, name, industry, country, image_uri),
        ExecuteMsg::EditEmployerProfile {
            name,
            industry,
            country,
            image_uri,
        } => execute_edit_employer_profile(deps, env, info, name, industry, country, image_uri),

        // Job Management
        ExecuteMsg::CreateJob {
            title,
            description,
            budget,
        } => execute_create_job(deps, env, info, title, description, budget),
        ExecuteMsg::ApplyForJob { job_id } => execute_apply_for_job(deps, env, info, job_id),
        ExecuteMsg::HireFreelancer { job_id, freelancer } => {
            execute_hire_freelancer(deps, env, info, job_id, freelancer)
        }
        ExecuteMsg::CompleteJob { job_id, freelancer } => {
            execute_complete_job(deps, env, info, job_id, freelancer)
        }

        // Escrow Management
        ExecuteMsg::DepositFunds { job_id } => execute_deposit_funds(deps, env, info, job_id),
        ExecuteMsg::ReleaseEscrow { job_id, freelancer } => {
            execute_release_escrow(deps, env, info, job_id, freelancer)
        }
        ExecuteMsg::WithdrawEarnings {} => execute_withdraw_earnings(deps, env, info),

        // Admin Functions
        ExecuteMsg::CollectIncentives {} => execute_collect_incentives(deps, env, info),
        ExecuteMsg::UpdateAdmin { admin } => execute_update_admin(deps, env, info, admin),
    }
}

/// Record the platform admin. Only the deployer may call this, and only once.
pub fn execute_initialize(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    admin: String,
) -> Result<Response, ContractError> {
    ensure_no_funds(&info)?;
    let mut config = CONFIG.load(deps.storage)?;

    if info.sender != config.deployer {
        return Err(ContractError::NotAuthorized {});
    }
    if config.initialized {
        return Err(ContractError::AlreadyInitialized {});
    }

    let admin = addr_validate(deps.api, &admin)?;
    config.admin = Some(admin.clone());
    config.initialized = true;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "initialize")
        .add_attribute("admin", admin.to_string()))
}

pub fn execute_update_admin(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    admin: Option<String>,
) -> Result<Response, ContractError> {
    ensure_no_funds(&info)?;
    let mut config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info.sender)?;

    config.admin = admin.map(|a| addr_validate(deps.api, &a)).transpose()?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "update_admin")
        .add_attribute("old_admin", info.sender.to_string())
        .add_attribute(
            "new_admin",
            config
                .admin
                .map_or_else(|| "none".to_string(), |a| a.to_string()),
        ))
}

#[entry_point]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::GetJob { job_id } => to_json_binary(&query_job(deps, job_id)?),
        QueryMsg::GetJobs {
            start_after,
            limit,
            employer,
            completed,
        } => to_json_binary(&query_jobs(deps, start_after, limit, employer, completed)?),
        QueryMsg::GetApplicants { job_id } => to_json_binary(&query_applicants(deps, job_id)?),
        QueryMsg::GetFreelancer { address } => to_json_binary(&query_freelancer(deps, address)?),
        QueryMsg::GetFreelancers { start_after, limit } => {
            to_json_binary(&query_freelancers(deps, start_after, limit)?)
        }
        QueryMsg::GetEmployer { address } => to_json_binary(&query_employer(deps, address)?),
        QueryMsg::GetRole { address } => to_json_binary(&query_role(deps, address)?),
        QueryMsg::GetEmployerEscrow { employer, job_id } => {
            to_json_binary(&query_employer_escrow(deps, employer, job_id)?)
        }
        QueryMsg::TotalJobs {} => to_json_binary(&query_total_jobs(deps)?),
        QueryMsg::TotalFreelancers {} => to_json_binary(&query_total_freelancers(deps)?),
        QueryMsg::TotalEmployers {} => to_json_binary(&query_total_employers(deps)?),
        QueryMsg::TotalCompletedJobs {} => to_json_binary(&query_total_completed_jobs(deps)?),
        QueryMsg::GetPlatformStats {} => to_json_binary(&query_platform_stats(deps)?),
        QueryMsg::GetConfig {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Admin {} => to_json_binary(&query_admin(deps)?),
    }
}

#[entry_point]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        PAYOUT_REPLY_ID => handle_transfer_reply(deps, msg),
        id => Err(ContractError::Std(StdError::generic_err(format!(
            "Unknown reply id: {}",
            id
        )))),
    }
}

#[entry_point]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::InvalidMigration {});
    }
    let previous = ensure_from_older_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("from_version", previous.to_string())
        .add_attribute("to_version", CONTRACT_VERSION))
}
