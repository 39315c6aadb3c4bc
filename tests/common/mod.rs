#![allow(dead_code)]

use cosmwasm_std::testing::{
    mock_dependencies, mock_env, mock_info, MockApi, MockQuerier, MockStorage,
};
use cosmwasm_std::{coins, from_json, Addr, Env, OwnedDeps, Response, Uint128};

use dfreelancer_marketplace_contract::contract::{execute, instantiate, query};
use dfreelancer_marketplace_contract::msg::{
    EscrowResponse, ExecuteMsg, FreelancerResponse, InstantiateMsg, JobResponse, QueryMsg,
};
use dfreelancer_marketplace_contract::state::{Freelancer, Job};

pub const DEPLOYER: &str = "deployer";
pub const ADMIN: &str = "admin";
pub const EMPLOYER: &str = "employer";
pub const FREELANCER: &str = "freelancer";
pub const OTHER_FREELANCER: &str = "freelancer2";
pub const STRANGER: &str = "stranger";
pub const DENOM: &str = "uxion";

pub type MockDeps = OwnedDeps<MockStorage, MockApi, MockQuerier>;

/// Instantiated with default settings and initialized with `ADMIN`.
pub fn setup_contract() -> (MockDeps, Env) {
    let mut deps = mock_dependencies();
    let env = mock_env();

    let msg = InstantiateMsg {
        denom: None,
        platform_incentive_percent: None,
    };
    instantiate(deps.as_mut(), env.clone(), mock_info(DEPLOYER, &[]), msg).unwrap();

    let init = ExecuteMsg::Initialize {
        admin: ADMIN.to_string(),
    };
    execute(deps.as_mut(), env.clone(), mock_info(DEPLOYER, &[]), init).unwrap();

    (deps, env)
}

pub fn freelancer_profile_msg(name: &str) -> ExecuteMsg {
    ExecuteMsg::RegisterFreelancer {
        name: name.to_string(),
        skills: "Rust, CosmWasm".to_string(),
        country: "Nigeria".to_string(),
        gig_title: "Smart contract development".to_string(),
        gig_description: "I write and audit CosmWasm contracts".to_string(),
        images: vec!["ipfs://avatar".to_string(), "ipfs://portfolio".to_string()],
        starting_price: Uint128::new(50),
    }
}

pub fn employer_profile_msg(name: &str) -> ExecuteMsg {
    ExecuteMsg::RegisterEmployer {
        name: name.to_string(),
        industry: "Fintech".to_string(),
        country: "Kenya".to_string(),
        image_uri: "ipfs://logo".to_string(),
    }
}

pub fn register_freelancer(deps: &mut MockDeps, env: &Env, sender: &str) -> Response {
    execute(
        deps.as_mut(),
        env.clone(),
        mock_info(sender, &[]),
        freelancer_profile_msg("Ada"),
    )
    .unwrap()
}

pub fn register_employer(deps: &mut MockDeps, env: &Env, sender: &str) -> Response {
    execute(
        deps.as_mut(),
        env.clone(),
        mock_info(sender, &[]),
        employer_profile_msg("Acme"),
    )
    .unwrap()
}

pub fn create_job(
    deps: &mut MockDeps,
    env: &Env,
    employer: &str,
    title: &str,
    budget: u128,
) -> u64 {
    let msg = ExecuteMsg::CreateJob {
        title: title.to_string(),
        description: "A job description".to_string(),
        budget: Uint128::new(budget),
    };
    let res = execute(deps.as_mut(), env.clone(), mock_info(employer, &[]), msg).unwrap();
    attr(&res, "job_id").parse().unwrap()
}

pub fn apply(deps: &mut MockDeps, env: &Env, applicant: &str, job_id: u64) -> Response {
    execute(
        deps.as_mut(),
        env.clone(),
        mock_info(applicant, &[]),
        ExecuteMsg::ApplyForJob { job_id },
    )
    .unwrap()
}

pub fn hire(deps: &mut MockDeps, env: &Env, employer: &str, job_id: u64, freelancer: &str) {
    execute(
        deps.as_mut(),
        env.clone(),
        mock_info(employer, &[]),
        ExecuteMsg::HireFreelancer {
            job_id,
            freelancer: freelancer.to_string(),
        },
    )
    .unwrap();
}

pub fn deposit(
    deps: &mut MockDeps,
    env: &Env,
    sender: &str,
    job_id: u64,
    amount: u128,
) -> Response {
    execute(
        deps.as_mut(),
        env.clone(),
        mock_info(sender, &coins(amount, DENOM)),
        ExecuteMsg::DepositFunds { job_id },
    )
    .unwrap()
}

pub fn release(
    deps: &mut MockDeps,
    env: &Env,
    employer: &str,
    job_id: u64,
    freelancer: &str,
) -> Response {
    execute(
        deps.as_mut(),
        env.clone(),
        mock_info(employer, &[]),
        ExecuteMsg::ReleaseEscrow {
            job_id,
            freelancer: freelancer.to_string(),
        },
    )
    .unwrap()
}

pub fn complete(
    deps: &mut MockDeps,
    env: &Env,
    employer: &str,
    job_id: u64,
    freelancer: &str,
) -> Response {
    execute(
        deps.as_mut(),
        env.clone(),
        mock_info(employer, &[]),
        ExecuteMsg::CompleteJob {
            job_id,
            freelancer: freelancer.to_string(),
        },
    )
    .unwrap()
}

/// Registered employer and freelancer, one job with the freelancer hired.
pub fn hired_job(deps: &mut MockDeps, env: &Env) -> u64 {
    register_employer(deps, env, EMPLOYER);
    register_freelancer(deps, env, FREELANCER);
    let job_id = create_job(deps, env, EMPLOYER, "Sample Job", 100);
    apply(deps, env, FREELANCER, job_id);
    hire(deps, env, EMPLOYER, job_id, FREELANCER);
    job_id
}

pub fn query_job(deps: &MockDeps, env: &Env, job_id: u64) -> Job {
    let res = query(deps.as_ref(), env.clone(), QueryMsg::GetJob { job_id }).unwrap();
    from_json::<JobResponse>(&res).unwrap().job
}

pub fn query_freelancer(deps: &MockDeps, env: &Env, address: &str) -> Freelancer {
    let msg = QueryMsg::GetFreelancer {
        address: address.to_string(),
    };
    let res = query(deps.as_ref(), env.clone(), msg).unwrap();
    from_json::<FreelancerResponse>(&res).unwrap().freelancer
}

pub fn query_escrow(deps: &MockDeps, env: &Env, employer: &str, job_id: u64) -> Uint128 {
    let msg = QueryMsg::GetEmployerEscrow {
        employer: employer.to_string(),
        job_id,
    };
    let res = query(deps.as_ref(), env.clone(), msg).unwrap();
    let escrow: EscrowResponse = from_json(&res).unwrap();
    assert_eq!(escrow.employer, Addr::unchecked(employer));
    escrow.amount
}

pub fn attr(res: &Response, key: &str) -> String {
    res.attributes
        .iter()
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
        .unwrap_or_else(|| panic!("missing attribute {}", key))
}

pub fn event_attr(res: &Response, ty: &str, key: &str) -> String {
    res.events
        .iter()
        .find(|e| e.ty == ty)
        .and_then(|e| e.attributes.iter().find(|a| a.key == key))
        .map(|a| a.value.clone())
        .unwrap_or_else(|| panic!("missing event attribute {}.{}", ty, key))
}
