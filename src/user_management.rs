use crate::error::ContractError;
use crate::events::LedgerEvent;
use crate::helpers::{
    ensure_no_funds, registered_role, validate_employer_profile, validate_freelancer_profile,
};
use crate::state::{Employer, Freelancer, Role, EMPLOYERS, FREELANCERS, STATS};
use cosmwasm_std::{DepsMut, Env, Event, MessageInfo, Response, Uint128};

/// Register (or re-register) the caller as a freelancer.
///
/// Re-registering overwrites the profile but keeps the withdrawable balance,
/// the completed-jobs counter and the original registration date.
#[allow(clippy::too_many_arguments)]
pub fn execute_register_freelancer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    name: String,
    skills: String,
    country: String,
    gig_title: String,
    gig_description: String,
    images: Vec<String>,
    starting_price: Uint128,
) -> Result<Response, ContractError> {
    ensure_no_funds(&info)?;
    validate_freelancer_profile(
        &name,
        &skills,
        &country,
        &gig_title,
        &gig_description,
        &images,
    )?;

    if registered_role(deps.storage, &info.sender)? == Some(Role::Employer) {
        return Err(ContractError::RoleConflict {});
    }

    let existing = FREELANCERS
        .may_load(deps.storage, &info.sender)?
        .filter(|f| f.registered);
    let first_registration = existing.is_none();

    let freelancer = match existing {
        Some(previous) => Freelancer {
            name: name.clone(),
            skills,
            country,
            gig_title,
            gig_description,
            images,
            starting_price,
            ..previous
        },
        None => Freelancer {
            address: info.sender.clone(),
            name: name.clone(),
            skills,
            country,
            gig_title,
            gig_description,
            images,
            jobs_completed: 0,
            registered: true,
            registration_date: env.block.time,
            starting_price,
            balance: Uint128::zero(),
        },
    };
    FREELANCERS.save(deps.storage, &info.sender, &freelancer)?;

    if first_registration {
        STATS.update(deps.storage, |mut stats| -> Result<_, ContractError> {
            stats.total_freelancers += 1;
            Ok(stats)
        })?;
    }

    Ok(Response::new()
        .add_attribute("method", "register_freelancer")
        .add_attribute("freelancer", info.sender.to_string())
        .add_attribute("first_registration", first_registration.to_string())
        .add_event(Event::from(LedgerEvent::FreelancerRegistered {
            freelancer: info.sender,
            name,
        })))
}

#[allow(clippy::too_many_arguments)]
pub fn execute_edit_freelancer_profile(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    name: String,
    skills: String,
    country: String,
    gig_title: String,
    gig_description: String,
    images: Vec<String>,
    starting_price: Uint128,
) -> Result<Response, ContractError> {
    ensure_no_funds(&info)?;
    validate_freelancer_profile(
        &name,
        &skills,
        &country,
        &gig_title,
        &gig_description,
        &images,
    )?;

    let mut freelancer = FREELANCERS
        .may_load(deps.storage, &info.sender)?
        .filter(|f| f.registered)
        .ok_or(ContractError::NotRegistered {})?;

    freelancer.name = name;
    freelancer.skills = skills;
    freelancer.country = country;
    freelancer.gig_title = gig_title;
    freelancer.gig_description = gig_description;
    freelancer.images = images;
    freelancer.starting_price = starting_price;
    FREELANCERS.save(deps.storage, &info.sender, &freelancer)?;

    Ok(Response::new()
        .add_attribute("method", "edit_freelancer_profile")
        .add_attribute("freelancer", info.sender.to_string()))
}

/// Register (or re-register) the caller as an employer.
pub fn execute_register_employer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    name: String,
    industry: String,
    country: String,
    image_uri: String,
) -> Result<Response, ContractError> {
    ensure_no_funds(&info)?;
    validate_employer_profile(&name, &industry, &country, &image_uri)?;

    if registered_role(deps.storage, &info.sender)? == Some(Role::Freelancer) {
        return Err(ContractError::RoleConflict {});
    }

    let existing = EMPLOYERS
        .may_load(deps.storage, &info.sender)?
        .filter(|e| e.registered);
    let first_registration = existing.is_none();

    let employer = match existing {
        Some(previous) => Employer {
            name: name.clone(),
            industry,
            country,
            image_uri,
            ..previous
        },
        None => Employer {
            address: info.sender.clone(),
            name: name.clone(),
            industry,
            country,
            image_uri,
            registered: true,
            registration_date: env.block.time,
            total_deposited: Uint128::zero(),
        },
    };
    EMPLOYERS.save(deps.storage, &info.sender, &employer)?;

    if first_registration {
        STATS.update(deps.storage, |mut stats| -> Result<_, ContractError> {
            stats.total_employers += 1;
            Ok(stats)
        })?;
    }

    Ok(Response::new()
        .add_attribute("method", "register_employer")
        .add_attribute("employer", info.sender.to_string())
        .add_attribute("first_registration", first_registration.to_string())
        .add_event(Event::from(LedgerEvent::EmployerRegistered {
            employer: info.sender,
            name,
        })))
}

pub fn execute_edit_employer_profile(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    name: String,
    industry: String,
    country: String,
    image_uri: String,
) -> Result<Response, ContractError> {
    ensure_no_funds(&info)?;
    validate_employer_profile(&name, &industry, &country, &image_uri)?;

    let mut employer = EMPLOYERS
        .may_load(deps.storage, &info.sender)?
        .filter(|e| e.registered)
        .ok_or(ContractError::NotRegistered {})?;

    employer.name = name;
    employer.industry = industry;
    employer.country = country;
    employer.image_uri = image_uri;
    EMPLOYERS.save(deps.storage, &info.sender, &employer)?;

    Ok(Response::new()
        .add_attribute("method", "edit_employer_profile")
        .add_attribute("employer", info.sender.to_string()))
}
