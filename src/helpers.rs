use cosmwasm_std::{Addr, Api, MessageInfo, StdResult, Storage, Uint128};

use crate::error::ContractError;
use crate::state::{Config, Job, Role, EMPLOYERS, FREELANCERS, JOBS};

// Input bounds
pub const MAX_INCENTIVE_PERCENT: u64 = 10;
pub const DEFAULT_INCENTIVE_PERCENT: u64 = 5;
pub const DEFAULT_DENOM: &str = "uxion";

const MAX_NAME_LENGTH: usize = 100;
const MAX_SHORT_TEXT_LENGTH: usize = 200;
const MAX_DESCRIPTION_LENGTH: usize = 5_000;
const MAX_URI_LENGTH: usize = 512;
const MAX_IMAGES_COUNT: usize = 10;

pub fn validate_incentive_percent(percent: u64) -> Result<(), ContractError> {
    if percent > MAX_INCENTIVE_PERCENT {
        return Err(ContractError::IncentiveTooHigh {
            max: MAX_INCENTIVE_PERCENT,
        });
    }
    Ok(())
}

pub fn validate_max_length(value: &str, field: &str, max: usize) -> Result<(), ContractError> {
    if value.len() > max {
        return Err(ContractError::InvalidInput {
            error: format!("{} must be at most {} characters", field, max),
        });
    }
    Ok(())
}

pub fn validate_freelancer_profile(
    name: &str,
    skills: &str,
    country: &str,
    gig_title: &str,
    gig_description: &str,
    images: &[String],
) -> Result<(), ContractError> {
    validate_max_length(name, "Name", MAX_NAME_LENGTH)?;
    validate_max_length(skills, "Skills", MAX_SHORT_TEXT_LENGTH)?;
    validate_max_length(country, "Country", MAX_NAME_LENGTH)?;
    validate_max_length(gig_title, "Gig title", MAX_SHORT_TEXT_LENGTH)?;
    validate_max_length(gig_description, "Gig description", MAX_DESCRIPTION_LENGTH)?;

    if images.len() > MAX_IMAGES_COUNT {
        return Err(ContractError::InvalidInput {
            error: format!("Maximum {} images allowed", MAX_IMAGES_COUNT),
        });
    }
    for image in images {
        validate_max_length(image, "Image URI", MAX_URI_LENGTH)?;
    }
    Ok(())
}

pub fn validate_employer_profile(
    name: &str,
    industry: &str,
    country: &str,
    image_uri: &str,
) -> Result<(), ContractError> {
    validate_max_length(name, "Name", MAX_NAME_LENGTH)?;
    validate_max_length(industry, "Industry", MAX_NAME_LENGTH)?;
    validate_max_length(country, "Country", MAX_NAME_LENGTH)?;
    validate_max_length(image_uri, "Image URI", MAX_URI_LENGTH)
}

pub fn validate_job_inputs(title: &str, description: &str) -> Result<(), ContractError> {
    validate_max_length(title, "Title", MAX_SHORT_TEXT_LENGTH)?;
    validate_max_length(description, "Description", MAX_DESCRIPTION_LENGTH)
}

/// Rejects calls that attach funds to a non-payable operation.
pub fn ensure_no_funds(info: &MessageInfo) -> Result<(), ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::InvalidFunds {});
    }
    Ok(())
}

/// Splits a withdrawable balance into `(payout, incentive)`.
///
/// The incentive is rounded down, so the freelancer never receives less than
/// `balance - balance * percent / 100`. The product is taken at 256 bits, so
/// every `Uint128` balance can be split.
pub fn split_incentive(
    balance: Uint128,
    incentive_percent: u64,
) -> Result<(Uint128, Uint128), ContractError> {
    let incentive = balance.multiply_ratio(incentive_percent, 100u64);
    let payout = balance.checked_sub(incentive)?;
    Ok((payout, incentive))
}

pub fn load_job(storage: &dyn Storage, job_id: u64) -> Result<Job, ContractError> {
    JOBS.may_load(storage, job_id)?
        .ok_or(ContractError::JobNotFound { job_id })
}

pub fn ensure_admin(config: &Config, sender: &Addr) -> Result<(), ContractError> {
    if config.admin.as_ref() != Some(sender) {
        return Err(ContractError::NotAuthorized {});
    }
    Ok(())
}

pub fn ensure_job_employer(job: &Job, sender: &Addr) -> Result<(), ContractError> {
    if job.employer != *sender {
        return Err(ContractError::NotAuthorized {});
    }
    Ok(())
}

/// Current registered role of `addr`, if any.
pub fn registered_role(storage: &dyn Storage, addr: &Addr) -> StdResult<Option<Role>> {
    if FREELANCERS
        .may_load(storage, addr)?
        .map_or(false, |f| f.registered)
    {
        return Ok(Some(Role::Freelancer));
    }
    if EMPLOYERS
        .may_load(storage, addr)?
        .map_or(false, |e| e.registered)
    {
        return Ok(Some(Role::Employer));
    }
    Ok(None)
}

pub fn addr_validate(api: &dyn Api, addr: &str) -> Result<Addr, ContractError> {
    Ok(api.addr_validate(addr)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::coins;
    use cosmwasm_std::testing::mock_info;

    #[test]
    fn test_split_incentive() {
        let (payout, incentive) = split_incentive(Uint128::new(100), 5).unwrap();
        assert_eq!(payout, Uint128::new(95));
        assert_eq!(incentive, Uint128::new(5));

        // 5% of 200 ether worth of base units
        let balance = Uint128::new(200_000_000_000_000_000_000);
        let (payout, incentive) = split_incentive(balance, 5).unwrap();
        assert_eq!(payout, Uint128::new(190_000_000_000_000_000_000));
        assert_eq!(incentive, Uint128::new(10_000_000_000_000_000_000));
    }

    #[test]
    fn test_split_incentive_rounds_down() {
        // 5% of 19 = 0.95, nothing is withheld
        let (payout, incentive) = split_incentive(Uint128::new(19), 5).unwrap();
        assert_eq!(payout, Uint128::new(19));
        assert!(incentive.is_zero());

        let (payout, incentive) = split_incentive(Uint128::new(1001), 3).unwrap();
        assert_eq!(incentive, Uint128::new(30));
        assert_eq!(payout + incentive, Uint128::new(1001));
    }

    #[test]
    fn test_split_incentive_of_max_balance() {
        let (payout, incentive) = split_incentive(Uint128::MAX, 5).unwrap();
        assert_eq!(incentive, Uint128::new(u128::MAX / 20));
        assert_eq!(payout, Uint128::MAX - incentive);

        let (payout, incentive) = split_incentive(Uint128::MAX, 10).unwrap();
        assert_eq!(incentive, Uint128::new(u128::MAX / 10));
        assert_eq!(payout + incentive, Uint128::MAX);
    }

    #[test]
    fn test_validate_incentive_percent() {
        assert!(validate_incentive_percent(0).is_ok());
        assert!(validate_incentive_percent(5).is_ok());
        assert!(validate_incentive_percent(10).is_ok());
        assert_eq!(
            validate_incentive_percent(11).unwrap_err(),
            ContractError::IncentiveTooHigh { max: 10 }
        );
    }

    #[test]
    fn test_validate_freelancer_profile() {
        let images = vec!["https://image.com/freelancerImage".to_string()];
        assert!(
            validate_freelancer_profile("Name", "Rust", "Nigeria", "Gig", "Desc", &images).is_ok()
        );
        // empty values are accepted
        assert!(validate_freelancer_profile("", "", "", "", "", &[]).is_ok());

        let long_name = "a".repeat(101);
        assert!(
            validate_freelancer_profile(&long_name, "Rust", "NG", "Gig", "Desc", &images).is_err()
        );

        let too_many = vec!["https://img.com".to_string(); 11];
        assert!(
            validate_freelancer_profile("Name", "Rust", "NG", "Gig", "Desc", &too_many).is_err()
        );
    }

    #[test]
    fn test_ensure_no_funds() {
        assert!(ensure_no_funds(&mock_info("employer", &[])).is_ok());
        assert_eq!(
            ensure_no_funds(&mock_info("employer", &coins(10, DEFAULT_DENOM))).unwrap_err(),
            ContractError::InvalidFunds {}
        );
    }
}
