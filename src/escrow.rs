use cosmwasm_std::{
    coins, BankMsg, DepsMut, Env, Event, MessageInfo, Reply, Response, SubMsg, SubMsgResult,
    Uint128,
};
use cw_utils::must_pay;

use crate::error::ContractError;
use crate::events::LedgerEvent;
use crate::helpers::{
    addr_validate, ensure_admin, ensure_job_employer, ensure_no_funds, load_job, split_incentive,
};
use crate::state::{CONFIG, EMPLOYERS, ESCROW, FREELANCERS, STATS};

/// Reply id for payouts sent by `WithdrawEarnings` and `CollectIncentives`.
pub const PAYOUT_REPLY_ID: u64 = 1;

/// Add the attached native coin to the job's escrow.
///
/// Escrow is always held under the job's employer so that only the job owner
/// can release it, whoever sent the coins.
pub fn execute_deposit_funds(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    job_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let job = load_job(deps.storage, job_id)?;
    let amount = must_pay(&info, &config.denom)?;

    let held = ESCROW.update(
        deps.storage,
        (&job.employer, job_id),
        |held| -> Result<_, ContractError> {
            Ok(held.unwrap_or_default().checked_add(amount)?)
        },
    )?;

    if let Some(mut employer) = EMPLOYERS.may_load(deps.storage, &info.sender)? {
        employer.total_deposited = employer.total_deposited.checked_add(amount)?;
        EMPLOYERS.save(deps.storage, &info.sender, &employer)?;
    }

    Ok(Response::new()
        .add_attribute("method", "deposit_funds")
        .add_attribute("job_id", job_id.to_string())
        .add_attribute("sender", info.sender.to_string())
        .add_attribute("amount", amount.to_string())
        .add_attribute("escrow_balance", held.to_string())
        .add_event(Event::from(LedgerEvent::FundsDeposited {
            job_id,
            sender: info.sender,
            amount,
        })))
}

/// Move the whole escrow of a job into the named freelancer's withdrawable
/// balance. An empty escrow releases zero and still succeeds.
pub fn execute_release_escrow(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    job_id: u64,
    freelancer: String,
) -> Result<Response, ContractError> {
    ensure_no_funds(&info)?;
    let job = load_job(deps.storage, job_id)?;
    ensure_job_employer(&job, &info.sender)?;
    let freelancer_addr = addr_validate(deps.api, &freelancer)?;

    let mut freelancer = FREELANCERS
        .may_load(deps.storage, &freelancer_addr)?
        .filter(|f| f.registered)
        .ok_or(ContractError::NotRegistered {})?;

    let key = (&job.employer, job_id);
    let amount = ESCROW.may_load(deps.storage, key)?.unwrap_or_default();
    ESCROW.save(deps.storage, key, &Uint128::zero())?;

    freelancer.balance = freelancer.balance.checked_add(amount)?;
    FREELANCERS.save(deps.storage, &freelancer_addr, &freelancer)?;

    Ok(Response::new()
        .add_attribute("method", "release_escrow")
        .add_attribute("job_id", job_id.to_string())
        .add_attribute("freelancer", freelancer_addr.to_string())
        .add_attribute("amount", amount.to_string())
        .add_event(Event::from(LedgerEvent::FundsReleased {
            job_id,
            freelancer: freelancer_addr,
            amount,
        })))
}

/// Pay out the caller's withdrawable balance minus the platform incentive.
///
/// The stored balance is zeroed before the transfer is dispatched. The bank
/// send runs as a sub-message that replies on error, and a failed send
/// aborts the transaction so the balance is restored.
pub fn execute_withdraw_earnings(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    ensure_no_funds(&info)?;
    let config = CONFIG.load(deps.storage)?;

    let mut freelancer = FREELANCERS
        .may_load(deps.storage, &info.sender)?
        .filter(|f| f.registered && !f.balance.is_zero())
        .ok_or(ContractError::InsufficientBalance {})?;

    let (payout, incentive) =
        split_incentive(freelancer.balance, config.platform_incentive_percent)?;

    freelancer.balance = Uint128::zero();
    FREELANCERS.save(deps.storage, &info.sender, &freelancer)?;

    STATS.update(deps.storage, |mut stats| -> Result<_, ContractError> {
        stats.retained_incentives = stats.retained_incentives.checked_add(incentive)?;
        Ok(stats)
    })?;

    let payout_msg = BankMsg::Send {
        to_address: info.sender.to_string(),
        amount: coins(payout.u128(), &config.denom),
    };

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_error(payout_msg, PAYOUT_REPLY_ID))
        .add_attribute("method", "withdraw_earnings")
        .add_attribute("freelancer", info.sender.to_string())
        .add_attribute("payout", payout.to_string())
        .add_attribute("platform_incentive", incentive.to_string())
        .add_event(Event::from(LedgerEvent::WithdrawFund {
            freelancer: info.sender,
            amount: payout,
        })))
}

/// Send every retained platform incentive to the admin.
pub fn execute_collect_incentives(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    ensure_no_funds(&info)?;
    let config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info.sender)?;

    let mut stats = STATS.load(deps.storage)?;
    let amount = stats.retained_incentives;
    if amount.is_zero() {
        return Err(ContractError::InsufficientBalance {});
    }
    stats.retained_incentives = Uint128::zero();
    STATS.save(deps.storage, &stats)?;

    let collect_msg = BankMsg::Send {
        to_address: info.sender.to_string(),
        amount: coins(amount.u128(), &config.denom),
    };

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_error(collect_msg, PAYOUT_REPLY_ID))
        .add_attribute("method", "collect_incentives")
        .add_attribute("admin", info.sender.to_string())
        .add_attribute("amount", amount.to_string()))
}

/// Turns a failed payout into `TransferFailed`, reverting the whole call.
pub fn handle_transfer_reply(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    match msg.result {
        SubMsgResult::Err(reason) => {
            deps.api
                .debug(&format!("payout transfer failed (reply {}): {}", msg.id, reason));
            Err(ContractError::TransferFailed { reason })
        }
        // only registered with reply_on_error
        SubMsgResult::Ok(_) => Ok(Response::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::mock_dependencies;

    #[test]
    fn test_failed_payout_reply_is_transfer_failed() {
        let mut deps = mock_dependencies();
        let reply = Reply {
            id: PAYOUT_REPLY_ID,
            result: SubMsgResult::Err("insufficient funds".to_string()),
        };

        let err = handle_transfer_reply(deps.as_mut(), reply).unwrap_err();
        assert_eq!(
            err,
            ContractError::TransferFailed {
                reason: "insufficient funds".to_string()
            }
        );
    }
}
