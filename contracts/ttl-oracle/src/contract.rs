#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::{get_contract_version, set_contract_version};
use utils::event::OracleEvent;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::ownership::{self, AuthorizedOperation};
use crate::state::{OracleState, STATE};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:ttl-oracle";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = match msg.owner {
        Some(owner) => deps.api.addr_validate(&owner)?,
        None => info.sender.clone(),
    };
    let ownership_event = ownership::set_owner(deps.storage, Some(owner.clone()))?;

    let state = OracleState::new(msg.ttl, env.block.time);
    STATE.save(deps.storage, &state)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", owner)
        .add_event(ownership_event)
        .add_event(OracleEvent::TtlChanged { ttl: state.ttl }.into()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    use ExecuteMsg::*;
    match msg {
        SetTtl { ttl } => {
            AuthorizedOperation::new(|deps| execute::set_ttl(deps, env, ttl)).run(deps, &info)
        }
        SetPrice {
            message_type,
            price,
            valid_from,
        } => AuthorizedOperation::new(|deps| {
            let update = execute::price_update(message_type, price, valid_from)?;
            execute::set_price(deps, env, update)
        })
        .run(deps, &info),
        RevertPrice {
            message_type,
            price,
            valid_from,
        } => AuthorizedOperation::new(|_| {
            let update = execute::price_update(message_type, price, valid_from)?;
            execute::revert_price(update)
        })
        .run(deps, &info),
        TransferOwnership { new_owner } => {
            AuthorizedOperation::new(|deps| ownership::transfer_ownership(deps, new_owner))
                .run(deps, &info)
        }
        RenounceOwnership {} => {
            AuthorizedOperation::new(ownership::renounce_ownership).run(deps, &info)
        }
    }
}

mod execute {
    use cosmwasm_std::{HexBinary, Uint256};
    use utils::event::PriceUpdate;
    use utils::message_type::MessageType;

    use super::*;

    pub fn price_update(
        message_type: HexBinary,
        price: Uint256,
        valid_from: Uint256,
    ) -> Result<PriceUpdate, ContractError> {
        Ok(PriceUpdate {
            message_type: MessageType::try_from(message_type)?,
            price,
            valid_from,
        })
    }

    pub fn set_ttl(deps: DepsMut, env: Env, ttl: Uint256) -> Result<Response, ContractError> {
        let mut state = STATE.load(deps.storage)?;
        state.update_ttl(ttl, env.block.time)?;
        STATE.save(deps.storage, &state)?;

        Ok(Response::new()
            .add_attribute("action", "set_ttl")
            .add_attribute("old_ttl", state.old_ttl.to_string())
            .add_event(OracleEvent::TtlChanged { ttl }.into()))
    }

    pub fn set_price(
        deps: DepsMut,
        env: Env,
        update: PriceUpdate,
    ) -> Result<Response, ContractError> {
        let state = STATE.load(deps.storage)?;
        state.check_valid_from(update.valid_from, env.block.time)?;

        Ok(Response::new()
            .add_attribute("action", "set_price")
            .add_event(OracleEvent::PriceSet(update).into()))
    }

    /// Matching against an earlier `SetPrice` is left to observers
    pub fn revert_price(update: PriceUpdate) -> Result<Response, ContractError> {
        Ok(Response::new()
            .add_attribute("action", "revert_price")
            .add_event(OracleEvent::PriceReverted(update).into()))
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    use QueryMsg::*;
    match msg {
        Ttl {} => to_binary(&query::ttl(deps)?),
        State {} => to_binary(&query::state(deps, env)?),
        Owner {} => to_binary(&query::owner(deps)?),
    }
}

mod query {
    use crate::msg::{OwnerResponse, StateResponse, TtlResponse};
    use crate::state::OWNER;

    use super::*;

    pub fn ttl(deps: Deps) -> StdResult<TtlResponse> {
        let state = STATE.load(deps.storage)?;
        Ok(TtlResponse { ttl: state.ttl })
    }

    pub fn state(deps: Deps, env: Env) -> StdResult<StateResponse> {
        let state = STATE.load(deps.storage)?;
        let phase = state.phase(env.block.time)?;
        Ok(StateResponse {
            ttl: state.ttl,
            old_ttl: state.old_ttl,
            last_updated: state.last_updated,
            phase,
        })
    }

    pub fn owner(deps: Deps) -> StdResult<OwnerResponse> {
        Ok(OwnerResponse {
            owner: OWNER.load(deps.storage)?,
        })
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::WrongContract {
            contract: stored.contract,
        });
    }
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("from_version", stored.version))
}
