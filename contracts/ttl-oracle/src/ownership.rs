use cosmwasm_std::{Addr, DepsMut, Event, MessageInfo, Response, Storage};
use cw_utils::nonpayable;
use utils::event::OracleEvent;

use crate::error::ContractError;
use crate::state::OWNER;

/// A state changing operation bound to the owner capability. The effect only runs
/// after the sender was checked against the stored owner; funds are never accepted.
pub struct AuthorizedOperation<F> {
    effect: F,
}

impl<F> AuthorizedOperation<F>
where
    F: FnOnce(DepsMut) -> Result<Response, ContractError>,
{
    pub fn new(effect: F) -> Self {
        Self { effect }
    }

    pub fn run(self, deps: DepsMut, info: &MessageInfo) -> Result<Response, ContractError> {
        assert_owner(deps.storage, &info.sender)?;
        nonpayable(info)?;
        (self.effect)(deps)
    }
}

pub fn assert_owner(storage: &dyn Storage, sender: &Addr) -> Result<(), ContractError> {
    match OWNER.load(storage)? {
        Some(owner) if owner == *sender => Ok(()),
        _ => Err(ContractError::Unauthorized {}),
    }
}

/// Stores the new owner and returns the event announcing the change
pub fn set_owner(
    storage: &mut dyn Storage,
    new_owner: Option<Addr>,
) -> Result<Event, ContractError> {
    let previous_owner = OWNER.may_load(storage)?.flatten();
    OWNER.save(storage, &new_owner)?;

    Ok(OracleEvent::OwnershipTransferred {
        previous_owner,
        new_owner,
    }
    .into())
}

pub fn transfer_ownership(deps: DepsMut, new_owner: String) -> Result<Response, ContractError> {
    let new_owner = deps.api.addr_validate(&new_owner)?;
    let event = set_owner(deps.storage, Some(new_owner.clone()))?;

    Ok(Response::new()
        .add_attribute("action", "transfer_ownership")
        .add_attribute("new_owner", new_owner)
        .add_event(event))
}

pub fn renounce_ownership(deps: DepsMut) -> Result<Response, ContractError> {
    let event = set_owner(deps.storage, None)?;

    Ok(Response::new()
        .add_attribute("action", "renounce_ownership")
        .add_event(event))
}
