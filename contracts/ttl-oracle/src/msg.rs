use crate::state::Phase;

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, HexBinary, Timestamp, Uint256};

#[cw_serde]
pub struct InstantiateMsg {
    /// Initial validity window of published prices, in seconds
    pub ttl: Uint256,
    /// Address allowed to publish prices and change the TTL.
    /// Defaults to the instantiating sender.
    pub owner: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Change the TTL. Only callable by the owner, and only once the current TTL
    /// has fully elapsed since the previous change.
    SetTtl { ttl: Uint256 },
    /// Publish a price for a message type. `valid_from` (unix seconds) must be at least
    /// one active TTL ahead of the current block time.
    SetPrice {
        /// 32 bytes identifier, hex encoded
        message_type: HexBinary,
        price: Uint256,
        valid_from: Uint256,
    },
    /// Tell observers to disregard a previously published price with the same arguments
    RevertPrice {
        message_type: HexBinary,
        price: Uint256,
        valid_from: Uint256,
    },
    TransferOwnership { new_owner: String },
    /// Leaves the oracle without an owner. No update is possible afterwards.
    RenounceOwnership {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns the current TTL.
    #[returns(TtlResponse)]
    Ttl {},
    /// Returns the whole TTL state with the phase at the current block time.
    #[returns(StateResponse)]
    State {},
    #[returns(OwnerResponse)]
    Owner {},
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct TtlResponse {
    pub ttl: Uint256,
}

#[cw_serde]
pub struct StateResponse {
    pub ttl: Uint256,
    pub old_ttl: Uint256,
    pub last_updated: Timestamp,
    pub phase: Phase,
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Option<Addr>,
}
