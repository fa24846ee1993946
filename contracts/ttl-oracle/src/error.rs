use cosmwasm_std::{OverflowError, StdError};
use cw_utils::PaymentError;
use thiserror::Error;
use utils::message_type::InvalidMessageType;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("{0}")]
    GuardViolation(#[from] GuardViolation),

    #[error("{0}")]
    InvalidMessageType(#[from] InvalidMessageType),

    #[error("Cannot migrate from a different contract: {contract}")]
    WrongContract { contract: String },
}

/// Timing preconditions which reject an update
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GuardViolation {
    #[error("TTL updated too recently")]
    TtlUpdatedTooRecently,

    #[error("validFrom not oldTTL seconds in the future")]
    ValidFromBeforeOldTtl,

    #[error("validFrom not TTL seconds in the future")]
    ValidFromBeforeTtl,
}
