use cosmwasm_std::{Addr, Event, StdError, Uint256};
use thiserror::Error;

use std::str::FromStr;

use crate::message_type::{InvalidMessageType, MessageType};

pub const TTL_CHANGED: &str = "ttl_changed";
pub const PRICE_SET: &str = "price_set";
pub const PRICE_REVERTED: &str = "price_reverted";
pub const OWNERSHIP_TRANSFERRED: &str = "ownership_transferred";

/// Attribute value used in place of an absent owner
pub const NO_OWNER: &str = "none";

/// The host prefixes custom contract events with this
const WASM_EVENT_PREFIX: &str = "wasm-";

#[derive(Error, Debug, PartialEq)]
pub enum EventError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    MessageType(#[from] InvalidMessageType),

    #[error("Event {ty} is missing attribute {key}")]
    MissingAttribute { ty: String, key: String },
}

/// Arguments shared by `price_set` and `price_reverted`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceUpdate {
    pub message_type: MessageType,
    pub price: Uint256,
    /// Unix time in seconds from which the price applies
    pub valid_from: Uint256,
}

/// Every notification the oracle publishes. The contract builds its events from this
/// type and observers decode them back into it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OracleEvent {
    TtlChanged {
        ttl: Uint256,
    },
    PriceSet(PriceUpdate),
    /// Retraction of an earlier `PriceSet` carrying the same arguments
    PriceReverted(PriceUpdate),
    OwnershipTransferred {
        previous_owner: Option<Addr>,
        new_owner: Option<Addr>,
    },
}

impl OracleEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            OracleEvent::TtlChanged { .. } => TTL_CHANGED,
            OracleEvent::PriceSet(_) => PRICE_SET,
            OracleEvent::PriceReverted(_) => PRICE_REVERTED,
            OracleEvent::OwnershipTransferred { .. } => OWNERSHIP_TRANSFERRED,
        }
    }

    /// Decodes a single event. Returns `None` for events not emitted by the oracle,
    /// with or without the `wasm-` prefix.
    pub fn from_event(event: &Event) -> Result<Option<Self>, EventError> {
        let ty = event
            .ty
            .strip_prefix(WASM_EVENT_PREFIX)
            .unwrap_or(&event.ty);

        let decoded = match ty {
            TTL_CHANGED => OracleEvent::TtlChanged {
                ttl: parse_attr(event, "ttl")?,
            },
            PRICE_SET => OracleEvent::PriceSet(PriceUpdate::from_event(event)?),
            PRICE_REVERTED => OracleEvent::PriceReverted(PriceUpdate::from_event(event)?),
            OWNERSHIP_TRANSFERRED => OracleEvent::OwnershipTransferred {
                previous_owner: owner_attr(event, "previous_owner")?,
                new_owner: owner_attr(event, "new_owner")?,
            },
            _ => return Ok(None),
        };
        Ok(Some(decoded))
    }
}

impl PriceUpdate {
    fn from_event(event: &Event) -> Result<Self, EventError> {
        Ok(PriceUpdate {
            message_type: parse_attr(event, "message_type")?,
            price: parse_attr(event, "price")?,
            valid_from: parse_attr(event, "valid_from")?,
        })
    }

    fn into_event(self, ty: &str) -> Event {
        Event::new(ty)
            .add_attribute("message_type", self.message_type.to_string())
            .add_attribute("price", self.price.to_string())
            .add_attribute("valid_from", self.valid_from.to_string())
    }
}

impl From<OracleEvent> for Event {
    fn from(event: OracleEvent) -> Self {
        let ty = event.event_type();
        match event {
            OracleEvent::TtlChanged { ttl } => Event::new(ty).add_attribute("ttl", ttl.to_string()),
            OracleEvent::PriceSet(update) | OracleEvent::PriceReverted(update) => {
                update.into_event(ty)
            }
            OracleEvent::OwnershipTransferred {
                previous_owner,
                new_owner,
            } => Event::new(ty)
                .add_attribute("previous_owner", owner_value(previous_owner))
                .add_attribute("new_owner", owner_value(new_owner)),
        }
    }
}

/// Decodes all oracle events in `events`, keeping their order and skipping unrelated ones.
pub fn parse_events<'a>(
    events: impl IntoIterator<Item = &'a Event>,
) -> Result<Vec<OracleEvent>, EventError> {
    events
        .into_iter()
        .filter_map(|event| OracleEvent::from_event(event).transpose())
        .collect()
}

fn attr<'a>(event: &'a Event, key: &str) -> Result<&'a str, EventError> {
    event
        .attributes
        .iter()
        .find(|attr| attr.key == key)
        .map(|attr| attr.value.as_str())
        .ok_or_else(|| EventError::MissingAttribute {
            ty: event.ty.clone(),
            key: key.to_owned(),
        })
}

fn parse_attr<T>(event: &Event, key: &str) -> Result<T, EventError>
where
    T: FromStr,
    EventError: From<T::Err>,
{
    Ok(attr(event, key)?.parse()?)
}

fn owner_attr(event: &Event, key: &str) -> Result<Option<Addr>, EventError> {
    let value = attr(event, key)?;
    Ok((value != NO_OWNER).then(|| Addr::unchecked(value)))
}

fn owner_value(owner: Option<Addr>) -> String {
    owner.map_or_else(|| NO_OWNER.to_owned(), String::from)
}
