use cosmwasm_std::{Addr, Timestamp, Uint256};

use std::collections::BTreeMap;

use crate::event::{OracleEvent, PriceUpdate};
use crate::message_type::MessageType;

/// Price history of one message type as `(valid_from, price)`, ordered by `valid_from`
pub type PriceHistory = Vec<(Uint256, Uint256)>;

/// Observer side reconstruction of the oracle, built by applying its events in order.
///
/// The whole view expires `ttl` seconds after the last observed `ttl_changed` event. A view
/// which never saw one is considered expired.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PriceView {
    ttl: Option<Uint256>,
    /// `None` with `ttl` set means the expiry does not fit in `Uint256`
    expires_at: Option<Uint256>,
    owner: Option<Addr>,
    prices: BTreeMap<MessageType, PriceHistory>,
}

impl PriceView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a view from events all observed at `observed_at`
    pub fn from_events<'a>(
        events: impl IntoIterator<Item = &'a OracleEvent>,
        observed_at: Timestamp,
    ) -> Self {
        let mut view = Self::new();
        for event in events {
            view.apply(event, observed_at);
        }
        view
    }

    pub fn ttl(&self) -> Option<Uint256> {
        self.ttl
    }

    pub fn owner(&self) -> Option<&Addr> {
        self.owner.as_ref()
    }

    pub fn history(&self, message_type: &MessageType) -> &[(Uint256, Uint256)] {
        self.prices
            .get(message_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn apply(&mut self, event: &OracleEvent, observed_at: Timestamp) {
        match event {
            OracleEvent::TtlChanged { ttl } => {
                self.ttl = Some(*ttl);
                self.expires_at = seconds(observed_at).checked_add(*ttl).ok();
            }
            OracleEvent::PriceSet(update) => self.insert(update),
            OracleEvent::PriceReverted(update) => self.remove(update),
            OracleEvent::OwnershipTransferred { new_owner, .. } => {
                self.owner = new_owner.clone();
            }
        }
    }

    pub fn is_expired(&self, now: Timestamp) -> bool {
        match (self.ttl, self.expires_at) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(_), Some(expires_at)) => seconds(now) >= expires_at,
        }
    }

    /// The price with the latest `valid_from` not after `now`, unless the view expired
    pub fn current_price(&self, message_type: &MessageType, now: Timestamp) -> Option<Uint256> {
        if self.is_expired(now) {
            return None;
        }
        let now = seconds(now);
        self.history(message_type)
            .iter()
            .rev()
            .find(|(valid_from, _)| *valid_from <= now)
            .map(|(_, price)| *price)
    }

    fn insert(&mut self, update: &PriceUpdate) {
        let history = self.prices.entry(update.message_type).or_default();
        let idx = history.partition_point(|(valid_from, _)| *valid_from <= update.valid_from);
        history.insert(idx, (update.valid_from, update.price));
    }

    fn remove(&mut self, update: &PriceUpdate) {
        let Some(history) = self.prices.get_mut(&update.message_type) else {
            return;
        };
        if let Some(idx) = history
            .iter()
            .rposition(|entry| *entry == (update.valid_from, update.price))
        {
            history.remove(idx);
        }
        if history.is_empty() {
            self.prices.remove(&update.message_type);
        }
    }
}

fn seconds(time: Timestamp) -> Uint256 {
    Uint256::from(time.seconds())
}
