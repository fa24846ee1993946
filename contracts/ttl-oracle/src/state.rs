use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, OverflowError, Timestamp, Uint256};
use cw_storage_plus::Item;

use crate::error::{ContractError, GuardViolation};

/// Which TTL currently protects outstanding price promises.
/// Derived from the block time on every check, never stored.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum Phase {
    /// The window of the previous TTL has passed, the current TTL applies
    Stable,
    /// Less than `old_ttl` seconds since the last TTL change, the previous TTL still applies
    Transitioning,
}

#[cw_serde]
pub struct OracleState {
    /// Seconds a cached price stays valid
    pub ttl: Uint256,
    /// TTL replaced by the most recent `SetTtl`, zero until the first change
    pub old_ttl: Uint256,
    /// Block time of instantiation or of the last `SetTtl`
    pub last_updated: Timestamp,
}

impl OracleState {
    pub fn new(ttl: Uint256, now: Timestamp) -> Self {
        Self {
            ttl,
            old_ttl: Uint256::zero(),
            last_updated: now,
        }
    }

    pub fn phase(&self, now: Timestamp) -> Result<Phase, OverflowError> {
        let window_end = seconds(self.last_updated).checked_add(self.old_ttl)?;
        Ok(if seconds(now) < window_end {
            Phase::Transitioning
        } else {
            Phase::Stable
        })
    }

    /// Replaces the TTL. Allowed once a full current TTL has passed since the last change.
    pub fn update_ttl(&mut self, new_ttl: Uint256, now: Timestamp) -> Result<(), ContractError> {
        let earliest = seconds(self.last_updated).checked_add(self.ttl)?;
        if seconds(now) < earliest {
            return Err(GuardViolation::TtlUpdatedTooRecently.into());
        }

        self.old_ttl = self.ttl;
        self.ttl = new_ttl;
        self.last_updated = now;
        Ok(())
    }

    /// A new price may only take effect after every promise made under the active TTL ran out.
    pub fn check_valid_from(
        &self,
        valid_from: Uint256,
        now: Timestamp,
    ) -> Result<(), ContractError> {
        let (ttl, violation) = match self.phase(now)? {
            Phase::Transitioning => (self.old_ttl, GuardViolation::ValidFromBeforeOldTtl),
            Phase::Stable => (self.ttl, GuardViolation::ValidFromBeforeTtl),
        };
        if valid_from < seconds(now).checked_add(ttl)? {
            return Err(violation.into());
        }
        Ok(())
    }
}

fn seconds(time: Timestamp) -> Uint256 {
    Uint256::from(time.seconds())
}

pub const STATE: Item<OracleState> = Item::new("oracle_state");
/// `None` once ownership was renounced
pub const OWNER: Item<Option<Addr>> = Item::new("owner");
