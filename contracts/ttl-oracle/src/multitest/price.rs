use super::suite::{oracle_events, SuiteBuilder, BTC, ETH, OWNER, STRANGER};

use cosmwasm_std::{coin, Uint256};
use cw_utils::PaymentError;
use utils::event::{OracleEvent, PriceUpdate};

use crate::{ContractError, GuardViolation};

#[test]
fn stable_price_requires_ttl_ahead() {
    let mut suite = SuiteBuilder::new().with_ttl(60).build();
    suite.advance_seconds(5);

    let err = suite
        .set_price(OWNER, BTC, 100, suite.now_plus(59))
        .unwrap_err();
    assert_eq!(
        ContractError::GuardViolation(GuardViolation::ValidFromBeforeTtl),
        err.downcast().unwrap()
    );

    let valid_from = suite.now_plus(60);
    let response = suite.set_price(OWNER, BTC, 100, valid_from).unwrap();
    assert_eq!(
        vec![OracleEvent::PriceSet(PriceUpdate {
            message_type: BTC,
            price: Uint256::from(100u128),
            valid_from,
        })],
        oracle_events(&response)
    );

    // anything further in the future is fine too
    suite
        .set_price(OWNER, ETH, 7, suite.now_plus(3_600))
        .unwrap();
}

#[test]
fn transition_scenario() {
    let mut suite = SuiteBuilder::new().with_ttl(60).build();

    suite.advance_seconds(60);
    suite.set_ttl(OWNER, 120).unwrap();
    assert_eq!(Uint256::from(60u64), suite.query_state().unwrap().old_ttl);

    suite.advance_seconds(1);
    let err = suite
        .set_price(OWNER, BTC, 100, suite.now_plus(59))
        .unwrap_err();
    assert_eq!(
        ContractError::GuardViolation(GuardViolation::ValidFromBeforeOldTtl),
        err.downcast().unwrap()
    );
    suite
        .set_price(OWNER, BTC, 100, suite.now_plus(60))
        .unwrap();

    let err = suite.set_ttl(OWNER, 120).unwrap_err();
    assert_eq!(
        ContractError::GuardViolation(GuardViolation::TtlUpdatedTooRecently),
        err.downcast().unwrap()
    );
}

#[test]
fn new_ttl_applies_after_transition_window() {
    let mut suite = SuiteBuilder::new().with_ttl(60).build();

    suite.advance_seconds(60);
    suite.set_ttl(OWNER, 120).unwrap();

    // last second of the window still honors the old ttl
    suite.advance_seconds(59);
    suite
        .set_price(OWNER, BTC, 100, suite.now_plus(60))
        .unwrap();

    suite.advance_seconds(1);
    let err = suite
        .set_price(OWNER, BTC, 100, suite.now_plus(60))
        .unwrap_err();
    assert_eq!(
        ContractError::GuardViolation(GuardViolation::ValidFromBeforeTtl),
        err.downcast().unwrap()
    );
    suite
        .set_price(OWNER, BTC, 100, suite.now_plus(120))
        .unwrap();
}

#[test]
fn shorter_ttl_keeps_longer_promise() {
    let mut suite = SuiteBuilder::new().with_ttl(600).build();

    suite.advance_seconds(600);
    suite.set_ttl(OWNER, 60).unwrap();

    // promises made under the 600 seconds ttl must still be honored
    suite.advance_seconds(10);
    let err = suite
        .set_price(OWNER, BTC, 100, suite.now_plus(60))
        .unwrap_err();
    assert_eq!(
        ContractError::GuardViolation(GuardViolation::ValidFromBeforeOldTtl),
        err.downcast().unwrap()
    );
    suite
        .set_price(OWNER, BTC, 100, suite.now_plus(600))
        .unwrap();

    suite.advance_seconds(590);
    suite
        .set_price(OWNER, BTC, 100, suite.now_plus(60))
        .unwrap();
}

#[test]
fn unauthorized_price_updates() {
    let mut suite = SuiteBuilder::new().with_ttl(60).build();

    let err = suite
        .set_price(STRANGER, BTC, 100, suite.now_plus(60))
        .unwrap_err();
    assert_eq!(ContractError::Unauthorized {}, err.downcast().unwrap());

    let err = suite
        .revert_price(STRANGER, BTC, 100, suite.now_plus(60))
        .unwrap_err();
    assert_eq!(ContractError::Unauthorized {}, err.downcast().unwrap());
}

#[test]
fn revert_price_has_no_timing_guard() {
    let mut suite = SuiteBuilder::new().with_ttl(60).build();

    // never published and already in the past, still announced
    let valid_from = Uint256::from(suite.now() - 10);
    let response = suite.revert_price(OWNER, ETH, 5, valid_from).unwrap();
    assert_eq!(
        vec![OracleEvent::PriceReverted(PriceUpdate {
            message_type: ETH,
            price: Uint256::from(5u128),
            valid_from,
        })],
        oracle_events(&response)
    );

    // state is untouched
    let state = suite.query_state().unwrap();
    assert_eq!(Uint256::from(60u64), state.ttl);
    assert_eq!(Uint256::zero(), state.old_ttl);
}

#[test]
fn updates_are_not_payable() {
    let mut suite = SuiteBuilder::new()
        .with_ttl(60)
        .with_funds(OWNER, &[coin(100, "ujuno")])
        .with_funds(STRANGER, &[coin(100, "ujuno")])
        .build();
    suite.advance_seconds(60);

    // ownership is checked before anything else
    let err = suite
        .set_ttl_with_funds(STRANGER, 120, &[coin(1, "ujuno")])
        .unwrap_err();
    assert_eq!(ContractError::Unauthorized {}, err.downcast().unwrap());

    let err = suite
        .set_ttl_with_funds(OWNER, 120, &[coin(1, "ujuno")])
        .unwrap_err();
    assert_eq!(
        ContractError::Payment(PaymentError::NonPayable {}),
        err.downcast().unwrap()
    );
    assert_eq!(Uint256::from(60u64), suite.query_ttl().unwrap());
}
