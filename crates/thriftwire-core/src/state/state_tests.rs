#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case(TransportState::Closed, TransportState::Open, true)]
#[test_case(TransportState::Open, TransportState::Closed, true)]
#[test_case(TransportState::Open, TransportState::Open, false)]
#[test_case(TransportState::Closed, TransportState::Closed, false)]
fn TransportState___can_transition_to___follows_state_machine(
    from: TransportState,
    to: TransportState,
    expected: bool,
) {
    assert_eq!(from.can_transition_to(to), expected);
}

#[test]
fn TransportState___default___is_closed() {
    assert_eq!(TransportState::default(), TransportState::Closed);
}

#[test]
fn TransportState___is_open___only_for_open() {
    assert!(TransportState::Open.is_open());
    assert!(!TransportState::Closed.is_open());
}

#[test]
fn TransportState___display___shows_name() {
    assert_eq!(TransportState::Open.to_string(), "Open");
    assert_eq!(TransportState::Closed.to_string(), "Closed");
}
