#![cfg(test)]

use crate::test_helpers::*;
use crate::TimeCapsule;
use soroban_sdk::{
    testutils::{Address as _, Events},
    Address, Env, FromVal, String, Symbol,
};

#[test]
fn test_constructor_emits_initialized_event() {
    let e = Env::default();
    let owner = Address::generate(&e);
    let contract_id = e.register(TimeCapsule, (owner.clone(),));

    let events = e.events().all();
    let initialized = events
        .into_iter()
        .rev()
        .find(|ev| ev.0 == contract_id)
        .unwrap();

    let topic_name = Symbol::from_val(&e, &initialized.1.get(0).unwrap());
    assert_eq!(topic_name, Symbol::new(&e, "initialized"));
    assert_eq!(Address::from_val(&e, &initialized.2), owner);
}

#[test]
fn test_capsule_created_event() {
    let e = Env::default();
    let (client, owner, _other, contract_id) = setup(&e);

    let id = create_default(&e, &client, &owner);

    let events = e.events().all();
    let created = events
        .into_iter()
        .rev()
        .find(|ev| ev.0 == contract_id)
        .unwrap();

    let topic_name = Symbol::from_val(&e, &created.1.get(0).unwrap());
    let topic_id = u64::from_val(&e, &created.1.get(1).unwrap());
    assert_eq!(topic_name, Symbol::new(&e, "capsule_created"));
    assert_eq!(topic_id, id);

    let data = <(Address, u64)>::from_val(&e, &created.2);
    assert_eq!(data, (owner, START_TIME + ONE_HOUR));
}

#[test]
fn test_capsule_revealed_event() {
    let e = Env::default();
    let (client, owner, _other, contract_id) = setup(&e);

    let id = create_default(&e, &client, &owner);
    advance(&e, ONE_HOUR);
    client.reveal_capsule(&owner, &id);

    let events = e.events().all();
    let revealed = events
        .into_iter()
        .rev()
        .find(|ev| ev.0 == contract_id)
        .unwrap();

    let topic_name = Symbol::from_val(&e, &revealed.1.get(0).unwrap());
    let topic_id = u64::from_val(&e, &revealed.1.get(1).unwrap());
    assert_eq!(topic_name, Symbol::new(&e, "capsule_revealed"));
    assert_eq!(topic_id, id);

    let data = <(Address, String)>::from_val(&e, &revealed.2);
    assert_eq!(data, (owner, String::from_str(&e, TEST_HASH)));
}

#[test]
fn test_ownership_transferred_event() {
    let e = Env::default();
    let (client, owner, _other, contract_id) = setup(&e);
    let next = Address::generate(&e);

    client.transfer_ownership(&next);

    let events = e.events().all();
    let transferred = events
        .into_iter()
        .rev()
        .find(|ev| ev.0 == contract_id)
        .unwrap();

    let topic_name = Symbol::from_val(&e, &transferred.1.get(0).unwrap());
    assert_eq!(topic_name, Symbol::new(&e, "ownership_transferred"));

    let data = <(Address, Address)>::from_val(&e, &transferred.2);
    assert_eq!(data, (owner, next));
}
