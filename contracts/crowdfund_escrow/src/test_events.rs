extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    vec, Address, IntoVal, TryIntoVal,
};

use crate::events::{
    CampaignCreated, CampaignFinalized, ContributionMade, ContributionRefunded, FundsWithdrawn,
};
use crate::test::{Protocol, DAY};
use crate::REWARD_RATE;

#[test]
fn test_campaign_created_event() {
    let p = Protocol::setup();
    let creator = Address::generate(&p.env);

    let id = p.create(&creator, 5000, DAY);

    let all_events = p.env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("created"), campaign_id)
    assert_eq!(last_event.0, p.client.address);
    let expected_topics = vec![&p.env, symbol_short!("created").into_val(&p.env), id.into_val(&p.env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CampaignCreated = last_event.2.try_into_val(&p.env).unwrap();
    assert_eq!(event_data, CampaignCreated {
        campaign_id: id,
        creator: creator.clone(),
        goal: 5000,
        deadline: DAY,
    });
}

#[test]
fn test_contribution_made_event() {
    let p = Protocol::setup();
    let id = p.create(&Address::generate(&p.env), 10_000, DAY);
    let donor = p.funded_donor(1000);

    p.client.contribute(&id, &donor, &1000);

    let all_events = p.env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, p.client.address);
    let expected_topics = vec![&p.env, symbol_short!("contrib").into_val(&p.env), id.into_val(&p.env)];
    assert_eq!(last_event.1, expected_topics);

    // Data carries the reward minted alongside the contribution.
    let event_data: ContributionMade = last_event.2.try_into_val(&p.env).unwrap();
    assert_eq!(event_data, ContributionMade {
        campaign_id: id,
        contributor: donor.clone(),
        amount: 1000,
        reward: 1000 * REWARD_RATE,
    });
}

#[test]
fn test_campaign_finalized_event() {
    let p = Protocol::setup();
    let id = p.create(&Address::generate(&p.env), 10, DAY);
    p.client.contribute(&id, &p.funded_donor(4), &4);
    p.advance_past_deadline(id);

    p.client.finalize_campaign(&id);

    let all_events = p.env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, p.client.address);
    let expected_topics = vec![&p.env, symbol_short!("finalized").into_val(&p.env), id.into_val(&p.env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CampaignFinalized = last_event.2.try_into_val(&p.env).unwrap();
    assert_eq!(event_data, CampaignFinalized {
        campaign_id: id,
        total_raised: 4,
        successful: false,
    });
}

#[test]
fn test_funds_withdrawn_event() {
    let p = Protocol::setup();
    let creator = Address::generate(&p.env);
    let id = p.create(&creator, 5, DAY);
    p.client.contribute(&id, &p.funded_donor(7), &7);
    p.advance_past_deadline(id);
    p.client.finalize_campaign(&id);

    p.client.withdraw_funds(&id, &creator);

    let all_events = p.env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, p.client.address);
    let expected_topics = vec![&p.env, symbol_short!("withdrawn").into_val(&p.env), id.into_val(&p.env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: FundsWithdrawn = last_event.2.try_into_val(&p.env).unwrap();
    assert_eq!(event_data, FundsWithdrawn {
        campaign_id: id,
        creator: creator.clone(),
        amount: 7,
    });
}

#[test]
fn test_contribution_refunded_event() {
    let p = Protocol::setup();
    let id = p.create(&Address::generate(&p.env), 10, DAY);
    let donor = p.funded_donor(3);
    p.client.contribute(&id, &donor, &3);
    p.advance_past_deadline(id);
    p.client.finalize_campaign(&id);

    p.client.refund(&id, &donor);

    let all_events = p.env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, p.client.address);
    let expected_topics = vec![&p.env, symbol_short!("refunded").into_val(&p.env), id.into_val(&p.env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ContributionRefunded = last_event.2.try_into_val(&p.env).unwrap();
    assert_eq!(event_data, ContributionRefunded {
        campaign_id: id,
        contributor: donor.clone(),
        amount: 3,
    });
}

#[test]
fn test_protocol_paused_event() {
    let p = Protocol::setup();

    p.client.pause(&p.admin);

    let all_events = p.env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("paused"),)
    assert_eq!(last_event.0, p.client.address);
    let expected_topics = vec![&p.env, symbol_short!("paused").into_val(&p.env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: Address = last_event.2.try_into_val(&p.env).unwrap();
    assert_eq!(event_data, p.admin);
}

#[test]
fn test_protocol_unpaused_event() {
    let p = Protocol::setup();
    p.client.pause(&p.admin);

    p.client.unpause(&p.admin);

    let all_events = p.env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, p.client.address);
    let expected_topics = vec![&p.env, symbol_short!("unpaused").into_val(&p.env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: Address = last_event.2.try_into_val(&p.env).unwrap();
    assert_eq!(event_data, p.admin);
}

#[test]
fn test_admin_set_event_on_init() {
    let p = Protocol::deploy();

    p.client.init(&p.admin, &p.token.address, &p.rewards.address);

    let all_events = p.env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("admin"), new_admin). Data: no previous admin.
    assert_eq!(last_event.0, p.client.address);
    let expected_topics = vec![&p.env, symbol_short!("admin").into_val(&p.env), p.admin.into_val(&p.env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: Option<Address> = last_event.2.try_into_val(&p.env).unwrap();
    assert_eq!(event_data, None);
}

#[test]
fn test_admin_set_event_on_transfer() {
    let p = Protocol::setup();
    let new_admin = Address::generate(&p.env);

    p.client.transfer_admin(&p.admin, &new_admin);

    let all_events = p.env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, p.client.address);
    let expected_topics = vec![&p.env, symbol_short!("admin").into_val(&p.env), new_admin.into_val(&p.env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: Option<Address> = last_event.2.try_into_val(&p.env).unwrap();
    assert_eq!(event_data, Some(p.admin.clone()));
}
