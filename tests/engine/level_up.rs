//! Level-up rule tests.
//!
//! The rule fires for the xp aspect only, only on add, and lands the xp
//! increment and the level bump in one store write.

use tally_engine::Engine;
use tally_store::{CampaignId, CampaignRecord, CampaignStore, MemoryStore};

const GM: &str = "GM1";

fn engine_with_xp(xp: i64, target: i64) -> Engine<MemoryStore> {
    let mut store = MemoryStore::new();
    store.add(
        CampaignRecord::new(CampaignId(0), "Against the Aeon Throne", GM)
            .with_xp(xp)
            .with_xp_target(target)
            .with_party_size(5),
    );
    Engine::new(store).unwrap()
}

#[test]
fn reaching_the_target_levels_the_party_up() {
    let mut engine = engine_with_xp(0, 500);
    let reply = engine.evaluate("add 1000 to xp", GM).unwrap();

    assert_eq!(
        reply.text,
        "Updated xp to 1000. The party leveled up! :tada: You're now level 2!"
    );
    let campaign = engine.store().active().unwrap();
    assert_eq!(campaign.party.xp, 1000);
    assert_eq!(campaign.party.level, 2);
}

#[test]
fn exactly_hitting_the_target_counts() {
    let mut engine = engine_with_xp(400, 500);
    let reply = engine.evaluate("add xp 100", GM).unwrap();

    assert!(reply.text.contains("level 2!"));
    assert_eq!(engine.store().active().unwrap().party.level, 2);
}

#[test]
fn falling_short_of_the_target_is_a_plain_update() {
    let mut engine = engine_with_xp(0, 500);
    let reply = engine.evaluate("add xp 499", GM).unwrap();

    assert_eq!(reply.text, "Updated xp to 499");
    assert_eq!(engine.store().active().unwrap().party.level, 1);
}

#[test]
fn the_rule_never_fires_on_remove() {
    // Removing down through the target must not touch the level, even
    // though the resulting xp still exceeds it.
    let mut engine = engine_with_xp(2000, 500);
    let reply = engine.evaluate("remove xp 100", GM).unwrap();

    assert_eq!(reply.text, "Reduced xp to 1900");
    assert_eq!(engine.store().active().unwrap().party.level, 1);
}

#[test]
fn the_rule_never_fires_on_set() {
    let mut engine = engine_with_xp(0, 500);
    let reply = engine.evaluate("set xp 1000", GM).unwrap();

    assert_eq!(reply.text, "Set xp to 1000");
    assert_eq!(engine.store().active().unwrap().party.level, 1);
}

#[test]
fn the_rule_only_watches_the_xp_aspect() {
    let mut engine = engine_with_xp(0, 500);
    let reply = engine.evaluate("add gold 10000", GM).unwrap();

    assert_eq!(reply.text, "Updated gold to 10000");
    assert_eq!(engine.store().active().unwrap().party.level, 1);
}
