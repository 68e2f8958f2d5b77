use oregon_trail::core::caravan::{Caravan, MAX_MEMBER_HEALTH, Member, Pace, Rations};
use oregon_trail::core::game::{GameContext, GameStatus, LossCause, START_POS, TOTAL_DISTANCE};
use oregon_trail::core::grid::{GridPos, ScenarioType};
use oregon_trail::core::inventory::{Inventory, Item};
use oregon_trail::core::player::{Player, Profession};
use oregon_trail::core::shop::{self, Offer};
use oregon_trail::error::GameError;

// ── caravan ───────────────────────────────────────────────────────────────────

fn party(n: usize, food: u32) -> Caravan {
    let mut c = Caravan::new(food);
    for i in 0..n {
        c.add_member(Member::new(&format!("M{i}"), 20).unwrap()).unwrap();
    }
    c
}

#[test]
fn five_members_max() {
    let mut c = party(5, 0);
    assert!(matches!(c.add_member(Member::new("Extra", 9).unwrap()), Err(GameError::CaravanFull(5))));
    assert_eq!(c.total_members(), 5);
}

#[test]
fn rations_per_living_member() {
    let mut c = party(3, 100);
    assert_eq!(c.consume_food(), 9);
    c.rations = Rations::Filling;
    assert_eq!(c.consume_food(), 15);
    c.rations = Rations::Meager;
    assert_eq!(c.consume_food(), 6);
    assert_eq!(c.food(), 70);
    assert!(c.members().iter().all(|m| m.health() == MAX_MEMBER_HEALTH));
}

#[test]
fn short_food_hurts_everyone() {
    let mut c = party(2, 4);
    // needs 6, has 4: deficit 2
    assert_eq!(c.consume_food(), 4);
    assert_eq!(c.food(), 0);
    assert!(c.members().iter().all(|m| m.health() == MAX_MEMBER_HEALTH - 4));
}

#[test]
fn starving_party_dies() {
    let mut c = party(2, 0);
    for _ in 0..20 {
        c.consume_food();
    }
    assert!(c.all_dead());
    assert_eq!(c.consume_food(), 0);
}

#[test]
fn resting_heals() {
    let mut c = party(1, 0);
    c.consume_food();
    let hurt = c.members()[0].health();
    c.rest();
    assert_eq!(c.members()[0].health(), hurt);
    c.pace = Pace::Resting;
    c.rest();
    assert_eq!(c.members()[0].health(), hurt + 3);
}

// ── game ──────────────────────────────────────────────────────────────────────

#[test]
fn start_builds_party_and_player() {
    let g = GameContext::start("Ana", Profession::Banker, &[("Luis", 30), ("  ", 4), ("Sofia", 8)]).unwrap();
    assert_eq!(g.status(), GameStatus::InProgress);
    assert_eq!(g.player.pos, START_POS);
    assert_eq!(g.player.money(), 1600);
    assert_eq!(g.caravan.total_members(), 3);
    assert_eq!(g.caravan.leader().map(|m| m.name()), Some("Ana"));
    assert_eq!((g.day(), g.distance()), (0, 0));
}

#[test]
fn too_many_companions_is_an_error() {
    let companions = [("A", 1), ("B", 1), ("C", 1), ("D", 1), ("E", 1)];
    assert!(matches!(GameContext::start("Ana", Profession::Farmer, &companions), Err(GameError::CaravanFull(_))));
}

#[test]
fn days_add_miles_and_change_scenery() {
    let mut g = GameContext::start("Ana", Profession::Farmer, &[]).unwrap();
    g.caravan.add_food(10_000);
    assert_eq!(g.scenario_type(), ScenarioType::Start);
    g.advance_day(700);
    assert_eq!(g.day(), 1);
    assert_eq!(g.scenario_type(), ScenarioType::Road);
    g.advance_day(700);
    assert_eq!(g.scenario_type(), ScenarioType::River);
    assert_eq!(g.remaining_distance(), TOTAL_DISTANCE - 1400);
    assert!((g.progress_percent() - 70.0).abs() < 1e-9);
    assert!(g.in_progress());
}

#[test]
fn reaching_two_thousand_miles_wins() {
    let mut g = GameContext::start("Ana", Profession::Farmer, &[]).unwrap();
    g.caravan.add_food(100);
    g.advance_day(TOTAL_DISTANCE);
    assert!(g.won());
    assert!(g.summary().contains("VICTORY"));
    // the clock stops once the game is decided
    g.advance_day(20);
    assert_eq!(g.day(), 1);
}

#[test]
fn dead_caravan_loses() {
    let mut g = GameContext::start("Ana", Profession::Farmer, &[("Luis", 30)]).unwrap();
    while g.in_progress() {
        g.advance_day(15);
    }
    assert_eq!(g.status(), GameStatus::Lost);
    assert_eq!(g.loss_cause(), LossCause::CaravanPerished);
    assert!(g.final_report().contains("Survivors: 0"));
}

#[test]
fn leader_death_is_its_own_cause() {
    let mut g = GameContext::start("Ana", Profession::Farmer, &[]).unwrap();
    g.player.damage(10);
    g.end(false);
    assert_eq!(g.loss_cause(), LossCause::LeaderDied);
    g.restart();
    assert_eq!(g.status(), GameStatus::NotStarted);
    assert_eq!(g.summary(), "Game not started");
}

// ── shop ──────────────────────────────────────────────────────────────────────

#[test]
fn buying_spends_money_and_stocks_the_wagon() {
    let mut p = Player::new("Ana", Profession::Farmer, GridPos::new(5, 5));
    let mut inv = Inventory::starter();
    shop::buy(Offer::Medkit, &mut p, &mut inv).unwrap();
    shop::buy(Offer::RifleAmmo, &mut p, &mut inv).unwrap();
    assert_eq!(p.money(), 400 - 15 - 10);
    assert_eq!(inv.linear_search_by_name("Medkit").map(|i| i.quantity), Some(4));
    assert_eq!(inv.linear_search_by_name("Rifle ammo").map(|i| i.quantity), Some(70));
}

#[test]
fn cannot_buy_without_money() {
    let mut p = Player::new("Ana", Profession::Farmer, GridPos::new(5, 5));
    assert!(p.spend_money(395));
    let mut inv = Inventory::default();
    let err = shop::buy(Offer::Medkit, &mut p, &mut inv).unwrap_err();
    assert!(matches!(err, GameError::InsufficientFunds { needed: 15, available: 5 }));
    assert!(inv.is_empty());
    shop::buy(Offer::FoodPack, &mut p, &mut inv).unwrap();
    assert_eq!(p.money(), 0);
}

#[test]
fn full_wagon_keeps_the_money() {
    let mut p = Player::new("Ana", Profession::Banker, GridPos::new(5, 5));
    let mut inv = Inventory::new(1);
    inv.add(Item::food(1)).unwrap();
    assert!(matches!(shop::buy(Offer::Medkit, &mut p, &mut inv), Err(GameError::InventoryFull { .. })));
    assert_eq!(p.money(), 1600);
    // stacking onto an existing slot still works
    shop::buy(Offer::FoodPack, &mut p, &mut inv).unwrap();
    assert_eq!(inv.total_quantity(), 2);
}
