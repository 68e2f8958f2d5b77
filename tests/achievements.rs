use oregon_trail::core::achievements::*;
use oregon_trail::core::tree::OrderedTree;
use oregon_trail::error::GameError;

// ── OrderedTree ───────────────────────────────────────────────────────────────

#[test]
fn in_order_is_strictly_ascending() {
    let mut t = OrderedTree::new();
    for k in [50, 30, 70, 20, 40, 60, 80, 35, 65] {
        assert!(t.insert(k, k * 10));
    }
    let keys: Vec<i32> = t.keys().copied().collect();
    assert!(keys.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(keys.len(), 9);
    assert_eq!(t.get(&35), Some(&350));
}

#[test]
fn duplicate_insert_keeps_first_value() {
    let mut t = OrderedTree::new();
    assert!(t.insert(3, "first"));
    assert!(!t.insert(3, "second"));
    assert_eq!(t.len(), 1);
    assert_eq!(t.get(&3), Some(&"first"));
}

#[test]
fn clear_empties_tree() {
    let mut t = OrderedTree::new();
    for k in 0..100 {
        t.insert(k, ());
    }
    t.clear();
    assert!(t.is_empty());
    assert_eq!(t.iter().count(), 0);
}

// ── AchievementLog ────────────────────────────────────────────────────────────

#[test]
fn catalog_lists_difficulties_one_to_ten() {
    let log = AchievementLog::new();
    let order: Vec<u8> = log.catalog_in_order().map(|a| a.difficulty).collect();
    assert_eq!(order, (1..=10).collect::<Vec<u8>>());
    // mixed insertion order keeps the tree shallower than a linked chain
    assert!(log.catalog_tree().height() < 10);
}

#[test]
fn unlocked_root_is_independent_of_catalog() {
    let mut log = AchievementLog::new();
    assert!(log.unlock(SURVIVOR).unwrap());
    assert!(log.unlock(CROSSING_THE_PLAINS).unwrap());

    let unlocked: Vec<u8> = log.unlocked_in_order().map(|a| a.difficulty).collect();
    assert_eq!(unlocked, vec![CROSSING_THE_PLAINS, SURVIVOR]);
    assert_eq!(log.catalog_tree().len(), 10);
    assert_eq!(log.unlocked_tree().len(), 2);
    assert_eq!(log.progress(), (2, 10, 20.0));
}

#[test]
fn unlock_twice_reports_not_new() {
    let mut log = AchievementLog::new();
    assert!(log.unlock(FIRST_STEP).unwrap());
    assert!(!log.unlock(FIRST_STEP).unwrap());
    assert_eq!(log.unlocked_tree().len(), 1);
}

#[test]
fn unknown_difficulty_is_an_error() {
    let mut log = AchievementLog::new();
    assert!(matches!(log.unlock(11), Err(GameError::UnknownAchievement(11))));
    assert!(matches!(log.unlock(0), Err(GameError::UnknownAchievement(0))));
    assert!(log.unlocked_tree().is_empty());
}

#[test]
fn reports() {
    let mut log = AchievementLog::new();
    assert!(log.unlocked_report().starts_with("No achievements"));
    log.unlock(FIRST_BLOOD).unwrap();
    assert_eq!(log.unlocked_report(), "[4] First Blood: Defeat your first enemy");
    assert_eq!(log.catalog_report().lines().count(), 10);
}

// ── AchievementTracker ────────────────────────────────────────────────────────

fn journey() -> JourneySnapshot {
    JourneySnapshot { days: 1, distance: 15, food: 100, members_total: 2, members_alive: 2, reached_oregon: false }
}

#[test]
fn first_step_and_first_blood() {
    let mut log = AchievementLog::new();
    let mut t = AchievementTracker::default();
    assert!(t.evaluate(&journey(), &mut log).is_empty());

    t.record_step();
    assert_eq!(t.evaluate(&journey(), &mut log), vec![FIRST_STEP]);

    t.record_kill(false, 1.0);
    assert_eq!(t.evaluate(&journey(), &mut log), vec![FIRST_BLOOD]);
    // nothing new the second time round
    assert!(t.evaluate(&journey(), &mut log).is_empty());
}

#[test]
fn sharpshooter_streak_resets_on_damage() {
    let mut t = AchievementTracker::default();
    for _ in 0..9 {
        t.record_kill(false, 2.0);
    }
    t.record_damage();
    t.record_kill(false, 2.0);
    assert!(!t.qualifying(&journey()).contains(&SHARPSHOOTER));
    for _ in 0..9 {
        t.record_kill(false, 2.0);
    }
    assert!(t.qualifying(&journey()).contains(&SHARPSHOOTER));
}

#[test]
fn rifle_master_needs_long_rifle_kills() {
    let mut t = AchievementTracker::default();
    for _ in 0..5 {
        t.record_kill(false, 7.0);
        t.record_kill(true, 3.0);
    }
    assert!(!t.qualifying(&journey()).contains(&RIFLE_MASTER));
    for _ in 0..5 {
        t.record_kill(true, 5.0);
    }
    assert!(t.qualifying(&journey()).contains(&RIFLE_MASTER));
}

#[test]
fn region_and_food_conditions() {
    let mut t = AchievementTracker::default();
    t.record_region_left(500);
    let q = t.qualifying(&journey());
    assert!(q.contains(&CROSSING_THE_PLAINS));
    assert!(!q.contains(&RESOURCE_MANAGER));
    t.record_region_left(501);
    assert!(t.qualifying(&journey()).contains(&RESOURCE_MANAGER));
}

#[test]
fn survivor_and_legend_require_whole_party() {
    let t = AchievementTracker::default();
    let mut j = JourneySnapshot { days: 50, distance: 2000, reached_oregon: true, ..journey() };
    let q = t.qualifying(&j);
    assert!(q.contains(&SURVIVOR));
    assert!(q.contains(&NOVICE_EXPLORER));
    assert!(q.contains(&OREGON_CONQUEROR));
    assert!(q.contains(&TRAIL_LEGEND));

    j.members_alive = 1;
    let q = t.qualifying(&j);
    assert!(!q.contains(&SURVIVOR));
    assert!(q.contains(&OREGON_CONQUEROR));
    assert!(!q.contains(&TRAIL_LEGEND));
}
