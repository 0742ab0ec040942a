use std::sync::Arc;

use habitforge::core::{Day, Habit, HabitStore};
use habitforge::storage::MemoryStore;
use proptest::prelude::*;

fn store_with_one_habit() -> (HabitStore, String) {
    let mut habits = HabitStore::open(Arc::new(MemoryStore::new()), Some("5551234567")).unwrap();
    let habit = habits.create("Read", "Learning", "blue").unwrap();
    (habits, habit.id)
}

fn habit_with(days: [bool; 7]) -> Habit {
    let (mut habits, id) = store_with_one_habit();
    for (day, complete) in Day::ALL.iter().zip(days) {
        if complete {
            habits.toggle_day(&id, *day).unwrap();
        }
    }
    habits.get(&id).unwrap().clone()
}

/// Independent formulation of the streak: drop the trailing incomplete
/// days, then count the consecutive completed days at the end.
fn reference_streak(days: [bool; 7]) -> u32 {
    let tail = days.iter().rev().take_while(|d| !**d).count();
    days[..7 - tail]
        .iter()
        .rev()
        .take_while(|d| **d)
        .count() as u32
}

proptest! {
    #[test]
    fn streak_matches_reference(days in proptest::array::uniform7(any::<bool>())) {
        let habit = habit_with(days);
        prop_assert_eq!(habit.streak(), reference_streak(days));
    }

    #[test]
    fn streak_is_zero_iff_no_day_is_complete(days in proptest::array::uniform7(any::<bool>())) {
        let habit = habit_with(days);
        prop_assert_eq!(habit.streak() == 0, days.iter().all(|d| !d));
        prop_assert!(habit.streak() <= 7);
    }

    #[test]
    fn toggles_compose_by_parity(seq in proptest::collection::vec(0usize..7, 0..32)) {
        let (mut habits, id) = store_with_one_habit();
        for i in &seq {
            habits.toggle_day(&id, Day::ALL[*i]).unwrap();
        }
        let habit = habits.get(&id).unwrap();
        for (i, day) in Day::ALL.iter().enumerate() {
            let toggles = seq.iter().filter(|s| **s == i).count();
            prop_assert_eq!(habit.completed(*day), toggles % 2 == 1);
        }
    }

    #[test]
    fn toggling_one_habit_never_touches_another(
        days in proptest::collection::vec(0usize..7, 1..16)
    ) {
        let mut habits =
            HabitStore::open(Arc::new(MemoryStore::new()), Some("5551234567")).unwrap();
        let target = habits.create("Read", "Learning", "blue").unwrap();
        let bystander = habits.create("Run", "Fitness", "green").unwrap();

        for i in &days {
            habits.toggle_day(&target.id, Day::ALL[*i]).unwrap();
        }

        let untouched = habits.get(&bystander.id).unwrap();
        prop_assert!(Day::ALL.iter().all(|d| !untouched.completed(*d)));
    }

    #[test]
    fn delete_then_delete_is_a_noop(extra in 0usize..4) {
        let mut habits =
            HabitStore::open(Arc::new(MemoryStore::new()), Some("5551234567")).unwrap();
        for i in 0..extra {
            habits.create(&format!("Habit {i}"), "Other", "red").unwrap();
        }
        let habit = habits.create("Read", "Learning", "blue").unwrap();

        prop_assert!(habits.delete(&habit.id).unwrap());
        let after_first: Vec<_> = habits.habits().iter().map(|h| h.id.clone()).collect();
        prop_assert!(!habits.delete(&habit.id).unwrap());
        let after_second: Vec<_> = habits.habits().iter().map(|h| h.id.clone()).collect();
        prop_assert_eq!(after_first, after_second);
        prop_assert_eq!(habits.habits().len(), extra);
    }
}
