use std::sync::Arc;

use habitforge::core::{Day, HabitStore};
use habitforge::storage::MemoryStore;

/// Build a habit with the given days complete, Mon..Sun order.
fn habit_with(days: [bool; 7]) -> habitforge::core::Habit {
    let store = Arc::new(MemoryStore::new());
    let mut habits = HabitStore::open(store, Some("5551234567")).unwrap();
    let habit = habits.create("Read", "Learning", "blue").unwrap();
    for (day, complete) in Day::ALL.iter().zip(days) {
        if complete {
            habits.toggle_day(&habit.id, *day).unwrap();
        }
    }
    habits.get(&habit.id).unwrap().clone()
}

struct Case {
    name: &'static str,
    days: [bool; 7],
    expected: u32,
}

#[test]
fn streak_is_the_trailing_run_ending_at_sunday() {
    let cases = [
        Case {
            name: "all incomplete",
            days: [false; 7],
            expected: 0,
        },
        Case {
            name: "only Mon and Tue",
            days: [true, true, false, false, false, false, false],
            expected: 0,
        },
        Case {
            name: "Sat and Sun",
            days: [false, false, false, false, false, true, true],
            expected: 2,
        },
        Case {
            name: "all complete",
            days: [true; 7],
            expected: 7,
        },
        Case {
            name: "Fri and Sat, Sun incomplete",
            days: [false, false, false, false, true, true, false],
            expected: 2,
        },
        Case {
            name: "only Sun",
            days: [false, false, false, false, false, false, true],
            expected: 1,
        },
        Case {
            name: "run broken by Thu",
            days: [true, true, true, false, true, true, true],
            expected: 3,
        },
        Case {
            name: "Mon..Sat complete, Sun incomplete",
            days: [true, true, true, true, true, true, false],
            expected: 6,
        },
    ];

    for case in cases {
        let habit = habit_with(case.days);
        assert_eq!(habit.streak(), case.expected, "case '{}'", case.name);
    }
}

#[test]
fn streak_is_pure() {
    let habit = habit_with([false, false, false, false, false, true, true]);
    assert_eq!(habit.streak(), 2);
    assert_eq!(habit.streak(), 2);
    // Computing the streak never touches the days map.
    assert_eq!(habit.days.len(), 7);
}
