//! Cross-store behavior: session lifecycle driving the habit partition.

use std::sync::Arc;

use habitforge::HfError;
use habitforge::core::{AccountStore, HabitStore};
use habitforge::storage::{KvStore, SqliteStore};
use tempfile::tempdir;

#[test]
fn login_logout_swaps_the_visible_habit_list() {
    let store: Arc<dyn KvStore> = Arc::new(SqliteStore::open_in_memory().unwrap());
    let mut accounts = AccountStore::open(Arc::clone(&store)).unwrap();
    let mut habits = HabitStore::open(Arc::clone(&store), None).unwrap();

    accounts.authenticate("5551111111", "1111").unwrap();
    habits.set_active_user(accounts.current_user()).unwrap();
    habits.create("Meditate", "Mindfulness", "purple").unwrap();
    habits.create("Journal", "Mindfulness", "amber").unwrap();

    accounts.authenticate("5552222222", "2222").unwrap();
    habits.set_active_user(accounts.current_user()).unwrap();
    assert!(habits.habits().is_empty());
    habits.create("Run", "Fitness", "green").unwrap();

    // Back to the first user: exactly their list, in insertion order.
    accounts.end_session().unwrap();
    accounts.authenticate("5551111111", "1111").unwrap();
    habits.set_active_user(accounts.current_user()).unwrap();
    let names: Vec<_> = habits.habits().iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, ["Meditate", "Journal"]);
}

#[test]
fn session_and_habits_survive_store_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hf.db");

    {
        let store: Arc<dyn KvStore> = Arc::new(SqliteStore::open(&path).unwrap());
        let mut accounts = AccountStore::open(Arc::clone(&store)).unwrap();
        accounts.authenticate("5551234567", "1234").unwrap();
        let mut habits = HabitStore::open(store, accounts.current_user()).unwrap();
        habits.create("Read", "Learning", "blue").unwrap();
    }

    let store: Arc<dyn KvStore> = Arc::new(SqliteStore::open(&path).unwrap());
    let accounts = AccountStore::open(Arc::clone(&store)).unwrap();
    assert_eq!(accounts.current_user(), Some("5551234567"));

    let habits = HabitStore::open(store, accounts.current_user()).unwrap();
    assert_eq!(habits.habits().len(), 1);
    assert_eq!(habits.habits()[0].name, "Read");
    assert_eq!(habits.habits()[0].color, "blue");
}

#[test]
fn wrong_password_never_disturbs_another_session() {
    let store: Arc<dyn KvStore> = Arc::new(SqliteStore::open_in_memory().unwrap());
    let mut accounts = AccountStore::open(store).unwrap();

    accounts.authenticate("5551111111", "1111").unwrap();
    accounts.authenticate("5552222222", "2222").unwrap();

    let err = accounts.authenticate("5551111111", "0000").unwrap_err();
    assert!(matches!(err, HfError::IncorrectPassword));
    // Failed login leaves the active session where it was.
    assert_eq!(accounts.current_user(), Some("5552222222"));
}

#[test]
fn habit_mutations_persist_through_a_fresh_handle() {
    let store: Arc<dyn KvStore> = Arc::new(SqliteStore::open_in_memory().unwrap());

    let mut habits = HabitStore::open(Arc::clone(&store), Some("5551234567")).unwrap();
    let habit = habits.create("Read", "Learning", "blue").unwrap();
    habits
        .toggle_day(&habit.id, habitforge::core::Day::Sun)
        .unwrap();

    let reloaded = HabitStore::open(store, Some("5551234567")).unwrap();
    assert!(reloaded.habits()[0].completed(habitforge::core::Day::Sun));
    assert_eq!(reloaded.habits()[0].streak(), 1);
}
