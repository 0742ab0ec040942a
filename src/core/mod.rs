//! Core state management
//!
//! Two stateless facades over a [`KvStore`](crate::storage::KvStore):
//! [`account::AccountStore`] owns the credential registry and the session,
//! [`habit::HabitStore`] owns the active user's habit list. The habit store
//! depends on the account store's notion of current user to pick its
//! storage partition; the dependency never runs the other way.

pub mod account;
pub mod habit;

pub use account::{AccountStore, Credential, LoginOutcome};
pub use habit::{Day, Habit, HabitStore};

/// Key holding the phone number of the logged-in user.
pub(crate) const SESSION_KEY: &str = "session";

/// Key holding the JSON array of credential records.
pub(crate) const USERS_KEY: &str = "users";

/// Per-user habit partition. Distinct phones yield disjoint keys, so
/// switching users swaps the entire visible list.
pub(crate) fn habits_key(phone: &str) -> String {
    format!("habits/{phone}")
}
