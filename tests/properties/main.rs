//! Property-based suites for the habitforge core.

mod habit_props;
