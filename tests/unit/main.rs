//! Unit test suites for the habitforge core.

mod session_tests;
mod streak_tests;
