//! CI-facing helpers shared by the workspace test suites.

pub mod property_test_profile;
