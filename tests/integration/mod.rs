//! Integration tests for the annum year-selection component

mod corruption_recovery;
mod persistence_integration;
