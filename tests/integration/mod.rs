//! Integration tests for the Pindo virtual file tree

mod cli_commands;
mod reducer_scenarios;
mod sled_store;
mod tree_invariants;
