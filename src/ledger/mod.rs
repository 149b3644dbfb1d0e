//! Ledger domain: line records, transactions and the pure services that
//! parse, aggregate and summarize them.
pub mod domain;
pub mod services;
