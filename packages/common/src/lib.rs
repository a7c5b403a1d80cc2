//! Common - Shared Types and Utilities for the Zwap Ledger Contracts
//!
//! This package provides shared type definitions and utility functions
//! used across the Zwap Ledger smart contracts.

pub mod asset;

pub use asset::AssetInfo;
