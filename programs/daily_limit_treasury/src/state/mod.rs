/**
 * State for the Daily Limit Treasury
 *
 * Made by LabsX402 for Solana
 * https://x.com/LabsX402
 */

pub mod access;
pub mod daily_limit;
pub mod ledger;
pub mod treasury;

pub use access::*;
pub use daily_limit::*;
pub use ledger::*;
pub use treasury::*;
