/**
 * Instructions for the Daily Limit Treasury
 *
 * Made by LabsX402 for Solana
 * https://x.com/LabsX402
 */

pub mod transfer;
pub mod initialize;
pub mod deposit;
pub mod withdraw;
pub mod admin;
pub mod pause;
pub mod recover;
pub mod status;

pub use transfer::*;
pub use initialize::*;
pub use deposit::*;
pub use withdraw::*;
pub use admin::*;
pub use pause::*;
pub use recover::*;
pub use status::*;
