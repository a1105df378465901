/**
 * Daily Limit Treasury
 *
 * Custodial SOL treasury: anyone can fund it, a fixed beneficiary is paid
 * out under a rolling daily limit, and a single admin controls limits,
 * pausing and emergency recovery.
 *
 * Made by LabsX402 for Solana
 * https://x.com/LabsX402
 *
 * License: BSL 1.1 (converts to MIT after Dec 2028)
 */

use anchor_lang::prelude::*;

pub mod state;
pub mod instructions;

use state::*;
use instructions::*;

declare_id!("DLTreasury111111111111111111111111111111111");

// =============================================================================
// SEEDS
// =============================================================================

/// Vault state account (one per program)
pub const VAULT_SEED: &[u8] = b"treasury_vault";

/// System-owned PDA that actually holds the lamports
pub const TREASURY_SEED: &[u8] = b"treasury";

// =============================================================================
// CONSTANTS
// =============================================================================

/// Length of one spend bucket: 24 hours
pub const DAY_SECONDS: i64 = 24 * 60 * 60;

// =============================================================================
// PROGRAM
// =============================================================================

#[program]
pub mod daily_limit_treasury {
    use super::*;

    // =========================================================================
    // SETUP
    // =========================================================================

    /// Create the vault. The signer becomes the admin.
    pub fn initialize(
        ctx: Context<Initialize>,
        beneficiary: Pubkey,
        daily_limit: u64,
        payout_initiator: PayoutInitiator,
    ) -> Result<()> {
        instructions::initialize::initialize_handler(ctx, beneficiary, daily_limit, payout_initiator)
    }

    // =========================================================================
    // FUND MOVEMENT (pause-gated)
    // =========================================================================

    /// Deposit lamports into the treasury
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::deposit_handler(ctx, amount)
    }

    /// Pay the beneficiary, bounded by the remaining daily limit
    pub fn withdraw_to_beneficiary(
        ctx: Context<WithdrawToBeneficiary>,
        amount: u64,
    ) -> Result<()> {
        instructions::withdraw::withdraw_handler(ctx, amount)
    }

    // =========================================================================
    // ADMINISTRATION
    // =========================================================================

    /// Change the daily limit
    pub fn update_daily_limit(ctx: Context<AdminConfig>, new_limit: u64) -> Result<()> {
        instructions::admin::update_daily_limit_handler(ctx, new_limit)
    }

    /// Change the daily limit and the beneficiary together
    pub fn update_daily_limit_and_beneficiary(
        ctx: Context<AdminConfig>,
        new_limit: u64,
        new_beneficiary: Pubkey,
    ) -> Result<()> {
        instructions::admin::update_limit_and_beneficiary_handler(ctx, new_limit, new_beneficiary)
    }

    /// Choose who may trigger beneficiary payouts
    pub fn set_payout_initiator(
        ctx: Context<AdminConfig>,
        payout_initiator: PayoutInitiator,
    ) -> Result<()> {
        instructions::admin::set_payout_initiator_handler(ctx, payout_initiator)
    }

    /// Hand the admin role to another key
    pub fn transfer_ownership(ctx: Context<AdminConfig>, new_owner: Pubkey) -> Result<()> {
        instructions::admin::transfer_ownership_handler(ctx, new_owner)
    }

    // =========================================================================
    // EMERGENCY
    // =========================================================================

    /// Stop deposits and payouts
    pub fn emergency_pause(ctx: Context<AdminConfig>) -> Result<()> {
        instructions::pause::emergency_pause_handler(ctx)
    }

    /// Resume deposits and payouts
    pub fn unpause(ctx: Context<AdminConfig>) -> Result<()> {
        instructions::pause::unpause_handler(ctx)
    }

    /// Admin recovery transfer. Ignores the daily limit and the pause flag.
    pub fn recover_funds(ctx: Context<RecoverFunds>, amount: u64) -> Result<()> {
        instructions::recover::recover_handler(ctx, amount)
    }

    // =========================================================================
    // VIEWS
    // =========================================================================

    /// Current day bucket index
    pub fn get_current_day(ctx: Context<ReadVault>) -> Result<u64> {
        instructions::status::current_day_handler(ctx)
    }

    /// Lamports the beneficiary can still receive today
    pub fn get_remaining_daily_limit(ctx: Context<ReadVault>) -> Result<u64> {
        instructions::status::remaining_daily_limit_handler(ctx)
    }

    /// Full vault snapshot
    pub fn get_vault_status(ctx: Context<ReadVault>) -> Result<VaultStatus> {
        instructions::status::vault_status_handler(ctx)
    }
}

// =============================================================================
// ERRORS
// =============================================================================

#[error_code]
pub enum TreasuryError {
    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Vault is paused")]
    ContractPaused,

    #[msg("Daily limit exceeded")]
    DailyLimitExceeded,

    #[msg("Insufficient treasury balance")]
    InsufficientBalance,

    #[msg("Invalid address (null key)")]
    InvalidAddress,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Lamport transfer failed")]
    TransferFailed,

    #[msg("Math overflow")]
    MathOverflow,
}

// =============================================================================
// EVENTS
// =============================================================================

#[event]
pub struct VaultInitialized {
    pub admin: Pubkey,
    pub beneficiary: Pubkey,
    pub daily_limit: u64,
    pub payout_initiator: PayoutInitiator,
}

#[event]
pub struct Deposited {
    pub depositor: Pubkey,
    pub amount: u64,
    pub total_balance: u64,
}

#[event]
pub struct BeneficiaryPaid {
    pub initiator: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub day: u64,
    pub spent_today: u64,
    pub total_balance: u64,
}

#[event]
pub struct DailyLimitUpdated {
    pub admin: Pubkey,
    pub old_limit: u64,
    pub new_limit: u64,
}

#[event]
pub struct BeneficiaryUpdated {
    pub admin: Pubkey,
    pub old_beneficiary: Pubkey,
    pub new_beneficiary: Pubkey,
}

#[event]
pub struct PayoutInitiatorChanged {
    pub admin: Pubkey,
    pub payout_initiator: PayoutInitiator,
}

#[event]
pub struct VaultPaused {
    pub admin: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct VaultUnpaused {
    pub admin: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct FundsRecovered {
    pub admin: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub total_balance: u64,
}

#[event]
pub struct OwnershipTransferred {
    pub previous_admin: Pubkey,
    pub new_admin: Pubkey,
}
