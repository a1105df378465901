/**
 * Admin Configuration Instructions
 *
 * Limit, beneficiary, payout policy and ownership changes. None of these
 * are gated by the pause switch.
 *
 * Made by LabsX402 for Solana
 * https://x.com/LabsX402
 */

use anchor_lang::prelude::*;

use crate::{
    state::{PayoutInitiator, TreasuryVault},
    VAULT_SEED,
    DailyLimitUpdated,
    BeneficiaryUpdated,
    PayoutInitiatorChanged,
    OwnershipTransferred,
};

#[derive(Accounts)]
pub struct AdminConfig<'info> {
    /// Checked against `vault.admin` by the vault itself
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = vault.bump,
    )]
    pub vault: Account<'info, TreasuryVault>,
}

// =============================================================================
// DAILY LIMIT
// =============================================================================

pub fn update_daily_limit_handler(ctx: Context<AdminConfig>, new_limit: u64) -> Result<()> {
    let admin = ctx.accounts.authority.key();
    let old_limit = ctx.accounts.vault.update_daily_limit(&admin, new_limit)?;

    emit!(DailyLimitUpdated {
        admin,
        old_limit,
        new_limit,
    });

    msg!("Daily limit: {} → {} lamports", old_limit, new_limit);

    Ok(())
}

pub fn update_limit_and_beneficiary_handler(
    ctx: Context<AdminConfig>,
    new_limit: u64,
    new_beneficiary: Pubkey,
) -> Result<()> {
    let admin = ctx.accounts.authority.key();
    let (old_limit, old_beneficiary) = ctx
        .accounts
        .vault
        .update_daily_limit_and_beneficiary(&admin, new_limit, new_beneficiary)?;

    emit!(DailyLimitUpdated {
        admin,
        old_limit,
        new_limit,
    });
    emit!(BeneficiaryUpdated {
        admin,
        old_beneficiary,
        new_beneficiary,
    });

    msg!("Daily limit: {} → {} lamports", old_limit, new_limit);
    msg!("Beneficiary: {} → {}", old_beneficiary, new_beneficiary);

    Ok(())
}

// =============================================================================
// PAYOUT POLICY
// =============================================================================

pub fn set_payout_initiator_handler(
    ctx: Context<AdminConfig>,
    payout_initiator: PayoutInitiator,
) -> Result<()> {
    let admin = ctx.accounts.authority.key();
    ctx.accounts.vault.set_payout_initiator(&admin, payout_initiator)?;

    emit!(PayoutInitiatorChanged {
        admin,
        payout_initiator,
    });

    msg!("Payout initiator: {:?}", payout_initiator);

    Ok(())
}

// =============================================================================
// OWNERSHIP
// =============================================================================

pub fn transfer_ownership_handler(ctx: Context<AdminConfig>, new_owner: Pubkey) -> Result<()> {
    let admin = ctx.accounts.authority.key();
    let previous_admin = ctx.accounts.vault.transfer_ownership(&admin, new_owner)?;

    emit!(OwnershipTransferred {
        previous_admin,
        new_admin: new_owner,
    });

    msg!("Ownership transferred: {} → {}", previous_admin, new_owner);

    Ok(())
}
