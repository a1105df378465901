/**
 * Read-only Views
 *
 * Values are returned through Anchor return data. Never gated by pause.
 *
 * Made by LabsX402 for Solana
 * https://x.com/LabsX402
 */

use anchor_lang::prelude::*;

use crate::{
    state::{PayoutInitiator, TreasuryVault, VaultStatus},
    VAULT_SEED,
};

#[derive(Accounts)]
pub struct ReadVault<'info> {
    #[account(
        seeds = [VAULT_SEED],
        bump = vault.bump,
    )]
    pub vault: Account<'info, TreasuryVault>,
}

pub fn current_day_handler(ctx: Context<ReadVault>) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    Ok(ctx.accounts.vault.current_day(now))
}

pub fn remaining_daily_limit_handler(ctx: Context<ReadVault>) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    Ok(ctx.accounts.vault.remaining_daily_limit(now))
}

pub fn vault_status_handler(ctx: Context<ReadVault>) -> Result<VaultStatus> {
    let now = Clock::get()?.unix_timestamp;
    let status = ctx.accounts.vault.status(now);

    let initiator = match status.payout_initiator {
        PayoutInitiator::BeneficiaryOnly => "BENEFICIARY_ONLY",
        PayoutInitiator::AdministratorOrBeneficiary => "ADMIN_OR_BENEFICIARY",
    };

    msg!("╔══════════════════════════════════════════════════════════════╗");
    msg!("║           TREASURY STATUS                                    ║");
    msg!("╠══════════════════════════════════════════════════════════════╣");
    msg!("║ State: {}", if status.paused { "PAUSED" } else { "ACTIVE" });
    msg!("║ Owner: {}", status.owner);
    msg!("║ Beneficiary: {}", status.beneficiary);
    msg!("║ Payouts triggered by: {}", initiator);
    msg!("║");
    msg!("║ Day: {}", status.current_day);
    msg!("║ Daily limit: {}", status.daily_limit);
    msg!("║ Spent today: {}", status.spent_today);
    msg!("║ Remaining today: {}", status.remaining_daily_limit);
    msg!("║");
    msg!("║ Balance: {}", status.total_balance);
    msg!("║ Deposited: {}", status.total_deposited);
    msg!("║ Paid out: {}", status.total_paid_out);
    msg!("║ Recovered: {}", status.total_recovered);
    msg!("╚══════════════════════════════════════════════════════════════╝");

    Ok(status)
}
