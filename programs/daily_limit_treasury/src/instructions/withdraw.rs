/**
 * Withdraw To Beneficiary Instruction
 *
 * Made by LabsX402 for Solana
 * https://x.com/LabsX402
 */

use anchor_lang::prelude::*;

use crate::{
    instructions::transfer::TreasuryTransfer,
    state::TreasuryVault,
    TreasuryError,
    VAULT_SEED,
    TREASURY_SEED,
    BeneficiaryPaid,
};

#[derive(Accounts)]
pub struct WithdrawToBeneficiary<'info> {
    /// Beneficiary, or the admin when the payout policy allows it
    pub initiator: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = vault.bump,
    )]
    pub vault: Account<'info, TreasuryVault>,

    #[account(
        mut,
        seeds = [TREASURY_SEED, vault.key().as_ref()],
        bump = vault.treasury_bump,
    )]
    pub treasury: SystemAccount<'info>,

    /// CHECK: must be the beneficiary stored on the vault
    #[account(
        mut,
        address = vault.beneficiary @ TreasuryError::InvalidAddress,
    )]
    pub beneficiary: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn withdraw_handler(ctx: Context<WithdrawToBeneficiary>, amount: u64) -> Result<()> {
    let initiator = ctx.accounts.initiator.key();
    let now = Clock::get()?.unix_timestamp;

    let mut transfer = TreasuryTransfer::new(
        &ctx.accounts.vault,
        &ctx.accounts.treasury,
        ctx.accounts.beneficiary.to_account_info(),
        &ctx.accounts.system_program,
    );

    let payout = ctx
        .accounts
        .vault
        .withdraw_to_beneficiary(&initiator, amount, now, &mut transfer)?;

    emit!(BeneficiaryPaid {
        initiator,
        beneficiary: payout.beneficiary,
        amount: payout.amount,
        day: payout.day,
        spent_today: payout.spent_today,
        total_balance: payout.total_balance,
    });

    msg!(
        "Paid {} lamports to {} (day {}: {} spent, {} left)",
        payout.amount,
        payout.beneficiary,
        payout.day,
        payout.spent_today,
        ctx.accounts.vault.remaining_daily_limit(now)
    );

    Ok(())
}
