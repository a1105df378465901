/**
 * Emergency Recovery Instruction
 *
 * Admin-only transfer out of the treasury. Works while paused and does not
 * count against the daily limit.
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
    FundsRecovered,
};

#[derive(Accounts)]
pub struct RecoverFunds<'info> {
    /// Checked against `vault.admin` by the vault itself
    pub authority: Signer<'info>,

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

    /// CHECK: any destination picked by the admin other than the null key
    /// and the treasury itself
    #[account(
        mut,
        constraint = recipient.key() != treasury.key() @ TreasuryError::InvalidAddress,
    )]
    pub recipient: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn recover_handler(ctx: Context<RecoverFunds>, amount: u64) -> Result<()> {
    let admin = ctx.accounts.authority.key();
    let recipient = ctx.accounts.recipient.key();

    let mut transfer = TreasuryTransfer::new(
        &ctx.accounts.vault,
        &ctx.accounts.treasury,
        ctx.accounts.recipient.to_account_info(),
        &ctx.accounts.system_program,
    );

    let total_balance = ctx
        .accounts
        .vault
        .recover_funds(&admin, &recipient, amount, &mut transfer)?;

    emit!(FundsRecovered {
        admin,
        recipient,
        amount,
        total_balance,
    });

    msg!("⚠️ Recovered {} lamports to {} (balance {})", amount, recipient, total_balance);

    Ok(())
}
