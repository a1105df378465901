/**
 * Deposit Instruction
 *
 * Open to anyone while the vault is active. The lamports move in the same
 * instruction that books them.
 *
 * Made by LabsX402 for Solana
 * https://x.com/LabsX402
 */

use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::{
    state::TreasuryVault,
    VAULT_SEED,
    TREASURY_SEED,
    Deposited,
};

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

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

    pub system_program: Program<'info, System>,
}

pub fn deposit_handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let depositor = ctx.accounts.depositor.key();
    let total_balance = ctx.accounts.vault.deposit(&depositor, amount)?;

    transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.depositor.to_account_info(),
                to: ctx.accounts.treasury.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(Deposited {
        depositor,
        amount,
        total_balance,
    });

    msg!("Deposit: {} lamports (balance {})", amount, total_balance);

    Ok(())
}
