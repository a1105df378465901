/**
 * Initialize Treasury Instruction
 *
 * Made by LabsX402 for Solana
 * https://x.com/LabsX402
 */

use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::{
    state::{PayoutInitiator, TreasuryVault},
    VAULT_SEED,
    TREASURY_SEED,
    VaultInitialized,
};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = TreasuryVault::LEN,
        seeds = [VAULT_SEED],
        bump,
    )]
    pub vault: Account<'info, TreasuryVault>,

    /// Lamport holder. Owned by the system program, signed for via seeds.
    #[account(
        mut,
        seeds = [TREASURY_SEED, vault.key().as_ref()],
        bump,
    )]
    pub treasury: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_handler(
    ctx: Context<Initialize>,
    beneficiary: Pubkey,
    daily_limit: u64,
    payout_initiator: PayoutInitiator,
) -> Result<()> {
    let clock = Clock::get()?;

    // Rent reserve for the treasury PDA, kept outside the book balance
    let reserve = Rent::get()?
        .minimum_balance(0)
        .saturating_sub(ctx.accounts.treasury.lamports());
    if reserve > 0 {
        transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.admin.to_account_info(),
                    to: ctx.accounts.treasury.to_account_info(),
                },
            ),
            reserve,
        )?;
    }

    let admin = ctx.accounts.admin.key();
    let treasury = ctx.accounts.treasury.key();
    let vault = &mut ctx.accounts.vault;
    vault.initialize(
        admin,
        beneficiary,
        treasury,
        daily_limit,
        payout_initiator,
        clock.unix_timestamp,
        ctx.bumps.vault,
        ctx.bumps.treasury,
    )?;

    emit!(VaultInitialized {
        admin,
        beneficiary,
        daily_limit,
        payout_initiator,
    });

    msg!("Treasury initialized: limit {} lamports/day, beneficiary {}", daily_limit, beneficiary);

    Ok(())
}
