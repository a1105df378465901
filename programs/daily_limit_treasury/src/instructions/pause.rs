/**
 * Emergency Pause Instructions
 *
 * Both are idempotent: repeating the current state succeeds and only logs.
 *
 * Made by LabsX402 for Solana
 * https://x.com/LabsX402
 */

use anchor_lang::prelude::*;

use crate::{
    instructions::admin::AdminConfig,
    VaultPaused,
    VaultUnpaused,
};

pub fn emergency_pause_handler(ctx: Context<AdminConfig>) -> Result<()> {
    let admin = ctx.accounts.authority.key();

    if !ctx.accounts.vault.emergency_pause(&admin)? {
        msg!("Vault already paused");
        return Ok(());
    }

    emit!(VaultPaused {
        admin,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("🛑 Vault paused: deposits and payouts halted");

    Ok(())
}

pub fn unpause_handler(ctx: Context<AdminConfig>) -> Result<()> {
    let admin = ctx.accounts.authority.key();

    if !ctx.accounts.vault.unpause(&admin)? {
        msg!("Vault already active");
        return Ok(());
    }

    emit!(VaultUnpaused {
        admin,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Vault unpaused");

    Ok(())
}
