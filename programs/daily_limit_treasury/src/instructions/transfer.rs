/**
 * Treasury Lamport Transfer
 *
 * System-program transfer out of the treasury PDA, signed with its seeds.
 *
 * Made by LabsX402 for Solana
 * https://x.com/LabsX402
 */

use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::{
    state::{LamportTransfer, TreasuryVault},
    TreasuryError,
    TREASURY_SEED,
};

pub struct TreasuryTransfer<'info> {
    system_program: AccountInfo<'info>,
    treasury: AccountInfo<'info>,
    recipient: AccountInfo<'info>,
    vault: Pubkey,
    treasury_bump: u8,
}

impl<'info> TreasuryTransfer<'info> {
    pub fn new(
        vault: &Account<'info, TreasuryVault>,
        treasury: &SystemAccount<'info>,
        recipient: AccountInfo<'info>,
        system_program: &Program<'info, System>,
    ) -> Self {
        Self {
            system_program: system_program.to_account_info(),
            treasury: treasury.to_account_info(),
            recipient,
            vault: vault.key(),
            treasury_bump: vault.treasury_bump,
        }
    }
}

impl<'info> LamportTransfer for TreasuryTransfer<'info> {
    fn send(&mut self, _committed: &TreasuryVault, to: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(*self.recipient.key, *to, TreasuryError::InvalidAddress);

        let bump = [self.treasury_bump];
        let treasury_seeds: &[&[u8]] = &[TREASURY_SEED, self.vault.as_ref(), &bump];

        system_program::transfer(
            CpiContext::new_with_signer(
                self.system_program.clone(),
                system_program::Transfer {
                    from: self.treasury.clone(),
                    to: self.recipient.clone(),
                },
                &[treasury_seeds],
            ),
            amount,
        )
    }
}
