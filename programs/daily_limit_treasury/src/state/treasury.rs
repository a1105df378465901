/**
 * Treasury Vault State
 *
 * The whole state machine lives on this account. Handlers resolve the
 * signer and the clock, then call into these methods; nothing here reads
 * sysvars, so every operation is a function of (state, caller, now, args).
 *
 * Outbound transfers go last. Effects are committed before `send` runs,
 * and a failed send restores the pre-call checkpoint.
 *
 * Made by LabsX402 for Solana
 * https://x.com/LabsX402
 */

use anchor_lang::prelude::*;

use crate::TreasuryError;
use super::{DailyLimitTracker, Ledger, Operation, Outflow, PayoutInitiator};

/// Moves lamports out of the treasury
pub trait LamportTransfer {
    /// `committed` is the vault after this operation's effects were applied.
    fn send(&mut self, committed: &TreasuryVault, to: &Pubkey, amount: u64) -> Result<()>;
}

/// Treasury vault account
#[account]
#[derive(Default, Debug, PartialEq)]
pub struct TreasuryVault {
    /// Sole administrator (transferable)
    pub admin: Pubkey,

    /// Receives payouts
    pub beneficiary: Pubkey,

    /// Lamport-holding treasury PDA
    pub treasury: Pubkey,

    /// Blocks deposits and payouts while set
    pub paused: bool,

    /// Who may trigger a payout
    pub payout_initiator: PayoutInitiator,

    /// Daily spend accounting
    pub limit: DailyLimitTracker,

    /// Custodied balance and lifetime counters
    pub ledger: Ledger,

    /// Creation timestamp
    pub created_at: i64,

    /// Bump of the lamport-holding treasury PDA
    pub treasury_bump: u8,

    /// Bump seed for PDA
    pub bump: u8,

    /// Reserved for future use
    pub reserved: [u8; 32],
}

/// Result of a successful beneficiary payout
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Payout {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub day: u64,
    pub spent_today: u64,
    pub total_balance: u64,
}

/// Read-only view returned by `get_vault_status`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct VaultStatus {
    pub owner: Pubkey,
    pub beneficiary: Pubkey,
    pub paused: bool,
    pub payout_initiator: PayoutInitiator,
    pub current_day: u64,
    pub daily_limit: u64,
    pub spent_today: u64,
    pub remaining_daily_limit: u64,
    pub total_balance: u64,
    pub total_deposited: u64,
    pub total_paid_out: u64,
    pub total_recovered: u64,
}

#[derive(Clone, Copy)]
struct Checkpoint {
    limit: DailyLimitTracker,
    ledger: Ledger,
}

impl TreasuryVault {
    pub const LEN: usize = 8 + // discriminator
        32 + // admin
        32 + // beneficiary
        32 + // treasury
        1 +  // paused
        1 +  // payout_initiator
        DailyLimitTracker::LEN + // limit
        Ledger::LEN + // ledger
        8 +  // created_at
        1 +  // treasury_bump
        1 +  // bump
        32;  // reserved

    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        &mut self,
        admin: Pubkey,
        beneficiary: Pubkey,
        treasury: Pubkey,
        daily_limit: u64,
        payout_initiator: PayoutInitiator,
        now: i64,
        bump: u8,
        treasury_bump: u8,
    ) -> Result<()> {
        require_keys_neq!(admin, Pubkey::default(), TreasuryError::InvalidAddress);
        require_keys_neq!(treasury, Pubkey::default(), TreasuryError::InvalidAddress);
        require_keys_neq!(beneficiary, Pubkey::default(), TreasuryError::InvalidAddress);
        require_keys_neq!(beneficiary, treasury, TreasuryError::InvalidAddress);

        self.admin = admin;
        self.beneficiary = beneficiary;
        self.treasury = treasury;
        self.paused = false;
        self.payout_initiator = payout_initiator;
        self.limit = DailyLimitTracker::new(daily_limit, now);
        self.ledger = Ledger::default();
        self.created_at = now;
        self.treasury_bump = treasury_bump;
        self.bump = bump;
        self.reserved = [0u8; 32];

        Ok(())
    }

    // =========================================================================
    // GUARDS
    // =========================================================================

    /// Role check first, then the pause switch for fund movement
    pub fn authorize(&self, op: Operation, caller: &Pubkey) -> Result<()> {
        let role = op.required_role(self.payout_initiator);
        require!(
            role.admits(caller, &self.admin, &self.beneficiary),
            TreasuryError::Unauthorized
        );
        if op.moves_funds() {
            self.require_not_paused()?;
        }
        Ok(())
    }

    pub fn require_not_paused(&self) -> Result<()> {
        require!(!self.paused, TreasuryError::ContractPaused);
        Ok(())
    }

    /// Lamports may only leave to a real key outside the treasury. A send
    /// back into the treasury would shrink the book balance without moving
    /// anything.
    pub fn require_payee(&self, to: &Pubkey) -> Result<()> {
        require_keys_neq!(*to, Pubkey::default(), TreasuryError::InvalidAddress);
        require_keys_neq!(*to, self.treasury, TreasuryError::InvalidAddress);
        Ok(())
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            limit: self.limit,
            ledger: self.ledger,
        }
    }

    fn restore(&mut self, checkpoint: Checkpoint) {
        self.limit = checkpoint.limit;
        self.ledger = checkpoint.ledger;
    }

    /// Final step of every outbound operation
    fn settle<T: LamportTransfer>(
        &mut self,
        checkpoint: Checkpoint,
        transfer: &mut T,
        to: &Pubkey,
        amount: u64,
    ) -> Result<()> {
        if let Err(e) = transfer.send(self, to, amount) {
            msg!("Transfer of {} lamports to {} failed: {}", amount, to, e);
            self.restore(checkpoint);
            return err!(TreasuryError::TransferFailed);
        }
        Ok(())
    }

    // =========================================================================
    // FUND MOVEMENT
    // =========================================================================

    /// Returns the new total balance
    pub fn deposit(&mut self, caller: &Pubkey, amount: u64) -> Result<u64> {
        self.authorize(Operation::Deposit, caller)?;
        self.ledger.credit(amount)
    }

    pub fn withdraw_to_beneficiary<T: LamportTransfer>(
        &mut self,
        caller: &Pubkey,
        amount: u64,
        now: i64,
        transfer: &mut T,
    ) -> Result<Payout> {
        self.authorize(Operation::WithdrawToBeneficiary, caller)?;
        require!(amount > 0, TreasuryError::InvalidAmount);

        let checkpoint = self.checkpoint();
        let spent_today = self.limit.record_spend(amount, now)?;
        let total_balance = match self.ledger.debit(amount, Outflow::Payout) {
            Ok(balance) => balance,
            Err(e) => {
                self.restore(checkpoint);
                return Err(e);
            }
        };

        let beneficiary = self.beneficiary;
        self.settle(checkpoint, transfer, &beneficiary, amount)?;

        Ok(Payout {
            beneficiary,
            amount,
            day: self.limit.last_day,
            spent_today,
            total_balance,
        })
    }

    /// Emergency transfer by the admin. Skips the daily limit and the pause
    /// switch. Returns the new total balance.
    pub fn recover_funds<T: LamportTransfer>(
        &mut self,
        caller: &Pubkey,
        to: &Pubkey,
        amount: u64,
        transfer: &mut T,
    ) -> Result<u64> {
        self.authorize(Operation::RecoverFunds, caller)?;
        self.require_payee(to)?;

        let checkpoint = self.checkpoint();
        let total_balance = self.ledger.debit(amount, Outflow::Recovery)?;

        self.settle(checkpoint, transfer, to, amount)?;

        Ok(total_balance)
    }

    // =========================================================================
    // ADMINISTRATION
    // =========================================================================

    /// Returns the previous limit
    pub fn update_daily_limit(&mut self, caller: &Pubkey, new_limit: u64) -> Result<u64> {
        self.authorize(Operation::UpdateDailyLimit, caller)?;
        Ok(self.limit.set_limit(new_limit))
    }

    /// Returns the previous limit and beneficiary
    pub fn update_daily_limit_and_beneficiary(
        &mut self,
        caller: &Pubkey,
        new_limit: u64,
        new_beneficiary: Pubkey,
    ) -> Result<(u64, Pubkey)> {
        self.authorize(Operation::UpdateDailyLimitAndBeneficiary, caller)?;
        self.require_payee(&new_beneficiary)?;

        let old_beneficiary = self.beneficiary;
        self.beneficiary = new_beneficiary;
        let old_limit = self.limit.set_limit(new_limit);

        Ok((old_limit, old_beneficiary))
    }

    pub fn set_payout_initiator(
        &mut self,
        caller: &Pubkey,
        payout_initiator: PayoutInitiator,
    ) -> Result<()> {
        self.authorize(Operation::SetPayoutInitiator, caller)?;
        self.payout_initiator = payout_initiator;
        Ok(())
    }

    /// Returns the previous admin
    pub fn transfer_ownership(&mut self, caller: &Pubkey, new_owner: Pubkey) -> Result<Pubkey> {
        self.authorize(Operation::TransferOwnership, caller)?;
        require_keys_neq!(new_owner, Pubkey::default(), TreasuryError::InvalidAddress);

        let previous = self.admin;
        self.admin = new_owner;
        Ok(previous)
    }

    /// Idempotent. Returns true if the flag changed.
    pub fn emergency_pause(&mut self, caller: &Pubkey) -> Result<bool> {
        self.authorize(Operation::EmergencyPause, caller)?;
        let changed = !self.paused;
        self.paused = true;
        Ok(changed)
    }

    /// Idempotent. Returns true if the flag changed.
    pub fn unpause(&mut self, caller: &Pubkey) -> Result<bool> {
        self.authorize(Operation::Unpause, caller)?;
        let changed = self.paused;
        self.paused = false;
        Ok(changed)
    }

    // =========================================================================
    // VIEWS
    // =========================================================================

    /// Day bucket spends at `now` are booked against. Never behind `last_day`.
    pub fn current_day(&self, now: i64) -> u64 {
        self.limit.active_day(now)
    }

    pub fn remaining_daily_limit(&self, now: i64) -> u64 {
        self.limit.remaining(now)
    }

    pub fn daily_limit(&self) -> u64 {
        self.limit.daily_limit
    }

    pub fn total_balance(&self) -> u64 {
        self.ledger.total_balance
    }

    pub fn beneficiary(&self) -> Pubkey {
        self.beneficiary
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn owner(&self) -> Pubkey {
        self.admin
    }

    pub fn status(&self, now: i64) -> VaultStatus {
        VaultStatus {
            owner: self.owner(),
            beneficiary: self.beneficiary(),
            paused: self.paused(),
            payout_initiator: self.payout_initiator,
            current_day: self.current_day(now),
            daily_limit: self.daily_limit(),
            spent_today: self.limit.spent_as_of(now),
            remaining_daily_limit: self.remaining_daily_limit(now),
            total_balance: self.total_balance(),
            total_deposited: self.ledger.total_deposited,
            total_paid_out: self.ledger.total_paid_out,
            total_recovered: self.ledger.total_recovered,
        }
    }
}
