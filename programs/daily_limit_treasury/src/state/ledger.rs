/**
 * Treasury Ledger
 *
 * Book balance of the treasury PDA plus lifetime flow counters.
 * The rent-exempt reserve seeded at init is never part of `total_balance`.
 *
 * Made by LabsX402 for Solana
 * https://x.com/LabsX402
 */

use anchor_lang::prelude::*;

use crate::TreasuryError;

/// Why lamports leave the treasury
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outflow {
    /// Beneficiary payout, counted against the daily limit
    Payout,
    /// Admin recovery, outside the daily limit
    Recovery,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Ledger {
    /// Lamports currently custodied
    pub total_balance: u64,

    /// Total deposited (lifetime)
    pub total_deposited: u64,

    /// Total paid to beneficiaries (lifetime)
    pub total_paid_out: u64,

    /// Total moved out through recovery (lifetime)
    pub total_recovered: u64,
}

impl Ledger {
    pub const LEN: usize = 8 + // total_balance
        8 + // total_deposited
        8 + // total_paid_out
        8;  // total_recovered

    /// Book an incoming deposit. Returns the new balance.
    pub fn credit(&mut self, amount: u64) -> Result<u64> {
        require!(amount > 0, TreasuryError::InvalidAmount);

        let total_balance = self.total_balance
            .checked_add(amount)
            .ok_or(TreasuryError::MathOverflow)?;
        let total_deposited = self.total_deposited
            .checked_add(amount)
            .ok_or(TreasuryError::MathOverflow)?;

        self.total_balance = total_balance;
        self.total_deposited = total_deposited;

        Ok(total_balance)
    }

    /// Book an outgoing transfer. Never takes the balance below zero.
    /// Returns the new balance.
    pub fn debit(&mut self, amount: u64, kind: Outflow) -> Result<u64> {
        require!(amount > 0, TreasuryError::InvalidAmount);

        let total_balance = self.total_balance
            .checked_sub(amount)
            .ok_or(TreasuryError::InsufficientBalance)?;

        match kind {
            Outflow::Payout => {
                self.total_paid_out = self.total_paid_out
                    .checked_add(amount)
                    .ok_or(TreasuryError::MathOverflow)?;
            }
            Outflow::Recovery => {
                self.total_recovered = self.total_recovered
                    .checked_add(amount)
                    .ok_or(TreasuryError::MathOverflow)?;
            }
        }
        self.total_balance = total_balance;

        Ok(total_balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credit_and_debit_track_balance_and_counters() {
        let mut ledger = Ledger::default();

        assert_eq!(ledger.credit(1_000).unwrap(), 1_000);
        assert_eq!(ledger.debit(300, Outflow::Payout).unwrap(), 700);
        assert_eq!(ledger.debit(200, Outflow::Recovery).unwrap(), 500);

        assert_eq!(ledger.total_deposited, 1_000);
        assert_eq!(ledger.total_paid_out, 300);
        assert_eq!(ledger.total_recovered, 200);
        assert_eq!(
            ledger.total_balance,
            ledger.total_deposited - ledger.total_paid_out - ledger.total_recovered
        );
    }

    #[test]
    fn zero_amounts_are_rejected() {
        let mut ledger = Ledger::default();
        assert!(ledger.credit(0).is_err());
        ledger.credit(10).unwrap();
        assert!(ledger.debit(0, Outflow::Payout).is_err());
        assert!(ledger.debit(0, Outflow::Recovery).is_err());
        assert_eq!(ledger.total_balance, 10);
    }

    #[test]
    fn overdraw_fails_without_clamping() {
        let mut ledger = Ledger::default();
        ledger.credit(100).unwrap();
        let before = ledger;

        assert!(ledger.debit(101, Outflow::Payout).is_err());
        assert!(ledger.debit(101, Outflow::Recovery).is_err());
        assert_eq!(ledger, before);

        assert_eq!(ledger.debit(100, Outflow::Payout).unwrap(), 0);
    }

    #[test]
    fn credit_overflow_leaves_ledger_unchanged() {
        let mut ledger = Ledger {
            total_balance: u64::MAX - 1,
            total_deposited: u64::MAX - 1,
            ..Ledger::default()
        };
        let before = ledger;

        assert!(ledger.credit(2).is_err());
        assert_eq!(ledger, before);
    }
}
