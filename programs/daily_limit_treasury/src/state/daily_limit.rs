/**
 * Daily Limit Tracker
 *
 * Spending is bucketed by `floor(unix_timestamp / DAY_SECONDS)`. The bucket
 * rolls lazily: whichever call first sees a newer day starts from zero.
 * Nothing is scheduled.
 *
 * Made by LabsX402 for Solana
 * https://x.com/LabsX402
 */

use anchor_lang::prelude::*;

use crate::{TreasuryError, DAY_SECONDS};

/// Day bucket for a timestamp. Pre-epoch timestamps land in day 0.
pub fn day_index(now: i64) -> u64 {
    if now <= 0 {
        0
    } else {
        (now / DAY_SECONDS) as u64
    }
}

/// Rolling daily spend accounting, embedded in the vault account
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct DailyLimitTracker {
    /// Max lamports paid out per day bucket
    pub daily_limit: u64,

    /// Day bucket `spent_today` belongs to
    pub last_day: u64,

    /// Lamports paid out during `last_day`
    pub spent_today: u64,
}

impl DailyLimitTracker {
    pub const LEN: usize = 8 + // daily_limit
        8 + // last_day
        8;  // spent_today

    pub fn new(daily_limit: u64, now: i64) -> Self {
        Self {
            daily_limit,
            last_day: day_index(now),
            spent_today: 0,
        }
    }

    /// Day a spend at `now` is booked against. Never earlier than the
    /// recorded day, so a skewed clock cannot reopen an old bucket.
    pub fn active_day(&self, now: i64) -> u64 {
        day_index(now).max(self.last_day)
    }

    fn spent_on(&self, day: u64) -> u64 {
        if day == self.last_day {
            self.spent_today
        } else {
            0
        }
    }

    /// Start a fresh bucket if `now` falls in a newer day.
    /// Returns true when the bucket rolled.
    pub fn roll_if_new_day(&mut self, now: i64) -> bool {
        let day = self.active_day(now);
        if day == self.last_day {
            return false;
        }
        self.last_day = day;
        self.spent_today = 0;
        true
    }

    /// Spent amount as of `now`, without committing a roll
    pub fn spent_as_of(&self, now: i64) -> u64 {
        self.spent_on(self.active_day(now))
    }

    /// Remaining allowance as of `now`. Zero when a lowered limit sits
    /// below what was already spent today.
    pub fn remaining(&self, now: i64) -> u64 {
        self.daily_limit.saturating_sub(self.spent_as_of(now))
    }

    /// Book `amount` against today's bucket. Leaves the tracker untouched
    /// on failure. Returns the new spent total.
    pub fn record_spend(&mut self, amount: u64, now: i64) -> Result<u64> {
        let mut next = *self;
        next.roll_if_new_day(now);

        require!(
            amount <= next.daily_limit.saturating_sub(next.spent_today),
            TreasuryError::DailyLimitExceeded
        );

        next.spent_today = next
            .spent_today
            .checked_add(amount)
            .ok_or(TreasuryError::MathOverflow)?;

        *self = next;
        Ok(next.spent_today)
    }

    /// Replace the limit. Today's spend is kept as is.
    pub fn set_limit(&mut self, new_limit: u64) -> u64 {
        let old = self.daily_limit;
        self.daily_limit = new_limit;
        old
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: i64 = 1_700_000_000;

    fn day_start(now: i64) -> i64 {
        now - now.rem_euclid(DAY_SECONDS)
    }

    #[test]
    fn day_index_buckets_by_day_seconds() {
        assert_eq!(day_index(0), 0);
        assert_eq!(day_index(DAY_SECONDS - 1), 0);
        assert_eq!(day_index(DAY_SECONDS), 1);
        assert_eq!(day_index(-5), 0);
        assert_eq!(day_index(T0), (T0 / DAY_SECONDS) as u64);
    }

    #[test]
    fn spend_within_limit_accumulates() {
        let mut t = DailyLimitTracker::new(100, T0);
        assert_eq!(t.record_spend(60, T0).unwrap(), 60);
        assert_eq!(t.remaining(T0), 40);
        assert_eq!(t.record_spend(40, T0 + 10).unwrap(), 100);
        assert_eq!(t.remaining(T0 + 10), 0);
    }

    #[test]
    fn over_limit_spend_leaves_tracker_unchanged() {
        let mut t = DailyLimitTracker::new(100, T0);
        t.record_spend(60, T0).unwrap();
        let before = t;

        assert!(t.record_spend(50, T0 + 60).is_err());
        assert_eq!(t, before);
        assert_eq!(t.remaining(T0 + 60), 40);
    }

    #[test]
    fn failed_spend_on_new_day_does_not_commit_roll() {
        let mut t = DailyLimitTracker::new(100, T0);
        t.record_spend(100, T0).unwrap();
        let before = t;

        assert!(t.record_spend(101, T0 + DAY_SECONDS).is_err());
        assert_eq!(t, before);
    }

    #[test]
    fn new_day_resets_spend() {
        let mut t = DailyLimitTracker::new(100, T0);
        t.record_spend(100, T0).unwrap();
        assert_eq!(t.remaining(T0), 0);

        let next = day_start(T0) + DAY_SECONDS;
        assert_eq!(t.remaining(next - 1), 0);
        assert_eq!(t.remaining(next), 100);
        assert_eq!(t.record_spend(50, next).unwrap(), 50);
        assert_eq!(t.last_day, day_index(next));
    }

    #[test]
    fn earlier_timestamp_never_reopens_bucket() {
        let mut t = DailyLimitTracker::new(100, T0);
        t.record_spend(100, T0).unwrap();

        let yesterday = T0 - DAY_SECONDS;
        assert_eq!(t.active_day(yesterday), t.last_day);
        assert_eq!(t.remaining(yesterday), 0);
        assert!(t.record_spend(1, yesterday).is_err());
        assert!(!t.roll_if_new_day(yesterday));
    }

    #[test]
    fn roll_if_new_day_is_lazy_and_exact() {
        let mut t = DailyLimitTracker::new(100, T0);
        t.record_spend(30, T0).unwrap();

        assert!(!t.roll_if_new_day(T0 + 1));
        assert_eq!(t.spent_today, 30);

        assert!(t.roll_if_new_day(T0 + 3 * DAY_SECONDS));
        assert_eq!(t.spent_today, 0);
        assert_eq!(t.last_day, day_index(T0) + 3);
    }

    #[test]
    fn lowered_limit_blocks_until_rollover() {
        let mut t = DailyLimitTracker::new(100, T0);
        t.record_spend(80, T0).unwrap();

        assert_eq!(t.set_limit(50), 100);
        assert_eq!(t.spent_today, 80);
        assert_eq!(t.remaining(T0), 0);
        assert!(t.record_spend(1, T0).is_err());

        assert_eq!(t.remaining(T0 + DAY_SECONDS), 50);
        assert_eq!(t.record_spend(50, T0 + DAY_SECONDS).unwrap(), 50);
    }

    #[test]
    fn zero_limit_blocks_every_spend() {
        let mut t = DailyLimitTracker::new(0, T0);
        assert!(t.record_spend(1, T0).is_err());
        assert_eq!(t.remaining(T0 + 10 * DAY_SECONDS), 0);
    }
}
