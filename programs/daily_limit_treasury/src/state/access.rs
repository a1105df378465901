/**
 * Access Control
 *
 * Every mutating operation declares the role it needs and whether the
 * pause switch gates it. The vault checks both through one path.
 *
 * Made by LabsX402 for Solana
 * https://x.com/LabsX402
 */

use anchor_lang::prelude::*;

/// Who may trigger a beneficiary payout
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum PayoutInitiator {
    /// Only the beneficiary pulls its own payout
    BeneficiaryOnly,
    /// The admin may also push a payout to the beneficiary
    AdministratorOrBeneficiary,
}

impl Default for PayoutInitiator {
    fn default() -> Self {
        Self::BeneficiaryOnly
    }
}

/// Caller requirement for an operation
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Role {
    Anyone,
    Administrator,
    Beneficiary,
    AdministratorOrBeneficiary,
}

impl Role {
    pub fn admits(self, caller: &Pubkey, admin: &Pubkey, beneficiary: &Pubkey) -> bool {
        match self {
            Role::Anyone => true,
            Role::Administrator => caller == admin,
            Role::Beneficiary => caller == beneficiary,
            Role::AdministratorOrBeneficiary => caller == admin || caller == beneficiary,
        }
    }
}

/// Every state-changing entry point of the vault
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operation {
    Deposit,
    WithdrawToBeneficiary,
    UpdateDailyLimit,
    UpdateDailyLimitAndBeneficiary,
    SetPayoutInitiator,
    EmergencyPause,
    Unpause,
    RecoverFunds,
    TransferOwnership,
}

impl Operation {
    pub const ALL: [Operation; 9] = [
        Operation::Deposit,
        Operation::WithdrawToBeneficiary,
        Operation::UpdateDailyLimit,
        Operation::UpdateDailyLimitAndBeneficiary,
        Operation::SetPayoutInitiator,
        Operation::EmergencyPause,
        Operation::Unpause,
        Operation::RecoverFunds,
        Operation::TransferOwnership,
    ];

    pub fn required_role(self, initiator: PayoutInitiator) -> Role {
        match self {
            Operation::Deposit => Role::Anyone,
            Operation::WithdrawToBeneficiary => match initiator {
                PayoutInitiator::BeneficiaryOnly => Role::Beneficiary,
                PayoutInitiator::AdministratorOrBeneficiary => Role::AdministratorOrBeneficiary,
            },
            Operation::UpdateDailyLimit
            | Operation::UpdateDailyLimitAndBeneficiary
            | Operation::SetPayoutInitiator
            | Operation::EmergencyPause
            | Operation::Unpause
            | Operation::RecoverFunds
            | Operation::TransferOwnership => Role::Administrator,
        }
    }

    /// Fund movement the pause switch blocks. Recovery is not on this list.
    pub fn moves_funds(self) -> bool {
        matches!(self, Operation::Deposit | Operation::WithdrawToBeneficiary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_deposit_is_open_to_anyone() {
        for op in Operation::ALL {
            for initiator in [PayoutInitiator::BeneficiaryOnly, PayoutInitiator::AdministratorOrBeneficiary] {
                let open = op.required_role(initiator) == Role::Anyone;
                assert_eq!(open, op == Operation::Deposit, "{:?}", op);
            }
        }
    }

    #[test]
    fn withdraw_role_follows_initiator_policy() {
        assert_eq!(
            Operation::WithdrawToBeneficiary.required_role(PayoutInitiator::BeneficiaryOnly),
            Role::Beneficiary
        );
        assert_eq!(
            Operation::WithdrawToBeneficiary.required_role(PayoutInitiator::AdministratorOrBeneficiary),
            Role::AdministratorOrBeneficiary
        );
    }

    #[test]
    fn admin_operations_ignore_initiator_policy() {
        let admin_ops = [
            Operation::UpdateDailyLimit,
            Operation::UpdateDailyLimitAndBeneficiary,
            Operation::SetPayoutInitiator,
            Operation::EmergencyPause,
            Operation::Unpause,
            Operation::RecoverFunds,
            Operation::TransferOwnership,
        ];
        for op in admin_ops {
            assert_eq!(op.required_role(PayoutInitiator::BeneficiaryOnly), Role::Administrator);
            assert_eq!(op.required_role(PayoutInitiator::AdministratorOrBeneficiary), Role::Administrator);
        }
    }

    #[test]
    fn pause_gates_only_deposit_and_payout() {
        let gated: Vec<Operation> = Operation::ALL.into_iter().filter(|op| op.moves_funds()).collect();
        assert_eq!(gated, vec![Operation::Deposit, Operation::WithdrawToBeneficiary]);
    }

    #[test]
    fn role_admits_matrix() {
        let admin = Pubkey::new_unique();
        let beneficiary = Pubkey::new_unique();
        let stranger = Pubkey::new_unique();

        // (role, admin admitted, beneficiary admitted, stranger admitted)
        let matrix = [
            (Role::Anyone, true, true, true),
            (Role::Administrator, true, false, false),
            (Role::Beneficiary, false, true, false),
            (Role::AdministratorOrBeneficiary, true, true, false),
        ];
        for (role, a, b, s) in matrix {
            assert_eq!(role.admits(&admin, &admin, &beneficiary), a, "{:?}", role);
            assert_eq!(role.admits(&beneficiary, &admin, &beneficiary), b, "{:?}", role);
            assert_eq!(role.admits(&stranger, &admin, &beneficiary), s, "{:?}", role);
        }
    }
}
