//! # Settlement
//!
//! Computes the two balances after a transfer. Called with both accounts
//! already held, so it never sees concurrent updates.
//!
//! | Mode | `source < amount` | otherwise |
//! |------|-------------------|-----------|
//! | Unchecked | move, source goes negative | move |
//! | Checked | reject, balances unchanged | move |

use crate::domain::TransferMode;

/// Outcome of settling one transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    /// Source balance after settlement.
    pub source_balance: i64,
    /// Destination balance after settlement.
    pub dest_balance: i64,
    /// Whether funds moved.
    pub success: bool,
}

/// Settle `amount` from `source_balance` into `dest_balance`.
///
/// Arithmetic wraps: an overflowing balance is not an error here.
pub fn settle(
    mode: TransferMode,
    source_balance: i64,
    dest_balance: i64,
    amount: i64,
) -> Settlement {
    if mode == TransferMode::Checked && source_balance < amount {
        return Settlement {
            source_balance,
            dest_balance,
            success: false,
        };
    }
    Settlement {
        source_balance: source_balance.wrapping_sub(amount),
        dest_balance: dest_balance.wrapping_add(amount),
        success: true,
    }
}
