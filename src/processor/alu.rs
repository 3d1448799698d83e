use super::Pstate;
use crate::bits::{sign_bit, sign_extend, width_mask};
use crate::instructions::ShiftKind;

// Flag and shift rules shared by the immediate and register data-processing
// families. All values are evaluated under the width selected by `sf`.

/// Applies a shift to an already width-masked value.
pub(super) fn apply_shift(sf: bool, kind: ShiftKind, value: u64, amount: u32) -> u64 {
    let width = if sf { 64 } else { 32 };
    let amount = amount % width;
    let shifted = match kind {
        ShiftKind::Lsl => value << amount,
        ShiftKind::Lsr => value >> amount,
        ShiftKind::Asr => {
            let extended = sign_extend(value, width - 1);
            ((extended as i64) >> amount) as u64
        }
        ShiftKind::Ror => {
            if amount == 0 {
                value
            } else {
                (value >> amount) | (value << (width - amount))
            }
        }
    };
    width_mask(shifted, sf)
}

/// Updates N, Z, C and V for a flag-setting add or subtract.
pub(super) fn arith_flags(
    pstate: &mut Pstate,
    sf: bool,
    rn: u64,
    op2: u64,
    result: u64,
    sub: bool,
) {
    pstate.negative = sign_bit(result, sf);
    pstate.zero = result == 0;
    if sub {
        // no borrow: minuend at least as large as the subtrahend
        pstate.carry = rn >= op2;
        pstate.overflow =
            sign_bit(rn, sf) != sign_bit(op2, sf) && sign_bit(result, sf) != sign_bit(rn, sf);
    } else {
        // unsigned wrap-around: the sum dropped below an operand
        pstate.carry = result < rn;
        pstate.overflow =
            sign_bit(rn, sf) == sign_bit(op2, sf) && sign_bit(result, sf) != sign_bit(rn, sf);
    }
}

/// Updates the flags for `ands`/`bics`: C and V are always cleared.
pub(super) fn logic_flags(pstate: &mut Pstate, sf: bool, result: u64) {
    pstate.negative = sign_bit(result, sf);
    pstate.zero = result == 0;
    pstate.carry = false;
    pstate.overflow = false;
}
