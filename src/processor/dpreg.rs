use num::FromPrimitive;

use super::{alu, cond, Processor, TickResult};
use crate::bits::{get_value, width_mask};
use crate::instructions::{ArithOp, LogicOp, ShiftKind};
use crate::{constants, Word};

// Data processing register: shifted-register arithmetic and bit-logic,
// multiply, and the conditional-select patterns which share this op0 slot.

pub(super) fn execute(proc: &mut Processor, raw: Word) -> Option<TickResult> {
    if cond::recognises(raw) {
        return cond::execute(proc, raw);
    }

    let raw = u64::from(raw);
    let sf = get_value(raw, constants::SF_OFFSET, 1) != 0;
    let m = get_value(raw, constants::M_OFFSET, 1) != 0;
    let opc = get_value(raw, constants::OPC_OFFSET, constants::OPC_SIZE);
    let opr = get_value(raw, constants::OPR_OFFSET, constants::OPR_SIZE);
    let rd = get_value(raw, constants::RD_OFFSET, constants::REG_SIZE) as u32;
    let rn = get_value(raw, constants::RN_OFFSET, constants::REG_SIZE) as u32;
    let rm = get_value(raw, constants::RM_OFFSET, constants::REG_SIZE) as u32;

    if m {
        if opr != constants::OPR_MULTIPLY || opc != 0 {
            return None;
        }
        let negate = get_value(raw, constants::MUL_X_OFFSET, 1) != 0;
        let ra = get_value(raw, constants::RA_OFFSET, constants::REG_SIZE) as u32;

        let product = proc.reg(sf, rn).wrapping_mul(proc.reg(sf, rm));
        let ra_val = proc.reg(sf, ra);
        let result = if negate {
            ra_val.wrapping_sub(product)
        } else {
            ra_val.wrapping_add(product)
        };
        proc.set_reg(sf, rd, width_mask(result, sf));
        return Some(TickResult::Next);
    }

    let arithmetic = opr & constants::OPR_ARITH_MASK == constants::OPR_ARITH_BITS;
    let bit_logic = opr & constants::OPR_LOGIC_MASK == 0;
    if !arithmetic && !bit_logic {
        return None;
    }

    let shift = ShiftKind::from_u64(get_value(raw, constants::SHIFT_KIND_OFFSET, 2))?;
    if arithmetic && shift == ShiftKind::Ror {
        return None;
    }
    let amount = get_value(raw, constants::SHIFT_AMT_OFFSET, constants::SHIFT_AMT_SIZE) as u32;

    let rn_val = proc.reg(sf, rn);
    let mut op2 = alu::apply_shift(sf, shift, proc.reg(sf, rm), amount);

    if bit_logic {
        let op = LogicOp::from_u64(opc * 2 + get_value(raw, constants::NEG_OFFSET, 1))?;
        if op.negates() {
            op2 = width_mask(!op2, sf);
        }
        let result = match op {
            LogicOp::And | LogicOp::Bic | LogicOp::Ands | LogicOp::Bics => rn_val & op2,
            LogicOp::Orr | LogicOp::Orn => rn_val | op2,
            LogicOp::Eor | LogicOp::Eon => rn_val ^ op2,
        };
        proc.set_reg(sf, rd, result);
        if op.sets_flags() {
            alu::logic_flags(&mut proc.pstate, sf, result);
        }
    } else {
        let op = ArithOp::from_u64(opc)?;
        let result = if op.is_sub() {
            rn_val.wrapping_sub(op2)
        } else {
            rn_val.wrapping_add(op2)
        };
        let result = width_mask(result, sf);
        proc.set_reg(sf, rd, result);
        if op.sets_flags() {
            alu::arith_flags(&mut proc.pstate, sf, rn_val, op2, result, op.is_sub());
        }
    }

    Some(TickResult::Next)
}
