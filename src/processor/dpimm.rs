use num::FromPrimitive;

use super::{alu, Processor, TickResult};
use crate::bits::{get_value, width_mask};
use crate::instructions::{ArithOp, WideMoveOp};
use crate::{constants, Word};

// Data processing immediate: arithmetic (opi 010) and wide move (opi 101).

pub(super) fn execute(proc: &mut Processor, raw: Word) -> Option<TickResult> {
    let raw = u64::from(raw);
    let sf = get_value(raw, constants::SF_OFFSET, 1) != 0;
    let opc = get_value(raw, constants::OPC_OFFSET, constants::OPC_SIZE);
    let opi = get_value(raw, constants::OPI_OFFSET, constants::OPI_SIZE);
    let rd = get_value(raw, constants::RD_OFFSET, constants::REG_SIZE) as u32;

    match opi {
        constants::OPI_ARITH => {
            let op = ArithOp::from_u64(opc)?;
            let rn = get_value(raw, constants::RN_OFFSET, constants::REG_SIZE) as u32;
            let mut imm12 = get_value(raw, constants::IMM12_OFFSET, constants::IMM12_SIZE);
            if get_value(raw, constants::SH_OFFSET, 1) != 0 {
                imm12 <<= 12;
            }

            let rn_val = proc.reg(sf, rn);
            let result = if op.is_sub() {
                rn_val.wrapping_sub(imm12)
            } else {
                rn_val.wrapping_add(imm12)
            };
            let result = width_mask(result, sf);

            proc.set_reg(sf, rd, result);
            if op.sets_flags() {
                alu::arith_flags(&mut proc.pstate, sf, rn_val, imm12, result, op.is_sub());
            }
            Some(TickResult::Next)
        }
        constants::OPI_WIDE_MOVE => {
            let op = WideMoveOp::from_u64(opc)?;
            let hw = get_value(raw, constants::HW_OFFSET, constants::HW_SIZE) as u32;
            let imm16 = get_value(raw, constants::IMM16_OFFSET, constants::IMM16_SIZE);
            let shift = hw * 16;
            let operand = imm16 << shift;

            let value = match op {
                WideMoveOp::Movn => !operand,
                WideMoveOp::Movz => operand,
                WideMoveOp::Movk => {
                    // replace one 16-bit lane, keep the others
                    let lane_mask = 0xFFFFu64 << shift;
                    (proc.reg(sf, rd) & !lane_mask) | operand
                }
            };
            proc.set_reg(sf, rd, width_mask(value, sf));
            Some(TickResult::Next)
        }
        _ => None,
    }
}
