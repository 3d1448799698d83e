use num::FromPrimitive;

use super::{Processor, TickResult};
use crate::bits::{get_value, width_mask};
use crate::instructions::{FpArith, FpType, FpUnary};
use crate::{constants, Word};

// Scalar floating point. SIMD registers hold raw 128-bit values; the
// `ftype` field selects the f32 or f64 view of the low lane, and scalar
// writes clear the rest of the register.

fn fp_bits(proc: &Processor, ftype: FpType, index: u32) -> u64 {
    let lane = proc.simd[index as usize] as u64;
    width_mask(lane, ftype == FpType::Double)
}

fn set_fp_bits(proc: &mut Processor, ftype: FpType, index: u32, bits: u64) {
    proc.simd[index as usize] = u128::from(width_mask(bits, ftype == FpType::Double));
}

fn fp_reg(proc: &Processor, ftype: FpType, index: u32) -> f64 {
    match ftype {
        FpType::Double => f64::from_bits(fp_bits(proc, ftype, index)),
        FpType::Single => f64::from(f32::from_bits(fp_bits(proc, ftype, index) as u32)),
    }
}

fn set_fp_reg(proc: &mut Processor, ftype: FpType, index: u32, value: f64) {
    let bits = match ftype {
        FpType::Double => value.to_bits(),
        FpType::Single => u64::from((value as f32).to_bits()),
    };
    set_fp_bits(proc, ftype, index, bits);
}

pub(super) fn execute(proc: &mut Processor, raw: Word) -> Option<TickResult> {
    if raw & constants::FP_MASK != constants::FP_BITS {
        return None;
    }

    let word = u64::from(raw);
    let ftype = FpType::from_u64(get_value(word, constants::FTYPE_OFFSET, constants::FTYPE_SIZE))?;
    let rd = get_value(word, constants::RD_OFFSET, constants::REG_SIZE) as u32;
    let rn = get_value(word, constants::RN_OFFSET, constants::REG_SIZE) as u32;
    let op2 = get_value(word, constants::FP_OP2_OFFSET, constants::FP_OP2_SIZE);

    if op2 & 0b11 == constants::FP_TWO_SOURCE {
        let op = FpArith::from_u64(get_value(
            word,
            constants::FP_ARITH_OFFSET,
            constants::FP_ARITH_SIZE,
        ))?;
        let rm = get_value(word, constants::RM_OFFSET, constants::REG_SIZE) as u32;
        let n = fp_reg(proc, ftype, rn);
        let m = fp_reg(proc, ftype, rm);
        let value = match op {
            FpArith::Fmul => n * m,
            FpArith::Fdiv => n / m,
            FpArith::Fadd => n + m,
            FpArith::Fsub => n - m,
            FpArith::Fmax => {
                if n > m {
                    n
                } else {
                    m
                }
            }
            FpArith::Fmin => {
                if n < m {
                    n
                } else {
                    m
                }
            }
            FpArith::Fnmul => -(n * m),
        };
        set_fp_reg(proc, ftype, rd, value);
        return Some(TickResult::Next);
    }

    if op2 == constants::FP_COMPARE {
        if rd & 0b10111 != 0 {
            return None;
        }
        let against_zero = get_value(word, 3, 1) != 0;
        let rm = get_value(word, constants::RM_OFFSET, constants::REG_SIZE) as u32;
        let n = fp_reg(proc, ftype, rn);
        let m = if against_zero { 0.0 } else { fp_reg(proc, ftype, rm) };

        let diff = n - m;
        let (max, min) = match ftype {
            FpType::Single => (f64::from(f32::MAX), f64::from(f32::MIN_POSITIVE)),
            FpType::Double => (f64::MAX, f64::MIN_POSITIVE),
        };
        proc.pstate.negative = n < m;
        proc.pstate.zero = n == m;
        proc.pstate.carry = false;
        proc.pstate.overflow = diff >= max
            || diff <= -max
            || (diff > 0.0 && diff <= min)
            || (diff < 0.0 && diff >= -min);
        return Some(TickResult::Next);
    }

    if get_value(word, constants::FP_OP2_OFFSET, 5) == constants::FP_ONE_SOURCE {
        let op = FpUnary::from_u64(get_value(
            word,
            constants::FP_UNARY_OFFSET,
            constants::FP_UNARY_SIZE,
        ))?;
        let value = fp_reg(proc, ftype, rn);
        let value = match op {
            FpUnary::Fmov => value,
            FpUnary::Fabs => value.abs(),
            FpUnary::Fneg => -value,
        };
        set_fp_reg(proc, ftype, rd, value);
        return Some(TickResult::Next);
    }

    if op2 == 0 {
        let sf = get_value(word, constants::SF_OFFSET, 1) != 0;
        let rmode = get_value(word, constants::FP_RMODE_OFFSET, constants::FP_RMODE_SIZE);
        let opcode = get_value(word, constants::FP_ICONV_OFFSET, constants::FP_ICONV_SIZE);
        match (rmode, opcode) {
            (0b00, 0b111) => {
                // fmov, general register to FP: a raw bit move
                let bits = proc.reg(sf, rn);
                set_fp_bits(proc, ftype, rd, bits);
            }
            (0b00, 0b110) => {
                // fmov, FP to general register
                proc.set_reg(sf, rd, fp_bits(proc, ftype, rn));
            }
            (0b11, 0b000) => {
                // fcvtzs: toward zero, saturating at the integer bounds
                let value = fp_reg(proc, ftype, rn);
                let converted = if sf {
                    value as i64 as u64
                } else {
                    value as i32 as u32 as u64
                };
                proc.set_reg(sf, rd, converted);
            }
            (0b00, 0b010) => {
                // scvtf: the source register holds a signed integer
                let raw_int = proc.reg(sf, rn);
                let signed = if sf {
                    raw_int as i64
                } else {
                    i64::from(raw_int as u32 as i32)
                };
                set_fp_reg(proc, ftype, rd, signed as f64);
            }
            _ => return None,
        }
        return Some(TickResult::Next);
    }

    None
}
