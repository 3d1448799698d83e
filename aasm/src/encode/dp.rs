use super::{check_len, expect_register, same_width, unsigned_range, Alias};
use crate::operands::{Operand, Register, Shift};
use crate::{new_parser_error, Result};
use acpu::constants::ZR;
use acpu::instructions::{
    arith_imm, arith_reg, logic_reg, mul_reg, wide_move, ArithOp, LogicOp, ShiftKind, WideMoveOp,
};
use acpu::Word;
use pest::Span;

// Data-processing encoders: arithmetic, bit-logic, wide move and multiply,
// plus the alias rewrites that funnel into them.

fn is_zr(reg: &Register) -> bool {
    reg.index == ZR && !reg.sp
}

fn no_sp<'i>(registers: &[&Register<'i>], context: &str) -> Result<()> {
    for reg in registers {
        if reg.sp {
            return Err(new_parser_error(
                reg.span.clone(),
                format!("Cannot use sp in {}", context),
            ));
        }
    }
    Ok(())
}

fn shift_operand<'a, 'i>(operand: Option<&'a Operand<'i>>) -> Result<Option<&'a Shift<'i>>> {
    match operand {
        None => Ok(None),
        Some(Operand::Shift(shift)) => Ok(Some(shift)),
        Some(other) => Err(new_parser_error(
            other.span().clone(),
            "Expected a shift specifier".to_owned(),
        )),
    }
}

fn shift_amount(shift: &Shift, sf: bool) -> Result<u32> {
    let width = if sf { 64 } else { 32 };
    if shift.amount < 0 || shift.amount >= width {
        Err(new_parser_error(
            shift.span.clone(),
            "Shift amount out of range".to_owned(),
        ))
    } else {
        Ok(shift.amount as u32)
    }
}

pub(super) fn encode_arith(op: ArithOp, operands: &[Operand], span: &Span) -> Result<Word> {
    check_len(operands, 3, 4, span)?;
    let rd = expect_register(operands.get(0), span)?;
    let rn = expect_register(operands.get(1), span)?;

    match &operands[2] {
        Operand::Immediate(imm) => {
            let sf = same_width(&[rd, rn], span)?;
            if is_zr(rn) {
                return Err(new_parser_error(
                    rn.span.clone(),
                    "Cannot use zr as the base of immediate arithmetic".to_owned(),
                ));
            }
            if is_zr(rd) && !op.sets_flags() {
                return Err(new_parser_error(
                    rd.span.clone(),
                    "Cannot use zr as the destination of immediate arithmetic".to_owned(),
                ));
            }

            let mut shifted = false;
            if let Some(shift) = shift_operand(operands.get(3))? {
                if shift.kind != ShiftKind::Lsl {
                    return Err(new_parser_error(
                        shift.span.clone(),
                        "Only lsl is supported for immediate arithmetic".to_owned(),
                    ));
                }
                shifted = match shift.amount {
                    0 => false,
                    12 => true,
                    _ => {
                        return Err(new_parser_error(
                            shift.span.clone(),
                            "Only lsl #0 or #12 is supported for immediate arithmetic".to_owned(),
                        ))
                    }
                };
            }

            let imm12 = unsigned_range(imm.value, 12, &imm.span)?;
            Ok(arith_imm(op, sf, rd.index, rn.index, imm12, shifted))
        }
        Operand::Register(rm) => {
            let sf = same_width(&[rd, rn, rm], span)?;
            let (kind, amount) = match shift_operand(operands.get(3))? {
                Some(shift) => {
                    if shift.kind == ShiftKind::Ror {
                        return Err(new_parser_error(
                            shift.span.clone(),
                            "ror is not supported for register arithmetic".to_owned(),
                        ));
                    }
                    (shift.kind, shift_amount(shift, sf)?)
                }
                None => (ShiftKind::Lsl, 0),
            };
            Ok(arith_reg(op, sf, rd.index, rn.index, rm.index, kind, amount))
        }
        other => Err(new_parser_error(
            other.span().clone(),
            "Expected an immediate or register operand".to_owned(),
        )),
    }
}

pub(super) fn encode_logic(op: LogicOp, operands: &[Operand], span: &Span) -> Result<Word> {
    check_len(operands, 3, 4, span)?;
    let rd = expect_register(operands.get(0), span)?;
    let rn = expect_register(operands.get(1), span)?;
    let rm = expect_register(operands.get(2), span)?;
    no_sp(&[rd, rn, rm], "bit-logic")?;
    let sf = same_width(&[rd, rn, rm], span)?;

    let (kind, amount) = match shift_operand(operands.get(3))? {
        Some(shift) => (shift.kind, shift_amount(shift, sf)?),
        None => (ShiftKind::Lsl, 0),
    };
    Ok(logic_reg(op, sf, rd.index, rn.index, rm.index, kind, amount))
}

pub(super) fn encode_wide_move(op: WideMoveOp, operands: &[Operand], span: &Span) -> Result<Word> {
    check_len(operands, 2, 3, span)?;
    let rd = expect_register(operands.get(0), span)?;
    no_sp(&[rd], "a wide move")?;

    let imm = match &operands[1] {
        Operand::Immediate(imm) => imm,
        other => {
            return Err(new_parser_error(
                other.span().clone(),
                "Expected an immediate operand".to_owned(),
            ))
        }
    };
    let imm16 = unsigned_range(imm.value, 16, &imm.span)?;

    let hw = match shift_operand(operands.get(2))? {
        Some(shift) => {
            if shift.kind != ShiftKind::Lsl {
                return Err(new_parser_error(
                    shift.span.clone(),
                    "Only lsl is supported for wide moves".to_owned(),
                ));
            }
            if shift.amount % 16 != 0 {
                return Err(new_parser_error(
                    shift.span.clone(),
                    "Wide move shift must be a multiple of 16".to_owned(),
                ));
            }
            let hw = shift.amount / 16;
            let lanes = if rd.sf { 4 } else { 2 };
            if hw < 0 || hw >= lanes {
                return Err(new_parser_error(
                    shift.span.clone(),
                    "Wide move shift out of range".to_owned(),
                ));
            }
            hw as u32
        }
        None => 0,
    };

    Ok(wide_move(op, rd.sf, rd.index, imm16, hw))
}

pub(super) fn encode_mul(negate: bool, operands: &[Operand], span: &Span) -> Result<Word> {
    check_len(operands, 4, 4, span)?;
    let rd = expect_register(operands.get(0), span)?;
    let rn = expect_register(operands.get(1), span)?;
    let rm = expect_register(operands.get(2), span)?;
    let ra = expect_register(operands.get(3), span)?;
    no_sp(&[rd, rn, rm, ra], "a multiply")?;
    let sf = same_width(&[rd, rn, rm, ra], span)?;

    Ok(mul_reg(sf, rd.index, rn.index, rm.index, ra.index, negate))
}

/// Rewrites an alias into its canonical instruction. The zero register is
/// spliced in with the width of the alias's leading register operand.
pub(super) fn expand_alias<'i>(
    alias: Alias,
    mut operands: Vec<Operand<'i>>,
    span: &Span<'i>,
) -> Result<Word> {
    let first = expect_register(operands.get(0), span)?;
    let zr = Operand::Register(Register {
        sf: first.sf,
        index: ZR,
        sp: false,
        span: first.span.clone(),
    });

    match alias {
        // cmp Rn, op  ->  subs zr, Rn, op
        Alias::Cmp => {
            operands.insert(0, zr);
            encode_arith(ArithOp::Subs, &operands, span)
        }
        // cmn Rn, op  ->  adds zr, Rn, op
        Alias::Cmn => {
            operands.insert(0, zr);
            encode_arith(ArithOp::Adds, &operands, span)
        }
        // neg Rd, op  ->  sub Rd, zr, op
        Alias::Neg => {
            operands.insert(1, zr);
            encode_arith(ArithOp::Sub, &operands, span)
        }
        Alias::Negs => {
            operands.insert(1, zr);
            encode_arith(ArithOp::Subs, &operands, span)
        }
        // tst Rn, op  ->  ands zr, Rn, op
        Alias::Tst => {
            operands.insert(0, zr);
            encode_logic(LogicOp::Ands, &operands, span)
        }
        // mvn Rd, op  ->  orn Rd, zr, op
        Alias::Mvn => {
            operands.insert(1, zr);
            encode_logic(LogicOp::Orn, &operands, span)
        }
        // mov Rd, Rs  ->  orr Rd, zr, Rs
        Alias::Mov => {
            operands.insert(1, zr);
            encode_logic(LogicOp::Orr, &operands, span)
        }
        // mul Rd, Rn, Rm  ->  madd Rd, Rn, Rm, zr
        Alias::Mul => {
            operands.push(zr);
            encode_mul(false, &operands, span)
        }
        Alias::Mneg => {
            operands.push(zr);
            encode_mul(true, &operands, span)
        }
    }
}
