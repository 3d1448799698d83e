use super::{check_len, FpClass};
use crate::operands::{FpRegister, Operand, Register};
use crate::{new_parser_error, Result};
use acpu::instructions::{
    fcmp, fcvtzs, fmov_from_fp, fmov_to_fp, fp_arith, fp_unary, scvtf, FpType, FpUnary,
};
use acpu::Word;
use pest::Span;

// Scalar FP encoder. The `d`/`s` register prefix selects the precision and
// must agree across a whole instruction; general-register moves pair `d`
// with `x` and `s` with `w`.

fn expect_fp<'a, 'i>(
    operand: Option<&'a Operand<'i>>,
    span: &Span<'i>,
) -> Result<&'a FpRegister<'i>> {
    match operand {
        Some(Operand::FpRegister(reg)) => Ok(reg),
        Some(other) => Err(new_parser_error(
            other.span().clone(),
            "Expected an FP register operand".to_owned(),
        )),
        None => Err(new_parser_error(
            span.clone(),
            "Missing FP register operand".to_owned(),
        )),
    }
}

fn same_ftype(registers: &[&FpRegister], span: &Span) -> Result<FpType> {
    let ftype = registers[0].ftype;
    if registers.iter().any(|reg| reg.ftype != ftype) {
        Err(new_parser_error(
            span.clone(),
            "FP register sizes must match".to_owned(),
        ))
    } else {
        Ok(ftype)
    }
}

fn check_bridge_width(fp: &FpRegister, gpr: &Register) -> Result<()> {
    if (fp.ftype == FpType::Double) != gpr.sf {
        Err(new_parser_error(
            gpr.span.clone(),
            "Register sizes must match".to_owned(),
        ))
    } else {
        Ok(())
    }
}

pub(super) fn encode_fp(class: FpClass, operands: &[Operand], span: &Span) -> Result<Word> {
    match class {
        FpClass::Arith(op) => {
            check_len(operands, 3, 3, span)?;
            let rd = expect_fp(operands.get(0), span)?;
            let rn = expect_fp(operands.get(1), span)?;
            let rm = expect_fp(operands.get(2), span)?;
            let ftype = same_ftype(&[rd, rn, rm], span)?;
            Ok(fp_arith(op, ftype, rd.index, rn.index, rm.index))
        }
        FpClass::Unary(op) => {
            check_len(operands, 2, 2, span)?;
            let rd = expect_fp(operands.get(0), span)?;
            let rn = expect_fp(operands.get(1), span)?;
            let ftype = same_ftype(&[rd, rn], span)?;
            Ok(fp_unary(op, ftype, rd.index, rn.index))
        }
        FpClass::Fcmp => {
            check_len(operands, 2, 2, span)?;
            let rn = expect_fp(operands.get(0), span)?;
            match &operands[1] {
                Operand::FpRegister(rm) => {
                    let ftype = same_ftype(&[rn, rm], span)?;
                    Ok(fcmp(ftype, rn.index, Some(rm.index)))
                }
                Operand::FloatImmediate(value, imm_span) => {
                    if *value != 0.0 {
                        return Err(new_parser_error(
                            imm_span.clone(),
                            "Only #0.0 can be compared against".to_owned(),
                        ));
                    }
                    Ok(fcmp(rn.ftype, rn.index, None))
                }
                other => Err(new_parser_error(
                    other.span().clone(),
                    "Expected an FP register or #0.0".to_owned(),
                )),
            }
        }
        FpClass::Fcvtzs => {
            check_len(operands, 2, 2, span)?;
            let rd = match operands.get(0) {
                Some(Operand::Register(reg)) => reg,
                _ => {
                    return Err(new_parser_error(
                        span.clone(),
                        "Expected a general register destination".to_owned(),
                    ))
                }
            };
            let rn = expect_fp(operands.get(1), span)?;
            Ok(fcvtzs(rd.sf, rn.ftype, rd.index, rn.index))
        }
        FpClass::Scvtf => {
            check_len(operands, 2, 2, span)?;
            let rd = expect_fp(operands.get(0), span)?;
            let rn = match operands.get(1) {
                Some(Operand::Register(reg)) => reg,
                _ => {
                    return Err(new_parser_error(
                        span.clone(),
                        "Expected a general register source".to_owned(),
                    ))
                }
            };
            Ok(scvtf(rn.sf, rd.ftype, rd.index, rn.index))
        }
        FpClass::Fmov => {
            check_len(operands, 2, 2, span)?;
            match (&operands[0], &operands[1]) {
                (Operand::FpRegister(rd), Operand::FpRegister(rn)) => {
                    let ftype = same_ftype(&[rd, rn], span)?;
                    Ok(fp_unary(FpUnary::Fmov, ftype, rd.index, rn.index))
                }
                (Operand::FpRegister(rd), Operand::Register(rn)) => {
                    check_bridge_width(rd, rn)?;
                    Ok(fmov_to_fp(rd.ftype, rd.index, rn.index))
                }
                (Operand::Register(rd), Operand::FpRegister(rn)) => {
                    check_bridge_width(rn, rd)?;
                    Ok(fmov_from_fp(rn.ftype, rd.index, rn.index))
                }
                _ => Err(new_parser_error(
                    span.clone(),
                    "Unsupported fmov operand combination".to_owned(),
                )),
            }
        }
    }
}
