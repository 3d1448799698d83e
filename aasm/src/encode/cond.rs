use super::{check_len, cond_from_name, expect_register, same_width, SelOp};
use crate::operands::Operand;
use crate::{new_parser_error, Result};
use acpu::instructions::{csel, cset, csetm, csinc, csinv, csneg, Cond};
use acpu::Word;
use pest::Span;

// Conditional select encoder. The condition is written as a bare name in
// the last operand position.

fn expect_cond(operand: Option<&Operand>, span: &Span) -> Result<Cond> {
    match operand {
        Some(Operand::Literal(crate::operands::Literal::Label(label))) => {
            cond_from_name(label.as_str()).ok_or_else(|| {
                new_parser_error(
                    label.clone(),
                    format!("Unknown condition: {}", label.as_str()),
                )
            })
        }
        Some(other) => Err(new_parser_error(
            other.span().clone(),
            "Expected a condition".to_owned(),
        )),
        None => Err(new_parser_error(
            span.clone(),
            "Missing condition operand".to_owned(),
        )),
    }
}

pub(super) fn encode_select(op: SelOp, operands: &[Operand], span: &Span) -> Result<Word> {
    match op {
        SelOp::Cset | SelOp::Csetm => {
            check_len(operands, 2, 2, span)?;
            let rd = expect_register(operands.get(0), span)?;
            let cond = expect_cond(operands.get(1), span)?;
            if cond == Cond::Al {
                return Err(new_parser_error(
                    operands[1].span().clone(),
                    "al is not a valid cset condition".to_owned(),
                ));
            }
            Ok(match op {
                SelOp::Cset => cset(rd.sf, rd.index, cond),
                _ => csetm(rd.sf, rd.index, cond),
            })
        }
        _ => {
            check_len(operands, 4, 4, span)?;
            let rd = expect_register(operands.get(0), span)?;
            let rn = expect_register(operands.get(1), span)?;
            let rm = expect_register(operands.get(2), span)?;
            let sf = same_width(&[rd, rn, rm], span)?;
            let cond = expect_cond(operands.get(3), span)?;

            Ok(match op {
                SelOp::Csel => csel(sf, rd.index, rn.index, rm.index, cond),
                SelOp::Csinc => csinc(sf, rd.index, rn.index, rm.index, cond),
                SelOp::Csinv => csinv(sf, rd.index, rn.index, rm.index, cond),
                SelOp::Csneg => csneg(sf, rd.index, rn.index, rm.index, cond),
                SelOp::Cset | SelOp::Csetm => unreachable!(),
            })
        }
    }
}
