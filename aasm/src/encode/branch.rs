use super::{check_len, expect_register, resolve_target, word_offset};
use super::{ParsedInstruction, Target};
use crate::operands::Operand;
use crate::symbols::SymbolTable;
use crate::{new_parser_error, Result};
use acpu::instructions::{branch, branch_cond, branch_register, Cond};
use acpu::Word;
use pest::Span;

pub(super) fn encode_branch<'i>(
    cond: Option<Cond>,
    operands: Vec<Operand<'i>>,
    span: Span<'i>,
) -> Result<ParsedInstruction<'i>> {
    check_len(&operands, 1, 1, &span)?;
    match operands.into_iter().next().unwrap() {
        Operand::Literal(literal) => Ok(ParsedInstruction::Branch {
            cond,
            target: Target::from_literal(literal),
            span,
        }),
        other => Err(new_parser_error(
            other.span().clone(),
            "Expected a branch target".to_owned(),
        )),
    }
}

pub(super) fn encode_branch_register(operands: &[Operand], span: &Span) -> Result<Word> {
    check_len(operands, 1, 1, span)?;
    let xn = expect_register(operands.get(0), span)?;
    if !xn.sf {
        return Err(new_parser_error(
            xn.span.clone(),
            "Branch target must be an x register".to_owned(),
        ));
    }
    Ok(branch_register(xn.index))
}

pub(super) fn resolve<'i>(
    cond: Option<Cond>,
    target: &Target<'i>,
    address: u64,
    symbols: &SymbolTable,
    span: &Span<'i>,
) -> Result<Word> {
    let target_address = resolve_target(target, symbols)?;
    match cond {
        Some(cond) => {
            let simm19 = word_offset(target_address, address, 19, span)?;
            Ok(branch_cond(cond, simm19))
        }
        None => {
            let simm26 = word_offset(target_address, address, 26, span)?;
            Ok(branch(simm26))
        }
    }
}
