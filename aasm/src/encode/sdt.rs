use super::{check_len, expect_register, resolve_target, signed_range, word_offset};
use super::{ParsedInstruction, Target};
use crate::operands::{AddressForm, Operand};
use crate::symbols::SymbolTable;
use crate::{new_parser_error, Result};
use acpu::instructions::{ldr_literal, sdt_index, sdt_reg_offset, sdt_unsigned};
use acpu::Word;
use pest::Span;

// Single data transfer encoder: the bracketed addressing modes complete in
// the first pass; `ldr` of a literal waits for the symbol table.

pub(super) fn encode_transfer<'i>(
    load: bool,
    operands: Vec<Operand<'i>>,
    span: Span<'i>,
) -> Result<ParsedInstruction<'i>> {
    check_len(&operands, 2, 2, &span)?;
    let rt = expect_register(operands.get(0), &span)?;
    let (sf, rt_index) = (rt.sf, rt.index);

    match operands.into_iter().nth(1).unwrap() {
        Operand::Address(address) => {
            if !address.base.sf {
                return Err(new_parser_error(
                    address.base.span.clone(),
                    "Transfer address base must be an x register".to_owned(),
                ));
            }
            let base = address.base.index;

            let word = match address.form {
                AddressForm::Offset(None) => sdt_unsigned(load, sf, rt_index, base, 0),
                AddressForm::Offset(Some(imm)) => {
                    let scale = if sf { 8 } else { 4 };
                    if imm.value < 0 || imm.value % scale != 0 {
                        return Err(new_parser_error(
                            imm.span.clone(),
                            format!("Transfer offset must be a non-negative multiple of {}", scale),
                        ));
                    }
                    let scaled = imm.value / scale;
                    if scaled >> 12 != 0 {
                        return Err(new_parser_error(
                            imm.span.clone(),
                            "Transfer offset out of range".to_owned(),
                        ));
                    }
                    sdt_unsigned(load, sf, rt_index, base, scaled as u32)
                }
                AddressForm::PreIndex(imm) => {
                    let simm9 = signed_range(imm.value, 9, &imm.span)?;
                    sdt_index(load, sf, rt_index, base, simm9, true)
                }
                AddressForm::PostIndex(imm) => {
                    let simm9 = signed_range(imm.value, 9, &imm.span)?;
                    sdt_index(load, sf, rt_index, base, simm9, false)
                }
                AddressForm::Register(xm) => {
                    if !xm.sf {
                        return Err(new_parser_error(
                            xm.span.clone(),
                            "Transfer offset must be an x register".to_owned(),
                        ));
                    }
                    sdt_reg_offset(load, sf, rt_index, base, xm.index)
                }
            };
            Ok(ParsedInstruction::Complete(word))
        }
        Operand::Literal(literal) => {
            if !load {
                return Err(new_parser_error(
                    literal.span().clone(),
                    "A store cannot take a literal address".to_owned(),
                ));
            }
            Ok(ParsedInstruction::LoadLiteral {
                sf,
                rt: rt_index,
                target: Target::from_literal(literal),
                span,
            })
        }
        other => Err(new_parser_error(
            other.span().clone(),
            "Expected an address or literal operand".to_owned(),
        )),
    }
}

pub(super) fn resolve_literal<'i>(
    sf: bool,
    rt: u32,
    target: &Target<'i>,
    address: u64,
    symbols: &SymbolTable,
    span: &Span<'i>,
) -> Result<Word> {
    let target_address = resolve_target(target, symbols)?;
    let simm19 = word_offset(target_address, address, 19, span)?;
    Ok(ldr_literal(sf, rt, simm19))
}
