mod branch;
mod cond;
mod dp;
mod fp;
mod sdt;

use crate::int_util::process_uint;
use crate::operands::{self, Operand, Register};
use crate::symbols::SymbolTable;
use crate::{new_parser_error, Result, Rule};
use acpu::instructions::{ArithOp, Cond, FpArith, FpUnary, LogicOp, WideMoveOp};
use acpu::{constants, Endian, Word};
use byteorder::ByteOrder;
use matches::debug_assert_matches;
use pest::iterators::Pair;
use pest::Span;

/// A branch or load target, resolved during the second pass.
#[derive(Debug)]
pub enum Target<'i> {
    Address(u64),
    Label(Span<'i>),
}

impl<'i> Target<'i> {
    fn from_literal(literal: operands::Literal<'i>) -> Target<'i> {
        match literal {
            operands::Literal::Value(value, _) => Target::Address(value),
            operands::Literal::Label(span) => Target::Label(span),
        }
    }
}

/// One statement after the first pass: either a finished word, or a record
/// that still needs the symbol table.
#[derive(Debug)]
pub enum ParsedInstruction<'i> {
    Complete(Word),
    Branch {
        cond: Option<Cond>,
        target: Target<'i>,
        span: Span<'i>,
    },
    LoadLiteral {
        sf: bool,
        rt: u32,
        target: Target<'i>,
        span: Span<'i>,
    },
}

enum SelOp {
    Csel,
    Csinc,
    Csinv,
    Csneg,
    Cset,
    Csetm,
}

enum Alias {
    Cmp,
    Cmn,
    Neg,
    Negs,
    Tst,
    Mvn,
    Mov,
    Mul,
    Mneg,
}

enum FpClass {
    Arith(FpArith),
    Unary(FpUnary),
    Fcmp,
    Fcvtzs,
    Scvtf,
    Fmov,
}

enum Class {
    Arith(ArithOp),
    Logic(LogicOp),
    WideMove(WideMoveOp),
    Mul { negate: bool },
    Alias(Alias),
    Transfer { load: bool },
    Branch,
    BranchReg,
    BranchCond(Cond),
    Select(SelOp),
    Fp(FpClass),
}

fn cond_from_name(name: &str) -> Option<Cond> {
    Some(match name {
        "eq" => Cond::Eq,
        "ne" => Cond::Ne,
        "ge" => Cond::Ge,
        "lt" => Cond::Lt,
        "gt" => Cond::Gt,
        "le" => Cond::Le,
        "al" => Cond::Al,
        _ => return None,
    })
}

fn classify(mnemonic: &str) -> Option<Class> {
    Some(match mnemonic {
        "add" => Class::Arith(ArithOp::Add),
        "adds" => Class::Arith(ArithOp::Adds),
        "sub" => Class::Arith(ArithOp::Sub),
        "subs" => Class::Arith(ArithOp::Subs),
        "and" => Class::Logic(LogicOp::And),
        "bic" => Class::Logic(LogicOp::Bic),
        "orr" => Class::Logic(LogicOp::Orr),
        "orn" => Class::Logic(LogicOp::Orn),
        "eor" => Class::Logic(LogicOp::Eor),
        "eon" => Class::Logic(LogicOp::Eon),
        "ands" => Class::Logic(LogicOp::Ands),
        "bics" => Class::Logic(LogicOp::Bics),
        "movn" => Class::WideMove(WideMoveOp::Movn),
        "movz" => Class::WideMove(WideMoveOp::Movz),
        "movk" => Class::WideMove(WideMoveOp::Movk),
        "madd" => Class::Mul { negate: false },
        "msub" => Class::Mul { negate: true },
        "cmp" => Class::Alias(Alias::Cmp),
        "cmn" => Class::Alias(Alias::Cmn),
        "neg" => Class::Alias(Alias::Neg),
        "negs" => Class::Alias(Alias::Negs),
        "tst" => Class::Alias(Alias::Tst),
        "mvn" => Class::Alias(Alias::Mvn),
        "mov" => Class::Alias(Alias::Mov),
        "mul" => Class::Alias(Alias::Mul),
        "mneg" => Class::Alias(Alias::Mneg),
        "str" => Class::Transfer { load: false },
        "ldr" => Class::Transfer { load: true },
        "b" => Class::Branch,
        "br" => Class::BranchReg,
        "csel" => Class::Select(SelOp::Csel),
        "csinc" => Class::Select(SelOp::Csinc),
        "csinv" => Class::Select(SelOp::Csinv),
        "csneg" => Class::Select(SelOp::Csneg),
        "cset" => Class::Select(SelOp::Cset),
        "csetm" => Class::Select(SelOp::Csetm),
        "fmul" => Class::Fp(FpClass::Arith(FpArith::Fmul)),
        "fdiv" => Class::Fp(FpClass::Arith(FpArith::Fdiv)),
        "fadd" => Class::Fp(FpClass::Arith(FpArith::Fadd)),
        "fsub" => Class::Fp(FpClass::Arith(FpArith::Fsub)),
        "fmax" => Class::Fp(FpClass::Arith(FpArith::Fmax)),
        "fmin" => Class::Fp(FpClass::Arith(FpArith::Fmin)),
        "fnmul" => Class::Fp(FpClass::Arith(FpArith::Fnmul)),
        "fabs" => Class::Fp(FpClass::Unary(FpUnary::Fabs)),
        "fneg" => Class::Fp(FpClass::Unary(FpUnary::Fneg)),
        "fmov" => Class::Fp(FpClass::Fmov),
        "fcmp" => Class::Fp(FpClass::Fcmp),
        "fcvtzs" => Class::Fp(FpClass::Fcvtzs),
        "scvtf" => Class::Fp(FpClass::Scvtf),
        _ => {
            if mnemonic.len() > 2 && mnemonic.starts_with("b.") {
                return cond_from_name(&mnemonic[2..]).map(Class::BranchCond);
            }
            return None;
        }
    })
}

/// Encodes one statement; label-dependent instructions come back deferred.
pub fn process_statement<'i>(pair: Pair<'i, Rule>) -> Result<ParsedInstruction<'i>> {
    debug_assert_matches!(pair.as_rule(), Rule::statement);
    let inner = pair.into_inner().next().unwrap();
    match inner.as_rule() {
        Rule::directive => process_directive(inner),
        Rule::instruction => process_instruction(inner),
        _ => unreachable!(),
    }
}

fn process_directive<'i>(pair: Pair<'i, Rule>) -> Result<ParsedInstruction<'i>> {
    let inner = pair.into_inner().next().unwrap();
    debug_assert_matches!(inner.as_rule(), Rule::int_directive);
    let int = inner.into_inner().next().unwrap();
    let span = int.as_span();
    let value = process_uint(&int)?;
    if value > u64::from(u32::max_value()) {
        return Err(new_parser_error(
            span,
            "Directive value does not fit in 32 bits".to_owned(),
        ));
    }
    Ok(ParsedInstruction::Complete(value as Word))
}

fn process_instruction<'i>(pair: Pair<'i, Rule>) -> Result<ParsedInstruction<'i>> {
    let span = pair.as_span();
    let mut pairs = pair.into_inner();
    let mnemonic_pair = pairs.next().unwrap();
    // opcodes are case-insensitive
    let mnemonic = mnemonic_pair.as_str().to_lowercase();

    let operands = pairs
        .map(operands::process_operand)
        .collect::<Result<Vec<_>>>()?;

    let class = classify(&mnemonic).ok_or_else(|| {
        new_parser_error(
            mnemonic_pair.as_span(),
            format!("Unknown opcode: {}", mnemonic),
        )
    })?;

    match class {
        Class::Arith(op) => dp::encode_arith(op, &operands, &span).map(ParsedInstruction::Complete),
        Class::Logic(op) => dp::encode_logic(op, &operands, &span).map(ParsedInstruction::Complete),
        Class::WideMove(op) => {
            dp::encode_wide_move(op, &operands, &span).map(ParsedInstruction::Complete)
        }
        Class::Mul { negate } => {
            dp::encode_mul(negate, &operands, &span).map(ParsedInstruction::Complete)
        }
        Class::Alias(alias) => {
            dp::expand_alias(alias, operands, &span).map(ParsedInstruction::Complete)
        }
        Class::Transfer { load } => sdt::encode_transfer(load, operands, span),
        Class::Branch => branch::encode_branch(None, operands, span),
        Class::BranchCond(cond) => branch::encode_branch(Some(cond), operands, span),
        Class::BranchReg => {
            branch::encode_branch_register(&operands, &span).map(ParsedInstruction::Complete)
        }
        Class::Select(op) => cond::encode_select(op, &operands, &span).map(ParsedInstruction::Complete),
        Class::Fp(class) => fp::encode_fp(class, &operands, &span).map(ParsedInstruction::Complete),
    }
}

/// The second pass: resolves every deferred record against the finished
/// symbol table and writes the words out little-endian.
pub fn finalize(instr: &[ParsedInstruction], symbols: &SymbolTable) -> Result<Vec<u8>> {
    let word_bytes = constants::WORD_BYTES as usize;
    let mut image = vec![0u8; instr.len() * word_bytes];

    for (index, parsed) in instr.iter().enumerate() {
        let address = index as u64 * constants::WORD_BYTES;
        let word = match parsed {
            ParsedInstruction::Complete(word) => *word,
            ParsedInstruction::Branch { cond, target, span } => {
                branch::resolve(*cond, target, address, symbols, span)?
            }
            ParsedInstruction::LoadLiteral { sf, rt, target, span } => {
                sdt::resolve_literal(*sf, *rt, target, address, symbols, span)?
            }
        };
        let start = index * word_bytes;
        Endian::write_u32(&mut image[start..start + word_bytes], word);
    }

    Ok(image)
}

// ---- shared helpers for the family encoders ----

fn resolve_target<'i>(target: &Target<'i>, symbols: &SymbolTable) -> Result<u64> {
    match target {
        Target::Address(address) => Ok(*address),
        Target::Label(label) => symbols
            .find(label.as_str())
            .map(u64::from)
            .ok_or_else(|| {
                new_parser_error(label.clone(), format!("Undefined label: {}", label.as_str()))
            }),
    }
}

/// `(target - address) / 4` as a signed word offset fitting `bits` bits.
fn word_offset(target: u64, address: u64, bits: u32, span: &Span) -> Result<i32> {
    let byte_offset = target.wrapping_sub(address) as i64;
    if byte_offset % constants::WORD_BYTES as i64 != 0 {
        return Err(new_parser_error(
            span.clone(),
            "Target is not word aligned".to_owned(),
        ));
    }
    let words = byte_offset / constants::WORD_BYTES as i64;
    let limit = 1i64 << (bits - 1);
    if words < -limit || words >= limit {
        return Err(new_parser_error(
            span.clone(),
            "Target is out of range".to_owned(),
        ));
    }
    Ok(words as i32)
}

fn expect_register<'a, 'i>(
    operand: Option<&'a Operand<'i>>,
    span: &Span<'i>,
) -> Result<&'a Register<'i>> {
    match operand {
        Some(Operand::Register(reg)) => Ok(reg),
        Some(other) => Err(new_parser_error(
            other.span().clone(),
            "Expected a register operand".to_owned(),
        )),
        None => Err(new_parser_error(
            span.clone(),
            "Missing register operand".to_owned(),
        )),
    }
}

fn check_len(operands: &[Operand], min: usize, max: usize, span: &Span) -> Result<()> {
    if operands.len() < min {
        Err(new_parser_error(span.clone(), "Missing operands".to_owned()))
    } else if operands.len() > max {
        Err(new_parser_error(
            operands[max].span().clone(),
            "Extra operands after instruction".to_owned(),
        ))
    } else {
        Ok(())
    }
}

fn same_width(registers: &[&Register], span: &Span) -> Result<bool> {
    let sf = registers[0].sf;
    if registers.iter().any(|reg| reg.sf != sf) {
        Err(new_parser_error(
            span.clone(),
            "Register sizes must match".to_owned(),
        ))
    } else {
        Ok(sf)
    }
}

fn signed_range<'i>(value: i64, bits: u32, span: &Span<'i>) -> Result<i32> {
    let limit = 1i64 << (bits - 1);
    if value < -limit || value >= limit {
        Err(new_parser_error(
            span.clone(),
            "Immediate value out of range".to_owned(),
        ))
    } else {
        Ok(value as i32)
    }
}

fn unsigned_range<'i>(value: i64, bits: u32, span: &Span<'i>) -> Result<u32> {
    if value < 0 || (value as u64) >> bits != 0 {
        Err(new_parser_error(
            span.clone(),
            "Immediate value out of range".to_owned(),
        ))
    } else {
        Ok(value as u32)
    }
}
