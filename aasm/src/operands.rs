use crate::int_util::{process_int, process_uint};
use crate::{new_parser_error, Result, Rule};
use acpu::constants::ZR;
use acpu::instructions::{FpType, ShiftKind};
use matches::debug_assert_matches;
use pest::iterators::Pair;
use pest::Span;

// Structured operands. The grammar splits a line into raw operand tokens;
// this module turns each token into a typed value the encoders match on.

#[derive(Clone, Debug)]
pub struct Register<'i> {
    pub sf: bool,
    pub index: u32,
    pub sp: bool,
    pub span: Span<'i>,
}

#[derive(Clone, Debug)]
pub struct FpRegister<'i> {
    pub ftype: FpType,
    pub index: u32,
    pub span: Span<'i>,
}

#[derive(Clone, Debug)]
pub struct Immediate<'i> {
    pub value: i64,
    pub span: Span<'i>,
}

#[derive(Clone, Debug)]
pub struct Shift<'i> {
    pub kind: ShiftKind,
    pub amount: i64,
    pub span: Span<'i>,
}

#[derive(Debug)]
pub enum AddressForm<'i> {
    Offset(Option<Immediate<'i>>),
    PreIndex(Immediate<'i>),
    PostIndex(Immediate<'i>),
    Register(Register<'i>),
}

#[derive(Debug)]
pub struct Address<'i> {
    pub base: Register<'i>,
    pub form: AddressForm<'i>,
    pub span: Span<'i>,
}

#[derive(Debug)]
pub enum Literal<'i> {
    Value(u64, Span<'i>),
    Label(Span<'i>),
}

impl<'i> Literal<'i> {
    pub fn span(&self) -> &Span<'i> {
        match self {
            Literal::Value(_, span) | Literal::Label(span) => span,
        }
    }
}

#[derive(Debug)]
pub enum Operand<'i> {
    Register(Register<'i>),
    FpRegister(FpRegister<'i>),
    Immediate(Immediate<'i>),
    FloatImmediate(f64, Span<'i>),
    Shift(Shift<'i>),
    Address(Address<'i>),
    Literal(Literal<'i>),
}

impl<'i> Operand<'i> {
    pub fn span(&self) -> &Span<'i> {
        match self {
            Operand::Register(reg) => &reg.span,
            Operand::FpRegister(reg) => &reg.span,
            Operand::Immediate(imm) => &imm.span,
            Operand::FloatImmediate(_, span) => span,
            Operand::Shift(shift) => &shift.span,
            Operand::Address(address) => &address.span,
            Operand::Literal(literal) => literal.span(),
        }
    }
}

fn process_register<'i>(pair: Pair<'i, Rule>) -> Result<Register<'i>> {
    debug_assert_matches!(pair.as_rule(), Rule::register);
    let span = pair.as_span();
    let text = pair.as_str();
    let sf = text.starts_with('x');
    let tail = &text[1..];

    let (index, sp) = match tail {
        "zr" => (ZR, false),
        "sp" => (ZR, true),
        _ => {
            let number: u32 = tail
                .parse()
                .map_err(|_| new_parser_error(span.clone(), "Invalid register number".to_owned()))?;
            if number > 30 {
                return Err(new_parser_error(
                    span,
                    format!("Register number out of bounds: {}", number),
                ));
            }
            (number, false)
        }
    };

    Ok(Register { sf, index, sp, span })
}

fn process_fp_register<'i>(pair: Pair<'i, Rule>) -> Result<FpRegister<'i>> {
    debug_assert_matches!(pair.as_rule(), Rule::fp_register);
    let span = pair.as_span();
    let text = pair.as_str();
    let ftype = if text.starts_with('d') {
        FpType::Double
    } else {
        FpType::Single
    };
    let index: u32 = text[1..]
        .parse()
        .map_err(|_| new_parser_error(span.clone(), "Invalid register number".to_owned()))?;
    if index > 31 {
        return Err(new_parser_error(
            span,
            format!("Register number out of bounds: {}", index),
        ));
    }
    Ok(FpRegister { ftype, index, span })
}

fn process_immediate<'i>(pair: Pair<'i, Rule>) -> Result<Operand<'i>> {
    debug_assert_matches!(pair.as_rule(), Rule::immediate);
    let span = pair.as_span();
    let inner = pair.into_inner().next().unwrap();
    match inner.as_rule() {
        Rule::int => Ok(Operand::Immediate(Immediate {
            value: process_int(&inner)?,
            span,
        })),
        Rule::float => {
            let value: f64 = inner.as_str().parse().map_err(|err| {
                new_parser_error(span.clone(), format!("Parsing float failed: {}", err))
            })?;
            Ok(Operand::FloatImmediate(value, span))
        }
        _ => unreachable!(),
    }
}

fn immediate_only<'i>(pair: Pair<'i, Rule>) -> Result<Immediate<'i>> {
    let span = pair.as_span();
    match process_immediate(pair)? {
        Operand::Immediate(imm) => Ok(imm),
        _ => Err(new_parser_error(span, "Expected an integer value".to_owned())),
    }
}

fn process_shift<'i>(pair: Pair<'i, Rule>) -> Result<Shift<'i>> {
    debug_assert_matches!(pair.as_rule(), Rule::shift);
    let span = pair.as_span();
    let mut pairs = pair.into_inner();
    let kind = match pairs.next().unwrap().as_str() {
        "lsl" => ShiftKind::Lsl,
        "lsr" => ShiftKind::Lsr,
        "asr" => ShiftKind::Asr,
        "ror" => ShiftKind::Ror,
        _ => unreachable!(),
    };
    let amount = immediate_only(pairs.next().unwrap())?;
    Ok(Shift {
        kind,
        amount: amount.value,
        span,
    })
}

fn process_address<'i>(pair: Pair<'i, Rule>) -> Result<Address<'i>> {
    debug_assert_matches!(pair.as_rule(), Rule::address);
    let span = pair.as_span();
    let mut base = None;
    let mut offset = None;
    let mut reg_offset = None;
    let mut writeback = false;
    let mut post_index = None;

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::register => {
                if base.is_none() {
                    base = Some(process_register(inner)?);
                } else {
                    reg_offset = Some(process_register(inner)?);
                }
            }
            Rule::immediate => offset = Some(immediate_only(inner)?),
            Rule::writeback => writeback = true,
            Rule::post_index => {
                let imm = inner.into_inner().next().unwrap();
                post_index = Some(immediate_only(imm)?);
            }
            _ => unreachable!(),
        }
    }

    let base = base.unwrap();
    let form = match (offset, reg_offset, writeback, post_index) {
        (None, None, false, None) => AddressForm::Offset(None),
        (Some(imm), None, false, None) => AddressForm::Offset(Some(imm)),
        (Some(imm), None, true, None) => AddressForm::PreIndex(imm),
        (None, None, false, Some(imm)) => AddressForm::PostIndex(imm),
        (None, Some(reg), false, None) => AddressForm::Register(reg),
        _ => {
            return Err(new_parser_error(
                span,
                "Unsupported addressing form".to_owned(),
            ))
        }
    };

    Ok(Address { base, form, span })
}

fn process_literal<'i>(pair: Pair<'i, Rule>) -> Result<Literal<'i>> {
    debug_assert_matches!(pair.as_rule(), Rule::literal);
    let inner = pair.into_inner().next().unwrap();
    let span = inner.as_span();
    match inner.as_rule() {
        Rule::int => Ok(Literal::Value(process_uint(&inner)?, span)),
        Rule::identifier => Ok(Literal::Label(span)),
        _ => unreachable!(),
    }
}

/// Turns one raw operand token into its structured form.
pub fn process_operand<'i>(pair: Pair<'i, Rule>) -> Result<Operand<'i>> {
    debug_assert_matches!(pair.as_rule(), Rule::operand);
    let inner = pair.into_inner().next().unwrap();
    match inner.as_rule() {
        Rule::register => Ok(Operand::Register(process_register(inner)?)),
        Rule::fp_register => Ok(Operand::FpRegister(process_fp_register(inner)?)),
        Rule::immediate => process_immediate(inner),
        Rule::shift => Ok(Operand::Shift(process_shift(inner)?)),
        Rule::address => Ok(Operand::Address(process_address(inner)?)),
        Rule::literal => Ok(Operand::Literal(process_literal(inner)?)),
        _ => unreachable!(),
    }
}
