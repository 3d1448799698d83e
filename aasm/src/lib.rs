//! Assembler for the [acpu](../acpu/index.html) A64 instruction subset.
//!
//! The entry point is [`assemble`](fn.assemble.html), which takes a source
//! string and returns the flat little-endian binary image the emulator
//! executes. There is no object format: every 4-byte group of the output is
//! either an instruction word or a literal produced by `.int`.
//!
//! Parsing is implemented with [pest], and the crate's [`Error`](type.Error.html)
//! type is an alias of `pest::error::Error`, so every diagnostic carries the
//! offending span and pretty-prints with the source line.
//!
//! # Source language
//!
//! One statement per line. Opcodes are case-insensitive; whitespace and
//! commas separate tokens. Labels end in `:` and several may precede a
//! statement (on the same line or on lines of their own). Comments use
//! `//` or `/* ... */`.
//!
//! Registers are written `x0`–`x30` (64-bit) or `w0`–`w30` (32-bit), with
//! `xzr`/`wzr` for the zero register and `xsp`/`wsp` for its stack-pointer
//! spelling. FP registers are `d0`–`d31` (double) or `s0`–`s31` (single).
//! Immediates take a `#` prefix and are decimal or `0x` hexadecimal.
//!
//! # Mnemonics
//!
//! Mnemonic | Syntax | Notes
//! ---------|--------|------
//! `add` `adds` `sub` `subs` | `add Rd, Rn, #imm [, lsl #0\|#12]` or `add Rd, Rn, Rm [, shift #amount]` | register form shifts: `lsl`/`lsr`/`asr`
//! `and` `bic` `orr` `orn` `eor` `eon` `ands` `bics` | `and Rd, Rn, Rm [, shift #amount]` | shifts include `ror`; `sp` is not accepted
//! `movn` `movz` `movk` | `movz Rd, #imm16 [, lsl #hw*16]` | lanes 0–3 (64-bit) or 0–1 (32-bit)
//! `madd` `msub` | `madd Rd, Rn, Rm, Ra` |
//! `str` `ldr` | `[Xn]`, `[Xn, #imm]`, `[Xn, #imm]!`, `[Xn], #imm`, `[Xn, Xm]` | `ldr Rt, literal` also accepts a label or address
//! `b`, `b.<cond>` | `b label` | conditions `eq ne ge lt gt le al`
//! `br` | `br Xn` |
//! `csel` `csinc` `csinv` `csneg` | `csel Rd, Rn, Rm, cond` |
//! `cset` `csetm` | `cset Rd, cond` | `al` is rejected
//! `fmul` `fdiv` `fadd` `fsub` `fmax` `fmin` `fnmul` | `fadd Fd, Fn, Fm` |
//! `fabs` `fneg` `fmov` | `fabs Fd, Fn` | `fmov` also moves to/from `x`/`w` registers
//! `fcmp` | `fcmp Fn, Fm` or `fcmp Fn, #0.0` |
//! `fcvtzs` `scvtf` | `fcvtzs Rd, Fn` / `scvtf Fd, Rn` |
//!
//! ## Aliases
//!
//! Alias | Expansion
//! ------|----------
//! `cmp Rn, op` | `subs zr, Rn, op`
//! `cmn Rn, op` | `adds zr, Rn, op`
//! `neg Rd, op` | `sub Rd, zr, op`
//! `negs Rd, op` | `subs Rd, zr, op`
//! `tst Rn, op` | `ands zr, Rn, op`
//! `mvn Rd, op` | `orn Rd, zr, op`
//! `mov Rd, Rs` | `orr Rd, zr, Rs`
//! `mul Rd, Rn, Rm` | `madd Rd, Rn, Rm, zr`
//! `mneg Rd, Rn, Rm` | `msub Rd, Rn, Rm, zr`
//!
//! The spliced `zr` takes the width of the alias's first register operand.
//!
//! ## Directives
//!
//! `.int value` emits the 32-bit value verbatim.
//!
//! [pest]: https://docs.rs/pest/

mod encode;
mod int_util;
mod operands;
mod parser;
mod symbols;


use encode::ParsedInstruction;
use matches::debug_assert_matches;
use parser::AsmParser;
use pest::iterators::Pair;
use pest::{Parser, Span};
use symbols::SymbolTable;

pub use parser::Rule;

pub type Error = pest::error::Error<Rule>;

pub type Result<T> = std::result::Result<T, Error>;

/// Assembles a source program into its little-endian binary image.
pub fn assemble(input: &str) -> Result<Vec<u8>> {
    let program = parse(input)?;
    let (instr, symbols) = process_program(program)?;
    encode::finalize(&instr, &symbols)
}

fn new_parser_error(span: Span, message: String) -> Error {
    Error::new_from_span(pest::error::ErrorVariant::CustomError { message }, span)
}

fn parse(input: &str) -> Result<Pair<Rule>> {
    Ok(AsmParser::parse(Rule::program, input)?.next().unwrap())
}

// Pass 1: walk the lines in order, binding every label to the byte address
// of the next statement and encoding what the symbol table is not needed
// for. Statements are 4 bytes each, so the address is the statement index
// times 4.
fn process_program<'i>(
    pair: Pair<'i, Rule>,
) -> Result<(Vec<ParsedInstruction<'i>>, SymbolTable<'i>)> {
    debug_assert_matches!(pair.as_rule(), Rule::program);

    let mut instr = Vec::new();
    let mut symbols = SymbolTable::new();

    for line in pair.into_inner() {
        match line.as_rule() {
            Rule::line => {
                for item in line.into_inner() {
                    match item.as_rule() {
                        Rule::label => {
                            let name = item.into_inner().next().unwrap();
                            symbols.append(name.as_str(), instr.len() as u32 * 4);
                        }
                        Rule::statement => {
                            instr.push(encode::process_statement(item)?);
                        }
                        _ => unreachable!(),
                    }
                }
            }
            Rule::EOI => {}
            _ => unreachable!(),
        }
    }

    Ok((instr, symbols))
}
