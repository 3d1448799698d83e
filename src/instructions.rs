use crate::bits::set_value;
use crate::{constants, Word};

// Word layouts
//
//           +----+-----+--------+----+-------+------+----+----+
//           |31  |     |        |    |       |      |    |   0|
//           +----+-----+--------+----+-------+------+----+----+
// DP imm    | sf | opc | 100010 | sh | imm12        | Rn | Rd |
// Wide move | sf | opc | 100101 | hw | imm16             | Rd |
// DP reg    | sf | opc | M 101  | opr| Rm    | oprnd| Rn | Rd |
// SDT       | 1  | sf  | 111000 | UL | offset| ...  | Xn | Rt |
// Branch    | op0-specific mask patterns (see constants)      |
//           +----+-----+--------+----+-------+------+----+----+
//
// Every constructor here emits exactly the pattern the matching family
// executor recognises; the assembler builds all of its output through them.

/// Arithmetic opcodes, in encoding order.
#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive)]
pub enum ArithOp {
    Add = 0,
    Adds = 1,
    Sub = 2,
    Subs = 3,
}

impl ArithOp {
    /// Whether the operation updates PSTATE.
    pub fn sets_flags(self) -> bool {
        self == ArithOp::Adds || self == ArithOp::Subs
    }

    /// Whether the operation subtracts.
    pub fn is_sub(self) -> bool {
        self == ArithOp::Sub || self == ArithOp::Subs
    }
}

/// Bit-logic opcodes. The encoding packs the pair index into `opc` and the
/// operand negation into the `N` bit, so the discriminant order matters.
#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive)]
pub enum LogicOp {
    And = 0,
    Bic = 1,
    Orr = 2,
    Orn = 3,
    Eor = 4,
    Eon = 5,
    Ands = 6,
    Bics = 7,
}

impl LogicOp {
    pub fn sets_flags(self) -> bool {
        self == LogicOp::Ands || self == LogicOp::Bics
    }

    /// Whether the second operand is negated before the operation.
    pub fn negates(self) -> bool {
        self as u32 % 2 == 1
    }
}

/// Wide-move opcodes. The gap at 1 is real: that opc is not a wide move.
#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive)]
pub enum WideMoveOp {
    Movn = 0,
    Movz = 2,
    Movk = 3,
}

/// Shift kinds for data-processing operands.
#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive)]
pub enum ShiftKind {
    Lsl = 0,
    Lsr = 1,
    Asr = 2,
    Ror = 3,
}

/// Branch / select condition codes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive)]
pub enum Cond {
    Eq = 0x0,
    Ne = 0x1,
    Ge = 0xA,
    Lt = 0xB,
    Gt = 0xC,
    Le = 0xD,
    Al = 0xE,
}

/// Scalar FP two-source operations, by their 4-bit opcode point.
#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive)]
pub enum FpArith {
    Fmul = 0,
    Fdiv = 1,
    Fadd = 2,
    Fsub = 3,
    Fmax = 4,
    Fmin = 5,
    Fnmul = 8,
}

/// Scalar FP one-source operations.
#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive)]
pub enum FpUnary {
    Fmov = 0,
    Fabs = 1,
    Fneg = 2,
}

/// FP register width: `ftype` 0 is single precision, 1 is double.
#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive)]
pub enum FpType {
    Single = 0,
    Double = 1,
}

#[inline]
fn bit(word: u64, value: bool, offset: u32) -> u64 {
    set_value(word, value as u64, offset, 1)
}

#[inline]
fn finish(word: u64) -> Word {
    word as Word
}

/// Constructs an arithmetic-immediate instruction (`add`/`adds`/`sub`/`subs`).
pub fn arith_imm(op: ArithOp, sf: bool, rd: u32, rn: u32, imm12: u32, shifted: bool) -> Word {
    let mut word = set_value(0, op as u64, constants::OPC_OFFSET, constants::OPC_SIZE);
    word = set_value(word, 0b10_0010, constants::OPI_OFFSET, 6);
    word = bit(word, shifted, constants::SH_OFFSET);
    word = set_value(word, u64::from(imm12), constants::IMM12_OFFSET, constants::IMM12_SIZE);
    word = set_value(word, u64::from(rn), constants::RN_OFFSET, constants::REG_SIZE);
    word = set_value(word, u64::from(rd), constants::RD_OFFSET, constants::REG_SIZE);
    finish(bit(word, sf, constants::SF_OFFSET))
}

/// Constructs a wide-move instruction (`movn`/`movz`/`movk`).
pub fn wide_move(op: WideMoveOp, sf: bool, rd: u32, imm16: u32, hw: u32) -> Word {
    let mut word = set_value(0, op as u64, constants::OPC_OFFSET, constants::OPC_SIZE);
    word = set_value(word, 0b10_0101, constants::OPI_OFFSET, 6);
    word = set_value(word, u64::from(hw), constants::HW_OFFSET, constants::HW_SIZE);
    word = set_value(word, u64::from(imm16), constants::IMM16_OFFSET, constants::IMM16_SIZE);
    word = set_value(word, u64::from(rd), constants::RD_OFFSET, constants::REG_SIZE);
    finish(bit(word, sf, constants::SF_OFFSET))
}

fn shifted_reg(
    opc: u64,
    family: u64,
    negate: bool,
    sf: bool,
    rd: u32,
    rn: u32,
    rm: u32,
    shift: ShiftKind,
    amount: u32,
) -> Word {
    let mut word = set_value(0, opc, constants::OPC_OFFSET, constants::OPC_SIZE);
    word = set_value(word, family, 24, 5);
    word = set_value(word, shift as u64, constants::SHIFT_KIND_OFFSET, 2);
    word = bit(word, negate, constants::NEG_OFFSET);
    word = set_value(word, u64::from(rm), constants::RM_OFFSET, constants::REG_SIZE);
    word = set_value(word, u64::from(amount), constants::SHIFT_AMT_OFFSET, constants::SHIFT_AMT_SIZE);
    word = set_value(word, u64::from(rn), constants::RN_OFFSET, constants::REG_SIZE);
    word = set_value(word, u64::from(rd), constants::RD_OFFSET, constants::REG_SIZE);
    finish(bit(word, sf, constants::SF_OFFSET))
}

/// Constructs a shifted-register arithmetic instruction.
pub fn arith_reg(
    op: ArithOp,
    sf: bool,
    rd: u32,
    rn: u32,
    rm: u32,
    shift: ShiftKind,
    amount: u32,
) -> Word {
    shifted_reg(op as u64, 0b01011, false, sf, rd, rn, rm, shift, amount)
}

/// Constructs a shifted-register bit-logic instruction.
pub fn logic_reg(
    op: LogicOp,
    sf: bool,
    rd: u32,
    rn: u32,
    rm: u32,
    shift: ShiftKind,
    amount: u32,
) -> Word {
    let opc = op as u64 / 2;
    shifted_reg(opc, 0b01010, op.negates(), sf, rd, rn, rm, shift, amount)
}

/// Constructs a multiply instruction (`madd`, or `msub` when `negate`).
pub fn mul_reg(sf: bool, rd: u32, rn: u32, rm: u32, ra: u32, negate: bool) -> Word {
    let mut word = set_value(0, 0b11011, 24, 5);
    word = set_value(word, constants::OPR_MULTIPLY, constants::OPR_OFFSET, constants::OPR_SIZE);
    word = set_value(word, u64::from(rm), constants::RM_OFFSET, constants::REG_SIZE);
    word = bit(word, negate, constants::MUL_X_OFFSET);
    word = set_value(word, u64::from(ra), constants::RA_OFFSET, constants::REG_SIZE);
    word = set_value(word, u64::from(rn), constants::RN_OFFSET, constants::REG_SIZE);
    word = set_value(word, u64::from(rd), constants::RD_OFFSET, constants::REG_SIZE);
    finish(bit(word, sf, constants::SF_OFFSET))
}

fn sdt_base(load: bool, sf: bool, rt: u32, xn: u32) -> u64 {
    let mut word = set_value(0, 1, 31, 1);
    word = bit(word, sf, constants::TRANSFER_SF_OFFSET);
    word = set_value(word, 0b111, 27, 3);
    word = bit(word, load, constants::L_OFFSET);
    word = set_value(word, u64::from(xn), constants::RN_OFFSET, constants::REG_SIZE);
    set_value(word, u64::from(rt), constants::RD_OFFSET, constants::REG_SIZE)
}

/// Constructs an unsigned-offset transfer. `imm12` is already scaled down
/// by the transfer size.
pub fn sdt_unsigned(load: bool, sf: bool, rt: u32, xn: u32, imm12: u32) -> Word {
    let mut word = sdt_base(load, sf, rt, xn);
    word = set_value(word, 1, constants::U_OFFSET, 1);
    word = set_value(word, u64::from(imm12), constants::IMM12_OFFSET, constants::IMM12_SIZE);
    finish(word)
}

/// Constructs a pre- or post-indexed transfer.
pub fn sdt_index(load: bool, sf: bool, rt: u32, xn: u32, simm9: i32, pre: bool) -> Word {
    let mut word = sdt_base(load, sf, rt, xn);
    word = set_value(word, simm9 as u64, constants::SIMM9_OFFSET, constants::SIMM9_SIZE);
    word = bit(word, pre, constants::INDEX_I_OFFSET);
    word = set_value(word, 1, 10, 1);
    finish(word)
}

/// Constructs a register-offset transfer.
pub fn sdt_reg_offset(load: bool, sf: bool, rt: u32, xn: u32, xm: u32) -> Word {
    let mut word = sdt_base(load, sf, rt, xn);
    word = set_value(word, 1, 21, 1);
    word = set_value(word, u64::from(xm), constants::RM_OFFSET, constants::REG_SIZE);
    word = set_value(word, 0b1101, 11, 4);
    finish(word)
}

/// Constructs a PC-relative load literal. `simm19` is a word offset.
pub fn ldr_literal(sf: bool, rt: u32, simm19: i32) -> Word {
    let mut word = bit(0, sf, constants::TRANSFER_SF_OFFSET);
    word = set_value(word, 0b011, 27, 3);
    word = set_value(word, simm19 as u64, constants::SIMM19_OFFSET, constants::SIMM19_SIZE);
    word = set_value(word, u64::from(rt), constants::RD_OFFSET, constants::REG_SIZE);
    finish(word)
}

/// Constructs an unconditional branch. `simm26` is a word offset.
pub fn branch(simm26: i32) -> Word {
    let word = u64::from(constants::UNCOND_BITS);
    finish(set_value(word, simm26 as u64, 0, constants::SIMM26_SIZE))
}

/// Constructs a register branch.
pub fn branch_register(xn: u32) -> Word {
    let word = u64::from(constants::BREG_BITS);
    finish(set_value(word, u64::from(xn), constants::RN_OFFSET, constants::REG_SIZE))
}

/// Constructs a conditional branch. `simm19` is a word offset.
pub fn branch_cond(cond: Cond, simm19: i32) -> Word {
    let mut word = u64::from(constants::BCOND_BITS);
    word = set_value(word, simm19 as u64, constants::SIMM19_OFFSET, constants::SIMM19_SIZE);
    finish(set_value(word, cond as u64, constants::COND_OFFSET, constants::COND_SIZE))
}

fn select(base: Word, sf: bool, rd: u32, rn: u32, rm: u32, cond: Cond) -> Word {
    let mut word = u64::from(base);
    word = set_value(word, u64::from(rm), constants::RM_OFFSET, constants::REG_SIZE);
    word = set_value(word, cond as u64, constants::SEL_COND_OFFSET, constants::COND_SIZE);
    word = set_value(word, u64::from(rn), constants::RN_OFFSET, constants::REG_SIZE);
    word = set_value(word, u64::from(rd), constants::RD_OFFSET, constants::REG_SIZE);
    finish(bit(word, sf, constants::SF_OFFSET))
}

/// Constructs a `csel` instruction.
pub fn csel(sf: bool, rd: u32, rn: u32, rm: u32, cond: Cond) -> Word {
    select(constants::CSEL_BITS, sf, rd, rn, rm, cond)
}

/// Constructs a `csinc` instruction.
pub fn csinc(sf: bool, rd: u32, rn: u32, rm: u32, cond: Cond) -> Word {
    select(constants::CSINC_BITS, sf, rd, rn, rm, cond)
}

/// Constructs a `csinv` instruction.
pub fn csinv(sf: bool, rd: u32, rn: u32, rm: u32, cond: Cond) -> Word {
    select(constants::CSINV_BITS, sf, rd, rn, rm, cond)
}

/// Constructs a `csneg` instruction.
pub fn csneg(sf: bool, rd: u32, rn: u32, rm: u32, cond: Cond) -> Word {
    select(constants::CSNEG_BITS, sf, rd, rn, rm, cond)
}

/// Constructs a `cset` instruction.
pub fn cset(sf: bool, rd: u32, cond: Cond) -> Word {
    let mut word = u64::from(constants::CSET_BITS);
    word = set_value(word, cond as u64, constants::SEL_COND_OFFSET, constants::COND_SIZE);
    word = set_value(word, u64::from(rd), constants::RD_OFFSET, constants::REG_SIZE);
    finish(bit(word, sf, constants::SF_OFFSET))
}

/// Constructs a `csetm` instruction.
pub fn csetm(sf: bool, rd: u32, cond: Cond) -> Word {
    let mut word = u64::from(constants::CSETM_BITS);
    word = set_value(word, cond as u64, constants::SEL_COND_OFFSET, constants::COND_SIZE);
    word = set_value(word, u64::from(rd), constants::RD_OFFSET, constants::REG_SIZE);
    finish(bit(word, sf, constants::SF_OFFSET))
}

fn fp_base(ftype: FpType) -> u64 {
    let word = u64::from(constants::FP_BITS);
    set_value(word, ftype as u64, constants::FTYPE_OFFSET, constants::FTYPE_SIZE)
}

fn fp_regs(word: u64, rd: u32, rn: u32) -> u64 {
    let word = set_value(word, u64::from(rn), constants::RN_OFFSET, constants::REG_SIZE);
    set_value(word, u64::from(rd), constants::RD_OFFSET, constants::REG_SIZE)
}

/// Constructs a two-source FP arithmetic instruction.
pub fn fp_arith(op: FpArith, ftype: FpType, rd: u32, rn: u32, rm: u32) -> Word {
    let mut word = fp_base(ftype);
    word = set_value(word, u64::from(rm), constants::RM_OFFSET, constants::REG_SIZE);
    word = set_value(word, op as u64, constants::FP_ARITH_OFFSET, constants::FP_ARITH_SIZE);
    word = set_value(word, constants::FP_TWO_SOURCE, constants::FP_OP2_OFFSET, 2);
    finish(fp_regs(word, rd, rn))
}

/// Constructs a one-source FP instruction (`fmov`/`fabs`/`fneg`).
pub fn fp_unary(op: FpUnary, ftype: FpType, rd: u32, rn: u32) -> Word {
    let mut word = fp_base(ftype);
    word = set_value(word, op as u64, constants::FP_UNARY_OFFSET, constants::FP_UNARY_SIZE);
    word = set_value(word, constants::FP_ONE_SOURCE, constants::FP_OP2_OFFSET, 5);
    finish(fp_regs(word, rd, rn))
}

/// Constructs an FP compare. `rm` of `None` compares against `#0.0`.
pub fn fcmp(ftype: FpType, rn: u32, rm: Option<u32>) -> Word {
    let mut word = fp_base(ftype);
    word = set_value(word, constants::FP_COMPARE, constants::FP_OP2_OFFSET, constants::FP_OP2_SIZE);
    match rm {
        Some(rm) => {
            word = set_value(word, u64::from(rm), constants::RM_OFFSET, constants::REG_SIZE);
        }
        None => {
            word = set_value(word, 0b01000, constants::RD_OFFSET, constants::REG_SIZE);
        }
    }
    finish(set_value(word, u64::from(rn), constants::RN_OFFSET, constants::REG_SIZE))
}

fn int_conv(sf: bool, ftype: FpType, rmode: u64, opcode: u64, rd: u32, rn: u32) -> Word {
    let mut word = fp_base(ftype);
    word = set_value(word, rmode, constants::FP_RMODE_OFFSET, constants::FP_RMODE_SIZE);
    word = set_value(word, opcode, constants::FP_ICONV_OFFSET, constants::FP_ICONV_SIZE);
    word = bit(word, sf, constants::SF_OFFSET);
    finish(fp_regs(word, rd, rn))
}

/// Constructs an `fmov` from a general register into an FP register.
pub fn fmov_to_fp(ftype: FpType, rd: u32, rn: u32) -> Word {
    int_conv(ftype == FpType::Double, ftype, 0b00, 0b111, rd, rn)
}

/// Constructs an `fmov` from an FP register into a general register.
pub fn fmov_from_fp(ftype: FpType, rd: u32, rn: u32) -> Word {
    int_conv(ftype == FpType::Double, ftype, 0b00, 0b110, rd, rn)
}

/// Constructs an `fcvtzs` (FP to signed integer, toward zero).
pub fn fcvtzs(sf: bool, ftype: FpType, rd: u32, rn: u32) -> Word {
    int_conv(sf, ftype, 0b11, 0b000, rd, rn)
}

/// Constructs an `scvtf` (signed integer to FP).
pub fn scvtf(sf: bool, ftype: FpType, rd: u32, rn: u32) -> Word {
    int_conv(sf, ftype, 0b00, 0b010, rd, rn)
}

/// The halt word.
pub fn halt() -> Word {
    constants::HALT_WORD
}
