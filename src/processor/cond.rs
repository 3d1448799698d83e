use num::FromPrimitive;

use super::{condition_holds, Processor, TickResult};
use crate::bits::{get_value, width_mask};
use crate::instructions::Cond;
use crate::{constants, Word};

// Conditional select family. The patterns ride in the register
// data-processing op0 slot; `cset`/`csetm` are narrower patterns than
// `csinc`/`csinv` and must be tried first.

const PATTERNS: [(Word, Word); 6] = [
    (constants::CSET_MASK, constants::CSET_BITS),
    (constants::CSETM_MASK, constants::CSETM_BITS),
    (constants::CSEL_MASK, constants::CSEL_BITS),
    (constants::CSINC_MASK, constants::CSINC_BITS),
    (constants::CSINV_MASK, constants::CSINV_BITS),
    (constants::CSNEG_MASK, constants::CSNEG_BITS),
];

pub(super) fn recognises(raw: Word) -> bool {
    PATTERNS.iter().any(|&(mask, bits)| raw & mask == bits)
}

pub(super) fn execute(proc: &mut Processor, raw: Word) -> Option<TickResult> {
    let word = u64::from(raw);
    let sf = get_value(word, constants::SF_OFFSET, 1) != 0;
    let rd = get_value(word, constants::RD_OFFSET, constants::REG_SIZE) as u32;
    let cond = Cond::from_u64(get_value(
        word,
        constants::SEL_COND_OFFSET,
        constants::COND_SIZE,
    ))?;
    let holds = condition_holds(cond, &proc.pstate);

    if raw & constants::CSET_MASK == constants::CSET_BITS {
        if cond == Cond::Al {
            return None;
        }
        proc.set_reg(sf, rd, if holds { 1 } else { 0 });
        return Some(TickResult::Next);
    }
    if raw & constants::CSETM_MASK == constants::CSETM_BITS {
        if cond == Cond::Al {
            return None;
        }
        let value = if holds { width_mask(u64::max_value(), sf) } else { 0 };
        proc.set_reg(sf, rd, value);
        return Some(TickResult::Next);
    }

    let rn = get_value(word, constants::RN_OFFSET, constants::REG_SIZE) as u32;
    let rm = get_value(word, constants::RM_OFFSET, constants::REG_SIZE) as u32;
    let rn_val = proc.reg(sf, rn);
    let rm_val = proc.reg(sf, rm);

    let value = if holds {
        rn_val
    } else if raw & constants::CSEL_MASK == constants::CSEL_BITS {
        rm_val
    } else if raw & constants::CSINC_MASK == constants::CSINC_BITS {
        width_mask(rm_val.wrapping_add(1), sf)
    } else if raw & constants::CSINV_MASK == constants::CSINV_BITS {
        width_mask(!rm_val, sf)
    } else if raw & constants::CSNEG_MASK == constants::CSNEG_BITS {
        width_mask(rm_val.wrapping_neg(), sf)
    } else {
        return None;
    };

    proc.set_reg(sf, rd, value);
    Some(TickResult::Next)
}
