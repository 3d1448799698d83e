use super::{Processor, TickResult};
use crate::bits::{get_value, sign_extend};
use crate::{constants, Word};

// Single data transfer. The transfer moves 4 or 8 bytes by the `sf` bit at
// bit 30; the base register of every addressing mode is read as 64 bits.

pub(super) fn execute(proc: &mut Processor, raw: Word) -> Option<TickResult> {
    let word = u64::from(raw);
    let sf = get_value(word, constants::TRANSFER_SF_OFFSET, 1) != 0;
    let rt = get_value(word, constants::RD_OFFSET, constants::REG_SIZE) as u32;
    let size = if sf { 8 } else { 4 };

    let load;
    let address;

    if raw & constants::SDT_MASK == constants::SDT_BITS {
        load = get_value(word, constants::L_OFFSET, 1) != 0;
        let xn = get_value(word, constants::RN_OFFSET, constants::REG_SIZE) as u32;
        let base = proc.reg(true, xn);

        if get_value(word, constants::U_OFFSET, 1) != 0 {
            // unsigned offset, scaled by the transfer size
            let imm12 = get_value(word, constants::IMM12_OFFSET, constants::IMM12_SIZE);
            address = base.wrapping_add(imm12 * u64::from(size));
        } else if raw & constants::REG_OFFSET_MASK == constants::REG_OFFSET_BITS {
            let xm = get_value(word, constants::RM_OFFSET, constants::REG_SIZE) as u32;
            address = base.wrapping_add(proc.reg(true, xm));
        } else if raw & constants::INDEX_MASK == constants::INDEX_BITS {
            let simm9 = sign_extend(
                get_value(word, constants::SIMM9_OFFSET, constants::SIMM9_SIZE),
                constants::SIMM9_SIZE - 1,
            );
            let indexed = base.wrapping_add(simm9);
            let pre = get_value(word, constants::INDEX_I_OFFSET, 1) != 0;
            address = if pre { indexed } else { base };
            proc.set_reg(true, xn, indexed);
        } else {
            return None;
        }
    } else if raw & constants::LITERAL_MASK == constants::LITERAL_BITS {
        load = true;
        let simm19 = sign_extend(
            get_value(word, constants::SIMM19_OFFSET, constants::SIMM19_SIZE),
            constants::SIMM19_SIZE - 1,
        );
        address = proc.pc.wrapping_add(simm19.wrapping_mul(constants::WORD_BYTES));
    } else {
        return None;
    }

    let result = if load {
        proc.memory
            .read(address, size)
            .map(|value| proc.set_reg(sf, rt, value))
    } else {
        proc.memory.write(address, size, proc.reg(sf, rt))
    };

    match result {
        Ok(()) => Some(TickResult::Next),
        Err(()) => Some(TickResult::Stop(super::ExitCode::BadMemoryAccess)),
    }
}
