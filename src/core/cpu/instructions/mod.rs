// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CPU instruction implementations
//!
//! This module contains all instruction implementations, organized by
//! category. Dispatch goes through five mutually exclusive decoder
//! families keyed off the primary 6-bit opcode: SPECIAL (0x00), SPECIAL2
//! (0x1C), SPECIAL3 (0x1F), J-type (0x02/0x03) and I-type (the rest, with
//! REGIMM nested under opcode 0x01). Each family either executes the
//! instruction, raises an [`Exception`](crate::core::error::Exception), or
//! reports the pattern as not decoded, which the driver turns into a
//! reserved-instruction result.

use super::decode::{decode_i_type, decode_r_type};
use super::Cpu;
use crate::core::error::Result;
use crate::core::memory::Bus;

// Instruction modules organized by category
mod arithmetic;
mod bitfield;
mod branch;
mod exception;
mod jump;
mod load;
mod logical;
mod multiply;
mod shift;
mod store;

impl Cpu {
    /// Dispatch one fetched instruction to its decoder family.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if the pattern was recognised and executed, `Ok(false)`
    /// for a reserved encoding, `Err` if execution raised an exception.
    pub(super) fn execute_instruction<B: Bus>(&mut self, instr: u32, bus: &mut B) -> Result<bool> {
        // Extract opcode (upper 6 bits)
        let opcode = instr >> 26;

        match opcode {
            0x00 => self.execute_special(instr),
            0x1C => self.execute_special2(instr),
            0x1F => self.execute_special3(instr),
            op if op & 0x3E == 0x02 => self.execute_jump(instr),
            op if op & 0x3C == 0x10 => {
                // COP0..COP3 opcode space; no coprocessors are attached.
                log::warn!(
                    "coprocessor opcode 0x{:02X} at PC=0x{:08X} (reserved)",
                    op,
                    self.pc
                );
                Ok(false)
            }
            _ => self.execute_itype(instr, bus),
        }
    }

    /// Handle SPECIAL instructions (opcode 0x00).
    ///
    /// The funct field selects the operation; the guards encode which
    /// operand fields must be zero for the pattern to be valid. `rotr` and
    /// `rotrv` shadow the `srl`/`srlv` funct values and are disambiguated
    /// by rs == 1 and shamt == 1 respectively.
    fn execute_special(&mut self, instr: u32) -> Result<bool> {
        let (rs, rt, rd, shamt, funct) = decode_r_type(instr);

        match funct {
            0x00 if rs == 0 => self.op_sll(rt, rd, shamt)?,
            0x02 if rs == 0 => self.op_srl(rt, rd, shamt)?,
            0x02 if rs == 1 => self.op_rotr(rt, rd, shamt)?,
            0x03 if rs == 0 => self.op_sra(rt, rd, shamt)?,
            0x04 if shamt == 0 => self.op_sllv(rs, rt, rd)?,
            0x06 if shamt == 0 => self.op_srlv(rs, rt, rd)?,
            0x06 if shamt == 1 => self.op_rotrv(rs, rt, rd)?,
            0x07 if shamt == 0 => self.op_srav(rs, rt, rd)?,
            0x08 if rt == 0 && rd == 0 => self.op_jr(rs)?,
            0x09 if rt == 0 => self.op_jalr(rs, rd)?,
            0x0A if shamt == 0 => self.op_movz(rs, rt, rd)?,
            0x0B if shamt == 0 => self.op_movn(rs, rt, rd)?,
            0x0C => self.op_syscall(instr)?,
            0x0D => self.op_break(instr)?,
            0x10 if rs == 0 && rt == 0 && shamt == 0 => self.op_mfhi(rd)?,
            0x11 if rt == 0 && rd == 0 && shamt == 0 => self.op_mthi(rs)?,
            0x12 if rs == 0 && rt == 0 && shamt == 0 => self.op_mflo(rd)?,
            0x13 if rt == 0 && rd == 0 && shamt == 0 => self.op_mtlo(rs)?,
            0x18 if rd == 0 && shamt == 0 => self.op_mult(rs, rt)?,
            0x19 if rd == 0 && shamt == 0 => self.op_multu(rs, rt)?,
            0x1A if rd == 0 && shamt == 0 => self.op_div(rs, rt)?,
            0x1B if rd == 0 && shamt == 0 => self.op_divu(rs, rt)?,
            0x20 if shamt == 0 => self.op_add(rs, rt, rd)?,
            0x21 if shamt == 0 => self.op_addu(rs, rt, rd)?,
            0x22 if shamt == 0 => self.op_sub(rs, rt, rd)?,
            0x23 if shamt == 0 => self.op_subu(rs, rt, rd)?,
            0x24 if shamt == 0 => self.op_and(rs, rt, rd)?,
            0x25 if shamt == 0 => self.op_or(rs, rt, rd)?,
            0x26 if shamt == 0 => self.op_xor(rs, rt, rd)?,
            0x27 if shamt == 0 => self.op_nor(rs, rt, rd)?,
            0x2A if shamt == 0 => self.op_slt(rs, rt, rd)?,
            0x2B if shamt == 0 => self.op_sltu(rs, rt, rd)?,
            // Trap funct values carry the 10-bit code across the rd and
            // shamt fields, so no operand guards apply.
            0x30 => self.op_tge(rs, rt, instr)?,
            0x31 => self.op_tgeu(rs, rt, instr)?,
            0x32 => self.op_tlt(rs, rt, instr)?,
            0x33 => self.op_tltu(rs, rt, instr)?,
            0x34 => self.op_teq(rs, rt, instr)?,
            0x36 => self.op_tne(rs, rt, instr)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// Handle SPECIAL2 instructions (opcode 0x1C).
    fn execute_special2(&mut self, instr: u32) -> Result<bool> {
        let (rs, rt, rd, shamt, funct) = decode_r_type(instr);

        match funct {
            0x00 if rd == 0 && shamt == 0 => self.op_madd(rs, rt)?,
            0x01 if rd == 0 && shamt == 0 => self.op_maddu(rs, rt)?,
            0x02 if shamt == 0 => self.op_mul(rs, rt, rd)?,
            0x04 if rd == 0 && shamt == 0 => self.op_msub(rs, rt)?,
            0x05 if rd == 0 && shamt == 0 => self.op_msubu(rs, rt)?,
            0x20 if shamt == 0 => self.op_clz(rs, rd)?,
            0x21 if shamt == 0 => self.op_clo(rs, rd)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// Handle SPECIAL3 instructions (opcode 0x1F).
    ///
    /// `ext` and `ins` reuse rd and shamt as the field geometry (msb/size
    /// and lsb); the BSHFL sub-family (funct 0x20) selects on shamt.
    fn execute_special3(&mut self, instr: u32) -> Result<bool> {
        let (rs, rt, rd, shamt, funct) = decode_r_type(instr);

        match funct {
            0x00 => self.op_ext(rs, rt, rd, shamt)?,
            // ins requires msb >= lsb; anything else is malformed
            0x04 if rd >= shamt => self.op_ins(rs, rt, rd, shamt)?,
            0x20 if rs == 0 && shamt == 0x02 => self.op_wsbh(rt, rd)?,
            0x20 if rs == 0 && shamt == 0x10 => self.op_seb(rt, rd)?,
            0x20 if rs == 0 && shamt == 0x18 => self.op_seh(rt, rd)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// Handle I-type instructions (all remaining opcodes).
    fn execute_itype<B: Bus>(&mut self, instr: u32, bus: &mut B) -> Result<bool> {
        let (op, rs, rt, _) = decode_i_type(instr);

        if op == 0x01 {
            return self.execute_regimm(instr);
        }

        match op {
            0x04 => self.op_beq(instr)?,
            0x05 => self.op_bne(instr)?,
            0x06 if rt == 0 => self.op_blez(instr)?,
            0x07 if rt == 0 => self.op_bgtz(instr)?,
            0x08 => self.op_addi(instr)?,
            0x09 => self.op_addiu(instr)?,
            0x0A => self.op_slti(instr)?,
            0x0B => self.op_sltiu(instr)?,
            0x0C => self.op_andi(instr)?,
            0x0D => self.op_ori(instr)?,
            0x0E => self.op_xori(instr)?,
            0x0F if rs == 0 => self.op_lui(instr)?,
            0x20 => self.op_lb(instr, bus)?,
            0x21 => self.op_lh(instr, bus)?,
            0x22 => self.op_lwl(instr, bus)?,
            0x23 => self.op_lw(instr, bus)?,
            0x24 => self.op_lbu(instr, bus)?,
            0x25 => self.op_lhu(instr, bus)?,
            0x26 => self.op_lwr(instr, bus)?,
            0x28 => self.op_sb(instr, bus)?,
            0x29 => self.op_sh(instr, bus)?,
            0x2A => self.op_swl(instr, bus)?,
            0x2B => self.op_sw(instr, bus)?,
            0x2E => self.op_swr(instr, bus)?,
            0x30 | 0x38 => {
                // ll/sc are recognised but inert until atomics are
                // supported; reporting reserved keeps the host aware.
                log::debug!(
                    "ll/sc opcode 0x{:02X} at PC=0x{:08X} (unsupported)",
                    op,
                    self.pc
                );
                return Ok(false);
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}
