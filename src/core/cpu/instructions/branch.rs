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

use super::super::decode::decode_i_type;
use super::super::Cpu;
use crate::core::error::Result;

impl Cpu {
    // === Branch Instructions ===

    /// Handle REGIMM instructions (opcode 0x01)
    ///
    /// The rt field selects the operation: compare-to-zero branches
    /// (bltz/bgez and their linking variants) and the trap-on-immediate
    /// family.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if the rt value named an instruction, `Ok(false)` for a
    /// reserved sub-encoding.
    pub(in crate::core::cpu) fn execute_regimm(&mut self, instr: u32) -> Result<bool> {
        let (_, rs, rt, imm) = decode_i_type(instr);
        let offset = ((imm as i16) as i32) << 2;

        match rt {
            0x00 => self.op_bltz(rs, offset)?,
            0x01 => self.op_bgez(rs, offset)?,
            0x08 => self.op_tgei(rs, imm)?,
            0x09 => self.op_tgeiu(rs, imm)?,
            0x0A => self.op_tlti(rs, imm)?,
            0x0B => self.op_tltiu(rs, imm)?,
            0x0C => self.op_teqi(rs, imm)?,
            0x0E => self.op_tnei(rs, imm)?,
            0x10 => self.op_bltzal(rs, offset)?,
            0x11 => self.op_bgezal(rs, offset)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// BEQ: Branch on Equal
    ///
    /// Format: beq rs, rt, offset
    /// Operation: if (rs == rt) branch to delay-slot PC + (offset << 2)
    pub(crate) fn op_beq(&mut self, instr: u32) -> Result<()> {
        let (_, rs, rt, imm) = decode_i_type(instr);
        let offset = ((imm as i16) as i32) << 2;

        if self.reg(rs) == self.reg(rt) {
            self.branch_rel(offset);
        }
        Ok(())
    }

    /// BNE: Branch on Not Equal
    ///
    /// Format: bne rs, rt, offset
    /// Operation: if (rs != rt) branch to delay-slot PC + (offset << 2)
    pub(crate) fn op_bne(&mut self, instr: u32) -> Result<()> {
        let (_, rs, rt, imm) = decode_i_type(instr);
        let offset = ((imm as i16) as i32) << 2;

        if self.reg(rs) != self.reg(rt) {
            self.branch_rel(offset);
        }
        Ok(())
    }

    /// BLEZ: Branch on Less Than or Equal to Zero
    ///
    /// Format: blez rs, offset
    /// Operation: if (rs <= 0) branch to delay-slot PC + (offset << 2)
    pub(crate) fn op_blez(&mut self, instr: u32) -> Result<()> {
        let (_, rs, _, imm) = decode_i_type(instr);
        let offset = ((imm as i16) as i32) << 2;

        if (self.reg(rs) as i32) <= 0 {
            self.branch_rel(offset);
        }
        Ok(())
    }

    /// BGTZ: Branch on Greater Than Zero
    ///
    /// Format: bgtz rs, offset
    /// Operation: if (rs > 0) branch to delay-slot PC + (offset << 2)
    pub(crate) fn op_bgtz(&mut self, instr: u32) -> Result<()> {
        let (_, rs, _, imm) = decode_i_type(instr);
        let offset = ((imm as i16) as i32) << 2;

        if (self.reg(rs) as i32) > 0 {
            self.branch_rel(offset);
        }
        Ok(())
    }

    /// BLTZ: Branch on Less Than Zero
    ///
    /// Operation: if (rs < 0) branch
    pub(crate) fn op_bltz(&mut self, rs: u8, offset: i32) -> Result<()> {
        if (self.reg(rs) as i32) < 0 {
            self.branch_rel(offset);
        }
        Ok(())
    }

    /// BGEZ: Branch on Greater Than or Equal to Zero
    ///
    /// Operation: if (rs >= 0) branch
    pub(crate) fn op_bgez(&mut self, rs: u8, offset: i32) -> Result<()> {
        if (self.reg(rs) as i32) >= 0 {
            self.branch_rel(offset);
        }
        Ok(())
    }

    /// BLTZAL: Branch on Less Than Zero And Link
    ///
    /// r31 receives the return address (the instruction after the delay
    /// slot) only when the branch is taken.
    ///
    /// Operation: if (rs < 0) { r31 = return address; branch }
    pub(crate) fn op_bltzal(&mut self, rs: u8, offset: i32) -> Result<()> {
        if (self.reg(rs) as i32) < 0 {
            let link = self.pc.wrapping_add(4);
            self.set_reg(31, link);
            self.branch_rel(offset);
        }
        Ok(())
    }

    /// BGEZAL: Branch on Greater Than or Equal to Zero And Link
    ///
    /// Operation: if (rs >= 0) { r31 = return address; branch }
    pub(crate) fn op_bgezal(&mut self, rs: u8, offset: i32) -> Result<()> {
        if (self.reg(rs) as i32) >= 0 {
            let link = self.pc.wrapping_add(4);
            self.set_reg(31, link);
            self.branch_rel(offset);
        }
        Ok(())
    }
}
