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

use super::super::decode::decode_j_type;
use super::super::Cpu;
use crate::core::error::Result;

impl Cpu {
    // === Jump Instructions ===

    /// Handle J-type instructions (opcodes 0x02 and 0x03).
    pub(in crate::core::cpu) fn execute_jump(&mut self, instr: u32) -> Result<bool> {
        let (op, target) = decode_j_type(instr);

        match op {
            0x02 => self.op_j(target)?,
            0x03 => self.op_jal(target)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// J: Jump
    ///
    /// The target address keeps the upper 4 bits of the current PC region
    /// and replaces the rest with the 26-bit target shifted left by 2. At
    /// this point `pc` already holds the delay-slot address.
    ///
    /// Format: j target
    /// Operation: PC = (PC & 0xF0000000) | (target << 2)
    pub(crate) fn op_j(&mut self, target: u32) -> Result<()> {
        let dest = (self.pc & 0xF000_0000) | (target << 2);
        self.branch_abs(dest);
        Ok(())
    }

    /// JAL: Jump And Link
    ///
    /// The return address written to r31 is the instruction after the
    /// delay slot.
    ///
    /// Format: jal target
    /// Operation: r31 = return address; PC = (PC & 0xF0000000) | (target << 2)
    pub(crate) fn op_jal(&mut self, target: u32) -> Result<()> {
        let link = self.pc.wrapping_add(4);
        self.set_reg(31, link);

        let dest = (self.pc & 0xF000_0000) | (target << 2);
        self.branch_abs(dest);
        Ok(())
    }

    /// JR: Jump Register
    ///
    /// Format: jr rs
    /// Operation: PC = rs
    pub(crate) fn op_jr(&mut self, rs: u8) -> Result<()> {
        let dest = self.reg(rs);
        self.branch_abs(dest);
        Ok(())
    }

    /// JALR: Jump And Link Register
    ///
    /// The link register is written before the jump target is read, so
    /// `jalr rd, rd` branches to the freshly written return address. With
    /// rs == 0 the target is 0, since r0 reads as zero.
    ///
    /// Format: jalr rd, rs
    /// Operation: rd = return address; PC = rs
    pub(crate) fn op_jalr(&mut self, rs: u8, rd: u8) -> Result<()> {
        let link = self.pc.wrapping_add(4);
        self.set_reg(rd, link);

        let dest = self.reg(rs);
        self.branch_abs(dest);
        Ok(())
    }
}
