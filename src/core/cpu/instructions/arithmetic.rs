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
use crate::core::error::{Exception, Result};

impl Cpu {
    // === Arithmetic Instructions ===

    /// ADD: Add (with overflow exception)
    ///
    /// Adds two registers with signed overflow detection. On overflow the
    /// destination register is left untouched and the step reports an
    /// integer overflow.
    ///
    /// Format: add rd, rs, rt
    /// Operation: rd = rs + rt
    pub(crate) fn op_add(&mut self, rs: u8, rt: u8, rd: u8) -> Result<()> {
        let a = self.reg(rs) as i32;
        let b = self.reg(rt) as i32;

        match a.checked_add(b) {
            Some(result) => {
                self.set_reg(rd, result as u32);
                Ok(())
            }
            None => Err(Exception::IntegerOverflow),
        }
    }

    /// ADDU: Add Unsigned (no overflow exception)
    ///
    /// Overflow wraps around (modulo 2^32).
    ///
    /// Format: addu rd, rs, rt
    /// Operation: rd = rs + rt
    pub(crate) fn op_addu(&mut self, rs: u8, rt: u8, rd: u8) -> Result<()> {
        let result = self.reg(rs).wrapping_add(self.reg(rt));
        self.set_reg(rd, result);
        Ok(())
    }

    /// ADDI: Add Immediate (with overflow exception)
    ///
    /// Adds a sign-extended immediate with overflow detection; the
    /// destination is not written on overflow.
    ///
    /// Format: addi rt, rs, imm
    /// Operation: rt = rs + sign_extend(imm)
    pub(crate) fn op_addi(&mut self, instr: u32) -> Result<()> {
        let (_, rs, rt, imm) = decode_i_type(instr);
        let imm = (imm as i16) as i32; // Sign extend
        let a = self.reg(rs) as i32;

        match a.checked_add(imm) {
            Some(result) => {
                self.set_reg(rt, result as u32);
                Ok(())
            }
            None => Err(Exception::IntegerOverflow),
        }
    }

    /// ADDIU: Add Immediate Unsigned (no overflow exception)
    ///
    /// Despite the name, the immediate is sign-extended.
    ///
    /// Format: addiu rt, rs, imm
    /// Operation: rt = rs + sign_extend(imm)
    pub(crate) fn op_addiu(&mut self, instr: u32) -> Result<()> {
        let (_, rs, rt, imm) = decode_i_type(instr);
        let imm = (imm as i16) as u32; // Sign extend
        let result = self.reg(rs).wrapping_add(imm);
        self.set_reg(rt, result);
        Ok(())
    }

    /// SUB: Subtract (with overflow exception)
    ///
    /// Format: sub rd, rs, rt
    /// Operation: rd = rs - rt
    pub(crate) fn op_sub(&mut self, rs: u8, rt: u8, rd: u8) -> Result<()> {
        let a = self.reg(rs) as i32;
        let b = self.reg(rt) as i32;

        match a.checked_sub(b) {
            Some(result) => {
                self.set_reg(rd, result as u32);
                Ok(())
            }
            None => Err(Exception::IntegerOverflow),
        }
    }

    /// SUBU: Subtract Unsigned (no overflow exception)
    ///
    /// Format: subu rd, rs, rt
    /// Operation: rd = rs - rt
    pub(crate) fn op_subu(&mut self, rs: u8, rt: u8, rd: u8) -> Result<()> {
        let result = self.reg(rs).wrapping_sub(self.reg(rt));
        self.set_reg(rd, result);
        Ok(())
    }

    /// SLT: Set on Less Than (signed)
    ///
    /// Format: slt rd, rs, rt
    /// Operation: rd = (rs < rt) ? 1 : 0
    pub(crate) fn op_slt(&mut self, rs: u8, rt: u8, rd: u8) -> Result<()> {
        let result = ((self.reg(rs) as i32) < (self.reg(rt) as i32)) as u32;
        self.set_reg(rd, result);
        Ok(())
    }

    /// SLTU: Set on Less Than Unsigned
    ///
    /// Format: sltu rd, rs, rt
    /// Operation: rd = (rs < rt) ? 1 : 0
    pub(crate) fn op_sltu(&mut self, rs: u8, rt: u8, rd: u8) -> Result<()> {
        let result = (self.reg(rs) < self.reg(rt)) as u32;
        self.set_reg(rd, result);
        Ok(())
    }

    /// SLTI: Set on Less Than Immediate (signed)
    ///
    /// Format: slti rt, rs, imm
    /// Operation: rt = (rs < sign_extend(imm)) ? 1 : 0
    pub(crate) fn op_slti(&mut self, instr: u32) -> Result<()> {
        let (_, rs, rt, imm) = decode_i_type(instr);
        let imm = (imm as i16) as i32;
        let result = ((self.reg(rs) as i32) < imm) as u32;
        self.set_reg(rt, result);
        Ok(())
    }

    /// SLTIU: Set on Less Than Immediate Unsigned
    ///
    /// The immediate is sign-extended first, then compared unsigned.
    ///
    /// Format: sltiu rt, rs, imm
    /// Operation: rt = (rs < sign_extend(imm)) ? 1 : 0
    pub(crate) fn op_sltiu(&mut self, instr: u32) -> Result<()> {
        let (_, rs, rt, imm) = decode_i_type(instr);
        let imm = (imm as i16) as u32; // Sign extend then treat as unsigned
        let result = (self.reg(rs) < imm) as u32;
        self.set_reg(rt, result);
        Ok(())
    }

    /// MOVZ: Move Conditional on Zero
    ///
    /// rd is left unchanged when the condition does not hold.
    ///
    /// Format: movz rd, rs, rt
    /// Operation: if (rt == 0) rd = rs
    pub(crate) fn op_movz(&mut self, rs: u8, rt: u8, rd: u8) -> Result<()> {
        if self.reg(rt) == 0 {
            let value = self.reg(rs);
            self.set_reg(rd, value);
        }
        Ok(())
    }

    /// MOVN: Move Conditional on Not Zero
    ///
    /// Format: movn rd, rs, rt
    /// Operation: if (rt != 0) rd = rs
    pub(crate) fn op_movn(&mut self, rs: u8, rt: u8, rd: u8) -> Result<()> {
        if self.reg(rt) != 0 {
            let value = self.reg(rs);
            self.set_reg(rd, value);
        }
        Ok(())
    }

    /// CLZ: Count Leading Zeros
    ///
    /// Format: clz rd, rs
    /// Operation: rd = number of leading zero bits in rs (0..=32)
    pub(crate) fn op_clz(&mut self, rs: u8, rd: u8) -> Result<()> {
        let result = self.reg(rs).leading_zeros();
        self.set_reg(rd, result);
        Ok(())
    }

    /// CLO: Count Leading Ones
    ///
    /// Format: clo rd, rs
    /// Operation: rd = number of leading one bits in rs (0..=32)
    pub(crate) fn op_clo(&mut self, rs: u8, rd: u8) -> Result<()> {
        let result = self.reg(rs).leading_ones();
        self.set_reg(rd, result);
        Ok(())
    }
}
