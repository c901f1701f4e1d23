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

use super::super::Cpu;
use crate::core::error::Result;

impl Cpu {
    // === Multiply/Divide Instructions ===
    //
    // HI and LO are the two halves of the 64-bit accumulator; the madd
    // family updates the accumulator as a whole.

    /// MULT: Multiply (signed)
    ///
    /// Format: mult rs, rt
    /// Operation: (HI, LO) = rs * rt (signed 64-bit result)
    pub(crate) fn op_mult(&mut self, rs: u8, rt: u8) -> Result<()> {
        let a = self.reg(rs) as i32 as i64;
        let b = self.reg(rt) as i32 as i64;
        self.acc = (a * b) as u64;
        Ok(())
    }

    /// MULTU: Multiply Unsigned
    ///
    /// Format: multu rs, rt
    /// Operation: (HI, LO) = rs * rt (unsigned 64-bit result)
    pub(crate) fn op_multu(&mut self, rs: u8, rt: u8) -> Result<()> {
        let a = u64::from(self.reg(rs));
        let b = u64::from(self.reg(rt));
        self.acc = a * b;
        Ok(())
    }

    /// DIV: Divide (signed)
    ///
    /// Format: div rs, rt
    /// Operation: LO = rs / rt (quotient), HI = rs % rt (remainder)
    ///
    /// # Special Cases
    ///
    /// The architecture leaves these undefined and untrapped; the patterns
    /// below follow hardware convention:
    /// * Division by zero: LO = 0xFFFFFFFF or 1 (based on sign of rs),
    ///   HI = rs
    /// * Overflow (i32::MIN / -1): LO = 0x80000000, HI = 0
    pub(crate) fn op_div(&mut self, rs: u8, rt: u8) -> Result<()> {
        let numerator = self.reg(rs) as i32;
        let denominator = self.reg(rt) as i32;

        if denominator == 0 {
            self.set_lo(if numerator >= 0 { 0xFFFF_FFFF } else { 1 });
            self.set_hi(numerator as u32);
        } else if numerator as u32 == 0x8000_0000 && denominator == -1 {
            self.set_lo(0x8000_0000);
            self.set_hi(0);
        } else {
            self.set_lo((numerator / denominator) as u32);
            self.set_hi((numerator % denominator) as u32);
        }
        Ok(())
    }

    /// DIVU: Divide Unsigned
    ///
    /// Format: divu rs, rt
    /// Operation: LO = rs / rt (quotient), HI = rs % rt (remainder)
    ///
    /// # Special Cases
    ///
    /// * Division by zero: LO = 0xFFFFFFFF, HI = rs
    pub(crate) fn op_divu(&mut self, rs: u8, rt: u8) -> Result<()> {
        let numerator = self.reg(rs);
        let denominator = self.reg(rt);

        if denominator == 0 {
            self.set_lo(0xFFFF_FFFF);
            self.set_hi(numerator);
        } else {
            self.set_lo(numerator / denominator);
            self.set_hi(numerator % denominator);
        }
        Ok(())
    }

    /// MFHI: Move From HI
    ///
    /// Format: mfhi rd
    /// Operation: rd = HI
    pub(crate) fn op_mfhi(&mut self, rd: u8) -> Result<()> {
        let value = self.hi();
        self.set_reg(rd, value);
        Ok(())
    }

    /// MFLO: Move From LO
    ///
    /// Format: mflo rd
    /// Operation: rd = LO
    pub(crate) fn op_mflo(&mut self, rd: u8) -> Result<()> {
        let value = self.lo();
        self.set_reg(rd, value);
        Ok(())
    }

    /// MTHI: Move To HI
    ///
    /// Format: mthi rs
    /// Operation: HI = rs
    pub(crate) fn op_mthi(&mut self, rs: u8) -> Result<()> {
        let value = self.reg(rs);
        self.set_hi(value);
        Ok(())
    }

    /// MTLO: Move To LO
    ///
    /// Format: mtlo rs
    /// Operation: LO = rs
    pub(crate) fn op_mtlo(&mut self, rs: u8) -> Result<()> {
        let value = self.reg(rs);
        self.set_lo(value);
        Ok(())
    }

    /// MUL: Multiply to Register (SPECIAL2)
    ///
    /// The low 32 bits of the signed product go to rd; HI and LO are not
    /// updated.
    ///
    /// Format: mul rd, rs, rt
    /// Operation: rd = low32(rs * rt)
    pub(crate) fn op_mul(&mut self, rs: u8, rt: u8, rd: u8) -> Result<()> {
        let result = (self.reg(rs) as i32).wrapping_mul(self.reg(rt) as i32);
        self.set_reg(rd, result as u32);
        Ok(())
    }

    /// MADD: Multiply-Add (signed)
    ///
    /// Format: madd rs, rt
    /// Operation: (HI, LO) += rs * rt (signed product)
    pub(crate) fn op_madd(&mut self, rs: u8, rt: u8) -> Result<()> {
        let a = self.reg(rs) as i32 as i64;
        let b = self.reg(rt) as i32 as i64;
        self.acc = self.acc.wrapping_add((a * b) as u64);
        Ok(())
    }

    /// MADDU: Multiply-Add Unsigned
    ///
    /// Format: maddu rs, rt
    /// Operation: (HI, LO) += rs * rt (unsigned product)
    pub(crate) fn op_maddu(&mut self, rs: u8, rt: u8) -> Result<()> {
        let product = u64::from(self.reg(rs)) * u64::from(self.reg(rt));
        self.acc = self.acc.wrapping_add(product);
        Ok(())
    }

    /// MSUB: Multiply-Subtract (signed)
    ///
    /// Format: msub rs, rt
    /// Operation: (HI, LO) -= rs * rt (signed product)
    pub(crate) fn op_msub(&mut self, rs: u8, rt: u8) -> Result<()> {
        let a = self.reg(rs) as i32 as i64;
        let b = self.reg(rt) as i32 as i64;
        self.acc = self.acc.wrapping_sub((a * b) as u64);
        Ok(())
    }

    /// MSUBU: Multiply-Subtract Unsigned
    ///
    /// Format: msubu rs, rt
    /// Operation: (HI, LO) -= rs * rt (unsigned product)
    pub(crate) fn op_msubu(&mut self, rs: u8, rt: u8) -> Result<()> {
        let product = u64::from(self.reg(rs)) * u64::from(self.reg(rt));
        self.acc = self.acc.wrapping_sub(product);
        Ok(())
    }
}
