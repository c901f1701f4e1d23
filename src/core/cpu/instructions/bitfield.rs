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

//! SPECIAL3 bit-field and byte-shuffle instructions

use super::super::Cpu;
use crate::core::error::Result;

/// Right-aligned mask of `size` bits, valid for size in 1..=32.
#[inline(always)]
fn field_mask(size: u32) -> u32 {
    if size == 32 {
        u32::MAX
    } else {
        (1 << size) - 1
    }
}

impl Cpu {
    // === Bit-field Instructions ===

    /// EXT: Extract Bit Field
    ///
    /// Extracts the field of width (msbd + 1) bits starting at bit
    /// position lsb from rs, zero-extends it and writes it to rt. Field
    /// geometry reaching past bit 31 reads as zero.
    ///
    /// Format: ext rt, rs, lsb, msbd (lsb in shamt, msbd in rd)
    /// Operation: rt = (rs >> lsb) & ((1 << (msbd + 1)) - 1)
    pub(crate) fn op_ext(&mut self, rs: u8, rt: u8, rd: u8, shamt: u8) -> Result<()> {
        let lsb = u32::from(shamt);
        let size = u32::from(rd) + 1;
        let value = (self.reg(rs) >> lsb) & field_mask(size);
        self.set_reg(rt, value);
        Ok(())
    }

    /// INS: Insert Bit Field
    ///
    /// Inserts the low (msb - lsb + 1) bits of rs into rt at bit positions
    /// [lsb..=msb]; the other bits of rt are preserved. The dispatcher
    /// guarantees msb >= lsb.
    ///
    /// Format: ins rt, rs, lsb, msb (lsb in shamt, msb in rd)
    /// Operation: rt = (rt & ~mask) | ((rs << lsb) & mask)
    pub(crate) fn op_ins(&mut self, rs: u8, rt: u8, rd: u8, shamt: u8) -> Result<()> {
        let lsb = u32::from(shamt);
        let msb = u32::from(rd);
        let mask = field_mask(msb - lsb + 1) << lsb;
        let value = (self.reg(rt) & !mask) | ((self.reg(rs) << lsb) & mask);
        self.set_reg(rt, value);
        Ok(())
    }

    /// WSBH: Word Swap Bytes Within Halfwords
    ///
    /// Format: wsbh rd, rt
    /// Operation: rd = { rt[23:16], rt[31:24], rt[7:0], rt[15:8] }
    pub(crate) fn op_wsbh(&mut self, rt: u8, rd: u8) -> Result<()> {
        let value = self.reg(rt);
        let result = ((value & 0x00FF_00FF) << 8) | ((value & 0xFF00_FF00) >> 8);
        self.set_reg(rd, result);
        Ok(())
    }

    /// SEB: Sign-Extend Byte
    ///
    /// Format: seb rd, rt
    /// Operation: rd = sign_extend(rt[7:0])
    pub(crate) fn op_seb(&mut self, rt: u8, rd: u8) -> Result<()> {
        let result = self.reg(rt) as u8 as i8 as i32 as u32;
        self.set_reg(rd, result);
        Ok(())
    }

    /// SEH: Sign-Extend Halfword
    ///
    /// Format: seh rd, rt
    /// Operation: rd = sign_extend(rt[15:0])
    pub(crate) fn op_seh(&mut self, rt: u8, rd: u8) -> Result<()> {
        let result = self.reg(rt) as u16 as i16 as i32 as u32;
        self.set_reg(rd, result);
        Ok(())
    }
}
