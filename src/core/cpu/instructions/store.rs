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
use crate::core::memory::{self, Bus};

impl Cpu {
    // === Store Instructions ===

    /// SW: Store Word (32-bit)
    ///
    /// The address must be 4-byte aligned.
    ///
    /// Format: sw rt, offset(rs)
    /// Operation: memory[rs + sign_extend(offset)] = rt
    pub(crate) fn op_sw<B: Bus>(&mut self, instr: u32, bus: &mut B) -> Result<()> {
        let (_, rs, rt, imm) = decode_i_type(instr);
        let offset = (imm as i16) as i32; // Sign extend
        let addr = self.reg(rs).wrapping_add(offset as u32);

        memory::write_word(bus, addr, self.reg(rt))
    }

    /// SH: Store Halfword (16-bit)
    ///
    /// The address must be 2-byte aligned.
    ///
    /// Format: sh rt, offset(rs)
    /// Operation: memory[rs + sign_extend(offset)] = rt[15:0]
    pub(crate) fn op_sh<B: Bus>(&mut self, instr: u32, bus: &mut B) -> Result<()> {
        let (_, rs, rt, imm) = decode_i_type(instr);
        let offset = (imm as i16) as i32; // Sign extend
        let addr = self.reg(rs).wrapping_add(offset as u32);

        memory::write_half(bus, addr, self.reg(rt) as u16)
    }

    /// SB: Store Byte (8-bit)
    ///
    /// No alignment restrictions.
    ///
    /// Format: sb rt, offset(rs)
    /// Operation: memory[rs + sign_extend(offset)] = rt[7:0]
    pub(crate) fn op_sb<B: Bus>(&mut self, instr: u32, bus: &mut B) -> Result<()> {
        let (_, rs, rt, imm) = decode_i_type(instr);
        let offset = (imm as i16) as i32; // Sign extend
        let addr = self.reg(rs).wrapping_add(offset as u32);

        bus.write8(addr, self.reg(rt) as u8);
        Ok(())
    }

    /// SWL: Store Word Left (unaligned store, little-endian)
    ///
    /// Stores the high-order (addr & 3) + 1 bytes of rt into the aligned
    /// word containing the effective address. The store decomposes into
    /// naturally aligned byte/halfword/word sub-stores, issued low address
    /// first:
    ///
    /// | addr & 3 | sub-stores                                    |
    /// |----------|-----------------------------------------------|
    /// | 0        | byte  base   = rt >> 24                       |
    /// | 1        | half  base   = rt >> 16                       |
    /// | 2        | half  base   = rt >> 8, byte base+2 = rt >> 24|
    /// | 3        | word  base   = rt                             |
    ///
    /// Format: swl rt, offset(rs)
    pub(crate) fn op_swl<B: Bus>(&mut self, instr: u32, bus: &mut B) -> Result<()> {
        let (_, rs, rt, imm) = decode_i_type(instr);
        let offset = (imm as i16) as i32;
        let addr = self.reg(rs).wrapping_add(offset as u32);

        let base = addr & !0x3;
        let value = self.reg(rt);

        match addr & 0x3 {
            0 => bus.write8(base, (value >> 24) as u8),
            1 => bus.write16(base, (value >> 16) as u16),
            2 => {
                bus.write16(base, (value >> 8) as u16);
                bus.write8(base + 2, (value >> 24) as u8);
            }
            _ => bus.write32(base, value),
        }
        Ok(())
    }

    /// SWR: Store Word Right (unaligned store, little-endian)
    ///
    /// The mirror of SWL: stores the low-order 4 - (addr & 3) bytes of rt
    /// from the effective address up to the end of the aligned word:
    ///
    /// | addr & 3 | sub-stores                                    |
    /// |----------|-----------------------------------------------|
    /// | 0        | word  base   = rt                             |
    /// | 1        | byte  base+1 = rt, half base+2 = rt >> 8      |
    /// | 2        | half  base+2 = rt                             |
    /// | 3        | byte  base+3 = rt                             |
    ///
    /// Format: swr rt, offset(rs)
    pub(crate) fn op_swr<B: Bus>(&mut self, instr: u32, bus: &mut B) -> Result<()> {
        let (_, rs, rt, imm) = decode_i_type(instr);
        let offset = (imm as i16) as i32;
        let addr = self.reg(rs).wrapping_add(offset as u32);

        let base = addr & !0x3;
        let value = self.reg(rt);

        match addr & 0x3 {
            0 => bus.write32(base, value),
            1 => {
                bus.write8(base + 1, value as u8);
                bus.write16(base + 2, (value >> 8) as u16);
            }
            2 => bus.write16(base + 2, value as u16),
            _ => bus.write8(base + 3, value as u8),
        }
        Ok(())
    }
}
