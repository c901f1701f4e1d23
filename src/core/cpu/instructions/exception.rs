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

//! Exception-raising instructions: syscall, break and the trap families

use super::super::Cpu;
use crate::core::error::{Exception, Result};

/// 20-bit code field of break/syscall, instruction bits [25:6].
#[inline(always)]
fn call_code(instr: u32) -> u32 {
    (instr >> 6) & 0x000F_FFFF
}

/// 10-bit code field of the trap instructions, bits [15:6].
///
/// For the trap-on-immediate family these bits overlap the immediate
/// operand; they are captured all the same so the host can tell trap
/// sites apart.
#[inline(always)]
fn trap_code(instr: u32) -> u32 {
    (instr >> 6) & 0x3FF
}

impl Cpu {
    /// SYSCALL: System Call
    ///
    /// Always raises; the 20-bit code is reported to the host through
    /// [`call_code`](Cpu::call_code).
    ///
    /// Format: syscall code
    pub(crate) fn op_syscall(&mut self, instr: u32) -> Result<()> {
        Err(Exception::Syscall(call_code(instr)))
    }

    /// BREAK: Breakpoint
    ///
    /// Format: break code
    pub(crate) fn op_break(&mut self, instr: u32) -> Result<()> {
        Err(Exception::Break(call_code(instr)))
    }

    // === Register Trap Instructions ===
    //
    // Each raises a trap exception iff its condition holds; otherwise the
    // instruction has no effect.

    /// TGE: Trap if Greater or Equal (signed)
    ///
    /// Format: tge rs, rt
    pub(crate) fn op_tge(&mut self, rs: u8, rt: u8, instr: u32) -> Result<()> {
        if (self.reg(rs) as i32) >= (self.reg(rt) as i32) {
            return Err(Exception::Trap(trap_code(instr)));
        }
        Ok(())
    }

    /// TGEU: Trap if Greater or Equal Unsigned
    ///
    /// Format: tgeu rs, rt
    pub(crate) fn op_tgeu(&mut self, rs: u8, rt: u8, instr: u32) -> Result<()> {
        if self.reg(rs) >= self.reg(rt) {
            return Err(Exception::Trap(trap_code(instr)));
        }
        Ok(())
    }

    /// TLT: Trap if Less Than (signed)
    ///
    /// Format: tlt rs, rt
    pub(crate) fn op_tlt(&mut self, rs: u8, rt: u8, instr: u32) -> Result<()> {
        if (self.reg(rs) as i32) < (self.reg(rt) as i32) {
            return Err(Exception::Trap(trap_code(instr)));
        }
        Ok(())
    }

    /// TLTU: Trap if Less Than Unsigned
    ///
    /// Format: tltu rs, rt
    pub(crate) fn op_tltu(&mut self, rs: u8, rt: u8, instr: u32) -> Result<()> {
        if self.reg(rs) < self.reg(rt) {
            return Err(Exception::Trap(trap_code(instr)));
        }
        Ok(())
    }

    /// TEQ: Trap if Equal
    ///
    /// Format: teq rs, rt
    pub(crate) fn op_teq(&mut self, rs: u8, rt: u8, instr: u32) -> Result<()> {
        if self.reg(rs) == self.reg(rt) {
            return Err(Exception::Trap(trap_code(instr)));
        }
        Ok(())
    }

    /// TNE: Trap if Not Equal
    ///
    /// Format: tne rs, rt
    pub(crate) fn op_tne(&mut self, rs: u8, rt: u8, instr: u32) -> Result<()> {
        if self.reg(rs) != self.reg(rt) {
            return Err(Exception::Trap(trap_code(instr)));
        }
        Ok(())
    }

    // === Trap-on-Immediate Instructions (REGIMM) ===
    //
    // The comparison operand is the sign-extended immediate; the captured
    // code is bits [15:6] of the same immediate field.

    /// TGEI: Trap if Greater or Equal Immediate (signed)
    ///
    /// Format: tgei rs, imm
    pub(crate) fn op_tgei(&mut self, rs: u8, imm: u16) -> Result<()> {
        if (self.reg(rs) as i32) >= i32::from(imm as i16) {
            return Err(Exception::Trap(u32::from(imm >> 6)));
        }
        Ok(())
    }

    /// TGEIU: Trap if Greater or Equal Immediate Unsigned
    ///
    /// The immediate is sign-extended first, then compared unsigned.
    ///
    /// Format: tgeiu rs, imm
    pub(crate) fn op_tgeiu(&mut self, rs: u8, imm: u16) -> Result<()> {
        if self.reg(rs) >= (imm as i16) as u32 {
            return Err(Exception::Trap(u32::from(imm >> 6)));
        }
        Ok(())
    }

    /// TLTI: Trap if Less Than Immediate (signed)
    ///
    /// Format: tlti rs, imm
    pub(crate) fn op_tlti(&mut self, rs: u8, imm: u16) -> Result<()> {
        if (self.reg(rs) as i32) < i32::from(imm as i16) {
            return Err(Exception::Trap(u32::from(imm >> 6)));
        }
        Ok(())
    }

    /// TLTIU: Trap if Less Than Immediate Unsigned
    ///
    /// Format: tltiu rs, imm
    pub(crate) fn op_tltiu(&mut self, rs: u8, imm: u16) -> Result<()> {
        if self.reg(rs) < (imm as i16) as u32 {
            return Err(Exception::Trap(u32::from(imm >> 6)));
        }
        Ok(())
    }

    /// TEQI: Trap if Equal Immediate
    ///
    /// Format: teqi rs, imm
    pub(crate) fn op_teqi(&mut self, rs: u8, imm: u16) -> Result<()> {
        if self.reg(rs) == (imm as i16) as u32 {
            return Err(Exception::Trap(u32::from(imm >> 6)));
        }
        Ok(())
    }

    /// TNEI: Trap if Not Equal Immediate
    ///
    /// Format: tnei rs, imm
    pub(crate) fn op_tnei(&mut self, rs: u8, imm: u16) -> Result<()> {
        if self.reg(rs) != (imm as i16) as u32 {
            return Err(Exception::Trap(u32::from(imm >> 6)));
        }
        Ok(())
    }
}
