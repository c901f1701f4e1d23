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

use crate::core::error::{Exception, Result, StepResult};
use crate::core::memory::{self, Bus};

mod decode;
mod instructions;

#[cfg(test)]
mod tests;

/// MIPS32r2 interpreter core
///
/// One instance holds the architectural state of a single virtual CPU:
/// the general-purpose register file, the program counter, the HI/LO
/// multiply accumulator and the branch-delay shadow. Memory is external;
/// every [`step`](Cpu::step) borrows the host's [`Bus`] for the duration
/// of that instruction only.
///
/// # Example
/// ```ignore
/// let mut cpu = Cpu::new(0xBFC0_0000);
/// loop {
///     match cpu.step(&mut bus) {
///         StepResult::Ok => {}
///         StepResult::Syscall => host_syscall(cpu.call_code()),
///         other => panic!("unexpected result: {other:?}"),
///     }
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cpu {
    /// General purpose registers (r0-r31)
    ///
    /// r0 is hardwired to always return 0
    regs: [u32; 32],

    /// Program counter; address of the next instruction to fetch
    pc: u32,

    /// Multiply/divide accumulator. LO is the low half, HI the high half.
    acc: u64,

    /// Pending branch target (valid while `branch_pending` is set)
    branch_pc: u32,

    /// True iff the previous instruction scheduled a branch whose delay
    /// slot is the instruction about to execute
    branch_pending: bool,

    /// Code field of the most recent break/syscall/trap
    code: u32,
}

impl Cpu {
    /// Create a new CPU with all state zeroed and `pc` at the reset vector.
    ///
    /// # Example
    /// ```
    /// use mipsr2::core::Cpu;
    ///
    /// let cpu = Cpu::new(0xBFC0_0000);
    /// assert_eq!(cpu.pc(), 0xBFC0_0000);
    /// assert_eq!(cpu.reg(0), 0);
    /// ```
    pub fn new(reset_pc: u32) -> Self {
        Self {
            regs: [0u32; 32],
            pc: reset_pc,
            acc: 0,
            branch_pc: 0,
            branch_pending: false,
            code: 0,
        }
    }

    /// Reset the CPU to its initial state with `pc` at `reset_pc`.
    ///
    /// Equivalent to replacing the instance with `Cpu::new(reset_pc)`.
    pub fn reset(&mut self, reset_pc: u32) {
        *self = Self::new(reset_pc);
    }

    /// Read a general purpose register.
    ///
    /// r0 always returns 0.
    #[inline(always)]
    pub fn reg(&self, index: u8) -> u32 {
        if index == 0 {
            0
        } else {
            self.regs[index as usize]
        }
    }

    /// Write a general purpose register.
    ///
    /// Writes to r0 are ignored.
    #[inline(always)]
    pub fn set_reg(&mut self, index: u8, value: u32) {
        if index != 0 {
            self.regs[index as usize] = value;
        }
    }

    /// Current program counter.
    #[inline(always)]
    pub fn pc(&self) -> u32 {
        self.pc
    }

    /// Low half of the multiply/divide accumulator (the LO register).
    #[inline(always)]
    pub fn lo(&self) -> u32 {
        self.acc as u32
    }

    /// High half of the multiply/divide accumulator (the HI register).
    #[inline(always)]
    pub fn hi(&self) -> u32 {
        (self.acc >> 32) as u32
    }

    /// Full 64-bit multiply/divide accumulator, `(hi << 32) | lo`.
    #[inline(always)]
    pub fn acc(&self) -> u64 {
        self.acc
    }

    pub(crate) fn set_lo(&mut self, value: u32) {
        self.acc = (self.acc & 0xFFFF_FFFF_0000_0000) | u64::from(value);
    }

    pub(crate) fn set_hi(&mut self, value: u32) {
        self.acc = (self.acc & 0x0000_0000_FFFF_FFFF) | (u64::from(value) << 32);
    }

    /// Code payload captured by the most recent break, syscall or trap.
    ///
    /// 20 bits (instruction bits [25:6]) for break/syscall, 10 bits
    /// (bits [15:6]) for traps. Only meaningful immediately after a step
    /// returned [`StepResult::Break`], [`StepResult::Syscall`] or
    /// [`StepResult::Trap`].
    pub fn call_code(&self) -> u32 {
        self.code
    }

    /// Execute exactly one instruction.
    ///
    /// Fetches the word at `pc`, advances control (consuming a pending
    /// branch if the previous instruction scheduled one), dispatches on the
    /// primary opcode and reports the outcome. Exceptions do not stick: the
    /// next call starts clean, and the host decides whether and where to
    /// resume.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> StepResult {
        match self.execute(bus) {
            Ok(true) => StepResult::Ok,
            Ok(false) => StepResult::ReservedInstruction,
            Err(exception) => self.raise(exception),
        }
    }

    fn execute<B: Bus>(&mut self, bus: &mut B) -> Result<bool> {
        // A misaligned pc aborts the step before any state changes.
        let instr = memory::read_word(bus, self.pc)?;

        // The branch target recorded by the previous instruction takes
        // effect after the delay slot's own fetch, which just happened.
        if self.branch_pending {
            self.branch_pending = false;
            self.pc = self.branch_pc;
        } else {
            self.pc = self.pc.wrapping_add(4);
        }

        self.execute_instruction(instr, bus)
    }

    fn raise(&mut self, exception: Exception) -> StepResult {
        match exception {
            Exception::ReadAddressError => StepResult::ReadAddressError,
            Exception::WriteAddressError => StepResult::WriteAddressError,
            Exception::IntegerOverflow => StepResult::IntegerOverflow,
            Exception::Break(code) => {
                self.code = code;
                StepResult::Break
            }
            Exception::Syscall(code) => {
                self.code = code;
                StepResult::Syscall
            }
            Exception::Trap(code) => {
                self.code = code;
                StepResult::Trap
            }
        }
    }

    /// Schedule a branch to an absolute target.
    ///
    /// The branch takes effect after the next instruction (the delay slot)
    /// has executed. Scheduling from within a delay slot overwrites the
    /// previous target.
    pub(in crate::core::cpu) fn branch_abs(&mut self, target: u32) {
        self.branch_pc = target;
        self.branch_pending = true;
    }

    /// Schedule a PC-relative branch.
    ///
    /// At the time a branch instruction executes, `self.pc` already holds
    /// the delay-slot address, so the target is the architectural
    /// "delay-slot PC + offset". `offset` is the sign-extended immediate
    /// shifted left by 2.
    pub(in crate::core::cpu) fn branch_rel(&mut self, offset: i32) {
        self.branch_pc = self.pc.wrapping_add(offset as u32);
        self.branch_pending = true;
    }
}
