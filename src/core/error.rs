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

//! Result codes and architectural exceptions

use thiserror::Error;

/// Result type for instruction execution
pub type Result<T> = std::result::Result<T, Exception>;

/// Architectural exception raised while executing a single instruction.
///
/// Exceptions abandon the rest of the instruction: a misaligned access
/// suppresses the memory callback and the destination register write, an
/// overflowing `add`/`addi`/`sub` leaves the destination untouched.
///
/// `Break` and `Syscall` carry the 20-bit code field from instruction bits
/// [25:6]; `Trap` carries the 10-bit code field from bits [15:6].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Exception {
    /// Misaligned halfword or word read (including instruction fetch)
    #[error("read address error (misaligned load or fetch)")]
    ReadAddressError,

    /// Misaligned halfword or word write
    #[error("write address error (misaligned store)")]
    WriteAddressError,

    /// Signed overflow in `add`, `addi` or `sub`
    #[error("integer overflow")]
    IntegerOverflow,

    /// `break` executed
    #[error("breakpoint (code {0:#07x})")]
    Break(u32),

    /// `syscall` executed
    #[error("system call (code {0:#07x})")]
    Syscall(u32),

    /// A conditional trap condition held
    #[error("trap (code {0:#05x})")]
    Trap(u32),
}

/// Outcome of executing one instruction.
///
/// Everything except `Ok` and `ReservedInstruction` corresponds to an
/// [`Exception`] variant; for `Break`, `Syscall` and `Trap` the code payload
/// is retrievable through [`Cpu::call_code`](crate::core::Cpu::call_code)
/// until the next such result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepResult {
    /// Instruction decoded and executed without exception
    Ok,
    /// Bit pattern not recognised by any decoder family
    ReservedInstruction,
    /// Misaligned halfword/word read or instruction fetch
    ReadAddressError,
    /// Misaligned halfword/word write
    WriteAddressError,
    /// Signed overflow in `add`, `addi` or `sub`
    IntegerOverflow,
    /// `break` executed
    Break,
    /// `syscall` executed
    Syscall,
    /// A conditional trap fired
    Trap,
}

impl StepResult {
    /// Returns true when the step completed without any architectural event.
    #[inline(always)]
    pub fn is_ok(self) -> bool {
        self == StepResult::Ok
    }
}
