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

//! Algebraic-law property tests driven through the public step interface.

mod common;

use common::{asm, Ram};
use mipsr2::core::{Cpu, StepResult};
use proptest::prelude::*;

/// Execute `program` at address 0 with registers preset via `init`.
fn run(program: &[u32], init: impl FnOnce(&mut Cpu)) -> (Cpu, Ram) {
    let mut ram = Ram::new(0x20000);
    ram.load_program(0, program);
    let mut cpu = Cpu::new(0);
    init(&mut cpu);
    for _ in 0..program.len() {
        assert_eq!(cpu.step(&mut ram), StepResult::Ok);
    }
    (cpu, ram)
}

proptest! {
    #[test]
    fn wsbh_is_an_involution(value: u32) {
        // wsbh r2, r1 ; wsbh r3, r2
        let program = [
            asm::special(0, 1, 2, 0x02, 0x20) | (0x1F << 26),
            asm::special(0, 2, 3, 0x02, 0x20) | (0x1F << 26),
        ];
        let (cpu, _) = run(&program, |cpu| cpu.set_reg(1, value));
        prop_assert_eq!(cpu.reg(3), value);
    }

    #[test]
    fn seb_matches_masked_sign_extension(value: u32) {
        let program = [asm::special(0, 1, 2, 0x10, 0x20) | (0x1F << 26)];
        let (cpu, _) = run(&program, |cpu| cpu.set_reg(1, value));
        prop_assert_eq!(cpu.reg(2), (value as u8 as i8) as i32 as u32);
    }

    #[test]
    fn seh_matches_masked_sign_extension(value: u32) {
        let program = [asm::special(0, 1, 2, 0x18, 0x20) | (0x1F << 26)];
        let (cpu, _) = run(&program, |cpu| cpu.set_reg(1, value));
        prop_assert_eq!(cpu.reg(2), (value as u16 as i16) as i32 as u32);
    }

    #[test]
    fn rotr_matches_reference_for_all_counts(value: u32, shamt in 0u8..32) {
        // rotr r2, r1, shamt
        let program = [asm::special(1, 1, 2, shamt, 0x02)];
        let (cpu, _) = run(&program, |cpu| cpu.set_reg(1, value));

        // Reference rotation computed in 64 bits to sidestep shift-by-32
        let wide = (u64::from(value) << 32) | u64::from(value);
        let expected = (wide >> shamt) as u32;
        prop_assert_eq!(cpu.reg(2), expected);
    }

    #[test]
    fn ext_then_ins_reproduces_the_field(value: u32, lsb in 0u8..32, width in 1u8..=32) {
        // Keep the geometry legal: lsb + width <= 32
        prop_assume!(u32::from(lsb) + u32::from(width) <= 32);
        let msb = lsb + width - 1;

        // ext r2, r1, lsb, width ; ins into zeroed r3 at the same spot
        let program = [
            asm::special(1, 2, msb - lsb, lsb, 0x00) | (0x1F << 26),
            asm::special(2, 3, msb, lsb, 0x04) | (0x1F << 26),
        ];
        let (cpu, _) = run(&program, |cpu| cpu.set_reg(1, value));

        let mask = if width == 32 {
            u32::MAX
        } else {
            ((1u32 << width) - 1) << lsb
        };
        prop_assert_eq!(cpu.reg(3), value & mask);
    }

    #[test]
    fn sw_lw_roundtrip(value: u32, slot in 0u16..0x1000) {
        let addr = 0x4000 + slot * 4;
        let program = [asm::sw(1, 2, addr), asm::lw(3, 2, addr)];
        let (cpu, ram) = run(&program, |cpu| cpu.set_reg(1, value));

        prop_assert_eq!(cpu.reg(3), value);
        prop_assert_eq!(ram.word_at(u32::from(addr)), value);
    }

    #[test]
    fn sb_lbu_roundtrip(value: u32, offset in 0u16..0x1000) {
        let addr = 0x4000 + offset;
        let program = [
            asm::itype(0x28, 2, 1, addr), // sb r1, addr(r2)
            asm::itype(0x24, 2, 3, addr), // lbu r3, addr(r2)
        ];
        let (cpu, _) = run(&program, |cpu| cpu.set_reg(1, value));
        prop_assert_eq!(cpu.reg(3), value & 0xFF);
    }

    #[test]
    fn unaligned_word_roundtrip(value: u32, addr in 0x4000u16..0x5000) {
        // swr A / swl A+3 store a word at any byte address; lwr/lwl at the
        // same pair of addresses read it back.
        let program = [
            asm::itype(0x2E, 0, 1, addr),     // swr r1, A(r0)
            asm::itype(0x2A, 0, 1, addr + 3), // swl r1, A+3(r0)
            asm::itype(0x26, 0, 2, addr),     // lwr r2, A(r0)
            asm::itype(0x22, 0, 2, addr + 3), // lwl r2, A+3(r0)
        ];
        let (cpu, ram) = run(&program, |cpu| cpu.set_reg(1, value));

        prop_assert_eq!(cpu.reg(2), value);
        for i in 0..4 {
            prop_assert_eq!(
                ram.byte_at(u32::from(addr) + i),
                (value >> (8 * i)) as u8
            );
        }
    }

    #[test]
    fn addu_subu_invert(a: u32, b: u32) {
        // addu r3, r1, r2 ; subu r4, r3, r2
        let program = [asm::addu(3, 1, 2), asm::special(3, 2, 4, 0, 0x23)];
        let (cpu, _) = run(&program, |cpu| {
            cpu.set_reg(1, a);
            cpu.set_reg(2, b);
        });
        prop_assert_eq!(cpu.reg(4), a);
    }

    #[test]
    fn accumulator_invariant_holds_after_multiplies(a: u32, b: u32) {
        let program = [
            asm::special(1, 2, 0, 0, 0x18), // mult
            asm::special(1, 2, 0, 0, 0x19), // multu
        ];
        let (cpu, _) = run(&program, |cpu| {
            cpu.set_reg(1, a);
            cpu.set_reg(2, b);
        });
        prop_assert_eq!(
            (u64::from(cpu.hi()) << 32) | u64::from(cpu.lo()),
            cpu.acc()
        );
        prop_assert_eq!(cpu.acc(), u64::from(a) * u64::from(b));
    }
}
