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

use super::{itype, setup};
use crate::core::error::StepResult;

#[test]
fn test_lb_sign_extends() {
    let (mut cpu, mut ram) = setup(&[itype(0x20, 1, 2, 0)]); // lb r2, 0(r1)
    ram.bytes[0x1000] = 0x80;
    cpu.set_reg(1, 0x1000);

    assert_eq!(cpu.step(&mut ram), StepResult::Ok);
    assert_eq!(cpu.reg(2), 0xFFFF_FF80);
}

#[test]
fn test_lbu_zero_extends() {
    let (mut cpu, mut ram) = setup(&[itype(0x24, 1, 2, 0)]); // lbu r2, 0(r1)
    ram.bytes[0x1000] = 0x80;
    cpu.set_reg(1, 0x1000);

    assert_eq!(cpu.step(&mut ram), StepResult::Ok);
    assert_eq!(cpu.reg(2), 0x80);
}

#[test]
fn test_lh_sign_extends_and_lhu_does_not() {
    let (mut cpu, mut ram) = setup(&[itype(0x21, 1, 2, 0), itype(0x25, 1, 3, 0)]);
    ram.bytes[0x1000] = 0x34;
    ram.bytes[0x1001] = 0x82;
    cpu.set_reg(1, 0x1000);

    assert_eq!(cpu.step(&mut ram), StepResult::Ok);
    assert_eq!(cpu.reg(2), 0xFFFF_8234);

    assert_eq!(cpu.step(&mut ram), StepResult::Ok);
    assert_eq!(cpu.reg(3), 0x0000_8234);
}

#[test]
fn test_lh_misaligned_raises_without_touching_bus_or_register() {
    let (mut cpu, mut ram) = setup(&[itype(0x21, 1, 2, 1)]); // lh r2, 1(r1)
    cpu.set_reg(1, 0x1000);
    cpu.set_reg(2, 0x5555_5555);

    assert_eq!(cpu.step(&mut ram), StepResult::ReadAddressError);
    // The halfword reader was never invoked and r2 is unchanged
    assert_eq!(ram.half_reads, 0);
    assert_eq!(cpu.reg(2), 0x5555_5555);
    // pc has still advanced past the faulting instruction
    assert_eq!(cpu.pc(), 4);
}

#[test]
fn test_lw_misaligned_raises() {
    for offset in [1u16, 2, 3] {
        let (mut cpu, mut ram) = setup(&[itype(0x23, 1, 2, offset)]);
        cpu.set_reg(1, 0x1000);
        let fetches = 1;

        assert_eq!(cpu.step(&mut ram), StepResult::ReadAddressError);
        assert_eq!(cpu.reg(2), 0);
        // Only the instruction fetch reached the word reader
        assert_eq!(ram.word_reads, fetches);
    }
}

#[test]
fn test_sw_lw_roundtrip() {
    let (mut cpu, mut ram) = setup(&[itype(0x2B, 1, 2, 0x100), itype(0x23, 1, 3, 0x100)]);
    cpu.set_reg(1, 0x2000);
    cpu.set_reg(2, 0xDEAD_BEEF);

    assert_eq!(cpu.step(&mut ram), StepResult::Ok);
    assert_eq!(ram.word_at(0x2100), 0xDEAD_BEEF);

    assert_eq!(cpu.step(&mut ram), StepResult::Ok);
    assert_eq!(cpu.reg(3), 0xDEAD_BEEF);
}

#[test]
fn test_sh_misaligned_raises_without_touching_bus() {
    let (mut cpu, mut ram) = setup(&[itype(0x29, 1, 2, 1)]); // sh r2, 1(r1)
    cpu.set_reg(1, 0);
    cpu.set_reg(2, 0x1234);

    assert_eq!(cpu.step(&mut ram), StepResult::WriteAddressError);
    assert_eq!(ram.half_writes, 0);
}

#[test]
fn test_sb_and_sh_store_low_bits() {
    let (mut cpu, mut ram) = setup(&[itype(0x28, 1, 2, 0), itype(0x29, 1, 2, 2)]);
    cpu.set_reg(1, 0x3000);
    cpu.set_reg(2, 0xAABB_CCDD);

    assert_eq!(cpu.step(&mut ram), StepResult::Ok);
    assert_eq!(ram.bytes[0x3000], 0xDD);

    assert_eq!(cpu.step(&mut ram), StepResult::Ok);
    assert_eq!(ram.bytes[0x3002], 0xDD);
    assert_eq!(ram.bytes[0x3003], 0xCC);
}

#[test]
fn test_negative_load_offset() {
    let (mut cpu, mut ram) = setup(&[itype(0x23, 1, 2, 0xFFFC)]); // lw r2, -4(r1)
    ram.load_instr(0x0FFC, 0x4433_2211);
    cpu.set_reg(1, 0x1000);

    assert_eq!(cpu.step(&mut ram), StepResult::Ok);
    assert_eq!(cpu.reg(2), 0x4433_2211);
}

#[test]
fn test_lwl_all_offsets() {
    // Word at 0x1000 is 0x44332211; initial rt = 0xAABBCCDD
    let cases = [
        (0u16, (0xAABB_CCDD & 0x00FF_FFFF) | (0x4433_2211 << 24)),
        (1, (0xAABB_CCDD & 0x0000_FFFF) | (0x4433_2211 << 16)),
        (2, (0xAABB_CCDD & 0x0000_00FF) | (0x4433_2211 << 8)),
        (3, 0x4433_2211),
    ];

    for (offset, expected) in cases {
        let (mut cpu, mut ram) = setup(&[itype(0x22, 1, 5, offset)]); // lwl r5
        ram.load_instr(0x1000, 0x4433_2211);
        cpu.set_reg(1, 0x1000);
        cpu.set_reg(5, 0xAABB_CCDD);

        assert_eq!(cpu.step(&mut ram), StepResult::Ok);
        assert_eq!(cpu.reg(5), expected, "offset {offset}");
    }
}

#[test]
fn test_lwr_all_offsets() {
    let cases = [
        (0u16, 0x4433_2211_u32),
        (1, (0xAABB_CCDD & 0xFF00_0000) | (0x4433_2211 >> 8)),
        (2, (0xAABB_CCDD & 0xFFFF_0000) | (0x4433_2211 >> 16)),
        (3, (0xAABB_CCDD & 0xFFFF_FF00) | (0x4433_2211 >> 24)),
    ];

    for (offset, expected) in cases {
        let (mut cpu, mut ram) = setup(&[itype(0x26, 1, 5, offset)]); // lwr r5
        ram.load_instr(0x1000, 0x4433_2211);
        cpu.set_reg(1, 0x1000);
        cpu.set_reg(5, 0xAABB_CCDD);

        assert_eq!(cpu.step(&mut ram), StepResult::Ok);
        assert_eq!(cpu.reg(5), expected, "offset {offset}");
    }
}

#[test]
fn test_lwl_offset_2_literal() {
    // Memory bytes 0x11 0x22 0x33 0x44 at 0x1000, r5 initially 0:
    // lwl at offset 2 keeps nothing above the low byte and shifts the
    // word left by 8, giving 0x33221100.
    let (mut cpu, mut ram) = setup(&[itype(0x22, 1, 5, 2)]);
    ram.bytes[0x1000..0x1004].copy_from_slice(&[0x11, 0x22, 0x33, 0x44]);
    cpu.set_reg(1, 0x1000);

    assert_eq!(cpu.step(&mut ram), StepResult::Ok);
    assert_eq!(cpu.reg(5), 0x3322_1100);
}

#[test]
fn test_swl_all_offsets() {
    // rt = 0x44332211 stored over memory preset to 0xAA
    let cases: [(u16, [u8; 4]); 4] = [
        (0, [0x44, 0xAA, 0xAA, 0xAA]),
        (1, [0x33, 0x44, 0xAA, 0xAA]),
        (2, [0x22, 0x33, 0x44, 0xAA]),
        (3, [0x11, 0x22, 0x33, 0x44]),
    ];

    for (offset, expected) in cases {
        let (mut cpu, mut ram) = setup(&[itype(0x2A, 1, 5, offset)]); // swl r5
        ram.bytes[0x1000..0x1004].fill(0xAA);
        cpu.set_reg(1, 0x1000);
        cpu.set_reg(5, 0x4433_2211);

        assert_eq!(cpu.step(&mut ram), StepResult::Ok);
        assert_eq!(&ram.bytes[0x1000..0x1004], &expected, "offset {offset}");
    }
}

#[test]
fn test_swr_all_offsets() {
    let cases: [(u16, [u8; 4]); 4] = [
        (0, [0x11, 0x22, 0x33, 0x44]),
        (1, [0xAA, 0x11, 0x22, 0x33]),
        (2, [0xAA, 0xAA, 0x11, 0x22]),
        (3, [0xAA, 0xAA, 0xAA, 0x11]),
    ];

    for (offset, expected) in cases {
        let (mut cpu, mut ram) = setup(&[itype(0x2E, 1, 5, offset)]); // swr r5
        ram.bytes[0x1000..0x1004].fill(0xAA);
        cpu.set_reg(1, 0x1000);
        cpu.set_reg(5, 0x4433_2211);

        assert_eq!(cpu.step(&mut ram), StepResult::Ok);
        assert_eq!(&ram.bytes[0x1000..0x1004], &expected, "offset {offset}");
    }
}

#[test]
fn test_unaligned_store_load_roundtrip() {
    // The architectural unaligned-word idiom: swr at A plus swl at A + 3
    // stores a full word at any byte address, and lwr/lwl at the same
    // addresses read it back.
    for offset in 0u16..4 {
        let (mut cpu, mut ram) = setup(&[
            itype(0x2E, 1, 5, offset),     // swr r5, A(r1)
            itype(0x2A, 1, 5, offset + 3), // swl r5, A+3(r1)
            itype(0x26, 1, 6, offset),     // lwr r6, A(r1)
            itype(0x22, 1, 6, offset + 3), // lwl r6, A+3(r1)
        ]);
        cpu.set_reg(1, 0x1000);
        cpu.set_reg(5, 0x8765_4321);

        for _ in 0..4 {
            assert_eq!(cpu.step(&mut ram), StepResult::Ok);
        }
        assert_eq!(cpu.reg(6), 0x8765_4321, "offset {offset}");

        // The bytes landed at the unaligned address itself
        let a = 0x1000 + offset as usize;
        assert_eq!(&ram.bytes[a..a + 4], &[0x21, 0x43, 0x65, 0x87]);
    }
}

#[test]
fn test_ll_and_sc_report_reserved() {
    let (mut cpu, mut ram) = setup(&[itype(0x30, 1, 2, 0), itype(0x38, 1, 2, 0)]);
    cpu.set_reg(1, 0x1000);
    cpu.set_reg(2, 0x1234_5678);

    // ll: no register write
    assert_eq!(cpu.step(&mut ram), StepResult::ReservedInstruction);
    assert_eq!(cpu.reg(2), 0x1234_5678);

    // sc: no memory write
    assert_eq!(cpu.step(&mut ram), StepResult::ReservedInstruction);
    assert_eq!(ram.word_at(0x1000), 0);
}
