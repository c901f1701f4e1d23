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

use criterion::{criterion_group, criterion_main, Criterion};
use mipsr2::core::{Bus, Cpu};
use std::hint::black_box;

struct Ram(Vec<u8>);

impl Ram {
    fn new(size: usize) -> Self {
        Self(vec![0; size])
    }

    fn load_program(&mut self, addr: u32, program: &[u32]) {
        for (i, instr) in program.iter().enumerate() {
            let at = addr as usize + i * 4;
            self.0[at..at + 4].copy_from_slice(&instr.to_le_bytes());
        }
    }
}

impl Bus for Ram {
    fn read8(&mut self, addr: u32) -> u8 {
        self.0[addr as usize]
    }

    fn read16(&mut self, addr: u32) -> u16 {
        let addr = addr as usize;
        u16::from_le_bytes(self.0[addr..addr + 2].try_into().unwrap())
    }

    fn read32(&mut self, addr: u32) -> u32 {
        let addr = addr as usize;
        u32::from_le_bytes(self.0[addr..addr + 4].try_into().unwrap())
    }

    fn write8(&mut self, addr: u32, value: u8) {
        self.0[addr as usize] = value;
    }

    fn write16(&mut self, addr: u32, value: u16) {
        let addr = addr as usize;
        self.0[addr..addr + 2].copy_from_slice(&value.to_le_bytes());
    }

    fn write32(&mut self, addr: u32, value: u32) {
        let addr = addr as usize;
        self.0[addr..addr + 4].copy_from_slice(&value.to_le_bytes());
    }
}

fn cpu_step_benchmark(c: &mut Criterion) {
    c.bench_function("cpu_step_nop", |b| {
        let mut cpu = Cpu::new(0);
        let mut ram = Ram::new(0x10000);
        // NOP = 0x00000000 (SLL r0, r0, 0); RAM is already zeroed

        b.iter(|| {
            cpu.reset(0);
            black_box(cpu.step(&mut ram));
        });
    });

    c.bench_function("cpu_step_arith_mix", |b| {
        let mut cpu = Cpu::new(0);
        let mut ram = Ram::new(0x10000);
        ram.load_program(
            0,
            &[
                0x2401_0007, // addiu r1, r0, 7
                0x2402_0003, // addiu r2, r0, 3
                0x0022_1821, // addu r3, r1, r2
                0x0022_0018, // mult r1, r2
                0x0000_2012, // mflo r4
                0x0064_2826, // xor r5, r3, r4
                0x0005_2A02, // srl r5, r5, 8
                0xAC05_1000, // sw r5, 0x1000(r0)
            ],
        );

        b.iter(|| {
            cpu.reset(0);
            for _ in 0..8 {
                black_box(cpu.step(&mut ram));
            }
        });
    });
}

fn cpu_register_access_benchmark(c: &mut Criterion) {
    c.bench_function("cpu_register_read", |b| {
        let cpu = Cpu::new(0);
        b.iter(|| {
            for i in 0..32 {
                black_box(cpu.reg(i));
            }
        });
    });

    c.bench_function("cpu_register_write", |b| {
        let mut cpu = Cpu::new(0);
        b.iter(|| {
            for i in 0..32 {
                cpu.set_reg(i, black_box(u32::from(i) * 100));
            }
        });
    });
}

criterion_group!(benches, cpu_step_benchmark, cpu_register_access_benchmark);
criterion_main!(benches);
