//! Emulator core for a 64-bit A64-style instruction subset.
//!
//! The crate owns both halves of the encoding contract: the
//! [`instructions`](instructions/index.html) module builds 32-bit words from
//! structured fields, and the [`Processor`](processor/struct.Processor.html)
//! fetches, classifies and executes exactly those words. The assembler crate
//! sits on top of the constructors, so anything it emits is decodable here by
//! construction.
//!
//! A program is a flat sequence of little-endian 32-bit words loaded at
//! address zero of a 2 MiB [`Memory`](memory/struct.Memory.html). Execution
//! starts with `PC = 0` and ends when the halt word `0x8A000000` is fetched.

#[macro_use]
extern crate num_derive;

pub mod bits;
pub mod constants;
pub mod instructions;
pub mod memory;
pub mod processor;

pub use crate::memory::Memory;
pub use crate::processor::{ExitCode, Processor, Pstate};

/// A single instruction word.
pub type Word = u32;

/// Byte order of instruction words and memory accesses.
pub type Endian = byteorder::LittleEndian;
