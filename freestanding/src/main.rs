//! Freestanding harness binary.
//!
//! No libc startup, no allocator, no formatting machinery: the process entry
//! point aligns the stack and calls straight into the harness, which talks to
//! the kernel only through `write` and `exit`.

#![no_std]
#![no_main]

mod sys;

use harness::Suite;
use sys::Syscalls;

extern "C" fn harness_main() -> ! {
    harness::run(&mut Syscalls, Suite::Core)
}

#[cfg(target_arch = "riscv64")]
core::arch::global_asm!(
    ".globl _start",
    "_start:",
    ".option push",
    ".option norelax",
    "la gp, __global_pointer$",
    ".option pop",
    "andi sp, sp, -16",
    "call {main}",
    main = sym harness_main,
);

#[cfg(target_arch = "x86_64")]
core::arch::global_asm!(
    ".globl _start",
    "_start:",
    "xor ebp, ebp",
    "and rsp, -16",
    "call {main}",
    "ud2",
    main = sym harness_main,
);

#[panic_handler]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    sys::exit(255)
}
