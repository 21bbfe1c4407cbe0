//! Raw Linux system calls backing the harness runtime.

#![allow(unsafe_code)]

use core::arch::asm;

use harness::{Runtime, Stream};

#[cfg(not(any(target_arch = "riscv64", target_arch = "x86_64")))]
compile_error!("freestanding harness supports riscv64 and x86_64 Linux only");

#[cfg(target_arch = "riscv64")]
mod nr {
    pub const WRITE: usize = 64;
    pub const EXIT: usize = 93;
}

#[cfg(target_arch = "x86_64")]
mod nr {
    pub const WRITE: usize = 1;
    pub const EXIT: usize = 60;
}

/// # Safety
/// `n` and its arguments must form a valid system call.
#[cfg(target_arch = "riscv64")]
unsafe fn syscall3(n: usize, a0: usize, a1: usize, a2: usize) -> isize {
    let ret: isize;
    // SAFETY: register assignment follows the riscv64 Linux syscall ABI.
    unsafe {
        asm!(
            "ecall",
            in("a7") n,
            inlateout("a0") a0 => ret,
            in("a1") a1,
            in("a2") a2,
            options(nostack),
        );
    }
    ret
}

/// # Safety
/// `n` and its arguments must form a valid system call.
#[cfg(target_arch = "x86_64")]
unsafe fn syscall3(n: usize, a0: usize, a1: usize, a2: usize) -> isize {
    let ret: isize;
    // SAFETY: register assignment follows the x86_64 Linux syscall ABI;
    // the kernel clobbers rcx and r11.
    unsafe {
        asm!(
            "syscall",
            inlateout("rax") n => ret,
            in("rdi") a0,
            in("rsi") a1,
            in("rdx") a2,
            lateout("rcx") _,
            lateout("r11") _,
            options(nostack),
        );
    }
    ret
}

/// `write(2)` until every byte is out or the kernel reports an error.
pub fn write(fd: i32, mut bytes: &[u8]) {
    while !bytes.is_empty() {
        // SAFETY: the pointer and length describe a live, readable slice.
        let written =
            unsafe { syscall3(nr::WRITE, fd as usize, bytes.as_ptr() as usize, bytes.len()) };
        if written <= 0 {
            return;
        }
        bytes = &bytes[written as usize..];
    }
}

/// `exit(2)`.
pub fn exit(code: i32) -> ! {
    // SAFETY: exit takes a plain integer and does not return.
    unsafe {
        syscall3(nr::EXIT, code as usize, 0, 0);
    }
    loop {
        core::hint::spin_loop();
    }
}

/// Runtime backed directly by the kernel.
pub struct Syscalls;

impl Runtime for Syscalls {
    fn write_bytes(&mut self, stream: Stream, bytes: &[u8]) {
        write(stream.fd(), bytes);
    }

    fn terminate(&mut self, code: i32) -> ! {
        exit(code)
    }
}
