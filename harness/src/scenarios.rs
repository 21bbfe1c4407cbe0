//! Test case sequencer.
//!
//! Runs the scenario table in order, numbering every case from 1 with a single
//! counter that also spans the generated factorial family. Inputs go through
//! [`black_box`] so the operations execute on the target at run time instead
//! of being folded into constants by the compiler. Arithmetic wraps rather
//! than trapping, matching the architecture under test.

use core::hint::black_box;
use core::iter;

use crate::arith::{NonTrapping, Widen};
use crate::assert::{FailureCounter, assert_equal, begin_case};
use crate::runtime::Runtime;

/// Which scenario list to run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Suite {
    /// The reference list: 14 named scenarios followed by the factorial family.
    #[default]
    Core,
    /// `Core` plus overflow and wraparound scenarios.
    Extended,
}

/// Oracle and computed value for one case, both widened to 64 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    pub expected: u64,
    pub actual: u64,
}

impl Check {
    pub const fn new(expected: u64, actual: u64) -> Self {
        Self { expected, actual }
    }
}

struct Scenario {
    name: &'static str,
    compute: fn() -> Check,
}

/// `n!` for `n = 1..=19`.
pub const FACTORIALS: [u64; 19] = [
    1,
    2,
    6,
    24,
    120,
    720,
    5_040,
    40_320,
    362_880,
    3_628_800,
    39_916_800,
    479_001_600,
    6_227_020_800,
    87_178_291_200,
    1_307_674_368_000,
    20_922_789_888_000,
    355_687_428_096_000,
    6_402_373_705_728_000,
    121_645_100_408_832_000,
];

/// The factorial family checks `n = 1..=18`; the last table entry is not run.
pub const FACTORIAL_CASES: usize = FACTORIALS.len() - 1;

const FACTORIAL_NAME: &str = "Factorial";

const CORE: &[Scenario] = &[
    Scenario {
        name: "4/2",
        compute: || {
            let mut i: u64 = black_box(4);
            i = i.div_nt(black_box(2));
            Check::new(2, i)
        },
    },
    Scenario {
        name: "4<<2",
        compute: || {
            let mut j: u64 = black_box(4);
            j = j.wrapping_shl(black_box(2));
            Check::new(16, j)
        },
    },
    Scenario {
        name: "5/2",
        compute: || {
            let mut m: u64 = black_box(5);
            m = m.div_nt(black_box(2));
            Check::new(2, m)
        },
    },
    Scenario {
        name: "pdm",
        compute: || {
            let mut n: u64 = black_box(256);
            let o: u64 = black_box(128);
            n = n.wrapping_add(o);
            n = n.wrapping_mul(black_box(10));
            n = n.div_nt(black_box(19));
            Check::new(202, n)
        },
    },
    Scenario {
        name: "3000*7",
        compute: || {
            let n: u64 = black_box(3000);
            let m: u64 = black_box(7);
            Check::new(21_000, n.wrapping_mul(m))
        },
    },
    Scenario {
        name: "3000/7",
        compute: || {
            let n: u64 = black_box(3000);
            let m: u64 = black_box(7);
            Check::new(428, n.div_nt(m))
        },
    },
    Scenario {
        name: "DivZero (unsigned)",
        compute: || {
            let n: u32 = black_box(256);
            let m: u32 = black_box(0);
            Check::new(0xFFFF_FFFF, n.div_nt(m).widen())
        },
    },
    Scenario {
        name: "DivZero (signed)",
        compute: || {
            let n: i32 = black_box(256);
            let m: i32 = black_box(0);
            Check::new(0xFFFF_FFFF_FFFF_FFFF, n.div_nt(m).widen())
        },
    },
    Scenario {
        name: "DivZero (64b unsigned)",
        compute: || {
            let n: u64 = black_box(256);
            let m: u64 = black_box(0);
            Check::new(0xFFFF_FFFF_FFFF_FFFF, n.div_nt(m))
        },
    },
    Scenario {
        name: "DivZero (64b signed)",
        compute: || {
            let n: i64 = black_box(256);
            let m: i64 = black_box(0);
            Check::new(0xFFFF_FFFF_FFFF_FFFF, n.div_nt(m).widen())
        },
    },
    Scenario {
        name: "RemZero",
        compute: || {
            let n: u64 = black_box(256);
            let m: u64 = black_box(0);
            Check::new(256, n.rem_nt(m))
        },
    },
    Scenario {
        name: "1<<10",
        compute: || {
            let res = black_box(1u64).wrapping_shl(black_box(10));
            Check::new(0b100_0000_0000, res)
        },
    },
    Scenario {
        name: "SumGauss",
        compute: || {
            let bound: i32 = black_box(2048);
            let mut sum: u64 = 0;
            for i in 1..=bound {
                sum = sum.wrapping_add(i.widen());
            }
            Check::new(2_098_176, sum)
        },
    },
    Scenario {
        name: "MulGauss",
        compute: || {
            // Closed form of SumGauss, kept at the 32-bit width the loop bound uses.
            let bound: i32 = black_box(2048);
            let gauss = bound.wrapping_mul(bound.wrapping_add(1)).div_nt(2);
            Check::new(2_098_176, gauss.widen())
        },
    },
];

const EXTENDED: &[Scenario] = &[
    Scenario {
        name: "DivOverflow",
        compute: || {
            let n: i64 = black_box(i64::MIN);
            let m: i64 = black_box(-1);
            Check::new(0x8000_0000_0000_0000, n.div_nt(m).widen())
        },
    },
    Scenario {
        name: "RemOverflow",
        compute: || {
            let n: i64 = black_box(i64::MIN);
            let m: i64 = black_box(-1);
            Check::new(0, n.rem_nt(m).widen())
        },
    },
    Scenario {
        name: "DivOverflow (32b)",
        compute: || {
            let n: i32 = black_box(i32::MIN);
            let m: i32 = black_box(-1);
            Check::new(0xFFFF_FFFF_8000_0000, n.div_nt(m).widen())
        },
    },
    Scenario {
        name: "RemZero (32b signed)",
        compute: || {
            let n: i32 = black_box(-7);
            let m: i32 = black_box(0);
            Check::new(0xFFFF_FFFF_FFFF_FFF9, n.rem_nt(m).widen())
        },
    },
    Scenario {
        name: "MulWrap",
        compute: || {
            let n: u64 = black_box(u64::MAX);
            Check::new(0xFFFF_FFFF_FFFF_FFFE, n.wrapping_mul(black_box(2)))
        },
    },
    Scenario {
        name: "ShiftMask",
        compute: || {
            // Shift amounts use only the low 6 bits at 64-bit width.
            let res = black_box(1u64).wrapping_shl(black_box(65));
            Check::new(2, res)
        },
    },
];

impl Suite {
    fn extras(self) -> &'static [Scenario] {
        match self {
            Suite::Core => &[],
            Suite::Extended => EXTENDED,
        }
    }
}

/// Iterative `n!` with wrapping multiplication.
pub fn factorial(n: u64) -> u64 {
    let mut fact: u64 = 1;
    for i in 1..=n {
        fact = fact.wrapping_mul(i);
    }
    fact
}

/// Numbered case names for `suite`, in run order, without running anything.
pub fn case_names(suite: Suite) -> impl Iterator<Item = (u32, &'static str)> {
    let names = CORE
        .iter()
        .map(|scenario| scenario.name)
        .chain(iter::repeat_n(FACTORIAL_NAME, FACTORIAL_CASES))
        .chain(suite.extras().iter().map(|scenario| scenario.name));
    (1..).zip(names)
}

/// Total number of cases `suite` runs.
pub fn case_count(suite: Suite) -> usize {
    CORE.len() + FACTORIAL_CASES + suite.extras().len()
}

/// Drives the cases of a suite through the assertion engine.
///
/// Owns the case number and the failure counter for the whole run.
pub struct Sequencer<'r, R: Runtime + ?Sized> {
    rt: &'r mut R,
    last_number: u32,
    failures: FailureCounter,
}

impl<'r, R: Runtime + ?Sized> Sequencer<'r, R> {
    pub fn new(rt: &'r mut R) -> Self {
        Self {
            rt,
            last_number: 0,
            failures: FailureCounter::new(),
        }
    }

    /// Label the next case, compute its value, then assert it.
    pub fn case(&mut self, name: &str, compute: impl FnOnce() -> Check) -> bool {
        self.last_number += 1;
        begin_case(&mut *self.rt, self.last_number, name);
        let check = compute();
        assert_equal(&mut *self.rt, check.expected, check.actual, &mut self.failures)
    }

    pub fn failures(&self) -> FailureCounter {
        self.failures
    }

    /// Run every case of `suite` and return the final failure count.
    pub fn run(mut self, suite: Suite) -> FailureCounter {
        for scenario in CORE {
            self.case(scenario.name, scenario.compute);
        }
        for (n, &expected) in (1u64..).zip(&FACTORIALS[..FACTORIAL_CASES]) {
            self.case(FACTORIAL_NAME, || {
                Check::new(expected, factorial(black_box(n)))
            });
        }
        for scenario in suite.extras() {
            self.case(scenario.name, scenario.compute);
        }
        self.failures
    }
}
