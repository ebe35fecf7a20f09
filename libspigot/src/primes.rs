//! Prime iteration strategies for the spigot's outer loop.

use num_bigint_dig::BigUint;
use num_bigint_dig::prime::probably_prime;

/// Yields the smallest prime strictly greater than the input; 2 for inputs
/// below 2.
///
/// Implementations must agree on every input; the calculator treats them as
/// interchangeable.
pub trait PrimeSource: Send + Sync {
    fn next_prime(&self, n: u64) -> u64;
}

/// Exact primality by trial division against every odd divisor up to the
/// square root.
#[derive(Debug, Default, Clone, Copy)]
pub struct TrialDivision;

impl PrimeSource for TrialDivision {
    fn next_prime(&self, n: u64) -> u64 {
        if n < 2 {
            return 2;
        }
        let mut candidate = if n % 2 == 0 { n + 1 } else { n + 2 };
        while !is_prime(candidate) {
            candidate += 2;
        }
        candidate
    }
}

// candidates are odd and >= 3
fn is_prime(n: u64) -> bool {
    let mut d = 3;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Baillie-PSW pseudoprimality (base-2 Miller–Rabin plus a Lucas test) over
/// arbitrary-precision integers. No counterexample is known below 2^64, so
/// within the accepted input range it is as exact as trial division while
/// staying fast for large offsets.
#[derive(Debug, Default, Clone, Copy)]
pub struct BailliePsw;

impl PrimeSource for BailliePsw {
    fn next_prime(&self, n: u64) -> u64 {
        if n < 2 {
            return 2;
        }
        let mut candidate = if n % 2 == 0 { n + 1 } else { n + 2 };
        while !probably_prime(&BigUint::from(candidate), 0) {
            candidate += 2;
        }
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_inputs() {
        let expected = [
            (0, 2),
            (1, 2),
            (2, 3),
            (3, 5),
            (4, 5),
            (7, 11),
            (10, 11),
            (13, 17),
            (31, 37),
            (89, 97),
            (97, 101),
        ];
        for (n, p) in expected {
            assert_eq!(TrialDivision.next_prime(n), p, "trial division at {n}");
            assert_eq!(BailliePsw.next_prime(n), p, "baillie-psw at {n}");
        }
    }

    #[test]
    fn test_strategies_agree() {
        for n in 0..20_000_u64 {
            assert_eq!(
                TrialDivision.next_prime(n),
                BailliePsw.next_prime(n),
                "strategies diverged at {n}"
            );
        }
    }

    #[test]
    fn test_strategies_agree_on_large_anchors() {
        for n in [1_000_003_u64, 32_452_843, 179_424_673, 1_000_000_007] {
            assert_eq!(TrialDivision.next_prime(n), BailliePsw.next_prime(n));
        }
    }
}
