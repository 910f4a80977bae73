//! Integer classifiers for photo counts.
//!
//! Used by the numeric badges (`prime_time`, `fibonacci`, `symmetric`).

/// The fixed Fibonacci sequence recognised by the `fibonacci` badge.
pub const FIBONACCI_SEQUENCE: &[u64] = &[
    1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610, 987,
];

/// Trial-division primality test.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut divisor = 3;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Membership in [`FIBONACCI_SEQUENCE`]. Counts above 987 never match.
pub fn is_fibonacci(n: u64) -> bool {
    FIBONACCI_SEQUENCE.contains(&n)
}

/// A numeral of two or more digits that reads the same reversed.
pub fn is_palindrome(n: u64) -> bool {
    if n < 10 {
        return false;
    }
    let digits = n.to_string();
    digits.chars().eq(digits.chars().rev())
}
