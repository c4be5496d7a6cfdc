use crate::MODULUS;

/// Modular sum of two residues
#[inline]
pub fn mod_add(a: u64, b: u64) -> u64 {
    (a + b) % MODULUS
}

/// Modular product; operands are reduced first so the product fits in u64
#[inline]
pub fn mod_mul(a: u64, b: u64) -> u64 {
    (a % MODULUS) * (b % MODULUS) % MODULUS
}

/// Square-and-multiply exponentiation modulo the prime
pub fn mod_pow(base: u64, mut exp: u64) -> u64 {
    let mut base = base % MODULUS;
    let mut result = 1;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mod_mul(result, base);
        }
        base = mod_mul(base, base);
        exp >>= 1;
    }
    result
}

/// Multiplicative inverse via Fermat's little theorem (the modulus is prime)
pub fn mod_inverse(a: u64) -> u64 {
    mod_pow(a, MODULUS - 2)
}

/// C(n, k) mod P from factorials and modular inverses, independent of the Pascal table
pub fn binomial_mod(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let factorial = |m: usize| (1..=m as u64).fold(1, mod_mul);
    mod_mul(
        factorial(n),
        mod_inverse(mod_mul(factorial(k), factorial(n - k))),
    )
}

/// Calculate number of combinations C(n, k) without overflow (saturates on huge values)
pub fn num_combinations(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    if k == 0 || k == n {
        return 1;
    }

    let k = k.min(n - k); // C(n,k) = C(n,n-k)
    let mut result = 1usize;

    for i in 0..k {
        result = result.saturating_mul(n - i) / (i + 1);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modular_ops() {
        assert_eq!(mod_add(MODULUS - 1, 2), 1);
        assert_eq!(mod_mul(MODULUS + 3, 4), 12);
        assert_eq!(mod_pow(2, 10), 1024);
        assert_eq!(mod_mul(mod_inverse(12345), 12345), 1);
    }

    #[test]
    fn binomial_mod_small() {
        assert_eq!(binomial_mod(5, 2), 10);
        assert_eq!(binomial_mod(20, 10), 184_756);
        assert_eq!(binomial_mod(0, 0), 1);
        assert_eq!(binomial_mod(3, 4), 0);
    }

    #[test]
    fn exact_combinations() {
        assert_eq!(num_combinations(5, 2), 10);
        assert_eq!(num_combinations(4, 4), 1);
        assert_eq!(num_combinations(3, 0), 1);
        assert_eq!(num_combinations(2, 3), 0);
    }
}
