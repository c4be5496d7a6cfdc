/// All primes up to and including `max`, ascending.
///
/// Only odd candidates are sieved; 2 is emitted up front.
pub fn sieve(max: usize) -> Vec<usize> {
    if max < 2 {
        return vec![];
    }

    let mut composite = vec![false; max + 1];
    let mut primes = vec![2];
    for i in (3..=max).step_by(2) {
        if composite[i] {
            continue;
        }
        primes.push(i);
        // Smaller multiples were already struck by smaller primes.
        if let Some(start) = i.checked_mul(i) {
            for j in (start..=max).step_by(2 * i) {
                composite[j] = true;
            }
        }
    }
    primes
}
