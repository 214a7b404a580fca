//! Prime sieving and integer factorization.

/// All primes up to and including `n`, found with the sieve of Eratosthenes.
pub fn sieve(n: usize) -> Vec<usize> {
    let mut is_prime = vec![true; n + 1];
    let limit = (n as f64).sqrt().ceil() as usize;
    for i in 2..=limit {
        if is_prime[i] {
            let mut j = i * i;
            while j <= n {
                is_prime[j] = false;
                j += i;
            }
        }
    }
    (2..=n).filter(|&i| is_prime[i]).collect()
}

/// Prime factorization of `n >= 1` by trial division with the primes up to
/// `⌈√n⌉`. Returns the factors in ascending order, with multiplicity.
pub fn trial_division(n: u64) -> Vec<u64> {
    let primes = sieve((n as f64).sqrt().ceil() as usize);
    let mut n = n;
    let mut factors = Vec::new();
    for p in primes {
        let p = p as u64;
        while n % p == 0 {
            factors.push(p);
            n /= p;
        }
    }
    if n > 1 {
        factors.push(n);
    }
    factors.sort_unstable();
    factors
}

// Fermat's method proper: search x with x² − n a perfect square, giving the
// factor pair (x+y, x−y).
fn fermat_split(n: u64) -> (u64, u64) {
    let mut x = (n as f64).sqrt().ceil() as u64;
    let mut r = x * x - n;
    let mut y = (r as f64).sqrt().floor() as u64;
    while y * y != r {
        r += 2 * x + 1;
        x += 1;
        y = (r as f64).sqrt().floor() as u64;
    }
    (x + y, x - y)
}

/// Prime factorization of odd-free parts via Fermat's factorization method,
/// finishing both factors off with trial division.
pub fn fermat_trial(n: u64) -> Vec<u64> {
    if n % 2 == 0 {
        let mut factors = vec![2];
        factors.extend(fermat_trial(n / 2));
        return factors;
    }
    let (a, b) = fermat_split(n);
    let mut factors = trial_division(a);
    factors.extend(trial_division(b));
    factors.sort_unstable();
    factors
}

/// Prime factorization by recursive application of Fermat's factorization
/// method: each nontrivial factor pair is split again until the method
/// returns the trivial pair.
pub fn fermat(n: u64) -> Vec<u64> {
    if n % 2 == 0 {
        let mut factors = vec![2];
        factors.extend(fermat_trial(n / 2));
        return factors;
    }
    let (a, b) = fermat_split(n);
    if b == 1 {
        vec![a]
    } else {
        let mut factors = fermat(a);
        factors.extend(fermat(b));
        factors.sort_unstable();
        factors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sieve_finds_small_primes() {
        assert_eq!(sieve(1), Vec::<usize>::new());
        assert_eq!(sieve(2), vec![2]);
        assert_eq!(
            sieve(30),
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
        );
        assert_eq!(sieve(100).len(), 25);
    }

    fn assert_factorization(n: u64, factors: &[u64]) {
        assert_eq!(factors.iter().product::<u64>(), n, "factors of {}", n);
        let mut sorted = factors.to_vec();
        sorted.sort_unstable();
        assert_eq!(factors, sorted, "factors of {} are sorted", n);
        for &f in factors {
            assert_eq!(trial_division(f), vec![f], "{} divides {}", f, n);
        }
    }

    #[test]
    fn trial_division_factors_completely() {
        assert_eq!(trial_division(1), Vec::<u64>::new());
        assert_eq!(trial_division(12), vec![2, 2, 3]);
        assert_eq!(trial_division(97), vec![97]);
        assert_eq!(trial_division(9991), vec![97, 103]);
        for n in [2u64, 36, 360, 1001, 104729, 722611] {
            assert_factorization(n, &trial_division(n));
        }
    }

    #[test]
    fn fermat_variants_agree_with_trial_division() {
        for n in [2u64, 15, 21, 36, 97, 360, 1001, 5959, 9991, 722611] {
            assert_eq!(fermat_trial(n), trial_division(n), "fermat_trial({})", n);
            assert_eq!(fermat(n), trial_division(n), "fermat({})", n);
        }
    }
}
