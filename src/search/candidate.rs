//! Candidate enumeration for exhaustive search
//!
//! A candidate is a sequence of indices into the alphabet, treated as a
//! mixed-radix number with the most significant digit first. Incrementing the
//! rightmost digit and carrying leftward (like an odometer) visits every
//! sequence of a given length exactly once, in lexicographic order.

use crate::alphabet::Alphabet;
use crate::error::{Result, SearchError};

/// Advance `digits` to the next combination in base `radix`.
///
/// Returns `false` when the counter overflows past the most significant
/// digit, meaning every combination has been visited. On overflow all digits
/// are back at zero; callers must rely on the return value, not the digits.
///
/// An empty digit slice overflows immediately: its space holds a single
/// (empty) combination.
pub fn advance(digits: &mut [usize], radix: usize) -> bool {
    debug_assert!(radix > 0, "radix must be at least 1");
    for digit in digits.iter_mut().rev() {
        *digit += 1;
        if *digit < radix {
            return true;
        }
        *digit = 0;
    }
    false
}

/// Write the symbols for `digits` into `buf`, replacing its contents.
pub fn render_into(digits: &[usize], alphabet: &Alphabet, buf: &mut String) {
    buf.clear();
    buf.extend(digits.iter().map(|&d| alphabet.symbol(d)));
}

pub fn render(digits: &[usize], alphabet: &Alphabet) -> String {
    let mut buf = String::with_capacity(digits.len());
    render_into(digits, alphabet, &mut buf);
    buf
}

/// Symbol-by-symbol comparison of a candidate against the target.
pub fn matches(digits: &[usize], alphabet: &Alphabet, target: &[char]) -> bool {
    digits.len() == target.len()
        && digits
            .iter()
            .zip(target)
            .all(|(&d, &c)| alphabet.symbol(d) == c)
}

/// Number of candidates of `length` digits in base `radix`, saturating at
/// `u64::MAX`.
pub fn space_size(radix: usize, length: usize) -> u64 {
    let mut total: u64 = 1;
    for _ in 0..length {
        total = total.saturating_mul(radix as u64);
    }
    total
}

/// Mixed-radix counter over every index sequence of a fixed length.
///
/// Either step it in place with [`Odometer::current`] and [`Odometer::step`],
/// or use it as an iterator of owned candidates.
#[derive(Debug, Clone)]
pub struct Odometer {
    digits: Vec<usize>,
    radix: usize,
    exhausted: bool,
}

impl Odometer {
    /// Enumerate all `radix^length` sequences starting from all zeros.
    pub fn new(length: usize, radix: usize) -> Result<Self> {
        if radix == 0 {
            return Err(SearchError::ZeroRadix);
        }
        Ok(Self {
            digits: vec![0; length],
            radix,
            exhausted: false,
        })
    }

    /// Counter whose radix is the size of `alphabet` (never zero).
    pub fn for_alphabet(length: usize, alphabet: &Alphabet) -> Self {
        Self {
            digits: vec![0; length],
            radix: alphabet.len(),
            exhausted: false,
        }
    }

    /// The candidate the counter currently points at.
    pub fn current(&self) -> &[usize] {
        &self.digits
    }

    /// Move to the next candidate. Returns `false` once the space is
    /// exhausted; `current` is meaningless after that.
    pub fn step(&mut self) -> bool {
        if !self.exhausted {
            self.exhausted = !advance(&mut self.digits, self.radix);
        }
        !self.exhausted
    }
}

impl Iterator for Odometer {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let current = self.digits.clone();
        self.step();
        Some(current)
    }
}

/// A worker's exclusive slice of the fixed-length search space: every
/// candidate whose position-0 digit equals `leading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    /// Fixed most significant digit.
    pub leading: usize,
    /// Total candidate length, including the leading digit. Always >= 1.
    pub length: usize,
    /// Alphabet size.
    pub radix: usize,
}

impl Partition {
    /// Number of candidates in this partition.
    pub fn size(&self) -> u64 {
        space_size(self.radix, self.length - 1)
    }

    /// First candidate of the partition: the leading digit followed by zeros.
    pub fn first(&self) -> Vec<usize> {
        debug_assert!(self.length >= 1, "partitions need a leading digit");
        let mut digits = vec![0; self.length];
        digits[0] = self.leading;
        digits
    }

    /// Advance the free digits (positions 1..) of a candidate in this
    /// partition. The leading digit is never touched, so the partition is
    /// exhausted exactly when the free digits overflow.
    pub fn advance(&self, digits: &mut [usize]) -> bool {
        advance(&mut digits[1..], self.radix)
    }

    /// Enumerate every candidate of the partition in order.
    pub fn candidates(&self) -> PartitionIter {
        PartitionIter {
            partition: *self,
            digits: self.first(),
            exhausted: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PartitionIter {
    partition: Partition,
    digits: Vec<usize>,
    exhausted: bool,
}

impl Iterator for PartitionIter {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let current = self.digits.clone();
        self.exhausted = !self.partition.advance(&mut self.digits);
        Some(current)
    }
}

/// Split the length-`length` space into one partition per leading digit and
/// deal them round-robin to `workers` workers. Worker `i` owns leading digits
/// `i, i + workers, i + 2 * workers, ...`.
///
/// A length-0 space has no leading digit to split on, so every worker gets
/// an empty assignment.
pub fn assign_partitions(length: usize, radix: usize, workers: usize) -> Vec<Vec<Partition>> {
    let workers = workers.max(1);
    let mut assignments = vec![Vec::new(); workers];
    if length == 0 {
        return assignments;
    }
    for leading in 0..radix {
        assignments[leading % workers].push(Partition {
            leading,
            length,
            radix,
        });
    }
    assignments
}
