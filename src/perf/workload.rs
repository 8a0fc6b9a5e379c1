//! Input pairs and the element-wise add kernels for both representations.
//!
//! The generic form stores every element behind its own heap allocation and
//! is walked one element at a time. The array form is a contiguous
//! [`Array1`] updated with a single whole-array operation.

use ndarray::Array1;
use rand::Rng;

use super::error::{BenchmarkError, BenchmarkResult};

/// Inclusive lower bound of random array-form values.
pub const ARRAY_VALUE_MIN: i32 = 1;
/// Exclusive upper bound of random array-form values.
pub const ARRAY_VALUE_MAX: i32 = 1000;

/// Two generic-form operands of equal length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxedPair {
    /// Accumulator, updated in place.
    pub lhs: Vec<Box<i64>>,
    /// Addend.
    pub rhs: Vec<Box<i64>>,
}

impl BoxedPair {
    /// Both operands hold `0..size`.
    pub fn sequential(size: usize) -> Self {
        Self {
            lhs: index_sequence(size),
            rhs: index_sequence(size),
        }
    }

    /// Element count.
    pub fn len(&self) -> usize {
        self.lhs.len()
    }

    /// Whether the pair is empty.
    pub fn is_empty(&self) -> bool {
        self.lhs.is_empty()
    }

    /// `lhs[i] += rhs[i]` for every index, one boxed element at a time.
    pub fn add_assign(&mut self) {
        for (acc, addend) in self.lhs.iter_mut().zip(self.rhs.iter()) {
            **acc = acc.wrapping_add(**addend);
        }
    }
}

fn index_sequence(size: usize) -> Vec<Box<i64>> {
    (0..size).map(|i| Box::new(i as i64)).collect()
}

/// Two array-form operands of equal length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayPair {
    /// Accumulator, updated in place.
    pub lhs: Array1<i32>,
    /// Addend.
    pub rhs: Array1<i32>,
}

impl ArrayPair {
    /// Both operands drawn independently and uniformly from
    /// `[ARRAY_VALUE_MIN, ARRAY_VALUE_MAX)`.
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let lhs = Array1::from_shape_fn(size, |_| {
            rng.random_range(ARRAY_VALUE_MIN..ARRAY_VALUE_MAX)
        });
        let rhs = Array1::from_shape_fn(size, |_| {
            rng.random_range(ARRAY_VALUE_MIN..ARRAY_VALUE_MAX)
        });
        Self { lhs, rhs }
    }

    /// Build a pair from caller-supplied arrays.
    ///
    /// # Errors
    ///
    /// Returns [`BenchmarkError::InputMismatch`] if the arrays differ in length.
    pub fn from_arrays(lhs: Array1<i32>, rhs: Array1<i32>) -> BenchmarkResult<Self> {
        if lhs.len() != rhs.len() {
            return Err(BenchmarkError::InputMismatch {
                expected: lhs.len(),
                actual: rhs.len(),
            });
        }
        Ok(Self { lhs, rhs })
    }

    /// Element count.
    pub fn len(&self) -> usize {
        self.lhs.len()
    }

    /// Whether the pair is empty.
    pub fn is_empty(&self) -> bool {
        self.lhs.is_empty()
    }

    /// `lhs += rhs` as one whole-array operation.
    pub fn add_assign(&mut self) {
        self.lhs
            .zip_mut_with(&self.rhs, |acc, &addend| *acc = acc.wrapping_add(addend));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sequential_pair_content() {
        let pair = BoxedPair::sequential(5);
        assert_eq!(pair.len(), 5);
        let values: Vec<i64> = pair.lhs.iter().map(|v| **v).collect();
        assert_eq!(values, vec![0, 1, 2, 3, 4]);
        assert_eq!(pair.lhs, pair.rhs);
    }

    #[test]
    fn test_sequential_pair_is_reproducible() {
        assert_eq!(BoxedPair::sequential(64), BoxedPair::sequential(64));
    }

    #[test]
    fn test_boxed_add_assign_accumulates() {
        let mut pair = BoxedPair::sequential(4);
        pair.add_assign();
        pair.add_assign();
        let values: Vec<i64> = pair.lhs.iter().map(|v| **v).collect();
        assert_eq!(values, vec![0, 3, 6, 9]);
        // addend is untouched
        let rhs: Vec<i64> = pair.rhs.iter().map(|v| **v).collect();
        assert_eq!(rhs, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_random_pair_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let pair = ArrayPair::random(10_000, &mut rng);
        assert_eq!(pair.len(), 10_000);
        assert!(pair
            .lhs
            .iter()
            .chain(pair.rhs.iter())
            .all(|&v| (ARRAY_VALUE_MIN..ARRAY_VALUE_MAX).contains(&v)));
    }

    #[test]
    fn test_random_pair_seeded_is_deterministic() {
        let a = ArrayPair::random(256, &mut StdRng::seed_from_u64(42));
        let b = ArrayPair::random(256, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_array_add_assign() {
        let mut pair = ArrayPair::from_arrays(array![1, 2, 3], array![10, 20, 30]).unwrap();
        pair.add_assign();
        assert_eq!(pair.lhs, array![11, 22, 33]);
        assert_eq!(pair.rhs, array![10, 20, 30]);
    }

    #[test]
    fn test_array_add_assign_wraps() {
        let mut pair = ArrayPair::from_arrays(array![i32::MAX], array![1]).unwrap();
        pair.add_assign();
        assert_eq!(pair.lhs[0], i32::MIN);
    }

    #[test]
    fn test_from_arrays_length_mismatch() {
        let err = ArrayPair::from_arrays(array![1, 2, 3], array![1]).unwrap_err();
        assert_eq!(
            err,
            BenchmarkError::InputMismatch {
                expected: 3,
                actual: 1
            }
        );
    }
}
