use std::error::Error;
use std::fmt;

/// InputValueError is used if some parameter does not fulfill the posed requirements, e.g., a
/// negative lap time.
#[derive(Debug, Clone)]
pub struct InputValueError;

impl fmt::Display for InputValueError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Invalid input value")
    }
}

impl Error for InputValueError {}

/// argmin returns the index of the minimum value in the array x (first occurrence), or None if x
/// is empty.
pub fn argmin<T: std::cmp::PartialOrd>(x: &[T]) -> Option<usize> {
    let first = x.first()?;
    let (min_idx, _min_val) =
        x.iter()
            .enumerate()
            .fold((0, first), |(idx_min, val_min), (idx, val)| {
                if val < val_min {
                    (idx, val)
                } else {
                    (idx_min, val_min)
                }
            });
    Some(min_idx)
}

/// min returns the minimum value in the array x, or None if x is empty.
pub fn min<T: std::cmp::PartialOrd + std::marker::Copy>(x: &[T]) -> Option<T> {
    argmin(x).map(|idx| x[idx])
}
