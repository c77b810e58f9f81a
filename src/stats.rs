use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Diagnostic)]
pub enum StatsError {
    #[error("Cannot compute statistics over no values")]
    #[diagnostic(code(weather::stats::empty_input))]
    EmptyInput,
    #[error("Value not found")]
    #[diagnostic(code(weather::stats::not_found))]
    NotFound,
}

/// An extreme value together with the index of its last occurrence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extreme<T> {
    pub value: T,
    pub index: usize,
}

pub fn mean<T: Copy + Into<f64>>(values: &[T]) -> Result<f64, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    let total: f64 = values.iter().map(|&value| Into::<f64>::into(value)).sum();
    Ok(total / values.len() as f64)
}

pub fn find_last_occurrence<T: PartialEq>(values: &[T], target: &T) -> Result<usize, StatsError> {
    values
        .iter()
        .rposition(|value| value == target)
        .ok_or(StatsError::NotFound)
}

/// Returns `None` on empty input. Ties resolve to the last index.
pub fn find_min<T: PartialOrd + Copy>(values: &[T]) -> Option<Extreme<T>> {
    find_extreme(values, |value, best| value < best)
}

/// Returns `None` on empty input. Ties resolve to the last index.
pub fn find_max<T: PartialOrd + Copy>(values: &[T]) -> Option<Extreme<T>> {
    find_extreme(values, |value, best| value > best)
}

fn find_extreme<T: PartialOrd + Copy>(
    values: &[T],
    better: fn(&T, &T) -> bool,
) -> Option<Extreme<T>> {
    let value = values
        .iter()
        .copied()
        .reduce(|best, value| if better(&value, &best) { value } else { best })?;
    // NaN never equals itself, so a NaN extreme comes back as absent.
    let index = find_last_occurrence(values, &value).ok()?;
    Some(Extreme { value, index })
}
