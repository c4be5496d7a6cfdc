use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub weight: usize,
    pub value: u64,
}

impl Item {
    pub fn new(weight: usize, value: u64) -> Self {
        Item { weight, value }
    }
}

/// Zeroed best-value row for capacities `0..=capacity`
fn value_row(capacity: usize) -> Result<Vec<u64>, EngineError> {
    let too_large = || EngineError::InvalidArgument(format!("capacity {} is too large", capacity));
    let len = capacity.checked_add(1).ok_or_else(too_large)?;
    let mut row = Vec::new();
    row.try_reserve_exact(len).map_err(|_| too_large())?;
    row.resize(len, 0u64);
    Ok(row)
}

/// `best + value`, rejecting totals that no longer fit in u64
fn add_value(best: u64, value: u64) -> Result<u64, EngineError> {
    best.checked_add(value).ok_or_else(|| {
        EngineError::InvalidArgument(format!("total value overflows: {} + {}", best, value))
    })
}

/// Best total value when each item may be packed at most once
pub fn solve_binary(items: &[Item], capacity: usize) -> Result<u64, EngineError> {
    let mut best = value_row(capacity)?;
    for item in items {
        // Walk capacities downwards so each item is counted once.
        for c in (item.weight..=capacity).rev() {
            best[c] = best[c].max(add_value(best[c - item.weight], item.value)?);
        }
    }
    Ok(best[capacity])
}

/// Best total value when every item may be packed any number of times
pub fn solve_unbounded(items: &[Item], capacity: usize) -> Result<u64, EngineError> {
    if let Some(item) = items.iter().find(|item| item.weight == 0 && item.value > 0) {
        return Err(EngineError::InvalidArgument(format!(
            "weightless item of value {} can be taken without limit",
            item.value
        )));
    }

    let mut sorted: Vec<Item> = items.iter().copied().filter(|item| item.weight > 0).collect();
    sorted.sort_by_key(|item| item.weight);

    let mut best = value_row(capacity)?;
    for c in 1..=capacity {
        let mut max_value = best[c - 1];
        for item in sorted.iter().take_while(|item| item.weight <= c) {
            max_value = max_value.max(add_value(best[c - item.weight], item.value)?);
        }
        best[c] = max_value;
    }
    Ok(best[capacity])
}
