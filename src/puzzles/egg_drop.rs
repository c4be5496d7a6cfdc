use crate::error::EngineError;

/// Minimum number of drops that always finds the lowest breaking floor.
///
/// Dropping from floor `x` either breaks the egg (search the `x - 1` floors below
/// with one egg fewer) or not (search the `floors - x` above with the same eggs);
/// the answer minimises the worse of the two over every `x`.
pub fn min_trials(eggs: usize, floors: usize) -> Result<usize, EngineError> {
    if floors == 0 {
        return Ok(0);
    }
    if eggs == 0 {
        return Err(EngineError::InvalidArgument(format!(
            "cannot search {} floors without eggs",
            floors
        )));
    }

    // More eggs than floors never helps.
    let eggs = eggs.min(floors);

    // trials[e][f] for e in 1..=eggs, f in 0..=floors
    let mut trials = vec![vec![0usize; floors + 1]; eggs + 1];
    for f in 0..=floors {
        trials[1][f] = f;
    }
    for e in 2..=eggs {
        for f in 1..=floors {
            let mut best = usize::MAX;
            for x in 1..=f {
                let worst = 1 + trials[e - 1][x - 1].max(trials[e][f - x]);
                best = best.min(worst);
            }
            trials[e][f] = best;
        }
    }

    Ok(trials[eggs][floors])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_two_egg_answers() {
        assert_eq!(min_trials(2, 36), Ok(8));
        assert_eq!(min_trials(2, 100), Ok(14));
        assert_eq!(min_trials(2, 10), Ok(4));
    }

    #[test]
    fn more_eggs() {
        assert_eq!(min_trials(3, 100), Ok(9));
        // Enough eggs for a binary search.
        assert_eq!(min_trials(50, 100), Ok(7));
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(min_trials(1, 10), Ok(10));
        assert_eq!(min_trials(3, 1), Ok(1));
        assert_eq!(min_trials(0, 0), Ok(0));
        assert!(matches!(
            min_trials(0, 5),
            Err(EngineError::InvalidArgument(_))
        ));
    }
}
