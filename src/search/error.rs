use crate::search::Cost;
use std::fmt::Debug;
use thiserror::Error;

/// Errors that abort a search. Running out of frontier or hitting a depth
/// limit are not errors, they are reported through
/// [`SearchResult`](crate::search::search_engines::SearchResult).
#[derive(Debug, Error)]
pub enum SearchError<E>
where
    E: std::error::Error + 'static,
{
    #[error("negative step cost {cost} on a transition out of {state}")]
    NegativeStepCost { state: String, cost: Cost },
    #[error("bidirectional search needs a problem with goal states and predecessors")]
    NotReversible,
    #[error(transparent)]
    Problem(E),
}

impl<E> SearchError<E>
where
    E: std::error::Error + 'static,
{
    /// Reject step costs that are negative or not a number. Returns whether
    /// the transition can be taken at all: an infinite cost marks it as
    /// absent.
    pub fn check_step_cost<S: Debug>(state: &S, cost: Cost) -> Result<bool, Self> {
        if cost.is_nan() || cost < Cost::from(0.) {
            return Err(SearchError::NegativeStepCost {
                state: format!("{:?}", state),
                cost,
            });
        }
        Ok(cost.is_finite())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FrontierError {
    #[error("this frontier does not support decreasing keys")]
    Unsupported,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[test]
    fn step_cost_checks() {
        let check = |cost: f64| SearchError::<Infallible>::check_step_cost(&0, Cost::from(cost));
        assert!(check(0.).unwrap());
        assert!(check(2.5).unwrap());
        assert!(!check(f64::INFINITY).unwrap());
        assert!(matches!(check(-1.), Err(SearchError::NegativeStepCost { .. })));
        assert!(check(f64::NAN).is_err());
    }
}
