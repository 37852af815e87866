use crate::search::{Cost, Path, Problem};

/// Replay `path` against `problem`: every action must be offered by the
/// problem as a transition from each state to the next, the last state must
/// be a goal, and the step costs must add up to the recorded cost.
pub fn validate_path<P>(problem: &P, path: &Path<P::State, P::Action>) -> Result<(), String>
where
    P: Problem,
    P::Action: PartialEq,
{
    if path.states.len() != path.actions.len() + 1 {
        return Err(format!(
            "Path has {} states but {} actions",
            path.states.len(),
            path.actions.len()
        ));
    }
    if path.start() != problem.initial_state() {
        return Err(format!(
            "Path starts in {:?} instead of the initial state {:?}",
            path.start(),
            problem.initial_state()
        ));
    }

    let mut cost = Cost::from(0.);
    for (step, action) in path.actions.iter().enumerate() {
        let state = &path.states[step];
        let next_state = &path.states[step + 1];
        let successors = problem
            .successors(state)
            .map_err(|e| format!("Successor generation failed in {:?}: {}", state, e))?;
        let Some(successor) = successors
            .into_iter()
            .find(|successor| &successor.action == action && &successor.state == next_state)
        else {
            return Err(format!(
                "Action {:?} does not lead from {:?} to {:?}",
                action, state, next_state
            ));
        };
        cost = cost + successor.cost;
    }

    if !problem.is_goal(path.end()) {
        return Err(format!(
            "Path does not reach a goal state, final state is: {:?}",
            path.end()
        ));
    }
    if (cost.into_inner() - path.cost.into_inner()).abs() > 1e-9 {
        return Err(format!(
            "Path cost is recorded as {} but the steps add up to {}",
            path.cost, cost
        ));
    }

    Ok(())
}
