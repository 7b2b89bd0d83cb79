//! The chart: one insertion-ordered state list per input position
//!
//! Each position keeps a key index beside its list so duplicate states are
//! rejected in constant time. Lists only grow, and callers walk them by
//! index so states appended mid-walk are still visited.

use super::state::{ParseState, StateKey};
use std::collections::HashSet;

#[derive(Debug, Default)]
struct ChartPosition<'g> {
    states: Vec<ParseState<'g>>,
    index: HashSet<StateKey<'g>>,
}

#[derive(Debug)]
pub struct Chart<'g> {
    positions: Vec<ChartPosition<'g>>,
    total: usize,
}

impl<'g> Chart<'g> {
    /// Chart with positions `0..size` pre-allocated
    pub fn new(size: usize) -> Self {
        Self {
            positions: (0..size).map(|_| ChartPosition::default()).collect(),
            total: 0,
        }
    }

    /// Insert `state` at `position` unless a state with the same key is
    /// already there. Returns whether it was inserted. Positions past the
    /// end of the chart reject every state.
    pub fn add(&mut self, position: usize, state: ParseState<'g>) -> bool {
        let Some(slot) = self.positions.get_mut(position) else {
            return false;
        };

        if !slot.index.insert(state.key()) {
            return false;
        }

        slot.states.push(state);
        self.total += 1;
        true
    }

    pub fn get(&self, position: usize, index: usize) -> Option<&ParseState<'g>> {
        self.positions
            .get(position)
            .and_then(|slot| slot.states.get(index))
    }

    pub fn states_at(&self, position: usize) -> &[ParseState<'g>] {
        self.positions
            .get(position)
            .map(|slot| slot.states.as_slice())
            .unwrap_or(&[])
    }

    pub fn len_at(&self, position: usize) -> usize {
        self.states_at(position).len()
    }

    pub fn is_empty_at(&self, position: usize) -> bool {
        self.len_at(position) == 0
    }

    /// Number of positions
    pub fn size(&self) -> usize {
        self.positions.len()
    }

    /// States across all positions
    pub fn total_states(&self) -> usize {
        self.total
    }

    /// Size of the most populated position
    pub fn widest_position(&self) -> usize {
        self.positions
            .iter()
            .map(|slot| slot.states.len())
            .max()
            .unwrap_or(0)
    }
}
