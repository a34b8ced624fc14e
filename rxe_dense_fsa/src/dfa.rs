/**
 * Deterministic finite automaton with a partial transition function.
 */

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use log::{debug, trace};
use crate::nfa::{self, Automaton as NFA};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State(usize);

impl State {
    pub fn id(self) -> usize {
        self.0
    }
}

/// The verdict of running an input through a DFA.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    Rejected,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Accepted => write!(f, "Accepted"),
            Outcome::Rejected => write!(f, "Rejected"),
        }
    }
}

/// A missing `(state, symbol)` entry means the input is rejected. The
/// automaton is never modified after determinization, so it can be shared
/// freely between matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    state_counter: usize,
    start: State,
    accepting: BTreeSet<State>,
    transitions: HashMap<State, BTreeMap<char, State>>,
}

impl Automaton {
    fn new() -> Self {
        Self{
            state_counter: 0,
            start: State(0),
            accepting: BTreeSet::new(),
            transitions: HashMap::new(),
        }
    }

    fn unique_state(&mut self) -> State {
        let state = State(self.state_counter);
        self.state_counter += 1;
        state
    }

    fn add_transition(&mut self, from: State, on: char, to: State) {
        let from_map = self.transitions.entry(from).or_insert_with(BTreeMap::new);
        let previous = from_map.insert(on, to);
        debug_assert!(previous.is_none(), "two targets for {:?} on {:?}", from, on);
    }

    pub fn start(&self) -> State {
        self.start
    }

    pub fn state_count(&self) -> usize {
        self.state_counter
    }

    pub fn is_accepting(&self, state: &State) -> bool {
        self.accepting.contains(state)
    }

    pub fn accepting_states(&self) -> impl Iterator<Item = State> + '_ {
        self.accepting.iter().copied()
    }

    pub fn transition(&self, from: State, on: char) -> Option<State> {
        self.transitions.get(&from).and_then(|m| m.get(&on)).copied()
    }

    /// All transitions, ordered by source state and then by symbol.
    pub fn transitions(&self) -> Vec<(State, char, State)> {
        let mut result: Vec<_> = self.transitions.iter()
            .flat_map(|(from, m)| m.iter().map(move |(on, to)| (*from, *on, *to)))
            .collect();
        result.sort();
        result
    }

    pub fn alphabet(&self) -> BTreeSet<char> {
        self.transitions.values().flat_map(|m| m.keys().copied()).collect()
    }

    /**
     * Matching.
     */

    /// Runs `input` from the start state. Stops at the first symbol that has
    /// no transition.
    pub fn simulate(&self, input: &str) -> Outcome {
        let mut current = self.start;
        for c in input.chars() {
            match self.transition(current, c) {
                Some(next) => current = next,
                None => return Outcome::Rejected,
            }
        }

        if self.is_accepting(&current) {
            Outcome::Accepted
        }
        else {
            Outcome::Rejected
        }
    }

    pub fn is_match(&self, input: &str) -> bool {
        self.simulate(input) == Outcome::Accepted
    }
}

/**
 * Determinization.
 */

impl From<&NFA> for Automaton {
    fn from(nfa: &NFA) -> Self {
        let mut dfa = Self::new();
        // A DFA state is identified by the (sorted) set of NFA states it stands for
        let mut nfa_set_to_dfa_state: BTreeMap<BTreeSet<nfa::State>, State> = BTreeMap::new();
        let mut stk = Vec::new();

        // We need the start state's mapping
        {
            let start_states = nfa.epsilon_closure(Some(nfa.initial()));
            dfa.start = dfa.unique_state();
            nfa_set_to_dfa_state.insert(start_states.clone(), dfa.start);
            stk.push((start_states, dfa.start));
        }

        while let Some((nfa_states, dfa_state)) = stk.pop() {
            if nfa_states.contains(&nfa.final_state()) {
                dfa.accepting.insert(dfa_state);
            }

            for &symbol in nfa.alphabet() {
                let to = nfa.epsilon_closure(nfa.move_on(&nfa_states, symbol));
                if to.is_empty() {
                    continue;
                }

                let dfa_to = match nfa_set_to_dfa_state.get(&to) {
                    Some(existing) => *existing,
                    None => {
                        let fresh = dfa.unique_state();
                        trace!("DFA state {:?} = {:?}", fresh, to);
                        nfa_set_to_dfa_state.insert(to.clone(), fresh);
                        stk.push((to, fresh));
                        fresh
                    },
                };
                dfa.add_transition(dfa_state, symbol, dfa_to);
            }
        }

        debug!("determinized {} NFA states into {} DFA states ({} accepting)",
            nfa.size(), dfa.state_count(), dfa.accepting.len());
        dfa
    }
}

impl From<NFA> for Automaton {
    fn from(nfa: NFA) -> Self {
        Self::from(&nfa)
    }
}
