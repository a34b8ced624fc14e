/**
 * Nondeterministic finite automaton with contiguously numbered states.
 */

use std::collections::BTreeSet;
use log::debug;
use rxe_regex_parse as regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State(usize);

impl State {
    pub fn id(self) -> usize {
        self.0
    }
}

/// What a transition consumes. `Epsilon` never compares equal to a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    Epsilon,
    Symbol(char),
}

/// States are `0..size()`, there is exactly one initial and one final state.
///
/// The composition constructors ([`concat`](Automaton::concat),
/// [`alternate`](Automaton::alternate), [`star`](Automaton::star),
/// [`optional`](Automaton::optional)) take their operands by value: the
/// operands are renumbered while being merged, so they are gone afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    initial: State,
    final_state: State,
    transitions: Vec<Vec<(Label, State)>>,
    alphabet: BTreeSet<char>,
}

impl Automaton {
    fn with_size(size: usize, initial: State, final_state: State) -> Self {
        debug_assert!(initial.0 < size && final_state.0 < size);
        Self{
            initial,
            final_state,
            transitions: vec![Vec::new(); size],
            alphabet: BTreeSet::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.transitions.len()
    }

    pub fn initial(&self) -> State {
        self.initial
    }

    pub fn final_state(&self) -> State {
        self.final_state
    }

    /// Every non-epsilon symbol that appears on some transition.
    pub fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    pub fn states(&self) -> impl Iterator<Item = State> {
        (0..self.size()).map(State)
    }

    /// Outgoing edges of `from`. A state this automaton does not own has none.
    pub fn transitions_from(&self, from: State) -> &[(Label, State)] {
        self.transitions.get(from.0).map_or(&[], Vec::as_slice)
    }

    fn add_transition(&mut self, from: State, on: Label, to: State) {
        let edges = &mut self.transitions[from.0];
        if !edges.contains(&(on, to)) {
            edges.push((on, to));
        }
        if let Label::Symbol(c) = on {
            self.alphabet.insert(c);
        }
    }

    fn add_epsilon_transition(&mut self, from: State, to: State) {
        self.add_transition(from, Label::Epsilon, to);
    }

    fn append_state(&mut self) -> State {
        self.transitions.push(Vec::new());
        State(self.transitions.len() - 1)
    }

    /// Renumbers every state `s` to `s + by`, leaving `0..by` as fresh states
    /// without transitions.
    fn shifted(self, by: usize) -> Self {
        let mut transitions = vec![Vec::new(); by];
        transitions.extend(self.transitions.into_iter().map(|edges| {
            edges.into_iter().map(|(on, to)| (on, State(to.0 + by))).collect()
        }));
        Self{
            initial: State(self.initial.0 + by),
            final_state: State(self.final_state.0 + by),
            transitions,
            alphabet: self.alphabet,
        }
    }

    /// Lays the rows of `other` over ours, adding to the edge lists of the
    /// states both have in common.
    fn overlay(&mut self, other: Self) {
        for (i, edges) in other.transitions.into_iter().enumerate() {
            if i < self.transitions.len() {
                self.transitions[i].extend(edges);
            }
            else {
                self.transitions.push(edges);
            }
        }
        self.alphabet.extend(other.alphabet);
    }

    fn debug_assert_well_formed(&self) {
        debug_assert_eq!(self.initial, State(0));
        debug_assert_eq!(self.final_state.0, self.size() - 1);
        debug_assert!(self.transitions[self.final_state.0].is_empty());
    }

    /**
     * Thompson's-construction.
     */

    /// Two states, a single transition from the initial to the final one on `symbol`.
    pub fn basic(symbol: char) -> Self {
        let mut nfa = Self::with_size(2, State(0), State(1));
        nfa.add_transition(State(0), Label::Symbol(symbol), State(1));
        nfa
    }

    /// `self` followed by `other`. The initial state of `other` is fused with
    /// our final state.
    pub fn concat(mut self, other: Self) -> Self {
        self.debug_assert_well_formed();
        other.debug_assert_well_formed();

        let other = other.shifted(self.size() - 1);
        debug_assert_eq!(other.initial, self.final_state);
        self.final_state = other.final_state;
        self.overlay(other);
        self
    }

    /// Either `self` or `other`, between a fresh initial and a fresh final state.
    pub fn alternate(self, other: Self) -> Self {
        self.debug_assert_well_formed();
        other.debug_assert_well_formed();

        let left = self.shifted(1);
        let right = other.shifted(left.size());
        let (left_initial, left_final) = (left.initial, left.final_state);
        let (right_initial, right_final) = (right.initial, right.final_state);

        let mut nfa = left;
        nfa.overlay(right);
        let initial = State(0);
        let final_state = nfa.append_state();
        nfa.initial = initial;
        nfa.final_state = final_state;

        nfa.add_epsilon_transition(initial, left_initial);
        nfa.add_epsilon_transition(initial, right_initial);
        nfa.add_epsilon_transition(left_final, final_state);
        nfa.add_epsilon_transition(right_final, final_state);
        nfa
    }

    /// Zero or more repetitions of `self`.
    pub fn star(self) -> Self {
        self.debug_assert_well_formed();

        let mut nfa = self.shifted(1);
        let (inner_initial, inner_final) = (nfa.initial, nfa.final_state);
        let initial = State(0);
        let final_state = nfa.append_state();
        nfa.initial = initial;
        nfa.final_state = final_state;

        nfa.add_epsilon_transition(initial, inner_initial);
        nfa.add_epsilon_transition(inner_final, initial);
        nfa.add_epsilon_transition(inner_final, final_state);
        nfa.add_epsilon_transition(initial, final_state);
        nfa
    }

    /// Zero or one occurrence of `self`.
    pub fn optional(self) -> Self {
        self.debug_assert_well_formed();

        let mut nfa = self.shifted(1);
        let (inner_initial, inner_final) = (nfa.initial, nfa.final_state);
        let initial = State(0);
        let final_state = nfa.append_state();
        nfa.initial = initial;
        nfa.final_state = final_state;

        nfa.add_epsilon_transition(initial, inner_initial);
        nfa.add_epsilon_transition(inner_final, final_state);
        nfa.add_epsilon_transition(initial, final_state);
        nfa
    }

    /**
     * Set operations used by determinization and simulation.
     */

    pub fn epsilon_closure<I>(&self, states: I) -> BTreeSet<State> where I : IntoIterator<Item = State> {
        let mut result = BTreeSet::new();
        let mut stk = Vec::new();

        for s in states {
            if result.insert(s) {
                stk.push(s);
            }
        }

        while let Some(top) = stk.pop() {
            for &(on, to) in self.transitions_from(top) {
                if on == Label::Epsilon && result.insert(to) {
                    stk.push(to);
                }
            }
        }

        result
    }

    /// The states directly reachable from `states` on `symbol`, without
    /// following epsilon transitions.
    pub fn move_on(&self, states: &BTreeSet<State>, symbol: char) -> BTreeSet<State> {
        states.iter()
            .flat_map(|s| self.transitions_from(*s))
            .filter(|(on, _)| *on == Label::Symbol(symbol))
            .map(|(_, to)| *to)
            .collect()
    }

    /// Runs the automaton directly, tracking the whole set of active states.
    pub fn accepts(&self, input: &str) -> bool {
        let mut current = self.epsilon_closure(Some(self.initial));
        for c in input.chars() {
            if current.is_empty() {
                return false;
            }
            current = self.epsilon_closure(self.move_on(&current, c));
        }
        current.contains(&self.final_state)
    }
}

impl From<&regex::Node> for Automaton {
    fn from(rx: &regex::Node) -> Self {
        let nfa = thompson_construct(rx);
        debug!("built NFA with {} states over {:?}", nfa.size(), nfa.alphabet);
        nfa
    }
}

fn thompson_construct(rx: &regex::Node) -> Automaton {
    match rx {
        regex::Node::Alternative{ first, second } =>
            thompson_construct(first).alternate(thompson_construct(second)),

        regex::Node::Sequence{ first, second } =>
            thompson_construct(first).concat(thompson_construct(second)),

        regex::Node::Quantified{ subnode, quantifier: regex::Quantifier::Star } =>
            thompson_construct(subnode).star(),

        regex::Node::Quantified{ subnode, quantifier: regex::Quantifier::Optional } =>
            thompson_construct(subnode).optional(),

        regex::Node::Literal(ch) => Automaton::basic(*ch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn eps(from: usize, to: usize) -> (usize, Label, usize) {
        (from, Label::Epsilon, to)
    }

    fn sym(from: usize, c: char, to: usize) -> (usize, Label, usize) {
        (from, Label::Symbol(c), to)
    }

    fn edges(nfa: &Automaton) -> BTreeSet<(usize, Label, usize)> {
        nfa.states()
            .flat_map(|s| nfa.transitions_from(s).iter().map(move |(on, to)| (s.id(), *on, to.id())))
            .collect()
    }

    fn states(ids: &[usize]) -> BTreeSet<State> {
        ids.iter().map(|id| State(*id)).collect()
    }

    fn build(pattern: &str) -> Automaton {
        let ast = regex::parse(pattern).unwrap();
        Automaton::from(ast.as_ref())
    }

    #[test]
    fn basic_shape() {
        let nfa = Automaton::basic('a');
        assert_eq!(nfa.size(), 2);
        assert_eq!(nfa.initial(), State(0));
        assert_eq!(nfa.final_state(), State(1));
        assert_eq!(edges(&nfa), vec![sym(0, 'a', 1)].into_iter().collect());
    }

    #[test]
    fn concat_fuses_final_and_initial() {
        let nfa = Automaton::basic('a').concat(Automaton::basic('b'));
        assert_eq!(nfa.size(), 3);
        assert_eq!(nfa.initial(), State(0));
        assert_eq!(nfa.final_state(), State(2));
        assert_eq!(edges(&nfa), vec![sym(0, 'a', 1), sym(1, 'b', 2)].into_iter().collect());
    }

    #[test]
    fn alternate_shape() {
        let nfa = Automaton::basic('a').alternate(Automaton::basic('b'));
        assert_eq!(nfa.size(), 6);
        assert_eq!(nfa.initial(), State(0));
        assert_eq!(nfa.final_state(), State(5));
        assert_eq!(edges(&nfa), vec![
            eps(0, 1), eps(0, 3),
            sym(1, 'a', 2), sym(3, 'b', 4),
            eps(2, 5), eps(4, 5),
        ].into_iter().collect());
    }

    #[test]
    fn star_shape() {
        let nfa = Automaton::basic('a').star();
        assert_eq!(nfa.size(), 4);
        assert_eq!(nfa.initial(), State(0));
        assert_eq!(nfa.final_state(), State(3));
        assert_eq!(edges(&nfa), vec![
            eps(0, 1), sym(1, 'a', 2), eps(2, 0), eps(2, 3), eps(0, 3),
        ].into_iter().collect());
    }

    #[test]
    fn optional_shape() {
        let nfa = Automaton::basic('a').optional();
        assert_eq!(nfa.size(), 4);
        assert_eq!(edges(&nfa), vec![
            eps(0, 1), sym(1, 'a', 2), eps(2, 3), eps(0, 3),
        ].into_iter().collect());
    }

    #[test]
    fn tree_walk_keeps_single_initial_and_final() {
        for pattern in &["a", "ab", "a|b", "a*", "a?b", "(a|b)*c", "(ab|c?)*d|e", "((a*)?)*"] {
            let nfa = build(pattern);
            assert_eq!(nfa.initial(), State(0), "{}", pattern);
            assert_eq!(nfa.final_state().id(), nfa.size() - 1, "{}", pattern);
            assert!(nfa.transitions_from(nfa.final_state()).is_empty(), "{}", pattern);
            for (_, _, to) in edges(&nfa) {
                assert!(to < nfa.size(), "{}", pattern);
            }
        }
    }

    #[test]
    fn foreign_state_has_no_transitions() {
        let larger = Automaton::basic('a').star();
        let nfa = Automaton::basic('a');
        let last = larger.states().last().unwrap();
        assert!(nfa.transitions_from(last).is_empty());
        assert_eq!(nfa.move_on(&states(&[0, 3]), 'a'), states(&[1]));
    }

    #[test]
    fn alphabet_excludes_epsilon() {
        let nfa = build("(a|b)*c");
        assert_eq!(nfa.alphabet(), &"abc".chars().collect::<BTreeSet<_>>());
    }

    #[test]
    fn epsilon_closure_follows_chains() {
        let nfa = Automaton::basic('a').alternate(Automaton::basic('b'));
        assert_eq!(nfa.epsilon_closure(Some(State(0))), states(&[0, 1, 3]));
        assert_eq!(nfa.epsilon_closure(vec![State(2), State(4)]), states(&[2, 4, 5]));
    }

    #[test]
    fn epsilon_closure_terminates_on_cycles() {
        let nfa = Automaton::basic('a').star().star();
        assert_eq!(nfa.size(), 6);
        assert_eq!(nfa.epsilon_closure(Some(State(0))), states(&[0, 1, 2, 4, 5]));
        assert_eq!(nfa.epsilon_closure(Some(State(3))), states(&[0, 1, 2, 3, 4, 5]));
    }

    #[test]
    fn epsilon_closure_of_nothing_is_empty() {
        let nfa = Automaton::basic('a');
        assert!(nfa.epsilon_closure(None::<State>).is_empty());
    }

    #[test]
    fn move_ignores_epsilon() {
        let nfa = Automaton::basic('a').star();
        assert_eq!(nfa.move_on(&states(&[0, 1, 3]), 'a'), states(&[2]));
        assert!(nfa.move_on(&states(&[0, 3]), 'a').is_empty());
        assert!(nfa.move_on(&states(&[1]), 'b').is_empty());
    }

    #[test]
    fn direct_simulation() {
        let nfa = build("(a|b)*c");
        assert!(nfa.accepts("c"));
        assert!(nfa.accepts("abababc"));
        assert!(!nfa.accepts(""));
        assert!(!nfa.accepts("ab"));
        assert!(!nfa.accepts("cc"));
    }
}
