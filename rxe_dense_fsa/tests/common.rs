use rxe_dense_fsa::dfa::Automaton;

pub fn compile(pattern: &str) -> Automaton {
    match rxe_dense_fsa::compile(pattern) {
        Ok(df) => df,
        Err(err) => panic!("pattern {:?} failed to compile: {}", pattern, err),
    }
}

pub fn assert_matches(pattern: &str, accepted: &[&str], rejected: &[&str]) {
    let df = compile(pattern);
    for input in accepted {
        assert!(df.is_match(input), "{:?} should accept {:?}", pattern, input);
    }
    for input in rejected {
        assert!(!df.is_match(input), "{:?} should reject {:?}", pattern, input);
    }
}

/// Every string over `alphabet` with at most `max_len` characters.
pub fn all_strings(alphabet: &str, max_len: usize) -> Vec<String> {
    let mut result = vec![String::new()];
    let mut last = vec![String::new()];
    for _ in 0..max_len {
        let next: Vec<String> = last.iter()
            .flat_map(|prefix| alphabet.chars().map(move |c| format!("{}{}", prefix, c)))
            .collect();
        result.extend(next.iter().cloned());
        last = next;
    }
    result
}
