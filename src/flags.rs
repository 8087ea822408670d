//! Flag extraction — raw args → filtered args + recognized flags.

use std::collections::HashSet;

/// Result of scanning an argument list for recognized flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagExtraction {
    /// Arguments with every matched flag token removed, original order kept.
    pub args: Vec<String>,
    /// Bare names (without hyphens) of the flags that matched.
    pub flags: HashSet<String>,
}

/// Scan `args` for recognized flag tokens and split them out.
///
/// A token matches when it equals `-name` or `--name` for some `name` in
/// `flag_names`; names are given **without** leading hyphens, so both
/// `-debug` and `--debug` match the name `debug`. Matching is exact string
/// equality, not a prefix test — `-debug=5` does not match `debug`.
///
/// A name that appears several times in `args` has every occurrence removed
/// but is reported once. Names that never match are silently absent from
/// the result; an empty `flag_names` makes this a pure copy.
pub fn extract_flags(args: Vec<String>, flag_names: &[&str]) -> FlagExtraction {
    let mut kept = Vec::with_capacity(args.len());
    let mut flags = HashSet::new();

    for arg in args {
        // First matching name wins; names are expected to be distinct.
        match flag_names.iter().find(|name| is_flag_token(&arg, name)) {
            Some(name) => {
                tracing::debug!("{}: matched flag {}", arg, name);
                flags.insert((*name).to_string());
            }
            None => kept.push(arg),
        }
    }

    FlagExtraction { args: kept, flags }
}

/// Exact-equality test: `arg` is `name` with one or two leading hyphens.
fn is_flag_token(arg: &str, name: &str) -> bool {
    let bare = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-'));
    bare == Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_args(args: Vec<&str>) -> Vec<String> {
        args.into_iter().map(String::from).collect()
    }

    #[test]
    fn matches_single_and_double_hyphen() {
        let result = extract_flags(raw_args(vec!["-debug", "--debug"]), &["debug"]);
        assert!(result.args.is_empty());
        assert_eq!(result.flags.len(), 1);
        assert!(result.flags.contains("debug"));
    }

    #[test]
    fn exact_equality_not_prefix() {
        let result = extract_flags(raw_args(vec!["-debug=5"]), &["debug"]);
        assert_eq!(result.args, raw_args(vec!["-debug=5"]));
        assert!(result.flags.is_empty());
    }

    #[test]
    fn triple_hyphen_does_not_match() {
        let result = extract_flags(raw_args(vec!["---debug"]), &["debug"]);
        assert_eq!(result.args, raw_args(vec!["---debug"]));
        assert!(result.flags.is_empty());
    }

    #[test]
    fn duplicate_flag_names_are_harmless() {
        let result = extract_flags(raw_args(vec!["-debug"]), &["debug", "debug"]);
        assert!(result.args.is_empty());
        assert_eq!(result.flags.len(), 1);
    }
}
