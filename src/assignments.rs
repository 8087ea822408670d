//! Assignment extraction — flag-free args → raw `key=value` strings.

/// Return every element after the first, in order.
///
/// The caller is expected to have removed flags already (see
/// [`extract_flags`](crate::extract_flags)). The first element is a
/// caller-defined leading token, a subcommand or a script path, and is
/// dropped. Entries are passed through raw; nothing checks that they
/// actually contain `=`.
pub fn extract_assignments(args: &[String]) -> Vec<String> {
    args.iter().skip(1).cloned().collect()
}
