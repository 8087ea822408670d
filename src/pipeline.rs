//! Pipeline — ties both extraction stages together.

use std::collections::HashSet;

use crate::assignments::extract_assignments;
use crate::flags::extract_flags;

/// Combined result of running both extraction stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Bare names of the flags that matched.
    pub flags: HashSet<String>,
    /// Raw `key=value` strings, in order.
    pub assignments: Vec<String>,
    /// The leading token dropped by assignment extraction, if any.
    pub leading: Option<String>,
}

/// Run flag extraction, then assignment extraction on the remainder.
///
/// Encodes the required call order (flags first) by construction.
pub fn extract(args: Vec<String>, flag_names: &[&str]) -> Extraction {
    let extracted = extract_flags(args, flag_names);
    let assignments = extract_assignments(&extracted.args);
    let leading = extracted.args.into_iter().next();

    Extraction {
        flags: extracted.flags,
        assignments,
        leading,
    }
}
