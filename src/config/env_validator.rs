//! Environment variable validation with typo suggestions
//!
//! Invalid values never abort a deploy: a warning is written and the
//! current value is kept.

use std::io::Write;

/// Validator for enumerated environment variable values
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse `value`, writing a warning and returning `default` if invalid.
    pub fn parse_with_writer<T, F, W>(
        &self,
        value: &str,
        parser: F,
        default: T,
        writer: &mut W,
    ) -> T
    where
        F: Fn(&str) -> Option<T>,
        W: Write,
    {
        if let Some(parsed) = parser(value) {
            return parsed;
        }

        let _ = writeln!(
            writer,
            "Warning: Invalid {} value '{}'{}",
            self.var_name,
            value,
            self.suggest(value)
        );
        let _ = writeln!(writer, "Valid values: {}", self.valid_values.join(", "));
        default
    }

    fn suggest(&self, value: &str) -> String {
        closest(&value.to_lowercase(), self.valid_values)
            .map(|suggested| format!(". Did you mean '{}'?", suggested))
            .unwrap_or_default()
    }
}

/// Nearest candidate within two edits of `input`, excluding exact matches.
///
/// Ties go to the earlier candidate.
pub fn closest<'c>(input: &str, candidates: &[&'c str]) -> Option<&'c str> {
    candidates
        .iter()
        .map(|&candidate| (candidate, levenshtein(input, candidate)))
        .fold(None, |best: Option<(&'c str, usize)>, (candidate, dist)| match best {
            Some((_, best_dist)) if best_dist <= dist => best,
            _ => Some((candidate, dist)),
        })
        .filter(|&(_, dist)| (1..=2).contains(&dist))
        .map(|(candidate, _)| candidate)
}

/// Levenshtein edit distance over bytes
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
