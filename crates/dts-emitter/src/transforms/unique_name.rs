//! Fresh identifiers for synthesized bindings.

use dts_scanner::char_codes::{is_identifier_part, is_identifier_start};
use rustc_hash::FxHashSet;

/// Generates names of the form `base_N` that collide neither with any
/// identifier in the file nor with an earlier generated name.
#[derive(Debug, Default)]
pub struct UniqueNameGenerator {
    file_identifiers: FxHashSet<String>,
    generated_names: FxHashSet<String>,
}

impl UniqueNameGenerator {
    #[must_use]
    pub fn new(file_identifiers: FxHashSet<String>) -> Self {
        UniqueNameGenerator {
            file_identifiers,
            generated_names: FxHashSet::default(),
        }
    }

    /// `utils` -> `utils_1`, then `utils_2`, ... A base already ending in
    /// `_` gets no second underscore.
    pub fn make_unique_name(&mut self, base: &str) -> String {
        let mut prefix = sanitize_identifier(base);
        if !prefix.ends_with('_') {
            prefix.push('_');
        }

        let mut suffix: u32 = 1;
        loop {
            let candidate = format!("{prefix}{suffix}");
            if self.is_unique(&candidate) {
                self.generated_names.insert(candidate.clone());
                return candidate;
            }
            suffix += 1;
        }
    }

    fn is_unique(&self, name: &str) -> bool {
        !self.file_identifiers.contains(name) && !self.generated_names.contains(name)
    }
}

/// Turn arbitrary text (a string-literal export name) into an identifier.
#[must_use]
pub fn sanitize_identifier(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 1);
    for (i, ch) in text.chars().enumerate() {
        let valid = if i == 0 {
            is_identifier_start(ch)
        } else {
            is_identifier_part(ch)
        };
        if valid {
            out.push(ch);
        } else if i == 0 && is_identifier_part(ch) {
            out.push('_');
            out.push(ch);
        } else {
            out.push('_');
        }
    }
    if out.is_empty() {
        out.push('_');
    }
    out
}

#[cfg(test)]
#[path = "tests/unique_name_tests.rs"]
mod unique_name_tests;
