// Copyright (C) 2025 The didutil Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Strips the first of `prefixes` found at the start of `s`. Returns `None`
/// if `s` starts with none of them.
pub fn strip_any_prefix<'a>(s: &'a str, prefixes: &[&str]) -> Option<&'a str> {
    prefixes.iter().find_map(|prefix| s.strip_prefix(prefix))
}

/// Swaps prefix `from` of `s` with `to` in a single allocation. Returns
/// `None` if `s` doesn't start with `from`.
pub fn replace_prefix(s: &str, from: &str, to: &str) -> Option<String> {
    s.strip_prefix(from)
        .map(|rest| fast_cat::concat_str!(to, rest))
}

pub fn prepend(prefix: &str, s: &str) -> String {
    fast_cat::concat_str!(prefix, s)
}

#[cfg(test)]
mod tests {
    use crate::string_util::{prepend, replace_prefix, strip_any_prefix};

    #[test]
    fn test_usage() {
        assert_eq!(strip_any_prefix("+968245", &["+", "011"]), Some("968245"));
        assert_eq!(strip_any_prefix("011968245", &["+", "011"]), Some("968245"));
        assert_eq!(strip_any_prefix("968245", &["+", "011"]), None);

        assert_eq!(replace_prefix("01144", "011", "+"), Some("+44".to_owned()));
        assert_eq!(replace_prefix("+44", "011", "+"), None);

        assert_eq!(prepend("+1", "2065551212"), "+12065551212");
    }
}
