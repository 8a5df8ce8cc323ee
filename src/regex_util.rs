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

use regex::{Captures, Regex};

pub trait RegexFullMatch {
    /// Eq of C fullMatch
    fn full_match(&self, s: &str) -> bool;

    /// Captures of a match spanning the whole of `s`.
    fn full_captures<'a>(&self, s: &'a str) -> Option<Captures<'a>>;
}

impl RegexFullMatch for Regex {
    fn full_match(&self, s: &str) -> bool {
        let found = self.find(s);
        if let Some(matched) = found {
            return matched.start() == 0 && matched.end() == s.len();
        }
        false
    }

    fn full_captures<'a>(&self, s: &'a str) -> Option<Captures<'a>> {
        let captures = self.captures(s)?;
        let full_capture = captures.get(0)?;
        if full_capture.start() != 0 || full_capture.end() != s.len() {
            return None
        }

        Some(captures)
    }
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::RegexFullMatch;

    #[test]
    fn full_match_rejects_partial_matches() {
        let regex = Regex::new(r"[2-9][0-9]{4,5}").unwrap();
        assert!(regex.full_match("98765"));
        assert!(regex.full_match("987654"));
        assert!(!regex.full_match("9876543"));
        assert!(!regex.full_match("198765"));
        assert!(!regex.full_match("98765x"));
    }

    #[test]
    fn full_captures_exposes_groups() {
        let regex = Regex::new(r"(?:\+1|1)?([2-9][0-9]{2})([2-9][0-9]{2})([0-9]{4})").unwrap();
        let captures = regex.full_captures("+12065551212").unwrap();
        assert_eq!(&captures[1], "206");
        assert_eq!(&captures[3], "1212");
        assert!(regex.full_captures("+120655512120").is_none());
    }
}
