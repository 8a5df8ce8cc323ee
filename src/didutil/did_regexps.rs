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

use std::collections::HashSet;

use regex::Regex;

use crate::{
    didutil::helper_constants::{
        DIGITS_PATTERN, E164_PATTERN, N11_PATTERN, NADP_PATTERN, NPAN_PATTERN, ONE_NPAN_PATTERN,
        SHORTCODE_PATTERN, US_INTL_PATTERN,
    },
    i18n::CALLING_CODES,
};

pub(super) struct DidRegExps {
    /// `[2-9]11`, e.g. 911.
    pub n11_pattern: Regex,
    pub e164_pattern: Regex,
    /// Any NADP number: optional `+1` or `1` followed by a 10-digit number
    /// with area code and exchange starting with 2-9. Groups capture area
    /// code, exchange and subscriber.
    pub nadp_pattern: Regex,
    pub npan_pattern: Regex,
    pub one_npan_pattern: Regex,
    pub shortcode_pattern: Regex,
    /// Number dialed with the US exit code `011`, or written with `+` and a
    /// country code outside the NADP.
    pub us_intl_pattern: Regex,
    pub digits_pattern: Regex,

    /// Country calling codes, used for longest-prefix matching in
    /// `extract`.
    pub calling_codes: HashSet<&'static str>,
}

impl DidRegExps {
    pub fn new() -> Self {
        Self {
            n11_pattern: compile(N11_PATTERN),
            e164_pattern: compile(E164_PATTERN),
            nadp_pattern: compile(NADP_PATTERN),
            npan_pattern: compile(NPAN_PATTERN),
            one_npan_pattern: compile(ONE_NPAN_PATTERN),
            shortcode_pattern: compile(SHORTCODE_PATTERN),
            us_intl_pattern: compile(US_INTL_PATTERN),
            digits_pattern: compile(DIGITS_PATTERN),
            calling_codes: CALLING_CODES.iter().copied().collect(),
        }
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid constant pattern!")
}
