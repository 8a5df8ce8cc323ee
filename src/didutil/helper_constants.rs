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

pub const PLUS_SIGN: &'static str = "+";
/// Exit code dialed from the US before a foreign country calling code.
pub const US_INTL_PREFIX: &'static str = "011";
pub const NADP_COUNTRY_CODE: &'static str = "1";
pub const NADP_E164_PREFIX: &'static str = "+1";
/// The maximum length of the country calling code.
pub const MAX_LENGTH_COUNTRY_CODE: usize = 3;

pub const TOLL_FREE_AREA_CODES: [&'static str; 7] = ["800", "888", "877", "866", "855", "844", "833"];
pub const PREMIUM_AREA_CODES: [&'static str; 1] = ["900"];

// Toll-free numbers, shortcodes and N11 codes are always attributed to the
// US, whichever NADP member actually issued them.
pub const DEFAULT_COUNTRY_NAME: &'static str = "United States";
pub const DEFAULT_COUNTRY_ISO: &'static str = "US";

// Grammar. All patterns are matched against the whole input, see
// `RegexFullMatch`.
pub const N11_PATTERN: &'static str = r"[2-9]11";
pub const E164_PATTERN: &'static str = r"\+[1-9][0-9]{9,14}";
/// Captures area code, exchange and subscriber.
pub const NADP_PATTERN: &'static str = r"(?:\+1|1)?([2-9][0-9]{2})([2-9][0-9]{2})([0-9]{4})";
pub const NPAN_PATTERN: &'static str = r"[2-9][0-9]{2}[2-9][0-9]{6}";
pub const ONE_NPAN_PATTERN: &'static str = r"1[2-9][0-9]{2}[2-9][0-9]{6}";
pub const SHORTCODE_PATTERN: &'static str = r"[2-9][0-9]{4,5}";
pub const US_INTL_PATTERN: &'static str = r"(?:011|\+)[2-9][0-9]{5,16}";
pub const DIGITS_PATTERN: &'static str = r"[0-9]+";
