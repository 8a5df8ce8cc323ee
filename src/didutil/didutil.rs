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

use log::trace;

use super::{
    did_regexps::DidRegExps,
    enums::{Format, Region, ServiceCode, TollState},
    errors::DidError,
    helper_constants::{
        MAX_LENGTH_COUNTRY_CODE, NADP_COUNTRY_CODE, PLUS_SIGN, PREMIUM_AREA_CODES,
        TOLL_FREE_AREA_CODES, US_INTL_PREFIX,
    },
    helper_types::{Classification, DidInput, ExtractedNumber, SplitNadpNumber},
};
use crate::{regex_util::RegexFullMatch, string_util::strip_any_prefix};

// Helper type for Result
pub type Result<T> = std::result::Result<T, DidError>;

/// A grammar predicate paired with the value it resolves to.
type Rule<T> = (fn(&DidUtil, &str) -> bool, T);

/// Format precedence: the first matching predicate wins.
const FORMAT_RULES: [Rule<Format>; 6] = [
    (DidUtil::is_n11, Format::N11),
    (DidUtil::is_e164, Format::E164),
    (DidUtil::is_npan, Format::Npan),
    (DidUtil::is_one_npan, Format::OneNpan),
    (DidUtil::is_shortcode, Format::Shortcode),
    (DidUtil::is_us_intl, Format::UsIntl),
];

const REGION_RULES: [Rule<Region>; 4] = [
    (DidUtil::is_n11, Region::Nadp),
    (DidUtil::is_nadp, Region::Nadp),
    (DidUtil::is_shortcode, Region::Nadp),
    (DidUtil::is_intl, Region::International),
];

/// Toll state precedence. Toll-free and premium must be checked before the
/// generic NADP and international rules.
const TOLLSTATE_RULES: [fn(&DidUtil, &str) -> Option<TollState>; 6] = [
    DidUtil::toll_free_state,
    DidUtil::shortcode_state,
    DidUtil::service_code_state,
    DidUtil::premium_state,
    DidUtil::standard_state,
    DidUtil::international_state,
];

pub struct DidUtil {
    /// Helper class holding the compiled grammar and the calling code table.
    reg_exps: DidRegExps,
}

impl DidUtil {
    pub fn new() -> Self {
        Self {
            reg_exps: DidRegExps::new(),
        }
    }

    /// Classifies `did` by region, format and toll state.
    ///
    /// Never fails: anything that is not a string or matches no grammar rule
    /// yields [`Classification::UNKNOWN`].
    pub fn classify<'a>(&self, did: impl Into<DidInput<'a>>) -> Classification {
        match did.into().as_text() {
            Some(did) => self.classify_str(did),
            None => Classification::UNKNOWN,
        }
    }

    pub fn format_of<'a>(&self, did: impl Into<DidInput<'a>>) -> Format {
        did.into()
            .as_text()
            .map_or(Format::Unknown, |did| self.detect_format(did))
    }

    pub fn region<'a>(&self, did: impl Into<DidInput<'a>>) -> Region {
        did.into()
            .as_text()
            .map_or(Region::Unknown, |did| self.detect_region(did))
    }

    pub fn tollstate<'a>(&self, did: impl Into<DidInput<'a>>) -> TollState {
        did.into()
            .as_text()
            .map_or(TollState::Unknown, |did| self.detect_tollstate(did))
    }

    pub(super) fn classify_str(&self, did: &str) -> Classification {
        let classification = Classification {
            region: self.detect_region(did),
            format: self.detect_format(did),
            tollstate: self.detect_tollstate(did),
        };
        trace!("Classified {:?} as {:?}", did, classification);
        classification
    }

    fn detect_format(&self, did: &str) -> Format {
        self.first_match(&FORMAT_RULES, did).unwrap_or(Format::Unknown)
    }

    fn detect_region(&self, did: &str) -> Region {
        self.first_match(&REGION_RULES, did).unwrap_or(Region::Unknown)
    }

    fn detect_tollstate(&self, did: &str) -> TollState {
        TOLLSTATE_RULES
            .iter()
            .find_map(|rule| rule(self, did))
            .unwrap_or(TollState::Unknown)
    }

    fn first_match<T: Copy>(&self, rules: &[Rule<T>], did: &str) -> Option<T> {
        rules
            .iter()
            .find(|(predicate, _)| predicate(self, did))
            .map(|(_, value)| *value)
    }

    fn toll_free_state(&self, did: &str) -> Option<TollState> {
        self.is_toll_free(did).then_some(TollState::TollFree)
    }

    fn shortcode_state(&self, did: &str) -> Option<TollState> {
        self.is_shortcode(did).then_some(TollState::Shortcode)
    }

    fn service_code_state(&self, did: &str) -> Option<TollState> {
        self.is_n11(did)
            .then(|| TollState::ServiceCode(ServiceCode::from_dial_code(did)))
    }

    fn premium_state(&self, did: &str) -> Option<TollState> {
        self.is_premium(did).then_some(TollState::Premium)
    }

    fn standard_state(&self, did: &str) -> Option<TollState> {
        self.is_nadp(did).then_some(TollState::Standard)
    }

    fn international_state(&self, did: &str) -> Option<TollState> {
        self.is_intl(did).then_some(TollState::International)
    }

    pub fn is_n11(&self, did: &str) -> bool {
        self.reg_exps.n11_pattern.full_match(did)
    }

    pub fn is_e164(&self, did: &str) -> bool {
        self.reg_exps.e164_pattern.full_match(did)
    }

    /// Any NADP shaped number: NPAN, 1NPAN or `+1` E.164.
    pub fn is_nadp(&self, did: &str) -> bool {
        self.reg_exps.nadp_pattern.full_match(did)
    }

    pub fn is_npan(&self, did: &str) -> bool {
        self.reg_exps.npan_pattern.full_match(did)
    }

    pub fn is_one_npan(&self, did: &str) -> bool {
        self.reg_exps.one_npan_pattern.full_match(did)
    }

    pub fn is_shortcode(&self, did: &str) -> bool {
        self.reg_exps.shortcode_pattern.full_match(did)
    }

    pub fn is_toll_free(&self, did: &str) -> bool {
        self.nadp_area_code(did)
            .is_some_and(|area_code| TOLL_FREE_AREA_CODES.contains(&area_code))
    }

    pub fn is_premium(&self, did: &str) -> bool {
        self.nadp_area_code(did)
            .is_some_and(|area_code| PREMIUM_AREA_CODES.contains(&area_code))
    }

    pub fn is_us_intl(&self, did: &str) -> bool {
        self.reg_exps.us_intl_pattern.full_match(did)
    }

    /// International shaped number: E.164 or US international grammar, but
    /// not a NADP number.
    pub fn is_intl(&self, did: &str) -> bool {
        (self.is_us_intl(did) || self.is_e164(did)) && !self.is_nadp(did)
    }

    fn nadp_area_code<'b>(&self, did: &'b str) -> Option<&'b str> {
        self.reg_exps
            .nadp_pattern
            .full_captures(did)
            .and_then(|captures| captures.get(1))
            .map(|area_code| area_code.as_str())
    }

    /// Splits `did` at its country calling code.
    ///
    /// N11 codes are returned whole with country code `1`. Anything else has
    /// its `+` or `011` prefix removed and is matched against the calling
    /// code table, longest code first.
    pub fn extract<'a>(&self, did: impl Into<DidInput<'a>>) -> Result<ExtractedNumber> {
        let did = did.into().as_text().ok_or(DidError::InvalidNumberFormat)?;
        self.extract_number(did)
    }

    pub(super) fn extract_number(&self, did: &str) -> Result<ExtractedNumber> {
        if self.is_n11(did) {
            return Ok(ExtractedNumber::new(NADP_COUNTRY_CODE, did));
        }
        let digits = strip_any_prefix(did, &[PLUS_SIGN, US_INTL_PREFIX]).unwrap_or(did);
        if !self.reg_exps.digits_pattern.full_match(digits) {
            return Err(DidError::InvalidNumberFormat);
        }
        self.split_calling_code(digits)
            .map(|(country_code, national_number)| {
                ExtractedNumber::new(country_code, national_number)
            })
            .ok_or(DidError::InvalidNumberFormat)
    }

    /// Greedy longest-prefix match of the calling code. The national number
    /// left over must not be empty.
    fn split_calling_code<'b>(&self, digits: &'b str) -> Option<(&'b str, &'b str)> {
        let max_length = MAX_LENGTH_COUNTRY_CODE.min(digits.len().saturating_sub(1));
        (1..=max_length).rev().find_map(|length| {
            let (country_code, national_number) = digits.split_at(length);
            self.reg_exps
                .calling_codes
                .contains(country_code)
                .then_some((country_code, national_number))
        })
    }

    /// Splits a NADP number into area code, exchange and subscriber.
    pub fn split<'a>(&self, did: impl Into<DidInput<'a>>) -> Result<SplitNadpNumber> {
        let did = did.into().as_text().ok_or(DidError::InvalidNumberFormat)?;
        self.split_nadp(did)
    }

    pub(super) fn split_nadp(&self, did: &str) -> Result<SplitNadpNumber> {
        let captures = self
            .reg_exps
            .nadp_pattern
            .full_captures(did)
            .ok_or(DidError::InvalidNumberFormat)?;
        Ok(SplitNadpNumber::new(&captures[1], &captures[2], &captures[3]))
    }

    pub fn is_calling_code(&self, country_code: &str) -> bool {
        self.reg_exps.calling_codes.contains(country_code)
    }

    pub fn supported_calling_codes(&self) -> impl Iterator<Item = &'static str> {
        crate::i18n::CALLING_CODES.iter().copied()
    }
}

impl Default for DidUtil {
    fn default() -> Self {
        Self::new()
    }
}
