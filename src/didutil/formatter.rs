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

use std::borrow::Cow;

use log::{trace, warn};

use super::{
    didutil::{DidUtil, Result},
    enums::{Format, Region},
    errors::DidError,
    helper_constants::{NADP_COUNTRY_CODE, NADP_E164_PREFIX, PLUS_SIGN, US_INTL_PREFIX},
    helper_types::{Classification, DidInput},
};
use crate::string_util::{prepend, replace_prefix};

impl DidUtil {
    /// Converts `did` to E.164. Shortcodes and N11 codes have no E.164 form
    /// and are returned unchanged.
    pub fn normalize<'a>(&self, did: impl Into<DidInput<'a>>) -> Result<String> {
        let did = text_or_invalid_format(did.into(), Format::E164)?;
        self.normalize_str(did).map(Cow::into_owned)
    }

    pub(super) fn normalize_str<'b>(&self, did: &'b str) -> Result<Cow<'b, str>> {
        let classification = self.classify_str(did);
        if classification.format.is_short_number() {
            return Ok(Cow::Borrowed(did));
        }
        self.convert(did, classification, Format::E164)
    }

    /// Converts `did` to `target`.
    ///
    /// Conversions never cross regions: NPAN and 1NPAN targets require a
    /// NADP number, the US international target requires an international
    /// one. Anything else fails with [`DidError::InvalidFormat`].
    pub fn normalize_to<'a>(&self, did: impl Into<DidInput<'a>>, target: Format) -> Result<String> {
        let did = text_or_invalid_format(did.into(), target)?;
        let classification = self.classify_str(did);
        self.convert(did, classification, target).map(Cow::into_owned)
    }

    pub fn to_e164<'a>(&self, did: impl Into<DidInput<'a>>) -> Result<String> {
        self.normalize_to(did, Format::E164)
    }

    pub fn to_npan<'a>(&self, did: impl Into<DidInput<'a>>) -> Result<String> {
        self.normalize_to(did, Format::Npan)
    }

    pub fn to_one_npan<'a>(&self, did: impl Into<DidInput<'a>>) -> Result<String> {
        self.normalize_to(did, Format::OneNpan)
    }

    pub fn to_us_intl<'a>(&self, did: impl Into<DidInput<'a>>) -> Result<String> {
        self.normalize_to(did, Format::UsIntl)
    }

    pub(super) fn convert<'b>(
        &self,
        did: &'b str,
        classification: Classification,
        target: Format,
    ) -> Result<Cow<'b, str>> {
        let Classification { region, format: current, .. } = classification;

        let converted = match target {
            Format::E164 => match current {
                Format::E164 => Some(Cow::Borrowed(did)),
                Format::Npan => Some(Cow::Owned(prepend(NADP_E164_PREFIX, did))),
                Format::OneNpan => Some(Cow::Owned(prepend(PLUS_SIGN, did))),
                // A `+` written number is already in E.164 shape.
                Format::UsIntl => Some(
                    replace_prefix(did, US_INTL_PREFIX, PLUS_SIGN)
                        .map_or(Cow::Borrowed(did), Cow::Owned),
                ),
                Format::Shortcode | Format::N11 | Format::Unknown => None,
            },
            Format::Npan => match current {
                _ if region != Region::Nadp => None,
                Format::E164 => did.strip_prefix(NADP_E164_PREFIX).map(Cow::Borrowed),
                Format::Npan => Some(Cow::Borrowed(did)),
                Format::OneNpan => did.strip_prefix(NADP_COUNTRY_CODE).map(Cow::Borrowed),
                Format::UsIntl | Format::Shortcode | Format::N11 | Format::Unknown => None,
            },
            Format::OneNpan => match current {
                _ if region != Region::Nadp => None,
                Format::E164 => did.strip_prefix(PLUS_SIGN).map(Cow::Borrowed),
                Format::Npan => Some(Cow::Owned(prepend(NADP_COUNTRY_CODE, did))),
                Format::OneNpan => Some(Cow::Borrowed(did)),
                Format::UsIntl | Format::Shortcode | Format::N11 | Format::Unknown => None,
            },
            Format::UsIntl => match current {
                _ if region != Region::International => None,
                Format::E164 => replace_prefix(did, PLUS_SIGN, US_INTL_PREFIX).map(Cow::Owned),
                Format::UsIntl => Some(Cow::Borrowed(did)),
                Format::Npan | Format::OneNpan | Format::Shortcode | Format::N11 | Format::Unknown => None,
            },
            Format::Shortcode => current.is_short_number().then_some(Cow::Borrowed(did)),
            Format::N11 => (current == Format::N11).then_some(Cow::Borrowed(did)),
            Format::Unknown => None,
        };

        match converted {
            Some(converted) => {
                trace!("Converted {:?} from {} to {}: {:?}", did, current, target, converted);
                Ok(converted)
            }
            None => Err(DidError::InvalidFormat { current, target }),
        }
    }

    /// Pretty prints `did` according to its own region.
    ///
    /// NADP numbers render as `+1 (AAA) EEE SSSS`, international ones as
    /// `+<country code> <number>`.
    ///
    /// This never fails. Input that can not be decomposed, including
    /// malformed numbers and non-string values, is echoed back unchanged, so
    /// a returned string says nothing about the validity of the number.
    pub fn format<'a>(&self, did: impl Into<DidInput<'a>>) -> String {
        let input = did.into();
        let Some(did) = input.as_text() else {
            return input.render().into_owned();
        };
        let classification = self.classify_str(did);
        self.pretty_print(did, classification.format, classification.region)
            .into_owned()
    }

    /// Same as [`DidUtil::format`] but formats the number as if it belonged
    /// to `region`.
    pub fn format_for_region<'a>(&self, did: impl Into<DidInput<'a>>, region: Region) -> String {
        let input = did.into();
        let Some(did) = input.as_text() else {
            return input.render().into_owned();
        };
        let format = self.format_of(did);
        self.pretty_print(did, format, region).into_owned()
    }

    pub(super) fn pretty_print<'b>(&self, did: &'b str, format: Format, region: Region) -> Cow<'b, str> {
        if format.is_short_number() {
            return Cow::Borrowed(did);
        }
        match region {
            Region::Nadp if matches!(format, Format::E164 | Format::Npan | Format::OneNpan) => {
                match self.split_nadp(did) {
                    Ok(parts) => Cow::Owned(fast_cat::concat_str!(
                        NADP_E164_PREFIX, " (", &parts.area_code, ") ",
                        &parts.exchange, " ", &parts.subscriber
                    )),
                    Err(err) => {
                        warn!("Could not split {:?} for formatting: {}", did, err);
                        Cow::Borrowed(did)
                    }
                }
            }
            Region::International => match self.extract_number(did) {
                Ok(number) => Cow::Owned(fast_cat::concat_str!(
                    PLUS_SIGN, &number.country_code, " ", &number.national_number
                )),
                Err(err) => {
                    warn!("Could not extract country code of {:?} for formatting: {}", did, err);
                    Cow::Borrowed(did)
                }
            },
            Region::Nadp | Region::Unknown => Cow::Borrowed(did),
        }
    }
}

fn text_or_invalid_format<'a>(input: DidInput<'a>, target: Format) -> Result<&'a str> {
    input.as_text().ok_or(DidError::InvalidFormat {
        current: Format::Unknown,
        target,
    })
}
