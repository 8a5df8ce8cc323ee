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

use super::{
    enums::{Format, Region, TollState},
    helper_constants::{DEFAULT_COUNTRY_ISO, DEFAULT_COUNTRY_NAME},
};

/// Raw value handed to the public API.
///
/// Only `Text` can ever describe a number; the other variants exist so that
/// callers bridging loosely typed data (JSON, CSV cells, ...) get a
/// deterministic error instead of having to pre-validate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DidInput<'a> {
    Text(&'a str),
    Integer(i64),
    Float(f64),
    Absent,
}

impl<'a> DidInput<'a> {
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            DidInput::Text(s) => Some(*s),
            _ => None,
        }
    }

    /// Textual rendering of the input, used where a best-effort echo of the
    /// input is returned instead of an error.
    pub fn render(&self) -> Cow<'a, str> {
        match self {
            DidInput::Text(s) => Cow::Borrowed(*s),
            DidInput::Integer(n) => {
                let mut buf = itoa::Buffer::new();
                Cow::Owned(buf.format(*n).to_owned())
            }
            DidInput::Float(f) => Cow::Owned(f.to_string()),
            DidInput::Absent => Cow::Borrowed(""),
        }
    }
}

impl<'a> From<&'a str> for DidInput<'a> {
    fn from(value: &'a str) -> Self {
        DidInput::Text(value)
    }
}

impl<'a> From<&'a String> for DidInput<'a> {
    fn from(value: &'a String) -> Self {
        DidInput::Text(value)
    }
}

impl<'a> From<Option<&'a str>> for DidInput<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(DidInput::Absent, DidInput::Text)
    }
}

impl From<i64> for DidInput<'_> {
    fn from(value: i64) -> Self {
        DidInput::Integer(value)
    }
}

impl From<i32> for DidInput<'_> {
    fn from(value: i32) -> Self {
        DidInput::Integer(value.into())
    }
}

impl From<u32> for DidInput<'_> {
    fn from(value: u32) -> Self {
        DidInput::Integer(value.into())
    }
}

impl From<f64> for DidInput<'_> {
    fn from(value: f64) -> Self {
        DidInput::Float(value)
    }
}

impl From<f32> for DidInput<'_> {
    fn from(value: f32) -> Self {
        DidInput::Float(value.into())
    }
}

/// Region, format and toll state of a number, as resolved by
/// [`DidUtil::classify`](crate::DidUtil::classify).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Classification {
    pub region: Region,
    pub format: Format,
    pub tollstate: TollState,
}

impl Classification {
    /// Result for input matching no grammar rule.
    pub const UNKNOWN: Classification = Classification {
        region: Region::Unknown,
        format: Format::Unknown,
        tollstate: TollState::Unknown,
    };
}

/// Number split at its country calling code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtractedNumber {
    pub country_code: String,
    pub national_number: String,
}

impl ExtractedNumber {
    pub fn new(country_code: &str, national_number: &str) -> Self {
        Self {
            country_code: country_code.to_owned(),
            national_number: national_number.to_owned(),
        }
    }
}

/// 10-digit NADP number split into its fixed width groups.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SplitNadpNumber {
    pub area_code: String,
    pub exchange: String,
    pub subscriber: String,
}

impl SplitNadpNumber {
    pub fn new(area_code: &str, exchange: &str, subscriber: &str) -> Self {
        Self {
            area_code: area_code.to_owned(),
            exchange: exchange.to_owned(),
            subscriber: subscriber.to_owned(),
        }
    }

    /// The groups joined back into an NPAN.
    pub fn to_npan(&self) -> String {
        fast_cat::concat_str!(&self.area_code, &self.exchange, &self.subscriber)
    }
}

/// Country reference data, keyed by calling code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountryMetadata {
    pub iso2: String,
    pub iso3: String,
    pub name: String,
}

/// NADP area code reference data.
///
/// `state_iso` and `state_name` are empty for territories that are not
/// subdivided (Caribbean codes and the like); this is expected data, not a
/// loading error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NadpMetadata {
    pub country_iso: String,
    pub country_name: String,
    pub state_iso: String,
    pub state_name: String,
}

/// Value stored by a [`MetadataProvider`](crate::MetadataProvider).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MetadataRecord {
    Country(CountryMetadata),
    Nadp(NadpMetadata),
}

impl From<CountryMetadata> for MetadataRecord {
    fn from(value: CountryMetadata) -> Self {
        MetadataRecord::Country(value)
    }
}

impl From<NadpMetadata> for MetadataRecord {
    fn from(value: NadpMetadata) -> Self {
        MetadataRecord::Nadp(value)
    }
}

/// Name and ISO code of a country or a state/province.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locality {
    pub name: String,
    pub iso: String,
}

impl Locality {
    pub fn new(name: &str, iso: &str) -> Self {
        Self {
            name: name.to_owned(),
            iso: iso.to_owned(),
        }
    }

    pub fn united_states() -> Self {
        Self::new(DEFAULT_COUNTRY_NAME, DEFAULT_COUNTRY_ISO)
    }
}

/// Enriched description of a DID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// The input as given.
    pub did: String,
    pub normalized: String,
    /// Human readable rendering, see [`DidUtil::format`](crate::DidUtil::format).
    pub formatted: String,
    pub region: Region,
    pub tollstate: TollState,
    /// `None` when no reference data is known for the number.
    pub country: Option<Locality>,
    pub state: Option<Locality>,
}
