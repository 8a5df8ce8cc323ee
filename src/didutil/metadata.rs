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

use log::{debug, trace, warn};

use super::{
    DID_UTIL,
    didutil::{DidUtil, Result},
    enums::{Format, Namespace, TollState},
    errors::DidError,
    helper_types::{
        Classification, CountryMetadata, DidInput, Locality, Metadata, MetadataRecord,
        NadpMetadata,
    },
};
use crate::{i18n::RegionCode, interfaces::MetadataProvider};

type Localities = (Option<Locality>, Option<Locality>);

/// Builds [`Metadata`] records by joining classification output with the
/// reference data served by a [`MetadataProvider`].
pub struct MetadataAssembler<'a, P: MetadataProvider + ?Sized> {
    util: &'a DidUtil,
    provider: &'a P,
}

impl<'a, P: MetadataProvider + ?Sized> MetadataAssembler<'a, P> {
    /// Assembler backed by the shared [`DID_UTIL`] instance.
    pub fn new(provider: &'a P) -> Self {
        Self::with_util(&DID_UTIL, provider)
    }

    pub fn with_util(util: &'a DidUtil, provider: &'a P) -> Self {
        Self { util, provider }
    }

    /// Assembles the metadata record of `did`.
    ///
    /// Reference data misses are not errors: the record is returned with
    /// `country`/`state` left empty. Errors are reserved for input that is
    /// not a string ([`DidError::InvalidNumber`]) and numbers that can not be
    /// decomposed ([`DidError::InvalidNumberFormat`]).
    pub fn metadata<'b>(&self, did: impl Into<DidInput<'b>>) -> Result<Metadata> {
        let did = did.into().as_text().ok_or(DidError::InvalidNumber)?;
        let classification = self.util.classify_str(did);

        let (country, state) = match classification.format {
            Format::Unknown => return Ok(self.bare_metadata(did, classification)),
            Format::Shortcode | Format::N11 => (Some(Locality::united_states()), None),
            Format::UsIntl => (self.country_by_calling_code(did)?, None),
            Format::E164 => self.e164_localities(did, classification)?,
            Format::Npan | Format::OneNpan => {
                let e164 = self
                    .util
                    .convert(did, classification, Format::E164)
                    .map_err(|_| DidError::InvalidNumberFormat)?;
                let e164_classification = self.util.classify_str(&e164);
                self.e164_localities(&e164, e164_classification)?
            }
        };

        let normalized = match self.util.normalize_str(did) {
            Ok(normalized) => normalized.into_owned(),
            Err(err) => {
                warn!("Could not normalize {:?}: {}", did, err);
                did.to_owned()
            }
        };
        let metadata = Metadata {
            did: did.to_owned(),
            normalized,
            formatted: self
                .util
                .pretty_print(did, classification.format, classification.region)
                .into_owned(),
            region: classification.region,
            tollstate: classification.tollstate,
            country,
            state,
        };
        trace!("Assembled metadata for {:?}: {:?}", did, metadata);
        Ok(metadata)
    }

    /// Record for a number nothing is known about: the input is echoed as
    /// normalized and formatted form.
    fn bare_metadata(&self, did: &str, classification: Classification) -> Metadata {
        Metadata {
            did: did.to_owned(),
            normalized: did.to_owned(),
            formatted: did.to_owned(),
            region: classification.region,
            tollstate: classification.tollstate,
            country: None,
            state: None,
        }
    }

    fn e164_localities(&self, did: &str, classification: Classification) -> Result<Localities> {
        if classification.tollstate == TollState::TollFree {
            return Ok((Some(Locality::united_states()), None));
        }
        if self.util.is_intl(did) {
            return Ok((self.country_by_calling_code(did)?, None));
        }

        let parts = self.util.split_nadp(did)?;
        let Some(nadp) = self.lookup_nadp(&parts.area_code) else {
            debug!("No NADP metadata for area code {} of {:?}", parts.area_code, did);
            return Ok((None, None));
        };
        let country = Locality::new(&nadp.country_name, &nadp.country_iso);
        if RegionCode::has_subdivisions(&nadp.country_iso) {
            Ok((Some(country), Some(Locality::new(&nadp.state_name, &nadp.state_iso))))
        } else {
            Ok((Some(country), None))
        }
    }

    fn country_by_calling_code(&self, did: &str) -> Result<Option<Locality>> {
        let number = self.util.extract_number(did)?;
        let country = self.lookup_country(&number.country_code);
        if country.is_none() {
            debug!("No country metadata for calling code {} of {:?}", number.country_code, did);
        }
        Ok(country.map(|country| Locality::new(&country.name, &country.iso2)))
    }

    /// Country reference data for a calling code, e.g. `968`.
    pub fn country_metadata(&self, calling_code: &str) -> Result<CountryMetadata> {
        self.lookup_country(calling_code)
            .ok_or_else(|| DidError::NotFound {
                namespace: Namespace::Country,
                key: calling_code.to_owned(),
            })
    }

    /// NADP reference data for a 3-digit area code, e.g. `201`.
    pub fn nadp_metadata(&self, area_code: &str) -> Result<NadpMetadata> {
        self.lookup_nadp(area_code)
            .ok_or_else(|| DidError::NotFound {
                namespace: Namespace::Nadp,
                key: area_code.to_owned(),
            })
    }

    fn lookup_country(&self, calling_code: &str) -> Option<CountryMetadata> {
        match self.provider.get(Namespace::Country, calling_code)? {
            MetadataRecord::Country(country) => Some(country),
            other => {
                warn!("Unexpected record under country/{}: {:?}", calling_code, other);
                None
            }
        }
    }

    fn lookup_nadp(&self, area_code: &str) -> Option<NadpMetadata> {
        match self.provider.get(Namespace::Nadp, area_code)? {
            MetadataRecord::Nadp(nadp) => Some(nadp),
            other => {
                warn!("Unexpected record under nadp/{}: {:?}", area_code, other);
                None
            }
        }
    }
}

impl DidUtil {
    /// Shortcut for [`MetadataAssembler::metadata`] using this instance.
    pub fn metadata<'a, P: MetadataProvider + ?Sized>(
        &self,
        provider: &P,
        did: impl Into<DidInput<'a>>,
    ) -> Result<Metadata> {
        MetadataAssembler::with_util(self, provider).metadata(did)
    }
}
