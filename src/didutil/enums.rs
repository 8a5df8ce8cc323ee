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

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Dial plan a number belongs to.
///
/// Every variant renders to (and parses from) a lowercase tag, e.g. `nadp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Region {
    /// **North American Dial Plan.**
    /// US, Canada and the Caribbean/Atlantic territories sharing country
    /// calling code 1. N11 service codes and shortcodes are attributed here too.
    Nadp,
    /// **International.**
    /// Any other reachable number written with a `+` or `011` prefix.
    International,
    /// **Unknown.**
    /// The input matches none of the recognized grammars.
    Unknown,
}

/// Surface format the number is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    /// **E.164 format.**
    /// A `+` followed by 10 to 15 digits.
    /// Example: `+12065551212`.
    E164,
    /// **NPAN format.**
    /// A 10-digit NADP number without any prefix.
    /// Example: `2065551212`.
    Npan,
    /// **1NPAN format.**
    /// An 11-digit NADP number with a leading `1`.
    /// Example: `12065551212`.
    #[strum(serialize = "1npan")]
    OneNpan,
    /// **US international format.**
    /// A number dialed from the US with the `011` exit code (or a bare `+`
    /// followed by a non-NADP country code).
    /// Example: `01196824560742`.
    UsIntl,
    /// **Shortcode.**
    /// 5 or 6 digit messaging/service number, e.g. `98765`.
    Shortcode,
    /// **N11 service code.**
    /// 3-digit service code such as `911` or `411`.
    N11,
    /// **Unknown format.**
    Unknown,
}

impl Format {
    /// Returns true for the short number family (shortcodes and N11 codes),
    /// which never carries a country or area code.
    pub fn is_short_number(&self) -> bool {
        matches!(self, Format::Shortcode | Format::N11)
    }
}

/// Billing category of a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum TollState {
    /// NADP number in one of the toll-free area codes (800, 888, ...).
    TollFree,
    /// NADP premium-rate number (area code 900).
    Premium,
    /// Regular NADP number.
    Standard,
    Shortcode,
    /// N11 service code, resolved against the fixed service table.
    ServiceCode(ServiceCode),
    International,
    Unknown,
}

/// Fixed table of NADP N11 service codes.
///
/// `code()` gives the machine tag (for example `emergency`) and
/// `description()` a human readable label.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash,
    Display, AsRefStr, IntoStaticStr, EnumString, EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum ServiceCode {
    CommunityServices,
    MunicipalServices,
    DirectoryInfo,
    TrafficInfo,
    RepairService,
    RelayService,
    UtilityLocate,
    Emergency,
    EmergencyAddressTest,
    /// A well formed N11 code that has no assignment in the table.
    #[default]
    Unknown,
}

impl ServiceCode {
    /// Resolves a 3-digit service code. Codes outside the table map to
    /// [`ServiceCode::Unknown`].
    pub fn from_dial_code(dial_code: &str) -> Self {
        match dial_code {
            "211" => ServiceCode::CommunityServices,
            "311" => ServiceCode::MunicipalServices,
            "411" => ServiceCode::DirectoryInfo,
            "511" => ServiceCode::TrafficInfo,
            "611" => ServiceCode::RepairService,
            "711" => ServiceCode::RelayService,
            "811" => ServiceCode::UtilityLocate,
            "911" => ServiceCode::Emergency,
            "933" => ServiceCode::EmergencyAddressTest,
            _ => ServiceCode::Unknown,
        }
    }

    /// The digits dialed to reach the service, `None` for [`ServiceCode::Unknown`].
    pub fn dial_code(&self) -> Option<&'static str> {
        match self {
            ServiceCode::CommunityServices => Some("211"),
            ServiceCode::MunicipalServices => Some("311"),
            ServiceCode::DirectoryInfo => Some("411"),
            ServiceCode::TrafficInfo => Some("511"),
            ServiceCode::RepairService => Some("611"),
            ServiceCode::RelayService => Some("711"),
            ServiceCode::UtilityLocate => Some("811"),
            ServiceCode::Emergency => Some("911"),
            ServiceCode::EmergencyAddressTest => Some("933"),
            ServiceCode::Unknown => None,
        }
    }

    pub fn code(&self) -> &'static str {
        (*self).into()
    }

    pub fn description(&self) -> &'static str {
        match self {
            ServiceCode::CommunityServices => "Community information and referral services",
            ServiceCode::MunicipalServices => "Municipal government services",
            ServiceCode::DirectoryInfo => "Directory assistance",
            ServiceCode::TrafficInfo => "Traffic and transportation information",
            ServiceCode::RepairService => "Telephone company customer service and repair",
            ServiceCode::RelayService => "Telecommunications relay service",
            ServiceCode::UtilityLocate => "Underground public utility location",
            ServiceCode::Emergency => "Emergency services",
            ServiceCode::EmergencyAddressTest => "Emergency address verification test",
            ServiceCode::Unknown => "Unassigned service code",
        }
    }
}

/// Keyspaces served by a [`MetadataProvider`](crate::MetadataProvider).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Namespace {
    /// Keyed by country calling code, e.g. `968`.
    Country,
    /// Keyed by 3-digit NADP area code, e.g. `201`.
    Nadp,
}
