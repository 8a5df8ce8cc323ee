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

use thiserror::Error;

use super::enums::{Format, Namespace};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DidError {
    /// The input is not a string at all (absent, integer or float).
    #[error("Invalid number given")]
    InvalidNumber,
    /// The string does not match the grammar required to decompose it.
    #[error("Number does not match the expected number format")]
    InvalidNumberFormat,
    /// The requested conversion is not valid for the number's region and format.
    #[error("Can not convert a {current} number to {target}")]
    InvalidFormat { current: Format, target: Format },
    /// Reference data lookup miss.
    #[error("No {namespace} metadata found for {key}")]
    NotFound { namespace: Namespace, key: String },
}
