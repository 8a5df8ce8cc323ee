mod interfaces;
mod didutil;
mod in_memory_provider;
pub mod i18n;
pub(crate) mod regex_util;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use didutil::{
    DID_UTIL, Format, MetadataAssembler, Namespace, Region, ServiceCode, TollState,
    didutil::{DidUtil, Result},
    errors::DidError,
    helper_types::{
        Classification, CountryMetadata, DidInput, ExtractedNumber, Locality, Metadata,
        MetadataRecord, NadpMetadata, SplitNadpNumber,
    },
};
pub use in_memory_provider::InMemoryMetadataProvider;
pub use interfaces::MetadataProvider;
