mod helper_constants;
mod did_regexps;
mod formatter;
mod metadata;
pub mod errors;
pub mod enums;
pub mod didutil;
pub mod helper_types;

use std::sync::LazyLock;

pub use enums::{Format, Namespace, Region, ServiceCode, TollState};
pub use metadata::MetadataAssembler;
use crate::didutil::didutil::DidUtil;

pub static DID_UTIL: LazyLock<DidUtil> = LazyLock::new(|| {
    DidUtil::new()
});
