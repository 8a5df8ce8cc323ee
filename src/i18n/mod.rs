pub mod calling_codes;
pub mod region_code;

pub use calling_codes::CALLING_CODES;
pub use region_code::RegionCode;
