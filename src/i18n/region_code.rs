pub struct RegionCode {
}

impl RegionCode {
    pub fn us() -> &'static str {
        return "US";
    }

    pub fn ca() -> &'static str {
        return "CA";
    }

    /// Returns whether NADP area codes of the region are attributed to a
    /// state or province. Other NADP members (Caribbean and Atlantic
    /// territories) are reported at country level only.
    pub fn has_subdivisions(region_code: &str) -> bool {
        region_code == Self::us() || region_code == Self::ca()
    }
}
