/// Number of weekday slots recorded per tour. Every saved tour carries
/// exactly this many day rows, selected or not.
pub const WEEKDAY_SLOTS: usize = 7;

/// Smallest pickup period tag
pub const PERIOD_MIN: u8 = 1;

/// Largest pickup period tag
pub const PERIOD_MAX: u8 = 10;

/// Name of the distinguished flat zoning region. Areas under this region
/// form a plain tag list, kept apart from the general region hierarchy.
pub const ZONING_REGION_NAME: &str = "Bölgelendirme";
