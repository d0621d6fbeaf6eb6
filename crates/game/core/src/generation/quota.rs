use crate::board::RoomType;
use crate::env::RoomSettingsOracle;

/// Configured limit for one special room type.
///
/// The desired count is `min(max_count, available / divisor)`; a zero divisor
/// disables the type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuotaRule {
    pub divisor: u32,
    pub max_count: u32,
}

impl QuotaRule {
    pub const fn new(divisor: u32, max_count: u32) -> Self {
        Self { divisor, max_count }
    }

    pub fn desired_count(&self, available: usize) -> usize {
        if self.divisor == 0 {
            return 0;
        }
        (available / self.divisor as usize).min(self.max_count as usize)
    }
}

/// Number of rooms of one type the assigner should try to place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quota {
    pub room_type: RoomType,
    pub count: usize,
}

impl Quota {
    pub const fn new(room_type: RoomType, count: usize) -> Self {
        Self { room_type, count }
    }
}

/// Builds the quota list in [`RoomType::QUOTA_PRIORITY`] order.
///
/// `available` is the number of classifiable rooms (non-start corridors).
/// Types without a quota rule get a count of zero.
pub fn quotas_from_settings<S>(settings: &S, available: usize) -> Vec<Quota>
where
    S: RoomSettingsOracle + ?Sized,
{
    RoomType::QUOTA_PRIORITY
        .iter()
        .map(|&room_type| {
            let count = settings
                .quota_rule(room_type)
                .map(|rule| rule.desired_count(available))
                .unwrap_or(0);
            Quota::new(room_type, count)
        })
        .collect()
}
