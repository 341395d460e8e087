use super::error::InvalidConfiguration;
use std::fmt;
use std::num::NonZeroUsize;

/// Upper bound on the number of items a queue may hold at once.
///
/// A bounded queue rejects pushes once it holds `limit` items. An unbounded
/// queue never rejects a push for size reasons; it grows until memory runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Capacity {
    Bounded(NonZeroUsize),
    #[default]
    Unbounded,
}

impl Capacity {
    /// Returns a bounded capacity of `limit` items.
    ///
    /// Fails with [`InvalidConfiguration`] when `limit` is zero.
    pub fn bounded(limit: usize) -> Result<Self, InvalidConfiguration> {
        NonZeroUsize::new(limit)
            .map(Capacity::Bounded)
            .ok_or(InvalidConfiguration::new(limit as i128))
    }

    /// The item limit, or `None` when unbounded.
    #[inline]
    pub fn limit(&self) -> Option<usize> {
        match self {
            Capacity::Bounded(limit) => Some(limit.get()),
            Capacity::Unbounded => None,
        }
    }

    /// Returns `true` if a buffer currently holding `len` items has room for one more.
    #[inline]
    pub fn admits(&self, len: usize) -> bool {
        match self {
            Capacity::Bounded(limit) => len < limit.get(),
            Capacity::Unbounded => true,
        }
    }

    #[inline]
    pub fn is_bounded(&self) -> bool {
        matches!(self, Capacity::Bounded(_))
    }
}

impl TryFrom<usize> for Capacity {
    type Error = InvalidConfiguration;

    fn try_from(limit: usize) -> Result<Self, Self::Error> {
        Capacity::bounded(limit)
    }
}

impl TryFrom<i64> for Capacity {
    type Error = InvalidConfiguration;

    fn try_from(limit: i64) -> Result<Self, Self::Error> {
        usize::try_from(limit)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Capacity::Bounded)
            .ok_or(InvalidConfiguration::new(limit as i128))
    }
}

impl From<NonZeroUsize> for Capacity {
    fn from(limit: NonZeroUsize) -> Self {
        Capacity::Bounded(limit)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capacity::Bounded(limit) => write!(f, "{limit}"),
            Capacity::Unbounded => f.write_str("unbounded"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_rejected() {
        let err = Capacity::bounded(0).unwrap_err();
        assert_eq!(err.requested(), 0);
    }

    #[test]
    fn negative_is_rejected() {
        let err = Capacity::try_from(-5i64).unwrap_err();
        assert_eq!(err.requested(), -5);
    }

    #[test]
    fn bounded_admits_below_limit_only() {
        let cap = Capacity::bounded(2).unwrap();
        assert!(cap.admits(0));
        assert!(cap.admits(1));
        assert!(!cap.admits(2));
        assert_eq!(cap.limit(), Some(2));
    }

    #[test]
    fn unbounded_admits_everything() {
        let cap = Capacity::default();
        assert_eq!(cap, Capacity::Unbounded);
        assert!(cap.admits(usize::MAX));
        assert_eq!(cap.limit(), None);
        assert_eq!(cap.to_string(), "unbounded");
    }
}
