use std::fmt;

/// Unique identifier of a Lutemon.
///
/// Ids are handed out by the storage allocator, start at 1 and are never
/// reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LutemonId(pub u32);

impl LutemonId {
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for LutemonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for LutemonId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}
