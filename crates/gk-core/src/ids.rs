use core::fmt;
use core::num::NonZeroU32;

/// Compact, stable identifier for a graph node.
///
/// - `u32` keeps memory small
/// - `NonZero` enables `Option<NodeId>` to be pointer-optimized
///
/// A node keeps its id for its whole lifetime; removing other nodes never
/// renumbers it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(NonZeroU32);

impl NodeId {
    /// Create an id from a 0-based index by storing index+1.
    ///
    /// `u32::MAX` saturates onto `u32::MAX - 1`; graphs never get that large.
    pub fn from_index(index: u32) -> Self {
        Self(NonZeroU32::MIN.saturating_add(index))
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.index())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

impl From<u32> for NodeId {
    fn from(index: u32) -> Self {
        Self::from_index(index)
    }
}

/// Snapshots store ids as plain non-negative integers.
#[cfg(feature = "serde")]
impl serde::Serialize for NodeId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.index())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for NodeId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let index = u32::deserialize(deserializer)?;
        if index == u32::MAX {
            return Err(serde::de::Error::custom("node id out of range"));
        }
        Ok(Self::from_index(index))
    }
}
