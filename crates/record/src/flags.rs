//! Per-property PROJECTED/DIRTY bookkeeping
//!
//! The flag array is allocated lazily. A record loaded in full, or freshly
//! created and never written, carries no array at all.

use bitflags::bitflags;
use contacts_core::Result;
use tracing::debug;

bitflags! {
    /// Bits kept for each property and for the record as a whole
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PropertyFlag: u8 {
        /// Fetched by a projected query
        const PROJECTED = 0x01;
        /// Modified since load
        const DIRTY = 0x02;
    }
}

/// Readability state of a record's properties
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionState {
    /// No flag array: every property is readable
    Unallocated,
    /// Flag array present, no property projected
    Unrestricted,
    /// At least one property projected; only those are readable
    Restricted,
}

/// Flag array plus the union of every bit set in it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyFlags {
    per_property: Option<Box<[PropertyFlag]>>,
    summary: PropertyFlag,
}

impl PropertyFlags {
    /// Flags with no array allocated
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the array has been allocated
    pub fn is_allocated(&self) -> bool {
        self.per_property.is_some()
    }

    /// Union of all bits ever set
    pub fn summary(&self) -> PropertyFlag {
        self.summary
    }

    /// Flags of the property at `index`; empty when unallocated
    pub fn get(&self, index: usize) -> PropertyFlag {
        self.per_property
            .as_ref()
            .and_then(|flags| flags.get(index).copied())
            .unwrap_or_default()
    }

    /// Current projection state
    pub fn projection_state(&self) -> ProjectionState {
        if !self.is_allocated() {
            ProjectionState::Unallocated
        } else if self.summary.contains(PropertyFlag::PROJECTED) {
            ProjectionState::Restricted
        } else {
            ProjectionState::Unrestricted
        }
    }

    /// Whether any property is dirty
    pub fn any_dirty(&self) -> bool {
        self.summary.contains(PropertyFlag::DIRTY)
    }

    /// Indices of dirty properties, ascending
    pub fn dirty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.per_property
            .iter()
            .flat_map(|flags| flags.iter().enumerate())
            .filter(|(_, f)| f.contains(PropertyFlag::DIRTY))
            .map(|(idx, _)| idx)
    }

    /// Allocate a zeroed array of `count` entries without touching `self`
    ///
    /// Callers allocate before mutating the record so that a failed
    /// reservation leaves nothing half-applied.
    pub(crate) fn allocate(count: usize) -> Result<Box<[PropertyFlag]>> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(count)?;
        buf.resize(count, PropertyFlag::empty());
        Ok(buf.into_boxed_slice())
    }

    /// Install a pre-allocated array if none is present
    pub(crate) fn install(&mut self, buf: Option<Box<[PropertyFlag]>>) {
        if self.per_property.is_none() {
            if let Some(buf) = buf {
                debug!(count = buf.len(), "Allocated property flag array");
                self.per_property = Some(buf);
            }
        }
    }

    /// Set `flag` on the property at `index` and in the summary
    ///
    /// The array must already be installed.
    pub(crate) fn insert(&mut self, index: usize, flag: PropertyFlag) {
        if let Some(slot) = self
            .per_property
            .as_mut()
            .and_then(|flags| flags.get_mut(index))
        {
            slot.insert(flag);
            self.summary.insert(flag);
        }
    }

    /// Replace the whole array, as a projection does
    pub(crate) fn replace(&mut self, per_property: Box<[PropertyFlag]>, summary: PropertyFlag) {
        self.per_property = Some(per_property);
        self.summary = summary;
    }

    /// Drop DIRTY from every property, keeping projection bits
    pub(crate) fn clear_dirty(&mut self) {
        if let Some(flags) = self.per_property.as_mut() {
            for slot in flags.iter_mut() {
                slot.remove(PropertyFlag::DIRTY);
            }
        }
        self.summary.remove(PropertyFlag::DIRTY);
    }

    /// Copy of these flags with fallible allocation
    pub(crate) fn try_clone(&self) -> Result<Self> {
        let per_property = match &self.per_property {
            Some(flags) => {
                let mut buf = Self::allocate(flags.len())?;
                buf.copy_from_slice(flags);
                Some(buf)
            }
            None => None,
        };
        Ok(Self {
            per_property,
            summary: self.summary,
        })
    }
}
