//! Property identifier codec
//!
//! A property identifier is a packed 32-bit integer. Collaborators (storage,
//! vCard, IPC) depend on its numeric layout, so the packed form is what
//! travels. Internal logic decodes it once into a [`PropertyInfo`].
//!
//! ## Layout
//!
//! | Bits | Mask | Field |
//! |------|------|-------|
//! | 31..20 | `0xFFF0_0000` | category |
//! | 19..16 | `0x000F_0000` | search-capability class |
//! | 15..12 | `0x0000_F000` | value datatype |
//! | 8 | `0x0000_0100` | read-only flag |
//! | 7..0 | `0x0000_00FF` | sequence index within the category |
//!
//! The codec has no error paths. A field that does not decode to a known
//! value comes back as `None`, and the registry or dispatch layer rejects
//! the identifier with `InvalidParameter`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::category::Category;

// =============================================================================
// Bit Layout
// =============================================================================

/// Category bits
pub const CATEGORY_MASK: u32 = 0xFFF0_0000;
/// Category shift
pub const CATEGORY_SHIFT: u32 = 20;
/// Search-capability class bits
pub const SEARCH_CLASS_MASK: u32 = 0x000F_0000;
/// Search-capability class shift
pub const SEARCH_CLASS_SHIFT: u32 = 16;
/// Value datatype bits
pub const DATA_TYPE_MASK: u32 = 0x0000_F000;
/// Value datatype shift
pub const DATA_TYPE_SHIFT: u32 = 12;
/// Read-only bit
pub const READ_ONLY_BIT: u32 = 0x0000_0100;
/// Sequence index bits
pub const SEQUENCE_MASK: u32 = 0x0000_00FF;

/// Value datatype of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    /// Boolean
    Bool,
    /// 32-bit integer
    Int,
    /// 64-bit integer
    Lli,
    /// Nullable string
    Str,
    /// Double precision float
    Double,
    /// Child record list
    Record,
}

impl DataType {
    /// Encoded value in the datatype bits
    pub const fn bits(self) -> u32 {
        match self {
            DataType::Bool => 1,
            DataType::Int => 2,
            DataType::Lli => 3,
            DataType::Str => 4,
            DataType::Double => 5,
            DataType::Record => 6,
        }
    }

    /// Decode from the datatype bits
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            1 => Some(DataType::Bool),
            2 => Some(DataType::Int),
            3 => Some(DataType::Lli),
            4 => Some(DataType::Str),
            5 => Some(DataType::Double),
            6 => Some(DataType::Record),
            _ => None,
        }
    }

    /// Accessor family name, used in error messages
    pub const fn name(self) -> &'static str {
        match self {
            DataType::Bool => "bool",
            DataType::Int => "int",
            DataType::Lli => "lli",
            DataType::Str => "str",
            DataType::Double => "double",
            DataType::Record => "record",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a property may appear in a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchClass {
    /// Usable in filters and projections
    All,
    /// Usable in filters only
    Filter,
    /// Usable in projections only
    Projection,
    /// Not queryable (child relationships)
    None,
}

impl SearchClass {
    /// Encoded value in the search-class bits
    pub const fn bits(self) -> u32 {
        match self {
            SearchClass::All => 1,
            SearchClass::Filter => 2,
            SearchClass::Projection => 3,
            SearchClass::None => 4,
        }
    }

    /// Decode from the search-class bits
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            1 => Some(SearchClass::All),
            2 => Some(SearchClass::Filter),
            3 => Some(SearchClass::Projection),
            4 => Some(SearchClass::None),
            _ => None,
        }
    }

    /// Whether the property can be used in a filter
    pub const fn allows_filter(self) -> bool {
        matches!(self, SearchClass::All | SearchClass::Filter)
    }

    /// Whether the property can be selected in a projection
    pub const fn allows_projection(self) -> bool {
        matches!(self, SearchClass::All | SearchClass::Projection)
    }
}

/// Packed property identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(u32);

impl PropertyId {
    /// Pack the fields into an identifier
    pub const fn new(
        category: Category,
        data_type: DataType,
        search_class: SearchClass,
        read_only: bool,
        sequence: u8,
    ) -> Self {
        let mut raw = ((category.bits() as u32) << CATEGORY_SHIFT) & CATEGORY_MASK;
        raw |= (search_class.bits() << SEARCH_CLASS_SHIFT) & SEARCH_CLASS_MASK;
        raw |= (data_type.bits() << DATA_TYPE_SHIFT) & DATA_TYPE_MASK;
        if read_only {
            raw |= READ_ONLY_BIT;
        }
        raw |= sequence as u32;
        PropertyId(raw)
    }

    /// Wrap a raw identifier received from a collaborator
    pub const fn from_raw(raw: u32) -> Self {
        PropertyId(raw)
    }

    /// The packed integer
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Raw category bits
    pub const fn category_bits(self) -> u16 {
        ((self.0 & CATEGORY_MASK) >> CATEGORY_SHIFT) as u16
    }

    /// Category, if the bits name a known one
    pub const fn category(self) -> Option<Category> {
        Category::from_bits(self.category_bits())
    }

    /// Value datatype, if the bits name a known one
    pub const fn data_type(self) -> Option<DataType> {
        DataType::from_bits((self.0 & DATA_TYPE_MASK) >> DATA_TYPE_SHIFT)
    }

    /// Search-capability class, if the bits name a known one
    pub const fn search_class(self) -> Option<SearchClass> {
        SearchClass::from_bits((self.0 & SEARCH_CLASS_MASK) >> SEARCH_CLASS_SHIFT)
    }

    /// Whether external setters must reject this property
    pub const fn is_read_only(self) -> bool {
        self.0 & READ_ONLY_BIT != 0
    }

    /// Sequence index within the category
    pub const fn sequence(self) -> u8 {
        (self.0 & SEQUENCE_MASK) as u8
    }

    /// Decode every field at once
    pub const fn decode(self) -> PropertyInfo {
        PropertyInfo {
            category: self.category(),
            data_type: self.data_type(),
            search_class: self.search_class(),
            read_only: self.is_read_only(),
            sequence: self.sequence(),
        }
    }
}

impl fmt::Debug for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PropertyId(0x{:08X})", self.0)
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

impl From<PropertyId> for u32 {
    fn from(id: PropertyId) -> Self {
        id.0
    }
}

/// Decoded view of a [`PropertyId`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyInfo {
    /// Entity kind the property belongs to
    pub category: Option<Category>,
    /// Value datatype
    pub data_type: Option<DataType>,
    /// Search-capability class
    pub search_class: Option<SearchClass>,
    /// Read-only flag
    pub read_only: bool,
    /// Sequence index within the category
    pub sequence: u8,
}
