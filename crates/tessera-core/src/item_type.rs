//! Item type tags stored in every arena item header.

use std::fmt;

use crate::error::ItemTypeError;

/// Type tag identifying the variant of an arena item.
///
/// The discriminants are the on-disk `u16` values and must never change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ItemType {
    /// No type assigned.
    Undefined = 0x00,
    /// A node object.
    Node = 0x01,
    /// A way object.
    Way = 0x02,
    /// A relation object.
    Relation = 0x03,
    /// An assembled area.
    Area = 0x04,
    /// A changeset.
    Changeset = 0x05,
    /// A list of key/value tags.
    TagList = 0x11,
    /// The ordered node references of a way.
    WayNodeList = 0x12,
    /// The members of a relation.
    RelationMemberList = 0x13,
    /// Relation members with their full objects inlined.
    RelationMemberListWithFullMembers = 0x23,
    /// The outer boundary ring of an area.
    OuterRing = 0x40,
    /// A hole inside an outer ring.
    InnerRing = 0x41,
}

impl ItemType {
    /// The raw `u16` tag.
    pub fn as_u16(self) -> u16 {
        self as u16
    }

    /// Whether items of this type carry a node-reference list payload.
    pub fn is_node_ref_list(self) -> bool {
        NodeRefListKind::try_from(self).is_ok()
    }
}

impl TryFrom<u16> for ItemType {
    type Error = ItemTypeError;

    fn try_from(raw: u16) -> Result<Self, Self::Error> {
        Ok(match raw {
            0x00 => Self::Undefined,
            0x01 => Self::Node,
            0x02 => Self::Way,
            0x03 => Self::Relation,
            0x04 => Self::Area,
            0x05 => Self::Changeset,
            0x11 => Self::TagList,
            0x12 => Self::WayNodeList,
            0x13 => Self::RelationMemberList,
            0x23 => Self::RelationMemberListWithFullMembers,
            0x40 => Self::OuterRing,
            0x41 => Self::InnerRing,
            _ => return Err(ItemTypeError::Unknown { raw }),
        })
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Undefined => "undefined",
            Self::Node => "node",
            Self::Way => "way",
            Self::Relation => "relation",
            Self::Area => "area",
            Self::Changeset => "changeset",
            Self::TagList => "tag_list",
            Self::WayNodeList => "way_node_list",
            Self::RelationMemberList => "relation_member_list",
            Self::RelationMemberListWithFullMembers => "relation_member_list_with_full_members",
            Self::OuterRing => "outer_ring",
            Self::InnerRing => "inner_ring",
        };
        f.write_str(name)
    }
}

/// The item types whose payload is a packed run of node references.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeRefListKind {
    /// The nodes of a way, in way direction.
    WayNodes,
    /// An outer boundary ring.
    OuterRing,
    /// An inner boundary ring.
    InnerRing,
}

impl NodeRefListKind {
    /// The header tag written for lists of this kind.
    pub fn item_type(self) -> ItemType {
        match self {
            Self::WayNodes => ItemType::WayNodeList,
            Self::OuterRing => ItemType::OuterRing,
            Self::InnerRing => ItemType::InnerRing,
        }
    }

    /// Whether lists of this kind describe an area boundary.
    pub fn is_ring(self) -> bool {
        matches!(self, Self::OuterRing | Self::InnerRing)
    }
}

impl TryFrom<ItemType> for NodeRefListKind {
    type Error = ItemTypeError;

    fn try_from(item_type: ItemType) -> Result<Self, Self::Error> {
        match item_type {
            ItemType::WayNodeList => Ok(Self::WayNodes),
            ItemType::OuterRing => Ok(Self::OuterRing),
            ItemType::InnerRing => Ok(Self::InnerRing),
            other => Err(ItemTypeError::NotANodeRefList {
                raw: other.as_u16(),
            }),
        }
    }
}

impl fmt::Display for NodeRefListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.item_type().fmt(f)
    }
}
