//! The item buffer: a bump-allocated byte arena holding packed items.
//!
//! An [`ItemBuffer`] owns one contiguous `Vec<u8>` and two cursors:
//!
//! ```text
//! 0              committed          written            capacity
//! ├── items ─────┤── in progress ───┤── free ───────────┤
//! ```
//!
//! Builders reserve space past `written`; `commit()` publishes everything
//! up to `written` as complete items, `rollback()` discards it. Only the
//! committed region is visible to readers.

use std::iter::FusedIterator;

use tracing::{debug, warn};

use tessera_core::{NodeRef, NodeRefListKind};

use crate::builder::NodeRefListBuilder;
use crate::config::BufferConfig;
use crate::error::ArenaError;
use crate::handle::ItemHandle;
use crate::header::{ItemHeader, ALIGN_BYTES};
use crate::list::NodeRefList;
use crate::list_mut::NodeRefListMut;

/// Smallest capacity a growing buffer jumps to.
const MIN_GROWTH: usize = 64;

/// A bump-allocated arena of packed, typed items.
///
/// Items are never freed individually. [`clear`](Self::clear) drops all of
/// them at once and bumps the generation so that outstanding handles are
/// detected as stale.
pub struct ItemBuffer {
    /// Backing storage. `data.len()` is the capacity; bytes past `written`
    /// are unspecified until reserved.
    data: Vec<u8>,
    /// End of the in-progress region.
    written: usize,
    /// End of the committed region.
    committed: usize,
    /// Incremented on every `clear()`.
    generation: u32,
    config: BufferConfig,
}

impl ItemBuffer {
    /// Create a buffer from a configuration.
    ///
    /// Capacities are clamped to what a `u32` handle offset can address.
    pub fn new(config: BufferConfig) -> Self {
        let max_capacity = config.max_capacity.min(BufferConfig::DEFAULT_MAX_CAPACITY);
        let initial = config.initial_capacity.min(max_capacity);
        Self {
            data: vec![0; initial],
            written: 0,
            committed: 0,
            generation: 0,
            config: BufferConfig {
                initial_capacity: initial,
                max_capacity,
                ..config
            },
        }
    }

    /// Create a growable buffer with the given initial capacity in bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(BufferConfig::new(capacity))
    }

    /// The configuration this buffer was created with (after clamping).
    pub fn config(&self) -> &BufferConfig {
        &self.config
    }

    /// Reserve `len` bytes past the in-progress cursor.
    ///
    /// Returns the zeroed reserved region. Grows the buffer when allowed;
    /// fails with [`ArenaError::CapacityExceeded`] otherwise. Reserved bytes
    /// stay invisible to readers until [`commit`](Self::commit).
    ///
    /// Raw reservations are not items: [`items`](Self::items) reports them
    /// as corrupt. Builders always start on an item boundary regardless.
    pub fn reserve_space(&mut self, len: usize) -> Result<&mut [u8], ArenaError> {
        let end = self
            .written
            .checked_add(len)
            .ok_or(ArenaError::CapacityExceeded {
                requested: len,
                capacity: self.config.max_capacity,
            })?;
        if end > self.data.len() {
            self.grow(end, len)?;
        }
        let start = self.written;
        self.written = end;
        let slice = &mut self.data[start..end];
        slice.fill(0);
        Ok(slice)
    }

    fn grow(&mut self, needed: usize, requested: usize) -> Result<(), ArenaError> {
        if !self.config.auto_grow || needed > self.config.max_capacity {
            let capacity = if self.config.auto_grow {
                self.config.max_capacity
            } else {
                self.data.len()
            };
            warn!(requested, needed, capacity, "item buffer reservation refused");
            return Err(ArenaError::CapacityExceeded {
                requested,
                capacity,
            });
        }
        let new_capacity = self
            .data
            .len()
            .saturating_mul(2)
            .max(needed)
            .max(MIN_GROWTH)
            .min(self.config.max_capacity);
        debug!(
            from = self.data.len(),
            to = new_capacity,
            "growing item buffer"
        );
        self.data.resize(new_capacity, 0);
        Ok(())
    }

    /// Publish everything reserved since the last commit.
    ///
    /// Returns the offset where the newly committed region starts.
    pub fn commit(&mut self) -> usize {
        let start = self.committed;
        self.committed = self.written;
        start
    }

    /// Discard everything reserved since the last commit.
    pub fn rollback(&mut self) {
        self.written = self.committed;
    }

    /// Drop all items and invalidate every outstanding handle.
    ///
    /// Capacity is kept.
    pub fn clear(&mut self) {
        debug!(
            committed = self.committed,
            generation = self.generation,
            "clearing item buffer"
        );
        self.written = 0;
        self.committed = 0;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Bytes in the committed region.
    pub fn committed(&self) -> usize {
        self.committed
    }

    /// Bytes reserved so far, committed or not.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Current capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Current generation; handles from other generations are stale.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Whether no item has been committed.
    pub fn is_empty(&self) -> bool {
        self.committed == 0
    }

    /// The committed region.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.committed]
    }

    /// Start a node-reference list of the given kind.
    pub fn node_ref_list_builder(
        &mut self,
        kind: NodeRefListKind,
    ) -> Result<NodeRefListBuilder<'_>, ArenaError> {
        NodeRefListBuilder::new(self, kind)
    }

    /// Build and commit a node-reference list in one call.
    pub fn push_node_ref_list(
        &mut self,
        kind: NodeRefListKind,
        refs: impl IntoIterator<Item = NodeRef>,
    ) -> Result<ItemHandle, ArenaError> {
        let mut builder = NodeRefListBuilder::new(self, kind)?;
        builder.extend(refs)?;
        builder.finish()
    }

    /// Read the header of a committed item.
    pub fn header(&self, handle: ItemHandle) -> Result<ItemHeader, ArenaError> {
        self.locate(handle).map(|(header, _)| header)
    }

    /// Resolve a handle to a read-only node-reference list view.
    pub fn node_ref_list(&self, handle: ItemHandle) -> Result<NodeRefList<'_>, ArenaError> {
        let (header, start) = self.locate(handle)?;
        let end = start + header.byte_size() as usize;
        NodeRefList::from_bytes(&self.data[start..end]).inspect_err(|e| {
            warn!(offset = start, error = %e, "rejected corrupt node reference list");
        })
    }

    /// Resolve a handle to a view allowing in-place edits of element values.
    pub fn node_ref_list_mut(
        &mut self,
        handle: ItemHandle,
    ) -> Result<NodeRefListMut<'_>, ArenaError> {
        let (header, start) = self.locate(handle)?;
        let end = start + header.byte_size() as usize;
        NodeRefListMut::from_bytes(&mut self.data[start..end]).inspect_err(|e| {
            warn!(offset = start, error = %e, "rejected corrupt node reference list");
        })
    }

    /// Set or clear the removed flag of a committed item.
    pub fn set_removed(&mut self, handle: ItemHandle, removed: bool) -> Result<(), ArenaError> {
        let (header, start) = self.locate(handle)?;
        header.with_removed(removed).write_to(&mut self.data[start..]);
        Ok(())
    }

    /// Iterate over committed items in buffer order.
    ///
    /// Yields `Err` once and stops if a corrupt header is encountered.
    pub fn items(&self) -> Items<'_> {
        Items {
            bytes: self.as_bytes(),
            offset: 0,
            generation: self.generation,
            done: false,
        }
    }

    /// Rewrite the item header at `start`.
    ///
    /// Used by builders on in-progress bytes; `start` must lie in the
    /// written region.
    pub(crate) fn write_header(&mut self, start: usize, header: ItemHeader) {
        header.write_to(&mut self.data[start..self.written]);
    }

    /// Validate a handle and return the item header plus its start offset.
    fn locate(&self, handle: ItemHandle) -> Result<(ItemHeader, usize), ArenaError> {
        if handle.generation != self.generation {
            return Err(ArenaError::StaleHandle {
                handle_generation: handle.generation,
                current: self.generation,
            });
        }
        let start = handle.offset();
        if start >= self.committed || start % ALIGN_BYTES != 0 {
            return Err(ArenaError::InvalidOffset {
                offset: start,
                committed: self.committed,
            });
        }
        let header = ItemHeader::read_from(&self.data[start..self.committed])?;
        let available = self.committed - start;
        if header.byte_size() as usize > available {
            return Err(ArenaError::Truncated {
                needed: header.byte_size() as usize,
                available,
            });
        }
        Ok((header, start))
    }
}

impl Default for ItemBuffer {
    fn default() -> Self {
        Self::new(BufferConfig::default())
    }
}

/// Iterator over the committed items of an [`ItemBuffer`].
pub struct Items<'a> {
    bytes: &'a [u8],
    offset: usize,
    generation: u32,
    done: bool,
}

impl Iterator for Items<'_> {
    type Item = Result<(ItemHandle, ItemHeader), ArenaError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.offset >= self.bytes.len() {
            return None;
        }
        let bytes = self.bytes;
        let rest = &bytes[self.offset..];
        let header = match ItemHeader::read_from(rest) {
            Ok(header) => header,
            Err(e) => return Some(Err(self.fail(e))),
        };
        if header.byte_size() as usize > rest.len() {
            let e = ArenaError::Truncated {
                needed: header.byte_size() as usize,
                available: rest.len(),
            };
            return Some(Err(self.fail(e)));
        }
        let handle = ItemHandle::new(self.generation, self.offset as u32);
        self.offset = self.offset.saturating_add(header.padded_size());
        Some(Ok((handle, header)))
    }
}

impl Items<'_> {
    fn fail(&mut self, error: ArenaError) -> ArenaError {
        warn!(offset = self.offset, error = %error, "stopping item iteration at corrupt header");
        self.done = true;
        error
    }
}

impl FusedIterator for Items<'_> {}
