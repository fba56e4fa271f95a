use std::sync::atomic::{AtomicU64, Ordering};

use super::domain::{IntakeError, LineItem, LineItemDraft, LineItemId};

static LINE_ITEM_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_line_item_id() -> LineItemId {
    LineItemId(LINE_ITEM_SEQUENCE.fetch_add(1, Ordering::Relaxed))
}

/// Ordered collection of committed line items plus the staging buffer for
/// the entry under construction.
///
/// Identities come from a process-wide monotonic sequence, so they stay
/// unique across removals, post-submission resets, and sibling editors.
#[derive(Debug, Clone)]
pub struct LineItemEditor<D: LineItemDraft> {
    staging: D,
    items: Vec<D::Item>,
}

impl<D: LineItemDraft> LineItemEditor<D> {
    pub fn new() -> Self {
        Self {
            staging: D::default(),
            items: Vec::new(),
        }
    }

    /// The entry under construction.
    pub fn staging(&self) -> &D {
        &self.staging
    }

    /// Mutable access for per-attribute staging edits. Nothing validates
    /// until commit.
    pub fn staging_mut(&mut self) -> &mut D {
        &mut self.staging
    }

    /// Validate the staging buffer and append it to the collection.
    ///
    /// On success the committed entry receives a fresh identity, insertion
    /// order is preserved, and the buffer is cleared. On failure the buffer
    /// and the collection are left untouched; there is no partial commit.
    pub fn commit_staging(&mut self) -> Result<LineItemId, IntakeError> {
        let id = next_line_item_id();
        let item = self.staging.promote(id)?;
        self.items.push(item);
        self.staging = D::default();
        Ok(id)
    }

    /// Remove the entry with the given identity.
    ///
    /// Unknown identities are a no-op; remaining entries keep their order and
    /// identities, so the call is idempotent.
    pub fn remove(&mut self, id: LineItemId) {
        self.items.retain(|item| item.id() != id);
    }

    /// Committed entries in insertion order.
    pub fn items(&self) -> &[D::Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Discard the collection and the staging buffer. The identity sequence
    /// keeps advancing; tokens are never reissued.
    pub fn clear(&mut self) {
        self.items.clear();
        self.staging = D::default();
    }
}

impl<D: LineItemDraft> Default for LineItemEditor<D> {
    fn default() -> Self {
        Self::new()
    }
}
