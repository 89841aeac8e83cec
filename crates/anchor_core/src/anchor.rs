//! Anchor storage and lifecycle
//!
//! The registry is the single authoritative owner of live anchors. Every
//! other component — dispatcher, UI layer, engine integration — addresses
//! anchors only through generational handles, so a handle held across a
//! removal can never alias a newer anchor.

use slotmap::{new_key_type, SlotMap};

use crate::backend::PayloadFactory;
use crate::foundation::math::{Transform, Vec3};
use crate::spawn::SpawnKind;

new_key_type! {
    /// Opaque generational handle addressing a live anchor
    pub struct AnchorHandle;
}

/// A registered spatial placement holding one visual payload
#[derive(Debug, Clone)]
pub struct Anchor {
    /// World-space pose the payload is parented to
    pub pose: Transform,
    /// Which payload kind the anchor holds
    pub kind: SpawnKind,
}

impl Anchor {
    fn at(position: Vec3, kind: SpawnKind) -> Self {
        Self {
            pose: Transform::from_position(position),
            kind,
        }
    }

    /// World-space position of the anchor
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.pose.position
    }
}

/// Authoritative collection of live anchors
///
/// Creation and destruction of the visual payload happen as side effects of
/// `create`/`remove`/`clear` through the [`PayloadFactory`] collaborator;
/// the registry itself holds no engine state.
#[derive(Debug, Default)]
pub struct AnchorRegistry {
    anchors: SlotMap<AnchorHandle, Anchor>,
}

impl AnchorRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new anchor at `position` and instantiate its payload
    ///
    /// Always succeeds; the returned handle is the only way to address the
    /// anchor afterwards.
    pub fn create(
        &mut self,
        position: Vec3,
        kind: SpawnKind,
        factory: &mut dyn PayloadFactory,
    ) -> AnchorHandle {
        let anchor = Anchor::at(position, kind);
        let pose = anchor.pose.clone();
        let handle = self.anchors.insert(anchor);
        factory.instantiate(handle, kind, &pose);
        log::debug!(
            "anchor created: {kind:?} at ({:.2}, {:.2}, {:.2}), {} live",
            position.x,
            position.y,
            position.z,
            self.anchors.len()
        );
        handle
    }

    /// Remove the anchor behind `handle`, destroying its payload
    ///
    /// Returns whether an anchor was actually removed. Absent or stale
    /// handles are a quiet no-op — repeat removals are expected from
    /// double-taps and must never fail.
    pub fn remove(&mut self, handle: AnchorHandle, factory: &mut dyn PayloadFactory) -> bool {
        match self.anchors.remove(handle) {
            Some(anchor) => {
                factory.destroy(handle);
                log::debug!("anchor removed: {:?}, {} live", anchor.kind, self.anchors.len());
                true
            }
            None => {
                log::trace!("remove on absent handle {handle:?}");
                false
            }
        }
    }

    /// Remove every live anchor, destroying each payload
    ///
    /// Order is arbitrary; equivalent to calling [`Self::remove`] on every
    /// live handle.
    pub fn clear(&mut self, factory: &mut dyn PayloadFactory) {
        let removed = self.anchors.len();
        for (handle, _) in self.anchors.drain() {
            factory.destroy(handle);
        }
        log::info!("registry cleared, {removed} anchors removed");
    }

    /// Number of live anchors
    #[must_use]
    pub fn count(&self) -> usize {
        self.anchors.len()
    }

    /// Whether no anchors are live
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Read access to the anchor behind `handle`, if live
    #[must_use]
    pub fn get(&self, handle: AnchorHandle) -> Option<&Anchor> {
        self.anchors.get(handle)
    }

    /// Whether `handle` addresses a live anchor
    #[must_use]
    pub fn contains(&self, handle: AnchorHandle) -> bool {
        self.anchors.contains_key(handle)
    }

    /// Iterator over the handles of all live anchors
    pub fn handles(&self) -> impl Iterator<Item = AnchorHandle> + '_ {
        self.anchors.keys()
    }
}
