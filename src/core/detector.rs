// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Outside-click detection
//!
//! One detector observes every root-level pointer interaction and fans it
//! out to all active registrations. Each registration pairs an overlay's
//! anchor region with the callback to run when an interaction lands
//! outside that region.
//!
//! # Ordering
//!
//! A dispatch only visits registrations that existed when it started. The
//! click that opens an overlay therefore cannot close it again in the same
//! event cycle, even if the overlay registers while that click is still
//! being dispatched.
//!
//! # Performance
//! - Register / unregister: O(log n)
//! - Dispatch: O(n) hit tests, n = active registrations (two in the header)

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use crate::core::region::{AnchorRegion, RegionHit};
use crate::core::types::{OverlayId, PointerEvent};

/// Identifier of one registration
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SubscriptionId(u64);

type OutsideCallback = Rc<dyn Fn()>;

struct Registration<E> {
    overlay: OverlayId,
    region: Rc<dyn AnchorRegion<E>>,
    on_outside: OutsideCallback,
}

struct DetectorInner<E> {
    next_id: u64,
    registrations: BTreeMap<SubscriptionId, Registration<E>>,
}

impl<E> DetectorInner<E> {
    fn remove(&mut self, id: SubscriptionId) -> bool {
        match self.registrations.remove(&id) {
            Some(registration) => {
                tracing::debug!(overlay = %registration.overlay, "outside-click registration removed");
                true
            }
            None => false,
        }
    }
}

/// Process-wide outside-click detector
///
/// Cloning yields another handle to the same detector.
pub struct OutsideClickDetector<E: 'static = PointerEvent> {
    inner: Rc<RefCell<DetectorInner<E>>>,
}

impl<E: 'static> Clone for OutsideClickDetector<E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<E: 'static> Default for OutsideClickDetector<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: 'static> OutsideClickDetector<E> {
    /// Creates a detector with no registrations
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(DetectorInner {
                next_id: 0,
                registrations: BTreeMap::new(),
            })),
        }
    }

    /// Starts watching for interactions outside `region`
    ///
    /// An overlay has at most one registration: registering again for the
    /// same overlay replaces the previous one. The returned [`Subscription`]
    /// unregisters when dropped.
    pub fn register(
        &self,
        overlay: OverlayId,
        region: Rc<dyn AnchorRegion<E>>,
        on_outside: impl Fn() + 'static,
    ) -> Subscription<E> {
        let mut inner = self.inner.borrow_mut();

        let stale: Vec<SubscriptionId> = inner
            .registrations
            .iter()
            .filter(|(_, r)| r.overlay == overlay)
            .map(|(id, _)| *id)
            .collect();
        for id in stale {
            tracing::warn!(%overlay, "replacing existing outside-click registration");
            inner.remove(id);
        }

        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;

        tracing::debug!(%overlay, ?id, "outside-click registration added");
        inner.registrations.insert(
            id,
            Registration {
                overlay,
                region,
                on_outside: Rc::new(on_outside),
            },
        );

        Subscription {
            id,
            detector: Rc::downgrade(&self.inner),
            active: true,
        }
    }

    /// Removes a registration by id
    ///
    /// Returns `false` if it was already gone. Safe to call any number of
    /// times.
    pub fn unregister(&self, id: SubscriptionId) -> bool {
        self.inner.borrow_mut().remove(id)
    }

    /// Delivers one root-level interaction to every registration
    ///
    /// Returns the number of outside signals fired. Registrations removed
    /// by an earlier callback of the same dispatch are skipped.
    pub fn dispatch(&self, event: &E) -> usize {
        // Snapshot so callbacks can (un)register without a live borrow
        let snapshot: Vec<(SubscriptionId, OverlayId, Rc<dyn AnchorRegion<E>>, OutsideCallback)> = self
            .inner
            .borrow()
            .registrations
            .iter()
            .map(|(id, r)| (*id, r.overlay.clone(), r.region.clone(), r.on_outside.clone()))
            .collect();

        let mut fired = 0;
        for (id, overlay, region, on_outside) in snapshot {
            if !self.is_registered(id) {
                continue;
            }

            match region.hit_test(event) {
                RegionHit::Inside => continue,
                RegionHit::Outside => {}
                RegionHit::Detached => {
                    tracing::warn!(%overlay, "anchor region detached, treating interaction as outside");
                }
            }

            tracing::debug!(%overlay, "outside interaction");
            on_outside();
            fired += 1;
        }
        fired
    }

    /// Whether a registration is still active
    pub fn is_registered(&self, id: SubscriptionId) -> bool {
        self.inner.borrow().registrations.contains_key(&id)
    }

    /// Whether the overlay currently has an active registration
    pub fn is_watching(&self, overlay: &OverlayId) -> bool {
        self.inner
            .borrow()
            .registrations
            .values()
            .any(|r| &r.overlay == overlay)
    }

    /// Number of active registrations
    pub fn registration_count(&self) -> usize {
        self.inner.borrow().registrations.len()
    }
}

/// Scoped registration handle
///
/// Dropping it unregisters. [`Subscription::unsubscribe`] may be called
/// early; later calls and the final drop are no-ops, and the handle
/// tolerates the detector having been dropped first.
pub struct Subscription<E: 'static = PointerEvent> {
    id: SubscriptionId,
    detector: Weak<RefCell<DetectorInner<E>>>,
    active: bool,
}

impl<E: 'static> Subscription<E> {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    pub fn unsubscribe(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;

        if let Some(inner) = self.detector.upgrade() {
            inner.borrow_mut().remove(self.id);
        }
    }
}

impl<E: 'static> Drop for Subscription<E> {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl<E: 'static> std::fmt::Debug for Subscription<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.active)
            .finish()
    }
}
