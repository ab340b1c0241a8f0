//! Anchor regions
//!
//! An anchor region answers one question at event time: did this pointer
//! interaction land inside me? The answer is always computed from live
//! geometry, never from a snapshot taken when the region was registered.
//!
//! The event type is generic so that the GTK front end can hit-test widget
//! ancestry while tests and the CLI hit-test plain rectangles.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::types::{PointerEvent, Rect};

/// Result of a region-membership test
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RegionHit {
    Inside,
    Outside,
    /// The region no longer exists (unmounted, never laid out, dropped).
    /// Callers treat this as `Outside`.
    Detached,
}

impl RegionHit {
    pub fn is_inside(self) -> bool {
        self == RegionHit::Inside
    }
}

/// A region that can be hit-tested against pointer events of type `E`
pub trait AnchorRegion<E> {
    fn hit_test(&self, event: &E) -> RegionHit;
}

impl<E, F> AnchorRegion<E> for F
where
    F: Fn(&E) -> RegionHit,
{
    fn hit_test(&self, event: &E) -> RegionHit {
        self(event)
    }
}

/// Live rectangular region made of one or more rectangles
///
/// Clones share the same geometry, so a layout pass that calls
/// [`RectRegion::set_rects`] is seen by every registration holding a clone.
#[derive(Clone, Debug, Default)]
pub struct RectRegion {
    rects: Rc<RefCell<Option<Vec<Rect>>>>,
}

impl RectRegion {
    /// A region that has not been laid out yet (hit-tests as detached)
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn new(rect: Rect) -> Self {
        let region = Self::default();
        region.set_rects(vec![rect]);
        region
    }

    /// Replaces the live geometry
    pub fn set_rects(&self, rects: Vec<Rect>) {
        *self.rects.borrow_mut() = Some(rects);
    }

    /// Adds a rectangle, e.g. the mounted menu body below the trigger
    pub fn push_rect(&self, rect: Rect) {
        self.rects.borrow_mut().get_or_insert_with(Vec::new).push(rect);
    }

    /// Marks the region as gone
    pub fn detach(&self) {
        *self.rects.borrow_mut() = None;
    }

    pub fn is_detached(&self) -> bool {
        self.rects.borrow().is_none()
    }

    /// First rectangle of the region, if laid out
    pub fn primary_rect(&self) -> Option<Rect> {
        self.rects.borrow().as_ref().and_then(|rects| rects.first().copied())
    }
}

impl AnchorRegion<PointerEvent> for RectRegion {
    fn hit_test(&self, event: &PointerEvent) -> RegionHit {
        match self.rects.borrow().as_ref() {
            None => RegionHit::Detached,
            Some(rects) if rects.iter().any(|r| r.contains(event.position)) => RegionHit::Inside,
            Some(_) => RegionHit::Outside,
        }
    }
}
