//! Scroll-reactive visual feedback.
//!
//! The overview card darkens as the section below it scrolls up underneath.
//! Geometry is measured by the host and pushed through a [`ScrollRegion`];
//! listeners stay attached for as long as their [`ScrollSubscription`] lives.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::trace;

/// Positions measured on each scroll event, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollGeometry {
    /// Bottom edge of the reference element (the overview card).
    pub reference_bottom: f64,
    /// Top edge of the boundary element (the section below).
    pub boundary_top: f64,
}

/// Overlap ratio of the boundary over the reference element.
///
/// `None` while the boundary is still below the reference. Once it reaches
/// the reference bottom the ratio grows towards 1 as it scrolls further up.
/// A reference bottom at or above the viewport top counts as fully covered.
pub fn intensity(reference_bottom: f64, boundary_top: f64) -> Option<f64> {
    if !reference_bottom.is_finite() || !boundary_top.is_finite() {
        return None;
    }
    if boundary_top > reference_bottom {
        return None;
    }
    if reference_bottom <= 0.0 {
        return Some(1.0);
    }
    Some(((reference_bottom - boundary_top) / reference_bottom).clamp(0.0, 1.0))
}

/// How the reference card is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CardStyle {
    /// Theme background with the elevation shadow.
    #[default]
    Neutral,
    /// Black overlay at `alpha` opacity, no shadow.
    Shadowed { alpha: f64 },
}

impl CardStyle {
    pub fn from_geometry(geometry: ScrollGeometry) -> Self {
        match intensity(geometry.reference_bottom, geometry.boundary_top) {
            Some(alpha) => Self::Shadowed { alpha },
            None => Self::Neutral,
        }
    }

    pub fn has_elevation(&self) -> bool {
        matches!(self, Self::Neutral)
    }
}

// =============================================================================
// SCROLL REGION
// =============================================================================

type Listener = Rc<RefCell<dyn FnMut(ScrollGeometry)>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// A scroll container that forwards geometry to attached listeners.
#[derive(Clone, Default)]
pub struct ScrollRegion {
    registry: Rc<RefCell<Registry>>,
}

impl std::fmt::Debug for ScrollRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollRegion")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl ScrollRegion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a listener. It is detached when the returned guard is dropped.
    #[must_use = "dropping the subscription detaches the listener"]
    pub fn attach(&self, listener: impl FnMut(ScrollGeometry) + 'static) -> ScrollSubscription {
        let mut registry = self.registry.borrow_mut();
        registry.next_id += 1;
        let id = registry.next_id;
        let listener: Listener = Rc::new(RefCell::new(listener));
        registry.listeners.push((id, listener));
        ScrollSubscription {
            registry: Rc::downgrade(&self.registry),
            id,
        }
    }

    /// Deliver one scroll event to every attached listener.
    ///
    /// Listeners may attach or detach during delivery; a listener that is
    /// already running (re-entrant dispatch) is skipped.
    pub fn dispatch(&self, geometry: ScrollGeometry) {
        let listeners: Vec<Listener> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        trace!(count = listeners.len(), "scroll dispatch");
        for listener in listeners {
            if let Ok(mut callback) = listener.try_borrow_mut() {
                (&mut *callback)(geometry);
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Guard keeping a listener attached to its [`ScrollRegion`].
#[derive(Debug)]
pub struct ScrollSubscription {
    registry: Weak<RefCell<Registry>>,
    id: u64,
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        if let Ok(mut registry) = registry.try_borrow_mut() {
            registry.listeners.retain(|(id, _)| *id != self.id);
        }
    }
}
