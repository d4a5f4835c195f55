//! UI surface boundary and an in-memory implementation
//!
//! The host owns the real interface toolkit; the walkthrough only needs
//! element lookup by semantic region, bounding boxes, and layout-change
//! notifications. `StaticSurface` implements the boundary over a plain map
//! of movable boxes for the demo binary and the tests.

use crate::core::types::{ElementId, Rect, SubscriptionId, UiRegion};
use ahash::AHashMap;
use std::sync::{Arc, Mutex};

/// Layout-change notification, fired on resize, appear/disappear, and scroll
pub type BoxChangeCallback = Arc<dyn Fn() + Send + Sync>;

/// Host-provided UI capability
pub trait UiSurface: Send + Sync {
    /// Handle of the live element registered under a region, if rendered
    fn find_element(&self, region: UiRegion) -> Option<ElementId>;

    /// Current screen-space box of an element, if still rendered
    fn bounding_box(&self, element: ElementId) -> Option<Rect>;

    /// Register for layout-change notifications on a region
    fn subscribe(&self, region: UiRegion, on_change: BoxChangeCallback) -> SubscriptionId;

    /// Release a subscription; its callback must not fire afterwards
    fn unsubscribe(&self, subscription: SubscriptionId);
}

#[derive(Default)]
struct SurfaceState {
    next_element: u32,
    elements: AHashMap<UiRegion, (ElementId, Rect)>,
    subscriptions: AHashMap<SubscriptionId, (UiRegion, BoxChangeCallback)>,
}

/// In-memory surface with movable element boxes
#[derive(Default)]
pub struct StaticSurface {
    state: Mutex<SurfaceState>,
}

impl StaticSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or move the element for a region, notifying its subscribers
    pub fn place(&self, region: UiRegion, rect: Rect) {
        let changed = {
            let mut state = self.state.lock().unwrap();
            match state.elements.get(&region).copied() {
                Some((_, existing)) if existing == rect => false,
                Some((id, _)) => {
                    state.elements.insert(region, (id, rect));
                    true
                }
                None => {
                    state.next_element += 1;
                    let id = ElementId(state.next_element);
                    state.elements.insert(region, (id, rect));
                    true
                }
            }
        };
        if changed {
            self.notify_region(region);
        }
    }

    /// Remove a region's element (it is no longer rendered)
    pub fn remove(&self, region: UiRegion) {
        let removed = self.state.lock().unwrap().elements.remove(&region).is_some();
        if removed {
            self.notify_region(region);
        }
    }

    /// Shift every element by a pixel delta and notify all subscribers
    pub fn scroll_by(&self, dx: f32, dy: f32) {
        let callbacks: Vec<BoxChangeCallback> = {
            let mut state = self.state.lock().unwrap();
            for (_, rect) in state.elements.values_mut() {
                *rect = rect.translated(dx, dy);
            }
            state
                .subscriptions
                .values()
                .map(|(_, cb)| Arc::clone(cb))
                .collect()
        };
        for cb in callbacks {
            cb();
        }
    }

    /// Number of live subscriptions, for leak checks
    pub fn subscription_count(&self) -> usize {
        self.state.lock().unwrap().subscriptions.len()
    }

    // Callbacks run outside the lock so they may call back into the surface
    fn notify_region(&self, region: UiRegion) {
        let callbacks: Vec<BoxChangeCallback> = {
            let state = self.state.lock().unwrap();
            state
                .subscriptions
                .values()
                .filter(|(r, _)| *r == region)
                .map(|(_, cb)| Arc::clone(cb))
                .collect()
        };
        for cb in callbacks {
            cb();
        }
    }
}

impl UiSurface for StaticSurface {
    fn find_element(&self, region: UiRegion) -> Option<ElementId> {
        self.state.lock().unwrap().elements.get(&region).map(|(id, _)| *id)
    }

    fn bounding_box(&self, element: ElementId) -> Option<Rect> {
        self.state
            .lock()
            .unwrap()
            .elements
            .values()
            .find(|(id, _)| *id == element)
            .map(|(_, rect)| *rect)
    }

    fn subscribe(&self, region: UiRegion, on_change: BoxChangeCallback) -> SubscriptionId {
        let id = SubscriptionId::new();
        self.state
            .lock()
            .unwrap()
            .subscriptions
            .insert(id, (region, on_change));
        id
    }

    fn unsubscribe(&self, subscription: SubscriptionId) {
        self.state.lock().unwrap().subscriptions.remove(&subscription);
    }
}
