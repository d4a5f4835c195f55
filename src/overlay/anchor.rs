//! Live tracking of the panel and highlight-target boxes
//!
//! `TargetResolver` answers "where is this region right now"; the
//! `ConnectorTracker` owns the pair of last-observed boxes and the
//! subscription lifecycle around them. Subscriptions are rebound whenever
//! the tracked region changes and released in full on teardown.

use crate::core::types::{Rect, SubscriptionId, UiRegion, Vec2};
use crate::overlay::connector::compute_connector;
use crate::overlay::surface::{BoxChangeCallback, UiSurface};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Region-to-box resolution over the host surface
pub struct TargetResolver {
    surface: Arc<dyn UiSurface>,
}

impl TargetResolver {
    pub fn new(surface: Arc<dyn UiSurface>) -> Self {
        Self { surface }
    }

    /// Current box of the element under a region
    ///
    /// `None` when nothing is rendered there; highlight targets may be
    /// conditionally absent and that is not an error.
    pub fn resolve(&self, region: UiRegion) -> Option<Rect> {
        self.surface
            .find_element(region)
            .and_then(|element| self.surface.bounding_box(element))
    }

    pub fn subscribe(&self, region: UiRegion, on_change: BoxChangeCallback) -> SubscriptionId {
        self.surface.subscribe(region, on_change)
    }

    pub fn unsubscribe(&self, subscription: SubscriptionId) {
        self.surface.unsubscribe(subscription);
    }
}

struct TrackedTarget {
    region: UiRegion,
    subscription: SubscriptionId,
    rect: Option<Rect>,
}

/// Owner of the panel/target box pair and the connector derived from it
///
/// The panel's first measurement waits one tick past mount so the
/// surrounding layout settles before the first reading. Target boxes are
/// read eagerly on rebind and dropped the moment the tracked region
/// changes; a box from the previous step must never survive into the next.
pub struct ConnectorTracker {
    resolver: TargetResolver,
    dirty: Arc<AtomicBool>,
    panel_subscription: Option<SubscriptionId>,
    panel_rect: Option<Rect>,
    panel_measured: bool,
    target: Option<TrackedTarget>,
}

impl ConnectorTracker {
    /// Mount over a surface and start tracking the panel
    pub fn mount(surface: Arc<dyn UiSurface>) -> Self {
        let resolver = TargetResolver::new(surface);
        let dirty = Arc::new(AtomicBool::new(false));

        let flag = Arc::clone(&dirty);
        let panel_subscription = resolver.subscribe(
            UiRegion::TutorialPanel,
            Arc::new(move || flag.store(true, Ordering::SeqCst)),
        );

        Self {
            resolver,
            dirty,
            panel_subscription: Some(panel_subscription),
            panel_rect: None,
            panel_measured: false,
            target: None,
        }
    }

    fn torn_down(&self) -> bool {
        self.panel_subscription.is_none()
    }

    /// Switch the tracked highlight region
    ///
    /// Unsubscribes the previous region, drops its box, and binds the new
    /// one. Passing the current region is a no-op; passing `None` leaves
    /// only the panel tracked.
    pub fn set_target(&mut self, region: Option<UiRegion>) {
        if self.torn_down() {
            return;
        }
        if self.target.as_ref().map(|t| t.region) == region {
            return;
        }

        if let Some(old) = self.target.take() {
            self.resolver.unsubscribe(old.subscription);
        }

        if let Some(region) = region {
            let flag = Arc::clone(&self.dirty);
            let subscription = self.resolver.subscribe(
                region,
                Arc::new(move || flag.store(true, Ordering::SeqCst)),
            );
            let rect = self.resolver.resolve(region);
            tracing::trace!("Tracking highlight region {:?}", region);
            self.target = Some(TrackedTarget {
                region,
                subscription,
                rect,
            });
        }
    }

    /// Per-frame maintenance
    ///
    /// Performs the deferred first panel measurement, then re-reads both
    /// boxes if any subscription fired since the last tick.
    pub fn tick(&mut self) {
        if self.torn_down() {
            return;
        }

        if !self.panel_measured {
            self.panel_measured = true;
            self.panel_rect = self.resolver.resolve(UiRegion::TutorialPanel);
        }

        if self.dirty.swap(false, Ordering::SeqCst) {
            self.panel_rect = self.resolver.resolve(UiRegion::TutorialPanel);
            if let Some(target) = self.target.as_mut() {
                target.rect = self.resolver.resolve(target.region);
            }
        }
    }

    /// Last-observed panel box, if measured
    pub fn panel_rect(&self) -> Option<Rect> {
        self.panel_rect
    }

    /// Last-observed box of the tracked highlight region
    pub fn target_rect(&self) -> Option<Rect> {
        self.target.as_ref().and_then(|t| t.rect)
    }

    /// The connector path to draw, if both boxes are known and separated
    pub fn connector(&self) -> Option<[Vec2; 3]> {
        let panel = self.panel_rect?;
        let target = self.target_rect()?;
        compute_connector(panel, target)
    }

    /// Release every live subscription
    ///
    /// Safe to call twice; also runs on drop. After teardown the tracker
    /// ignores set_target and tick, and no callback can fire again.
    pub fn teardown(&mut self) {
        if self.torn_down() && self.target.is_none() {
            return;
        }

        if let Some(subscription) = self.panel_subscription.take() {
            self.resolver.unsubscribe(subscription);
        }
        if let Some(old) = self.target.take() {
            self.resolver.unsubscribe(old.subscription);
        }
        self.panel_rect = None;
        self.panel_measured = false;
        self.dirty.store(false, Ordering::SeqCst);
        tracing::trace!("Walkthrough overlay torn down");
    }
}

impl Drop for ConnectorTracker {
    fn drop(&mut self) {
        self.teardown();
    }
}
