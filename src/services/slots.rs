//! Slot state cache
//!
//! Per-view in-memory mapping from slot id to slot state. The mapping is
//! rebuilt wholesale from the backend on every refresh; entries are never
//! merged, so a refresh discards any optimistic patch (last fetch wins).

use indexmap::IndexMap;
use tracing::{info, warn};

use crate::api::ParkingApi;
use crate::error::ClientResult;
use crate::models::{
    enums::{Location, SlotStatus},
    slot::{self, Slot, SlotView},
};

/// Location and floor a view is currently looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSelection {
    pub location: Location,
    pub floor: i32,
}

/// Aggregate slot counts for the availability panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotCounts {
    pub total: usize,
    pub available: usize,
    pub booked: usize,
}

/// Behavior when a refresh fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Synthesize the default grid so the view stays usable offline
    /// (customer view).
    DefaultGrid,
    /// Keep the previous cache untouched and surface the error (admin view).
    KeepPrevious,
}

/// In-memory slot state for one view
#[derive(Debug)]
pub struct SlotCache {
    slots: IndexMap<String, SlotView>,
    fallback: FallbackPolicy,
}

impl SlotCache {
    pub fn new(fallback: FallbackPolicy) -> Self {
        Self {
            slots: IndexMap::new(),
            fallback,
        }
    }

    /// Rebuild the cache from the backend for the given location/floor.
    ///
    /// The two fallback policies intentionally diverge: the customer view
    /// synthesizes a default grid, the admin view keeps stale data and
    /// reports the failure. Source behavior, preserved as documented.
    pub async fn refresh(
        &mut self,
        api: &dyn ParkingApi,
        location: Option<Location>,
        floor: Option<i32>,
    ) -> ClientResult<&IndexMap<String, SlotView>> {
        match api.list_slots(location, floor, None).await {
            Ok(slots) => {
                self.slots = slots
                    .into_iter()
                    .map(|s: Slot| (s.slot_id.clone(), SlotView::from(s)))
                    .collect();
                info!(count = self.slots.len(), "slot cache refreshed");
                Ok(&self.slots)
            }
            Err(err) => match self.fallback {
                FallbackPolicy::DefaultGrid => {
                    warn!("slot fetch failed, falling back to default grid: {}", err);
                    self.slots =
                        default_grid(location.unwrap_or_default(), floor.unwrap_or(1));
                    Ok(&self.slots)
                }
                FallbackPolicy::KeepPrevious => {
                    warn!("slot fetch failed, keeping previous cache: {}", err);
                    Err(err)
                }
            },
        }
    }

    pub fn get(&self, slot_id: &str) -> Option<&SlotView> {
        self.slots.get(slot_id)
    }

    pub fn slots(&self) -> &IndexMap<String, SlotView> {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Sorted ids of available slots, for slot selection
    pub fn available_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .slots
            .iter()
            .filter(|(_, view)| view.status.is_available())
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort();
        ids
    }

    /// Total/available/booked counts over the cached mapping
    pub fn counts(&self) -> SlotCounts {
        let total = self.slots.len();
        let available = self
            .slots
            .values()
            .filter(|view| view.status.is_available())
            .count();
        SlotCounts {
            total,
            available,
            booked: total - available,
        }
    }

    /// Optimistically mark a cached slot booked. Only existing entries are
    /// patched; the next refresh replaces the guess with server truth.
    pub fn mark_booked(&mut self, slot_id: &str, customer: &str) {
        if let Some(view) = self.slots.get_mut(slot_id) {
            view.status = SlotStatus::Booked;
            view.booked_by = Some(customer.to_string());
        }
    }

    /// Optimistically mark a cached slot available
    pub fn mark_available(&mut self, slot_id: &str) {
        if let Some(view) = self.slots.get_mut(slot_id) {
            view.status = SlotStatus::Available;
            view.booked_by = None;
        }
    }
}

/// Deterministic offline grid: 4 zones x 3 numbers, all available
fn default_grid(location: Location, floor: i32) -> IndexMap<String, SlotView> {
    let mut grid = IndexMap::new();
    for zone in slot::ZONES {
        for number in slot::NUMBERS {
            grid.insert(
                slot::slot_id(floor, zone, number),
                SlotView {
                    status: SlotStatus::Available,
                    booked_by: None,
                    floor,
                    location: location.as_str().to_string(),
                },
            );
        }
    }
    grid
}
