//! Provides a Bevy `Plugin` for integrating seed-based random number generation.
//!
//! This plugin initializes the `SeedResource` and sets up an event handler
//! for `SeedChangedEvent` to update the resource when the seed changes.

use super::{events::SeedChangedEvent, resource::SeedResource};
use bevy::prelude::*;

/// A Bevy `Plugin` responsible for managing the global `SeedResource`.
///
/// - Initializes the `SeedResource` if it doesn't already exist.
/// - Registers the `SeedChangedEvent`.
/// - Adds `seed_changed_event_handler` to apply seed changes.
pub struct SeedPlugin;

impl Plugin for SeedPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SeedResource>()
            .add_event::<SeedChangedEvent>()
            .add_systems(Update, seed_changed_event_handler);
    }
}

/// Applies every pending `SeedChangedEvent` to the `SeedResource`.
///
/// Puzzles generated afterwards use the new seed; an already running
/// session is not regenerated by this.
fn seed_changed_event_handler(
    mut events: EventReader<SeedChangedEvent>,
    mut seed_resource: ResMut<SeedResource>,
) {
    for event in events.read() {
        info!(
            "SeedResource is being updated due to SeedChangedEvent: {}",
            event.new_seed
        );
        seed_resource.reset_with_new_seed(event.new_seed);
    }
}
