// ./src/input.rs
use crate::debug::visualization::shards::world_to_puzzle;
use crate::game::events::{GroupDraggedEvent, GroupReleasedEvent};
use crate::game::resources::ActivePuzzle;
use crate::math::types::Point2D;
use crate::puzzle::GroupId;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

/// Zustand der linken Maustaste in einem Frame.
///
/// `cursor` ist `None`, wenn der Cursor außerhalb des Fensters liegt.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub cursor: Option<Point2D>,
    pub just_pressed: bool,
    pub held: bool,
    pub just_released: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragAction {
    Dragged(GroupDraggedEvent),
    Released(GroupReleasedEvent),
}

/// Gruppe, die gerade mit der Maus gezogen wird.
#[derive(Resource, Debug, Default)]
pub struct DragState {
    pub group: Option<GroupId>,
    /// Letzte Cursorposition in Puzzlekoordinaten.
    pub last: Point2D,
}

impl DragState {
    /// Verarbeitet einen Frame. `grab` liefert die Gruppe unter dem Cursor.
    ///
    /// Ein Loslassen wird immer gemeldet, auch im selben Frame wie das
    /// Drücken oder ohne Cursor; die Verschiebung ist dann null.
    pub fn advance(
        &mut self,
        sample: PointerSample,
        grab: impl FnOnce(Point2D) -> Option<GroupId>,
    ) -> Option<DragAction> {
        if sample.just_pressed {
            if let Some(point) = sample.cursor {
                self.group = grab(point);
                self.last = point;
            }
        }

        let group = self.group?;
        let delta = sample.cursor.map_or(Point2D::ZERO, |point| point - self.last);
        if let Some(point) = sample.cursor {
            self.last = point;
        }

        if sample.just_released {
            self.group = None;
            Some(DragAction::Released(GroupReleasedEvent { group, delta }))
        } else if sample.held && delta != Point2D::ZERO {
            Some(DragAction::Dragged(GroupDraggedEvent { group, delta }))
        } else {
            None
        }
    }
}

/// Übersetzt Maus-Ziehen in Drag-/Release-Events.
pub fn mouse_drag_system(
    mut contexts: EguiContexts,
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    active: Res<ActivePuzzle>,
    mut drag: ResMut<DragState>,
    mut dragged_writer: EventWriter<GroupDraggedEvent>,
    mut released_writer: EventWriter<GroupReleasedEvent>,
) {
    let Some(session) = active.session.as_ref() else {
        drag.group = None;
        return;
    };

    let cursor = match (windows.get_single(), cameras.get_single()) {
        (Ok(window), Ok((camera, camera_transform))) => window
            .cursor_position()
            .and_then(|c| camera.viewport_to_world_2d(camera_transform, c))
            .map(|world| world_to_puzzle(world, session.config().play_area_size)),
        _ => None,
    };
    let sample = PointerSample {
        cursor,
        just_pressed: buttons.just_pressed(MouseButton::Left)
            && !contexts.ctx_mut().wants_pointer_input(),
        held: buttons.pressed(MouseButton::Left),
        just_released: buttons.just_released(MouseButton::Left),
    };

    match drag.advance(sample, |point| session.grab_at(point)) {
        Some(DragAction::Dragged(event)) => {
            dragged_writer.send(event);
        }
        Some(DragAction::Released(event)) => {
            released_writer.send(event);
        }
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f32, y: f32) -> Option<Point2D> {
        Some(Point2D::new(x, y))
    }

    #[test]
    fn test_press_move_release_reports_deltas() {
        let mut drag = DragState::default();
        let press = PointerSample {
            cursor: at(10.0, 10.0),
            just_pressed: true,
            held: true,
            ..default()
        };
        assert_eq!(drag.advance(press, |_| Some(GroupId(4))), None);

        let moved = PointerSample {
            cursor: at(15.0, 12.0),
            held: true,
            ..default()
        };
        assert_eq!(
            drag.advance(moved, |_| None),
            Some(DragAction::Dragged(GroupDraggedEvent {
                group: GroupId(4),
                delta: Point2D::new(5.0, 2.0),
            }))
        );

        let released = PointerSample {
            cursor: at(16.0, 12.0),
            just_released: true,
            ..default()
        };
        assert_eq!(
            drag.advance(released, |_| None),
            Some(DragAction::Released(GroupReleasedEvent {
                group: GroupId(4),
                delta: Point2D::new(1.0, 0.0),
            }))
        );
        assert_eq!(drag.group, None);
    }

    #[test]
    fn test_press_and_release_in_one_frame_still_releases() {
        let mut drag = DragState::default();
        let click = PointerSample {
            cursor: at(30.0, 40.0),
            just_pressed: true,
            just_released: true,
            ..default()
        };
        assert_eq!(
            drag.advance(click, |_| Some(GroupId(2))),
            Some(DragAction::Released(GroupReleasedEvent {
                group: GroupId(2),
                delta: Point2D::ZERO,
            }))
        );
        assert_eq!(drag.group, None);
    }

    #[test]
    fn test_release_outside_window_is_not_lost() {
        let mut drag = DragState {
            group: Some(GroupId(1)),
            last: Point2D::new(50.0, 50.0),
        };
        let released = PointerSample {
            cursor: None,
            just_released: true,
            ..default()
        };
        assert_eq!(
            drag.advance(released, |_| None),
            Some(DragAction::Released(GroupReleasedEvent {
                group: GroupId(1),
                delta: Point2D::ZERO,
            }))
        );
        assert_eq!(drag.group, None);
    }

    #[test]
    fn test_press_on_empty_space_grabs_nothing() {
        let mut drag = DragState::default();
        let press = PointerSample {
            cursor: at(1.0, 1.0),
            just_pressed: true,
            held: true,
            ..default()
        };
        assert_eq!(drag.advance(press, |_| None), None);
        assert_eq!(drag.group, None);
    }
}
