//! Drag-and-drop coordinator.
//!
//! Bridges pointer gestures to [`Board::move_task`] through an explicit
//! state machine, so illegal transitions (a drop with no active drag, a
//! drag that never crossed the activation threshold) are rejected cases
//! rather than ad hoc flag checks.

use uuid::Uuid;

use crate::board::Board;
use crate::model::TaskStatus;

/// Pointer travel required before a press becomes a drag. Matches the
/// sensor activation constraint of the board UI and keeps plain clicks from
/// registering as drags.
pub const ACTIVATION_DISTANCE: f64 = 8.0;

/// Pointer position in the gesture's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn distance_to(&self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Lifecycle of a single drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    /// No gesture in flight.
    Idle,
    /// Pointer is down on a card but has not travelled far enough to count
    /// as a drag.
    Pending { task_id: Uuid, origin: Point },
    /// An active drag; exactly one task can be active at a time.
    Dragging { task_id: Uuid },
}

/// Tracks the drag gesture and forwards completed drops to the board.
pub struct DragCoordinator {
    state: DragState,
    activation_distance: f64,
}

impl Default for DragCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl DragCoordinator {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
            activation_distance: ACTIVATION_DISTANCE,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// The task currently being dragged, if a drag is active.
    pub fn active_task(&self) -> Option<Uuid> {
        match self.state {
            DragState::Dragging { task_id } => Some(task_id),
            DragState::Idle | DragState::Pending { .. } => None,
        }
    }

    /// Pointer pressed on a card. A press while another gesture is in
    /// flight replaces it; the source leaves this input undefined and we
    /// resolve it as replacement.
    pub fn pointer_down(&mut self, task_id: Uuid, position: Point) {
        self.state = DragState::Pending {
            task_id,
            origin: position,
        };
    }

    /// Pointer moved. Promotes a pending press to a drag once the travel
    /// reaches the activation distance.
    pub fn pointer_move(&mut self, position: Point) {
        if let DragState::Pending { task_id, origin } = self.state {
            if origin.distance_to(position) >= self.activation_distance {
                self.state = DragState::Dragging { task_id };
            }
        }
    }

    /// Pointer released over `over` (a column id), or over nothing.
    ///
    /// Always returns the machine to idle. A pending press (a click), a
    /// drop outside any valid target, or a release in idle are all no-ops.
    /// Anything else is delegated to the board, which itself refuses
    /// same-column and unknown-task moves.
    pub async fn drag_end(&mut self, board: &mut Board, over: Option<TaskStatus>) {
        let state = std::mem::replace(&mut self.state, DragState::Idle);
        let DragState::Dragging { task_id } = state else {
            return;
        };
        let Some(destination) = over else {
            return;
        };
        board.move_task(task_id, destination).await;
    }

    /// Abandon the gesture without dropping (e.g. escape key, window blur).
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}
