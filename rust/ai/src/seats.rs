//! Per-seat dispatch, so different chooser kinds can share one table.

use pineapple_engine::chooser::{ChoiceRequest, MoveChooser};
use pineapple_engine::rules::Move;

/// Forwards each request to the chooser assigned to `request.seat`.
/// Seats beyond the list wrap around.
pub struct SeatChooser {
    seats: Vec<Box<dyn MoveChooser>>,
    name: String,
}

impl SeatChooser {
    /// `seats` must not be empty.
    pub fn new(seats: Vec<Box<dyn MoveChooser>>) -> Option<Self> {
        if seats.is_empty() {
            return None;
        }
        let name = seats
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join("|");
        Some(Self { seats, name })
    }

    pub fn seat_name(&self, seat: usize) -> &str {
        self.seats[seat % self.seats.len()].name()
    }
}

impl MoveChooser for SeatChooser {
    fn choose_move(&mut self, request: &ChoiceRequest<'_>) -> Move {
        let n = self.seats.len();
        self.seats[request.seat % n].choose_move(request)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for SeatChooser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeatChooser").field("name", &self.name).finish()
    }
}
