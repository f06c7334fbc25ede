//! Kanban board: requests grouped into one column per workflow state.

use serde::Serialize;

use crate::request::{MaintenanceRequest, RequestDetails, RequestState};

/// Anything that sits in exactly one workflow column.
pub trait Staged {
    fn state(&self) -> RequestState;
}

impl Staged for MaintenanceRequest {
    fn state(&self) -> RequestState {
        self.state
    }
}

impl Staged for RequestDetails {
    fn state(&self) -> RequestState {
        self.request.state
    }
}

/// Requests grouped by state. Column order follows input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KanbanBoard<T> {
    pub new: Vec<T>,
    pub in_progress: Vec<T>,
    pub repaired: Vec<T>,
    pub scrap: Vec<T>,
}

impl<T> Default for KanbanBoard<T> {
    fn default() -> Self {
        Self {
            new: Vec::new(),
            in_progress: Vec::new(),
            repaired: Vec::new(),
            scrap: Vec::new(),
        }
    }
}

impl<T: Staged> KanbanBoard<T> {
    #[must_use]
    pub fn from_requests(requests: impl IntoIterator<Item = T>) -> Self {
        let mut board = Self::default();
        for request in requests {
            board.column_mut(request.state()).push(request);
        }
        board
    }
}

impl<T> KanbanBoard<T> {
    fn column_mut(&mut self, state: RequestState) -> &mut Vec<T> {
        match state {
            RequestState::New => &mut self.new,
            RequestState::InProgress => &mut self.in_progress,
            RequestState::Repaired => &mut self.repaired,
            RequestState::Scrap => &mut self.scrap,
        }
    }

    /// Total number of cards on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.new.len() + self.in_progress.len() + self.repaired.len() + self.scrap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Card(u32, RequestState);

    impl Staged for Card {
        fn state(&self) -> RequestState {
            self.1
        }
    }

    #[test]
    fn should_group_cards_by_state_preserving_order() {
        let board = KanbanBoard::from_requests([
            Card(1, RequestState::New),
            Card(2, RequestState::Scrap),
            Card(3, RequestState::New),
            Card(4, RequestState::InProgress),
        ]);

        assert_eq!(
            board.new,
            vec![Card(1, RequestState::New), Card(3, RequestState::New)]
        );
        assert_eq!(board.in_progress.len(), 1);
        assert!(board.repaired.is_empty());
        assert_eq!(board.scrap.len(), 1);
        assert_eq!(board.len(), 4);
    }

    #[test]
    fn should_serialize_column_keys_in_snake_case() {
        let board: KanbanBoard<Card> = KanbanBoard::default();
        assert!(board.is_empty());

        let json = serde_json::to_value(KanbanBoard::<u8>::default()).unwrap();
        for key in ["new", "in_progress", "repaired", "scrap"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
