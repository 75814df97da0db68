use crate::classifier::{Combination, Shape};

/// The combination currently to beat, if any.
///
/// Owned by the turn orchestrator; the core functions only ever read it.
/// An open table means nothing is active and any recognized shape may be
/// led.
#[derive(Debug, Clone, Default)]
pub struct TableState {
    current: Option<Combination>,
}

impl TableState {
    /// An open table: no combination to beat.
    pub fn open() -> Self {
        Self { current: None }
    }

    /// A table with `combination` active.
    pub fn with_current(combination: Combination) -> Self {
        Self { current: Some(combination) }
    }

    pub fn is_open(&self) -> bool {
        self.current.is_none()
    }

    pub fn current(&self) -> Option<&Combination> {
        self.current.as_ref()
    }

    pub(crate) fn set(&mut self, combination: Combination) {
        self.current = Some(combination);
    }

    pub(crate) fn clear(&mut self) {
        self.current = None;
    }
}

/// Decide whether `candidate` may be played onto `table`.
///
/// Rules, in order:
/// 1. An open table accepts any recognized combination.
/// 2. A bomb beats any non-bomb, regardless of arity.
/// 3. A bomb beats another bomb only with a strictly higher key.
/// 4. Otherwise the shapes must match exactly (including run length for
///    sequences) and the candidate's key must be strictly higher.
///
/// Unrecognized selections never reach this function; callers classify
/// first and reject on `None`.
///
/// ```
/// use shed_rs::cards::parse_cards;
/// use shed_rs::classifier::classify;
/// use shed_rs::rules::{is_legal, TableState};
///
/// let sevens = classify(&parse_cards("7c 7d").unwrap()).unwrap();
/// let nines = classify(&parse_cards("9c 9d").unwrap()).unwrap();
/// let table = TableState::with_current(sevens);
/// assert!(is_legal(&nines, &table));
/// ```
pub fn is_legal(candidate: &Combination, table: &TableState) -> bool {
    let Some(current) = table.current() else {
        return true;
    };
    match (candidate.shape(), current.shape()) {
        (Shape::Bomb, Shape::Bomb) => candidate.key() > current.key(),
        (Shape::Bomb, _) => true,
        (candidate_shape, current_shape) => {
            candidate_shape == current_shape && candidate.key() > current.key()
        }
    }
}
