use shared_types::SeatingLayout;
use std::fmt;
use std::str::FromStr;

/// A seat identifier: row letter followed by a 1-based column, e.g. "A3".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeatId {
    row: char,
    column: u8,
}

impl SeatId {
    pub fn new(row: char, column: u8) -> Option<Self> {
        let row = row.to_ascii_uppercase();
        if !row.is_ascii_uppercase() || column == 0 {
            return None;
        }
        Some(Self { row, column })
    }

    pub fn row(&self) -> char {
        self.row
    }

    pub fn column(&self) -> u8 {
        self.column
    }

    /// Zero-based row index ('A' is 0).
    pub fn row_index(&self) -> u8 {
        self.row as u8 - b'A'
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid seat id: {0:?}")]
pub struct InvalidSeatId(pub String);

impl FromStr for SeatId {
    type Err = InvalidSeatId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let row = chars
            .next()
            .ok_or_else(|| InvalidSeatId(s.to_string()))?;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidSeatId(s.to_string()));
        }
        let column = digits
            .parse::<u8>()
            .map_err(|_| InvalidSeatId(s.to_string()))?;
        SeatId::new(row, column).ok_or_else(|| InvalidSeatId(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatStatus {
    Available,
    Unavailable,
    Selected,
}

impl SeatStatus {
    pub fn css_class(&self) -> &'static str {
        match self {
            SeatStatus::Available => "seat seat--available",
            SeatStatus::Unavailable => "seat seat--unavailable",
            SeatStatus::Selected => "seat seat--selected",
        }
    }
}

/// Static row/column grid with the seats that cannot be booked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatingPlan {
    rows: u8,
    seats_per_row: u8,
    unavailable: Vec<SeatId>,
}

impl SeatingPlan {
    /// Row count is capped at 26 so every row has a letter.
    pub fn new(rows: u8, seats_per_row: u8, unavailable: Vec<SeatId>) -> Self {
        Self {
            rows: rows.min(26),
            seats_per_row,
            unavailable,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn seats_per_row(&self) -> u8 {
        self.seats_per_row
    }

    pub fn unavailable(&self) -> &[SeatId] {
        &self.unavailable
    }

    pub fn contains(&self, seat: SeatId) -> bool {
        seat.row_index() < self.rows && seat.column() <= self.seats_per_row
    }

    pub fn is_unavailable(&self, seat: SeatId) -> bool {
        self.unavailable.contains(&seat)
    }

    pub fn row_letters(&self) -> impl Iterator<Item = char> {
        (b'A'..=b'Z').take(usize::from(self.rows)).map(char::from)
    }

    pub fn seats_in_row(&self, row: char) -> Vec<SeatId> {
        (1..=self.seats_per_row)
            .filter_map(|column| SeatId::new(row, column))
            .collect()
    }

    /// All seats, row by row.
    pub fn seats(&self) -> Vec<SeatId> {
        self.row_letters()
            .flat_map(|row| self.seats_in_row(row))
            .collect()
    }

    pub fn available_count(&self) -> usize {
        self.seats()
            .into_iter()
            .filter(|seat| !self.is_unavailable(*seat))
            .count()
    }

    pub fn status_of(&self, seat: SeatId, selection: &SeatSelection) -> SeatStatus {
        if self.is_unavailable(seat) {
            SeatStatus::Unavailable
        } else if selection.contains(seat) {
            SeatStatus::Selected
        } else {
            SeatStatus::Available
        }
    }
}

impl From<&SeatingLayout> for SeatingPlan {
    /// Malformed unavailable-seat entries are skipped.
    fn from(layout: &SeatingLayout) -> Self {
        let unavailable = layout
            .unavailable_seats
            .iter()
            .filter_map(|raw| raw.parse::<SeatId>().ok())
            .collect();
        SeatingPlan::new(layout.rows, layout.seats_per_row, unavailable)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatToggle {
    Selected,
    Deselected,
    Unavailable,
    LimitReached,
    OutOfPlan,
}

impl SeatToggle {
    pub fn changed(&self) -> bool {
        matches!(self, SeatToggle::Selected | SeatToggle::Deselected)
    }
}

/// Selected seats in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatSelection {
    seats: Vec<SeatId>,
}

impl SeatSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn contains(&self, seat: SeatId) -> bool {
        self.seats.contains(&seat)
    }

    pub fn seats(&self) -> &[SeatId] {
        &self.seats
    }

    pub fn toggle(&mut self, plan: &SeatingPlan, seat: SeatId, max_selectable: usize) -> SeatToggle {
        if !plan.contains(seat) {
            return SeatToggle::OutOfPlan;
        }
        if plan.is_unavailable(seat) {
            return SeatToggle::Unavailable;
        }
        if let Some(pos) = self.seats.iter().position(|s| *s == seat) {
            self.seats.remove(pos);
            return SeatToggle::Deselected;
        }
        if self.seats.len() >= max_selectable {
            return SeatToggle::LimitReached;
        }
        self.seats.push(seat);
        SeatToggle::Selected
    }

    /// Keeps the first `max` seats in selection order.
    pub fn truncate(&mut self, max: usize) {
        self.seats.truncate(max);
    }
}

/// Joins seat ids in order, e.g. `join_seats(&[a1, b4], ",")` is "A1,B4".
pub fn join_seats(seats: &[SeatId], separator: &str) -> String {
    seats
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(s: &str) -> SeatId {
        s.parse().unwrap()
    }

    fn plan() -> SeatingPlan {
        SeatingPlan::new(3, 5, vec![seat("A3"), seat("C1")])
    }

    #[test]
    fn parses_and_displays_seat_ids() {
        assert_eq!(seat("a12").to_string(), "A12");
        assert_eq!(seat("B4").row_index(), 1);
        assert!("".parse::<SeatId>().is_err());
        assert!("A".parse::<SeatId>().is_err());
        assert!("A0".parse::<SeatId>().is_err());
        assert!("3A".parse::<SeatId>().is_err());
        assert!("A+3".parse::<SeatId>().is_err());
        assert!("A-3".parse::<SeatId>().is_err());
        assert!("A 3".parse::<SeatId>().is_err());
    }

    #[test]
    fn plan_enumerates_rows_then_columns() {
        let plan = SeatingPlan::new(2, 3, vec![]);
        let ids: Vec<String> = plan.seats().iter().map(ToString::to_string).collect();
        assert_eq!(ids, ["A1", "A2", "A3", "B1", "B2", "B3"]);
        assert_eq!(plan.available_count(), 6);
        assert!(!plan.contains(seat("C1")));
        assert!(!plan.contains(seat("A4")));
    }

    #[test]
    fn clicking_unavailable_seat_leaves_selection_unchanged() {
        let plan = plan();
        let mut selection = SeatSelection::new();
        selection.toggle(&plan, seat("A1"), 4);
        let before = selection.clone();

        assert_eq!(selection.toggle(&plan, seat("A3"), 4), SeatToggle::Unavailable);
        assert_eq!(selection, before);
    }

    #[test]
    fn selected_seat_toggles_off() {
        let plan = plan();
        let mut selection = SeatSelection::new();
        assert_eq!(selection.toggle(&plan, seat("B2"), 2), SeatToggle::Selected);
        assert_eq!(plan.status_of(seat("B2"), &selection), SeatStatus::Selected);
        assert_eq!(selection.toggle(&plan, seat("B2"), 2), SeatToggle::Deselected);
        assert!(selection.is_empty());
        assert_eq!(plan.status_of(seat("B2"), &selection), SeatStatus::Available);
    }

    #[test]
    fn selection_never_exceeds_limit() {
        let plan = plan();
        let mut selection = SeatSelection::new();
        for id in ["A1", "A2", "A4", "B1", "B2"] {
            selection.toggle(&plan, seat(id), 3);
            assert!(selection.len() <= 3);
        }
        assert_eq!(join_seats(selection.seats(), ","), "A1,A2,A4");
        assert_eq!(selection.toggle(&plan, seat("B3"), 3), SeatToggle::LimitReached);
    }

    #[test]
    fn seats_outside_the_plan_are_rejected() {
        let plan = plan();
        let mut selection = SeatSelection::new();
        assert_eq!(selection.toggle(&plan, seat("Z9"), 3), SeatToggle::OutOfPlan);
        assert!(!SeatToggle::OutOfPlan.changed());
    }

    #[test]
    fn truncate_keeps_selection_order() {
        let plan = plan();
        let mut selection = SeatSelection::new();
        for id in ["B5", "A1", "C3"] {
            selection.toggle(&plan, seat(id), 5);
        }
        selection.truncate(2);
        assert_eq!(selection.seats(), &[seat("B5"), seat("A1")]);
    }

    #[test]
    fn row_letters_stop_at_z() {
        let plan = SeatingPlan::new(u8::MAX, 1, vec![]);
        assert_eq!(plan.row_letters().count(), 26);
        assert_eq!(plan.seats().len(), 26);
    }

    #[test]
    fn layout_conversion_skips_malformed_ids() {
        let layout = SeatingLayout {
            rows: 40,
            seats_per_row: 2,
            unavailable_seats: vec!["A1".into(), "??".into(), "b2".into()],
        };
        let plan = SeatingPlan::from(&layout);
        assert_eq!(plan.rows(), 26);
        assert_eq!(plan.row_letters().last(), Some('Z'));
        assert_eq!(plan.unavailable(), &[seat("A1"), seat("B2")]);
        assert_eq!(plan.available_count(), 26 * 2 - 2);
    }
}
