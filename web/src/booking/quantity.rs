/// Ticket count bound to `[1, max_available]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketQuantity {
    value: u32,
    max_available: u32,
}

impl TicketQuantity {
    pub fn new(max_available: u32) -> Self {
        Self {
            value: 1,
            max_available: max_available.max(1),
        }
    }

    /// Builds a quantity starting at `value`, clamped into range.
    pub fn with_value(value: u32, max_available: u32) -> Self {
        let mut quantity = Self::new(max_available);
        quantity.value = value.clamp(1, quantity.max_available);
        quantity
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn max_available(&self) -> u32 {
        self.max_available
    }

    pub fn can_increment(&self) -> bool {
        self.value < self.max_available
    }

    pub fn can_decrement(&self) -> bool {
        self.value > 1
    }

    /// Returns the new value, or `None` when already at the upper bound.
    pub fn increment(&mut self) -> Option<u32> {
        if !self.can_increment() {
            return None;
        }
        self.value += 1;
        Some(self.value)
    }

    /// Returns the new value, or `None` when already at 1.
    pub fn decrement(&mut self) -> Option<u32> {
        if !self.can_decrement() {
            return None;
        }
        self.value -= 1;
        Some(self.value)
    }

    /// Applies typed input. Input that does not parse or is out of range is
    /// ignored and leaves the value untouched.
    pub fn set_from_input(&mut self, input: &str) -> Option<u32> {
        let parsed = input.trim().parse::<u32>().ok()?;
        if parsed < 1 || parsed > self.max_available {
            return None;
        }
        self.value = parsed;
        Some(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increments_stop_at_max_available() {
        let mut quantity = TicketQuantity::new(5);
        for expected in 2..=5 {
            assert_eq!(quantity.increment(), Some(expected));
        }
        assert_eq!(quantity.value(), 5);
        assert!(!quantity.can_increment());
        assert_eq!(quantity.increment(), None);
        assert_eq!(quantity.value(), 5);
    }

    #[test]
    fn decrement_never_goes_below_one() {
        let mut quantity = TicketQuantity::new(3);
        assert!(!quantity.can_decrement());
        assert_eq!(quantity.decrement(), None);
        assert_eq!(quantity.value(), 1);
    }

    #[test]
    fn invalid_input_is_ignored() {
        let mut quantity = TicketQuantity::with_value(2, 4);
        assert_eq!(quantity.set_from_input("abc"), None);
        assert_eq!(quantity.set_from_input("0"), None);
        assert_eq!(quantity.set_from_input("5"), None);
        assert_eq!(quantity.set_from_input("-1"), None);
        assert_eq!(quantity.value(), 2);

        assert_eq!(quantity.set_from_input(" 4 "), Some(4));
        assert_eq!(quantity.value(), 4);
    }

    #[test]
    fn zero_availability_still_allows_one() {
        let quantity = TicketQuantity::new(0);
        assert_eq!(quantity.max_available(), 1);
        assert_eq!(quantity.value(), 1);
    }

    #[test]
    fn every_operation_stays_in_bounds() {
        let mut quantity = TicketQuantity::new(3);
        let inputs = ["2", "9", "x", "3", "1", ""];
        for (step, input) in inputs.iter().enumerate() {
            if step % 2 == 0 {
                quantity.increment();
            } else {
                quantity.decrement();
            }
            quantity.set_from_input(input);
            assert!((1..=3).contains(&quantity.value()));
        }
    }
}
