/// Integer resource pool (energy) consumed by actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    /// Deducts `amount`, stopping at zero. Returns what was actually spent.
    pub fn spend(&mut self, amount: u32) -> u32 {
        let spent = amount.min(self.current);
        self.current -= spent;
        spent
    }

    /// Adds `amount`, capped at the maximum.
    pub fn restore(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount).min(self.maximum);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spending_saturates_at_zero() {
        let mut meter = ResourceMeter::full(3);
        assert_eq!(meter.spend(2), 2);
        assert_eq!(meter.spend(2), 1);
        assert!(meter.is_empty());
    }

    #[test]
    fn restore_is_capped() {
        let mut meter = ResourceMeter::new(1, 5);
        meter.restore(10);
        assert_eq!(meter.current, 5);
        assert_eq!(ResourceMeter::new(9, 4).current, 4);
    }
}
