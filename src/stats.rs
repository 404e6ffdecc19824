#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accumulator {
    pub min: f64,
    pub max: f64,
    pub sum: f64,
    pub count: u64,
}

impl Accumulator {
    /// Starts a new accumulator from the first observation of a key.
    pub fn new(value: f64) -> Self {
        Accumulator {
            min: value,
            max: value,
            sum: value,
            count: 1,
        }
    }

    pub fn record(&mut self, value: f64) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
        self.sum += value;
        self.count += 1;
    }

    pub fn merge(&mut self, other: &Accumulator) {
        if other.min < self.min {
            self.min = other.min;
        }
        if other.max > self.max {
            self.max = other.max;
        }
        self.sum += other.sum;
        self.count += other.count;
    }

    pub fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }
}
