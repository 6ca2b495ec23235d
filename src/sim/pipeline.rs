// src/sim/pipeline.rs

use std::collections::VecDeque;

/// FIFO pipe modelling the replenishment lead time.
#[derive(Debug, Clone)]
pub struct LeadTimePipeline {
    buffer: VecDeque<f64>,
}

impl LeadTimePipeline {
    pub fn new(delay_days: usize) -> Self {
        let mut buffer = VecDeque::with_capacity(delay_days);
        // Pre-fill with zeros so orders take time to traverse the pipe
        for _ in 0..delay_days {
            buffer.push_back(0.0);
        }

        Self { buffer }
    }

    /// Step 1: Units arrive from the supplier.
    /// Call this at the START of the day.
    pub fn pop_arrival(&mut self) -> f64 {
        self.buffer.pop_front().unwrap_or(0.0)
    }

    /// Step 2: An order enters the pipeline.
    /// Call this at the END of the day.
    pub fn push_departure(&mut self, quantity: f64) {
        self.buffer.push_back(quantity);
    }

    /// Total units still in transit.
    pub fn in_transit(&self) -> f64 {
        self.buffer.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_arrive_after_the_configured_delay() {
        let mut pipe = LeadTimePipeline::new(3);

        pipe.pop_arrival();
        pipe.push_departure(40.0);

        // Two more full days pass with nothing arriving.
        for _ in 0..2 {
            assert_eq!(pipe.pop_arrival(), 0.0);
            pipe.push_departure(0.0);
        }

        assert_eq!(pipe.pop_arrival(), 40.0);
    }

    #[test]
    fn in_transit_tracks_outstanding_quantity() {
        let mut pipe = LeadTimePipeline::new(2);
        assert_eq!(pipe.in_transit(), 0.0);

        pipe.pop_arrival();
        pipe.push_departure(25.0);
        assert_eq!(pipe.in_transit(), 25.0);

        pipe.pop_arrival();
        pipe.push_departure(10.0);
        assert_eq!(pipe.in_transit(), 35.0);

        assert_eq!(pipe.pop_arrival(), 25.0);
        assert_eq!(pipe.in_transit(), 10.0);
    }
}
