//! Rolling sample window for trailing statistics
//!
//! Fixed-capacity ring buffer keeping the most recent N samples in
//! chronological order. Used for hip-height steadiness during jumps.

/// Rolling buffer over the last `N` scalar samples
#[derive(Clone, Debug)]
pub struct RollingWindow<const N: usize> {
    /// Circular storage
    data: [f32; N],

    /// Next slot to write
    write_index: usize,

    /// Whether the buffer has wrapped at least once
    filled: bool,
}

impl<const N: usize> RollingWindow<N> {
    pub fn new() -> Self {
        Self {
            data: [0.0; N],
            write_index: 0,
            filled: false,
        }
    }

    /// Push a new sample, evicting the oldest once full
    pub fn push(&mut self, value: f32) {
        self.data[self.write_index] = value;
        self.write_index = (self.write_index + 1) % N;

        if self.write_index == 0 {
            self.filled = true;
        }
    }

    /// Whether `N` samples have been collected
    pub fn is_full(&self) -> bool {
        self.filled
    }

    pub fn len(&self) -> usize {
        if self.filled {
            N
        } else {
            self.write_index
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Samples oldest → newest
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        let start = if self.filled { self.write_index } else { 0 };
        (0..self.len()).map(move |i| self.data[(start + i) % N])
    }

    pub fn mean(&self) -> Option<f32> {
        if self.is_empty() {
            return None;
        }
        Some(self.iter().sum::<f32>() / self.len() as f32)
    }

    /// Population variance of the stored samples
    pub fn variance(&self) -> Option<f32> {
        let mean = self.mean()?;
        let sum_sq: f32 = self.iter().map(|v| (v - mean) * (v - mean)).sum();
        Some(sum_sq / self.len() as f32)
    }

    pub fn clear(&mut self) {
        self.data = [0.0; N];
        self.write_index = 0;
        self.filled = false;
    }
}

impl<const N: usize> Default for RollingWindow<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_most_recent_samples() {
        let mut window: RollingWindow<3> = RollingWindow::new();
        for v in [1.0, 2.0, 3.0, 4.0] {
            window.push(v);
        }
        assert!(window.is_full());
        assert_eq!(window.iter().collect::<Vec<_>>(), vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_variance() {
        let mut window: RollingWindow<4> = RollingWindow::new();
        assert_eq!(window.variance(), None);
        for v in [0.5, 0.5, 0.5] {
            window.push(v);
        }
        assert_eq!(window.variance(), Some(0.0));
        window.push(0.9);
        assert!(window.variance().unwrap() > 0.0);
    }
}
