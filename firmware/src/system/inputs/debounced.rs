/// Majority vote over the last `N` samples of a digital input.
#[derive(Debug, Eq, PartialEq, defmt::Format)]
pub struct Debounced<const N: usize> {
    buffer: [bool; N],
    pointer: usize,
}

impl<const N: usize> Debounced<N> {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            buffer: [false; N],
            pointer: 0,
        }
    }

    pub fn update(&mut self, value: bool) -> bool {
        self.buffer[self.pointer] = value;
        self.pointer = (self.pointer + 1) % N;
        let up = self.buffer.iter().filter(|i| **i).count();
        up > N / 2
    }
}
