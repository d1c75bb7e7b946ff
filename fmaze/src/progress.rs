/// Snapshot of how far a generation got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub done: usize,
    pub from: usize,
    pub is_done: bool,
}

impl Progress {
    pub fn new(done: usize, from: usize) -> Self {
        Self {
            done,
            from,
            is_done: false,
        }
    }

    pub fn percent(&self) -> f32 {
        if self.from == 0 {
            return 1.0;
        }

        self.done as f32 / self.from as f32
    }
}
