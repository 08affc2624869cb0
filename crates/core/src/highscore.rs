//! High score persistence port.
//!
//! The snake game loads its best score once at construction and saves it
//! whenever the running score beats it. Storage itself lives outside the core
//! (see `arcade-persist` for the file-backed store).

/// Key-value storage for a single high score.
pub trait HighScoreStore {
    /// Stored value, or 0 when nothing has been stored yet.
    fn load(&mut self) -> u32;

    fn save(&mut self, score: u32);
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for &mut S {
    fn load(&mut self) -> u32 {
        (**self).load()
    }

    fn save(&mut self, score: u32) {
        (**self).save(score)
    }
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for Box<S> {
    fn load(&mut self) -> u32 {
        (**self).load()
    }

    fn save(&mut self, score: u32) {
        (**self).save(score)
    }
}

/// In-memory store; records every save for inspection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHighScore {
    value: u32,
    saves: Vec<u32>,
}

impl MemoryHighScore {
    pub fn new(value: u32) -> Self {
        Self {
            value,
            saves: Vec::new(),
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Every value passed to `save`, oldest first
    pub fn saves(&self) -> &[u32] {
        &self.saves
    }
}

impl HighScoreStore for MemoryHighScore {
    fn load(&mut self) -> u32 {
        self.value
    }

    fn save(&mut self, score: u32) {
        self.value = score;
        self.saves.push(score);
    }
}
