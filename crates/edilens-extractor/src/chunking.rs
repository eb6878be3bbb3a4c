//! Line chunking for chunked delegation to the remote classifier

/// Splits filtered lines into fixed-size groups
///
/// Each group becomes one classification request. The last group may be
/// shorter than `chunk_size`.
pub struct LineChunker {
    chunk_size: usize,
}

impl LineChunker {
    /// Create a new line chunker
    pub fn new(chunk_size: usize) -> Self {
        Self { chunk_size }
    }

    /// Chunk the given lines
    pub fn chunk(&self, lines: &[String]) -> Vec<Vec<String>> {
        if lines.is_empty() {
            return Vec::new();
        }

        lines
            .chunks(self.chunk_size.max(1))
            .map(|group| group.to_vec())
            .collect()
    }
}
