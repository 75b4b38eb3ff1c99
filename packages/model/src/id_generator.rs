use crc32fast::Hasher;

/// Derive a compact session seed from an arbitrary name using CRC32.
pub fn seed_from_name(name: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(name.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential ID generator for sections and elements within an editing
/// session. IDs are `<prefix>-<seed>-<n>`: unique for the session's lifetime
/// and deterministic for a given seed, which keeps generated documents
/// reproducible in tests.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u32,
}

impl IdGenerator {
    pub fn new(name: &str) -> Self {
        Self {
            seed: seed_from_name(name),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Fresh id for a section.
    pub fn section_id(&mut self) -> String {
        self.count += 1;
        format!("section-{}-{}", self.seed, self.count)
    }

    /// Fresh id for an element.
    pub fn element_id(&mut self) -> String {
        self.count += 1;
        format!("el-{}-{}", self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}
