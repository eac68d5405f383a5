//! Asset preloading
//!
//! Images are queued up front and downloaded before the game loop starts.
//! Each queued path resolves to exactly one success or one failure; the
//! join completes when the counts cover the whole queue. A failed load is
//! logged and stays permanently absent - later lookups return `None` and
//! the draw call site skips the blit.

use std::collections::HashMap;

use macroquad::prelude::{load_string, load_texture, FilterMode, Texture2D};

/// Manifest file listing images for builds that cannot enumerate
/// directories (WASM). Generated by build.rs.
pub const MANIFEST_FILE: &str = "manifest.txt";

/// Error raised while reading the asset manifest.
#[derive(Debug)]
pub enum AssetError {
    Manifest(String),
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::Manifest(msg) => write!(f, "manifest error: {}", msg),
        }
    }
}

impl std::error::Error for AssetError {}

/// Loaded textures keyed by asset path.
#[derive(Default)]
pub struct AssetStore {
    textures: HashMap<String, Texture2D>,
}

impl AssetStore {
    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.textures.insert(key.into(), texture);
    }

    /// Look up a loaded texture. `None` means the asset never loaded;
    /// callers degrade to a skipped draw.
    pub fn texture(&self, key: &str) -> Option<&Texture2D> {
        self.textures.get(key)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

/// Queues image downloads and tracks the completion join.
pub struct AssetManager {
    queue: Vec<String>,
    successes: usize,
    failures: usize,
}

impl AssetManager {
    pub fn new() -> Self {
        Self {
            queue: Vec::new(),
            successes: 0,
            failures: 0,
        }
    }

    /// Add a path to the download queue. Order is preserved.
    pub fn queue_download(&mut self, path: impl Into<String>) {
        self.queue.push(path.into());
    }

    /// Queue every image listed in `dir`'s manifest file.
    pub async fn queue_from_manifest(&mut self, dir: &str) -> Result<usize, AssetError> {
        let manifest_path = format!("{}/{}", dir, MANIFEST_FILE);
        let manifest = load_string(&manifest_path)
            .await
            .map_err(|e| AssetError::Manifest(format!("{}: {}", manifest_path, e)))?;

        let mut queued = 0;
        for line in manifest.lines() {
            let name = line.trim();
            if name.is_empty() || name.starts_with('#') {
                continue;
            }
            self.queue_download(format!("{}/{}", dir, name));
            queued += 1;
        }
        Ok(queued)
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    pub fn successes(&self) -> usize {
        self.successes
    }

    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Every queued download has resolved, one way or the other.
    pub fn is_done(&self) -> bool {
        self.successes + self.failures == self.queue.len()
    }

    fn record_success(&mut self) {
        self.successes += 1;
    }

    fn record_failure(&mut self) {
        self.failures += 1;
    }

    /// Download every queued image. Failures are logged and skipped, not
    /// fatal. Returns once the join completes.
    pub async fn download_all(&mut self) -> AssetStore {
        let mut store = AssetStore::default();
        let queue = self.queue.clone();
        for path in &queue {
            match load_texture(path).await {
                Ok(texture) => {
                    // Crisp pixels for scaled-up sprite art
                    texture.set_filter(FilterMode::Nearest);
                    store.insert(path.clone(), texture);
                    self.record_success();
                }
                Err(e) => {
                    eprintln!("Failed to download {}: {}", path, e);
                    self.record_failure();
                }
            }
        }
        println!(
            "Assets: {} loaded, {} failed, {} queued",
            self.successes, self.failures, self.queued()
        );
        store
    }
}

impl Default for AssetManager {
    fn default() -> Self {
        Self::new()
    }
}
