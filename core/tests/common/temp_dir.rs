// SPDX-FileCopyrightText: 2025-2026 Rentcal Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Temporary directory management for integration tests.

use std::path::PathBuf;

use tokio::fs;

/// Temporary directories used for testing.
///
/// Automatically cleans up all created directories when dropped.
#[derive(Debug)]
pub struct TempDirs {
    /// State directory for the database file.
    pub state_dir: PathBuf,
    /// Scratch directory for input files such as passport scans.
    pub files_dir: PathBuf,
}

impl TempDirs {
    /// Creates new temporary directories for testing.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let base = tempfile::tempdir()?.keep();

        let state_dir = base.join("state");
        let files_dir = base.join("files");

        fs::create_dir_all(&state_dir).await?;
        fs::create_dir_all(&files_dir).await?;

        Ok(Self {
            state_dir,
            files_dir,
        })
    }

    /// Gets the base temporary directory.
    #[must_use]
    pub fn base(&self) -> PathBuf {
        self.state_dir
            .parent()
            .expect("temp directories should have a parent")
            .to_path_buf()
    }

    /// Writes a file into the scratch directory.
    #[allow(dead_code)]
    pub async fn create_file(
        &self,
        name: &str,
        content: &[u8],
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let path = self.files_dir.join(name);
        fs::write(&path, content).await?;
        Ok(path)
    }
}

/// Sets up temporary directories for integration tests.
pub async fn setup_temp_dirs() -> Result<TempDirs, Box<dyn std::error::Error>> {
    TempDirs::new().await
}

impl Drop for TempDirs {
    fn drop(&mut self) {
        let base = self.base();
        if let Err(e) = std::fs::remove_dir_all(&base) {
            tracing::warn!(path = %base.display(), err = %e, "failed to clean up temp directory");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn temp_dirs_creates_directories() {
        let dirs = TempDirs::new().await.unwrap();

        assert!(dirs.state_dir.is_dir());
        assert!(dirs.files_dir.is_dir());
        assert_eq!(dirs.state_dir.parent(), dirs.files_dir.parent());
    }

    #[tokio::test]
    async fn temp_dirs_create_file() {
        let dirs = TempDirs::new().await.unwrap();

        let path = dirs.create_file("passport.jpg", &[0xFF, 0xD8]).await.unwrap();

        assert!(path.starts_with(&dirs.files_dir));
        assert_eq!(fs::read(&path).await.unwrap(), vec![0xFF, 0xD8]);
    }

    #[tokio::test]
    async fn temp_dirs_cleanup_on_drop() {
        let base = {
            let dirs = TempDirs::new().await.unwrap();
            let base = dirs.base();
            assert!(base.exists());
            base
        };

        assert!(!base.exists());
    }
}
