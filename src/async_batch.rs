//! Async batch processing module
//!
//! Compresses many files concurrently. Each file is still one payload and
//! one container; only the I/O and scheduling are concurrent.

#[cfg(feature = "async")]
/// Concurrent file compression with a configurable concurrency limit
pub mod processor {
    use crate::{CompressionStats, Result};
    use futures::stream::{self, StreamExt, TryStreamExt};
    use std::path::{Path, PathBuf};

    /// Concurrent file processor
    #[derive(Debug, Clone)]
    pub struct AsyncBatchProcessor {
        concurrency_limit: usize,
    }

    impl AsyncBatchProcessor {
        /// Create a new batch processor with one task per CPU
        pub fn new() -> Self {
            Self {
                concurrency_limit: num_cpus::get(),
            }
        }

        /// Set the concurrency limit (at least 1)
        pub fn with_concurrency(mut self, limit: usize) -> Self {
            self.concurrency_limit = limit.max(1);
            self
        }

        /// Current concurrency limit
        pub fn concurrency(&self) -> usize {
            self.concurrency_limit
        }

        /// Compress every file, returning the containers in completion order
        pub async fn compress_files<P: AsRef<Path> + Send + Sync>(
            &self,
            files: Vec<P>,
        ) -> Result<Vec<(PathBuf, Vec<u8>, CompressionStats)>> {
            let results = stream::iter(files.into_iter().map(|path| async move {
                Self::compress_single_file(path.as_ref()).await
            }))
            .buffer_unordered(self.concurrency_limit)
            .try_collect()
            .await?;

            Ok(results)
        }

        /// Compress every file, yielding results as they complete
        pub fn compress_files_streaming<P: AsRef<Path> + Send + Sync + 'static>(
            &self,
            files: Vec<P>,
        ) -> impl futures::Stream<Item = Result<(PathBuf, CompressionStats)>> + '_ {
            stream::iter(files.into_iter().map(|path| async move {
                let (path_buf, _data, stats) = Self::compress_single_file(path.as_ref()).await?;
                Ok((path_buf, stats))
            }))
            .buffer_unordered(self.concurrency_limit)
        }

        async fn compress_single_file(
            path: &Path,
        ) -> Result<(PathBuf, Vec<u8>, CompressionStats)> {
            let data = tokio::fs::read(path).await?;
            let (compressed, stats) =
                tokio::task::spawn_blocking(move || crate::compress_with_stats(&data))
                    .await
                    .map_err(|e| crate::HuffError::Io(std::io::Error::other(e)))??;

            log::debug!(
                "{}: {} -> {} bytes, {} symbols",
                path.display(),
                stats.input_bytes,
                stats.output_bytes,
                stats.symbol_count
            );
            Ok((path.to_path_buf(), compressed, stats))
        }
    }

    impl Default for AsyncBatchProcessor {
        fn default() -> Self {
            Self::new()
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_compress_files() -> Result<()> {
            let dir = tempfile::tempdir()?;
            let mut paths = Vec::new();
            for (i, body) in [&b"alpha alpha alpha"[..], &b"beta"[..], &[0u8, 1, 2, 0][..]]
                .iter()
                .enumerate()
            {
                let path = dir.path().join(format!("file{i}.bin"));
                std::fs::write(&path, body)?;
                paths.push(path);
            }

            let processor = AsyncBatchProcessor::new().with_concurrency(2);
            assert_eq!(processor.concurrency(), 2);

            let results = processor.compress_files(paths).await?;
            assert_eq!(results.len(), 3);
            for (path, compressed, stats) in results {
                let original = std::fs::read(&path)?;
                assert_eq!(crate::decompress(&compressed)?, original);
                assert_eq!(stats.input_bytes, original.len() as u64);
            }
            Ok(())
        }

        #[tokio::test]
        async fn test_streaming_results() -> Result<()> {
            let dir = tempfile::tempdir()?;
            let path = dir.path().join("only.bin");
            std::fs::write(&path, b"streamed result")?;

            let processor = AsyncBatchProcessor::default();
            let results: Vec<_> = processor
                .compress_files_streaming(vec![path.clone()])
                .try_collect()
                .await?;
            assert_eq!(results.len(), 1);
            assert_eq!(results[0].0, path);
            assert_eq!(results[0].1.input_bytes, 15);
            Ok(())
        }

        #[tokio::test]
        async fn test_empty_file_fails_batch() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("empty.bin");
            std::fs::write(&path, b"").unwrap();

            let err = AsyncBatchProcessor::new()
                .compress_files(vec![path])
                .await
                .unwrap_err();
            assert!(matches!(err, crate::HuffError::EmptyInput));
        }
    }
}

#[cfg(feature = "async")]
pub use processor::AsyncBatchProcessor;
