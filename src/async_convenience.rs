//! Async convenience functions
//!
//! The codec works on whole payloads, so these helpers read the complete
//! input from an async source, run the codec, and hand the result back.

#[cfg(feature = "async")]
/// Whole-payload async helpers
pub mod functions {
    use crate::{CompressionStats, HuffError, Result};
    use bytes::Bytes;
    use std::path::Path;
    use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt, BufReader, BufWriter};

    /// Compress everything an async reader yields
    pub async fn compress_async<R: AsyncRead + Unpin>(reader: R) -> Result<Vec<u8>> {
        let input = read_all(reader).await?;
        crate::compress(&input)
    }

    /// Decompress a container read from an async reader
    pub async fn decompress_async<R: AsyncRead + Unpin>(reader: R) -> Result<Vec<u8>> {
        let input = read_all(reader).await?;
        crate::decompress(&input)
    }

    /// Compress a shared buffer on the blocking pool
    pub async fn compress_bytes_async(data: Bytes) -> Result<Bytes> {
        run_blocking(move || crate::compress(&data)).await
    }

    /// Decompress a shared buffer on the blocking pool
    pub async fn decompress_bytes_async(data: Bytes) -> Result<Bytes> {
        run_blocking(move || crate::decompress(&data)).await
    }

    /// Compress one file into another
    pub async fn compress_file<P1: AsRef<Path>, P2: AsRef<Path>>(
        input_path: P1,
        output_path: P2,
    ) -> Result<CompressionStats> {
        let input = tokio::fs::File::open(input_path).await?;
        let data = read_all(input).await?;

        let (compressed, stats) = crate::compress_with_stats(&data)?;
        write_all(output_path, &compressed).await?;

        log::debug!(
            "compressed {} -> {} bytes ({:.3})",
            stats.input_bytes,
            stats.output_bytes,
            stats.compression_ratio
        );
        Ok(stats)
    }

    /// Decompress one file into another
    pub async fn decompress_file<P1: AsRef<Path>, P2: AsRef<Path>>(
        input_path: P1,
        output_path: P2,
    ) -> Result<CompressionStats> {
        let input = tokio::fs::File::open(input_path).await?;
        let compressed = read_all(input).await?;

        let header = crate::read_header(&compressed)?;
        let data = crate::decompress(&compressed)?;
        write_all(output_path, &data).await?;

        Ok(CompressionStats::new(
            data.len() as u64,
            compressed.len() as u64,
            header.symbols.len(),
            header.max_code_length(),
        ))
    }

    async fn read_all<R: AsyncRead + Unpin>(reader: R) -> Result<Vec<u8>> {
        let mut reader = BufReader::new(reader);
        let mut input = Vec::new();
        reader.read_to_end(&mut input).await?;
        Ok(input)
    }

    async fn write_all<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<()> {
        let output = tokio::fs::File::create(path).await?;
        let mut writer = BufWriter::new(output);
        writer.write_all(data).await?;
        writer.flush().await?;
        Ok(())
    }

    async fn run_blocking<F>(job: F) -> Result<Bytes>
    where
        F: FnOnce() -> Result<Vec<u8>> + Send + 'static,
    {
        tokio::task::spawn_blocking(job)
            .await
            .map_err(|e| HuffError::Io(std::io::Error::other(e)))?
            .map(Bytes::from)
    }

}

#[cfg(feature = "async")]
pub use functions::*;
