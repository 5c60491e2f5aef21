//! huffpack-cli - Command-line interface for huffpack
//!
//! Compresses and decompresses single files with the huffpack container format.

use clap::{Parser, Subcommand};
use huffpack::{compress_with_stats, decompress, read_header};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Inputs above this size get a progress bar
const PROGRESS_THRESHOLD: usize = 1024 * 1024;

#[derive(Parser)]
#[command(name = "huffpack-cli")]
#[command(about = "A CLI tool for Huffman compression and decompression")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    Compress {
        /// Input file to compress
        input: PathBuf,

        /// Output container file
        output: PathBuf,

        /// Force overwrite of output file
        #[arg(short, long)]
        force: bool,
    },

    /// Decompress a container file
    Decompress {
        /// Input container file
        input: PathBuf,

        /// Output decompressed file
        output: PathBuf,

        /// Force overwrite of output file
        #[arg(short, long)]
        force: bool,
    },

    /// Show the symbol table and metadata of a container
    Info {
        /// Container file to analyze
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            force,
        } => compress_file(&input, &output, force, cli.verbose, cli.quiet),
        Commands::Decompress {
            input,
            output,
            force,
        } => decompress_file(&input, &output, force, cli.verbose, cli.quiet),
        Commands::Info { input } => show_file_info(&input, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn check_paths(
    input: &Path,
    output: &Path,
    force: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !input.exists() {
        return Err(format!("Input file '{}' does not exist", input.display()).into());
    }

    if output.exists() && !force {
        return Err(format!(
            "Output file '{}' already exists. Use --force to overwrite",
            output.display()
        )
        .into());
    }

    Ok(())
}

fn progress_bar(size: usize, quiet: bool, message: &'static str) -> Option<ProgressBar> {
    if quiet || size <= PROGRESS_THRESHOLD {
        return None;
    }

    let pb = ProgressBar::new(2);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb.set_message(message);
    pb.inc(1);
    Some(pb)
}

fn compress_file(
    input: &Path,
    output: &Path,
    force: bool,
    verbose: bool,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    check_paths(input, output, force)?;

    if verbose {
        println!(
            "Compressing '{}' to '{}'",
            input.display(),
            output.display()
        );
    }

    let start_time = Instant::now();
    let input_data = fs::read(input)?;

    if verbose {
        println!("Input size: {} bytes", input_data.len());
    }

    let progress = progress_bar(input_data.len(), quiet, "Compressing...");

    let (compressed_data, stats) =
        compress_with_stats(&input_data).map_err(|e| format!("Compression failed: {}", e))?;

    if let Some(ref pb) = progress {
        pb.inc(1);
        pb.finish_with_message("Compression complete");
    }

    fs::write(output, &compressed_data)?;

    let elapsed = start_time.elapsed();

    if !quiet {
        println!("✓ Compression successful!");
        println!("  Input:   {} bytes", stats.input_bytes);
        println!("  Output:  {} bytes", stats.output_bytes);
        println!("  Ratio:   {:.1}%", stats.compression_ratio * 100.0);
        println!("  Symbols: {}", stats.symbol_count);
        println!("  Longest code: {} bits", stats.max_code_length);
        println!("  Time:    {:.2?}", elapsed);

        if stats.compression_ratio > 1.0 {
            println!("  Note: File expanded during compression (common for small/random data)");
        }
    }

    Ok(())
}

fn decompress_file(
    input: &Path,
    output: &Path,
    force: bool,
    verbose: bool,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    check_paths(input, output, force)?;

    if verbose {
        println!(
            "Decompressing '{}' to '{}'",
            input.display(),
            output.display()
        );
    }

    let start_time = Instant::now();
    let compressed_data = fs::read(input)?;
    let input_size = compressed_data.len();

    if verbose {
        println!("Compressed size: {} bytes", input_size);
    }

    let progress = progress_bar(input_size, quiet, "Decompressing...");

    let decompressed_data =
        decompress(&compressed_data).map_err(|e| format!("Decompression failed: {}", e))?;

    if let Some(ref pb) = progress {
        pb.inc(1);
        pb.finish_with_message("Decompression complete");
    }

    fs::write(output, &decompressed_data)?;

    let elapsed = start_time.elapsed();
    let output_size = decompressed_data.len();

    if !quiet {
        println!("✓ Decompression successful!");
        println!("  Input:  {} bytes", input_size);
        println!("  Output: {} bytes", output_size);
        if output_size > 0 {
            println!(
                "  Ratio:  {:.1}%",
                (input_size as f64 / output_size as f64) * 100.0
            );
        }
        println!("  Time:   {:.2?}", elapsed);
    }

    Ok(())
}

fn show_file_info(input: &Path, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !input.exists() {
        return Err(format!("Input file '{}' does not exist", input.display()).into());
    }

    let data = fs::read(input)?;

    println!("huffpack Container Information:");
    println!("  File: {}", input.display());
    println!("  Size: {} bytes", data.len());

    let header = match read_header(&data) {
        Ok(header) => header,
        Err(e) => {
            println!("  Status: ✗ Invalid or corrupted container");
            if verbose {
                println!("  Error: {}", e);
            }
            return Ok(());
        }
    };

    println!("  Symbols: {}", header.symbols.len());
    println!("  Longest code: {} bits", header.max_code_length());
    println!("  Payload count: {}", header.payload_count);
    println!("  Payload length: {} bytes", header.payload_length);
    if header.payload_length > 0 {
        println!(
            "  Compression Ratio: {:.1}%",
            (data.len() as f64 / header.payload_length as f64) * 100.0
        );
    }

    if verbose {
        println!("  Symbol table (stored order):");
        for entry in &header.symbols {
            let code = if entry.code.is_empty() {
                "(empty)"
            } else {
                entry.code.as_str()
            };
            println!("    {:#04x}  {:>3} bits  {}", entry.byte, entry.code.len(), code);
        }
    }

    match decompress(&data) {
        Ok(_) => println!("  Status: ✓ Valid container"),
        Err(e) => {
            println!("  Status: ✗ Payload does not decode");
            if verbose {
                println!("  Error: {}", e);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let input_path = dir.path().join("input.txt");
        let compressed_path = dir.path().join("compressed.huff");
        let output_path = dir.path().join("output.txt");

        let test_data = b"Hello, World! This is a test of the huffpack CLI tool.";
        fs::write(&input_path, test_data)?;

        compress_file(&input_path, &compressed_path, false, false, true)?;
        decompress_file(&compressed_path, &output_path, false, false, true)?;

        let result_data = fs::read(&output_path)?;
        assert_eq!(test_data, &result_data[..]);

        Ok(())
    }

    #[test]
    fn test_refuses_overwrite_without_force() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let input_path = dir.path().join("input.txt");
        let output_path = dir.path().join("existing.huff");
        fs::write(&input_path, b"some data")?;
        fs::write(&output_path, b"keep me")?;

        assert!(compress_file(&input_path, &output_path, false, false, true).is_err());
        assert_eq!(fs::read(&output_path)?, b"keep me");

        compress_file(&input_path, &output_path, true, false, true)?;
        assert_ne!(fs::read(&output_path)?, b"keep me");

        Ok(())
    }

    #[test]
    fn test_empty_input_reports_error() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let input_path = dir.path().join("empty.txt");
        let output_path = dir.path().join("empty.huff");
        fs::write(&input_path, b"")?;

        assert!(compress_file(&input_path, &output_path, false, false, true).is_err());
        assert!(!output_path.exists());

        Ok(())
    }
}
