use anyhow::{Context, Result};
use colored::*;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

use crate::checker::wordlist::WordList;

pub struct DictionaryInfo {
    pub language: String,
    pub path: PathBuf,
    pub word_count: usize,
    pub size_bytes: u64,
}

pub fn list_dictionaries() -> Result<()> {
    let data_dir = crate::config::Config::data_dir().context("Failed to get data directory")?;

    if !data_dir.exists() {
        println!("{}", "No dictionaries installed.".yellow());
        println!(
            "Copy a plain-text wordlist (one word per line) into {} as <language>.txt.",
            data_dir.display().to_string().cyan()
        );
        return Ok(());
    }

    println!("{}", "Installed dictionaries:".bold());
    println!();

    let entries = fs::read_dir(&data_dir)?;
    let mut found_any = false;

    for entry in entries {
        let entry = entry?;
        let path = entry.path();

        if path.extension().and_then(|s| s.to_str()) == Some("txt") {
            found_any = true;
            let language = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("unknown");

            let metadata = fs::metadata(&path)?;
            let size_kb = metadata.len() / 1024;

            println!(
                "  {} {} ({})",
                "✓".green(),
                language.cyan().bold(),
                format!("{}KB", size_kb).dimmed()
            );
        }
    }

    if !found_any {
        println!("{}", "No dictionaries found.".yellow());
    }

    println!();
    println!(
        "Data directory: {}",
        data_dir.display().to_string().dimmed()
    );

    Ok(())
}

pub fn show_info(language: &str) -> Result<()> {
    let data_dir = crate::config::Config::data_dir().context("Failed to get data directory")?;

    let dict_path = data_dir.join(format!("{}.txt", language));

    if !dict_path.exists() {
        println!(
            "{} Dictionary for {} not found.",
            "✗".red().bold(),
            language.yellow()
        );
        println!(
            "Copy a wordlist to {} to install it.",
            dict_path.display().to_string().cyan()
        );
        return Ok(());
    }

    let info = inspect(language, dict_path)?;

    println!("{}", format!("Dictionary: {}", info.language).bold());
    println!("  Path: {}", info.path.display());
    println!("  Size: {} KB", info.size_bytes / 1024);
    println!("  Words: {}", info.word_count);
    println!("  Format: plain text, one word per line");

    Ok(())
}

fn inspect(language: &str, path: PathBuf) -> Result<DictionaryInfo> {
    let metadata = fs::metadata(&path)
        .with_context(|| format!("Failed to stat dictionary: {}", path.display()))?;

    let file = File::open(&path)
        .with_context(|| format!("Failed to open dictionary: {}", path.display()))?;
    let mut words = WordList::new();
    let word_count = words
        .bulk_load(BufReader::new(file), true)
        .with_context(|| format!("Failed to read dictionary: {}", path.display()))?;

    Ok(DictionaryInfo {
        language: language.to_string(),
        path,
        word_count,
        size_bytes: metadata.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_inspect_counts_words() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("en_US.txt");
        let mut file = File::create(&path).unwrap();
        write!(file, "# comment\nhello\nworld\n\n").unwrap();

        let info = inspect("en_US", path).unwrap();
        assert_eq!(info.language, "en_US");
        assert_eq!(info.word_count, 2);
        assert!(info.size_bytes > 0);
    }
}
