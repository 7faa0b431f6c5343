use anyhow::Result;
use tempfile::TempDir;
use text_reverser::{reverse_characters, reverse_words, save_to_file};

#[test]
fn test_save_to_file_round_trips_contents() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("reversed.txt");
    let text = "dlrow olleh\nsecond line with ünïcödé ✓";

    assert!(save_to_file(text, &path));
    assert_eq!(std::fs::read_to_string(&path)?, text);
    Ok(())
}

#[test]
fn test_save_to_file_overwrites_existing_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("out.txt");
    std::fs::write(&path, "a much longer previous content")?;

    assert!(save_to_file("short", &path));
    assert_eq!(std::fs::read_to_string(&path)?, "short");
    Ok(())
}

#[test]
fn test_save_to_file_empty_text_creates_empty_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("empty.txt");

    assert!(save_to_file("", &path));
    assert_eq!(std::fs::read_to_string(&path)?, "");
    Ok(())
}

#[test]
fn test_save_to_unwritable_path_returns_false() -> Result<()> {
    let temp_dir = TempDir::new()?;

    // 目標是目錄或上層目錄不存在都應回傳 false
    assert!(!save_to_file("text", temp_dir.path()));
    assert!(!save_to_file(
        "text",
        temp_dir.path().join("missing").join("out.txt")
    ));
    Ok(())
}

#[test]
fn test_reversal_properties() {
    assert_eq!(reverse_characters(""), "");
    assert_eq!(reverse_characters(&reverse_characters("Hello, 世界!")), "Hello, 世界!");
    assert_eq!(reverse_words("hello world"), "world hello");
    assert_eq!(reverse_words("  a   b  c "), "c b a");
    assert_eq!(reverse_words(""), "");
    assert_eq!(reverse_words("single"), "single");
}
