use anyhow::Result;
use std::io::{Cursor, Write};
use tempfile::TempDir;
use text_reverser::{LocalStorage, Menu, ReverserError, Session};

/// 以給定輸入跑完整個選單，回傳畫面輸出
fn run_menu(input: &str, storage: LocalStorage) -> Result<String> {
    run_menu_bytes(input.as_bytes(), storage)
}

fn run_menu_bytes(input: &[u8], storage: LocalStorage) -> Result<String> {
    let mut output = Vec::new();
    let mut menu = Menu::new(Cursor::new(input), &mut output, storage, Session::default());
    menu.run()?;
    drop(menu);
    Ok(String::from_utf8(output)?)
}

/// 寫入一定失敗的輸出端
struct ClosedOutput;

impl Write for ClosedOutput {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_reverse_characters_and_words() -> Result<()> {
    let output = run_menu("1\nhello world\n2\n  one   two three \n5\n", LocalStorage::default())?;

    assert!(output.contains("=== Text Reverser ==="));
    assert!(output.contains("Reversed: dlrow olleh"));
    assert!(output.contains("Reversed: three two one"));
    assert!(output.trim_end().ends_with("Goodbye!"));
    Ok(())
}

#[test]
fn test_invalid_option_reprompts() -> Result<()> {
    let output = run_menu("9\nabc\n5\n", LocalStorage::default())?;

    assert_eq!(output.matches("Invalid option, please try again.").count(), 2);
    assert_eq!(output.matches("Select an option (1-5): ").count(), 3);
    Ok(())
}

#[test]
fn test_empty_input_warns() -> Result<()> {
    let output = run_menu("1\n   \n5\n", LocalStorage::default())?;

    assert!(output.contains("Empty Input"));
    assert!(!output.contains("Reversed:"));
    Ok(())
}

#[test]
fn test_save_without_result_warns() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = run_menu("3\n5\n", LocalStorage::new(temp_dir.path()))?;

    assert!(output.contains("Empty Output"));
    assert!(!output.contains("Enter filename: "));
    Ok(())
}

#[test]
fn test_save_writes_displayed_result() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = run_menu(
        "2\nthe quick brown fox\n3\nfox\n5\n",
        LocalStorage::new(temp_dir.path()),
    )?;

    let saved_path = temp_dir.path().join("fox.txt");
    assert!(output.contains(&format!(
        "Text successfully saved to {}",
        saved_path.display()
    )));
    assert_eq!(std::fs::read_to_string(saved_path)?, "fox brown quick the");
    Ok(())
}

#[test]
fn test_save_failure_keeps_menu_running() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = run_menu(
        "1\nabc\n3\nmissing/out.txt\n1\nxyz\n5\n",
        LocalStorage::new(temp_dir.path()),
    )?;

    assert!(output.contains("❌ Failed to save the file"));
    assert!(output.contains("Reversed: zyx"));
    Ok(())
}

#[test]
fn test_clear_discards_result() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = run_menu("1\nabc\n4\n3\n5\n", LocalStorage::new(temp_dir.path()))?;

    assert!(output.contains("Cleared."));
    assert!(output.contains("Empty Output"));
    Ok(())
}

#[test]
fn test_end_of_input_exits() -> Result<()> {
    let output = run_menu("1\n", LocalStorage::default())?;

    assert!(output.trim_end().ends_with("Goodbye!"));
    Ok(())
}

#[test]
fn test_invalid_utf8_input_keeps_menu_running() -> Result<()> {
    let mut input = b"1\n".to_vec();
    input.extend_from_slice(&[0xff, 0xfe, b'a', b'\n']);
    input.extend_from_slice(b"1\nabc\n5\n");

    let output = run_menu_bytes(&input, LocalStorage::default())?;

    assert!(output.contains("Reversed: a\u{FFFD}\u{FFFD}"));
    assert!(output.contains("Reversed: cba"));
    assert!(output.trim_end().ends_with("Goodbye!"));
    Ok(())
}

#[test]
fn test_save_to_directory_like_path_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::create_dir(temp_dir.path().join("outdir"))?;
    let output = run_menu("1\nabc\n3\noutdir/\n5\n", LocalStorage::new(temp_dir.path()))?;

    assert!(output.contains("Invalid Value"));
    assert!(!output.contains("Text successfully saved"));
    assert!(!temp_dir.path().join("outdir.txt").exists());
    Ok(())
}

#[test]
fn test_broken_output_is_a_console_error() {
    let mut menu = Menu::new(
        Cursor::new(&b"5\n"[..]),
        ClosedOutput,
        LocalStorage::default(),
        Session::default(),
    );

    let err = menu.run().unwrap_err();
    assert!(matches!(err, ReverserError::ConsoleError(_)));
    assert!(!err.recovery_suggestion().contains("--cli"));
}
