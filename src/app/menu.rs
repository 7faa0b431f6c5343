use crate::core::session::Session;
use crate::core::{Mode, Storage};
use crate::utils::error::{ErrorSeverity, ReverserError, Result};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Reverse(Mode),
    Save,
    Clear,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" => Some(Self::Reverse(Mode::Characters)),
            "2" => Some(Self::Reverse(Mode::Words)),
            "3" => Some(Self::Save),
            "4" => Some(Self::Clear),
            "5" | "q" | "quit" | "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Numbered menu loop over any line-based input and output.
pub struct Menu<R, W, S> {
    input: R,
    output: W,
    storage: S,
    session: Session,
}

impl<R: BufRead, W: Write, S: Storage> Menu<R, W, S> {
    pub fn new(input: R, output: W, storage: S, session: Session) -> Self {
        Self {
            input,
            output,
            storage,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("Starting menu loop");

        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("\nSelect an option (1-5): ")? else {
                break;
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Reverse(mode)) => {
                    if !self.reverse(mode)? {
                        break;
                    }
                }
                Some(MenuChoice::Save) => {
                    if !self.save()? {
                        break;
                    }
                }
                Some(MenuChoice::Clear) => {
                    self.session.clear();
                    writeln!(self.output, "Cleared.")?;
                }
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
                None => {
                    tracing::debug!("invalid menu option: {:?}", line);
                    writeln!(self.output, "Invalid option, please try again.")?;
                }
            }
        }

        // 輸入結束 (EOF) 視同離開
        tracing::info!("Input closed, leaving menu loop");
        writeln!(self.output, "\nGoodbye!")?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== Text Reverser ===")?;
        writeln!(self.output, "1. Reverse characters")?;
        writeln!(self.output, "2. Reverse words")?;
        writeln!(self.output, "3. Save to file")?;
        writeln!(self.output, "4. Clear")?;
        writeln!(self.output, "5. Exit")?;
        Ok(())
    }

    /// Returns `Ok(false)` when input ended mid-prompt.
    fn reverse(&mut self, mode: Mode) -> Result<bool> {
        let prompt = match mode {
            Mode::Characters => "Enter text to reverse characters: ",
            Mode::Words => "Enter text to reverse word order: ",
        };
        let Some(text) = self.prompt(prompt)? else {
            return Ok(false);
        };

        self.session.set_mode(mode);
        let outcome = self.session.reverse(&text).map(str::to_string);
        match outcome {
            Ok(result) => {
                writeln!(self.output, "\nReversed: {}", result)?;
            }
            Err(e) => self.report(&e)?,
        }
        Ok(true)
    }

    fn save(&mut self) -> Result<bool> {
        if self.session.result().is_none() {
            self.report(&ReverserError::NothingToSave)?;
            return Ok(true);
        }

        let Some(filename) = self.prompt("Enter filename: ")? else {
            return Ok(false);
        };
        if filename.trim().is_empty() {
            writeln!(self.output, "Save cancelled.")?;
            return Ok(true);
        }

        match self.session.save(&self.storage, &filename) {
            Ok(path) => {
                writeln!(self.output, "Text successfully saved to {}", path.display())?;
            }
            Err(e) => self.report(&e)?,
        }
        Ok(true)
    }

    fn report(&mut self, error: &ReverserError) -> Result<()> {
        match error.severity() {
            ErrorSeverity::Warning => {
                writeln!(self.output, "⚠️ {}: {}", error.title(), error.user_friendly_message())?;
            }
            ErrorSeverity::Error => {
                writeln!(self.output, "❌ {}", error.user_friendly_message())?;
                writeln!(self.output, "💡 {}", error.recovery_suggestion())?;
            }
        }
        Ok(())
    }

    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        // 非 UTF-8 位元組以替代字元取代，選單繼續運作
        let line = match String::from_utf8(buf) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!("input line was not valid UTF-8, replacing invalid bytes");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}
