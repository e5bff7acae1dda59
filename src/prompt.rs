use crate::ConvertError;
use std::io::{self, BufRead, Stderr, StdinLock, Write};
use std::path::PathBuf;

/// Asks the user for an input image. `None` means they cancelled.
pub trait PathPrompt {
    fn prompt_for_path(&mut self) -> Result<Option<PathBuf>, ConvertError>;
}

/// Native file picker limited to PNG files.
#[cfg(feature = "dialog")]
#[derive(Debug, Default)]
pub struct NativeDialog;

#[cfg(feature = "dialog")]
impl PathPrompt for NativeDialog {
    fn prompt_for_path(&mut self) -> Result<Option<PathBuf>, ConvertError> {
        Ok(rfd::FileDialog::new()
            .set_title("Select a PNG image")
            .add_filter("PNG files", &["png"])
            .pick_file())
    }
}

/// Reads one path per call from a line based input. An empty line or EOF
/// counts as a cancel.
#[derive(Debug)]
pub struct StdinPrompt<R, W> {
    input: R,
    output: W,
}

impl StdinPrompt<StdinLock<'static>, Stderr> {
    pub fn new() -> Self {
        Self::with_io(io::stdin().lock(), io::stderr())
    }
}

impl Default for StdinPrompt<StdinLock<'static>, Stderr> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> StdinPrompt<R, W> {
    pub fn with_io(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> PathPrompt for StdinPrompt<R, W> {
    fn prompt_for_path(&mut self) -> Result<Option<PathBuf>, ConvertError> {
        write!(self.output, "Select a PNG image: ")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        let path = line.trim();
        if path.is_empty() {
            Ok(None)
        } else {
            Ok(Some(PathBuf::from(path)))
        }
    }
}

#[cfg(feature = "dialog")]
pub fn default_prompt() -> Box<dyn PathPrompt> {
    Box::new(NativeDialog)
}

#[cfg(not(feature = "dialog"))]
pub fn default_prompt() -> Box<dyn PathPrompt> {
    Box::new(StdinPrompt::new())
}
