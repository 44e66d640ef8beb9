//! Line-oriented operator prompts.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use super::WorkflowError;
use crate::validation::ValidationError;

/// Reads answers from `input` and writes prompts and messages to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R, W> Prompter<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `message` followed by a newline.
    pub async fn say(&mut self, message: &str) -> Result<(), WorkflowError> {
        self.output.write_all(message.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await?;
        Ok(())
    }

    /// Writes `prompt` and reads one line, without its line terminator.
    ///
    /// Bytes that are not UTF-8 are replaced with U+FFFD and left for the
    /// validators to reject.
    ///
    /// # Errors
    /// [`WorkflowError::InputClosed`] once the input is exhausted.
    pub async fn ask(&mut self, prompt: &str) -> Result<String, WorkflowError> {
        self.output.write_all(prompt.as_bytes()).await?;
        self.output.flush().await?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw).await? == 0 {
            return Err(WorkflowError::InputClosed);
        }
        if raw.ends_with(b"\n") {
            raw.pop();
            if raw.ends_with(b"\r") {
                raw.pop();
            }
        }
        Ok(String::from_utf8_lossy(&raw).into_owned())
    }

    /// Asks until `validate` accepts the answer, at most `attempts` times.
    ///
    /// Every rejection but the last is reported to the operator; the last one
    /// is returned to the caller.
    pub async fn ask_valid<T>(
        &mut self,
        prompt: &str,
        attempts: usize,
        validate: impl Fn(&str) -> Result<T, ValidationError>,
    ) -> Result<T, WorkflowError> {
        let mut attempt = 1;
        loop {
            let answer = self.ask(prompt).await?;
            match validate(&answer) {
                Ok(value) => return Ok(value),
                Err(e) if attempt >= attempts => return Err(e.into()),
                Err(e) => {
                    self.say(&e.to_string()).await?;
                    attempt += 1;
                }
            }
        }
    }

    /// Asks until `validate` accepts the answer.
    pub async fn ask_until_valid<T>(
        &mut self,
        prompt: &str,
        validate: impl Fn(&str) -> Result<T, ValidationError>,
    ) -> Result<T, WorkflowError> {
        self.ask_valid(prompt, usize::MAX, validate).await
    }
}
