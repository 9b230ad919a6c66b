use std::io::{self, BufRead, IsTerminal, Write};

/// Asks for missing values on a terminal; otherwise answers with defaults.
pub struct Prompter {
    input: Option<Box<dyn BufRead>>,
    output: Box<dyn Write>,
}

impl Prompter {
    /// Prompt on stdin/stdout when stdin is a terminal.
    pub fn stdin() -> Self {
        let stdin = io::stdin();
        let input: Option<Box<dyn BufRead>> = if stdin.is_terminal() {
            Some(Box::new(stdin.lock()))
        } else {
            None
        };
        Self {
            input,
            output: Box::new(io::stdout()),
        }
    }

    /// Prompter that reads answers from `input` and echoes prompts to `output`.
    #[cfg(test)]
    pub fn with_io(input: impl BufRead + 'static, output: impl Write + 'static) -> Self {
        Self {
            input: Some(Box::new(input)),
            output: Box::new(output),
        }
    }

    /// Never asks; every question gets its default.
    #[cfg(test)]
    pub fn non_interactive() -> Self {
        Self {
            input: None,
            output: Box::new(io::sink()),
        }
    }

    /// Ask `prompt`, returning the trimmed answer or `default` if it is empty.
    pub fn ask(&mut self, prompt: &str, default: &str) -> io::Result<String> {
        let Some(input) = self.input.as_mut() else {
            return Ok(default.to_string());
        };

        write!(self.output, "{prompt} (Default: {default}): ")?;
        self.output.flush()?;

        let mut line = String::new();
        input.read_line(&mut line)?;
        let answer = line.trim();
        Ok(if answer.is_empty() {
            default.to_string()
        } else {
            answer.to_string()
        })
    }
}
