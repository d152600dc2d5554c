use std::io::{self, BufRead, Write};

use crate::error::PromptError;

pub fn read_path() -> Result<String, PromptError> {
    print!("Enter a path: ");
    if io::stdout().flush().is_err() {
        return Err(PromptError::for_reason("unable to write the prompt"));
    }
    read_path_from(&mut io::stdin().lock())
}

// only the line terminator comes off; everything else in the line is
// part of the path and passes through untouched
pub fn read_path_from(reader: &mut dyn BufRead) -> Result<String, PromptError> {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Err(PromptError::for_reason("end of input before a path was entered")),
        Ok(_) => Ok(String::from(line.trim_end_matches(['\r', '\n']))),
        Err(err) => Err(PromptError::for_reason(&format!("{}", err))),
    }
}
