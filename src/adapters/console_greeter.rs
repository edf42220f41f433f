//! Console greeter adapter.
//!
//! Implements [`Greeter`] over any line reader and writer: script lines are
//! written out as `[greeter] ...`, answers are read back one line each.
//! On the host this is stdin/stdout; a speech front end drives the same
//! adapter through a pipe.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use log::debug;

use crate::app::ports::Greeter;
use crate::error::{Result, VoiceError};
use crate::script;

/// Greeter that talks over stdin/stdout.
pub type StdioGreeter = ConsoleGreeter<BufReader<Stdin>, Stdout>;

pub struct ConsoleGreeter<R, W> {
    input: R,
    output: W,
}

impl StdioGreeter {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleGreeter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    fn say(&mut self, line: &str) -> Result<()> {
        debug!("greeter says: {}", line);
        writeln!(self.output, "[greeter] {}", line).map_err(voice_io)?;
        self.output.flush().map_err(voice_io)?;
        Ok(())
    }

    /// Say `prompt`, then read one line.  A blank line is an empty answer.
    fn ask(&mut self, prompt: &str) -> Result<String> {
        self.say(prompt)?;
        let mut line = String::new();
        let n = self.input.read_line(&mut line).map_err(voice_io)?;
        if n == 0 {
            return Err(VoiceError::EndOfInput.into());
        }
        let answer = line.trim();
        debug!("greeter heard: {:?}", answer);
        Ok(answer.to_owned())
    }
}

fn voice_io(e: io::Error) -> crate::error::Error {
    VoiceError::Io(e.kind()).into()
}

impl<R: BufRead, W: Write> Greeter for ConsoleGreeter<R, W> {
    fn welcome(&mut self) -> Result<()> {
        self.say(script::WELCOME)
    }

    fn ask_for_visitor_name(&mut self) -> Result<String> {
        self.ask(script::ASK_VISITOR_NAME)
    }

    fn ask_for_occupier_name(&mut self) -> Result<String> {
        self.ask(script::ASK_OCCUPIER_NAME)
    }

    fn update_visitor_about_asking_for_occupier(
        &mut self,
        visitor_name: &str,
        occupier_name: &str,
    ) -> Result<()> {
        self.say(&script::asking_for_occupier(visitor_name, occupier_name))
    }

    fn request_occupier_come_to_the_door(&mut self) -> Result<()> {
        self.say(script::REQUEST_OCCUPIER)
    }

    fn take_message_for_occupier(&mut self) -> Result<String> {
        self.ask(script::TAKE_MESSAGE)
    }

    fn take_photo(&mut self) -> Result<()> {
        self.say(script::TAKE_PHOTO)
    }

    fn thank_visitor(&mut self) -> Result<()> {
        self.say(script::THANK_VISITOR)
    }

    fn ask_deliverer_to_wait(&mut self) -> Result<()> {
        self.say(script::ASK_DELIVERER_TO_WAIT)
    }

    fn request_someone_come_to_the_door(&mut self) -> Result<()> {
        self.say(script::REQUEST_SOMEONE)
    }

    fn ask_deliverer_to_leave_parcel(&mut self) -> Result<()> {
        self.say(script::LEAVE_PARCEL)
    }
}
