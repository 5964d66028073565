use std::error::Error as StdError;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Internal,
    Usage,
    Io,
    Protocol,
    Server,
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    command: Option<String>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            command: None,
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(command) = &self.command {
            write!(f, " (command: {command})")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};
    use std::error::Error as StdError;

    #[test]
    fn display_includes_message_and_command() {
        let err = Error::new(ErrorKind::Server)
            .with_message("ERR unknown parameter")
            .with_command("CONFIG GET");
        assert_eq!(
            err.to_string(),
            "Server: ERR unknown parameter (command: CONFIG GET)"
        );
    }

    #[test]
    fn kind_and_accessors_survive_building() {
        let err = Error::new(ErrorKind::Io).with_message("connection reset");
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(err.message(), Some("connection reset"));
        assert_eq!(err.command(), None);
    }

    #[test]
    fn source_chain_is_preserved() {
        let io = std::io::Error::other("broken pipe");
        let err = Error::new(ErrorKind::Io)
            .with_message("write failed")
            .with_source(io);
        let source = err.source().expect("source");
        assert!(source.to_string().contains("broken pipe"));
    }
}
