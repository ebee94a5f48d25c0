/// Broad category of a failure that stops processing of a survey file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The CSV could not be opened or read.
    Input,
    /// The CSV header is missing required columns.
    Schema,
    /// Interactive input could not be read (e.g. stdin closed).
    Prompt,
    /// The results file could not be written.
    Output,
}

impl ErrorKind {
    fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Input | ErrorKind::Schema | ErrorKind::Prompt => 2,
            ErrorKind::Output => 4,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
    missing_columns: Vec<String>,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            missing_columns: Vec::new(),
        }
    }

    pub fn input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Input, message)
    }

    pub fn prompt(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Prompt, message)
    }

    pub fn output(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Output, message)
    }

    /// Header contract violation listing every absent column.
    pub fn schema(missing: Vec<String>) -> Self {
        Self {
            kind: ErrorKind::Schema,
            message: format!("Missing headers: {}", missing.join(", ")),
            missing_columns: missing,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn missing_columns(&self) -> &[String] {
        &self.missing_columns
    }

    pub fn exit_code(&self) -> u8 {
        self.kind.exit_code()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("missing_columns", &self.missing_columns)
            .finish()
    }
}

impl std::error::Error for AppError {}
