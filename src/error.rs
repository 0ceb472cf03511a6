/// Process-level error with a stable exit code.
///
/// Exit codes used by the `morsel` binary:
///
/// - `2`: input problems (unreadable file, missing columns, malformed
///   `price`/`quantity`/`date` fields)
/// - `3`: the combined dataset could not be read
#[derive(Debug, Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}
