use std::error::Error;
use std::fmt::{Display, Formatter};

pub type WhamResult<T> = Result<T, WhamError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WhamErrorCategory {
    InputValidationError,
    IoSystemError,
    ComputationError,
    InternalError,
}

impl WhamErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::InputValidationError => 2,
            Self::IoSystemError => 3,
            Self::ComputationError => 4,
            Self::InternalError => 5,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InputValidationError => "InputValidationError",
            Self::IoSystemError => "IoSystemError",
            Self::ComputationError => "ComputationError",
            Self::InternalError => "InternalError",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhamError {
    category: WhamErrorCategory,
    placeholder: &'static str,
    message: String,
}

impl WhamError {
    pub fn new(
        category: WhamErrorCategory,
        placeholder: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            placeholder,
            message: message.into(),
        }
    }

    pub fn input_validation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(
            WhamErrorCategory::InputValidationError,
            placeholder,
            message,
        )
    }

    pub fn io_system(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(WhamErrorCategory::IoSystemError, placeholder, message)
    }

    pub fn computation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(WhamErrorCategory::ComputationError, placeholder, message)
    }

    pub fn internal(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(WhamErrorCategory::InternalError, placeholder, message)
    }

    pub const fn category(&self) -> WhamErrorCategory {
        self.category
    }

    pub const fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        format!("ERROR: [{}] {}", self.placeholder, self.message)
    }

    pub fn fatal_exit_line(&self) -> String {
        format!("FATAL EXIT CODE: {}", self.exit_code())
    }
}

impl Display for WhamError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.category.as_str(),
            self.placeholder,
            self.message
        )
    }
}

impl Error for WhamError {}

#[cfg(test)]
mod tests {
    use super::{WhamError, WhamErrorCategory};

    #[test]
    fn exit_mapping_is_stable() {
        let cases = [
            (
                WhamErrorCategory::InputValidationError,
                2,
                "InputValidationError",
            ),
            (WhamErrorCategory::IoSystemError, 3, "IoSystemError"),
            (WhamErrorCategory::ComputationError, 4, "ComputationError"),
            (WhamErrorCategory::InternalError, 5, "InternalError"),
        ];

        for (category, exit_code, name) in cases {
            assert_eq!(category.exit_code(), exit_code);
            assert_eq!(category.as_str(), name);
        }
    }

    #[test]
    fn fatal_error_renders_diagnostic_lines() {
        let error = WhamError::io_system(
            "IO.EXTRACT_INPUT_READ",
            "failed to open log 'run1.log': No such file or directory",
        );

        assert_eq!(error.exit_code(), 3);
        assert_eq!(
            error.diagnostic_line(),
            "ERROR: [IO.EXTRACT_INPUT_READ] failed to open log 'run1.log': No such file or directory"
        );
        assert_eq!(error.fatal_exit_line(), "FATAL EXIT CODE: 3");
        assert_eq!(
            error.to_string(),
            "IoSystemError [IO.EXTRACT_INPUT_READ] failed to open log 'run1.log': No such file or directory"
        );
    }
}
