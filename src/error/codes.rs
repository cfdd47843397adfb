/// Error code registry for deptsat
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 2000-2999: Input lookup errors
/// - 3000-3999: Schema errors
/// - 4000-4999: Output write errors
/// - 9000-9999: Other errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_INVALID_TOML: u16 = 1002;
    pub const CONFIG_INVALID_VALUE: u16 = 1003;
    pub const CONFIG_INVALID_ENV: u16 = 1004;

    // Input lookup errors (2000-2999)
    pub const INPUT_NOT_FOUND: u16 = 2000;
    pub const INPUT_UNREADABLE: u16 = 2001;

    // Schema errors (3000-3999)
    pub const SCHEMA_GENERIC: u16 = 3000;
    pub const SCHEMA_COLUMN_COUNT: u16 = 3001;
    pub const SCHEMA_FIELD_COUNT: u16 = 3002;
    pub const SCHEMA_TYPE_MISMATCH: u16 = 3003;
    pub const SCHEMA_MALFORMED_CSV: u16 = 3004;

    // Output write errors (4000-4999)
    pub const WRITE_GENERIC: u16 = 4000;
    pub const WRITE_PERMISSION_DENIED: u16 = 4001;
    pub const WRITE_DIRECTORY: u16 = 4002;
    pub const WRITE_SERIALIZATION: u16 = 4003;
    pub const WRITE_PERSIST: u16 = 4004;

    // Other errors (9000-9999)
    pub const OTHER_GENERIC: u16 = 9000;
}

/// Get a human-readable description of an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        ErrorCode::CONFIG_GENERIC => "Configuration error",
        ErrorCode::CONFIG_NOT_FOUND => "Configuration file not found",
        ErrorCode::CONFIG_INVALID_TOML => "Configuration file is not valid TOML",
        ErrorCode::CONFIG_INVALID_VALUE => "Configuration value out of range",
        ErrorCode::CONFIG_INVALID_ENV => "Environment variable could not be parsed",

        ErrorCode::INPUT_NOT_FOUND => "Input file not found",
        ErrorCode::INPUT_UNREADABLE => "Input file could not be read",

        ErrorCode::SCHEMA_GENERIC => "Input does not match the employee schema",
        ErrorCode::SCHEMA_COLUMN_COUNT => "Header has the wrong number of columns",
        ErrorCode::SCHEMA_FIELD_COUNT => "Row has the wrong number of fields",
        ErrorCode::SCHEMA_TYPE_MISMATCH => "Value does not match the column type",
        ErrorCode::SCHEMA_MALFORMED_CSV => "Input is not well-formed CSV",

        ErrorCode::WRITE_GENERIC => "Output could not be written",
        ErrorCode::WRITE_PERMISSION_DENIED => "Permission denied writing output",
        ErrorCode::WRITE_DIRECTORY => "Output directory could not be created",
        ErrorCode::WRITE_SERIALIZATION => "Result row could not be serialized",
        ErrorCode::WRITE_PERSIST => "Output file could not be moved into place",

        ErrorCode::OTHER_GENERIC => "Unexpected error",
        _ => "Unknown error code",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_fall_in_their_category() {
        assert!((1000..2000).contains(&ErrorCode::CONFIG_INVALID_ENV));
        assert!((2000..3000).contains(&ErrorCode::INPUT_NOT_FOUND));
        assert!((3000..4000).contains(&ErrorCode::SCHEMA_TYPE_MISMATCH));
        assert!((4000..5000).contains(&ErrorCode::WRITE_PERSIST));
    }

    #[test]
    fn test_describe_unknown_code() {
        assert_eq!(describe_error_code(1234), "Unknown error code");
        assert_eq!(
            describe_error_code(ErrorCode::SCHEMA_FIELD_COUNT),
            "Row has the wrong number of fields"
        );
    }
}
