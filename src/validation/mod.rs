pub mod project;

pub use project::{Field, FieldErrors, validate_project};

/// 常用验证规则
pub mod rules {
    use validator::ValidationError;

    /// 非空（去除首尾空白后）
    pub fn validate_required(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("required"));
        }
        Ok(())
    }

    /// 外部链接（可选）：填写时必须是 http(s) 绝对地址
    pub fn validate_external_url(value: &str) -> Result<(), ValidationError> {
        if !value.is_empty() && !is_external_url(value) {
            return Err(ValidationError::new("url"));
        }
        Ok(())
    }

    /// 资源地址（可选）：http(s) 绝对地址，或以 `/` 开头的站内路径
    pub fn validate_asset_url(value: &str) -> Result<(), ValidationError> {
        if !value.is_empty() && !value.starts_with('/') && !is_external_url(value) {
            return Err(ValidationError::new("url"));
        }
        Ok(())
    }

    /// `http://` or `https://`, then at least one character, a `.` and at
    /// least one more character on the same line. Anything after that is
    /// not inspected.
    pub fn is_external_url(value: &str) -> bool {
        let Some(rest) = value
            .strip_prefix("https://")
            .or_else(|| value.strip_prefix("http://"))
        else {
            return false;
        };

        let line = rest.split(is_line_terminator).next().unwrap_or("");
        line.char_indices()
            .skip(1)
            .any(|(i, c)| c == '.' && i + 1 < line.len())
    }

    fn is_line_terminator(c: char) -> bool {
        matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
    }
}
