//! Eager construction of class name tokens.

use crate::error::BuildError;
use crate::token::{DIVIDER, NAMED_SENTINEL};

/// Accumulates modifier and group segments, then produces a token.
///
/// Segments are joined with `:` to form the token prefix. The terminal
/// methods produce the token string immediately.
///
/// # Example
///
/// ```rust
/// use skribble_cx::ClassPath;
///
/// let md_p = ClassPath::new().at("md").at("p");
/// assert_eq!(md_p.named("$2_5").unwrap(), "md:p::$2_5");
/// assert_eq!(md_p.arg("100px"), "md:p::[100px]");
///
/// let md = ClassPath::new().at("md");
/// assert_eq!(
///     md.args(["padding-left", "100px"]).unwrap(),
///     "md::[padding-left:100px]"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassPath {
    segments: Vec<String>,
}

impl ClassPath {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a modifier or group segment.
    pub fn at(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Produces a named-value token such as `md:p::$2_5`.
    ///
    /// The `$` sentinel is added when missing. With an empty path the bare
    /// value is returned (e.g. `$antialiased`).
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyNamedValue`] if `value` has no identifier.
    pub fn named(&self, value: &str) -> Result<String, BuildError> {
        let identifier = value.strip_prefix(NAMED_SENTINEL).unwrap_or(value);
        if identifier.is_empty() {
            return Err(BuildError::EmptyNamedValue { path: self.dotted() });
        }

        if self.segments.is_empty() {
            Ok(format!("{NAMED_SENTINEL}{identifier}"))
        } else {
            Ok(format!("{}{DIVIDER}{NAMED_SENTINEL}{identifier}", self.prefix()))
        }
    }

    /// Produces a single raw argument token such as `p::[100px]`.
    pub fn arg(&self, value: &str) -> String {
        self.bracketed(&[sanitize(value)])
    }

    /// Produces a bracketed argument token, joining the arguments with `:`.
    ///
    /// Two arguments yield a `[key:field]` token. With an empty path the
    /// bracketed value is returned bare (`[padding:10px]`).
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingArguments`] if `args` is empty.
    pub fn args<I, S>(&self, args: I) -> Result<String, BuildError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fields: Vec<String> = args.into_iter().map(|arg| sanitize(arg.as_ref())).collect();
        if fields.is_empty() {
            return Err(BuildError::MissingArguments { path: self.dotted() });
        }
        Ok(self.bracketed(&fields))
    }

    fn bracketed(&self, fields: &[String]) -> String {
        let value = format!("[{}]", fields.join(":"));
        if self.segments.is_empty() {
            value
        } else {
            format!("{}{DIVIDER}{value}", self.prefix())
        }
    }

    fn prefix(&self) -> String {
        self.segments.join(":")
    }

    fn dotted(&self) -> String {
        self.segments.join(".")
    }
}

impl<S: Into<String>> FromIterator<S> for ClassPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Trims an argument and replaces inner whitespace runs with `__`, so a
/// token never contains a space.
fn sanitize(arg: &str) -> String {
    arg.split_whitespace().collect::<Vec<_>>().join("__")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{ClassToken, ValueKind};

    #[test]
    fn test_named_tokens() {
        assert_eq!(
            ClassPath::new().at("md").at("p").named("$2_5").unwrap(),
            "md:p::$2_5"
        );
        assert_eq!(
            ClassPath::new().at("sm").at("pbl").named("$10").unwrap(),
            "sm:pbl::$10"
        );
    }

    #[test]
    fn test_named_adds_sentinel() {
        assert_eq!(ClassPath::new().at("p").named("0").unwrap(), "p::$0");
    }

    #[test]
    fn test_shorthands_without_path() {
        assert_eq!(ClassPath::new().named("$antialiased").unwrap(), "$antialiased");
        assert_eq!(ClassPath::new().named("group").unwrap(), "$group");
    }

    #[test]
    fn test_empty_named_value_is_error() {
        let result = ClassPath::new().at("md").named("$");
        assert_eq!(
            result,
            Err(BuildError::EmptyNamedValue {
                path: "md".to_string()
            })
        );
    }

    #[test]
    fn test_single_argument() {
        assert_eq!(ClassPath::new().at("md").at("p").arg("100px"), "md:p::[100px]");
        assert_eq!(ClassPath::new().at("p").arg("  4px "), "p::[4px]");
    }

    #[test]
    fn test_key_value_arguments() {
        assert_eq!(
            ClassPath::new().args(["padding-right", "80px"]).unwrap(),
            "[padding-right:80px]"
        );
        assert_eq!(
            ClassPath::new().at("md").args(["padding-left", "100px"]).unwrap(),
            "md::[padding-left:100px]"
        );
    }

    #[test]
    fn test_empty_path_arguments_are_bare() {
        let path = ClassPath::new();
        let pair = path.args(["padding", "10px"]).unwrap();

        assert_eq!(pair, "[padding:10px]");
        assert_eq!(path.arg("4px"), "[4px]");
        assert_eq!(ClassToken::parse(&pair).kind(), ValueKind::RawKeyValueArg);
        assert_eq!(ClassToken::parse(&pair).argument_key(), Some("padding"));
    }

    #[test]
    fn test_spaces_in_arguments_are_replaced() {
        assert_eq!(
            ClassPath::new().at("after").args(["content", "\"a space\""]).unwrap(),
            "after::[content:\"a__space\"]"
        );
    }

    #[test]
    fn test_missing_arguments_is_error() {
        let result = ClassPath::new().at("md").at("p").args(Vec::<&str>::new());
        assert_eq!(
            result,
            Err(BuildError::MissingArguments {
                path: "md.p".to_string()
            })
        );
    }

    #[test]
    fn test_from_iterator() {
        let path: ClassPath = ["dark", "md", "px"].into_iter().collect();
        assert_eq!(path.segments(), &["dark", "md", "px"]);
        assert_eq!(path.named("$4").unwrap(), "dark:md:px::$4");
    }

    #[test]
    fn test_built_tokens_scan_as_expected() {
        let path = ClassPath::new().at("md").at("p");

        let named = path.named("$1").unwrap();
        let single = path.arg("1px");
        let pair = path.args(["padding", "1px"]).unwrap();

        assert_eq!(ClassToken::parse(&named).kind(), ValueKind::Named);
        assert_eq!(ClassToken::parse(&single).kind(), ValueKind::RawSingleArg);
        assert_eq!(ClassToken::parse(&pair).kind(), ValueKind::RawKeyValueArg);
    }
}
