//! Merge policy for appending an export block to source text

/// Appends `export_block` to `source_code` on a new line
///
/// A `;` is added first unless the source already ends in one (trailing
/// whitespace ignored), so the exports never run into an unterminated last
/// statement.
///
/// # Examples
///
/// ```
/// use globex::core::batch::append_export_block;
///
/// assert_eq!(
///     append_export_block("function Foo() {}", "export default Foo;"),
///     "function Foo() {};\nexport default Foo;"
/// );
/// ```
pub fn append_export_block(source_code: &str, export_block: &str) -> String {
    let mut merged = String::with_capacity(source_code.len() + export_block.len() + 2);
    merged.push_str(source_code);

    if !ends_with_semicolon(source_code) {
        merged.push(';');
    }

    merged.push('\n');
    merged.push_str(export_block);
    merged
}

fn ends_with_semicolon(source_code: &str) -> bool {
    source_code.trim_end().ends_with(';')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adds_missing_semicolon() {
        assert_eq!(
            append_export_block("function Foo() {}", "export Foo;"),
            "function Foo() {};\nexport Foo;"
        );
    }

    #[test]
    fn test_keeps_existing_semicolon() {
        assert_eq!(
            append_export_block("var bar = {};", "export bar;"),
            "var bar = {};\nexport bar;"
        );
    }

    #[test]
    fn test_semicolon_followed_by_whitespace_left_untouched() {
        assert_eq!(
            append_export_block("var bar = {};\n\t ", "export bar;"),
            "var bar = {};\n\t \nexport bar;"
        );
    }

    #[test]
    fn test_terminated_and_unterminated_sources_converge() {
        assert_eq!(
            append_export_block("var i = 0;", "export i;"),
            append_export_block("var i = 0", "export i;")
        );
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(append_export_block("", "export i;"), ";\nexport i;");
    }
}
