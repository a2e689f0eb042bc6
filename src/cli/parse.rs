use notes_core::catalog::SortBy;
use notes_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse list sort key from string
pub fn parse_sort_by(s: &str) -> std::result::Result<SortBy, String> {
    s.parse::<SortBy>().map_err(|e| e.to_string())
}
