use super::parse::parse_sort_by;
use clap::Args;
use notes_core::catalog::SortBy;

#[derive(Args, Debug, Clone)]
pub struct NewArgs {
    /// Category of the note; also its directory under the store root
    pub category: String,

    /// File name; spaces become hyphens and `.md` is appended
    pub filename: String,

    /// Comma separated tags
    #[arg(default_value = "")]
    pub tags: String,

    /// Note title (defaults to the file name without extension)
    #[arg(long, short)]
    pub title: Option<String>,

    /// Do not open the editor after creating the note
    #[arg(long)]
    pub no_edit: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Regular expression matched against categories
    #[arg(long, short)]
    pub category: Option<String>,

    /// Regular expression matched against tags
    #[arg(long, short)]
    pub tag: Option<String>,

    /// Sort key (created, filename, category)
    #[arg(long, short, value_parser = parse_sort_by, default_value = "created")]
    pub sort: SortBy,

    /// Print paths relative to the store root
    #[arg(long, short)]
    pub relative: bool,

    /// Print one line per note with category, title and tags
    #[arg(long, short, conflicts_with = "full")]
    pub oneline: bool,

    /// Print metadata and the beginning of each body
    #[arg(long, short)]
    pub full: bool,
}
