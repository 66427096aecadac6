use std::path::{Path, PathBuf};

/// Files the generator writes next to the grammar. The generator names them
/// after the grammar with its extension replaced, so they are derived here
/// rather than configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntermediatePaths {
    pub source: PathBuf,
    pub header: PathBuf,
    pub trace: PathBuf,
}

impl IntermediatePaths {
    pub const SOURCE_EXTENSION: &'static str = "c";
    pub const HEADER_EXTENSION: &'static str = "h";
    pub const TRACE_EXTENSION: &'static str = "out";

    pub fn from_grammar(grammar: &Path) -> Self {
        IntermediatePaths {
            source: grammar.with_extension(Self::SOURCE_EXTENSION),
            header: grammar.with_extension(Self::HEADER_EXTENSION),
            trace: grammar.with_extension(Self::TRACE_EXTENSION),
        }
    }
}

#[cfg(test)]
pub mod test {
    use std::path::{Path, PathBuf};

    use super::IntermediatePaths;

    #[test]
    pub fn strips_extension() {
        let paths = IntermediatePaths::from_grammar(Path::new("grammar.y"));

        assert_eq!(paths.source, PathBuf::from("grammar.c"));
        assert_eq!(paths.header, PathBuf::from("grammar.h"));
        assert_eq!(paths.trace, PathBuf::from("grammar.out"));
    }

    #[test]
    pub fn keeps_directories() {
        let paths = IntermediatePaths::from_grammar(Path::new("src/parser/kenaf.lemon"));

        assert_eq!(paths.source, PathBuf::from("src/parser/kenaf.c"));
        assert_eq!(paths.trace, PathBuf::from("src/parser/kenaf.out"));
    }

    #[test]
    pub fn only_last_extension_is_stripped() {
        let paths = IntermediatePaths::from_grammar(Path::new("build.dir/parser.gen.y"));

        assert_eq!(paths.source, PathBuf::from("build.dir/parser.gen.c"));
        assert_eq!(paths.header, PathBuf::from("build.dir/parser.gen.h"));
    }

    #[test]
    pub fn grammar_without_extension() {
        let paths = IntermediatePaths::from_grammar(Path::new("grammar"));

        assert_eq!(paths.source, PathBuf::from("grammar.c"));
        assert_eq!(paths.trace, PathBuf::from("grammar.out"));
    }
}
