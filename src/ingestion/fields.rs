//! Delimiter-aware field splitting.

/// Splits one logical line into field strings on a single delimiter.
///
/// Zero-length segments — between adjacent delimiters, or at the very start
/// or end of the line — are dropped, not kept as empty strings: `"a,,b"`
/// yields `["a", "b"]`. Callers relying on field counts (the loader does)
/// must account for this; it is a real contract of the engine, not an
/// implementation detail.
///
/// A line containing no delimiter is returned whole as the sole field. Only a
/// fully empty line yields zero fields.
///
/// With `trim` enabled, leading/trailing whitespace is stripped from each
/// kept segment. Dropping happens on the raw segments first, so a
/// whitespace-only field survives (as `""`) and field counts never depend on
/// the trim flag.
pub fn split_fields(line: &str, delimiter: char, trim: bool) -> Vec<String> {
    line.split(delimiter)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            if trim {
                segment.trim().to_owned()
            } else {
                segment.to_owned()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::split_fields;

    #[test]
    fn splits_on_delimiter() {
        assert_eq!(split_fields("a,b,c", ',', false), vec!["a", "b", "c"]);
    }

    #[test]
    fn drops_empty_fields_between_delimiters() {
        assert_eq!(split_fields("a,,b", ',', false), vec!["a", "b"]);
    }

    #[test]
    fn drops_empty_fields_at_line_edges() {
        assert_eq!(split_fields(",a,b,", ',', false), vec!["a", "b"]);
        assert_eq!(split_fields(",,,", ',', false), Vec::<String>::new());
    }

    #[test]
    fn line_without_delimiter_is_the_sole_field() {
        assert_eq!(split_fields("a", ',', false), vec!["a"]);
    }

    #[test]
    fn empty_line_yields_no_fields() {
        assert_eq!(split_fields("", ',', false), Vec::<String>::new());
    }

    #[test]
    fn alternate_delimiters() {
        assert_eq!(split_fields("a;b;c", ';', false), vec!["a", "b", "c"]);
        assert_eq!(split_fields("a\tb", '\t', false), vec!["a", "b"]);
    }

    #[test]
    fn trim_strips_surrounding_whitespace() {
        assert_eq!(
            split_fields(" a ,\tb\t, c", ',', true),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn trim_keeps_whitespace_only_fields() {
        // " " is not a zero-length raw segment, so it is kept and then
        // trimmed down to an empty string; the field count stays 3 either
        // way.
        assert_eq!(split_fields("a, ,b", ',', true), vec!["a", "", "b"]);
        assert_eq!(split_fields("a, ,b", ',', false), vec!["a", " ", "b"]);
    }

    #[test]
    fn untrimmed_fields_keep_whitespace() {
        assert_eq!(split_fields(" a ,b", ',', false), vec![" a ", "b"]);
    }
}
