use treematch_core::utils::rule_name_from_class;

use super::{DecodeError, ERROR_ELEMENT, INDENT, WHITESPACE};
use crate::tree::{Token, Tree, TreeBuilder};

/// Read a reference dump; rule names are kept verbatim.
pub fn parse_dump(source: &str) -> Result<Tree, DecodeError> {
    DumpReader::new(source).read()
}

/// Read a dump written by a generated parser, where rule names are
/// lowercased class names (`kotlinFile`) or still carry the `Context` suffix.
pub fn parse_candidate_dump(source: &str) -> Result<Tree, DecodeError> {
    DumpReader::new(source)
        .rule_names(rule_name_from_class)
        .read()
}

/// Configurable dump reader.
pub struct DumpReader<'s> {
    source: &'s str,
    rule_names: fn(&str) -> String,
}

struct Line<'s> {
    number: usize,
    start: usize,
    text: &'s str,
}

impl Line<'_> {
    fn span(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.text.len()
    }
}

impl<'s> DumpReader<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            rule_names: str::to_owned,
        }
    }

    /// Normalize every rule name read from the dump (sentinels excepted).
    pub fn rule_names(mut self, normalize: fn(&str) -> String) -> Self {
        self.rule_names = normalize;
        self
    }

    pub fn read(&self) -> Result<Tree, DecodeError> {
        let mut lines = lines(self.source).filter(|l| !l.text.trim().is_empty());
        let root = lines.next().ok_or(DecodeError::Empty)?;

        let mut builder = TreeBuilder::new((self.rule_names)(root.text.trim()));
        let mut cursor = builder.root();
        let mut prev_depth = 0;

        for line in lines {
            let depth = indent_depth(&line)?;
            if depth == 0 {
                return Err(DecodeError::OrphanLine {
                    line: line.number,
                    span: line.span(),
                });
            }
            if depth > prev_depth + 1 {
                return Err(DecodeError::IndentJump {
                    line: line.number,
                    span: line.span(),
                    from: prev_depth,
                    to: depth,
                });
            }

            if depth <= prev_depth {
                for _ in 0..=prev_depth - depth {
                    cursor = builder.ensure_parent(cursor);
                }
            }

            let entry = &line.text[depth * INDENT.len()..];
            let (rule, token) = parse_entry(entry);
            if builder.is_token(cursor) {
                return Err(DecodeError::ChildOfToken {
                    line: line.number,
                    span: line.span(),
                    rule: rule.to_owned(),
                });
            }

            let rule = match rule {
                WHITESPACE | ERROR_ELEMENT => rule.to_owned(),
                _ => (self.rule_names)(rule),
            };
            cursor = builder.push(cursor, rule, token);
            prev_depth = depth;
        }

        Ok(builder.finish())
    }
}

fn lines(source: &str) -> impl Iterator<Item = Line<'_>> {
    let mut offset = 0;
    source.split('\n').enumerate().map(move |(i, raw)| {
        let start = offset;
        offset += raw.len() + 1;
        Line {
            number: i + 1,
            start,
            text: raw.strip_suffix('\r').unwrap_or(raw),
        }
    })
}

fn indent_depth(line: &Line<'_>) -> Result<usize, DecodeError> {
    let spaces = line.text.len() - line.text.trim_start_matches(' ').len();
    if spaces % INDENT.len() != 0 {
        return Err(DecodeError::MisalignedIndent {
            line: line.number,
            span: line.span(),
        });
    }
    Ok(spaces / INDENT.len())
}

/// Split `Rule(KIND)('text')` into a rule name and an optional token.
fn parse_entry(entry: &str) -> (&str, Option<Token>) {
    if entry.starts_with(WHITESPACE) {
        let payload = match (entry.find('('), entry.rfind(')')) {
            (Some(open), Some(close)) if open < close => &entry[open + 1..close],
            _ => "",
        };
        return (WHITESPACE, Some(Token::new(WHITESPACE, payload)));
    }
    if entry.starts_with(ERROR_ELEMENT) {
        return (ERROR_ELEMENT, Some(Token::new(ERROR_ELEMENT, "")));
    }

    let Some((rule, rest)) = entry.split_once('(') else {
        return (entry.trim_end(), None);
    };
    let (kind, payload) = rest.split_once(')').unwrap_or((rest, ""));
    let text = match kind {
        "LPAR" => "(",
        "RPAR" => ")",
        _ => token_text(payload),
    };
    (rule, Some(Token::new(kind, text)))
}

/// Quoted payload without its quotes. Escapes stay as written.
fn token_text(payload: &str) -> &str {
    let inner = payload.strip_prefix('(').unwrap_or(payload);
    let inner = inner.strip_suffix(')').unwrap_or(inner);
    inner
        .strip_prefix('\'')
        .and_then(|t| t.strip_suffix('\''))
        .unwrap_or(inner)
}
