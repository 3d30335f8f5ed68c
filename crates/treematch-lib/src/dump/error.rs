use std::ops::Range;

/// Malformed dump. Line numbers are 1-based, spans are byte ranges of the line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("dump is empty")]
    Empty,

    #[error("line {line}: indentation jumps from depth {from} to {to}")]
    IndentJump {
        line: usize,
        span: Range<usize>,
        from: usize,
        to: usize,
    },

    #[error("line {line}: second top-level node after the root")]
    OrphanLine { line: usize, span: Range<usize> },

    #[error("line {line}: indentation is not a multiple of two spaces")]
    MisalignedIndent { line: usize, span: Range<usize> },

    #[error("line {line}: `{rule}` is nested under a token")]
    ChildOfToken {
        line: usize,
        span: Range<usize>,
        rule: String,
    },
}

impl DecodeError {
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Empty => None,
            Self::IndentJump { line, .. }
            | Self::OrphanLine { line, .. }
            | Self::MisalignedIndent { line, .. }
            | Self::ChildOfToken { line, .. } => Some(*line),
        }
    }

    pub fn span(&self) -> Option<Range<usize>> {
        match self {
            Self::Empty => None,
            Self::IndentJump { span, .. }
            | Self::OrphanLine { span, .. }
            | Self::MisalignedIndent { span, .. }
            | Self::ChildOfToken { span, .. } => Some(span.clone()),
        }
    }

    /// Short annotation placed under the offending line.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Empty => "no root line",
            Self::IndentJump { .. } => "skips an indentation level",
            Self::OrphanLine { .. } => "expected indentation under the root",
            Self::MisalignedIndent { .. } => "odd number of leading spaces",
            Self::ChildOfToken { .. } => "tokens cannot have children",
        }
    }
}
