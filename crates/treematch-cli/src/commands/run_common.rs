//! Shared logic for compare, batch and tree commands.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use treematch_core::{Colors, EquivalenceConfig, NameCheck};
use treematch_lib::syntax::{language_for_extension, parse_source};
use treematch_lib::{
    DecodeError, Outcome, Reconciler, SourceNode, Tree, parse_candidate_dump, parse_dump, read_file,
};

/// Extension of reference dumps next to their candidates.
pub const REFERENCE_EXT: &str = "txt";

/// Column width of the fixture label in batch output.
pub const LABEL_WIDTH: usize = 38;

/// Flags shared by every reconciling command.
pub struct ComparisonArgs {
    pub config: Option<PathBuf>,
    pub name_check: Option<NameCheck>,
    pub candidate_ext: String,
    pub depth_limit: Option<usize>,
    pub color: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Lib(#[from] treematch_lib::Error),

    #[error("{}: {error}", path.display())]
    Dump {
        path: PathBuf,
        text: String,
        error: DecodeError,
    },
}

impl RunError {
    /// Message for stderr; decode errors point into the offending dump.
    pub fn render(&self, colored: bool) -> String {
        match self {
            RunError::Dump { path, text, error } => {
                let path = path.display().to_string();
                error.printer(text).path(&path).colored(colored).render()
            }
            RunError::Lib(e) => format!("error: {e}"),
        }
    }
}

/// Load `--config` (or the built-in Kotlin profile) and apply `--name-check`.
pub fn load_config(
    path: Option<&Path>,
    name_check: Option<NameCheck>,
) -> treematch_lib::Result<EquivalenceConfig> {
    let config = match path {
        Some(path) => treematch_lib::load_config(path)?,
        None => EquivalenceConfig::kotlin(),
    };
    Ok(match name_check {
        Some(policy) => config.with_name_check(policy),
        None => config,
    })
}

pub fn require_config(path: Option<&Path>, name_check: Option<NameCheck>) -> EquivalenceConfig {
    load_config(path, name_check).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    })
}

pub fn reconciler(config: &EquivalenceConfig, depth_limit: Option<usize>) -> Reconciler<'_> {
    let reconciler = Reconciler::new(config);
    match depth_limit {
        Some(limit) => reconciler.with_depth_limit(limit),
        None => reconciler,
    }
}

/// `psi/Enums` + `kt` gives `psi/Enums.kt`, keeping any dots already in the name.
pub fn with_extension(name: &Path, ext: &str) -> PathBuf {
    let mut path = OsString::from(name.as_os_str());
    path.push(".");
    path.push(ext);
    PathBuf::from(path)
}

/// `Test passed` in green, or a plain `Test failed`.
pub fn verdict(matched: bool, colors: Colors) -> String {
    if matched {
        format!("{}Test passed{}", colors.green, colors.reset)
    } else {
        "Test failed".to_owned()
    }
}

/// Read a dump file, keeping the text around for error rendering.
pub fn read_dump(
    path: &Path,
    decode: fn(&str) -> Result<Tree, DecodeError>,
) -> Result<Tree, RunError> {
    let text = read_file(path)?;
    match decode(&text) {
        Ok(tree) => Ok(tree),
        Err(error) => Err(RunError::Dump {
            path: path.to_path_buf(),
            text,
            error,
        }),
    }
}

/// Where the candidate tree comes from.
pub enum Candidate<'p> {
    Source(&'p Path, tree_sitter::Language),
    Dump(&'p Path),
}

impl<'p> Candidate<'p> {
    /// Source files with a compiled-in grammar are parsed; anything else is a dump.
    pub fn detect(path: &'p Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(language_for_extension)
            .map_or(Candidate::Dump(path), |language| {
                Candidate::Source(path, language)
            })
    }

    pub fn path(&self) -> &'p Path {
        match self {
            Candidate::Source(path, _) | Candidate::Dump(path) => *path,
        }
    }
}

/// A loaded candidate tree.
pub enum CandidateTree {
    Source { tree: tree_sitter::Tree, text: String },
    Dump(Tree),
}

impl CandidateTree {
    pub fn load(candidate: Candidate<'_>) -> Result<Self, RunError> {
        match candidate {
            Candidate::Source(path, language) => {
                let text = read_file(path)?;
                let tree = parse_source(&language, &text)?;
                Ok(CandidateTree::Source { tree, text })
            }
            Candidate::Dump(path) => read_dump(path, parse_candidate_dump).map(CandidateTree::Dump),
        }
    }

    pub fn reconcile(&self, reconciler: &Reconciler<'_>, reference: &Tree) -> Outcome {
        match self {
            CandidateTree::Source { tree, text } => {
                reconciler.reconcile(&SourceNode::root(tree, text), &reference.root())
            }
            CandidateTree::Dump(tree) => reconciler.reconcile(&tree.root(), &reference.root()),
        }
    }
}

/// A candidate and its reference, ready to be reconciled under any policy.
pub struct Fixture {
    pub candidate: CandidateTree,
    pub reference: Tree,
}

impl Fixture {
    pub fn load(candidate: Candidate<'_>, reference: &Path) -> Result<Self, RunError> {
        log::info!(
            "comparing {} against {}",
            candidate.path().display(),
            reference.display()
        );
        let reference = read_dump(reference, parse_dump)?;
        let candidate = CandidateTree::load(candidate)?;
        Ok(Self {
            candidate,
            reference,
        })
    }

    pub fn check(&self, reconciler: &Reconciler<'_>) -> Outcome {
        self.candidate.reconcile(reconciler, &self.reference)
    }
}
