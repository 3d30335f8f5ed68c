use std::path::PathBuf;

use treematch_lib::syntax::parse_source;
use treematch_lib::{DumpPrinter, SourceNode, parse_candidate_dump, parse_dump, read_file};

use super::run_common::{Candidate, RunError, read_dump};

pub struct TreeArgs {
    pub file: PathBuf,
    pub candidate: bool,
    pub color: bool,
}

pub fn run(args: TreeArgs) {
    match render_tree(&args) {
        Ok(rendered) => print!("{}", rendered),
        Err(e) => {
            eprintln!("{}", e.render(args.color));
            std::process::exit(1);
        }
    }
}

/// Print the tree of `args.file` in the dump format.
///
/// Source files go through their tree-sitter grammar; everything else is read
/// as a dump, with candidate rule-name normalization under `--candidate`.
pub fn render_tree(args: &TreeArgs) -> Result<String, RunError> {
    if !args.candidate
        && let Candidate::Source(path, language) = Candidate::detect(&args.file)
    {
        let text = read_file(path)?;
        let tree = parse_source(&language, &text)?;
        let root = SourceNode::root(&tree, &text);
        return Ok(DumpPrinter::new(root).colored(args.color).render());
    }

    let decode = if args.candidate {
        parse_candidate_dump
    } else {
        parse_dump
    };
    let tree = read_dump(&args.file, decode)?;
    Ok(DumpPrinter::new(tree.root()).colored(args.color).render())
}
