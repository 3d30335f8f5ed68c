//! Fixture helpers shared by the command tests.

use std::path::Path;

use indoc::indoc;

use super::run_common::ComparisonArgs;

pub const KOTLIN_REFERENCE: &str = indoc! {"
    KtFile: Sample.kt
      PACKAGE_DIRECTIVE
        <empty list>
      IMPORT_LIST
        <empty list>
      FUN
        PsiElement(fun)('fun')
        PsiWhiteSpace(' ')
        PsiElement(IDENTIFIER)('f')
        VALUE_PARAMETER_LIST
          PsiElement(LPAR)('(')
          PsiElement(RPAR)(')')
        PsiWhiteSpace(' ')
        PsiElement(EQ)('=')
        PsiWhiteSpace(' ')
        INTEGER_CONSTANT
          PsiElement(INTEGER_LITERAL)('1')
"};

pub const KOTLIN_CANDIDATE: &str = indoc! {"
    KotlinFileContext
      PackageHeaderContext
      ImportListContext
      TopLevelObjectContext
        DeclarationContext
          FunctionDeclarationContext
            PsiElement(FUN)('fun')
            SimpleIdentifierContext
              PsiElement(Identifier)('f')
            FunctionValueParametersContext
              PsiElement(LPAREN)('(')
              PsiElement(RPAREN)(')')
            FunctionBodyContext
              PsiElement(ASSIGNMENT)('=')
              ExpressionContext
                DisjunctionContext
                  ConjunctionContext
                    PrimaryExpressionContext
                      LiteralConstantContext
                        PsiElement(IntegerLiteral)('1')
      PsiElement(EOF)('<EOF>')
"};

/// Same shape as [`KOTLIN_REFERENCE`] with the function node renamed.
pub fn renamed_reference() -> String {
    KOTLIN_REFERENCE.replace("  FUN\n", "  PROPERTY\n")
}

pub fn common_args(candidate_ext: &str) -> ComparisonArgs {
    ComparisonArgs {
        config: None,
        name_check: None,
        candidate_ext: candidate_ext.to_owned(),
        depth_limit: None,
        color: false,
    }
}

pub fn write(dir: &Path, file: &str, contents: &str) {
    std::fs::write(dir.join(file), contents).unwrap();
}

/// `NAME.ast` candidate dump and `NAME.txt` reference dump.
pub fn write_fixture(dir: &Path, name: &str, candidate: &str, reference: &str) {
    write(dir, &format!("{name}.ast"), candidate);
    write(dir, &format!("{name}.txt"), reference);
}
