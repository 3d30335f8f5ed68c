/// Kotlin compiler PSI test data (`compiler/testData/psi`) that the ANTLR
/// Kotlin grammar parses without errors.
pub const KOTLIN_PSI_FIXTURES: [&str; 49] = [
    "AnonymousInitializer",
    "BabySteps",
    "ByClauses",
    "CallWithManyClosures",
    "CommentsBindingInLambda",
    "CommentsBindingInStatementBlock",
    "destructuringInLambdas",
    "DocCommentAfterFileAnnotations",
    "DocCommentForFirstDeclaration",
    "DocCommentOnPackageDirectiveLine",
    "DocCommentsBinding",
    "DoubleColonWhitespaces",
    "DynamicReceiver",
    "DynamicTypes",
    "EmptyFile",
    "EnumCommas",
    "EnumEntrySemicolonInlineMember",
    "EnumEntrySemicolonMember",
    "EnumIn",
    "EnumInline",
    "Enums",
    "EnumShortCommas",
    "EnumShortWithOverload",
    "EOLsInComments",
    "ExtensionsWithQNReceiver",
    "FloatingPointLiteral",
    "FunctionLiterals",
    "FunctionTypes",
    "IfWithPropery",
    "Imports",
    "ImportSoftKW",
    "Inner",
    "Interface",
    "LineCommentAfterFileAnnotations",
    "LineCommentForFirstDeclaration",
    "LineCommentsInBlock",
    "LongPackageName",
    "ModifierAsSelector",
    "NamedClassObject",
    "NestedComments",
    "NewLinesValidOperations",
    "NotIsAndNotIn",
    "ObjectLiteralAsStatement",
    "PropertyInvokes",
    "QuotedIdentifiers",
    "SemicolonAfterIf",
    "TraitConstructor",
    "TypeAlias",
    "TypeConstraints",
];
