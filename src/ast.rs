//! Abstract syntax tree definitions for Rill
//!
//! All nodes are plain owned data: built bottom-up by the parser, immutable
//! afterwards, and free of cycles. Nodes carry no source positions; positions
//! live on tokens and on errors, which keeps structural comparison in tests
//! exact.
//!
//! [`Program`] implements `Display` as an indented structural tree, one node
//! per line, which is the printing surface offered to drivers.

use std::fmt;

/// A program is a sequence of statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Statement>,
}

/// Statements that may appear at the top level or inside a block.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    VariableDeclaration(VariableDeclaration),
    Loop(LoopStatement),
}

/// `let x = "value";` or, equivalently, `x = "value";`
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub identifier: Identifier,
    pub initializer: Expression,
}

/// A variable name.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: String,
}

/// A literal value, stored verbatim as scanned.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub value: String,
}

/// Expressions.
///
/// Only string literals are produced by the parser today; the other variants
/// are stable growth points for the expression grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Literal(Literal),
    Assignment(AssignmentExpression),
}

/// `left = right` in expression position. Defined for the grammar to grow
/// into; no production builds one yet.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpression {
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

/// A braced sequence of statements.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    pub body: Vec<Statement>,
}

/// `loop { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct LoopStatement {
    pub body: BlockStatement,
}

// ============================================================================
// Structural printing
// ============================================================================

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Program")?;
        for statement in &self.body {
            write_statement(f, statement, 1)?;
        }
        Ok(())
    }
}

fn write_indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    f.write_str("\n")?;
    for _ in 0..depth {
        f.write_str("  ")?;
    }
    Ok(())
}

fn write_statement(f: &mut fmt::Formatter<'_>, statement: &Statement, depth: usize) -> fmt::Result {
    match statement {
        Statement::VariableDeclaration(decl) => {
            write_indent(f, depth)?;
            f.write_str("VariableDeclaration")?;
            write_indent(f, depth + 1)?;
            write!(f, "Identifier {:?}", decl.identifier.name)?;
            write_expression(f, &decl.initializer, depth + 1)
        }
        Statement::Loop(stmt) => {
            write_indent(f, depth)?;
            f.write_str("LoopStatement")?;
            write_block(f, &stmt.body, depth + 1)
        }
    }
}

fn write_block(f: &mut fmt::Formatter<'_>, block: &BlockStatement, depth: usize) -> fmt::Result {
    write_indent(f, depth)?;
    f.write_str("BlockStatement")?;
    for statement in &block.body {
        write_statement(f, statement, depth + 1)?;
    }
    Ok(())
}

fn write_expression(f: &mut fmt::Formatter<'_>, expression: &Expression, depth: usize) -> fmt::Result {
    match expression {
        Expression::Identifier(identifier) => {
            write_indent(f, depth)?;
            write!(f, "Identifier {:?}", identifier.name)
        }
        Expression::Literal(literal) => {
            write_indent(f, depth)?;
            write!(f, "Literal {:?}", literal.value)
        }
        Expression::Assignment(assignment) => {
            write_indent(f, depth)?;
            f.write_str("AssignmentExpression")?;
            write_expression(f, &assignment.left, depth + 1)?;
            write_expression(f, &assignment.right, depth + 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_empty_program() {
        let program = Program::default();
        assert_eq!(program.to_string(), "Program");
    }

    #[test]
    fn test_display_nested_tree() {
        let program = Program {
            body: vec![Statement::Loop(LoopStatement {
                body: BlockStatement {
                    body: vec![Statement::VariableDeclaration(VariableDeclaration {
                        identifier: Identifier { name: "y".to_string() },
                        initializer: Expression::Literal(Literal { value: "z".to_string() }),
                    })],
                },
            })],
        };
        assert_eq!(
            program.to_string(),
            "Program\n  LoopStatement\n    BlockStatement\n      VariableDeclaration\n        Identifier \"y\"\n        Literal \"z\""
        );
    }

    #[test]
    fn test_display_assignment_expression() {
        let program = Program {
            body: vec![Statement::VariableDeclaration(VariableDeclaration {
                identifier: Identifier { name: "x".to_string() },
                initializer: Expression::Assignment(AssignmentExpression {
                    left: Box::new(Expression::Identifier(Identifier { name: "a".to_string() })),
                    right: Box::new(Expression::Literal(Literal { value: "b".to_string() })),
                }),
            })],
        };
        assert_eq!(
            program.to_string(),
            "Program\n  VariableDeclaration\n    Identifier \"x\"\n    AssignmentExpression\n      Identifier \"a\"\n      Literal \"b\""
        );
    }
}
