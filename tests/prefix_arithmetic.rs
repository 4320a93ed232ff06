//! Recursive prefix-notation arithmetic: `(+ 1 2)`, with nesting to any
//! depth via `lazy`, and an evaluator over the resulting tree.

use cursorcomb::cursors::TextCursor;
use cursorcomb::text::{digits, literal};
use cursorcomb::{
    AndExt, BoxedExt, BoxedParser, Cursor, MapExt, ParseError, Parser, between, choice, lazy, run,
};

#[derive(Debug, Copy, Clone, PartialEq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Debug, PartialEq)]
enum Expr {
    Number(i64),
    Operation { op: Op, a: Box<Expr>, b: Box<Expr> },
}

fn number<'src>()
-> impl Parser<'src, Cursor = TextCursor<'src>, Output = Expr, Error = ParseError> {
    digits().map(|text| Expr::Number(text.parse().unwrap()))
}

fn operator<'src>() -> impl Parser<'src, Cursor = TextCursor<'src>, Output = Op, Error = ParseError>
{
    choice(vec![
        literal("+").map(|_| Op::Add).boxed(),
        literal("-").map(|_| Op::Sub).boxed(),
        literal("*").map(|_| Op::Mul).boxed(),
        literal("/").map(|_| Op::Div).boxed(),
    ])
}

// operation = "(" operator " " expr " " expr ")"
fn operation<'src>() -> BoxedParser<'src, TextCursor<'src>, Expr> {
    between(
        literal("("),
        operator()
            .and(literal(" "))
            .and(lazy(expr))
            .and(literal(" "))
            .and(lazy(expr)),
        literal(")"),
    )
    .map(|((((op, _), a), _), b)| Expr::Operation {
        op,
        a: Box::new(a),
        b: Box::new(b),
    })
    .boxed()
}

fn expr<'src>() -> BoxedParser<'src, TextCursor<'src>, Expr> {
    choice(vec![number().boxed(), operation()]).boxed()
}

fn eval(expr: &Expr) -> i64 {
    match expr {
        Expr::Number(n) => *n,
        Expr::Operation { op, a, b } => {
            let (a, b) = (eval(a), eval(b));
            match op {
                Op::Add => a + b,
                Op::Sub => a - b,
                Op::Mul => a * b,
                Op::Div => a / b,
            }
        }
    }
}

#[test]
fn bare_number_is_an_expression() {
    let (tree, _) = run(&expr(), "42").unwrap();

    assert_eq!(tree, Expr::Number(42));
    assert_eq!(eval(&tree), 42);
}

#[test]
fn flat_operation_parses_to_a_tree() {
    let (tree, cursor) = run(&expr(), "(+ 1 2)").unwrap();

    assert_eq!(
        tree,
        Expr::Operation {
            op: Op::Add,
            a: Box::new(Expr::Number(1)),
            b: Box::new(Expr::Number(2)),
        }
    );
    assert_eq!(cursor.position(), 7);
    assert_eq!(eval(&tree), 3);
}

#[test]
fn nested_operations_evaluate() {
    // (* 10 2) = 20, (/ 50 3) = 16 with truncation, (- 16 2) = 14
    let (tree, _) = run(&expr(), "(+ (* 10 2) (- (/ 50 3) 2))").unwrap();

    assert_eq!(eval(&tree), 34);
}

#[test]
fn division_truncates_toward_zero() {
    let (tree, _) = run(&expr(), "(/ 7 2)").unwrap();

    assert_eq!(eval(&tree), 3);
}

#[test]
fn deeply_left_nested_operands() {
    let (tree, _) = run(&expr(), "(+ (+ (+ (+ 1 1) 1) 1) 1)").unwrap();

    assert_eq!(eval(&tree), 5);
}

#[test]
fn missing_close_paren_fails() {
    assert!(run(&expr(), "(+ 1 2").is_err());
}

#[test]
fn unknown_operator_fails() {
    assert!(run(&expr(), "(% 1 2)").is_err());
}

#[test]
fn operation_needs_both_operands() {
    assert!(run(&expr(), "(+ 1)").is_err());
}
