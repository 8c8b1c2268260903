use quickcheck_macros::quickcheck;
use tinyc::ast::{CallExpression, Expression};
use tinyc::compile;
use tinyc::parse::parse;
use tinyc::settings::DEFAULT_SETTINGS;
use tinyc::target::{self, Statement};
use tinyc::tokenize::{tokenize_str, Token};
use tinyc::transform::transform;
use tinyc::CompileError;

const GOOD_CHARS: &[char] = &[' ', '\t', '\n', '(', ')', '0', '7', '9', 'a', 'Z', 'q'];

fn good_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| GOOD_CHARS[*b as usize % GOOD_CHARS.len()]).collect()
}

#[quickcheck]
fn good_chars_always_tokenize(bytes: Vec<u8>) -> bool {
    tokenize_str(&good_string(&bytes)).all(|t| t.is_ok())
}

#[quickcheck]
fn other_chars_never_tokenize(bytes: Vec<u8>, c: char, at: usize) -> bool {
    if c.is_ascii_alphanumeric()
        || "()".contains(c)
        || matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
    {
        return true
    }
    let mut s: Vec<char> = good_string(&bytes).chars().collect();
    s.insert(at % (s.len() + 1), c);
    let s: String = s.into_iter().collect();
    let r: Result<Vec<Token>, CompileError> = tokenize_str(&s).collect();
    matches!(r, Err(CompileError::UnrecognizedCharacter(e)) if e == c)
}

#[quickcheck]
fn compile_is_pure(bytes: Vec<u8>) -> bool {
    let s = good_string(&bytes);
    match (compile(&s), compile(&s)) {
        (Ok(a), Ok(b)) => a == b,
        (Err(a), Err(b)) => a.to_string() == b.to_string(),
        _ => false,
    }
}

// Build a well-formed program from random bytes: each byte opens a
// call, adds a number, or closes the innermost call.
fn program_text(bytes: &[u8]) -> String {
    let mut s = String::new();
    let mut open = 0;
    for b in bytes {
        match b % 3 {
            0 if open < 20 => {
                s.push_str(" (f");
                open += 1;
            }
            1 => s.push_str(&format!(" {}", b)),
            _ if open > 0 => {
                s.push(')');
                open -= 1;
            }
            _ => {}
        }
    }
    for _ in 0..open {
        s.push(')');
    }
    s
}

fn same_shape_call(src: &CallExpression, dst: &target::CallExpression) -> bool {
    src.name == dst.callee.name
        && src.params.len() == dst.arguments.len()
        && src.params.iter().zip(&dst.arguments).all(|(p, a)| same_shape(p, a))
}

fn same_shape(src: &Expression, dst: &target::Expression) -> bool {
    match (src, dst) {
        (Expression::CallExpression(c), target::Expression::CallExpression(d)) =>
            same_shape_call(c, d),
        (Expression::NumberLiteral(n), target::Expression::NumberLiteral(m)) =>
            n == m,
        _ => false,
    }
}

#[quickcheck]
fn toplevel_calls_wrapped_nested_calls_bare(bytes: Vec<u8>) -> bool {
    let text = program_text(&bytes);
    let ast = match parse(tokenize_str(&text), &DEFAULT_SETTINGS) {
        Ok(ast) => ast,
        Err(_) => return false,
    };
    let new_ast = transform(&ast);
    ast.body.len() == new_ast.body.len()
        && ast.body.iter().zip(&new_ast.body).all(|(e, s)| match (e, s) {
            (Expression::CallExpression(c), Statement::ExpressionStatement(st)) =>
                same_shape_call(c, &st.expression),
            (Expression::NumberLiteral(n), Statement::NumberLiteral(m)) => n == m,
            _ => false,
        })
}
