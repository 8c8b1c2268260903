use anyhow::Result;
use tinyc::ast::{call, number, Program};
use tinyc::parse::parse;
use tinyc::settings::{Settings, DEFAULT_SETTINGS};
use tinyc::tokenize::{tokenize_str, Token, TokenKind};
use tinyc::CompileError;

fn parse_str(s: &str) -> Result<Program, CompileError> {
    parse(tokenize_str(s), &DEFAULT_SETTINGS)
}

#[test]
fn add_subtract() -> Result<()> {
    assert_eq!(parse_str("(add 2 (subtract 4 2))")?,
               Program {
                   body: vec![
                       call("add", vec![
                           number(2),
                           call("subtract", vec![number(4), number(2)])])]
               });
    Ok(())
}

#[test]
fn from_token_list() -> Result<()> {
    let tokens = vec![Token::Paren('('), Token::name("foo"), Token::Paren(')')];
    let ast = parse(tokens.into_iter().map(Ok), &DEFAULT_SETTINGS)?;
    assert_eq!(ast, Program { body: vec![call("foo", vec![])] });
    Ok(())
}

#[test]
fn toplevel_order_and_count() -> Result<()> {
    let ast = parse_str("(a) 42 (b 1) 7")?;
    assert_eq!(ast.body, vec![call("a", vec![]), number(42),
                              call("b", vec![number(1)]), number(7)]);
    assert_eq!(parse_str("")?.body.len(), 0);
    Ok(())
}

#[test]
fn repeated_parse_is_deterministic() -> Result<()> {
    let s = "(print (concat (hello) 10 (world 2 3))) 5";
    assert_eq!(parse_str(s)?, parse_str(s)?);
    Ok(())
}

#[test]
fn display_gives_source_back() -> Result<()> {
    let ast = parse_str("( add 2\n(subtract   4 2) )  42")?;
    assert_eq!(ast.to_string(), "(add 2 (subtract 4 2))\n42");
    Ok(())
}

#[test]
fn unterminated_call() {
    assert!(matches!(parse_str("(add 1 2"), Err(CompileError::PrematureEof)));
    assert!(matches!(parse_str("("), Err(CompileError::PrematureEof)));
}

#[test]
fn unexpected_tokens() {
    match parse_str(")") {
        Err(CompileError::UnexpectedToken(t)) => {
            assert_eq!(t, Token::Paren(')'));
            assert_eq!(t.kind(), TokenKind::Paren);
        }
        r => panic!("unexpected result {:?}", r),
    }
    assert!(matches!(parse_str("foo"),
                     Err(CompileError::UnexpectedToken(Token::Name(_)))));
    assert!(matches!(parse_str("(1 2)"),
                     Err(CompileError::UnexpectedToken(Token::Number(_)))));
    assert!(matches!(parse_str("()"),
                     Err(CompileError::UnexpectedToken(Token::Paren(')')))));
    assert!(matches!(parse_str("(a b)"),
                     Err(CompileError::UnexpectedToken(Token::Name(_)))));
}

#[test]
fn first_error_in_pull_order_wins() {
    assert!(matches!(parse_str(") #"),
                     Err(CompileError::UnexpectedToken(Token::Paren(')')))));
    assert!(matches!(parse_str("(a #"),
                     Err(CompileError::UnrecognizedCharacter('#'))));
}

#[test]
fn depth_fuel() -> Result<()> {
    let settings = Settings { depth_fuel: 2 };
    parse(tokenize_str("(a (b 1)) (c)"), &settings)?;
    assert!(matches!(parse(tokenize_str("(a (b (c)))"), &settings),
                     Err(CompileError::NestingTooDeep)));
    assert!(matches!(parse(tokenize_str("(a)"), &Settings { depth_fuel: 0 }),
                     Err(CompileError::NestingTooDeep)));
    let deep = "(a ".repeat(10_000);
    assert!(matches!(parse_str(&deep), Err(CompileError::NestingTooDeep)));
    Ok(())
}
