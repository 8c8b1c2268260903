use anyhow::Result;
use tinyc::compile::compile_with;
use tinyc::settings::Settings;
use tinyc::tokenize::Token;
use tinyc::{compile, CompileError};

#[test]
fn add_subtract() -> Result<()> {
    assert_eq!(compile("(add 2 (subtract 4 2))")?, "add(2, subtract(4, 2));");
    Ok(())
}

#[test]
fn call_without_arguments() -> Result<()> {
    assert_eq!(compile("(foo)")?, "foo();");
    Ok(())
}

#[test]
fn bare_toplevel_number() -> Result<()> {
    assert_eq!(compile("42")?, "42");
    assert_eq!(compile("(a) 042 (b)")?, "a();\n42\nb();");
    Ok(())
}

#[test]
fn empty_input() -> Result<()> {
    assert_eq!(compile("")?, "");
    assert_eq!(compile("  \n ")?, "");
    Ok(())
}

#[test]
fn errors() {
    assert!(matches!(compile("(add # 1)"),
                     Err(CompileError::UnrecognizedCharacter('#'))));
    assert!(matches!(compile("(add 1 2"), Err(CompileError::PrematureEof)));
    assert!(matches!(compile("(add 1))"),
                     Err(CompileError::UnexpectedToken(Token::Paren(')')))));
    assert!(matches!(compile_with("(a (b))", &Settings { depth_fuel: 1 }),
                     Err(CompileError::NestingTooDeep)));
}

#[test]
fn error_messages() {
    let msg = |s| compile(s).err().map(|e| e.to_string());
    assert_eq!(msg("#").as_deref(), Some("unrecognized character '#'"));
    assert_eq!(msg(")").as_deref(), Some("unexpected paren token ')'"));
    assert_eq!(msg("(7)").as_deref(), Some("unexpected number token '7'"));
    assert_eq!(msg("(a").as_deref(),
               Some("premature EOF while expecting closing character ')'"));
}
