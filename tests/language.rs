use std::{fs, sync::Mutex};

use lispcalc::{
    error::{Error, EvalError, ParseError},
    get_result, get_result_with,
    interpreter::{
        evaluator::{
            core::Environment,
            function::core::{Arity, BUILTIN_FUNCTIONS},
        },
        value::core::Value,
    },
};
use walkdir::WalkDir;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Expect {
    Success,
    Failure,
}

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (expect, code) in extract_lisp_blocks(&content) {
            for line in code.lines().filter(|l| !l.trim().is_empty()) {
                count += 1;
                let result = get_result(line);
                match expect {
                    Expect::Success => {
                        if let Err(e) = result {
                            panic!("Example in {path:?} failed:\n{line}\nError: {e:?}");
                        }
                    },
                    Expect::Failure => {
                        if let Ok(v) = result {
                            panic!("Example in {path:?} should fail:\n{line}\nValue: {v}");
                        }
                    },
                }
            }
        }
    }

    assert!(count > 0, "No lisp examples found in book/src");
}

fn extract_lisp_blocks(content: &str) -> Vec<(Expect, String)> {
    let mut blocks = Vec::new();
    let mut inside = None;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if inside.is_none() && trimmed.starts_with("```lisp") {
            let expect = if trimmed.contains("error") { Expect::Failure } else { Expect::Success };
            inside = Some(expect);
            buf.clear();
            continue;
        }
        if let Some(expect) = inside
           && trimmed.starts_with("```")
        {
            inside = None;
            blocks.push((expect, buf.clone()));
            continue;
        }
        if inside.is_some() {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_value(src: &str, expected: f64) {
    match get_result(src) {
        Ok(v) => assert_eq!(v, Value::new(expected), "Wrong result for {src}"),
        Err(e) => panic!("Script {src} failed: {e}"),
    }
}

fn assert_eval_error(src: &str, expected: &EvalError) {
    match get_result(src) {
        Err(Error::Eval(e)) => assert_eq!(&e, expected, "Wrong error for {src}"),
        other => panic!("Script {src} should fail with {expected:?}, got {other:?}"),
    }
}

fn assert_parse_error(src: &str, expected: &ParseError) {
    match get_result(src) {
        Err(Error::Parse(e)) => assert_eq!(&e, expected, "Wrong error for {src}"),
        other => panic!("Script {src} should fail with {expected:?}, got {other:?}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("(+ 1 2)", 3.0);
    assert_value("(- 5 3)", 2.0);
    assert_value("(* 4 3)", 12.0);
    assert_value("(/ 8 2)", 4.0);
}

#[test]
fn unary_forms() {
    assert_value("(- 5)", -5.0);
    assert_value("(/ 4)", 0.25);
    assert_value("(+ 7)", 7.0);
    assert_value("(* 7)", 7.0);
}

#[test]
fn empty_folds_return_identity() {
    assert_value("(+)", 0.0);
    assert_value("(*)", 1.0);
}

#[test]
fn variadic_operators_fold_left_to_right() {
    assert_value("(+ 1 2 3 4)", 10.0);
    assert_value("(- 10 3 2)", 5.0);
    assert_value("(* 2 3 4)", 24.0);
    assert_value("(/ 100 5 2)", 10.0);
}

#[test]
fn nested_expressions() {
    assert_value("(* 2 (+ 1 2))", 6.0);
    assert_value("(+ (* 2 3) (* 4 5))", 26.0);
    assert_value("(- (- (- 1)))", -1.0);
    assert_value("(/ (+ 1 1 1 1) (* 2 (- 3 2)))", 2.0);
}

#[test]
fn numbers_evaluate_to_themselves() {
    assert_value("42", 42.0);
    assert_value("-1.5", -1.5);
    assert_value("+3", 3.0);
    assert_value(".5", 0.5);
    assert_value("2.5e3", 2500.0);
}

#[test]
fn whitespace_and_adjacent_parentheses() {
    assert_value("(+(* 2 3)(* 4 5))", 26.0);
    assert_value("  (\t+ 1\n 2 )  ", 3.0);
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_value("(/ 1 0)", f64::INFINITY);
    assert_value("(/ -1 0)", f64::NEG_INFINITY);
    assert_value("(/ 0)", f64::INFINITY);
    assert!(get_result("(/ 0 0)").is_ok_and(Value::is_nan));
}

#[test]
fn parse_errors() {
    assert_parse_error("", &ParseError::EmptyInput);
    assert_parse_error("   \n\t", &ParseError::EmptyInput);
    assert_parse_error(")", &ParseError::UnexpectedCloseParen);
    assert_parse_error("(+ 1 2", &ParseError::UnterminatedList);
    assert_parse_error("((+ 1 2)", &ParseError::UnterminatedList);
    assert_parse_error("(+ 1 2))",
                       &ParseError::UnexpectedTrailingTokens { token: ")".to_string() });
    assert_parse_error("(+ 1 2) 3",
                       &ParseError::UnexpectedTrailingTokens { token: "3".to_string() });
}

#[test]
fn evaluation_errors() {
    assert_eval_error("()", &EvalError::EmptyExpression);
    assert_eval_error("(+ 1 ())", &EvalError::EmptyExpression);
    assert_eval_error("(foo 1 2)", &EvalError::UnknownOperator { name: "foo".to_string() });
    assert_eval_error("(1 2 3)", &EvalError::OperatorNotSymbol { found: "1".to_string() });
    assert_eval_error("((+ 1 2) 3)",
                      &EvalError::OperatorNotSymbol { found: "(+ 1 2)".to_string() });
    assert_eval_error("x", &EvalError::SymbolNotAValue { name: "x".to_string() });
    assert_eval_error("(+ 1 y)", &EvalError::SymbolNotAValue { name: "y".to_string() });
    assert_eval_error("(+ 1 +)", &EvalError::SymbolNotAValue { name: "+".to_string() });
}

#[test]
fn arity_errors() {
    assert_eval_error("(-)",
                      &EvalError::ArityError { name:     "-".to_string(),
                                               expected: Arity::AtLeast(1),
                                               found:    0, });
    assert_eval_error("(/)",
                      &EvalError::ArityError { name:     "/".to_string(),
                                               expected: Arity::AtLeast(1),
                                               found:    0, });
}

#[test]
fn arguments_are_evaluated_before_operator_lookup() {
    assert_eval_error("(foo (bar 1))", &EvalError::UnknownOperator { name: "bar".to_string() });
    assert_eval_error("(+ (foo) (bar))", &EvalError::UnknownOperator { name: "foo".to_string() });
}

static TICKS: Mutex<Vec<f64>> = Mutex::new(Vec::new());

#[test]
fn arguments_are_evaluated_left_to_right_once() {
    let mut env = Environment::new();
    env.define("tick", Arity::Exact(1), |args, _| {
           TICKS.lock().unwrap().push(args[0].as_real());
           Ok(args[0])
       });

    let value = get_result_with("(+ (tick 1) (tick 2) (* (tick 3) (tick 4)))", &env).unwrap();

    assert_eq!(value, Value::new(15.0));
    assert_eq!(*TICKS.lock().unwrap(), vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn malformed_words_become_symbols() {
    assert_eval_error("(1x 2)", &EvalError::UnknownOperator { name: "1x".to_string() });
    assert_eval_error("(+ 1 2x)", &EvalError::SymbolNotAValue { name: "2x".to_string() });
}

#[test]
fn environment_survives_failures() {
    let env = Environment::new();

    assert!(get_result_with("(foo 1)", &env).is_err());
    assert!(get_result_with("(+ 1", &env).is_err());
    assert!(get_result_with("(-)", &env).is_err());
    assert_eq!(get_result_with("(+ 1 2)", &env).unwrap(), Value::new(3.0));
    assert_eq!(env.operators(), vec!["*", "+", "-", "/"]);
}

#[test]
fn default_environment_matches_builtin_table() {
    let env = Environment::new();
    let mut names = BUILTIN_FUNCTIONS.to_vec();
    names.sort_unstable();

    assert_eq!(env.operators(), names);
    assert!(Environment::empty().operators().is_empty());
}

#[test]
fn defined_builtins_are_callable() {
    let mut env = Environment::new();
    let previous = env.define("max", Arity::AtLeast(1), |args, _| {
                          Ok(args.iter()
                                 .copied()
                                 .fold(Value::new(f64::NEG_INFINITY), |a, b| if b > a { b } else { a }))
                      });
    assert!(previous.is_none());

    assert_eq!(get_result_with("(max 3 (+ 4 5) 1)", &env).unwrap(), Value::new(9.0));
    assert_eq!(get_result_with("(max)", &env),
               Err(Error::Eval(EvalError::ArityError { name:     "max".to_string(),
                                                       expected: Arity::AtLeast(1),
                                                       found:    0, })));

    let replaced = env.define("+", Arity::Exact(2), |args, _| Ok(args[0] * args[1]));
    assert!(replaced.is_some());
    assert_eq!(get_result_with("(+ 3 4)", &env).unwrap(), Value::new(12.0));
    assert!(get_result_with("(+ 3 4 5)", &env).is_err());
}

#[test]
fn error_messages_name_the_problem() {
    let message = |src: &str| get_result(src).unwrap_err().to_string();

    assert!(message("(foo 1 2)").contains("Unknown operator 'foo'"));
    assert!(message("(+ 1 2").contains("Expected closing parenthesis"));
    assert!(message("(-)").contains("at least 1"));
    assert!(message("x").contains("Symbol 'x' is not a value"));
}
