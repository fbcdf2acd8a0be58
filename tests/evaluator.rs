use classhub::{
    error::{EvalError, SemanticError, SyntaxError},
    host::BufferHost,
    interpreter::{
        function::core::{Arity, BUILTIN_FUNCTIONS},
        session::Session,
        value::core::Value,
    },
};
use pretty_assertions::assert_eq;

fn eval_in(session: &mut Session, line: &str) -> Option<Value> {
    session.evaluate(line, &mut BufferHost::default())
           .unwrap_or_else(|e| panic!("'{line}' failed: {e}"))
}

fn number(line: &str) -> f64 {
    match eval_in(&mut Session::new(), line) {
        Some(Value::Number(n)) => n,
        other => panic!("'{line}' did not produce a number: {other:?}"),
    }
}

fn error(line: &str) -> EvalError {
    error_in(&mut Session::new(), line)
}

fn error_in(session: &mut Session, line: &str) -> EvalError {
    match session.evaluate(line, &mut BufferHost::default()) {
        Ok(value) => panic!("'{line}' succeeded with {value:?}"),
        Err(e) => e,
    }
}

fn printed(session: &mut Session, line: &str) -> Vec<String> {
    let mut host = BufferHost::default();
    session.evaluate(line, &mut host)
           .unwrap_or_else(|e| panic!("'{line}' failed: {e}"));
    host.take_lines()
}

#[test]
fn precedence_and_grouping() {
    assert_eq!(number("2 + 3 * 4"), 14.0);
    assert_eq!(number("(2 + 3) * 4"), 20.0);
    assert_eq!(number("2 * 3 + 4 * 5"), 26.0);
    assert_eq!(number("((1))"), 1.0);
}

#[test]
fn same_level_operators_associate_left() {
    assert_eq!(number("10 - 4 - 3"), 3.0);
    assert_eq!(number("100 / 10 / 5"), 2.0);
    assert_eq!(number("7 % 4 % 2"), 1.0);
    assert_eq!(number("2 * 6 / 4"), 3.0);
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(number("  2*  ( 3 +4 )  "), 14.0);
    assert_eq!(number("\t1\t+\t1\t"), 2.0);
    assert_eq!(number("sqrt ( 16 )"), 4.0);
}

#[test]
fn unary_signs() {
    assert_eq!(number("-3"), -3.0);
    assert_eq!(number("--3"), 3.0);
    assert_eq!(number("+3"), 3.0);
    assert_eq!(number("-+-2"), 2.0);
    assert_eq!(number("2 * -3"), -6.0);
    assert_eq!(number("-2 * 3"), -6.0);
    assert_eq!(number("1 - -1"), 2.0);
}

#[test]
fn decimal_numbers() {
    assert_eq!(number("1.5"), 1.5);
    assert_eq!(number("0.1 + 0.2"), 0.1 + 0.2);
    assert_eq!(number("007"), 7.0);
}

#[test]
fn floating_point_division_semantics() {
    assert_eq!(number("1 / 0"), f64::INFINITY);
    assert_eq!(number("-1 / 0"), f64::NEG_INFINITY);
    assert!(number("0 / 0").is_nan());
    assert!(number("5 % 0").is_nan());
    assert_eq!(number("-7 % 3"), -1.0);
    assert_eq!(number("5.5 % 2"), 1.5);
}

#[test]
fn assignment_stores_and_yields_value() {
    let mut session = Session::new();

    assert_eq!(eval_in(&mut session, "x = 5"), Some(Value::Number(5.0)));
    assert_eq!(eval_in(&mut session, "x + 1"), Some(Value::Number(6.0)));
    assert_eq!(session.variable("x"), Some(&Value::Number(5.0)));
}

#[test]
fn assigned_decimal_round_trips_exactly() {
    let mut session = Session::new();

    eval_in(&mut session, "x = 3.25");
    assert_eq!(eval_in(&mut session, "x"), Some(Value::Number(3.25)));
}

#[test]
fn assignment_of_string() {
    let mut session = Session::new();

    eval_in(&mut session, "name = \"Ada\"");
    assert_eq!(eval_in(&mut session, "\"Hi \" + name"), Some(Value::from("Hi Ada")));
}

#[test]
fn identifiers_may_contain_underscores() {
    let mut session = Session::new();

    eval_in(&mut session, "my_var = 2");
    eval_in(&mut session, "_ = 3");
    assert_eq!(eval_in(&mut session, "my_var * _"), Some(Value::Number(6.0)));
}

#[test]
fn variables_shadow_function_references_but_not_calls() {
    let mut session = Session::new();

    eval_in(&mut session, "sqrt = 3");
    assert_eq!(eval_in(&mut session, "sqrt"), Some(Value::Number(3.0)));
    assert_eq!(eval_in(&mut session, "sqrt(16)"), Some(Value::Number(4.0)));
}

#[test]
fn failed_assignment_falls_back_to_expression() {
    let mut session = Session::new();
    eval_in(&mut session, "x = 1");

    let err = error_in(&mut session, "x = (1 +");

    assert_eq!(err,
               EvalError::Syntax(SyntaxError::UnexpectedCharacter { found:    '=',
                                                                    position: 2, }));
    assert_eq!(session.variable("x"), Some(&Value::Number(1.0)));
}

#[test]
fn failed_assignment_to_unknown_name_reports_the_name() {
    let err = error("y = (1 +");

    assert_eq!(err,
               EvalError::Semantic(SemanticError::UnknownIdentifier { name: "y".to_string() }));
}

#[test]
fn assignment_with_trailing_input_is_not_committed() {
    let mut session = Session::new();

    let err = error_in(&mut session, "y = 5 )");

    assert_eq!(err,
               EvalError::Syntax(SyntaxError::UnexpectedCharacter { found:    ')',
                                                                    position: 6, }));
    assert_eq!(session.variable("y"), None);
}

#[test]
fn errors_leave_the_session_usable() {
    let mut session = Session::new();

    eval_in(&mut session, "x = 1");
    error_in(&mut session, "x +");
    error_in(&mut session, "nope(1)");
    assert_eq!(eval_in(&mut session, "x"), Some(Value::Number(1.0)));
}

#[test]
fn missing_closing_paren_points_at_end_of_input() {
    let err = error("(1 + 2");

    assert!(err.is_syntax());
    assert_eq!(err, EvalError::Syntax(SyntaxError::ExpectedClosingParen { position: 6 }));
    assert_eq!(err.to_string(), "Expected ')' at position 6");
}

#[test]
fn missing_closing_paren_in_call() {
    assert_eq!(error("pow(2, 3"),
               EvalError::Syntax(SyntaxError::ExpectedClosingParen { position: 8 }));
}

#[test]
fn unterminated_string_is_syntax_error() {
    assert_eq!(error("\"abc"),
               EvalError::Syntax(SyntaxError::UnterminatedString { position: 0 }));
    assert_eq!(error("1 + \"abc"),
               EvalError::Syntax(SyntaxError::UnterminatedString { position: 4 }));
}

#[test]
fn missing_operand_is_syntax_error() {
    assert_eq!(error("1 +"), EvalError::Syntax(SyntaxError::ExpectedNumber { position: 3 }));
    assert_eq!(error(""), EvalError::Syntax(SyntaxError::ExpectedNumber { position: 0 }));
    assert_eq!(error(".5"), EvalError::Syntax(SyntaxError::ExpectedNumber { position: 0 }));
}

#[test]
fn numbers_have_no_exponent_or_trailing_dot() {
    assert_eq!(error("1e3"),
               EvalError::Syntax(SyntaxError::UnexpectedCharacter { found:    'e',
                                                                    position: 1, }));
    assert_eq!(error("1."),
               EvalError::Syntax(SyntaxError::UnexpectedCharacter { found:    '.',
                                                                    position: 1, }));
}

#[test]
fn digits_end_an_identifier() {
    let mut session = Session::new();
    eval_in(&mut session, "x = 2");

    assert_eq!(error_in(&mut session, "x1"),
               EvalError::Syntax(SyntaxError::UnexpectedCharacter { found:    '1',
                                                                    position: 1, }));
}

#[test]
fn unknown_function_names_the_identifier() {
    let err = error("foo(1)");

    assert!(err.is_semantic());
    assert_eq!(err,
               EvalError::Semantic(SemanticError::UnknownFunction { name: "foo".to_string() }));
    assert_eq!(err.to_string(), "Unknown function: foo");
}

#[test]
fn unknown_identifier_names_the_identifier() {
    assert_eq!(error("bar * 2"),
               EvalError::Semantic(SemanticError::UnknownIdentifier { name: "bar".to_string() }));
}

#[test]
fn arguments_are_parsed_before_the_function_is_resolved() {
    assert_eq!(error("foo(1 +)"),
               EvalError::Syntax(SyntaxError::ExpectedNumber { position: 7 }));
}

#[test]
fn arity_is_checked() {
    assert_eq!(error("sqrt(1, 2)"),
               EvalError::Semantic(SemanticError::ArgumentCountMismatch { name:     "sqrt".to_string(),
                                                                          expected: Arity::Exact(1),
                                                                          found:    2, }));
    assert_eq!(error("help(1, 2)").to_string(), "help() expects 0 or 1 argument(s), got 2");
    assert!(error("rand(1)").is_semantic());
    assert!(error("pow(1)").is_semantic());
}

#[test]
fn function_reference_is_not_a_value() {
    assert_eq!(error("sqrt"),
               EvalError::Semantic(SemanticError::FunctionAsValue { name: "sqrt".to_string() }));
    assert!(error("sqrt + 1").is_semantic());
    assert!(error("-sqrt").is_semantic());
    assert!(error("print(sqrt)").is_semantic());
}

#[test]
fn empty_result_is_not_a_value() {
    assert_eq!(error("print(1) + 1"),
               EvalError::Semantic(SemanticError::NoValue { name: "print".to_string() }));
}

#[test]
fn math_library() {
    assert_eq!(number("sqrt(16)"), 4.0);
    assert_eq!(number("sprt(16)"), 4.0);
    assert_eq!(number("pow(2, 10)"), 1024.0);
    assert_eq!(number("abs(-3.5)"), 3.5);
    assert_eq!(number("floor(2.7)"), 2.0);
    assert_eq!(number("ceil(2.1)"), 3.0);
    assert_eq!(number("exp(0)"), 1.0);
    assert_eq!(number("log(1)"), 0.0);
    assert_eq!(number("cbrt(27)"), 3.0);
    assert_eq!(number("cbrt(-8)"), -2.0);
    assert_eq!(number("sin(0)"), 0.0);
    assert_eq!(number("cos(0)"), 1.0);
    assert_eq!(number("tan(0)"), 0.0);
    assert_eq!(number("asin(0)"), 0.0);
    assert_eq!(number("acos(1)"), 0.0);
    assert_eq!(number("atan(0)"), 0.0);
    assert_eq!(number("sqrt(pow(3, 2) + pow(4, 2))"), 5.0);
    assert!(number("sqrt(-1)").is_nan());
}

#[test]
fn rounding() {
    assert_eq!(number("round(2.4)"), 2.0);
    assert_eq!(number("round(2.5)"), 3.0);
    assert_eq!(number("round(-2.5)"), -2.0);
    assert_eq!(number("round(-2.6)"), -3.0);
    assert_eq!(number("roundToDecimalPlace(3.14159, 2)"), 3.14);
    assert_eq!(number("roundToDecimalPlace(1234, -2)"), 1200.0);
}

#[test]
fn min_and_max_are_variadic() {
    assert_eq!(number("max(1, 5, 3)"), 5.0);
    assert_eq!(number("min(4, -2, 8)"), -2.0);
    assert_eq!(number("max(7)"), 7.0);
    assert_eq!(number("max()"), f64::NEG_INFINITY);
    assert_eq!(number("min()"), f64::INFINITY);
    assert!(number("max(1, 0 / 0, 3)").is_nan());
}

#[test]
fn factorial() {
    assert_eq!(number("fact(0)"), 1.0);
    assert_eq!(number("fact(1)"), 1.0);
    assert_eq!(number("fact(5)"), 120.0);
    assert_eq!(number("fact(4.5)"), 24.0);
    assert!(number("fact(-1)").is_nan());
    assert_eq!(number("fact(1000)"), f64::INFINITY);
    assert_eq!(number("fact(1 / 0)"), f64::INFINITY);
}

#[test]
fn rand_is_in_unit_interval() {
    for _ in 0..100 {
        let r = number("rand()");
        assert!((0.0..1.0).contains(&r), "rand() gave {r}");
    }
}

#[test]
fn strings_coerce_in_arithmetic() {
    let mut session = Session::new();

    assert_eq!(eval_in(&mut session, "\"a\" + 1"), Some(Value::from("a1")));
    assert_eq!(eval_in(&mut session, "1 + \"a\""), Some(Value::from("1a")));
    assert_eq!(eval_in(&mut session, "\"\" + 1 / 0"), Some(Value::from("Infinity")));
    assert_eq!(number("\"3\" * \"4\""), 12.0);
    assert_eq!(number("-\"2\""), -2.0);
    assert_eq!(number("sqrt(\"16\")"), 4.0);
    assert!(number("\"x\" - 1").is_nan());
}

#[test]
fn unary_plus_does_not_coerce() {
    let mut session = Session::new();

    assert_eq!(eval_in(&mut session, "+\"5\""), Some(Value::from("5")));
}

#[test]
fn string_literals_have_no_escapes() {
    let mut session = Session::new();

    assert_eq!(eval_in(&mut session, "\"a\\\""), Some(Value::from("a\\")));
    assert_eq!(eval_in(&mut session, "\"  spaced  \""), Some(Value::from("  spaced  ")));
}

#[test]
fn print_joins_arguments_with_spaces() {
    let mut session = Session::new();

    assert_eq!(printed(&mut session, "print(\"a\", 1, 2.5)"), ["a 1 2.5"]);
    assert_eq!(printed(&mut session, "print()"), [""]);
    assert_eq!(eval_in(&mut session, "print(1)"), None);
}

#[test]
fn output_of_a_failing_line_is_discarded() {
    let mut session = Session::new();
    let mut host = BufferHost::default();

    assert!(session.evaluate("x = print(1)", &mut host).is_err());
    assert!(session.evaluate("print(2) + foo", &mut host).is_err());

    assert!(host.lines().is_empty());
    assert_eq!(session.variable("x"), None);
}

#[test]
fn help_lists_every_function_sorted() {
    let mut session = Session::new();

    let lines = printed(&mut session, "help()");
    assert_eq!(lines.len(), 1);

    let mut listing = lines[0].lines();
    assert_eq!(listing.next(), Some("Available functions:"));

    let names = listing.map(|l| l.split(':').next().unwrap_or_default().to_string())
                       .collect::<Vec<_>>();
    let mut expected = BUILTIN_FUNCTIONS.iter().map(ToString::to_string).collect::<Vec<_>>();
    expected.sort();
    assert_eq!(names, expected);
}

#[test]
fn help_is_idempotent() {
    let mut session = Session::new();

    let first = printed(&mut session, "help()");
    let second = printed(&mut session, "help()");
    assert_eq!(first, second);
}

#[test]
fn help_for_one_function() {
    let mut session = Session::new();

    assert_eq!(printed(&mut session, "help(sqrt)"), ["sqrt(x): Returns the square root of x."]);
    assert_eq!(printed(&mut session, "help(\"sqrt\")"),
               ["sqrt(x): Returns the square root of x."]);
    assert_eq!(printed(&mut session, "help(sprt)"),
               ["sprt(x) or sqrt(x): Returns the square root of x."]);
    assert_eq!(printed(&mut session, "help(help)"),
               ["help(): Lists available functions. help(func) or help('funcName'): Shows help \
                 for that function."]);
}

#[test]
fn log10_is_unreachable_by_name_but_documented() {
    assert_eq!(error("log10(100)"),
               EvalError::Syntax(SyntaxError::UnexpectedCharacter { found: '1', position: 3 }));

    let mut session = Session::new();
    assert_eq!(printed(&mut session, "help(\"log10\")"),
               ["log10(x): Returns the base-10 logarithm of x."]);
}

#[test]
fn help_for_unknown_name() {
    let mut session = Session::new();

    assert_eq!(printed(&mut session, "help(\"foo\")"), ["No help available for: foo"]);
    assert_eq!(printed(&mut session, "help(5)"), ["No help available for: 5"]);
}

#[test]
fn help_follows_variables_first() {
    let mut session = Session::new();
    eval_in(&mut session, "pow = \"sqrt\"");

    assert_eq!(printed(&mut session, "help(pow)"), ["sqrt(x): Returns the square root of x."]);
}

#[test]
fn version_prints_fixed_string() {
    let mut session = Session::new();

    assert_eq!(printed(&mut session, "version()"), ["ClassHub v1.1"]);
}

#[test]
fn clear_erases_host_output() {
    let mut session = Session::new();
    let mut host = BufferHost::default();

    session.evaluate("print(1)", &mut host).unwrap();
    session.evaluate("print(2)", &mut host).unwrap();
    assert_eq!(host.lines(), ["1", "2"]);

    assert_eq!(session.evaluate("clear()", &mut host).unwrap(), None);
    assert!(host.lines().is_empty());
}

#[test]
fn deep_nesting_does_not_overflow() {
    let depth = 20_000;
    let line = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(number(&line), 1.0);

    let line = format!("{}1", "-".repeat(depth));
    assert_eq!(number(&line), 1.0);
}
