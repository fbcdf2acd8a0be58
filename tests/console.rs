use classhub::{
    console::{Console, ConsoleConfig, GREETING, Outcome},
    error::{EvalError, SemanticError},
    host::BufferHost,
    interpreter::value::core::Value,
};
use pretty_assertions::assert_eq;

fn console() -> Console<BufferHost> {
    Console::new(BufferHost::default(), ConsoleConfig::default())
}

#[test]
fn value_is_echoed_and_shown() {
    let mut console = console();

    let outcome = console.submit("2+2");

    assert_eq!(outcome, Outcome::Value(Value::Number(4.0)));
    assert_eq!(console.host().lines(), ["> 2+2", "= 4"]);
}

#[test]
fn blank_lines_are_ignored() {
    let mut console = console();

    assert_eq!(console.submit(""), Outcome::Ignored);
    assert_eq!(console.submit("   \t"), Outcome::Ignored);

    assert!(console.host().lines().is_empty());
}

#[test]
fn side_effects_show_no_result_line() {
    let mut console = console();

    assert_eq!(console.submit("print(\"hi\", 3)"), Outcome::Nothing);
    assert_eq!(console.host().lines(), ["> print(\"hi\", 3)", "hi 3"]);
}

#[test]
fn errors_are_prefixed_and_do_not_end_the_session() {
    let mut console = console();

    console.submit("x = 1");
    let outcome = console.submit("foo(x)");
    console.submit("x");

    let unknown = SemanticError::UnknownFunction { name: "foo".to_string() };
    assert_eq!(outcome, Outcome::Error(EvalError::Semantic(unknown)));
    assert_eq!(console.host().lines(),
               ["> x = 1", "= 1", "> foo(x)", "Error: Unknown function: foo", "> x", "= 1"]);
}

#[test]
fn syntax_errors_show_position() {
    let mut console = console();

    console.submit("(1 + 2");

    assert_eq!(console.host().lines(), ["> (1 + 2", "Error: Expected ')' at position 6"]);
}

#[test]
fn strings_and_special_numbers_display() {
    let mut console = console();

    console.submit("\"a\" + \"b\"");
    console.submit("1 / 0");
    console.submit("0 / 0");
    console.submit("2.50");

    assert_eq!(console.host().lines(),
               ["> \"a\" + \"b\"",
                "= ab",
                "> 1 / 0",
                "= Infinity",
                "> 0 / 0",
                "= NaN",
                "> 2.50",
                "= 2.5"]);
}

#[test]
fn clear_wipes_the_echo_too() {
    let mut console = console();

    console.submit("1");
    console.submit("clear()");

    assert!(console.host().lines().is_empty());
}

#[test]
fn time_command_toggles_timing_without_echo() {
    let mut console = console();

    assert_eq!(console.submit(":time on"), Outcome::Command);
    console.submit("1 + 1");
    assert_eq!(console.submit("  :time   off "), Outcome::Command);
    console.submit("2");

    let lines = console.host().lines();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "Flag 'flag.showExecutionTime' enabled");
    assert_eq!(lines[1..3], ["> 1 + 1", "= 2"]);
    assert!(lines[3].starts_with("(Evaluated in "), "got {}", lines[3]);
    assert_eq!(lines[4..], ["Flag 'flag.showExecutionTime' disabled", "> 2", "= 2"]);
    assert!(!console.config().show_execution_time);
}

#[test]
fn malformed_time_commands_are_evaluated() {
    let mut console = console();

    assert!(matches!(console.submit(":time"), Outcome::Error(_)));
    assert!(matches!(console.submit(":time maybe"), Outcome::Error(_)));
    assert!(matches!(console.submit(":time on now"), Outcome::Error(_)));
    assert!(!console.config().show_execution_time);
}

#[test]
fn control_sequences_are_rejected_as_input() {
    let mut console = console();
    console.submit("x = 2");

    let outcome = console.submit("\u{1b}[A");

    assert!(matches!(outcome, Outcome::Error(EvalError::Syntax(_))));
    assert_eq!(console.session().variable("x"), Some(&Value::Number(2.0)));
}

#[test]
fn execution_time_is_reported_when_enabled() {
    let mut console = Console::new(BufferHost::default(),
                                   ConsoleConfig { show_execution_time: true });

    console.submit("1 + 1");

    let lines = console.host().lines();
    assert_eq!(lines.len(), 3);
    assert!(lines[2].starts_with("(Evaluated in "), "got {}", lines[2]);
    assert!(lines[2].ends_with("ms)"), "got {}", lines[2]);
}

#[test]
fn execution_time_flag_announces_changes() {
    let mut console = console();

    console.set_show_execution_time(true);
    assert!(console.config().show_execution_time);
    console.set_show_execution_time(false);
    assert!(!console.config().show_execution_time);

    assert_eq!(console.host().lines(),
               ["Flag 'flag.showExecutionTime' enabled", "Flag 'flag.showExecutionTime' disabled"]);
}

#[test]
fn greeting_points_at_help() {
    let mut console = console();

    console.greet();

    assert_eq!(console.host().lines(), [GREETING]);
}

#[test]
fn session_keeps_variables_between_submissions() {
    let mut console = console();

    console.submit("radius = 2");
    console.submit("area = 3 * radius * radius");

    assert_eq!(console.session().variable("area"), Some(&Value::Number(12.0)));
}
