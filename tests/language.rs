use std::collections::VecDeque;
use std::fs;

use jerboa::{
    ast::{BinaryOperator, Expr, Stmt, UnaryOperator},
    error::ParseError,
    interpreter::{lexer::Category, state::State},
};
use walkdir::WalkDir;

/// Runs a program with no input and returns the final environment and
/// the captured output.
fn run_program(source: &str) -> (State, String) {
    run_with_input(source, &[])
}

/// Runs a program feeding `lines` to `readnum` one by one; reads past
/// the end of the list yield empty lines.
fn run_with_input(source: &str, lines: &[&str]) -> (State, String) {
    let mut queued: VecDeque<String> = lines.iter().map(|line| (*line).to_string()).collect();
    let mut output = String::new();
    let state = jerboa::run(source,
                            move || queued.pop_front().unwrap_or_default(),
                            |text| output.push_str(text))
        .unwrap_or_else(|e| panic!("Script failed to parse: {e}"));
    (state, output)
}

fn assert_output(source: &str, expected: &str) {
    let (_, output) = run_program(source);
    assert_eq!(output, expected, "wrong output for: {source}");
}

fn assert_parse_failure(source: &str) {
    if jerboa::parse(source).is_ok() {
        panic!("Script parsed but was expected to fail: {source}")
    }
}

#[test]
fn hello_world() {
    assert_output(r#"write("Hello, world!", cr)"#, "Hello, world!\n");
}

#[test]
fn arithmetic_and_assignment() {
    let (state, output) = run_program("a = 3 + 4 * 2  write(a, cr)");
    assert_eq!(output, "11\n");
    assert_eq!(state.vars["a"], 11);
    assert_eq!(state.vars.len(), 1);
}

#[test]
fn minus_after_a_value_is_subtraction() {
    assert_output("a = 2  b = a -1  write(b, cr)", "1\n");
    assert_output("a = 2  b = a +1  write(b, cr)", "3\n");
}

#[test]
fn signed_literals_where_no_value_precedes() {
    let (state, output) = run_program("a = -3  b = (-3) * -2  write(a, \" \", b, cr)");
    assert_eq!(output, "-3 6\n");
    assert_eq!(state.vars["a"], -3);
    assert_eq!(state.vars["b"], 6);
}

#[test]
fn array_elements_default_to_zero() {
    assert_output("x[1] = 5  write(x[1], \" \", x[2], cr)", "5 0\n");
}

#[test]
fn while_loop_counts() {
    assert_output("i = 0  while i < 3  write(i)  i = i + 1  end  write(cr)",
                  "012\n");
}

#[test]
fn functions_share_the_global_environment() {
    assert_output("def f() n = n + 1 end  n = 0  f() f() f()  write(n, cr)",
                  "3\n");
}

#[test]
fn function_call_value_comes_from_return() {
    assert_output("def f() return 7 end  x = f() + 1  write(x, cr)", "8\n");
}

#[test]
fn function_without_return_yields_zero() {
    assert_output("def f() n = 1 end  x = f()  write(x, cr)", "0\n");
}

#[test]
fn undefined_function_is_a_no_op() {
    assert_output("f()  x = g()  write(x, \" \", 1, cr)", "0 1\n");
}

#[test]
fn return_unwinds_only_the_current_function() {
    let source = "
        def find()
            i = 0
            while 1
                i = i + 1
                if i == 3
                    return i
                end
            end
        end
        n = 0
        k = 0
        while n < 2
            k = k + find()
            n = n + 1
        end
        write(k, cr)
    ";
    assert_output(source, "6\n");
}

#[test]
fn top_level_return_terminates_the_program() {
    assert_output("write(1) return 99 write(2)", "1");
}

#[test]
fn unassigned_names_read_as_zero() {
    assert_output("write(x, \" \", y[5], cr)", "0 0\n");
}

#[test]
fn division_and_modulus_truncate_and_never_trap() {
    assert_output("write(7 / 2, \" \", -7 / 2, \" \", 7 % 3, \" \", -7 % 3, cr)",
                  "3 -3 1 -1\n");
    assert_output("write(7 / 0, \" \", 7 % 0, cr)", "0 0\n");
}

#[test]
fn comparisons_produce_one_or_zero() {
    assert_output("write(1 < 2, 2 <= 2, 3 > 4, 4 >= 5, 1 == 1, 1 != 1, cr)",
                  "110010\n");
}

#[test]
fn logical_operators_use_the_nonzero_convention() {
    assert_output("write(0 && 1, \" \", 2 && 3, \" \", 0 || 0, \" \", 0 || 9, \" \", !0, \" \", !5, cr)",
                  "0 1 0 1 1 0\n");
}

#[test]
fn unary_plus_is_the_identity() {
    let program = jerboa::parse("b = +x").unwrap();
    let Stmt::Assign { value, .. } = &program.statements[0] else {
        panic!("expected an assignment")
    };
    let Expr::Unary { op, expr } = value else {
        panic!("expected a unary expression")
    };
    assert_eq!(*op, UnaryOperator::Plus);
    assert_eq!(**expr, Expr::Variable { name: "x".to_string() });

    assert_output("x = 5  b = +x  write(b, \" \", +(3 + 4), cr)", "5 7\n");
}

#[test]
fn bang_negates_a_whole_comparison() {
    assert_output("x = !1 == 0  write(x, cr)", "1\n");
    assert_output("write(!1 == 1, cr)", "0\n");
}

#[test]
fn elseif_chains_pick_the_first_nonzero_guard() {
    let source = "
        x = 2
        if x == 1
            write(\"one\")
        elseif x == 2
            write(\"two\")
        elseif x == 3
            write(\"three\")
        else
            write(\"many\")
        end
        write(cr)
    ";
    assert_output(source, "two\n");

    let fallback = "x = 9 if x == 1 write(\"one\") else write(\"many\") end write(cr)";
    assert_output(fallback, "many\n");
}

#[test]
fn readnum_coerces_lines_to_integers() {
    let (_, output) = run_with_input("a = readnum() b = readnum() c = readnum() write(a + b + c, cr)",
                                     &["3", "4.9", "junk"]);
    assert_eq!(output, "7\n");
}

#[test]
fn string_literals_accept_both_quote_styles() {
    assert_output("write('single', \" and \", \"double\", cr)", "single and double\n");
}

#[test]
fn comments_and_blank_lines_are_skipped() {
    let source = "
        # Set things up.
        a = 1   # trailing comment
        # write(99, cr) stays commented out

        write(a, cr)
    ";
    assert_output(source, "1\n");
}

#[test]
fn empty_programs_are_valid() {
    assert_output("", "");
    let (state, output) = run_program("   # nothing but a comment\n");
    assert_eq!(output, "");
    assert_eq!(state.to_string(), "{ v: {}, a: {}, f: {} }");
}

#[test]
fn lexeme_texts_reproduce_the_source_without_trivia() {
    let source = "a = 1 # trailing\nwhile a write('x') end";
    let joined: String = jerboa::lex(source).map(|lexeme| lexeme.text).collect();
    assert_eq!(joined, "a=1whileawrite('x')end");
}

#[test]
fn every_byte_is_classified() {
    let lexemes: Vec<_> = jerboa::lex("a ~ $ 'oops\nb = 1").collect();
    let texts: Vec<&str> = lexemes.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, ["a", "~", "$", "'oops\n", "b", "=", "1"]);

    let malformed: Vec<_> = lexemes.iter()
                                   .filter(|l| l.category == Category::Malformed)
                                   .collect();
    assert_eq!(malformed.len(), 3);
}

#[test]
fn stray_ampersand_and_pipe_fall_back_to_punctuation() {
    let lexemes: Vec<_> = jerboa::lex("& | && ||").collect();
    let texts: Vec<&str> = lexemes.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, ["&", "|", "&&", "||"]);

    assert_eq!(lexemes[0].category, Category::Punctuation);
    assert_eq!(lexemes[1].category, Category::Punctuation);
    assert_eq!(lexemes[2].category, Category::Operator);
    assert_eq!(lexemes[3].category, Category::Operator);
}

#[test]
fn signed_literal_munching_consults_the_previous_token() {
    let texts = |source: &str| -> Vec<String> {
        jerboa::lex(source).map(|lexeme| lexeme.text).collect()
    };

    assert_eq!(texts("x = -1"), ["x", "=", "-1"]);
    assert_eq!(texts("x-1"), ["x", "-", "1"]);
    assert_eq!(texts("f() -1"), ["f", "(", ")", "-", "1"]);
    assert_eq!(texts("x[1] -2"), ["x", "[", "1", "]", "-", "2"]);
    assert_eq!(texts("true -1"), ["true", "-", "1"]);
    assert_eq!(texts("(-1)"), ["(", "-1", ")"]);
    assert_eq!(texts("1 -2 -3"), ["1", "-", "2", "-", "3"]);
}

#[test]
fn exponents_stop_before_a_sign_without_digits() {
    let texts = |source: &str| -> Vec<String> {
        jerboa::lex(source).map(|lexeme| lexeme.text).collect()
    };

    assert_eq!(texts("2e3 2E+4"), ["2e3", "2E+4"]);
    assert_eq!(texts("2e+"), ["2", "e", "+"]);
    assert_eq!(texts("1e2e3"), ["1e2", "e3"]);
}

#[test]
fn operator_chains_fold_to_the_left() {
    let program = jerboa::parse("r = 10 - 4 - 3").unwrap();
    let Stmt::Assign { value, .. } = &program.statements[0] else {
        panic!("expected an assignment")
    };
    let Expr::Binary { left, op, right } = value else {
        panic!("expected a binary expression")
    };
    assert_eq!(*op, BinaryOperator::Sub);
    assert_eq!(**right, Expr::Number { value: 3 });

    let Expr::Binary { left: inner_left,
                       op: inner_op,
                       right: inner_right, } = &**left
    else {
        panic!("expected a nested binary expression")
    };
    assert_eq!(*inner_op, BinaryOperator::Sub);
    assert_eq!(**inner_left, Expr::Number { value: 10 });
    assert_eq!(**inner_right, Expr::Number { value: 4 });

    let (state, _) = run_program("r = 10 - 4 - 3");
    assert_eq!(state.vars["r"], 3);
}

#[test]
fn parentheses_override_precedence() {
    let (state, _) = run_program("a = 2 + 3 * 4  b = (2 + 3) * 4");
    assert_eq!(state.vars["a"], 14);
    assert_eq!(state.vars["b"], 20);
}

#[test]
fn malformed_programs_do_not_parse() {
    assert_parse_failure("write()");
    assert_parse_failure("write(");
    assert_parse_failure("if x write(1)");
    assert_parse_failure("def f() write(1)");
    assert_parse_failure("def () end");
    assert_parse_failure("x");
    assert_parse_failure("a = ");
    assert_parse_failure("a[1] 2");
    assert_parse_failure("a = = 1");
    assert_parse_failure("&& 1");
    assert_parse_failure("write('unterminated)");
}

#[test]
fn leftover_input_is_reported_as_trailing_tokens() {
    assert!(matches!(jerboa::parse("a = 1 end"),
                     Err(ParseError::UnexpectedTrailingTokens { .. })));
    assert!(matches!(jerboa::parse("a = 1 else"),
                     Err(ParseError::UnexpectedTrailingTokens { .. })));
    assert!(matches!(jerboa::parse("a ="),
                     Err(ParseError::UnexpectedEndOfInput { .. })));
}

#[test]
fn reinterpreting_converges_to_a_fixed_point() {
    let program = jerboa::parse("a = 5 b = a * 2 c = b - a").unwrap();
    let mut state = State::new();
    jerboa::interp(&program, &mut state, String::new, |_| ());
    let after_first = state.clone();
    jerboa::interp(&program, &mut state, String::new, |_| ());
    assert_eq!(state, after_first);
}

#[test]
fn printed_programs_parse_back_to_the_same_tree() {
    let sources = [r#"write("Hello, world!", cr)"#,
                   "a = 3 + 4 * 2  write(a, cr)",
                   "x[1] = 5  write(x[1], ' ', x[2], cr)",
                   "i = 0  while i < 3  write(i)  i = i + 1  end",
                   "def f() n = n + 1 end  f()",
                   "if a == 1 write('one') elseif a == 2 write('two') else write('many') end",
                   "b = -(a) + x  c = readnum() && !f()",
                   "p = +q - -r",
                   "q = (1 < 2) || (3 >= 4 - 5 % 2)"];

    for source in sources {
        let parsed = jerboa::parse(source).unwrap_or_else(|e| panic!("{source}: {e}"));
        let printed = parsed.to_string();
        let reparsed = jerboa::parse(&printed).unwrap_or_else(|e| panic!("{printed}: {e}"));
        assert_eq!(parsed, reparsed, "round trip changed: {source} -> {printed}");
    }
}

#[test]
fn state_dumps_are_deterministic_and_sorted() {
    let (state, _) = run_program("b = 2 a = 1 x[2] = 20 x[1] = 10 def inc() n = n + 1 end");
    assert_eq!(state.to_string(),
               "{ v: {a: 1, b: 2}, a: {x: {1: 10, 2: 20}}, f: {inc: def inc() n = (n + 1) end} }");
}

#[test]
fn script_corpus_matches_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "jb"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = fs::read_to_string(path.with_extension("out"))
            .unwrap_or_else(|e| panic!("Missing expected output for {path:?}: {e}"));

        let (_, output) = run_program(&source);
        assert_eq!(output, expected, "output mismatch for {path:?}");
        count += 1;
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}
