use error_trace::{err_add, error_kind, ErrorKind, ErrorTrace, Outcome};

mod macros;
mod types;

error_kind!(pub DivisionByZeroError);

error_kind!(pub NegativeNumberError in math {
    pub fn for_value(value: i32) -> error_trace::ErrorRecord {
        <Self as error_trace::ErrorKind>::record(format!(
            "A positive value is expected (value = {value})."
        ))
    }
});

#[derive(Debug, Clone, PartialEq)]
struct Complex {
    r: f64,
    i: f64,
}

#[test]
fn renders_the_two_entry_stack_trace() {
    let mut err = ErrorTrace::new();
    err.append("Failed to do something 0", "x.cpp", 5);
    err.append("Failed to do something 1", "x.cpp", 5);

    let expected = "=============== STACK TRACE (2)\n\n\
                    =(1)= first -> GenericError (id = 481049771)\n\
                    === At x.cpp, on line 5\n\
                    Failed to do something 0\n\n\
                    =(2)= Then  -> GenericError (id = 481049771)\n\
                    === At x.cpp, on line 5\n\
                    Failed to do something 1\n\n\
                    =============== 2 errors shown\n";
    assert_eq!(err.render(), expected);
}

#[test]
fn concatenation_merges_sub_operation_errors() {
    fn do_something(index: usize) -> ErrorTrace {
        let mut err = ErrorTrace::new();
        err_add!(err, format!("Failed to do something {index}"));
        err
    }

    let mut err = ErrorTrace::new();
    err += do_something(0);
    err += do_something(1);

    assert_eq!(err.len(), 2);
    let rendered = err.render();
    assert!(rendered.contains("=(1)= first -> "));
    assert!(rendered.contains("=(2)= Then  -> "));
    assert!(rendered.contains("Failed to do something 0"));
    assert!(rendered.ends_with("=============== 2 errors shown\n"));
}

fn square_divide(a: i32, b: f64, err: &mut ErrorTrace) -> f64 {
    if a < 0 {
        err_add!(err, NegativeNumberError::for_value(a));
        return -1.0;
    }
    if b == 0.0 {
        err_add!(err, DivisionByZeroError::default_record());
        return -1.0;
    }
    (a as f64).sqrt() / b
}

#[test]
fn kind_checks_follow_the_last_recorded_error() {
    let mut err = ErrorTrace::new();

    square_divide(-2, 4.0, &mut err);
    assert!(err.is::<NegativeNumberError>());
    assert!(!err.is::<DivisionByZeroError>());

    square_divide(4, 0.0, &mut err);
    assert!(err.is::<DivisionByZeroError>());
    assert!(!err.is::<NegativeNumberError>());

    assert_eq!(err.len(), 2);
    assert!(err.entries()[0].is::<NegativeNumberError>());
}

#[test]
fn callees_that_nobody_listens_to_write_into_the_sink() {
    fn do_something(err: &mut ErrorTrace) {
        err_add!(err, "An error.");
    }

    let mut ignored = ErrorTrace::sink();
    do_something(&mut ignored);

    assert!(!ignored.has_errors());
    assert_eq!(ignored.render(), "No errors to show.");
}

#[test]
fn failed_outcome_reports_the_recorded_message() {
    let outcome: Outcome<Complex> = Outcome::failure_with("Invalid number.", "r.cpp", 12);

    assert!(outcome.has_error());
    assert!(!outcome.is_success());
    assert_eq!(outcome.error_trace().last().message(), "Invalid number.");

    let fault = outcome.try_value().unwrap_err();
    assert!(fault.rendered_trace().contains("Invalid number."));
}

#[test]
#[should_panic(expected = "Invalid number.")]
fn value_on_a_failed_outcome_panics_with_the_rendered_trace() {
    let outcome: Outcome<Complex> = Outcome::failure_with("Invalid number.", "r.cpp", 12);
    let _ = outcome.value();
}

#[test]
fn successful_outcome_exposes_the_constructed_value() {
    let outcome = Outcome::success_with(|| Complex { r: 42.0, i: 12.0 });

    assert!(!outcome.has_error());
    assert!(outcome.is_success());
    assert_eq!(outcome.r, 42.0);
    assert_eq!(outcome.i, 12.0);
    assert!(outcome.try_error_trace().is_err());
}
