use error_trace::{
    error_kind, ErrorKind, ErrorRecord, GenericError, LocatedErrorRecord, UNKNOWN_FILE,
    UNKNOWN_LINE,
};

error_kind!(pub SampleError in sample);

#[test]
fn default_record_is_generic_with_an_empty_message() {
    let record = ErrorRecord::default();
    assert_eq!(record.kind_id(), GenericError::id());
    assert_eq!(record.type_name(), "GenericError");
    assert_eq!(record.namespace_name(), "");
    assert!(record.message().is_empty());
}

#[test]
fn bare_messages_become_generic_records() {
    let record = ErrorRecord::from("out of range");
    assert!(record.is::<GenericError>());
    assert_eq!(record.message(), "out of range");

    let owned = ErrorRecord::from(String::from("owned message"));
    assert_eq!(owned.message(), "owned message");
}

#[test]
fn kind_factories_stamp_names_and_id() {
    let empty = SampleError::default_record();
    assert_eq!(empty.kind_id(), SampleError::id());
    assert_eq!(empty.namespace_name(), "sample");
    assert_eq!(empty.type_name(), "SampleError");
    assert!(empty.message().is_empty());

    let described = SampleError::record("A test message.");
    assert_eq!(described.message(), "A test message.");
    assert_eq!(described.kind_id(), SampleError::id());
}

#[test]
fn is_matches_by_kind_id() {
    let record = SampleError::default_record();
    assert!(record.is::<SampleError>());
    assert!(!record.is::<GenericError>());
}

#[test]
fn located_record_defaults_to_the_sentinels() {
    let located = LocatedErrorRecord::from_record("unlocated");
    assert_eq!(located.file_name(), UNKNOWN_FILE);
    assert_eq!(located.line(), UNKNOWN_LINE);
    assert_eq!(located.file_name(), "Unknown file");
    assert_eq!(located.line(), -1);
}

#[test]
fn located_record_derefs_to_the_wrapped_record() {
    let located = LocatedErrorRecord::new(SampleError::record("boom"), "lib.rs", 10);
    assert_eq!(located.message(), "boom");
    assert_eq!(located.kind_id(), SampleError::id());
    assert!(located.is::<SampleError>());
    assert_eq!(located.record().type_name(), "SampleError");
}

#[test]
fn display_includes_the_namespace_segment_when_present() {
    let located = LocatedErrorRecord::new(SampleError::record("boom"), "lib.rs", 10);
    let expected = format!(
        "SampleError from namespace sample (id = {})\n=== At lib.rs, on line 10\nboom\n",
        SampleError::id()
    );
    assert_eq!(format!("{located}"), expected);
}

#[test]
fn display_skips_namespace_and_message_when_empty() {
    let located = LocatedErrorRecord::new(GenericError::default_record(), "lib.rs", 11);
    let expected = "GenericError (id = 481049771)\n=== At lib.rs, on line 11\n";
    assert_eq!(format!("{located}"), expected);
}

#[test]
fn records_compare_by_value() {
    let a = SampleError::record("same");
    let b = SampleError::record("same");
    let c = SampleError::record("different");
    assert_eq!(a, b);
    assert_ne!(a, c);
}
