use error_trace::{error_kind, kind_id, ErrorKind, GenericError};

error_kind!(pub DeclName);

pub mod ns {
    use error_trace::error_kind;

    error_kind!(pub DeclName in ns);
}

error_kind!(pub ClassName {
    pub fn a_function() -> &'static str {
        "a string"
    }

    pub fn sum(a: i32, b: i32) -> i32 {
        a + b
    }
});

error_kind!(pub CustomError in app {
    pub fn new_error(message: &str) -> error_trace::ErrorRecord {
        <Self as error_trace::ErrorKind>::record(format!("My custom message : {message}"))
    }
});

#[test]
fn same_name_in_different_namespaces_gets_different_ids() {
    assert_ne!(DeclName::id(), ns::DeclName::id());
}

#[test]
fn ids_are_the_hash_of_the_qualifying_name() {
    assert_eq!(DeclName::id(), kind_id("", "DeclName"));
    assert_eq!(ns::DeclName::id(), kind_id("ns", "DeclName"));
    assert_eq!(CustomError::id(), kind_id("app", "CustomError"));
}

#[test]
fn declared_kinds_accept_extra_members() {
    assert_eq!(ClassName::a_function(), "a string");
    assert_eq!(ClassName::sum(1, 2), 3);
}

#[test]
fn custom_factories_build_on_the_defaults() {
    let record = CustomError::new_error("Test");
    assert!(record.message().contains("My custom message : Test"));
    assert!(record.is::<CustomError>());
    assert_eq!(record.namespace_name(), "app");
}

#[test]
fn default_factories_stamp_the_declared_names() {
    let described = ns::DeclName::record("A test message.");
    assert_eq!(described.message(), "A test message.");
    assert_eq!(described.kind_id(), ns::DeclName::id());
    assert_eq!(described.type_name(), "DeclName");
    assert_eq!(described.namespace_name(), "ns");

    let empty = DeclName::default_record();
    assert_eq!(empty.namespace_name(), "");
    assert!(empty.is::<DeclName>());
    assert!(!empty.is::<ns::DeclName>());
}

#[test]
fn the_sample_kind_set_is_pairwise_distinct() {
    let ids = [
        DeclName::id(),
        ns::DeclName::id(),
        ClassName::id(),
        CustomError::id(),
        GenericError::id(),
    ];
    for (i, left) in ids.iter().enumerate() {
        for (j, right) in ids.iter().enumerate() {
            if i != j {
                assert_ne!(left, right);
            }
        }
    }
}
