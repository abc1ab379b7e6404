use falta::{impl_fields, Args, Factory, Fields};

struct Circle {
    radius: f64,
}

impl_fields!(Circle { "Radius" => radius });

struct Upload {
    name: String,
    size: u64,
    resumable: bool,
}

impl_fields!(Upload {
    "Name" => name,
    "Size" => size,
    "Resumable" => resumable,
});

#[test]
fn impl_fields_binds_struct_fields() {
    let circle = Circle { radius: 2.5 };

    assert_eq!(circle.field("Radius").as_deref(), Some("2.5"));
    assert_eq!(circle.field("radius"), None);
    assert!(circle.positional().is_empty());
}

#[test]
fn struct_factory_renders_every_field() {
    let rejected = Factory::<Upload>::new("{{.Name}} ({{.Size}}B, resumable={{.Resumable}})").unwrap();
    let upload = Upload { name: "a.bin".into(), size: 42, resumable: false };

    let err = rejected.error(&upload).unwrap();
    assert_eq!(err.message(), "a.bin (42B, resumable=false)");
}

#[cfg(feature = "std")]
#[test]
fn hash_maps_are_records() {
    use std::collections::HashMap;

    let mut input = HashMap::new();
    input.insert("host", "db-1");

    let down = Factory::<HashMap<&str, &str>>::new("{{.host}} is down").unwrap();
    assert_eq!(down.error(&input).unwrap().message(), "db-1 is down");
}

#[test]
fn args_expose_indexed_fields() {
    let args = Args::from(["a", "b"]);

    assert_eq!(args.field("1").as_deref(), Some("b"));
    assert_eq!(args.field("2"), None);
    assert_eq!(args.field("x"), None);
    assert_eq!(args.positional().len(), 2);
}
