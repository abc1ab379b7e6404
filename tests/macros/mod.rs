use falta::{args, falta, impl_fields, m, Arg, Args, Factory, M};

#[test]
fn args_macro_converts_each_value() {
    let list = args!["disk", 3u8, -2i64, 1.5f32, false, 'x', String::from("owned")];

    assert_eq!(
        list.as_slice(),
        &[
            Arg::Str("disk".into()),
            Arg::Uint(3),
            Arg::Int(-2),
            Arg::Float(1.5),
            Arg::Bool(false),
            Arg::Char('x'),
            Arg::Str("owned".into()),
        ]
    );
    assert!(args![].is_empty());
    assert_eq!(args![1, 2,], Args::from([1, 2]));
}

#[test]
fn falta_macro_renders_or_yields_archetype() {
    let described = Factory::newf("the %s is %s");

    assert_eq!(falta!(described, "dog", "black").message(), "the dog is black");
    assert!(falta!(described).is_archetype());
    assert!(described.is(&falta!(&described, "cat", "white")));
}

#[test]
fn m_macro_builds_records() {
    let record: M = m! { "code" => 503, "reason" => "down", };

    assert_eq!(record.len(), 2);
    assert_eq!(record["code"], Arg::Int(503));
    assert!(m! {}.is_empty());
}

#[test]
fn m_macro_accepts_owned_keys() {
    let key = String::from("tenant");
    let record = m! { key => "acme" };

    assert_eq!(record["tenant"], Arg::Str("acme".into()));
}

struct Lease {
    holder: &'static str,
    ttl_secs: u32,
}

impl_fields!(Lease { "Holder" => holder, "TTL" => ttl_secs });

#[test]
fn impl_fields_drives_named_factories() {
    let expired = Factory::<Lease>::new("lease held by {{.Holder}} expired after {{.TTL}}s").unwrap();
    let err = expired.error(&Lease { holder: "node-2", ttl_secs: 30 }).unwrap();

    assert_eq!(err.message(), "lease held by node-2 expired after 30s");
}
