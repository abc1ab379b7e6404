use std::sync::LazyLock;

use falta::prelude::*;

struct Circle {
    radius: f64,
}

impl_fields!(Circle { "Radius" => radius });

static INVALID_CIRCLE: LazyLock<Factory<Circle>> = LazyLock::new(|| {
    Factory::new("invalid circle: radius ({{.Radius}}) <= 0").expect("valid template")
});

static READ_FAILED: LazyLock<Factory> = LazyLock::new(|| Factory::newf("cannot read %q"));

static UNAVAILABLE: LazyLock<Factory<M>> = LazyLock::new(|| {
    let code = Factory::<M>::new("service unavailable: [code={{.code}}]").expect("valid template");
    let reason = Factory::new("because {{.reason}}").expect("valid template");
    code.extend(&reason).expect("same dialect")
});

fn check_circle(circle: &Circle) -> FaltaResult<()> {
    if circle.radius <= 0.0 {
        return Err(INVALID_CIRCLE.error(circle).expect("record has every field"));
    }
    Ok(())
}

fn read_config(path: &str) -> FaltaResult<String> {
    falta!(READ_FAILED, path).capture_with(|| std::fs::read_to_string(path))
}

fn main() {
    println!("Running Quick Start examples...");

    // 1. Named templates over a record
    println!("\n1. Named template:");
    if let Err(err) = check_circle(&Circle { radius: -1.0 }) {
        println!("{err}");
        println!("produced by INVALID_CIRCLE: {}", INVALID_CIRCLE.is(&err));
    }

    // 2. Printf-style factory capturing an I/O error
    println!("\n2. Capture:");
    match read_config("does-not-exist.toml") {
        Ok(_) => println!("Success!"),
        Err(err) => {
            println!("{err:#}");
            println!("produced by READ_FAILED: {}", err.produced_by(&*READ_FAILED));
        },
    }

    // 3. Annotation keeps identity
    println!("\n3. Annotate:");
    let annotated = READ_FAILED
        .archetype()
        .annotate("config is required at startup")
        .expect("plain text");
    println!("{annotated}");
    println!("matches archetype: {}", is_match(&annotated, &READ_FAILED.archetype()));

    // 4. Extended factories match both parents
    println!("\n4. Extend:");
    let err = UNAVAILABLE
        .error(&m! { "code" => 503, "reason" => "down" })
        .expect("record has every field");
    println!("{err}");
    println!("identity: {}", err.spec());
}
