use endpoint_binder::{
    endpoint::{
        args::{EndpointArgs, TiledArgs, is_endpoint_args},
        endpoint_model::{EndpointDescriptor, EndpointKind, EndpointPath, QueryParam},
        synth::{make_endpoint, make_tiled_endpoint, synthesize},
    },
    form::reader::FormSnapshot,
};
use url::Url;

mod common;

fn base() -> Url {
    Url::parse(common::BASE).unwrap()
}

fn image_snapshot(extra: &[(&str, &str)]) -> FormSnapshot {
    let mut pairs = vec![
        ("width", "300"),
        ("height", "250"),
        ("bg", "fec"),
        ("fg", "000"),
        ("fmt", "png"),
        ("imageText", ""),
        ("font", ""),
        ("seed", ""),
        ("randomText", ""),
    ];
    for &(key, value) in extra {
        match pairs.iter_mut().find(|pair| pair.0 == key) {
            Some(pair) => pair.1 = value,
            None => pairs.push((key, value)),
        }
    }
    pairs.into_iter().collect()
}

fn render(snapshot: &FormSnapshot) -> String {
    synthesize(EndpointKind::Image, snapshot)
        .expect("snapshot has every required key")
        .path_and_query(&base())
}

// =========================================================================
// Image endpoint
// =========================================================================

#[test]
fn required_fields_only_gives_bare_path() {
    assert_eq!(render(&image_snapshot(&[])), "/api/300x250/fec/000/png/");
}

#[test]
fn text_and_seed_are_appended_in_order() {
    let snapshot = image_snapshot(&[("imageText", "Hello World"), ("seed", "42")]);
    assert_eq!(render(&snapshot), "/api/300x250/fec/000/png/?text=Hello+World&seed=42");
}

#[test]
fn random_text_flag_is_key_only() {
    let snapshot = image_snapshot(&[("randomText", "on")]);
    assert_eq!(render(&snapshot), "/api/300x250/fec/000/png/?random_text");
}

#[test]
fn query_order_is_fixed_regardless_of_snapshot_order() {
    let snapshot = image_snapshot(&[
        ("randomText", "on"),
        ("seed", "7"),
        ("font", "lobster"),
        ("imageText", "hi"),
    ]);

    let descriptor = synthesize(EndpointKind::Image, &snapshot).unwrap();
    let keys: Vec<&str> = descriptor.query.iter().map(QueryParam::key).collect();
    assert_eq!(keys, ["text", "font", "seed", "random_text"]);
    assert_eq!(
        descriptor.path_and_query(&base()),
        "/api/300x250/fec/000/png/?text=hi&font=lobster&seed=7&random_text"
    );
}

#[test]
fn empty_optional_values_are_omitted() {
    let descriptor = synthesize(EndpointKind::Image, &image_snapshot(&[("font", "lobster")])).unwrap();
    assert_eq!(descriptor.query, vec![QueryParam::Font("lobster".into())]);
    assert!(!descriptor.has_param("text"));
    assert!(!descriptor.has_param("seed"));
    assert!(!descriptor.has_param("random_text"));
}

#[test]
fn synthesis_is_idempotent() {
    let snapshot = image_snapshot(&[("imageText", "a&b=c"), ("seed", "x y")]);
    let first = synthesize(EndpointKind::Image, &snapshot).unwrap();
    let second = synthesize(EndpointKind::Image, &snapshot).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.to_url(&base()), second.to_url(&base()));
}

#[test]
fn query_values_are_form_encoded() {
    let snapshot = image_snapshot(&[("imageText", "a&b=c")]);
    assert_eq!(render(&snapshot), "/api/300x250/fec/000/png/?text=a%26b%3Dc");
}

#[test]
fn url_resolves_against_location_origin() {
    let base = Url::parse("https://img.example.com/builder/index.html?x=1#top").unwrap();
    let descriptor = synthesize(EndpointKind::Image, &image_snapshot(&[("seed", "1")])).unwrap();

    assert_eq!(
        descriptor.to_url(&base).as_str(),
        "https://img.example.com/api/300x250/fec/000/png/?seed=1"
    );
    assert_eq!(descriptor.path_and_query(&base), "/api/300x250/fec/000/png/?seed=1");
}

#[test]
fn make_endpoint_from_args() {
    let args = EndpointArgs {
        width: "638".into(),
        height: "328".into(),
        bg: "cef".into(),
        fg: "555".into(),
        fmt: "webp".into(),
        image_text: String::new(),
        font: String::new(),
        seed: String::new(),
        random_text: true,
    };

    let descriptor = make_endpoint(&args);
    assert_eq!(
        descriptor.path.to_path_string(),
        "/api/638x328/cef/555/webp/"
    );
    assert_eq!(descriptor.query, vec![QueryParam::RandomText]);
}

// =========================================================================
// Shape guard
// =========================================================================

#[test]
fn missing_required_key_yields_nothing() {
    for missing in ["width", "height", "bg", "fg", "fmt", "imageText", "font"] {
        let snapshot: FormSnapshot = image_snapshot(&[])
            .iter()
            .filter(|(k, _)| *k != missing)
            .collect();

        assert!(!is_endpoint_args(&snapshot), "{missing} should be required");
        assert_eq!(synthesize(EndpointKind::Image, &snapshot), None);
    }
}

#[test]
fn seed_and_random_text_are_optional_keys() {
    let snapshot: FormSnapshot = image_snapshot(&[])
        .iter()
        .filter(|(k, _)| *k != "seed" && *k != "randomText")
        .collect();

    let args = EndpointArgs::from_snapshot(&snapshot).expect("optional keys may be absent");
    assert!(args.seed.is_empty());
    assert!(!args.random_text);
}

// =========================================================================
// Tiled endpoint
// =========================================================================

fn tiled_snapshot(colors: &str) -> FormSnapshot {
    [
        ("width", "300"),
        ("height", "250"),
        ("cols", "4"),
        ("rows", "3"),
        ("fmt", "png"),
        ("colors", colors),
    ]
    .into_iter()
    .collect()
}

#[test]
fn tiled_path_and_repeated_colors() {
    let descriptor = synthesize(EndpointKind::Tiled, &tiled_snapshot("fff, 000")).unwrap();

    assert_eq!(
        descriptor.path,
        EndpointPath::Tiled {
            width: "300".into(),
            height: "250".into(),
            cols: "4".into(),
            rows: "3".into(),
            fmt: "png".into(),
        }
    );
    assert_eq!(
        descriptor.path_and_query(&base()),
        "/api/tiled/300x250/4/3/png/?colors=fff&colors=000"
    );
}

#[test]
fn blank_colors_are_dropped() {
    let args = TiledArgs::from_snapshot(&tiled_snapshot(" , abc,,")).unwrap();
    let descriptor = make_tiled_endpoint(&args);
    assert_eq!(descriptor.query, vec![QueryParam::Colors("abc".into())]);

    let empty = synthesize(EndpointKind::Tiled, &tiled_snapshot("")).unwrap();
    assert_eq!(empty.path_and_query(&base()), "/api/tiled/300x250/4/3/png/");
}

#[test]
fn image_snapshot_does_not_shape_as_tiled() {
    assert_eq!(synthesize(EndpointKind::Tiled, &image_snapshot(&[])), None);
    assert_eq!(synthesize(EndpointKind::Image, &tiled_snapshot("fff")), None);
}

#[test]
fn descriptor_without_query_has_no_question_mark() {
    let descriptor = EndpointDescriptor::new(EndpointPath::Image {
        width: "1".into(),
        height: "1".into(),
        bg: "000".into(),
        fg: "fff".into(),
        fmt: "gif".into(),
    });

    let url = descriptor.to_url(&base());
    assert_eq!(url.query(), None);
    assert_eq!(url.as_str(), "http://localhost:8080/api/1x1/000/fff/gif/");
}
