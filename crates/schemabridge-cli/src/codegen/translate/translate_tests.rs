#![allow(non_snake_case)]

use super::*;
use crate::codegen::artifact::ArtifactKind;
use crate::codegen::sink::MemorySink;
use schemabridge_core::{Doc, Field, FieldKind, Variant};

fn color_module() -> SchemaModule {
    SchemaModule::new(vec![
        Declaration::new(
            "color",
            SchemaType::sum(vec![
                Variant::nullary("Red"),
                Variant::unary("Rgb", SchemaType::named("rgb_value")),
            ]),
        )
        .with_doc(Doc::text("A color.")),
        Declaration::new(
            "rgb_value",
            SchemaType::record(vec![
                Field::required("r", SchemaType::int()),
                Field::required("g", SchemaType::int()),
                Field::required("b", SchemaType::int()),
            ]),
        ),
    ])
}

fn config() -> GeneratorConfig {
    GeneratorConfig {
        package: "com.example".to_string(),
        ..GeneratorConfig::default()
    }
}

#[test]
fn translate_module___emits_support_then_declarations_in_order() {
    let mut sink = MemorySink::new();

    let report = translate_module(&color_module(), &config(), &mut sink).unwrap();

    assert_eq!(
        report.artifact_names(),
        vec![
            "JsonSerializable",
            "Util",
            "InvalidTagException",
            "Color",
            "Red",
            "Rgb",
            "ColorFactory",
            "RgbValue",
        ]
    );
    assert_eq!(sink.names(), report.artifact_names());
}

#[test]
fn translate_module___records_subtype_links() {
    let mut sink = MemorySink::new();

    let report = translate_module(&color_module(), &config(), &mut sink).unwrap();

    assert_eq!(
        report.subtype_links,
        vec![
            ("Red".to_string(), "Color".to_string()),
            ("Rgb".to_string(), "Color".to_string()),
        ]
    );
}

#[test]
fn translate_module___forward_reference___resolves() {
    let mut sink = MemorySink::new();

    translate_module(&color_module(), &config(), &mut sink).unwrap();

    let rgb = sink.get("Rgb").unwrap();
    assert!(rgb.contains("public final RgbValue value;"));
    assert!(rgb.contains("this.value = new RgbValue(_v);"));
}

#[test]
fn translate_module___files_carry_header_and_package() {
    let mut sink = MemorySink::new();

    translate_module(&color_module(), &config(), &mut sink).unwrap();

    let factory = sink.get("ColorFactory").unwrap();
    assert!(factory.starts_with(
        "// Automatically generated by schemabridge. Do not edit.\n\npackage com.example;\n\n"
    ));
    assert!(factory.contains("import org.json.JSONArray;\n"));
    assert!(factory.contains("import org.json.JSONTokener;\n"));
    assert!(sink.get("Color").unwrap().contains("/**\n * A color.\n */\npublic interface Color"));
}

#[test]
fn translate_module___without_support___emits_declarations_only() {
    let mut sink = MemorySink::new();
    let config = GeneratorConfig {
        emit_support: false,
        ..config()
    };

    let report = translate_module(&color_module(), &config, &mut sink).unwrap();

    assert_eq!(report.artifacts[0].name, "Color");
    assert_eq!(report.artifacts.len(), 5);
}

#[test]
fn translate_module___alias___produces_no_artifact() {
    let module = SchemaModule::new(vec![
        Declaration::new("names", SchemaType::list(SchemaType::text())),
        Declaration::new(
            "group",
            SchemaType::record(vec![Field::required("members", SchemaType::named("names"))]),
        ),
    ]);
    let mut sink = MemorySink::new();

    let report = translate_module(&module, &config(), &mut sink).unwrap();

    assert_eq!(report.artifacts.last().unwrap().name, "Group");
    assert!(!sink.names().contains(&"Names"));
    assert!(sink.get("Group").unwrap().contains("public ArrayList<String> members;"));
}

#[test]
fn translate_module___alias_cycle___returns_unsupported_type() {
    let module = SchemaModule::new(vec![
        Declaration::new("a", SchemaType::named("b")),
        Declaration::new("b", SchemaType::named("a")),
    ]);
    let mut sink = MemorySink::new();

    let err = translate_module(&module, &config(), &mut sink).unwrap_err();

    assert!(matches!(err, CodegenError::UnsupportedType(_)));
}

#[test]
fn translate_module___colliding_declarations___second_is_suffixed() {
    let module = SchemaModule::new(vec![
        Declaration::new("user_id", SchemaType::record(vec![])),
        Declaration::new("UserId", SchemaType::record(vec![])),
    ]);
    let mut sink = MemorySink::new();

    let report = translate_module(&module, &config(), &mut sink).unwrap();

    let names = report.artifact_names();
    assert!(names.ends_with(&["UserId", "UserId0"]));
}

#[test]
fn translate_module___declaration_named_like_support___is_freshened() {
    let module = SchemaModule::new(vec![Declaration::new("util", SchemaType::record(vec![]))]);
    let mut sink = MemorySink::new();

    let report = translate_module(&module, &config(), &mut sink).unwrap();

    assert_eq!(report.artifacts.last().unwrap().name, "Util0");
    assert_eq!(report.artifacts[1].name, "Util");
}

#[test]
fn translate_module___anonymous_record_field___returns_unsupported_type() {
    let module = SchemaModule::new(vec![Declaration::new(
        "outer",
        SchemaType::record(vec![Field::required("inner", SchemaType::record(vec![]))]),
    )]);
    let mut sink = MemorySink::new();

    let err = translate_module(&module, &config(), &mut sink).unwrap_err();

    assert!(matches!(err, CodegenError::UnsupportedType(_)));
}

#[test]
fn translate_module___invalid_package___returns_invalid_config() {
    let config = GeneratorConfig {
        package: "com.1bad".to_string(),
        ..config()
    };
    let mut sink = MemorySink::new();

    let err = translate_module(&color_module(), &config, &mut sink).unwrap_err();

    assert!(matches!(err, CodegenError::InvalidConfig(_)));
    assert!(sink.is_empty());
}

#[test]
fn translate_module___dangling_reference___fails_before_emitting() {
    let module = SchemaModule::new(vec![Declaration::new(
        "a",
        SchemaType::list(SchemaType::named("missing")),
    )]);
    let mut sink = MemorySink::new();

    let err = translate_module(&module, &config(), &mut sink).unwrap_err();

    assert!(matches!(err, CodegenError::UnresolvedName(_)));
    assert!(sink.is_empty());
}

#[test]
fn translate_module___kinds_match_artifacts() {
    let mut sink = MemorySink::new();

    let report = translate_module(&color_module(), &config(), &mut sink).unwrap();

    let kinds: Vec<ArtifactKind> = report.artifacts[3..].iter().map(|a| a.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ArtifactKind::Interface,
            ArtifactKind::Class,
            ArtifactKind::Class,
            ArtifactKind::Factory,
            ArtifactKind::Class,
        ]
    );
}

#[test]
fn translate_module___optional_field_through_alias___is_wrapped() {
    let mut nick = Field::required("nick", SchemaType::named("maybe_text"));
    nick.kind = FieldKind::Optional;
    let module = SchemaModule::new(vec![
        Declaration::new("user", SchemaType::record(vec![nick])),
        Declaration::new("maybe_text", SchemaType::option(SchemaType::text())),
    ]);
    let mut sink = MemorySink::new();

    translate_module(&module, &config(), &mut sink).unwrap();

    let user = sink.get("User").unwrap();
    assert!(user.contains("public Optional<String> nick = Optional.empty();"));
    assert!(user.contains("this.nick = Optional.of(_v);"));
}
