//! Golden output tests for the Visual Basic exporter.

use enumgen_codegen::{ExportOptions, Exporter, HeaderMode, Indent};
use enumgen_codegen_vb::VisualBasicExporter;
use enumgen_core::{EnumBuilder, EnumDefinition, Error, GeneratorInfo, StorageType};

const BANNER: &str = "''------------------------------------------------------------------------------
'' <auto-generated>
''     Generated by: EnumGenerator.Core - 5.0.0.0
'' </auto-generated>
''------------------------------------------------------------------------------

";

fn enum_of(entries: &[(&str, i64)]) -> EnumDefinition {
    let mut builder = EnumBuilder::new("TestEnum");
    for (name, value) in entries {
        builder.push_entry(*name, *value).unwrap();
    }
    builder.build().unwrap()
}

fn options() -> ExportOptions {
    ExportOptions::new().with_generator(GeneratorInfo::new("EnumGenerator.Core", "5.0.0.0"))
}

fn export(definition: &EnumDefinition, options: &ExportOptions) -> String {
    VisualBasicExporter
        .export(definition, options)
        .expect("export failed")
}

#[test]
fn test_basic_enum() {
    let out = export(&enum_of(&[("A", 1), ("B", 2)]), &options());
    let expected = BANNER.to_string()
        + "Imports System.CodeDom.Compiler

<GeneratedCode(\"EnumGenerator.Core\", \"5.0.0.0\")>
Public Enum TestEnum
    A = 1
    B = 2
End Enum
";
    assert_eq!(out, expected);
}

#[test]
fn test_negative_values() {
    let out = export(
        &enum_of(&[("A", -1), ("B", -2)]),
        &options().with_header(HeaderMode::None),
    );
    assert!(out.ends_with("Public Enum TestEnum\n    A = -1\n    B = -2\nEnd Enum\n"));
}

#[test]
fn test_comments() {
    let mut builder = EnumBuilder::new("TestEnum");
    builder.set_comment("Summary comment.");
    builder
        .push_entry_with_comment("A", 1, "This is entry A.")
        .unwrap();
    builder
        .push_entry_with_comment("B", 2, "This is entry B.")
        .unwrap();
    let def = builder.build().unwrap();

    insta::assert_snapshot!(export(&def, &options()), @r#"
''------------------------------------------------------------------------------
'' <auto-generated>
''     Generated by: EnumGenerator.Core - 5.0.0.0
'' </auto-generated>
''------------------------------------------------------------------------------

Imports System.CodeDom.Compiler

''' <summary>
''' Summary comment.
''' </summary>
<GeneratedCode("EnumGenerator.Core", "5.0.0.0")>
Public Enum TestEnum
    ''' <summary>
    ''' This is entry A.
    ''' </summary>
    A = 1

    ''' <summary>
    ''' This is entry B.
    ''' </summary>
    B = 2
End Enum
"#);
}

#[test]
fn test_tabs() {
    let def = enum_of(&[("A", 1), ("B", 2)]);
    let out = export(&def, &options().with_indent(Indent::Tab));
    assert!(out.contains("\n'' \tGenerated by: EnumGenerator.Core - 5.0.0.0\n"));
    assert!(out.ends_with("Public Enum TestEnum\n\tA = 1\n\tB = 2\nEnd Enum\n"));
}

#[test]
fn test_two_space_indent() {
    let def = enum_of(&[("A", 1), ("B", 2)]);
    let out = export(&def, &options().with_indent(Indent::Spaces(2)));
    assert!(out.contains("\n''   Generated by: EnumGenerator.Core - 5.0.0.0\n"));
    assert!(out.ends_with("Public Enum TestEnum\n  A = 1\n  B = 2\nEnd Enum\n"));
}

#[test]
fn test_namespace() {
    let def = enum_of(&[("A", 1), ("B", 2)]);
    let out = export(&def, &options().with_namespace("A.B.C"));
    let expected = BANNER.to_string()
        + "Imports System.CodeDom.Compiler

Namespace A.B.C
    <GeneratedCode(\"EnumGenerator.Core\", \"5.0.0.0\")>
    Public Enum TestEnum
        A = 1
        B = 2
    End Enum
End Namespace
";
    assert_eq!(out, expected);
}

#[test]
fn test_storage_type() {
    let def = enum_of(&[("A", 1), ("B", 2)]);
    let out = export(&def, &options().with_storage(StorageType::Unsigned8Bit));
    assert!(out.contains("\nPublic Enum TestEnum As Byte\n    A = 1\n"));
}

#[test]
fn test_explicit_default_storage_has_no_as_clause() {
    let def = enum_of(&[("A", 1)]);
    let out = export(&def, &options().with_storage(StorageType::Signed32Bit));
    assert!(out.contains("\nPublic Enum TestEnum\n"));
}

#[test]
fn test_without_header() {
    let out = export(
        &enum_of(&[("A", 1), ("B", 2)]),
        &options().with_header(HeaderMode::None),
    );
    assert_eq!(
        out,
        "Imports System.CodeDom.Compiler

<GeneratedCode(\"EnumGenerator.Core\", \"5.0.0.0\")>
Public Enum TestEnum
    A = 1
    B = 2
End Enum
"
    );
}

#[test]
fn test_mixed_comments_separate_only_documented_entries() {
    let mut builder = EnumBuilder::new("TestEnum");
    builder.push_entry("A", 1).unwrap();
    builder.push_entry("B", 2).unwrap();
    builder.push_entry_with_comment("C", 3, "C.").unwrap();
    builder.push_entry("D", 4).unwrap();
    let def = builder.build().unwrap();

    let out = export(&def, &options().with_header(HeaderMode::None));
    assert!(out.ends_with(
        "Public Enum TestEnum
    A = 1
    B = 2

    ''' <summary>
    ''' C.
    ''' </summary>
    C = 3

    D = 4
End Enum
"
    ));
}

#[test]
fn test_invalid_namespace() {
    let err = VisualBasicExporter
        .export(&enum_of(&[("A", 1)]), &options().with_namespace("0Test"))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidNamespace { .. }));
}

#[test]
fn test_out_of_bounds_value() {
    let err = VisualBasicExporter
        .export(
            &enum_of(&[("A", -1)]),
            &options().with_storage(StorageType::Unsigned8Bit),
        )
        .unwrap_err();
    assert!(matches!(err, Error::OutOfBoundsValue { value: -1, .. }));
}

#[test]
fn test_generated_code_attribute_is_escaped() {
    let options = ExportOptions::new()
        .with_header(HeaderMode::None)
        .with_generator(GeneratorInfo::new(r#"My "Tool""#, "1.0"));
    let out = export(&enum_of(&[("A", 1)]), &options);
    assert!(out.contains("\n<GeneratedCode(\"My \"\"Tool\"\"\", \"1.0\")>\n"));
}
