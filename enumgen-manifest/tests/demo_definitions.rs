use enumgen_codegen::{Exporter, GeneratorInfo};
use enumgen_codegen_csharp::CSharpExporter;
use enumgen_manifest::{EnumManifest, Format};

const MONTHS: &str = include_str!("../../demos/months.toml");

#[test]
fn test_months_demo_matches_reference_output() {
    let manifest = EnumManifest::from_toml_str(MONTHS, "months.toml").unwrap();
    assert_eq!(manifest.definition().len(), 12);
    assert_eq!(manifest.output().format, Some(Format::CSharp));

    let options = manifest
        .output()
        .export_options()
        .with_generator(GeneratorInfo::new("EnumGenerator.Core", "0.1.920.0"));
    let output = CSharpExporter
        .export(manifest.definition(), &options)
        .unwrap();

    assert_eq!(
        output,
        include_str!("../../enumgen-codegen-csharp/tests/fixtures/months.g.cs")
    );
}
