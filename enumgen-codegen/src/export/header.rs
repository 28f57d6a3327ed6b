use enumgen_core::GeneratorInfo;

use crate::builder::CodeBuilder;

const RULE_WIDTH: usize = 78;

/// Write the auto-generated banner followed by a blank line.
///
/// The `Generated by` line is indented by one indent unit after the comment
/// prefix, so the banner follows the document's indentation setting.
pub fn push_banner(out: &mut CodeBuilder, prefix: &str, generator: &GeneratorInfo) {
    let rule = format!("{}{}", prefix, "-".repeat(RULE_WIDTH));
    let generated_by = format!(
        "{} {}Generated by: {}",
        prefix,
        out.indent_unit(),
        generator
    );

    out.push_line(&rule)
        .push_line(&format!("{} <auto-generated>", prefix))
        .push_line(&generated_by)
        .push_line(&format!("{} </auto-generated>", prefix))
        .push_line(&rule)
        .push_blank();
}
