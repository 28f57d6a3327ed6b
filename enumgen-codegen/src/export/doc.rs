use crate::builder::CodeBuilder;

/// Write an XML documentation block (`<summary>` … `</summary>`).
///
/// Each line of `text` becomes its own `prefix`ed line.
pub fn push_summary(out: &mut CodeBuilder, prefix: &str, text: &str) {
    out.push_line(&format!("{} <summary>", prefix))
        .push_doc(prefix, text)
        .push_line(&format!("{} </summary>", prefix));
}
