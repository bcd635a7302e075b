//! JSON text generation from resolved template documents

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value as JsonValue;

use super::RenderConfig;

/// Serialize a resolved document according to `config`
///
/// Object keys come out sorted, so identical models render identically.
pub fn render_json(document: &JsonValue, config: &RenderConfig) -> Result<String, serde_json::Error> {
    let mut text = if config.pretty_print {
        let indent = " ".repeat(config.indent);
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        document.serialize(&mut serializer)?;
        String::from_utf8_lossy(&buf).into_owned()
    } else {
        serde_json::to_string(document)?
    };

    if config.trailing_newline {
        text.push('\n');
    }
    Ok(text)
}
