//! XML serialization.

use std::fs::{self, File};
use std::io::{Cursor, Write};
use std::path::Path;

use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use tracing::info;

use crate::error::{RenderError, Result};
use crate::render::RenderedDocument;
use crate::tree::{Element, Node};

/// Serialize `root` as a UTF-8 document with an XML declaration and tab
/// indentation. Lines holding only whitespace are dropped.
pub fn to_xml_string(root: &Element) -> Result<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b'\t', 1);
    write_event(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;
    write_element(&mut writer, root)?;

    let bytes = writer.into_inner().into_inner();
    let xml = String::from_utf8(bytes).map_err(|e| RenderError::Xml {
        message: e.to_string(),
    })?;
    let mut out: String = xml
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    out.push('\n');
    Ok(out)
}

fn write_element(writer: &mut Writer<Cursor<Vec<u8>>>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.name());
    for (key, value) in element.attributes() {
        start.push_attribute((key.as_str(), value.as_str()));
    }
    if element.children().is_empty() {
        return write_event(writer, Event::Empty(start));
    }
    write_event(writer, Event::Start(start))?;
    for child in element.children() {
        match child {
            Node::Element(child) => write_element(writer, child)?,
            Node::Text(text) => write_event(
                writer,
                Event::Text(BytesText::from_escaped(partial_escape(text))),
            )?,
        }
    }
    write_event(writer, Event::End(BytesEnd::new(element.name())))
}

fn write_event(writer: &mut Writer<Cursor<Vec<u8>>>, event: Event<'_>) -> Result<()> {
    writer.write_event(event).map_err(|e| RenderError::Xml {
        message: e.to_string(),
    })
}

/// Write a rendered document atomically (temp file, fsync, rename).
pub fn write_document(path: &Path, document: &RenderedDocument) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| RenderError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    let temp_path = path.with_extension("xml.tmp");
    let mut file = File::create(&temp_path).map_err(|e| RenderError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;
    file.write_all(document.xml().as_bytes())
        .map_err(|e| RenderError::Io {
            operation: "write",
            path: temp_path.clone(),
            source: e,
        })?;
    file.sync_all().map_err(|e| RenderError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;
    drop(file);
    fs::rename(&temp_path, path).map_err(|e| RenderError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })?;
    info!(path = %path.display(), bytes = document.xml().len(), "wrote TEI document");
    Ok(())
}
