use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::Serialize;
use std::io::Cursor;

use pokedex_lib::types::Pokemon;
use pokedex_lib::GalleryState;

/// Child element name for entries of an array field.
fn singular(field: &str) -> &str {
    match field {
        "items" => "pokemon",
        "types" => "typeSlot",
        "stats" => "stat",
        _ => field,
    }
}

/// Recursively write a serde_json::Value as XML elements.
fn write_value<W: std::io::Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: &serde_json::Value,
) -> Result<(), quick_xml::Error> {
    match value {
        serde_json::Value::Null => {
            // Omit null fields entirely
        }
        serde_json::Value::Bool(b) => {
            write_text(writer, tag, if *b { "true" } else { "false" })?;
        }
        serde_json::Value::Number(n) => {
            write_text(writer, tag, &n.to_string())?;
        }
        serde_json::Value::String(s) => {
            write_text(writer, tag, s)?;
        }
        serde_json::Value::Array(arr) => {
            writer.write_event(Event::Start(BytesStart::new(tag)))?;
            let child_tag = singular(tag);
            for item in arr {
                write_value(writer, child_tag, item)?;
            }
            writer.write_event(Event::End(BytesEnd::new(tag)))?;
        }
        serde_json::Value::Object(map) => {
            writer.write_event(Event::Start(BytesStart::new(tag)))?;
            for (key, val) in map {
                write_value(writer, key, val)?;
            }
            writer.write_event(Event::End(BytesEnd::new(tag)))?;
        }
    }
    Ok(())
}

fn write_text<W: std::io::Write>(
    writer: &mut Writer<W>,
    tag: &str,
    text: &str,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Writes `value` under `root_tag`. A top-level array writes each entry as
/// an `item_tag` element; an empty one collapses to a self-closing root.
fn to_xml(
    root_tag: &str,
    item_tag: &str,
    value: &serde_json::Value,
) -> Result<String, quick_xml::Error> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    match value {
        serde_json::Value::Array(arr) if arr.is_empty() => {
            writer.write_event(Event::Empty(BytesStart::new(root_tag)))?;
        }
        serde_json::Value::Array(arr) => {
            writer.write_event(Event::Start(BytesStart::new(root_tag)))?;
            for item in arr {
                write_value(&mut writer, item_tag, item)?;
            }
            writer.write_event(Event::End(BytesEnd::new(root_tag)))?;
        }
        _ => write_value(&mut writer, root_tag, value)?,
    }

    let buf = writer.into_inner().into_inner();
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn serialize_to_xml<T: Serialize + ?Sized>(root_tag: &str, item_tag: &str, data: &T) -> String {
    let value = match serde_json::to_value(data) {
        Ok(value) => value,
        Err(e) => {
            tracing::error!("Failed to serialize {}: {}", root_tag, e);
            return String::new();
        }
    };
    to_xml(root_tag, item_tag, &value).unwrap_or_else(|e| {
        tracing::error!("Failed to write {} as XML: {}", root_tag, e);
        String::new()
    })
}

pub fn pokemon_to_xml(pokemon: &[Pokemon]) -> String {
    serialize_to_xml("pokedex", "pokemon", pokemon)
}

pub fn gallery_to_xml(state: &GalleryState) -> String {
    serialize_to_xml("gallery", "gallery", state)
}
