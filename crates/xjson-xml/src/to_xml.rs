// Dweve XJSON - JSON and XML value codec
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! [`Value`] to XML conversion
//!
//! Maps are written element by element following the key conventions in
//! [`crate::convention`]. Leaf values that would otherwise lose their type
//! carry `number`, `boolean`, `null` or `string` flag attributes, and
//! single-item lists carry `array="true"`, so the text parses back to the
//! same value.

use crate::convention::{
    is_attribute, is_cdata, is_comment, is_processing_instruction, is_text, ARRAY, BOOLEAN,
    DEFAULT_ENCODING, DIRECTIVES, DOCTYPE, ELEMENT, ENCODING, ITEM, NULL, NUMBER,
    OMIT_DECLARATION, ROOT, STANDALONE, STRING, TEXT, XMLNS_PREFIX,
};
use crate::error::{XmlError, XmlResult};
use std::borrow::Cow;
use std::collections::HashSet;
use xjson_core::{escape_name, escape_xml, format_float, IndentStep, Map, PrimitiveArray, Value};

const ARRAY_TRUE: &str = " array=\"true\"";
const SELF_CLOSING_TRUE: &str = " self-closing=\"true\"";
const NULL_TRUE: &str = " null=\"true\"/>";

/// Whether single-item lists are marked with `array="true"`.
///
/// Skipping the marker gives cleaner output, but a one-item list then
/// parses back as a bare value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrayTrue {
    /// Emit the marker (default).
    #[default]
    Add,
    /// Omit the marker.
    Skip,
}

impl ArrayTrue {
    fn attribute(self) -> &'static str {
        match self {
            ArrayTrue::Add => ARRAY_TRUE,
            ArrayTrue::Skip => "",
        }
    }
}

/// Configuration for XML output
#[derive(Debug, Clone)]
pub struct ToXmlConfig {
    /// Indentation style (default: two spaces)
    pub step: IndentStep,
    /// Name of the wrapping element used when the map cannot be the
    /// document element itself (default: "root")
    pub root_name: String,
    /// Single-item list marker mode (default: add)
    pub array_true: ArrayTrue,
    /// Always wrap the map in `root_name`, even when it has a single
    /// element entry (default: false)
    pub always_wrap_root: bool,
}

impl Default for ToXmlConfig {
    fn default() -> Self {
        Self {
            step: IndentStep::default(),
            root_name: ROOT.to_string(),
            array_true: ArrayTrue::default(),
            always_wrap_root: false,
        }
    }
}

impl ToXmlConfig {
    /// Default configuration with the given indentation.
    pub fn with_step(step: IndentStep) -> Self {
        Self {
            step,
            ..Self::default()
        }
    }
}

/// Convert a value to XML with default settings.
///
/// # Examples
///
/// ```
/// use xjson_core::{Map, Value};
/// use xjson_xml::to_xml;
///
/// let mut map = Map::new();
/// map.insert("a".to_string(), Value::List(vec![Value::from("x")]));
/// let xml = to_xml(&Value::Map(map)).unwrap();
/// assert_eq!(xml, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<a array=\"true\">x</a>");
/// ```
pub fn to_xml(value: &Value) -> XmlResult<String> {
    to_xml_with_config(value, &ToXmlConfig::default())
}

/// Convert a value to XML with a custom configuration.
///
/// Only maps and lists can be documents; any other value is a
/// [`XmlError::StructureError`].
pub fn to_xml_with_config(value: &Value, config: &ToXmlConfig) -> XmlResult<String> {
    let mut writer = XmlWriter::new(config);
    match value {
        Value::Map(map) => Ok(writer.write_document(map)),
        Value::List(items) => {
            let builder = XmlBuilder::with_header(config.step, DEFAULT_ENCODING, "");
            let root = writer.root_list(items, builder);
            Ok(writer.run(root).out)
        }
        other => Err(XmlError::StructureError {
            message: format!("a {} cannot be a document root", other.type_name()),
        }),
    }
}

/// Output buffer with its own indentation level.
///
/// Nested content is rendered into separate builders first; `inline`
/// builders hold text and are glued to their neighbours without line
/// breaks.
struct XmlBuilder {
    out: String,
    step: IndentStep,
    ident: usize,
    inline: bool,
}

impl XmlBuilder {
    fn new(step: IndentStep, ident: usize) -> Self {
        Self {
            out: String::new(),
            step,
            ident,
            inline: false,
        }
    }

    fn text(step: IndentStep, ident: usize) -> Self {
        Self {
            inline: true,
            ..Self::new(step, ident)
        }
    }

    fn with_header(step: IndentStep, encoding: &str, standalone: &str) -> Self {
        let mut builder = Self::new(step, 0);
        builder.out.push_str("<?xml version=\"1.0\" encoding=\"");
        builder
            .out
            .push_str(&escape_xml(encoding).replace('"', "&quot;"));
        builder.out.push('"');
        builder.out.push_str(standalone);
        builder.out.push_str("?>");
        builder.newline();
        builder
    }

    fn append(&mut self, text: &str) -> &mut Self {
        self.out.push_str(text);
        self
    }

    fn fill(&mut self) -> &mut Self {
        let c = self.step.fill_char();
        self.out.extend(std::iter::repeat(c).take(self.ident));
        self
    }

    fn newline(&mut self) -> &mut Self {
        if !self.step.is_compact() {
            self.out.push('\n');
        }
        self
    }

    fn inc(&mut self) -> &mut Self {
        self.ident += self.step.width();
        self
    }

    fn dec(&mut self) -> &mut Self {
        self.ident = self.ident.saturating_sub(self.step.width());
        self
    }
}

struct XmlWriter<'a> {
    config: &'a ToXmlConfig,
    array_true: &'static str,
    namespaces: HashSet<String>,
}

impl<'a> XmlWriter<'a> {
    fn new(config: &'a ToXmlConfig) -> Self {
        Self {
            config,
            array_true: config.array_true.attribute(),
            namespaces: HashSet::new(),
        }
    }

    fn name(&self, name: &str) -> String {
        escape_name(name, &self.namespaces)
    }

    fn write_document(&mut self, map: &Map) -> String {
        let step = self.config.step;
        let mut builder = if let Some(encoding) = map.get(ENCODING) {
            let standalone = map.get(STANDALONE).map(standalone_attr).unwrap_or_default();
            XmlBuilder::with_header(step, &encoding.to_string(), &standalone)
        } else if let Some(value) = map.get(STANDALONE) {
            XmlBuilder::with_header(step, DEFAULT_ENCODING, &standalone_attr(value))
        } else if map.contains_key(OMIT_DECLARATION) {
            XmlBuilder::new(step, 0)
        } else {
            XmlBuilder::with_header(step, DEFAULT_ENCODING, "")
        };

        let mut local = Cow::Borrowed(map);
        if DIRECTIVES.iter().any(|key| map.contains_key(*key)) {
            let owned = local.to_mut();
            for key in DIRECTIVES {
                owned.shift_remove(key);
            }
        }
        if let Some(doctype) = map.get(DOCTYPE) {
            local.to_mut().shift_remove(DOCTYPE);
            builder
                .append("<!DOCTYPE ")
                .append(&doctype.to_string())
                .append(">")
                .newline();
        }

        let root = if let Some(items) = sole_root_list(&local) {
            self.root_list(items, builder)
        } else {
            let config = self.config;
            let root_name = if config.always_wrap_root {
                Some(config.root_name.as_str())
            } else {
                root_name(&local, &config.root_name)
            };
            Frame::Object(self.object_frame(&local, root_name, builder, false, false))
        };
        self.run(root).out
    }

    /// Writes everything below `root`. Open elements are kept on an
    /// explicit stack; a finished frame hands its builder to its parent.
    fn run(&mut self, root: Frame<'_>) -> XmlBuilder {
        let mut stack = Vec::new();
        let mut current = root;
        loop {
            let child = match &mut current {
                Frame::Object(frame) => self.advance_object(frame),
                Frame::Items(frame) => self.advance_items(frame),
            };
            if let Some(child) = child {
                stack.push(std::mem::replace(&mut current, child));
                continue;
            }
            let builder = match current {
                Frame::Object(frame) => self.finish_object(frame),
                Frame::Items(frame) => frame.finish(),
            };
            match stack.pop() {
                Some(mut parent) => {
                    parent.resume(builder);
                    current = parent;
                }
                None => return builder,
            }
        }
    }

    /// `<root>` with one anonymous `<element>` per item.
    fn root_list<'v>(&mut self, items: &'v [Value], mut builder: XmlBuilder) -> Frame<'v> {
        builder.append("<root");
        if items.is_empty() {
            builder.append(" empty-array=\"true\"");
        }
        builder.append(">").inc();
        if !items.is_empty() {
            builder.newline();
        }
        Frame::Items(ItemsFrame::new(items, None, false, builder, Close::Root))
    }

    /// Starts writing `value` as an element named `name`.
    fn begin_value<'v>(
        &mut self,
        value: &'v Value,
        name: &'v str,
        mut builder: XmlBuilder,
        parent_text_found: bool,
        add_array: bool,
    ) -> Step<'v> {
        match value {
            Value::Map(map) => {
                let frame = self.object_frame(map, Some(name), builder, parent_text_found, add_array);
                Step::Push(Frame::Object(frame))
            }
            Value::List(items) => {
                let tag = self.name(name);
                builder.fill().append("<").append(&tag);
                if add_array {
                    builder.append(self.array_true);
                }
                if items.is_empty() {
                    builder.append(" empty-array=\"true\"");
                }
                builder.append(">").inc();
                if !items.is_empty() {
                    builder.newline();
                }
                let frame = ItemsFrame::new(items, Some(name), parent_text_found, builder, Close::Tag(tag));
                Step::Push(Frame::Items(frame))
            }
            _ => {
                self.write_leaf(value, name, &mut builder, parent_text_found, add_array);
                Step::Done(builder)
            }
        }
    }

    /// Writes list items as repeated siblings named `name` (or `element`)
    /// until one of them opens a frame of its own.
    fn advance_items<'v>(&mut self, frame: &mut ItemsFrame<'v>) -> Option<Frame<'v>> {
        let items = frame.items;
        let single = items.len() == 1;
        while let Some(item) = items.get(frame.index) {
            let add_newline = items
                .get(frame.index + 1)
                .map_or(false, |next| !first_key(first_value(next)).starts_with(TEXT));
            frame.index += 1;
            if item.is_null() {
                let tag = frame.name.map_or_else(|| ELEMENT.to_string(), |n| self.name(n));
                frame.builder.fill().append("<").append(&tag);
                if single {
                    frame.builder.append(self.array_true);
                }
                frame.builder.append(NULL_TRUE);
                if add_newline {
                    frame.builder.newline();
                }
                continue;
            }
            let builder = frame.take_builder();
            let (step, text_item) = match item_wrapper(item) {
                Some(inner) => {
                    let object = self.object_frame(inner, None, builder, frame.text_found, true);
                    (Step::Push(Frame::Object(object)), first_key_of(inner).starts_with(TEXT))
                }
                None => {
                    let add_array = single || matches!(item, Value::List(_));
                    let name = frame.name.unwrap_or(ELEMENT);
                    (self.begin_value(item, name, builder, frame.text_found, add_array), false)
                }
            };
            match step {
                Step::Done(builder) => frame.resume(builder, add_newline, text_item),
                Step::Push(child) => {
                    frame.pending = (add_newline, text_item);
                    return Some(child);
                }
            }
        }
        None
    }

    fn object_frame<'v>(
        &mut self,
        map: &'v Map,
        name: Option<&'v str>,
        builder: XmlBuilder,
        parent_text_found: bool,
        add_array: bool,
    ) -> ObjectFrame<'v> {
        let step = builder.step;
        let ident = builder.ident + if name.is_some() { step.width() } else { 0 };
        ObjectFrame {
            map,
            index: 0,
            name,
            parent_text_found,
            add_array,
            step,
            ident,
            attr_keys: self.attribute_keys(map),
            attrs: Vec::new(),
            elems: Vec::new(),
            builder,
            pending_newline: false,
        }
    }

    /// Renders map entries into the frame's child builders until one of
    /// them opens a frame of its own.
    fn advance_object<'v>(&mut self, frame: &mut ObjectFrame<'v>) -> Option<Frame<'v>> {
        let map = frame.map;
        while let Some((key, value)) = map.get_index(frame.index) {
            let add_newline = map
                .get_index(frame.index + 1)
                .map_or(false, |(next, _)| !is_text(next));
            frame.index += 1;
            match value {
                Value::String(text) if is_attribute(key) => {
                    frame.attrs.push(format!(
                        " {}=\"{}\"",
                        self.name(&key[1..]),
                        escape_xml(text).replace('"', "&quot;")
                    ));
                }
                _ if is_text(key) => add_text(
                    value,
                    &mut frame.elems,
                    frame.step,
                    frame.ident,
                    &frame.attr_keys,
                    &mut frame.attrs,
                ),
                _ if is_comment(key) || is_cdata(key) => {
                    let text_found = last_is_inline(&frame.elems) || frame.parent_text_found;
                    write_markup(key, value, frame, add_newline, text_found);
                }
                _ => {
                    let after_text = last_is_inline(&frame.elems);
                    let local = XmlBuilder::new(frame.step, frame.ident);
                    let step = match value {
                        Value::List(items) if !items.is_empty() => {
                            let list = ItemsFrame::new(items, Some(key), after_text, local, Close::Entry);
                            Step::Push(Frame::Items(list))
                        }
                        _ => self.begin_value(value, key, local, after_text, false),
                    };
                    match step {
                        Step::Done(local) => frame.add_elem(local, add_newline),
                        Step::Push(child) => {
                            frame.pending_newline = add_newline;
                            return Some(child);
                        }
                    }
                }
            }
        }
        None
    }

    fn finish_object(&mut self, frame: ObjectFrame<'_>) -> XmlBuilder {
        let ObjectFrame {
            name,
            parent_text_found,
            add_array,
            attr_keys,
            mut attrs,
            elems,
            mut builder,
            ..
        } = frame;
        if add_array && !attr_keys.contains(ARRAY) {
            attrs.push(self.array_true.to_string());
        }
        self.close_object(name, parent_text_found, &mut builder, attrs, elems);
        builder
    }

    /// Attribute keys of `map`; `-xmlns:p` keys register `p` as a
    /// namespace prefix for the rest of the document.
    fn attribute_keys<'m>(&mut self, map: &'m Map) -> HashSet<&'m str> {
        let mut keys = HashSet::new();
        for (key, value) in map {
            if is_attribute(key) && !matches!(value, Value::Map(_) | Value::List(_)) {
                if let Some(prefix) = key[1..].strip_prefix(XMLNS_PREFIX) {
                    self.namespaces.insert(prefix.to_string());
                }
                keys.insert(key.as_str());
            }
        }
        keys
    }

    fn close_object(
        &mut self,
        name: Option<&str>,
        parent_text_found: bool,
        builder: &mut XmlBuilder,
        mut attrs: Vec<String>,
        elems: Vec<XmlBuilder>,
    ) {
        let self_closing = match attrs.iter().position(|a| a == SELF_CLOSING_TRUE) {
            Some(index) => {
                attrs.remove(index);
                true
            }
            None => false,
        };
        let tag = name.map(|n| self.name(n));
        if let Some(tag) = &tag {
            if !parent_text_found {
                builder.fill();
            }
            builder.append("<").append(tag).append(&attrs.concat());
            if self_closing {
                builder.append("/");
            }
            builder.append(">").inc();
            if elems.first().map_or(false, |e| !e.inline) {
                builder.newline();
            }
        }
        if !self_closing {
            for elem in &elems {
                builder.append(&elem.out);
            }
        }
        if let Some(tag) = &tag {
            builder.dec();
            if elems.last().map_or(false, |e| !e.inline) {
                builder.newline().fill();
            }
            if !self_closing {
                builder.append("</").append(tag).append(">");
            }
        }
    }

    /// A scalar, primitive array or processing instruction element.
    fn write_leaf(
        &mut self,
        value: &Value,
        name: &str,
        builder: &mut XmlBuilder,
        parent_text_found: bool,
        add_array: bool,
    ) {
        if !parent_text_found {
            builder.fill();
        }
        let tag = self.name(name);
        if let Value::Array(array) = value {
            write_primitive_array(array, &tag, builder);
            return;
        }
        let array = if add_array { self.array_true } else { "" };
        let instruction = is_processing_instruction(name);
        let rendered = match value {
            Value::Null => format!("<{}{}", tag, NULL_TRUE),
            Value::String(text) if text.is_empty() => {
                let close = if instruction { "?>" } else { " string=\"true\"/>" };
                format!("<{}{}{}", tag, array, close)
            }
            Value::String(text) if instruction => format!("<{}{} {}?>", tag, array, escape_xml(text)),
            Value::String(text) => format!("<{0}{1}>{2}</{0}>", tag, array, escape_xml(text)),
            Value::Float(f) if !f.is_finite() => format!("<{}{}", ELEMENT, NULL_TRUE),
            Value::Bool(b) => format!("<{0}{1} boolean=\"true\">{2}</{0}>", tag, array, b),
            Value::Int(_) | Value::BigInt(_) | Value::Float(_) | Value::Decimal(_) => {
                format!("<{0}{1} number=\"true\">{2}</{0}>", tag, array, number_text(value))
            }
            Value::Array(_) | Value::Map(_) | Value::List(_) => String::new(),
        };
        builder.append(&rendered);
    }
}

/// Outcome of starting a value: written in place, or a frame to run.
enum Step<'v> {
    Done(XmlBuilder),
    Push(Frame<'v>),
}

enum Frame<'v> {
    Object(ObjectFrame<'v>),
    Items(ItemsFrame<'v>),
}

impl Frame<'_> {
    /// Takes back the builder of a finished child frame.
    fn resume(&mut self, builder: XmlBuilder) {
        match self {
            Frame::Object(frame) => {
                let add_newline = frame.pending_newline;
                frame.add_elem(builder, add_newline);
            }
            Frame::Items(frame) => {
                let (add_newline, text_item) = frame.pending;
                frame.resume(builder, add_newline, text_item);
            }
        }
    }
}

/// A map being written as one element. Each entry renders into its own
/// builder in `elems`; the tag and `attrs` are written around them once
/// every entry is done.
struct ObjectFrame<'v> {
    map: &'v Map,
    index: usize,
    name: Option<&'v str>,
    parent_text_found: bool,
    add_array: bool,
    step: IndentStep,
    ident: usize,
    attr_keys: HashSet<&'v str>,
    attrs: Vec<String>,
    elems: Vec<XmlBuilder>,
    /// Receives the element when the frame finishes.
    builder: XmlBuilder,
    /// Whether the entry being written by a child frame ends the line.
    pending_newline: bool,
}

impl ObjectFrame<'_> {
    fn add_elem(&mut self, mut local: XmlBuilder, add_newline: bool) {
        if add_newline {
            local.newline();
        }
        self.elems.push(local);
    }
}

/// How an items frame ends.
enum Close {
    /// `</root>` of a top-level list.
    Root,
    /// Closing tag of a list element, already escaped.
    Tag(String),
    /// Nothing: the items are the siblings of a map entry.
    Entry,
}

/// List items being written straight into `builder`.
struct ItemsFrame<'v> {
    items: &'v [Value],
    index: usize,
    name: Option<&'v str>,
    text_found: bool,
    builder: XmlBuilder,
    close: Close,
    /// Line break and inline-text flags of the item a child frame writes.
    pending: (bool, bool),
}

impl<'v> ItemsFrame<'v> {
    fn new(
        items: &'v [Value],
        name: Option<&'v str>,
        text_found: bool,
        builder: XmlBuilder,
        close: Close,
    ) -> Self {
        Self {
            items,
            index: 0,
            name,
            text_found,
            builder,
            close,
            pending: (false, false),
        }
    }

    fn take_builder(&mut self) -> XmlBuilder {
        let empty = XmlBuilder::new(self.builder.step, 0);
        std::mem::replace(&mut self.builder, empty)
    }

    fn resume(&mut self, builder: XmlBuilder, add_newline: bool, text_item: bool) {
        self.builder = builder;
        if text_item {
            self.text_found = true;
            return;
        }
        self.text_found = false;
        if add_newline {
            self.builder.newline();
        }
    }

    fn finish(self) -> XmlBuilder {
        let mut builder = self.builder;
        match self.close {
            Close::Root => {
                if !self.items.is_empty() {
                    builder.newline();
                }
                builder.append("</root>");
            }
            Close::Tag(tag) => {
                builder.dec();
                if !self.items.is_empty() {
                    builder.newline().fill();
                }
                builder.append("</").append(&tag).append(">");
            }
            Close::Entry => {}
        }
        builder
    }
}

/// Comment and CDATA entries, one node per list item.
fn write_markup(
    key: &str,
    value: &Value,
    frame: &mut ObjectFrame<'_>,
    add_newline: bool,
    text_found: bool,
) {
    let (step, ident) = (frame.step, frame.ident);
    let comment = is_comment(key);
    for_each_part(value, add_newline, |part, newline| {
        let mut local = if comment {
            let mut local = XmlBuilder::new(step, ident);
            if !text_found {
                local.fill();
            }
            local.append("<!--").append(&part).append("-->");
            local
        } else {
            let mut local = XmlBuilder::text(step, ident);
            local.append("<![CDATA[").append(&part).append("]]>");
            local
        };
        if newline {
            local.newline();
        }
        frame.elems.push(local);
    });
}

/// ` standalone="yes"` for `yes`, ` standalone="no"` for anything else.
fn standalone_attr(value: &Value) -> String {
    let flag = if value.as_str() == Some("yes") { "yes" } else { "no" };
    format!(" standalone=\"{}\"", flag)
}

fn sole_root_list(map: &Map) -> Option<&[Value]> {
    if map.len() != 1 {
        return None;
    }
    match map.get(ROOT) {
        Some(Value::List(items)) => Some(items),
        _ => None,
    }
}

/// The wrapping element name, or `None` when the map's single element
/// entry can be the document element itself.
fn root_name<'n>(map: &Map, root_name: &'n str) -> Option<&'n str> {
    let mut attrs = 0;
    let mut elements = 0;
    let mut lists = 0;
    for (key, value) in map {
        if is_attribute(key) {
            attrs += 1;
        } else if !is_comment(key) && !is_cdata(key) && !is_processing_instruction(key) {
            if matches!(value, Value::List(items) if items.len() > 1) {
                lists += 1;
            }
            elements += 1;
        }
    }
    if attrs == 0 && elements == 1 && lists == 0 {
        None
    } else {
        Some(root_name)
    }
}

fn first_value(value: &Value) -> Option<&Value> {
    value.as_map().and_then(|map| map.values().next())
}

fn first_key(value: Option<&Value>) -> &str {
    value.and_then(Value::as_map).map_or("", first_key_of)
}

fn first_key_of(map: &Map) -> &str {
    map.keys().next().map_or("", String::as_str)
}

/// The inner map of a `{"#item": {...}}` wrapper.
fn item_wrapper(value: &Value) -> Option<&Map> {
    match value {
        Value::Map(map) if map.len() == 1 => match map.get(ITEM) {
            Some(Value::Map(inner)) => Some(inner),
            _ => None,
        },
        _ => None,
    }
}

fn last_is_inline(elems: &[XmlBuilder]) -> bool {
    elems.last().map_or(false, |e| e.inline)
}

fn add_text(
    value: &Value,
    elems: &mut Vec<XmlBuilder>,
    step: IndentStep,
    ident: usize,
    attr_keys: &HashSet<&str>,
    attrs: &mut Vec<String>,
) {
    if let Value::List(items) = value {
        for item in items {
            let mut text = XmlBuilder::text(step, ident);
            text.append(&escape_xml(&item.to_string()));
            elems.push(text);
        }
        return;
    }
    match value {
        v if v.is_number() && !attr_keys.contains(NUMBER) => {
            attrs.push(" number=\"true\"".to_string());
        }
        Value::Bool(_) if !attr_keys.contains(BOOLEAN) => {
            attrs.push(" boolean=\"true\"".to_string());
        }
        Value::Null if !attr_keys.contains(NULL) => {
            attrs.push(" null=\"true\"".to_string());
            return;
        }
        Value::String(s) if s.is_empty() && !attr_keys.contains(STRING) => {
            attrs.push(" string=\"true\"".to_string());
            return;
        }
        _ => {}
    }
    let mut text = XmlBuilder::text(step, ident);
    text.append(&escape_xml(&value.to_string()));
    elems.push(text);
}

/// Calls `f` once per list item (or once for a scalar) with the item text
/// and whether a line break follows it.
fn for_each_part(value: &Value, add_newline: bool, mut f: impl FnMut(String, bool)) {
    match value {
        Value::List(items) => {
            for (index, item) in items.iter().enumerate() {
                f(item.to_string(), index + 1 < items.len() || add_newline);
            }
        }
        other => f(other.to_string(), add_newline),
    }
}

fn number_text(value: &Value) -> String {
    match value {
        Value::Float(f) => format_float(*f),
        other => other.to_string(),
    }
}

fn write_primitive_array(array: &PrimitiveArray, tag: &str, builder: &mut XmlBuilder) {
    builder.append("<").append(tag).append(">").newline().inc();
    let items = array.items();
    if items.is_empty() {
        builder.fill().append("<element></element>");
    }
    for (index, item) in items.iter().enumerate() {
        builder
            .fill()
            .append("<element>")
            .append(&escape_xml(item))
            .append("</element>");
        if index + 1 < items.len() {
            builder.newline();
        }
    }
    builder.dec().newline().fill().append("</").append(tag).append(">");
}
