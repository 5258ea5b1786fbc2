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

//! XML text to [`Value`] conversion
//!
//! The input is tokenized once with `quick-xml` into a small node tree that
//! keeps attribute order, self-closing markers, comments, CDATA sections,
//! processing instructions and the DOCTYPE. The tree is then folded into
//! maps following the key conventions in [`crate::convention`].

use crate::convention::{
    is_attribute, ARRAY, BOOLEAN, CDATA, COMMENT, DEFAULT_ENCODING, DOCTYPE, ELEMENT, EMPTY_ARRAY,
    ENCODING, ITEM, NULL, NUMBER, OMIT_DECLARATION, ROOT, SELF_CLOSING, STANDALONE, STRING, TEXT,
    XMLNS_PREFIX,
};
use crate::error::{XmlError, XmlResult};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::{HashMap, HashSet};
use xjson_core::{parse_bool, parse_number, unescape_name, unescape_xml, Map, Value};

/// Default maximum element nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

const XML_HEADER: &str = "<?xml ";
const DOCTYPE_HEADER: &str = "<!DOCTYPE ";
const DOCUMENT: &str = "#document";

/// How aggressively the parsed tree is simplified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum XmlMode {
    /// Unwrap synthetic `root` documents and anonymous `element` wrappers,
    /// as produced when JSON lists are written as XML (default).
    #[default]
    Convert,
    /// Keep every element so the document can be written back unchanged.
    Format,
}

/// Which names survive parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameMode {
    /// Keep all names (default).
    #[default]
    Keep,
    /// Strip registered namespace prefixes from element and attribute names.
    WithoutNamespaces,
    /// Drop attributes.
    WithoutAttributes,
    /// Strip namespace prefixes and drop attributes.
    WithoutNamespacesAndAttributes,
}

impl NameMode {
    fn apply(self, name: &str, namespaces: &HashSet<String>) -> Option<String> {
        match self {
            NameMode::Keep => Some(name.to_string()),
            NameMode::WithoutNamespaces => Some(strip_namespace(name, namespaces)),
            NameMode::WithoutAttributes => {
                (!is_attribute(name)).then(|| name.to_string())
            }
            NameMode::WithoutNamespacesAndAttributes => {
                (!is_attribute(name)).then(|| strip_namespace(name, namespaces))
            }
        }
    }
}

fn strip_namespace(name: &str, namespaces: &HashSet<String>) -> String {
    if let Some(attribute) = name.strip_prefix('-') {
        if let Some((prefix, local)) = attribute.split_once(':') {
            if namespaces.contains(prefix) {
                return format!("-{}", local);
            }
        }
        return name.to_string();
    }
    match name.split_once(':') {
        Some((prefix, local)) if namespaces.contains(prefix) => local.to_string(),
        _ => name.to_string(),
    }
}

/// Configuration for XML parsing
#[derive(Debug, Clone)]
pub struct FromXmlConfig {
    /// Simplification mode (default: convert)
    pub mode: XmlMode,
    /// Name filtering (default: keep everything)
    pub names: NameMode,
    /// Wrap every element value in a list (default: false)
    pub make_arrays: bool,
    /// Maximum element nesting depth (default: 1000)
    pub max_depth: usize,
}

impl Default for FromXmlConfig {
    fn default() -> Self {
        Self {
            mode: XmlMode::default(),
            names: NameMode::default(),
            make_arrays: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl FromXmlConfig {
    /// Default configuration with the given mode.
    pub fn with_mode(mode: XmlMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}

/// Parse XML text into a value with default settings.
///
/// # Examples
///
/// ```
/// use xjson_core::Value;
/// use xjson_xml::from_xml;
///
/// let value = from_xml("<a><b>1</b><b>2</b></a>").unwrap();
/// let b = value.get("a").and_then(|a| a.get("b")).unwrap();
/// assert_eq!(b, &Value::List(vec![Value::from("1"), Value::from("2")]));
/// ```
pub fn from_xml(xml: &str) -> XmlResult<Value> {
    from_xml_with_config(xml, &FromXmlConfig::default())
}

/// Parse XML text into a value with a custom configuration.
pub fn from_xml_with_config(xml: &str, config: &FromXmlConfig) -> XmlResult<Value> {
    let document = tokenize(xml, config.max_depth)?;
    let mut builder = ValueBuilder::new(xml, config);
    let result = builder.build(&document)?;
    Ok(check_result(xml, &document, result, config.mode))
}

// ==================== Tokenizer ====================

#[derive(Debug)]
enum Node {
    Element(Element),
    Text(String),
    CData(String),
    Comment(String),
    Instruction { target: String, data: String },
    DocType,
}

#[derive(Debug)]
struct Element {
    name: String,
    /// Attribute names and raw (still escaped) values in source order.
    attrs: Vec<(String, String)>,
    self_closing: bool,
    children: Vec<Node>,
}

impl Drop for Element {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let Node::Element(mut element) = node {
                pending.append(&mut element.children);
            }
        }
    }
}

#[derive(Debug, Default)]
struct Document {
    children: Vec<Node>,
    encoding: Option<String>,
    standalone: Option<String>,
}

fn parse_error(pos: usize, message: impl Into<String>) -> XmlError {
    XmlError::ParseError {
        pos,
        message: message.into(),
    }
}

fn tokenize(xml: &str, max_depth: usize) -> XmlResult<Document> {
    let mut reader = Reader::from_str(xml);
    reader
        .trim_text(false)
        .expand_empty_elements(false)
        .check_end_names(true);

    let mut document = Document::default();
    let mut stack: Vec<Element> = Vec::new();
    let mut scopes = NamespaceScopes::default();
    let mut entities = HashMap::new();
    let mut root_seen = false;

    loop {
        let pos = reader.buffer_position();
        let event = reader
            .read_event()
            .map_err(|e| parse_error(reader.buffer_position(), e.to_string()))?;
        match event {
            Event::Start(e) => {
                let element = open_element(&e, pos, &mut scopes)?;
                if stack.len() + 1 > max_depth {
                    return Err(XmlError::RecursionLimitExceeded {
                        max: max_depth,
                        current: stack.len() + 1,
                    });
                }
                stack.push(element);
            }
            Event::Empty(e) => {
                let mut element = open_element(&e, pos, &mut scopes)?;
                scopes.pop();
                if stack.len() + 1 > max_depth {
                    return Err(XmlError::RecursionLimitExceeded {
                        max: max_depth,
                        current: stack.len() + 1,
                    });
                }
                element.self_closing = true;
                attach(&mut stack, &mut document, &mut root_seen, Node::Element(element), pos)?;
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| parse_error(pos, "closing tag without matching opening tag"))?;
                scopes.pop();
                attach(&mut stack, &mut document, &mut root_seen, Node::Element(element), pos)?;
            }
            Event::Text(e) => {
                let raw = normalize_newlines(&String::from_utf8_lossy(&e));
                let text = quick_xml::escape::unescape_with(&raw, |name| {
                    entities.get(name).map(String::as_str)
                })
                .map_err(|err| parse_error(pos, err.to_string()))?
                    .into_owned();
                match stack.last_mut() {
                    Some(parent) => parent.children.push(Node::Text(text)),
                    None if is_blank(&text) => {}
                    None => return Err(parse_error(pos, "text outside the root element")),
                }
            }
            Event::CData(e) => {
                let text = normalize_newlines(&String::from_utf8_lossy(&e));
                match stack.last_mut() {
                    Some(parent) => parent.children.push(Node::CData(text)),
                    None => return Err(parse_error(pos, "CDATA outside the root element")),
                }
            }
            Event::Comment(e) => {
                let text = normalize_newlines(&String::from_utf8_lossy(&e));
                attach(&mut stack, &mut document, &mut root_seen, Node::Comment(text), pos)?;
            }
            Event::PI(e) => {
                let content = String::from_utf8_lossy(&e).into_owned();
                let (target, data) = match content.split_once(|c: char| c.is_ascii_whitespace()) {
                    Some((target, data)) => (target.to_string(), data.trim_start().to_string()),
                    None => (content.clone(), String::new()),
                };
                let node = Node::Instruction { target, data };
                attach(&mut stack, &mut document, &mut root_seen, node, pos)?;
            }
            Event::Decl(e) => {
                if let Some(Ok(encoding)) = e.encoding() {
                    document.encoding = Some(String::from_utf8_lossy(&encoding).into_owned());
                }
                if let Some(Ok(standalone)) = e.standalone() {
                    document.standalone = Some(String::from_utf8_lossy(&standalone).into_owned());
                }
            }
            Event::DocType(e) => {
                if !stack.is_empty() || root_seen {
                    return Err(parse_error(pos, "DOCTYPE must precede the root element"));
                }
                entities.extend(entity_declarations(&String::from_utf8_lossy(&e)));
                document.children.push(Node::DocType);
            }
            Event::Eof => break,
        }
    }

    if let Some(open) = stack.last() {
        return Err(parse_error(
            reader.buffer_position(),
            format!("unclosed element <{}>", open.name),
        ));
    }
    if !root_seen {
        return Err(parse_error(reader.buffer_position(), "missing root element"));
    }
    Ok(document)
}

fn open_element(
    start: &BytesStart<'_>,
    pos: usize,
    scopes: &mut NamespaceScopes,
) -> XmlResult<Element> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attrs = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| parse_error(pos, e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = String::from_utf8_lossy(&attr.value).into_owned();
        attrs.push((key, value));
    }
    scopes.push(&attrs);
    scopes.check(&name, pos)?;
    for (key, _) in &attrs {
        scopes.check(key, pos)?;
    }
    Ok(Element {
        name,
        attrs,
        self_closing: false,
        children: Vec::new(),
    })
}

fn attach(
    stack: &mut [Element],
    document: &mut Document,
    root_seen: &mut bool,
    node: Node,
    pos: usize,
) -> XmlResult<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
        return Ok(());
    }
    if matches!(node, Node::Element(_)) {
        if *root_seen {
            return Err(parse_error(pos, "multiple root elements"));
        }
        *root_seen = true;
    }
    document.children.push(node);
    Ok(())
}

/// Prefixes declared by each open element.
#[derive(Default)]
struct NamespaceScopes {
    scopes: Vec<Vec<String>>,
}

impl NamespaceScopes {
    fn push(&mut self, attrs: &[(String, String)]) {
        let declared = attrs
            .iter()
            .filter_map(|(key, _)| key.strip_prefix(XMLNS_PREFIX))
            .map(str::to_string)
            .collect();
        self.scopes.push(declared);
    }

    fn pop(&mut self) {
        self.scopes.pop();
    }

    fn check(&self, name: &str, pos: usize) -> XmlResult<()> {
        let Some((prefix, _)) = name.split_once(':') else {
            return Ok(());
        };
        if prefix == "xml" || prefix == "xmlns" {
            return Ok(());
        }
        if self.scopes.iter().any(|scope| scope.iter().any(|p| p == prefix)) {
            Ok(())
        } else {
            Err(parse_error(pos, format!("unbound namespace prefix '{}'", prefix)))
        }
    }
}

fn normalize_newlines(text: &str) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text.to_string()
    }
}

fn is_blank(text: &str) -> bool {
    text.chars().all(|c| c <= ' ')
}

/// Internal general entities declared as `<!ENTITY name "value">`.
///
/// Parameter entities and external (`SYSTEM`/`PUBLIC`) entities are skipped.
/// The first declaration of a name wins.
fn entity_declarations(doctype: &str) -> HashMap<String, String> {
    let mut entities = HashMap::new();
    let mut rest = doctype;
    while let Some(found) = rest.find("<!ENTITY") {
        rest = rest[found + "<!ENTITY".len()..].trim_start();
        if rest.starts_with('%') {
            continue;
        }
        let name_end = rest.find(|c: char| c.is_ascii_whitespace()).unwrap_or(rest.len());
        let name = &rest[..name_end];
        rest = rest[name_end..].trim_start();
        let Some(quote) = rest.chars().next().filter(|c| *c == '"' || *c == '\'') else {
            continue;
        };
        let Some(value_end) = rest[1..].find(quote) else {
            break;
        };
        let raw = &rest[1..1 + value_end];
        rest = &rest[1 + value_end + 1..];
        let value = quick_xml::escape::unescape(raw)
            .map_or_else(|_| raw.to_string(), |value| value.into_owned());
        entities.entry(name.to_string()).or_insert(value);
    }
    entities
}

/// Body of the first DOCTYPE declaration, including any internal subset.
fn doctype_value(xml: &str) -> String {
    let Some(found) = xml.find(DOCTYPE_HEADER) else {
        return String::new();
    };
    let start = found + DOCTYPE_HEADER.len();
    let mut closing = '>';
    let mut extra = 0;
    for (offset, c) in xml[start..].char_indices() {
        if c == '[' {
            closing = ']';
            extra = 1;
            continue;
        }
        if c == closing {
            return xml[start..start + offset + extra].to_string();
        }
    }
    String::new()
}

// ==================== Tree to value ====================

/// An element (or the document) whose children are being added to `map`.
struct MapFrame<'d> {
    children: &'d [Node],
    index: usize,
    map: Map,
    name: &'d str,
}

impl<'d> MapFrame<'d> {
    fn new(children: &'d [Node], map: Map, name: &'d str) -> Self {
        Self {
            children,
            index: 0,
            map,
            name,
        }
    }
}

struct ValueBuilder<'a> {
    source: &'a str,
    config: &'a FromXmlConfig,
    /// Next suffix for repeated `#text`, `#comment` and `#cdata-section` keys.
    unique_ids: [usize; 3],
    namespaces: HashSet<String>,
}

impl<'a> ValueBuilder<'a> {
    fn new(source: &'a str, config: &'a FromXmlConfig) -> Self {
        Self {
            source,
            config,
            unique_ids: [1, 1, 1],
            namespaces: HashSet::new(),
        }
    }

    /// Folds the document tree into a value. Elements still being filled
    /// are kept on an explicit stack.
    fn build(&mut self, document: &Document) -> XmlResult<Value> {
        let mut stack = Vec::new();
        let result = self.build_nested(document, &mut stack);
        for frame in stack {
            Value::Map(frame.map).drop_iteratively();
        }
        result
    }

    fn build_nested<'d>(
        &mut self,
        document: &'d Document,
        stack: &mut Vec<MapFrame<'d>>,
    ) -> XmlResult<Value> {
        let mut current = MapFrame::new(&document.children, Map::new(), DOCUMENT);
        loop {
            if let Some(element) = self.advance(&mut current) {
                let attrs = self.element_attrs(element);
                let child = MapFrame::new(&element.children, attrs, &element.name);
                stack.push(std::mem::replace(&mut current, child));
                continue;
            }
            let MapFrame { map, name, .. } = current;
            let value = check_number_and_boolean(map, name)?;
            match stack.pop() {
                Some(mut parent) => {
                    self.add_node_value(&mut parent.map, name, value);
                    current = parent;
                }
                None => return Ok(value),
            }
        }
    }

    /// Adds the frame's next children to its map until an element is found.
    fn advance<'d>(&mut self, frame: &mut MapFrame<'d>) -> Option<&'d Element> {
        let children = frame.children;
        while let Some(child) = children.get(frame.index) {
            frame.index += 1;
            let (key, value) = match child {
                Node::Element(element) => return Some(element),
                Node::Text(text) if children.len() > 1 && is_blank(text) => continue,
                Node::Text(text) => (TEXT.to_string(), Value::String(text.clone())),
                Node::CData(text) => (CDATA.to_string(), Value::String(text.clone())),
                Node::Comment(text) => (COMMENT.to_string(), Value::String(text.clone())),
                Node::Instruction { target, data } => {
                    (format!("?{}", target), Value::String(data.clone()))
                }
                Node::DocType => (DOCTYPE.to_string(), Value::String(doctype_value(self.source))),
            };
            self.add_node_value(&mut frame.map, &key, value);
        }
        None
    }

    /// Attribute entries (and the self-closing marker) an element's map starts with.
    fn element_attrs(&mut self, element: &Element) -> Map {
        for (key, _) in &element.attrs {
            if let Some(prefix) = key.strip_prefix(XMLNS_PREFIX) {
                self.namespaces.insert(prefix.to_string());
            }
        }
        let mut attrs = Map::new();
        for (key, value) in &element.attrs {
            self.add_node_value(&mut attrs, &format!("-{}", key), Value::String(value.clone()));
        }
        let typed_empty = attrs.len() == 1 && (is_flag(&attrs, STRING) || is_flag(&attrs, NULL));
        if element.self_closing && !attrs.contains_key(SELF_CLOSING) && !typed_empty {
            attrs.insert(SELF_CLOSING.to_string(), Value::from("true"));
        }
        attrs
    }

    fn add_node_value(&mut self, map: &mut Map, name: &str, value: Value) {
        let Some(mapped) = self.config.names.apply(name, &self.namespaces) else {
            return;
        };
        let key = unescape_name(&mapped);
        if !map.contains_key(&key) {
            let value = self.node_map(get_value(name, value, self.config.mode));
            map.insert(key, value);
            return;
        }
        let counter = match key.as_str() {
            TEXT => Some(0),
            COMMENT => Some(1),
            CDATA => Some(2),
            _ => None,
        };
        match counter {
            Some(slot) => {
                let numbered = format!("{}{}", key, self.unique_ids[slot]);
                self.unique_ids[slot] += 1;
                let value = self.node_map(get_value(name, value, self.config.mode));
                map.insert(numbered, value);
            }
            None => add_repeated(map, &key, value, self.config.mode),
        }
    }

    fn node_map(&self, value: Value) -> Value {
        match value {
            Value::List(_) => value,
            other if self.config.make_arrays => Value::List(vec![other]),
            other => other,
        }
    }
}

/// Append a repeated element to the list under `name`.
///
/// Entries added after the first occurrence of `name` are moved into the
/// list as `{"#item": {key: value}}` wrappers so document order survives.
fn add_repeated(map: &mut Map, name: &str, value: Value, mode: XmlMode) {
    let mut interleaved = Vec::new();
    while let Some((last, _)) = map.last() {
        if last == name {
            break;
        }
        if let Some((key, moved)) = map.pop() {
            let mut inner = Map::new();
            inner.insert(key, moved);
            let mut item = Map::new();
            item.insert(ITEM.to_string(), Value::Map(inner));
            interleaved.push(Value::Map(item));
        }
    }
    interleaved.reverse();

    let Some(slot) = map.get_mut(name) else {
        return;
    };
    let mut items = match std::mem::replace(slot, Value::Null) {
        Value::List(items) => items,
        other => vec![other],
    };
    items.extend(interleaved);
    match get_value(name, value, mode) {
        Value::List(mut list) if !list.is_empty() => items.push(list.swap_remove(0)),
        other => items.push(other),
    }
    *slot = Value::List(items);
}

/// Collapse `{"#text": v}` (and `{"element": v}` when converting) to `v`;
/// attribute values have their entities resolved.
fn get_value(name: &str, value: Value, mode: XmlMode) -> Value {
    let local = match value {
        Value::Map(map) if map.len() == 1 => {
            let unwrap = map
                .keys()
                .next()
                .map_or(false, |key| key == TEXT || (mode == XmlMode::Convert && key == ELEMENT));
            if unwrap {
                map.into_iter().next().map_or(Value::Null, |(_, v)| v)
            } else {
                Value::Map(map)
            }
        }
        other => other,
    };
    match local {
        Value::String(text) if is_attribute(name) => Value::String(unescape_xml(&text)),
        other => other,
    }
}

fn is_flag(map: &Map, key: &str) -> bool {
    map.get(key).and_then(Value::as_str) == Some("true")
}

fn check_number_and_boolean(mut map: Map, name: &str) -> XmlResult<Value> {
    let has_text = map.contains_key(TEXT);
    let number = has_text && is_flag(&map, NUMBER);
    let boolean = has_text && is_flag(&map, BOOLEAN);
    if number {
        map.shift_remove(NUMBER);
        if let Some(text) = map.get_mut(TEXT) {
            let literal = text.to_string();
            *text = parse_number(&literal).map_err(|_| XmlError::InvalidValue {
                message: format!("element <{}> is flagged as a number but holds '{}'", name, literal),
            })?;
        }
    }
    if boolean {
        map.shift_remove(BOOLEAN);
        if let Some(text) = map.get_mut(TEXT) {
            *text = Value::Bool(parse_bool(&text.to_string()));
        }
    }
    Ok(check_array(map, name))
}

fn check_array(map: Map, name: &str) -> Value {
    if is_flag(&map, EMPTY_ARRAY) {
        let mut local = map;
        local.shift_remove(EMPTY_ARRAY);
        return if local.len() == 1 && is_flag(&local, ARRAY) {
            Value::List(vec![Value::List(Vec::new())])
        } else if local.is_empty() {
            Value::List(Vec::new())
        } else {
            Value::Map(local)
        };
    }
    let array = is_flag(&map, ARRAY);
    let mut local = check_null_and_string(map);
    if !array {
        return Value::Map(local);
    }
    local.shift_remove(ARRAY);
    local.shift_remove(SELF_CLOSING);
    let first_is_name = local.keys().next().map_or(false, |key| key == name);
    let item = if first_is_name {
        let first = local.shift_remove_index(0).map_or(Value::Null, |(_, v)| v);
        get_value(name, first, XmlMode::Convert)
    } else {
        get_value(name, Value::Map(local), XmlMode::Convert)
    };
    Value::List(vec![item])
}

fn check_null_and_string(mut map: Map) -> Map {
    let has_text = map.contains_key(TEXT);
    if is_flag(&map, NULL) {
        map.shift_remove(NULL);
        if !has_text {
            map.insert(TEXT.to_string(), Value::Null);
        }
    }
    if is_flag(&map, STRING) {
        map.shift_remove(STRING);
        if !has_text {
            map.insert(TEXT.to_string(), Value::from(""));
        }
    }
    map
}

/// Attach declaration directives, or unwrap a synthetic `root` document.
fn check_result(xml: &str, document: &Document, result: Value, mode: XmlMode) -> Value {
    let mut map = match result {
        Value::Map(map) => map,
        other => return other,
    };
    let has_header = xml.starts_with(XML_HEADER);
    let standalone = document.standalone.as_ref().filter(|_| has_header);
    let encoding = document
        .encoding
        .as_ref()
        .filter(|e| !e.eq_ignore_ascii_case(DEFAULT_ENCODING));

    if let Some(encoding) = encoding {
        map.insert(ENCODING.to_string(), Value::from(encoding.as_str()));
        if let Some(standalone) = standalone {
            map.insert(STANDALONE.to_string(), Value::from(standalone.as_str()));
        }
    } else if let Some(standalone) = standalone {
        map.insert(STANDALONE.to_string(), Value::from(standalone.as_str()));
    } else if mode == XmlMode::Convert && is_synthetic_root(&map) {
        if has_header {
            return map.into_iter().next().map_or(Value::Null, |(_, v)| v);
        }
        map.insert(OMIT_DECLARATION.to_string(), Value::from("yes"));
    } else if !has_header {
        map.insert(OMIT_DECLARATION.to_string(), Value::from("yes"));
    }
    Value::Map(map)
}

fn is_synthetic_root(map: &Map) -> bool {
    matches!(
        map.first(),
        Some((key, Value::List(_) | Value::Map(_))) if key == ROOT
    )
}
