use clawome_core::{ActionSet, BackRef, Config, NodeRecord};
use clawome_dom::{DomNode, Document, ElementData, NodeId};
use tracing::debug;

use crate::{actions, attrs, label, state, text, xpath};

/// Result of a completed Walk pass: the flat, pre-order record sequence
/// plus whether a resource limit (`maxNodes`/`maxDepth`) cut the
/// traversal short. Per §7, hitting a limit is not an error — it is a
/// silent truncation the caller may surface in `ExtractStats`.
#[derive(Debug, Clone, Default)]
pub struct WalkOutcome {
    pub records: Vec<NodeRecord>,
    pub truncated: bool,
}

struct WalkCtx<'a> {
    doc: &'a Document,
    config: &'a Config,
    out: Vec<NodeRecord>,
    truncated: bool,
}

/// Runs the Walk stage (§4.3) against an already-Prepared document,
/// producing the flat `NodeRecord` sequence Compress consumes. Emission
/// order is a depth-first, left-to-right, pre-order traversal starting
/// from `doc.body()`'s children (the body itself is never emitted).
pub fn walk(doc: &Document, config: &Config) -> WalkOutcome {
    let mut ctx = WalkCtx { doc, config, out: Vec::new(), truncated: false };
    let body = doc.body();
    let children: Vec<NodeId> = doc.node(body).children().to_vec();
    for child in children {
        walk_node(&mut ctx, child, 0);
    }
    debug!(nodes_emitted = ctx.out.len(), truncated = ctx.truncated, "walk stage complete");
    WalkOutcome { records: ctx.out, truncated: ctx.truncated }
}

/// Whether an element is excluded from emission outright (§3: CSS
/// `display:none`/`visibility:hidden`, `aria-hidden="true"`,
/// `input[type=hidden]`, and zero-size leaves). Switchable-group members
/// are never excluded here — both the active and inactive members of a
/// group are always emitted, distinguished instead by the `selected`/
/// `hidden` state markers `state::detect_state` attaches to them.
fn is_hidden(doc: &Document, id: NodeId, tag: &str, data: &ElementData) -> bool {
    if data.switchable.is_some() {
        return false;
    }
    let aria_hidden = data.attr("aria-hidden") == Some("true");
    let type_hidden = tag == "input" && data.attr("type") == Some("hidden");
    let zero_size_leaf = data.rect.is_zero_size() && doc.node(id).children().is_empty();
    data.style.is_css_hidden() || aria_hidden || type_hidden || zero_size_leaf
}

/// Dispatches a single child: text nodes and absorbable inline elements
/// return the text they contribute to the parent's line; elements that
/// get their own `NodeRecord` return `None`, except inline-actionable
/// elements, which do both.
fn walk_node(ctx: &mut WalkCtx, id: NodeId, depth: usize) -> Option<String> {
    match ctx.doc.node(id) {
        DomNode::Text { content, .. } => Some(text::normalize_whitespace(content)),
        DomNode::Element { .. } => walk_element(ctx, id, depth),
    }
}

fn walk_element(ctx: &mut WalkCtx, id: NodeId, depth: usize) -> Option<String> {
    let (tag, data) = {
        let (tag, data) = ctx.doc.node(id).as_element()?;
        (tag.to_string(), data.clone())
    };

    if ctx.config.skip_tags.iter().any(|t| t == &tag) {
        return Some(String::new());
    }
    if is_hidden(ctx.doc, id, &tag, &data) {
        return Some(String::new());
    }
    if depth > ctx.config.max_depth || ctx.out.len() >= ctx.config.max_nodes {
        if !ctx.truncated {
            debug!(depth, max_depth = ctx.config.max_depth, nodes_emitted = ctx.out.len(), "max_depth/max_nodes hit; truncating walk");
        }
        ctx.truncated = true;
        return Some(String::new());
    }

    let action_set = actions::detect_actions(ctx.doc, &tag, &data, ctx.config);

    if tag == "svg" {
        emit_svg_leaf(ctx, id, &tag, &data, depth, action_set);
        return None;
    }

    if tag == "tr" {
        emit_table_row(ctx, id, &tag, &data, depth);
        return None;
    }

    let children: Vec<NodeId> = ctx.doc.node(id).children().to_vec();
    let is_inline = ctx.config.inline_tags.iter().any(|t| t == &tag);
    let has_block_child = children.iter().any(|&c| {
        ctx.doc
            .node(c)
            .as_element()
            .is_some_and(|(t, _)| !ctx.config.inline_tags.iter().any(|it| it == t))
    });

    if is_inline && !has_block_child {
        let surfaced_attrs = attrs::format_surfaced_attrs(&tag, &data, ctx.config);
        if action_set.is_empty() && data.icon.is_none() && surfaced_attrs.is_empty() {
            return Some(collect_children_text(ctx, &children, depth + 1));
        }
        if !action_set.is_empty() {
            let collected = collect_children_text(ctx, &children, depth + 1);
            let computed_label = label::compute_label(&data, &collected);
            push_leaf_record(ctx, id, &tag, &data, depth, action_set, collected.clone(), computed_label.clone(), true);
            let fragment = if computed_label.is_empty() { collected } else { computed_label };
            return Some(format!("⟨{fragment}⟩"));
        }
        // Icon-classified or attribute-bearing inline element with no
        // actions: falls through to emit_block below so the icon label
        // or surfaced attrs aren't silently absorbed away (§4.3 item 4).
    }

    emit_block(ctx, id, &tag, &data, depth, action_set, children);
    None
}

/// Joins the text contributed by a set of children, skipping children
/// that were emitted as their own records.
fn collect_children_text(ctx: &mut WalkCtx, children: &[NodeId], depth: usize) -> String {
    let mut parts = Vec::new();
    for &child in children {
        if let Some(part) = walk_node(ctx, child, depth) {
            parts.push(part);
        }
    }
    text::join_parts(parts)
}

/// Reserves a record slot before recursing into children so emission
/// order stays pre-order, then backfills `text`/`label` once the
/// children (which may themselves emit records) have been processed.
fn emit_block(
    ctx: &mut WalkCtx,
    id: NodeId,
    tag: &str,
    data: &ElementData,
    depth: usize,
    actions: ActionSet,
    children: Vec<NodeId>,
) {
    let slot = reserve_record(ctx, id, tag, data, depth, actions, false);
    let collected = collect_children_text(ctx, &children, depth + 1);
    let computed_label = label::compute_label(data, &collected);
    ctx.out[slot].text = collected;
    ctx.out[slot].label = computed_label;
}

fn push_leaf_record(
    ctx: &mut WalkCtx,
    id: NodeId,
    tag: &str,
    data: &ElementData,
    depth: usize,
    actions: ActionSet,
    text: String,
    label: String,
    inlined: bool,
) {
    let slot = reserve_record(ctx, id, tag, data, depth, actions, inlined);
    ctx.out[slot].text = text;
    ctx.out[slot].label = label;
}

fn reserve_record(
    ctx: &mut WalkCtx,
    id: NodeId,
    tag: &str,
    data: &ElementData,
    depth: usize,
    actions: ActionSet,
    inlined: bool,
) -> usize {
    let backref = data.backref.unwrap_or(BackRef::new(0));
    let record = NodeRecord {
        idx: ctx.out.len() as u32 + 1,
        depth: depth as u32,
        tag: tag.to_string(),
        attrs: attrs::format_surfaced_attrs(tag, data, ctx.config),
        text: String::new(),
        label: String::new(),
        actions,
        state: state::detect_state(tag, data, ctx.config),
        selector: format!("[data-clawome-ref=\"{}\"]", backref.get()),
        xpath: xpath::build_xpath(ctx.doc, id),
        inlined,
        backref,
    };
    ctx.out.push(record);
    ctx.out.len() - 1
}

/// `<svg>` subtrees are never walked element-by-element: the icon name
/// Prepare classified becomes the whole record's text, `[icon: name]`;
/// an unclassified icon leaves the text empty.
fn emit_svg_leaf(ctx: &mut WalkCtx, id: NodeId, tag: &str, data: &ElementData, depth: usize, actions: ActionSet) {
    let text = match &data.icon {
        Some(name) => format!("[icon: {name}]"),
        None => String::new(),
    };
    push_leaf_record(ctx, id, tag, data, depth, actions, text.clone(), text, false);
}

/// Always emits exactly one record for a `<tr>`. A cell with no
/// actionable descendant contributes its (capped) text, joined with
/// `" | "`; a cell that does contribute an empty placeholder instead and
/// is walked normally, so its interactive descendants still get their
/// own identifiers as children of the row.
fn emit_table_row(ctx: &mut WalkCtx, id: NodeId, tag: &str, data: &ElementData, depth: usize) {
    let slot = reserve_record(ctx, id, tag, data, depth, ActionSet::empty(), false);
    let cells: Vec<NodeId> = ctx.doc.node(id).children().to_vec();
    let mut parts = Vec::with_capacity(cells.len());
    for cell in cells {
        if subtree_has_actions(ctx, cell) {
            walk_node(ctx, cell, depth + 1);
            parts.push(String::new());
        } else {
            let cell_text = text::truncate_chars(&subtree_text(ctx.doc, cell), ctx.config.max_text_len);
            parts.push(cell_text);
        }
    }
    let joined = parts.into_iter().filter(|t| !t.trim().is_empty()).collect::<Vec<_>>().join(" | ");
    ctx.out[slot].text = joined.clone();
    ctx.out[slot].label = joined;
}

fn subtree_has_actions(ctx: &WalkCtx, id: NodeId) -> bool {
    let Some((tag, data)) = ctx.doc.node(id).as_element() else {
        return false;
    };
    if !actions::detect_actions(ctx.doc, tag, data, ctx.config).is_empty() {
        return true;
    }
    ctx.doc.node(id).children().iter().any(|&child| subtree_has_actions(ctx, child))
}

fn subtree_text(doc: &Document, id: NodeId) -> String {
    match doc.node(id) {
        DomNode::Text { content, .. } => text::normalize_whitespace(content),
        DomNode::Element { .. } => {
            let parts: Vec<String> = doc.node(id).children().iter().map(|&c| subtree_text(doc, c)).collect();
            text::join_parts(parts)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prepared(doc: &mut Document) -> Config {
        let config = Config::default();
        crate::prepare::prepare(doc, &config);
        config
    }

    #[test]
    fn svg_icon_becomes_a_single_leaf_record() {
        let mut doc = Document::new();
        let body = doc.body();
        let svg = doc.create_element("svg", body);
        let r#use = doc.create_element("use", svg);
        doc.set_attr(r#use, "href", "#icon-close");
        let config = prepared(&mut doc);
        let outcome = walk(&doc, &config);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].tag, "svg");
        assert_eq!(outcome.records[0].text, "[icon: close]");
    }

    #[test]
    fn non_interactive_table_row_collapses_to_one_record() {
        let mut doc = Document::new();
        let body = doc.body();
        let table = doc.create_element("table", body);
        let row = doc.create_element("tr", table);
        let td1 = doc.create_element("td", row);
        doc.create_text("Name", td1);
        let td2 = doc.create_element("td", row);
        doc.create_text("Alice", td2);
        let config = prepared(&mut doc);
        let outcome = walk(&doc, &config);
        let row_record = outcome.records.iter().find(|r| r.tag == "tr").unwrap();
        assert_eq!(row_record.text, "Name | Alice");
        assert!(!outcome.records.iter().any(|r| r.tag == "td"));
    }

    #[test]
    fn table_row_with_a_clickable_cell_is_not_collapsed() {
        let mut doc = Document::new();
        let body = doc.body();
        let table = doc.create_element("table", body);
        let row = doc.create_element("tr", table);
        let td = doc.create_element("td", row);
        let button = doc.create_element("button", td);
        doc.create_text("Delete", button);
        let config = prepared(&mut doc);
        let outcome = walk(&doc, &config);
        assert!(outcome.records.iter().any(|r| r.tag == "tr"));
        assert!(outcome.records.iter().any(|r| r.tag == "button"));
    }

    #[test]
    fn table_cell_text_is_capped_at_max_text_len() {
        let mut doc = Document::new();
        let body = doc.body();
        let table = doc.create_element("table", body);
        let row = doc.create_element("tr", table);
        let td = doc.create_element("td", row);
        doc.create_text("a".repeat(20), td);
        let mut config = prepared(&mut doc);
        config.max_text_len = 5;
        let outcome = walk(&doc, &config);
        let row_record = outcome.records.iter().find(|r| r.tag == "tr").unwrap();
        assert_eq!(row_record.text, format!("{}…", "a".repeat(5)));
    }

    #[test]
    fn plain_inline_span_is_absorbed_into_parent_text() {
        let mut doc = Document::new();
        let body = doc.body();
        let p = doc.create_element("p", body);
        doc.create_text("Hello ", p);
        let span = doc.create_element("span", p);
        doc.create_text("world", span);
        let config = prepared(&mut doc);
        let outcome = walk(&doc, &config);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].text, "Hello world");
    }

    #[test]
    fn icon_classified_inline_element_is_emitted_not_absorbed() {
        let mut doc = Document::new();
        let body = doc.body();
        let i = doc.create_element("i", body);
        doc.add_class(i, "fa");
        doc.add_class(i, "fa-search");
        let config = prepared(&mut doc);
        let outcome = walk(&doc, &config);
        let icon_record = outcome.records.iter().find(|r| r.tag == "i").unwrap();
        assert_eq!(icon_record.text, "[icon: search]");
    }

    #[test]
    fn inline_element_with_surfaced_attrs_is_emitted_not_absorbed() {
        let mut doc = Document::new();
        let body = doc.body();
        let span = doc.create_element("span", body);
        doc.set_attr(span, "id", "foo");
        let config = prepared(&mut doc);
        let outcome = walk(&doc, &config);
        assert!(outcome.records.iter().any(|r| r.tag == "span" && r.attrs.contains("id=\"foo\"")));
    }

    #[test]
    fn inline_actionable_element_gets_its_own_record_and_a_bracketed_fragment() {
        let mut doc = Document::new();
        let body = doc.body();
        let p = doc.create_element("p", body);
        doc.create_text("See ", p);
        let a = doc.create_element("a", p);
        doc.set_attr(a, "href", "/more");
        doc.create_text("more", a);
        let config = prepared(&mut doc);
        let outcome = walk(&doc, &config);
        let paragraph = outcome.records.iter().find(|r| r.tag == "p").unwrap();
        assert!(paragraph.text.contains("⟨more⟩"));
        let anchor = outcome.records.iter().find(|r| r.tag == "a").unwrap();
        assert!(anchor.inlined);
        assert_eq!(anchor.text, "more");
    }

    #[test]
    fn switchable_group_emits_every_member_marked_selected_or_hidden() {
        let mut doc = Document::new();
        let body = doc.body();
        let tabs = doc.create_element("div", body);
        let tab1 = doc.create_element("div", tabs);
        doc.add_class(tab1, "tab-panel");
        doc.create_text("Tab one", tab1);
        let tab2 = doc.create_element("div", tabs);
        doc.add_class(tab2, "tab-panel");
        doc.create_text("Tab two", tab2);
        doc.hide(tab2);
        let config = prepared(&mut doc);
        let outcome = walk(&doc, &config);
        let texts: Vec<&str> = outcome.records.iter().map(|r| r.text.as_str()).collect();
        assert!(texts.contains(&"Tab one"));
        assert!(texts.contains(&"Tab two"));
        let active = outcome.records.iter().find(|r| r.text == "Tab one").unwrap();
        assert_eq!(active.state.get("selected"), Some("true"));
        let inactive = outcome.records.iter().find(|r| r.text == "Tab two").unwrap();
        assert_eq!(inactive.state.get("hidden"), Some("true"));
    }

    #[test]
    fn max_nodes_truncates_and_reports_it() {
        let mut doc = Document::new();
        let body = doc.body();
        for i in 0..10 {
            let div = doc.create_element("div", body);
            doc.create_text(format!("item {i}"), div);
        }
        let mut config = prepared(&mut doc);
        config.max_nodes = 3;
        let outcome = walk(&doc, &config);
        assert_eq!(outcome.records.len(), 3);
        assert!(outcome.truncated);
    }

    #[test]
    fn max_depth_truncates_deep_subtrees() {
        let mut doc = Document::new();
        let body = doc.body();
        let mut current = body;
        for _ in 0..5 {
            current = doc.create_element("div", current);
        }
        let mut config = prepared(&mut doc);
        config.max_depth = 1;
        let outcome = walk(&doc, &config);
        assert!(outcome.truncated);
        assert!(outcome.records.iter().all(|r| r.depth <= 1));
    }
}
