use std::collections::HashMap;

use clawome_core::Config;
use clawome_dom::{Document, NodeId, Selector, SwitchState};
use tracing::debug;

use crate::icon;

/// Diagnostics returned alongside a completed Prepare pass. Not part of
/// the wire contract; useful for logging and for tests that want to
/// assert Prepare actually found something.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrepareReport {
    pub elements_tagged: usize,
    pub clones_hidden: usize,
    pub icons_classified: usize,
    pub switchable_groups: usize,
    pub clickable_direct: usize,
    pub clickable_delegated: usize,
    pub clickable_propagated: usize,
    pub hover_rules_harvested: usize,
    pub inaccessible_stylesheets: usize,
}

/// Runs every Prepare rule from §4.2 against `doc`, in the order the
/// spec lists them: back-reference assignment, carousel cloning, icon
/// classification, switchable-group detection, click-listener
/// discovery, hover-pointer rule harvest.
pub fn prepare(doc: &mut Document, config: &Config) -> PrepareReport {
    let mut report = PrepareReport::default();

    report.elements_tagged = assign_backrefs(doc);
    report.clones_hidden = hide_clones(doc, config);
    report.icons_classified = classify_icons(doc, config);
    report.switchable_groups = detect_switchable_groups(doc, config);

    let (direct, delegated, propagated) = discover_clickable(doc, config);
    report.clickable_direct = direct;
    report.clickable_delegated = delegated;
    report.clickable_propagated = propagated;

    let (harvested, inaccessible) = harvest_hover_rules(doc);
    report.hover_rules_harvested = harvested.len();
    report.inaccessible_stylesheets = inaccessible;
    doc.set_hover_pointer_selectors(harvested);

    debug!(?report, "prepare stage complete");
    report
}

fn assign_backrefs(doc: &mut Document) -> usize {
    let body = doc.body();
    let elements: Vec<NodeId> = doc
        .descendants(body)
        .into_iter()
        .filter(|&id| doc.node(id).as_element().is_some())
        .collect();
    let count = elements.len();
    for id in elements {
        let backref = doc.next_backref();
        if let Some(data) = doc.node_mut(id).as_element_mut() {
            data.backref = Some(backref);
        }
    }
    count
}

fn hide_clones(doc: &mut Document, config: &Config) -> usize {
    let body = doc.body();
    let mut hidden = 0;
    for raw in &config.clone_selectors {
        let selector = Selector::parse(raw);
        for id in doc.query_selector_all(body, &selector) {
            doc.hide(id);
            hidden += 1;
        }
    }
    hidden
}

fn classify_icons(doc: &mut Document, config: &Config) -> usize {
    let body = doc.body();
    let mut classified = 0;
    for id in doc.descendants(body) {
        let Some((_, data)) = doc.node(id).as_element() else {
            continue;
        };
        if data.icon.is_some() {
            continue;
        }
        if data.style.is_css_hidden() {
            continue;
        }
        if data.attr("aria-label").is_some() {
            continue;
        }
        let own_text = direct_text(doc, id);
        if !own_text.trim().is_empty() {
            continue;
        }

        let name = icon::icon_from_class_prefix(data, config)
            .or_else(|| icon::icon_from_material_class(data, &own_text, config))
            .or_else(|| icon::icon_from_svg_descendant(doc, id))
            .or_else(|| {
                let ancestor_budget = if data.clickable_flag || data.onclick { 4 } else { 1 };
                icon::icon_from_ancestor_keyword(doc, id, config, ancestor_budget)
            });

        let Some(name) = name else { continue };

        let is_small = (data.rect.width <= config.icon_max_size
            && data.rect.height <= config.icon_max_size)
            || doc.node(id).children().is_empty();
        if !is_small {
            continue;
        }

        if let Some(data) = doc.node_mut(id).as_element_mut() {
            data.icon = Some(name);
        }
        classified += 1;
    }
    classified
}

fn direct_text(doc: &Document, id: NodeId) -> String {
    doc.node(id)
        .children()
        .iter()
        .filter_map(|&child| doc.node(child).text_content())
        .collect::<Vec<_>>()
        .join("")
}

/// Partitions the children of parents that have at least one hidden
/// child into `(tag, normalized-class)` buckets; buckets with >=2
/// members and a non-empty key, containing both visible and hidden
/// members, become a switchable group.
fn detect_switchable_groups(doc: &mut Document, config: &Config) -> usize {
    let body = doc.body();
    let mut groups = 0;
    let parents: Vec<NodeId> = doc.descendants(body);
    for parent in parents {
        let children = doc.node(parent).children().to_vec();
        if children.is_empty() {
            continue;
        }
        let has_hidden_child = children.iter().any(|&c| {
            doc.node(c)
                .as_element()
                .is_some_and(|(_, d)| d.style.is_css_hidden())
        });
        if !has_hidden_child {
            continue;
        }

        let mut buckets: HashMap<String, Vec<NodeId>> = HashMap::new();
        for &child in &children {
            if let Some((tag, data)) = doc.node(child).as_element() {
                let key = bucket_key(tag, data, config);
                if !key.is_empty() {
                    buckets.entry(key).or_default().push(child);
                }
            }
        }

        for members in buckets.into_values() {
            if members.len() < 2 {
                continue;
            }
            let (visible, hidden): (Vec<NodeId>, Vec<NodeId>) = members
                .iter()
                .partition(|&&id| {
                    !doc.node(id)
                        .as_element()
                        .is_some_and(|(_, d)| d.style.is_css_hidden())
                });
            if visible.is_empty() || hidden.is_empty() {
                continue;
            }
            groups += 1;
            for id in visible {
                if let Some(data) = doc.node_mut(id).as_element_mut() {
                    data.switchable = Some(SwitchState::Active);
                }
            }
            for id in hidden {
                if let Some(data) = doc.node_mut(id).as_element_mut() {
                    data.switchable = Some(SwitchState::Inactive);
                }
            }
        }
    }
    groups
}

fn bucket_key(tag: &str, data: &clawome_dom::ElementData, config: &Config) -> String {
    let mut classes: Vec<&str> = data
        .classes
        .iter()
        .map(String::as_str)
        .filter(|c| !config.state_classes.iter().any(|s| s == c))
        .collect();
    classes.sort_unstable();
    format!("{tag}|{}", classes.join("."))
}

/// Click-listener discovery: elements carrying a recorded direct
/// listener are marked clickable; jQuery-style delegation registrations
/// are resolved against their concrete targets; clickability then
/// propagates from a marked list-container parent to non-semantic block
/// children (list/menu rows are usually the real targets).
fn discover_clickable(doc: &mut Document, _config: &Config) -> (usize, usize, usize) {
    let body = doc.body();
    let mut direct = 0;
    for id in doc.descendants(body) {
        if doc.listeners.has_listener(id) {
            if let Some(data) = doc.node_mut(id).as_element_mut() {
                if !data.clickable_flag {
                    data.clickable_flag = true;
                    direct += 1;
                }
            }
        }
    }

    let delegations: Vec<(NodeId, Selector)> = doc
        .delegations
        .iter()
        .map(|d| (d.root, d.delegation_selector.clone()))
        .collect();
    let mut delegated = 0;
    for (root, selector) in delegations {
        if selector.raw().is_empty() {
            // A malformed delegation selector; tolerate and move on (§4.2, §7).
            continue;
        }
        for target in doc.query_selector_all(root, &selector) {
            if let Some(data) = doc.node_mut(target).as_element_mut() {
                if !data.clickable_flag {
                    data.clickable_flag = true;
                    delegated += 1;
                }
            }
        }
    }

    const SEMANTIC_BLOCK_TAGS: &[&str] = &["a", "button", "input", "script", "style"];
    let marked_parents: Vec<NodeId> = doc
        .descendants(body)
        .into_iter()
        .filter(|&id| {
            doc.node(id)
                .as_element()
                .is_some_and(|(_, d)| d.clickable_flag)
        })
        .collect();
    let mut propagated = 0;
    for parent in marked_parents {
        let children: Vec<NodeId> = doc
            .node(parent)
            .children()
            .iter()
            .copied()
            .filter(|&c| {
                doc.node(c).as_element().is_some_and(|(tag, data)| {
                    !SEMANTIC_BLOCK_TAGS.contains(&tag)
                        && !data.style.is_css_hidden()
                        && !data.rect.is_zero_size()
                })
            })
            .collect();
        if children.len() < 2 {
            continue;
        }
        for child in children {
            if let Some(data) = doc.node_mut(child).as_element_mut() {
                if !data.clickable_flag {
                    data.clickable_flag = true;
                    propagated += 1;
                }
            }
        }
    }

    (direct, delegated, propagated)
}

/// Harvests every accessible stylesheet's `:hover { cursor: pointer }`
/// selectors (with `:hover` already stripped), tolerating cross-origin
/// or otherwise unreadable sheets by silently skipping them (§4.2, §7).
fn harvest_hover_rules(doc: &Document) -> (Vec<Selector>, usize) {
    let mut harvested = Vec::new();
    let mut inaccessible = 0;
    for sheet in &doc.stylesheets {
        if !sheet.accessible {
            inaccessible += 1;
            continue;
        }
        for raw in &sheet.hover_pointer_selectors {
            harvested.push(Selector::parse(raw));
        }
    }
    (harvested, inaccessible)
}
