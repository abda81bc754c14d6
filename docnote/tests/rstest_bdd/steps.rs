//! Step definitions for the cascade and group ordering scenarios.

use anyhow::{Result, anyhow, ensure};
use docnote::{ChildGroups, DocnoteGroup, MarkupIdent};
use rstest_bdd_macros::{given, then, when};
use serde_json::{Value, json};
use test_helpers::nodes::chain;

use crate::fixtures::{CascadeState, GroupState};

fn push_node(state: &CascadeState, node: Value) {
    let mut nodes = state.nodes.get().unwrap_or_default();
    nodes.push(node);
    state.nodes.set(nodes);
}

fn split_names(list: &str) -> Vec<String> {
    list.split(',').map(|name| name.trim().to_owned()).collect()
}

fn resolved(state: &CascadeState) -> Result<docnote::Stackables> {
    state
        .resolved
        .get()
        .ok_or_else(|| anyhow!("the symbol chain has not been resolved"))
}

#[given("a symbol with markup language {lang}")]
fn symbol_with_markup(cascade_state: &CascadeState, lang: String) {
    push_node(cascade_state, json!({ "markup_lang": lang }));
}

#[given("a symbol with no settings")]
fn symbol_without_settings(cascade_state: &CascadeState) {
    push_node(cascade_state, json!({}));
}

#[given("an enclosing scope with markup language {lang}")]
fn scope_with_markup(cascade_state: &CascadeState, lang: String) {
    push_node(cascade_state, json!({ "markup_lang": lang }));
}

#[given("an enclosing scope that enforces known languages")]
fn scope_enforcing_languages(cascade_state: &CascadeState) {
    push_node(cascade_state, json!({ "enforce_known_lang": true }));
}

#[given("an enclosing scope in group {group}")]
fn scope_in_group(cascade_state: &CascadeState, group: String) {
    push_node(cascade_state, json!({ "parent_group_name": group }));
}

#[when("the symbol chain is resolved")]
fn resolve_chain(cascade_state: &CascadeState) -> Result<()> {
    let nodes = cascade_state.nodes.get().unwrap_or_default();
    let symbol_chain = chain(nodes)?;
    cascade_state.resolved.set(symbol_chain.resolve());
    Ok(())
}

#[then("the effective markup language is {lang}")]
fn effective_markup(cascade_state: &CascadeState, lang: String) -> Result<()> {
    let actual = resolved(cascade_state)?.markup_lang();
    ensure!(
        actual == Some(MarkupIdent::from(lang.as_str())),
        "expected markup language {lang}, resolved {actual:?}"
    );
    Ok(())
}

#[then("known languages are enforced")]
fn languages_enforced(cascade_state: &CascadeState) -> Result<()> {
    let actual = resolved(cascade_state)?.enforce_known_lang();
    ensure!(actual == Some(true), "expected enforcement, resolved {actual:?}");
    Ok(())
}

#[then("no settings are resolved")]
fn nothing_resolved(cascade_state: &CascadeState) -> Result<()> {
    let actual = resolved(cascade_state)?;
    ensure!(actual.is_empty(), "expected no settings, resolved {actual:?}");
    Ok(())
}

#[given("a parent declaring groups {names}")]
fn parent_groups(group_state: &GroupState, names: String) -> Result<()> {
    let groups = ChildGroups::new(split_names(&names).into_iter().map(DocnoteGroup::new))
        .map_err(|err| anyhow!(err.to_string()))?;
    group_state.groups.set(groups);
    Ok(())
}

#[when("children in groups {names} are ordered")]
fn order_children(group_state: &GroupState, names: String) -> Result<()> {
    let groups = group_state
        .groups
        .get()
        .ok_or_else(|| anyhow!("no groups declared"))?;
    let children = split_names(&names);
    let ordered = groups.order_children(
        children
            .iter()
            .map(|name| (Some(name.as_str()), name.clone())),
    );
    group_state.ordered.set(
        ordered
            .ordered
            .iter()
            .map(|(group, _)| group.name().to_owned())
            .collect(),
    );
    group_state
        .unmatched
        .set(ordered.unmatched.into_iter().map(|(_, child)| child).collect());
    Ok(())
}

#[then("the rendered group order is {names}")]
fn rendered_order(group_state: &GroupState, names: String) -> Result<()> {
    let actual = group_state.ordered.get().unwrap_or_default();
    let expected = split_names(&names);
    ensure!(actual == expected, "expected {expected:?}, rendered {actual:?}");
    Ok(())
}

#[then("the unmatched groups are {names}")]
fn unmatched_groups(group_state: &GroupState, names: String) -> Result<()> {
    let actual = group_state.unmatched.get().unwrap_or_default();
    let expected = split_names(&names);
    ensure!(actual == expected, "expected {expected:?}, unmatched {actual:?}");
    Ok(())
}
